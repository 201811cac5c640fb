//! Stable board hash
//!
//! `DefaultHasher` output is not guaranteed stable across Rust versions or
//! platforms, so persisted hashes use 64-bit FNV-1a over the wire encoding.

use std::hash::Hasher;

use tetra_field_core::Field;

#[derive(Debug, Clone)]
struct Fnv1aHasher {
    state: u64,
}

impl Fnv1aHasher {
    const OFFSET_BASIS: u64 = 0xcbf29ce484222325;
    const PRIME: u64 = 0x100000001b3;

    fn new() -> Self {
        Self {
            state: Self::OFFSET_BASIS,
        }
    }
}

impl Hasher for Fnv1aHasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.state ^= b as u64;
            self.state = self.state.wrapping_mul(Self::PRIME);
        }
    }
}

/// FNV-1a 64 of the field's linear encoding
pub fn field_hash(field: &Field) -> u64 {
    let mut hasher = Fnv1aHasher::new();
    for symbol in field.cells() {
        hasher.write_u8(symbol.as_byte());
    }
    hasher.finish()
}
