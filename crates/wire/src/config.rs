//! Wire configuration
//!
//! Read from environment variables, falling back to defaults for anything
//! unset or unparseable.

/// Default upper bound on decoded field height
pub const DEFAULT_MAX_HEIGHT: usize = 1024;

/// Codec configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireConfig {
    /// Largest height accepted when decoding
    pub max_height: usize,
    /// Emit indented JSON
    pub pretty: bool,
    /// Include the FNV-1a board hash in encoded documents
    pub include_hash: bool,
}

impl Default for WireConfig {
    fn default() -> Self {
        Self {
            max_height: DEFAULT_MAX_HEIGHT,
            pretty: false,
            include_hash: true,
        }
    }
}

impl WireConfig {
    /// Create from environment variables
    ///
    /// - `TETRA_FIELD_MAX_HEIGHT`: decode height limit (default 1024)
    /// - `TETRA_FIELD_PRETTY`: `1` or `true` for indented JSON
    /// - `TETRA_FIELD_HASH`: `0` or `false` to omit the board hash
    pub fn from_env() -> Self {
        use std::env;

        let max_height = env::var("TETRA_FIELD_MAX_HEIGHT")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(DEFAULT_MAX_HEIGHT);

        let pretty = env::var("TETRA_FIELD_PRETTY")
            .map(|v| parse_flag(&v).unwrap_or(false))
            .unwrap_or(false);

        let include_hash = env::var("TETRA_FIELD_HASH")
            .map(|v| parse_flag(&v).unwrap_or(true))
            .unwrap_or(true);

        Self {
            max_height,
            pretty,
            include_hash,
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_parsing() {
        assert_eq!(parse_flag("1"), Some(true));
        assert_eq!(parse_flag(" TRUE "), Some(true));
        assert_eq!(parse_flag("off"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn from_env_reads_overrides() {
        // Only this test touches these variables.
        std::env::set_var("TETRA_FIELD_MAX_HEIGHT", "40");
        std::env::set_var("TETRA_FIELD_PRETTY", "true");
        std::env::set_var("TETRA_FIELD_HASH", "0");
        let config = WireConfig::from_env();
        std::env::remove_var("TETRA_FIELD_MAX_HEIGHT");
        std::env::remove_var("TETRA_FIELD_PRETTY");
        std::env::remove_var("TETRA_FIELD_HASH");

        assert_eq!(
            config,
            WireConfig {
                max_height: 40,
                pretty: true,
                include_hash: false,
            }
        );
    }
}
