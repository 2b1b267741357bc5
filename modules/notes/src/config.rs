use std::env;
use std::path::PathBuf;

/// Environment variable names - single source of truth
pub mod env_vars {
    pub const PORT: &str = "NOTES_PORT";
    pub const HOST: &str = "NOTES_HOST";
    /// Path of the JSON file holding the note collection.
    pub const NOTES_FILE: &str = "NOTES_FILE";
}

/// Default values
pub mod defaults {
    pub const PORT: u16 = 3000;
    pub const HOST: &str = "0.0.0.0";
    pub const NOTES_FILE: &str = "notes.json";
}

/// Returns the absolute path to the notes-service crate directory.
/// Resolved at compile time so the default notes file sits next to the
/// service sources regardless of the working directory at runtime.
pub fn service_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Get the default notes file path
pub fn default_notes_file() -> PathBuf {
    service_dir().join(defaults::NOTES_FILE)
}

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub notes_file: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup (the environment in production)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup(env_vars::PORT) {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                log::warn!(
                    "{}={:?} is not a valid port, using {}",
                    env_vars::PORT,
                    raw,
                    defaults::PORT
                );
                defaults::PORT
            }),
            None => defaults::PORT,
        };

        Self {
            host: lookup(env_vars::HOST)
                .filter(|h| !h.trim().is_empty())
                .unwrap_or_else(|| defaults::HOST.to_string()),
            port,
            notes_file: lookup(env_vars::NOTES_FILE)
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(default_notes_file),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[]));
        assert_eq!(config.port, 3000);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.notes_file, service_dir().join("notes.json"));
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("NOTES_PORT", "8081"),
            ("NOTES_HOST", "127.0.0.1"),
            ("NOTES_FILE", "/tmp/my-notes.json"),
        ]));
        assert_eq!(config.port, 8081);
        assert_eq!(config.bind_addr(), "127.0.0.1:8081");
        assert_eq!(config.notes_file, PathBuf::from("/tmp/my-notes.json"));
    }

    #[test]
    fn test_invalid_port_falls_back() {
        let config = Config::from_lookup(lookup_from(&[("NOTES_PORT", "not-a-port")]));
        assert_eq!(config.port, defaults::PORT);
    }
}
