//! Credential resolution for the Groq API key.
//!
//! The key is resolved exactly once at startup, from the first of:
//! an explicit value, a YAML secrets file, or the `GROQ_API_KEY`
//! environment variable. Each failure cause surfaces as its own
//! configuration error; nothing is silently swallowed.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

/// Environment variable consulted when no other source provides a key.
pub const API_KEY_ENV: &str = "GROQ_API_KEY";

/// Secrets file location relative to `$HOME`.
const SECRETS_FILE: &str = ".config/kelly/secrets.yaml";

#[derive(Debug, Deserialize)]
struct SecretsFile {
    groq_api_key: Option<String>,
}

/// Returns the default secrets file path, if a home directory is known.
pub fn default_secrets_path() -> Option<PathBuf> {
    env::var_os("HOME").map(|home| PathBuf::from(home).join(SECRETS_FILE))
}

/// Reads the API key from a YAML secrets file.
///
/// A missing file yields `Ok(None)` so resolution can fall through to the
/// environment. A file that exists but cannot be read or parsed is a
/// configuration error in its own right.
pub fn from_secrets_file(path: &Path) -> Result<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = fs::read_to_string(path).map_err(|err| {
        Error::configuration(format!(
            "secrets file {} is unreadable: {err}",
            path.display()
        ))
    })?;
    let secrets: SecretsFile = serde_yaml::from_str(&contents).map_err(|err| {
        Error::configuration(format!(
            "secrets file {} is malformed: {err}",
            path.display()
        ))
    })?;
    Ok(secrets.groq_api_key.filter(|key| !key.is_empty()))
}

fn from_env() -> Option<String> {
    env::var(API_KEY_ENV).ok().filter(|key| !key.is_empty())
}

fn resolve_parts(
    explicit: Option<String>,
    file_key: Option<String>,
    env_key: Option<String>,
) -> Result<String> {
    explicit.or(file_key).or(env_key).ok_or_else(|| {
        Error::configuration(format!(
            "API key not found: no secrets file entry and {API_KEY_ENV} not set"
        ))
    })
}

/// Resolves the API key from the available sources.
///
/// An explicitly provided key wins; otherwise the secrets file is consulted
/// (the given path, or the default under `$HOME`), then the environment.
/// An explicitly named secrets file must exist.
pub fn resolve(explicit: Option<String>, secrets_path: Option<&Path>) -> Result<String> {
    let file_key = match secrets_path {
        Some(path) => {
            if !path.exists() {
                return Err(Error::configuration(format!(
                    "secrets file {} not found",
                    path.display()
                )));
            }
            from_secrets_file(path)?
        }
        None => match default_secrets_path() {
            Some(path) => from_secrets_file(&path)?,
            None => None,
        },
    };
    resolve_parts(explicit, file_key, from_env())
}

/// User-visible instructions printed when no credential can be resolved.
pub fn remediation() -> &'static str {
    r#"To provide an API key, either:

  export GROQ_API_KEY="gsk_your_actual_key"

or create ~/.config/kelly/secrets.yaml containing:

  groq_api_key: "gsk_your_actual_key"

Get a key at: https://console.groq.com/keys"#
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn explicit_key_wins() {
        let key = resolve_parts(
            Some("gsk_explicit".to_string()),
            Some("gsk_file".to_string()),
            Some("gsk_env".to_string()),
        )
        .unwrap();
        assert_eq!(key, "gsk_explicit");
    }

    #[test]
    fn file_key_beats_env() {
        let key = resolve_parts(None, Some("gsk_file".to_string()), Some("gsk_env".to_string()))
            .unwrap();
        assert_eq!(key, "gsk_file");
    }

    #[test]
    fn absent_everywhere_is_configuration_error() {
        let err = resolve_parts(None, None, None).unwrap_err();
        assert!(err.is_configuration());
        assert!(err.to_string().contains(API_KEY_ENV));
    }

    #[test]
    fn secrets_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("secrets.yaml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "groq_api_key: \"gsk_from_file\"").unwrap();

        let key = from_secrets_file(&path).unwrap();
        assert_eq!(key, Some("gsk_from_file".to_string()));
    }

    #[test]
    fn missing_secrets_file_falls_through() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist.yaml");
        assert_eq!(from_secrets_file(&path).unwrap(), None);
    }

    #[test]
    fn malformed_secrets_file_is_distinct_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("secrets.yaml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "groq_api_key: [not, a, string").unwrap();

        let err = from_secrets_file(&path).unwrap_err();
        assert!(err.is_configuration());
        assert!(err.to_string().contains("malformed"));
    }

    #[test]
    fn empty_file_key_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("secrets.yaml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "groq_api_key: \"\"").unwrap();
        assert_eq!(from_secrets_file(&path).unwrap(), None);
    }

    #[test]
    fn explicit_secrets_path_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.yaml");
        let err = resolve(None, Some(path.as_path())).unwrap_err();
        assert!(err.is_configuration());
        assert!(err.to_string().contains("not found"));
    }
}
