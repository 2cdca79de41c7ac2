use std::fmt;
use std::path::PathBuf;

use anyhow::{Context, Result};
use thiserror::Error;
use tracing::{debug, info};

/// Environment / secrets key holding the Gemini API key.
pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";
const DEFAULT_SECRETS_PATH: &str = "secrets.toml";

/// Application configuration, built once at startup.
/// Startup fails if the API key cannot be resolved from any provider.
/// Call after the tracing subscriber is installed so provider fallbacks are logged.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: ApiKey,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let secrets_path =
            std::env::var("SECRETS_PATH").unwrap_or_else(|_| DEFAULT_SECRETS_PATH.to_string());
        let providers: Vec<Box<dyn CredentialProvider>> = vec![
            Box::new(SecretsFileProvider::new(secrets_path)),
            Box::new(EnvProvider),
        ];

        let resolved = resolve_credential(&providers, GEMINI_API_KEY)?;
        for reason in &resolved.skipped {
            debug!("Credential lookup skipped: {reason}");
        }
        info!("Resolved '{GEMINI_API_KEY}' from {}", resolved.provider);

        Ok(Config {
            gemini_api_key: ApiKey(resolved.value),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
        })
    }
}

/// Secret string that never shows up in `Debug` output.
#[derive(Clone)]
pub struct ApiKey(pub String);

impl ApiKey {
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("secrets file '{path}' could not be read: {source}")]
    SecretsUnreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("secrets file '{path}' is not valid TOML: {source}")]
    SecretsMalformed {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("'{key}' is not set in {provider}")]
    Missing { key: String, provider: String },

    #[error("no credential '{key}' found (tried: {})", .tried.join(", "))]
    NotFound { key: String, tried: Vec<String> },
}

/// A single place a credential may live.
pub trait CredentialProvider: Send + Sync {
    fn name(&self) -> String;
    fn lookup(&self, key: &str) -> Result<String, CredentialError>;
}

/// Reads top-level string keys from a TOML secrets file.
pub struct SecretsFileProvider {
    path: PathBuf,
}

impl SecretsFileProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CredentialProvider for SecretsFileProvider {
    fn name(&self) -> String {
        format!("secrets file {}", self.path.display())
    }

    fn lookup(&self, key: &str) -> Result<String, CredentialError> {
        let path = self.path.display().to_string();
        let raw = std::fs::read_to_string(&self.path).map_err(|source| {
            CredentialError::SecretsUnreadable {
                path: path.clone(),
                source,
            }
        })?;
        let table = raw
            .parse::<toml::Table>()
            .map_err(|source| CredentialError::SecretsMalformed { path, source })?;

        table
            .get(key)
            .and_then(|v| v.as_str())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .ok_or_else(|| CredentialError::Missing {
                key: key.to_string(),
                provider: self.name(),
            })
    }
}

/// Reads credentials from process environment variables.
pub struct EnvProvider;

impl CredentialProvider for EnvProvider {
    fn name(&self) -> String {
        "environment".to_string()
    }

    fn lookup(&self, key: &str) -> Result<String, CredentialError> {
        std::env::var(key)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| CredentialError::Missing {
                key: key.to_string(),
                provider: self.name(),
            })
    }
}

/// A credential plus where it came from and why earlier providers were passed over.
#[derive(Debug)]
pub struct ResolvedCredential {
    pub value: String,
    pub provider: String,
    pub skipped: Vec<CredentialError>,
}

/// Tries each provider in order; the first hit wins.
pub fn resolve_credential(
    providers: &[Box<dyn CredentialProvider>],
    key: &str,
) -> Result<ResolvedCredential, CredentialError> {
    let mut tried = Vec::with_capacity(providers.len());
    let mut skipped = Vec::new();

    for provider in providers {
        match provider.lookup(key) {
            Ok(value) => {
                return Ok(ResolvedCredential {
                    value,
                    provider: provider.name(),
                    skipped,
                });
            }
            Err(e) => {
                tried.push(provider.name());
                skipped.push(e);
            }
        }
    }

    Err(CredentialError::NotFound {
        key: key.to_string(),
        tried,
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    struct FixedProvider(Option<&'static str>);

    impl CredentialProvider for FixedProvider {
        fn name(&self) -> String {
            "fixed".to_string()
        }

        fn lookup(&self, key: &str) -> Result<String, CredentialError> {
            self.0
                .map(str::to_string)
                .ok_or_else(|| CredentialError::Missing {
                    key: key.to_string(),
                    provider: self.name(),
                })
        }
    }

    fn secrets_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_first_successful_provider_wins() {
        let providers: Vec<Box<dyn CredentialProvider>> = vec![
            Box::new(FixedProvider(Some("first"))),
            Box::new(FixedProvider(Some("second"))),
        ];
        let resolved = resolve_credential(&providers, "K").unwrap();
        assert_eq!(resolved.value, "first");
        assert!(resolved.skipped.is_empty());
    }

    #[test]
    fn test_falls_through_to_later_provider() {
        let providers: Vec<Box<dyn CredentialProvider>> = vec![
            Box::new(SecretsFileProvider::new("/definitely/not/here.toml")),
            Box::new(FixedProvider(Some("from-fallback"))),
        ];
        let resolved = resolve_credential(&providers, "K").unwrap();
        assert_eq!(resolved.value, "from-fallback");
        assert_eq!(resolved.provider, "fixed");
        assert_eq!(resolved.skipped.len(), 1);
    }

    #[test]
    fn test_malformed_secrets_file_is_reported_as_skipped() {
        let file = secrets_file("GEMINI_API_KEY = = broken");
        let providers: Vec<Box<dyn CredentialProvider>> = vec![
            Box::new(SecretsFileProvider::new(file.path())),
            Box::new(FixedProvider(Some("from-env"))),
        ];

        let resolved = resolve_credential(&providers, GEMINI_API_KEY).unwrap();
        assert_eq!(resolved.value, "from-env");
        assert!(matches!(
            resolved.skipped.as_slice(),
            [CredentialError::SecretsMalformed { .. }]
        ));
        assert!(resolved.skipped[0].to_string().contains("not valid TOML"));
    }

    #[test]
    fn test_all_providers_failing_is_not_found() {
        let providers: Vec<Box<dyn CredentialProvider>> = vec![
            Box::new(SecretsFileProvider::new("/definitely/not/here.toml")),
            Box::new(FixedProvider(None)),
        ];
        let err = resolve_credential(&providers, "GEMINI_API_KEY").unwrap_err();
        match &err {
            CredentialError::NotFound { key, tried } => {
                assert_eq!(key, "GEMINI_API_KEY");
                assert_eq!(tried.len(), 2);
                assert_eq!(tried[1], "fixed");
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
        assert!(err.to_string().contains("tried: secrets file"));
    }

    #[test]
    fn test_empty_provider_list_is_not_found() {
        let err = resolve_credential(&[], "K").unwrap_err();
        assert!(matches!(err, CredentialError::NotFound { tried, .. } if tried.is_empty()));
    }

    #[test]
    fn test_secrets_file_reads_key() {
        let file = secrets_file("GEMINI_API_KEY = \"abc123\"\nOTHER = 1\n");
        let provider = SecretsFileProvider::new(file.path());
        assert_eq!(provider.lookup("GEMINI_API_KEY").unwrap(), "abc123");
    }

    #[test]
    fn test_secrets_file_missing_or_blank_key() {
        let file = secrets_file("GEMINI_API_KEY = \"   \"\nOTHER = 1\n");
        let provider = SecretsFileProvider::new(file.path());
        assert!(matches!(
            provider.lookup("GEMINI_API_KEY"),
            Err(CredentialError::Missing { .. })
        ));
        assert!(matches!(
            provider.lookup("OTHER"),
            Err(CredentialError::Missing { .. })
        ));
    }

    #[test]
    fn test_secrets_file_malformed() {
        let file = secrets_file("this is = = not toml");
        let provider = SecretsFileProvider::new(file.path());
        assert!(matches!(
            provider.lookup("GEMINI_API_KEY"),
            Err(CredentialError::SecretsMalformed { .. })
        ));
    }

    #[test]
    fn test_env_provider_reads_variable() {
        let key = "BLOGSMITH_TEST_ENV_PROVIDER_KEY";
        std::env::set_var(key, " from-env ");
        assert_eq!(EnvProvider.lookup(key).unwrap(), "from-env");
        std::env::remove_var(key);
        assert!(EnvProvider.lookup(key).is_err());
    }

    #[test]
    fn test_api_key_debug_is_redacted() {
        let key = ApiKey("super-secret".to_string());
        assert_eq!(format!("{key:?}"), "ApiKey(***)");
        assert_eq!(key.expose(), "super-secret");
    }
}
