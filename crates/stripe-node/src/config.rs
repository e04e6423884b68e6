//! Stripe credential configuration.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use serde::Deserialize;

use stripe_node_core::NodeError;

/// Default Stripe API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.stripe.com/v1";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Prefix of environment variables holding named credentials.
const CREDENTIAL_ENV_PREFIX: &str = "STRIPE_CREDENTIAL_";

/// Transport configuration loaded from a secrets file or environment variables.
#[derive(Clone, Deserialize)]
pub struct StripeConfig {
    /// Default secret API key (`sk_test_...` or `sk_live_...`).
    pub api_key: String,

    /// Named credentials selectable per item through `credentialName`.
    #[serde(default)]
    pub credentials: HashMap<String, String>,

    /// API base URL (default: `https://api.stripe.com/v1`).
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub request_timeout_seconds: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}

impl StripeConfig {
    /// Configuration with a single default key and default settings.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            credentials: HashMap::new(),
            base_url: default_base_url(),
            request_timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }

    /// Add a named credential.
    #[must_use]
    pub fn with_credential(mut self, name: impl Into<String>, api_key: impl Into<String>) -> Self {
        self.credentials.insert(name.into(), api_key.into());
        self
    }

    /// Point the transport at another base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Load configuration from a secrets file, falling back to environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`NodeError::Configuration`] when no API key can be found.
    pub fn from_env() -> Result<Self, NodeError> {
        let secret_paths = [
            ".secrets/stripe.json",
            "stripe-node/.secrets/stripe.json",
            "../.secrets/stripe.json",
        ];

        for path in &secret_paths {
            if Path::new(path).exists() {
                let config = Self::from_file(path)?;
                tracing::info!(path = %path, "Loaded Stripe secrets from file");
                return Ok(config);
            }
        }

        tracing::debug!("Stripe secrets file not found, using environment variables");
        Self::from_vars(std::env::vars())
    }

    /// Load configuration from a JSON secrets file.
    ///
    /// # Errors
    ///
    /// Returns [`NodeError::Configuration`] if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, NodeError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            NodeError::Configuration(format!("cannot read {}: {e}", path.display()))
        })?;
        serde_json::from_str(&contents)
            .map_err(|e| NodeError::Configuration(format!("invalid {}: {e}", path.display())))
    }

    /// Build configuration from `(name, value)` variables.
    ///
    /// Reads `STRIPE_API_KEY`, `STRIPE_API_BASE_URL`,
    /// `STRIPE_REQUEST_TIMEOUT_SECONDS` and every `STRIPE_CREDENTIAL_<NAME>`.
    ///
    /// # Errors
    ///
    /// Returns [`NodeError::Configuration`] if `STRIPE_API_KEY` is missing.
    pub fn from_vars<I>(vars: I) -> Result<Self, NodeError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut api_key = None;
        let mut config = Self::new(String::new());

        for (name, value) in vars {
            match name.as_str() {
                "STRIPE_API_KEY" => api_key = Some(value),
                "STRIPE_API_BASE_URL" => config.base_url = value,
                "STRIPE_REQUEST_TIMEOUT_SECONDS" => {
                    config.request_timeout_seconds =
                        value.parse().unwrap_or(DEFAULT_TIMEOUT_SECONDS);
                }
                _ => {
                    if let Some(credential) = name.strip_prefix(CREDENTIAL_ENV_PREFIX) {
                        config.credentials.insert(credential.to_string(), value);
                    }
                }
            }
        }

        config.api_key = api_key
            .filter(|key| !key.is_empty())
            .ok_or_else(|| NodeError::Configuration("STRIPE_API_KEY is not set".into()))?;
        Ok(config)
    }

    /// Credential store built from this configuration.
    #[must_use]
    pub fn credential_store(&self) -> CredentialStore {
        CredentialStore {
            default_key: self.api_key.clone(),
            named: self.credentials.clone(),
        }
    }
}

impl fmt::Debug for StripeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StripeConfig")
            .field("api_key", &"<redacted>")
            .field("credentials", &self.credentials.keys().collect::<Vec<_>>())
            .field("base_url", &self.base_url)
            .field("request_timeout_seconds", &self.request_timeout_seconds)
            .finish()
    }
}

/// Secret keys by credential name.
#[derive(Clone)]
pub struct CredentialStore {
    default_key: String,
    named: HashMap<String, String>,
}

impl CredentialStore {
    /// Key for `name`, or the default key when no name is given.
    #[must_use]
    pub fn resolve(&self, name: Option<&str>) -> Option<&str> {
        match name {
            None => Some(self.default_key.as_str()),
            Some(name) => self.named.get(name).map(String::as_str),
        }
    }
}

impl fmt::Debug for CredentialStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialStore")
            .field("named", &self.named.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}
