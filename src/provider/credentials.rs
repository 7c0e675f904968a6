//! Provider Credentials

/// Source of the provider API key.
///
/// Consulted on every request, so a key supplied after startup takes effect
/// without a restart.
pub trait CredentialSource: Send + Sync {
    /// Human-readable name of where the key is looked up
    fn describe(&self) -> String;

    /// The key, or `None` if unset or blank
    fn api_key(&self) -> Option<String>;

    fn is_configured(&self) -> bool {
        self.api_key().is_some()
    }
}

/// Reads the key from a process environment variable
#[derive(Debug, Clone)]
pub struct EnvCredential {
    var: String,
}

impl EnvCredential {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }

    pub fn var(&self) -> &str {
        &self.var
    }
}

impl CredentialSource for EnvCredential {
    fn describe(&self) -> String {
        self.var.clone()
    }

    fn api_key(&self) -> Option<String> {
        std::env::var(&self.var)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }
}

/// A fixed key, or a fixed absence of one
#[derive(Debug, Clone)]
pub struct StaticCredential {
    key: Option<String>,
}

impl StaticCredential {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
        }
    }

    pub fn missing() -> Self {
        Self { key: None }
    }
}

impl CredentialSource for StaticCredential {
    fn describe(&self) -> String {
        "static credential".to_string()
    }

    fn api_key(&self) -> Option<String> {
        self.key.clone().filter(|key| !key.trim().is_empty())
    }
}
