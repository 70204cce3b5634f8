//! API key resolution.
//!
//! The key is never stored in config files: `model.api_key_env` names the
//! environment variable that holds it.

use super::error::ConfigError;

/// Read the API key from the environment variable `env`.
pub fn resolve_api_key(env: &str) -> Result<String, ConfigError> {
    resolve_api_key_with(env, |name| std::env::var(name).ok())
}

/// Resolve the key through an arbitrary lookup (used by tests).
pub fn resolve_api_key_with<F>(env: &str, lookup: F) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(env)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .ok_or_else(|| ConfigError::MissingCredential {
            env: env.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present_key_is_trimmed() {
        let key = resolve_api_key_with("GEMINI_API_KEY", |_| Some(" abc123\n".to_string()));
        assert_eq!(key.unwrap(), "abc123");
    }

    #[test]
    fn test_absent_key_fails() {
        let err = resolve_api_key_with("GEMINI_API_KEY", |_| None).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingCredential { env } if env == "GEMINI_API_KEY"
        ));
    }

    #[test]
    fn test_blank_key_fails() {
        assert!(resolve_api_key_with("K", |_| Some("   ".to_string())).is_err());
    }
}
