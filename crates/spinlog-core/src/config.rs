//! Credential configuration.
//!
//! All three values are required; the run aborts before any network call or
//! file write if one is missing.

use crate::error::{Error, Result};

pub const ENV_CLIENT_ID: &str = "CLIENT_ID";
pub const ENV_CLIENT_SECRET: &str = "CLIENT_SECRET";
pub const ENV_REFRESH_TOKEN: &str = "REFRESH_TOKEN";

/// Spotify application credentials, read from the process environment.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
    pub refresh_token: String,
}

impl Credentials {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |key: &'static str| -> Result<String> {
            lookup(key)
                .filter(|value| !value.is_empty())
                .ok_or(Error::MissingEnv(key))
        };

        Ok(Self {
            client_id: require(ENV_CLIENT_ID)?,
            client_secret: require(ENV_CLIENT_SECRET)?,
            refresh_token: require(ENV_REFRESH_TOKEN)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_all_credentials_present() {
        let env = vars(&[
            ("CLIENT_ID", "id"),
            ("CLIENT_SECRET", "secret"),
            ("REFRESH_TOKEN", "refresh"),
        ]);
        let creds = Credentials::from_lookup(|key| env.get(key).cloned()).unwrap();
        assert_eq!(creds.client_id, "id");
        assert_eq!(creds.client_secret, "secret");
        assert_eq!(creds.refresh_token, "refresh");
    }

    #[test]
    fn test_missing_variable_is_an_error() {
        let env = vars(&[("CLIENT_ID", "id"), ("CLIENT_SECRET", "secret")]);
        let err = Credentials::from_lookup(|key| env.get(key).cloned()).unwrap_err();
        assert!(matches!(err, Error::MissingEnv("REFRESH_TOKEN")));
    }

    #[test]
    fn test_empty_variable_is_an_error() {
        let env = vars(&[
            ("CLIENT_ID", ""),
            ("CLIENT_SECRET", "secret"),
            ("REFRESH_TOKEN", "refresh"),
        ]);
        let err = Credentials::from_lookup(|key| env.get(key).cloned()).unwrap_err();
        assert!(matches!(err, Error::MissingEnv("CLIENT_ID")));
    }
}
