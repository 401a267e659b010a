//! Twitter OAuth 1.0a credentials loaded from a single CI secret.

use std::fmt;

use crate::error::{CredentialError, Result};

/// Default name of the environment variable holding the secret
pub const DEFAULT_CREDENTIALS_VAR: &str = "TWITTER";

/// The four OAuth 1.0a tokens for the posting account.
#[derive(Clone, PartialEq, Eq)]
pub struct TwitterCredentials {
    /// Consumer key (API key)
    pub consumer_key: String,
    /// Consumer secret (API secret)
    pub consumer_secret: String,
    /// Access token
    pub access_token: String,
    /// Access token secret
    pub access_token_secret: String,
}

impl TwitterCredentials {
    /// Split a secret into exactly four whitespace-separated tokens, in the
    /// order key, secret, token, token secret.
    pub fn from_secret(secret: &str) -> Result<Self> {
        let tokens: Vec<&str> = secret.split_whitespace().collect();
        let [consumer_key, consumer_secret, access_token, access_token_secret] = tokens[..]
        else {
            return Err(CredentialError::WrongTokenCount {
                found: tokens.len(),
            }
            .into());
        };

        Ok(Self {
            consumer_key: consumer_key.to_string(),
            consumer_secret: consumer_secret.to_string(),
            access_token: access_token.to_string(),
            access_token_secret: access_token_secret.to_string(),
        })
    }

    /// Load credentials from the named environment variable
    pub fn from_env(var: &str) -> Result<Self> {
        let secret = std::env::var(var).map_err(|_| CredentialError::MissingVariable {
            var: var.to_string(),
        })?;
        Self::from_secret(&secret)
    }
}

impl fmt::Debug for TwitterCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TwitterCredentials")
            .field("consumer_key", &"<redacted>")
            .field("consumer_secret", &"<redacted>")
            .field("access_token", &"<redacted>")
            .field("access_token_secret", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TweetError;

    #[test]
    fn splits_four_tokens_in_order() {
        let creds = TwitterCredentials::from_secret("ck cs at ats").unwrap();
        assert_eq!(creds.consumer_key, "ck");
        assert_eq!(creds.consumer_secret, "cs");
        assert_eq!(creds.access_token, "at");
        assert_eq!(creds.access_token_secret, "ats");
    }

    #[test]
    fn accepts_any_whitespace_separation() {
        let creds = TwitterCredentials::from_secret("  ck\tcs\n\nat   ats\n").unwrap();
        assert_eq!(creds.access_token_secret, "ats");
    }

    #[test]
    fn rejects_wrong_token_counts() {
        for secret in ["", "ck cs at", "ck cs at ats extra"] {
            let err = TwitterCredentials::from_secret(secret).unwrap_err();
            assert!(matches!(
                err,
                TweetError::Credentials(CredentialError::WrongTokenCount { .. })
            ));
        }

        let err = TwitterCredentials::from_secret("a b c").unwrap_err();
        assert!(err.to_string().contains("found 3"));
    }

    #[test]
    fn missing_variable_is_reported_by_name() {
        let err = TwitterCredentials::from_env("RELEASE_TWEET_TEST_UNSET_VAR").unwrap_err();
        assert!(err.to_string().contains("RELEASE_TWEET_TEST_UNSET_VAR"));
    }

    #[test]
    fn debug_output_redacts_secrets() {
        let creds = TwitterCredentials::from_secret("key1 secret2 token3 tsecret4").unwrap();
        let debug = format!("{creds:?}");
        for secret in ["key1", "secret2", "token3", "tsecret4"] {
            assert!(!debug.contains(secret));
        }
    }
}
