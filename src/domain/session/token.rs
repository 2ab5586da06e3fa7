//! Bearer token value object.

use secrecy::{ExposeSecret, SecretString};
use std::fmt;

/// Opaque bearer credential issued by the auth service.
///
/// Wraps a `SecretString` so the token never shows up in `Debug` output
/// or logs. Call `expose()` only when building an `Authorization` header.
pub struct AccessToken(SecretString);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(SecretString::new(token.into()))
    }

    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl Clone for AccessToken {
    fn clone(&self) -> Self {
        Self::new(self.expose().to_string())
    }
}

impl PartialEq for AccessToken {
    fn eq(&self, other: &Self) -> bool {
        self.expose() == other.expose()
    }
}

impl Eq for AccessToken {}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken([REDACTED])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_hides_token() {
        let token = AccessToken::new("eyJ.secret.value");
        assert_eq!(format!("{:?}", token), "AccessToken([REDACTED])");
        assert_eq!(token.expose(), "eyJ.secret.value");
    }

    #[test]
    fn clones_compare_equal() {
        let token = AccessToken::new("abc");
        assert_eq!(token.clone(), token);
        assert_ne!(AccessToken::new("abc"), AccessToken::new("abd"));
    }
}
