//! Secret string wrapper that never appears in logs.

/// Wrapper for secrets that never appears in logs.
///
/// Used for the Matrix access token. The `Debug` and `Display`
/// implementations always show `[REDACTED]` instead of the actual value.
///
/// # Example
///
/// ```
/// use matrix_notify::config::SecretString;
///
/// let secret = SecretString::new("syt_bot_token".to_string());
/// assert_eq!(format!("{:?}", secret), "[REDACTED]");
/// assert_eq!(secret.expose(), "syt_bot_token");
/// ```
#[derive(Clone)]
pub struct SecretString(String);

impl SecretString {
    pub fn new(s: String) -> Self {
        SecretString(s)
    }

    /// Exposes the underlying secret value.
    ///
    /// Only for building the `Authorization` header; never log the result.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecretString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[REDACTED]")
    }
}

impl std::fmt::Display for SecretString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[REDACTED]")
    }
}
