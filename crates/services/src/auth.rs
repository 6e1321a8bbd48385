//! Login check performed before a quiz is conducted.

/// Username accepted by `StaticCredentials::default()`.
pub const DEFAULT_USERNAME: &str = "keerthana";
/// Password accepted by `StaticCredentials::default()`.
pub const DEFAULT_PASSWORD: &str = "1234";

/// Decides whether a username/password pair may take the quiz.
pub trait Authenticator {
    fn authenticate(&self, username: &str, password: &str) -> bool;
}

impl<F> Authenticator for F
where
    F: Fn(&str, &str) -> bool,
{
    fn authenticate(&self, username: &str, password: &str) -> bool {
        self(username, password)
    }
}

/// A single fixed credential pair, compared exactly (case-sensitive, untrimmed).
#[derive(Clone, PartialEq, Eq)]
pub struct StaticCredentials {
    username: String,
    password: String,
}

impl StaticCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl Default for StaticCredentials {
    fn default() -> Self {
        Self::new(DEFAULT_USERNAME, DEFAULT_PASSWORD)
    }
}

impl std::fmt::Debug for StaticCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Authenticator for StaticCredentials {
    fn authenticate(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}
