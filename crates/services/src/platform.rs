//! Welcome, login and quiz, in that order.

use std::io::{BufRead, Write};
use std::sync::Arc;

use quiz_core::model::QuizSummary;
use tracing::{info, warn};

use crate::auth::Authenticator;
use crate::console::Console;
use crate::error::SessionError;
use crate::quiz::QuizSession;

pub const WELCOME: &str = "Welcome to the Quiz Platform!";
pub const USERNAME_PROMPT: &str = "Enter your username: ";
pub const PASSWORD_PROMPT: &str = "Enter your password: ";
pub const LOGIN_SUCCEEDED: &str = "Login successful!";
pub const QUIZ_STARTING: &str = "Starting the quiz...";
pub const LOGIN_FAILED: &str = "Login failed. Invalid username or password.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformOutcome {
    Completed(QuizSummary),
    /// Credentials were refused; no quiz output was produced.
    Rejected,
}

/// Gatekeeps a `QuizSession` behind an `Authenticator`.
pub struct QuizPlatform {
    authenticator: Arc<dyn Authenticator + Send + Sync>,
    session: QuizSession,
}

impl QuizPlatform {
    #[must_use]
    pub fn new(authenticator: Arc<dyn Authenticator + Send + Sync>, session: QuizSession) -> Self {
        Self {
            authenticator,
            session,
        }
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    /// Run the whole interactive flow on `console`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::LoginInterrupted` if input ends while reading
    /// the credentials, `SessionError::InputClosed` if it ends during the
    /// quiz, and `SessionError::Io` for console failures.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<PlatformOutcome, SessionError> {
        console.line(WELCOME)?;
        let username = Self::read_credential(console, USERNAME_PROMPT)?;
        let password = Self::read_credential(console, PASSWORD_PROMPT)?;

        if !self.authenticator.authenticate(&username, &password) {
            warn!(username = %username, "login rejected");
            console.line(LOGIN_FAILED)?;
            return Ok(PlatformOutcome::Rejected);
        }

        info!(username = %username, "login accepted");
        console.line(LOGIN_SUCCEEDED)?;
        console.line(QUIZ_STARTING)?;
        console.blank_line()?;

        let summary = self.session.conduct(console)?;
        Ok(PlatformOutcome::Completed(summary))
    }

    fn read_credential<R: BufRead, W: Write>(
        console: &mut Console<R, W>,
        prompt: &str,
    ) -> Result<String, SessionError> {
        console.ask(prompt)?.ok_or_else(|| {
            warn!("input closed during login");
            SessionError::LoginInterrupted
        })
    }
}
