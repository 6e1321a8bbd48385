#![forbid(unsafe_code)]

pub mod auth;
pub mod catalog;
pub mod console;
pub mod error;
pub mod platform;
pub mod quiz;

pub use quiz_core::Clock;

pub use auth::{Authenticator, StaticCredentials};
pub use console::{Console, StdConsole};
pub use error::{CatalogError, SessionError};
pub use platform::{PlatformOutcome, QuizPlatform};
pub use quiz::{QuestionOutcome, QuizProgress, QuizSession};
