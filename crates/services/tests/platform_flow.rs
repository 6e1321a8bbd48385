use std::io::Cursor;
use std::sync::Arc;

use quiz_core::model::{FillInBlank, TrueFalse};
use quiz_core::time::fixed_clock;
use quiz_services::platform::{LOGIN_FAILED, LOGIN_SUCCEEDED, WELCOME};
use quiz_services::{
    Console, PlatformOutcome, QuizPlatform, QuizSession, SessionError, StaticCredentials,
};

fn platform() -> QuizPlatform {
    let mut session = QuizSession::new().with_clock(fixed_clock());
    session.add_question(TrueFalse::new("Water is wet.", true).unwrap());
    session.add_question(FillInBlank::new("2 + 2 = _", "4").unwrap());
    QuizPlatform::new(Arc::new(StaticCredentials::default()), session)
}

fn run(platform: &mut QuizPlatform, input: &str) -> (Result<PlatformOutcome, SessionError>, String) {
    let mut out = Vec::new();
    let result = {
        let mut console = Console::new(Cursor::new(input.to_owned()), &mut out);
        platform.run(&mut console)
    };
    (result, String::from_utf8(out).unwrap())
}

#[test]
fn accepted_login_runs_the_quiz() {
    let mut platform = platform();
    let (result, out) = run(&mut platform, "keerthana\n1234\n1\n4\n");

    let summary = match result {
        Ok(PlatformOutcome::Completed(summary)) => summary,
        other => panic!("expected completed quiz, got {other:?}"),
    };
    assert_eq!(summary.score(), 2);
    assert!(out.starts_with(&format!(
        "{WELCOME}\nEnter your username: Enter your password: {LOGIN_SUCCEEDED}\nStarting the quiz...\n\nWater is wet.\n"
    )));
    assert!(out.ends_with("Quiz completed. Your score: 2/2\n"));
}

#[test]
fn rejected_login_produces_no_quiz_output() {
    let mut platform = platform();
    let (result, out) = run(&mut platform, "keerthana\nwrong\n1\n4\n");

    assert_eq!(result.unwrap(), PlatformOutcome::Rejected);
    assert!(out.ends_with(&format!("{LOGIN_FAILED}\n")));
    assert!(!out.contains("Water is wet."));
    assert!(!out.contains("Quiz completed"));
    assert_eq!(platform.session().progress().answered, 0);
}

#[test]
fn custom_authenticator_is_used() {
    let session = QuizSession::new();
    let mut platform = QuizPlatform::new(
        Arc::new(|user: &str, _: &str| user == "guest"),
        session,
    );
    let (result, out) = run(&mut platform, "guest\n\n");
    assert!(matches!(result, Ok(PlatformOutcome::Completed(_))));
    assert!(out.ends_with("Quiz completed. Your score: 0/0\n"));
}

#[test]
fn input_closed_during_login_is_reported() {
    let mut platform = platform();
    let (result, _) = run(&mut platform, "keerthana\n");
    assert!(matches!(result, Err(SessionError::LoginInterrupted)));
}
