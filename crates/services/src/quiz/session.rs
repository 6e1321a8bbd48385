use std::io::{BufRead, Write};

use chrono::{DateTime, Utc};
use quiz_core::Clock;
use quiz_core::model::{Question, QuestionKind, QuizSummary};
use tracing::{debug, info, warn};

use super::progress::QuizProgress;
use crate::console::Console;
use crate::error::SessionError;

pub const ANSWER_PROMPT: &str = "Your answer: ";
pub const CORRECT_FEEDBACK: &str = "Correct!";
pub const INCORRECT_FEEDBACK: &str = "Incorrect.";

//
// ─── OUTCOME ───────────────────────────────────────────────────────────────────
//

/// Grading result for one answered question.
///
/// The answer text itself is not retained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionOutcome {
    /// 0-based position in presentation order.
    pub index: usize,
    pub kind: QuestionKind,
    pub correct: bool,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// Fixed-order quiz over a console.
///
/// Questions are presented in insertion order; each one gets exactly one line
/// of input and either scores a point or does not.
#[derive(Debug, Clone, Default)]
pub struct QuizSession {
    questions: Vec<Question>,
    score: usize,
    outcomes: Vec<QuestionOutcome>,
    clock: Clock,
}

impl QuizSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_questions(questions: impl IntoIterator<Item = Question>) -> Self {
        Self {
            questions: questions.into_iter().collect(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Append a question to the end of the presentation order.
    pub fn add_question(&mut self, question: impl Into<Question>) {
        self.questions.push(question.into());
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn outcomes(&self) -> &[QuestionOutcome] {
        &self.outcomes
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        QuizProgress {
            total: self.total(),
            answered: self.outcomes.len(),
            remaining: self.total().saturating_sub(self.outcomes.len()),
            score: self.score,
        }
    }

    /// Present every question in order, grade each answer and print the score.
    ///
    /// Scoring restarts from zero on every call.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InputClosed` if input ends before the last
    /// answer; no summary line is printed in that case. Console write
    /// failures surface as `SessionError::Io`.
    pub fn conduct<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<QuizSummary, SessionError> {
        self.score = 0;
        self.outcomes.clear();

        let total = self.questions.len();
        let started_at = self.clock.now();
        info!(total, "quiz started");

        for (index, question) in self.questions.iter().enumerate() {
            for line in question.display() {
                console.line(&line)?;
            }
            let Some(answer) = console.ask(ANSWER_PROMPT)? else {
                warn!(answered = index, total, "input closed before the quiz finished");
                return Err(SessionError::InputClosed {
                    answered: index,
                    total,
                });
            };

            let correct = question.check_answer(&answer);
            if correct {
                self.score += 1;
                console.line(CORRECT_FEEDBACK)?;
            } else {
                console.line(INCORRECT_FEEDBACK)?;
            }
            console.blank_line()?;

            debug!(question = index + 1, kind = %question.kind(), correct, "answer graded");
            self.outcomes.push(QuestionOutcome {
                index,
                kind: question.kind(),
                correct,
            });
        }

        let summary = self.summarize(started_at)?;
        console.line(&summary.score_line())?;
        info!(score = summary.score(), total, "quiz completed");
        Ok(summary)
    }

    /// A wall clock stepping backwards must not fail a finished quiz.
    fn summarize(&self, started_at: DateTime<Utc>) -> Result<QuizSummary, SessionError> {
        let completed_at = self.clock.now().max(started_at);
        Ok(QuizSummary::new(
            self.score,
            self.questions.len(),
            started_at,
            completed_at,
        )?)
    }
}
