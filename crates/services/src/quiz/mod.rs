mod progress;
mod session;

pub use progress::QuizProgress;
pub use session::{
    ANSWER_PROMPT, CORRECT_FEEDBACK, INCORRECT_FEEDBACK, QuestionOutcome, QuizSession,
};
