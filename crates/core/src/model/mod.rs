mod question;
mod summary;
mod text;

pub use question::{
    FALSE_OPTION_LINE, FILL_IN_INSTRUCTION, FillInBlank, MultipleChoice, Question, QuestionDraft,
    QuestionError, QuestionKind, QuestionLines, TRUE_OPTION_LINE, TrueFalse,
};
pub use summary::{QuizSummary, QuizSummaryError};
pub use text::{PromptText, SolutionText, Text, TextError, eq_ignore_case};
