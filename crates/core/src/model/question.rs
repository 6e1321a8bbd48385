use std::borrow::Cow;
use std::fmt;
use std::iter::FusedIterator;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::text::{PromptText, SolutionText, TextError, eq_ignore_case};

/// Fixed option lines shown for every true/false question.
pub const TRUE_OPTION_LINE: &str = "1. True";
pub const FALSE_OPTION_LINE: &str = "2. False";

/// Instruction line shown under a fill-in-the-blank prompt.
pub const FILL_IN_INSTRUCTION: &str = "Enter your answer:";

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("invalid prompt: {0}")]
    Prompt(#[source] TextError),

    #[error("multiple choice question needs at least one option")]
    NoOptions,

    #[error("correct option {correct} is outside 1..={options}")]
    CorrectOptionOutOfRange { correct: usize, options: usize },

    #[error("invalid correct answer: {0}")]
    Answer(#[source] TextError),
}

//
// ─── KIND ──────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    MultipleChoice,
    TrueFalse,
    FillInBlank,
}

impl QuestionKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            QuestionKind::MultipleChoice => "multiple_choice",
            QuestionKind::TrueFalse => "true_false",
            QuestionKind::FillInBlank => "fill_in_blank",
        }
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//
// ─── VARIANTS ──────────────────────────────────────────────────────────────────
//

/// A question answered by the 1-based number of one of its options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultipleChoice {
    prompt: PromptText,
    options: Vec<String>,
    correct_option: usize,
}

impl MultipleChoice {
    /// # Errors
    ///
    /// Returns `QuestionError::Prompt` for a blank prompt,
    /// `QuestionError::NoOptions` for an empty option list and
    /// `QuestionError::CorrectOptionOutOfRange` unless
    /// `1 <= correct_option <= options.len()`.
    pub fn new<I, S>(
        prompt: impl Into<String>,
        options: I,
        correct_option: usize,
    ) -> Result<Self, QuestionError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let prompt = PromptText::parse(prompt).map_err(QuestionError::Prompt)?;
        let options: Vec<String> = options.into_iter().map(Into::into).collect();
        if options.is_empty() {
            return Err(QuestionError::NoOptions);
        }
        if !(1..=options.len()).contains(&correct_option) {
            return Err(QuestionError::CorrectOptionOutOfRange {
                correct: correct_option,
                options: options.len(),
            });
        }
        Ok(Self {
            prompt,
            options,
            correct_option,
        })
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        self.prompt.as_str()
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// 1-based, matching the numbering printed by `Question::display`.
    #[must_use]
    pub fn correct_option(&self) -> usize {
        self.correct_option
    }

    /// Anything that does not parse as an integer is simply wrong.
    ///
    /// Only ASCII digits are recognised, with an optional leading sign, so a
    /// full-width `"２"` is wrong even though it denotes the number 2.
    #[must_use]
    pub fn check_answer(&self, answer: &str) -> bool {
        let Ok(selected) = answer.parse::<i64>() else {
            return false;
        };
        i64::try_from(self.correct_option).is_ok_and(|correct| correct == selected)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrueFalse {
    prompt: PromptText,
    correct_answer: bool,
}

impl TrueFalse {
    /// # Errors
    ///
    /// Returns `QuestionError::Prompt` for a blank prompt.
    pub fn new(prompt: impl Into<String>, correct_answer: bool) -> Result<Self, QuestionError> {
        let prompt = PromptText::parse(prompt).map_err(QuestionError::Prompt)?;
        Ok(Self {
            prompt,
            correct_answer,
        })
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        self.prompt.as_str()
    }

    #[must_use]
    pub fn correct_answer(&self) -> bool {
        self.correct_answer
    }

    /// `"true"` in any case, or `"1"`, selects true; every other input selects false.
    #[must_use]
    pub fn check_answer(&self, answer: &str) -> bool {
        let selected = eq_ignore_case(answer, "true") || answer == "1";
        selected == self.correct_answer
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillInBlank {
    prompt: PromptText,
    correct_answer: SolutionText,
}

impl FillInBlank {
    /// # Errors
    ///
    /// Returns `QuestionError::Prompt` for a blank prompt and
    /// `QuestionError::Answer` for a blank correct answer.
    pub fn new(
        prompt: impl Into<String>,
        correct_answer: impl Into<String>,
    ) -> Result<Self, QuestionError> {
        let prompt = PromptText::parse(prompt).map_err(QuestionError::Prompt)?;
        let correct_answer = SolutionText::parse(correct_answer).map_err(QuestionError::Answer)?;
        Ok(Self {
            prompt,
            correct_answer,
        })
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        self.prompt.as_str()
    }

    #[must_use]
    pub fn correct_answer(&self) -> &str {
        self.correct_answer.as_str()
    }

    /// Case-insensitive and exact: surrounding whitespace makes an answer wrong.
    #[must_use]
    pub fn check_answer(&self, answer: &str) -> bool {
        eq_ignore_case(answer, self.correct_answer.as_str())
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A single quiz item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Question {
    MultipleChoice(MultipleChoice),
    TrueFalse(TrueFalse),
    FillInBlank(FillInBlank),
}

impl Question {
    #[must_use]
    pub fn kind(&self) -> QuestionKind {
        match self {
            Question::MultipleChoice(_) => QuestionKind::MultipleChoice,
            Question::TrueFalse(_) => QuestionKind::TrueFalse,
            Question::FillInBlank(_) => QuestionKind::FillInBlank,
        }
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        match self {
            Question::MultipleChoice(q) => q.prompt(),
            Question::TrueFalse(q) => q.prompt(),
            Question::FillInBlank(q) => q.prompt(),
        }
    }

    /// Lines to present for this question, prompt first.
    ///
    /// The iterator is lazy and can be cloned to restart the rendering.
    #[must_use]
    pub fn display(&self) -> QuestionLines<'_> {
        QuestionLines {
            question: self,
            next: 0,
        }
    }

    #[must_use]
    pub fn check_answer(&self, answer: &str) -> bool {
        match self {
            Question::MultipleChoice(q) => q.check_answer(answer),
            Question::TrueFalse(q) => q.check_answer(answer),
            Question::FillInBlank(q) => q.check_answer(answer),
        }
    }

    fn line_count(&self) -> usize {
        match self {
            Question::MultipleChoice(q) => 1 + q.options.len(),
            Question::TrueFalse(_) => 3,
            Question::FillInBlank(_) => 2,
        }
    }

    fn line_at(&self, index: usize) -> Option<Cow<'_, str>> {
        if index == 0 {
            return Some(Cow::Borrowed(self.prompt()));
        }
        match self {
            Question::MultipleChoice(q) => q
                .options
                .get(index - 1)
                .map(|option| Cow::Owned(format!("{index}. {option}"))),
            Question::TrueFalse(_) => match index {
                1 => Some(Cow::Borrowed(TRUE_OPTION_LINE)),
                2 => Some(Cow::Borrowed(FALSE_OPTION_LINE)),
                _ => None,
            },
            Question::FillInBlank(_) => (index == 1).then_some(Cow::Borrowed(FILL_IN_INSTRUCTION)),
        }
    }
}

impl From<MultipleChoice> for Question {
    fn from(q: MultipleChoice) -> Self {
        Question::MultipleChoice(q)
    }
}

impl From<TrueFalse> for Question {
    fn from(q: TrueFalse) -> Self {
        Question::TrueFalse(q)
    }
}

impl From<FillInBlank> for Question {
    fn from(q: FillInBlank) -> Self {
        Question::FillInBlank(q)
    }
}

/// Lazy line-by-line rendering of a `Question`.
#[derive(Debug, Clone)]
pub struct QuestionLines<'a> {
    question: &'a Question,
    next: usize,
}

impl<'a> Iterator for QuestionLines<'a> {
    type Item = Cow<'a, str>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.question.line_at(self.next)?;
        self.next += 1;
        Some(line)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.question.line_count().saturating_sub(self.next);
        (left, Some(left))
    }
}

impl ExactSizeIterator for QuestionLines<'_> {}
impl FusedIterator for QuestionLines<'_> {}

//
// ─── DRAFT (unvalidated input) ─────────────────────────────────────────────────
//

/// A question as read from an external source, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QuestionDraft {
    MultipleChoice {
        prompt: String,
        options: Vec<String>,
        correct_option: usize,
    },
    TrueFalse {
        prompt: String,
        correct_answer: bool,
    },
    FillInBlank {
        prompt: String,
        correct_answer: String,
    },
}

impl QuestionDraft {
    #[must_use]
    pub fn kind(&self) -> QuestionKind {
        match self {
            QuestionDraft::MultipleChoice { .. } => QuestionKind::MultipleChoice,
            QuestionDraft::TrueFalse { .. } => QuestionKind::TrueFalse,
            QuestionDraft::FillInBlank { .. } => QuestionKind::FillInBlank,
        }
    }

    /// # Errors
    ///
    /// Returns the variant constructor's `QuestionError`.
    pub fn validate(self) -> Result<Question, QuestionError> {
        let question: Question = match self {
            QuestionDraft::MultipleChoice {
                prompt,
                options,
                correct_option,
            } => MultipleChoice::new(prompt, options, correct_option)?.into(),
            QuestionDraft::TrueFalse {
                prompt,
                correct_answer,
            } => TrueFalse::new(prompt, correct_answer)?.into(),
            QuestionDraft::FillInBlank {
                prompt,
                correct_answer,
            } => FillInBlank::new(prompt, correct_answer)?.into(),
        };
        Ok(question)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn capital_of_france() -> Question {
        MultipleChoice::new(
            "What is the capital of France?",
            ["London", "Paris", "Berlin", "Rome"],
            2,
        )
        .unwrap()
        .into()
    }

    fn lines(q: &Question) -> Vec<String> {
        q.display().map(Cow::into_owned).collect()
    }

    #[test]
    fn multiple_choice_accepts_only_the_correct_number() {
        let q = capital_of_france();
        assert!(q.check_answer("2"));
        assert!(q.check_answer("+2"));
        assert!(q.check_answer("02"));
        assert!(!q.check_answer("1"));
        assert!(!q.check_answer("Paris"));
        assert!(!q.check_answer(" 2"));
        assert!(!q.check_answer(""));
        assert!(!q.check_answer("99999999999999999999999"));
    }

    #[test]
    fn multiple_choice_ignores_non_ascii_digits() {
        let q = capital_of_france();
        assert!(!q.check_answer("\u{ff12}"));
        assert!(!q.check_answer("\u{0662}"));
    }

    #[test]
    fn multiple_choice_validates_correct_option() {
        let err = MultipleChoice::new("Q?", ["a", "b"], 3).unwrap_err();
        assert_eq!(
            err,
            QuestionError::CorrectOptionOutOfRange {
                correct: 3,
                options: 2
            }
        );
        let err = MultipleChoice::new("Q?", ["a", "b"], 0).unwrap_err();
        assert!(matches!(err, QuestionError::CorrectOptionOutOfRange { .. }));
        let err = MultipleChoice::new("Q?", Vec::<String>::new(), 1).unwrap_err();
        assert_eq!(err, QuestionError::NoOptions);
        let err = MultipleChoice::new("  ", ["a"], 1).unwrap_err();
        assert!(matches!(err, QuestionError::Prompt(_)));
    }

    #[test]
    fn multiple_choice_renders_numbered_options() {
        let q = capital_of_france();
        assert_eq!(
            lines(&q),
            vec![
                "What is the capital of France?",
                "1. London",
                "2. Paris",
                "3. Berlin",
                "4. Rome",
            ]
        );
    }

    #[test]
    fn true_false_selection_rules() {
        let q: Question = TrueFalse::new("Java is a programming language.", true)
            .unwrap()
            .into();
        for answer in ["true", "True", "TRUE", "1"] {
            assert!(q.check_answer(answer), "{answer} should select true");
        }
        for answer in ["false", "2", "yes", "", " true", "0"] {
            assert!(!q.check_answer(answer), "{answer} should select false");
        }

        let q: Question = TrueFalse::new("Python is a statically typed language.", false)
            .unwrap()
            .into();
        assert!(q.check_answer("false"));
        assert!(q.check_answer("2"));
        assert!(q.check_answer("nonsense"));
        assert!(!q.check_answer("TrUe"));
    }

    #[test]
    fn true_false_renders_fixed_options() {
        let q: Question = TrueFalse::new("Sky is blue.", true).unwrap().into();
        assert_eq!(lines(&q), vec!["Sky is blue.", "1. True", "2. False"]);
    }

    #[test]
    fn fill_in_blank_is_case_insensitive_and_untrimmed() {
        let q: Question = FillInBlank::new(
            "The largest planet in our solar system is ______.",
            "Jupiter",
        )
        .unwrap()
        .into();
        assert!(q.check_answer("jupiter"));
        assert!(q.check_answer("JUPITER"));
        assert!(!q.check_answer(" Jupiter "));
        assert!(!q.check_answer("Jupiter "));
        assert!(!q.check_answer("Saturn"));
        assert_eq!(
            lines(&q),
            vec![
                "The largest planet in our solar system is ______.",
                "Enter your answer:"
            ]
        );
    }

    #[test]
    fn fill_in_blank_folds_dotted_capital_i() {
        let q: Question = FillInBlank::new("Largest Turkish city?", "İstanbul")
            .unwrap()
            .into();
        assert!(q.check_answer("istanbul"));
        assert!(q.check_answer("İSTANBUL"));
        assert!(!q.check_answer("istanbul "));
    }

    #[test]
    fn fill_in_blank_requires_answer() {
        let err = FillInBlank::new("Q?", " ").unwrap_err();
        assert!(matches!(err, QuestionError::Answer(_)));
    }

    #[test]
    fn check_answer_is_repeatable() {
        let q = capital_of_france();
        let before = q.clone();
        for _ in 0..3 {
            assert!(q.check_answer("2"));
            assert!(!q.check_answer("3"));
        }
        assert_eq!(q, before);
    }

    #[test]
    fn display_is_restartable_and_exact_size() {
        let q = capital_of_france();
        let mut rendering = q.display();
        assert_eq!(rendering.len(), 5);
        let restart = rendering.clone();
        rendering.next();
        assert_eq!(rendering.len(), 4);
        assert_eq!(restart.count(), 5);
        assert_eq!(q.display().count(), 5);
    }

    #[test]
    fn draft_validates_into_question() {
        let draft = QuestionDraft::TrueFalse {
            prompt: "Mount Everest is the highest mountain on Earth.".into(),
            correct_answer: true,
        };
        assert_eq!(draft.kind(), QuestionKind::TrueFalse);
        let q = draft.validate().unwrap();
        assert_eq!(q.kind(), QuestionKind::TrueFalse);
        assert!(q.check_answer("1"));

        let bad = QuestionDraft::MultipleChoice {
            prompt: "Q?".into(),
            options: vec!["a".into()],
            correct_option: 2,
        };
        assert!(bad.validate().is_err());
    }
}
