use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizSummaryError {
    #[error("completed_at is before started_at")]
    InvalidTimeRange,

    #[error("score ({score}) exceeds total questions ({total})")]
    ScoreExceedsTotal { score: usize, total: usize },
}

/// Final result of a conducted quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSummary {
    score: usize,
    total: usize,
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
}

impl QuizSummary {
    /// # Errors
    ///
    /// Returns `QuizSummaryError::ScoreExceedsTotal` if `score > total` and
    /// `QuizSummaryError::InvalidTimeRange` if `completed_at` is before `started_at`.
    pub fn new(
        score: usize,
        total: usize,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
    ) -> Result<Self, QuizSummaryError> {
        if completed_at < started_at {
            return Err(QuizSummaryError::InvalidTimeRange);
        }
        if score > total {
            return Err(QuizSummaryError::ScoreExceedsTotal { score, total });
        }
        Ok(Self {
            score,
            total,
            started_at,
            completed_at,
        })
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    /// The closing line shown to the quiz taker.
    #[must_use]
    pub fn score_line(&self) -> String {
        format!("Quiz completed. Your score: {}/{}", self.score, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;
    use chrono::Duration;

    #[test]
    fn summary_renders_score_line() {
        let now = fixed_now();
        let summary = QuizSummary::new(9, 10, now, now + Duration::seconds(30)).unwrap();
        assert_eq!(summary.score_line(), "Quiz completed. Your score: 9/10");
        assert_eq!(summary.completed_at() - summary.started_at(), Duration::seconds(30));
    }

    #[test]
    fn empty_quiz_scores_zero_of_zero() {
        let now = fixed_now();
        let summary = QuizSummary::new(0, 0, now, now).unwrap();
        assert_eq!(summary.score_line(), "Quiz completed. Your score: 0/0");
    }

    #[test]
    fn summary_rejects_impossible_values() {
        let now = fixed_now();
        assert_eq!(
            QuizSummary::new(3, 2, now, now).unwrap_err(),
            QuizSummaryError::ScoreExceedsTotal { score: 3, total: 2 }
        );
        assert_eq!(
            QuizSummary::new(1, 2, now, now - Duration::seconds(1)).unwrap_err(),
            QuizSummaryError::InvalidTimeRange
        );
    }
}
