/// Snapshot of how far a quiz has got.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizProgress {
    pub total: usize,
    pub answered: usize,
    pub remaining: usize,
    pub score: usize,
}

impl QuizProgress {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.remaining == 0
    }
}
