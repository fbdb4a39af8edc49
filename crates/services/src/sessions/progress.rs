use std::cmp::Ordering;
use std::fmt;

/// Aggregated view of quiz progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizProgress {
    pub position: usize,
    pub total: usize,
    pub score: usize,
    pub is_finished: bool,
}

impl QuizProgress {
    /// One-based index of the active card, capped at `total`.
    #[must_use]
    pub fn card_number(&self) -> usize {
        (self.position + 1).min(self.total)
    }
}

/// Final score of a finished quiz.
///
/// `total` is the deck size, also when the quiz was stopped early.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizResult {
    score: usize,
    total: usize,
}

impl QuizResult {
    #[must_use]
    pub(crate) fn new(score: usize, total: usize) -> Self {
        Self { score, total }
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Score as a whole percentage; exact halves round to the even neighbour.
    #[must_use]
    pub fn percentage(&self) -> usize {
        if self.total == 0 {
            return 0;
        }
        let scaled = self.score * 100;
        let (whole, rest) = (scaled / self.total, scaled % self.total);
        match (rest * 2).cmp(&self.total) {
            Ordering::Greater => whole + 1,
            Ordering::Equal if whole % 2 == 1 => whole + 1,
            _ => whole,
        }
    }
}

impl fmt::Display for QuizResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Finished! Your score: {}/{} ({}%)",
            self.score,
            self.total,
            self.percentage()
        )
    }
}
