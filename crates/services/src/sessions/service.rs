use std::time::Duration;

use chrono::{DateTime, Utc};
use hanzi_core::answer::is_correct;
use hanzi_core::model::{Card, Deck};
use hanzi_core::time::{POLL_INTERVAL, REVEAL_DURATION, elapsed_between};

use crate::error::SessionError;
use super::progress::{QuizProgress, QuizResult};
use super::view::{CardDisplay, GlyphColor, feedback_text};

//
// ─── STATES ────────────────────────────────────────────────────────────────────
//

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Judgment {
    #[default]
    Unknown,
    Correct,
    Incorrect,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizPhase {
    /// Waiting for an answer to the active card.
    Answering,
    /// The active card has been judged and is shown in color.
    Revealing,
    Finished,
}

/// Outcome of a reveal timeout check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealPoll {
    /// No card is being revealed; nothing to wait for.
    Idle,
    /// Still revealing; check again after `retry_after`.
    Waiting { retry_after: Duration },
    /// The reveal ended and the quiz moved on.
    Advanced { finished: bool },
}

/// The judged state of the active card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reveal {
    judgment: Judgment,
    feedback: String,
    started_at: DateTime<Utc>,
}

impl Reveal {
    #[must_use]
    pub fn judgment(&self) -> Judgment {
        self.judgment
    }

    #[must_use]
    pub fn feedback(&self) -> &str {
        &self.feedback
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn color(&self) -> GlyphColor {
        GlyphColor::from_judgment(self.judgment)
    }
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One run through a shuffled deck.
///
/// `position` stays within `0..=deck.len()`; reaching `deck.len()` finishes the
/// quiz. Timestamps are passed in by the caller so time stays deterministic.
pub struct QuizSession {
    deck: Deck,
    position: usize,
    score: usize,
    pending_answer: String,
    reveal: Option<Reveal>,
}

impl QuizSession {
    #[must_use]
    pub fn new(deck: Deck) -> Self {
        Self {
            deck,
            position: 0,
            score: 0,
            pending_answer: String::new(),
            reveal: None,
        }
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    /// Total number of cards in this session.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.deck.len()
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        if self.is_finished() {
            QuizPhase::Finished
        } else if self.reveal.is_some() {
            QuizPhase::Revealing
        } else {
            QuizPhase::Answering
        }
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.position >= self.deck.len()
    }

    /// Whether the active card has been judged and is being revealed.
    #[must_use]
    pub fn is_checked(&self) -> bool {
        self.reveal.is_some()
    }

    #[must_use]
    pub fn reveal(&self) -> Option<&Reveal> {
        self.reveal.as_ref()
    }

    #[must_use]
    pub fn judgment(&self) -> Judgment {
        self.reveal.as_ref().map_or(Judgment::Unknown, Reveal::judgment)
    }

    /// Feedback for the active card, empty until it is judged.
    #[must_use]
    pub fn feedback(&self) -> &str {
        self.reveal.as_ref().map_or("", Reveal::feedback)
    }

    #[must_use]
    pub fn reveal_started_at(&self) -> Option<DateTime<Utc>> {
        self.reveal.as_ref().map(Reveal::started_at)
    }

    #[must_use]
    pub fn current_card(&self) -> Option<&Card> {
        self.deck.get(self.position)
    }

    #[must_use]
    pub fn pending_answer(&self) -> &str {
        &self.pending_answer
    }

    /// Replace the typed answer. Ignored while revealing or once finished.
    pub fn set_pending_answer(&mut self, answer: impl Into<String>) {
        if self.phase() == QuizPhase::Answering {
            self.pending_answer = answer.into();
        }
    }

    /// Returns a summary of the current quiz progress.
    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        QuizProgress {
            position: self.position,
            total: self.total_cards(),
            score: self.score,
            is_finished: self.is_finished(),
        }
    }

    /// Final score, available once the quiz is finished.
    #[must_use]
    pub fn result(&self) -> Option<QuizResult> {
        self.is_finished()
            .then(|| QuizResult::new(self.score, self.total_cards()))
    }

    /// What to draw for the active card; `None` once finished.
    #[must_use]
    pub fn display(&self) -> Option<CardDisplay> {
        let card = self.current_card()?;
        Some(match &self.reveal {
            Some(reveal) => CardDisplay {
                glyph: card.hanzi().to_string(),
                color: reveal.color(),
                feedback: reveal.feedback.clone(),
                input_enabled: false,
            },
            None => CardDisplay {
                glyph: card.hanzi().to_string(),
                color: GlyphColor::Neutral,
                feedback: String::new(),
                input_enabled: true,
            },
        })
    }

    /// Judge the pending answer against the active card and start its reveal.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::AlreadyChecked` while the active card is being
    /// revealed and `SessionError::Finished` once the deck is exhausted. The
    /// session is left untouched in both cases.
    pub fn submit(&mut self, now: DateTime<Utc>) -> Result<&Reveal, SessionError> {
        if self.reveal.is_some() {
            return Err(SessionError::AlreadyChecked);
        }
        let Some(card) = self.deck.get(self.position) else {
            return Err(SessionError::Finished);
        };

        let judgment = if is_correct(&self.pending_answer, card.meanings()) {
            Judgment::Correct
        } else {
            Judgment::Incorrect
        };
        if judgment == Judgment::Correct {
            self.score += 1;
        }
        tracing::debug!(
            position = self.position,
            hanzi = card.hanzi(),
            ?judgment,
            score = self.score,
            "answer judged"
        );

        let reveal = self.reveal.insert(Reveal {
            judgment,
            feedback: feedback_text(card, judgment),
            started_at: now,
        });
        Ok(&*reveal)
    }

    /// Set the answer and submit it in one step.
    ///
    /// # Errors
    ///
    /// Same as [`QuizSession::submit`].
    pub fn submit_answer(
        &mut self,
        answer: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Result<&Reveal, SessionError> {
        match self.phase() {
            QuizPhase::Answering => self.pending_answer = answer.into(),
            QuizPhase::Revealing => return Err(SessionError::AlreadyChecked),
            QuizPhase::Finished => return Err(SessionError::Finished),
        }
        self.submit(now)
    }

    /// Check whether the reveal of the active card is over.
    ///
    /// Advances to the next card once `REVEAL_DURATION` has elapsed since the
    /// answer was judged, otherwise asks to be polled again after
    /// `POLL_INTERVAL` without changing anything.
    pub fn poll_reveal(&mut self, now: DateTime<Utc>) -> RevealPoll {
        let Some(started_at) = self.reveal_started_at() else {
            return RevealPoll::Idle;
        };
        if elapsed_between(started_at, now) < REVEAL_DURATION {
            return RevealPoll::Waiting {
                retry_after: POLL_INTERVAL,
            };
        }
        self.advance();
        RevealPoll::Advanced {
            finished: self.is_finished(),
        }
    }

    /// End the quiz immediately, dropping any reveal in progress.
    pub fn stop(&mut self) {
        if self.is_finished() {
            return;
        }
        tracing::info!(
            position = self.position,
            total = self.total_cards(),
            score = self.score,
            "quiz stopped"
        );
        self.position = self.total_cards();
        self.reset_card_state();
    }

    fn advance(&mut self) {
        self.position = (self.position + 1).min(self.total_cards());
        self.reset_card_state();
        if self.is_finished() {
            tracing::info!(score = self.score, total = self.total_cards(), "quiz finished");
        }
    }

    fn reset_card_state(&mut self) {
        self.pending_answer.clear();
        self.reveal = None;
    }
}

impl std::fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuizSession")
            .field("cards_len", &self.deck.len())
            .field("position", &self.position)
            .field("score", &self.score)
            .field("reveal", &self.reveal)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;
    use hanzi_core::time::fixed_now;

    fn build_session() -> QuizSession {
        let cards = vec![
            Card::new("狗", ["dog", "puppy"]).unwrap(),
            Card::new("猫", ["cat"]).unwrap(),
            Card::new("鱼", ["fish"]).unwrap(),
        ];
        QuizSession::new(Deck::new(cards).unwrap())
    }

    fn after(ms: i64) -> DateTime<Utc> {
        fixed_now() + TimeDelta::milliseconds(ms)
    }

    #[test]
    fn new_session_starts_answering() {
        let session = build_session();
        assert_eq!(session.phase(), QuizPhase::Answering);
        assert_eq!(session.position(), 0);
        assert_eq!(session.score(), 0);
        assert_eq!(session.judgment(), Judgment::Unknown);
        assert!(session.reveal_started_at().is_none());

        let display = session.display().unwrap();
        assert_eq!(display.glyph, "狗");
        assert_eq!(display.color, GlyphColor::Neutral);
        assert!(display.input_enabled);
        assert!(display.feedback.is_empty());
    }

    #[test]
    fn correct_answer_scores_and_reveals() {
        let mut session = build_session();
        session.set_pending_answer("  PUPPY ");

        let reveal = session.submit(fixed_now()).unwrap();
        assert_eq!(reveal.judgment(), Judgment::Correct);
        assert_eq!(reveal.started_at(), fixed_now());

        assert_eq!(session.score(), 1);
        assert_eq!(session.phase(), QuizPhase::Revealing);
        assert!(session.is_checked());
        assert_eq!(session.feedback(), "✅ Correct! (dog, puppy)");

        let display = session.display().unwrap();
        assert_eq!(display.color, GlyphColor::Correct);
        assert!(!display.input_enabled);
    }

    #[test]
    fn wrong_answer_names_meanings() {
        let mut session = build_session();
        session.submit_answer("wolf", fixed_now()).unwrap();

        assert_eq!(session.score(), 0);
        assert_eq!(session.judgment(), Judgment::Incorrect);
        assert_eq!(session.feedback(), "❌ Wrong. Correct: dog, puppy");
        assert_eq!(session.display().unwrap().color, GlyphColor::Wrong);
    }

    #[test]
    fn resubmitting_while_revealing_is_rejected() {
        let mut session = build_session();
        session.submit_answer("dog", fixed_now()).unwrap();

        session.set_pending_answer("dog");
        assert_eq!(session.submit(after(10)).unwrap_err(), SessionError::AlreadyChecked);
        assert_eq!(
            session.submit_answer("dog", after(20)).unwrap_err(),
            SessionError::AlreadyChecked
        );
        assert_eq!(session.score(), 1);
        assert_eq!(session.reveal_started_at(), Some(fixed_now()));
    }

    #[test]
    fn reveal_waits_then_advances() {
        let mut session = build_session();
        session.submit_answer("dog", fixed_now()).unwrap();

        assert_eq!(
            session.poll_reveal(after(999)),
            RevealPoll::Waiting {
                retry_after: POLL_INTERVAL
            }
        );
        assert_eq!(session.position(), 0);
        assert!(session.is_checked());

        assert_eq!(
            session.poll_reveal(after(1_000)),
            RevealPoll::Advanced { finished: false }
        );
        assert_eq!(session.position(), 1);
        assert_eq!(session.score(), 1);
        assert!(!session.is_checked());
        assert!(session.pending_answer().is_empty());
        assert!(session.feedback().is_empty());
        assert_eq!(session.judgment(), Judgment::Unknown);
        assert_eq!(session.phase(), QuizPhase::Answering);
        assert_eq!(session.current_card().map(Card::hanzi), Some("猫"));
    }

    #[test]
    fn poll_without_reveal_is_idle() {
        let mut session = build_session();
        assert_eq!(session.poll_reveal(after(5_000)), RevealPoll::Idle);
        assert_eq!(session.position(), 0);
    }

    #[test]
    fn finishing_reports_score() {
        let mut session = build_session();
        let answers = ["dog", "dog", "fish"];
        let mut now = fixed_now();
        for answer in answers {
            session.submit_answer(answer, now).unwrap();
            now += TimeDelta::milliseconds(1_000);
            session.poll_reveal(now);
        }

        assert_eq!(session.phase(), QuizPhase::Finished);
        assert_eq!(session.position(), 3);
        assert!(session.display().is_none());
        let result = session.result().unwrap();
        assert_eq!(result.score(), 2);
        assert_eq!(result.total(), 3);
        assert_eq!(result.percentage(), 67);
        assert_eq!(session.submit(now).unwrap_err(), SessionError::Finished);
    }

    #[test]
    fn stop_during_reveal_finishes_immediately() {
        let mut session = build_session();
        session.submit_answer("dog", fixed_now()).unwrap();

        session.stop();

        assert_eq!(session.phase(), QuizPhase::Finished);
        assert_eq!(session.position(), session.total_cards());
        assert!(session.reveal().is_none());
        assert_eq!(session.poll_reveal(after(2_000)), RevealPoll::Idle);
        assert_eq!(session.position(), 3);
        assert_eq!(session.result().unwrap().to_string(), "Finished! Your score: 1/3 (33%)");
    }

    #[test]
    fn stop_when_finished_is_noop() {
        let mut session = build_session();
        session.stop();
        session.stop();
        assert_eq!(session.position(), 3);
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn pending_answer_is_frozen_while_revealing() {
        let mut session = build_session();
        session.submit_answer("dog", fixed_now()).unwrap();
        session.set_pending_answer("cat");
        assert_eq!(session.pending_answer(), "dog");
    }
}
