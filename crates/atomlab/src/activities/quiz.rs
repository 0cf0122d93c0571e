//! Knowledge-check quiz engine.
//!
//! States, per question `i`:
//!
//! ```text
//! Answering(i) --select(o)--> Selected(i, o) --confirm--> Revealed(i, o)
//!                                  ^   |                        |
//!                                  +---+ select(o')             | reveal delay
//!                                                               v
//!                                  Answering(i + 1)  or  Completed (last question)
//! ```
//!
//! `reset` returns to `Answering(0)` from anywhere and cancels a pending
//! reveal timer. The auto-advance runs off the virtual clock passed to
//! [`QuizEngine::tick`], so a test harness can drive it synchronously.

use serde::Serialize;

use crate::api::activity::{Activity, LabContext};
use crate::api::types::LabEvent;
use crate::bridge::protocol::event_kinds;
use crate::catalog::QuizQuestion;
use crate::core::timer::{OneShotTimer, TimerHandle};
use crate::error::LabError;
use crate::input::queue::{CommandQueue, LabCommand};

/// Where the session is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum QuizState {
    /// On `question`, nothing chosen yet.
    Answering { question: usize },
    /// `option` chosen but not locked in.
    Selected { question: usize, option: usize },
    /// Answer recorded, correctness on display until the reveal timer fires.
    Revealed { question: usize, option: usize },
    /// Every question answered.
    Completed,
}

impl QuizState {
    pub fn tag(&self) -> &'static str {
        match self {
            QuizState::Answering { .. } => "answering",
            QuizState::Selected { .. } => "selected",
            QuizState::Revealed { .. } => "revealed",
            QuizState::Completed => "completed",
        }
    }
}

/// Score bucket shown on the summary card.
///
/// Thresholds are literal question counts tuned for the five-question
/// catalog; they do not scale with the catalog size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreTier {
    Perfect,
    Excellent,
    Good,
    NeedsReview,
}

impl ScoreTier {
    pub fn from_score(score: usize) -> Self {
        match score {
            s if s >= 5 => ScoreTier::Perfect,
            4 => ScoreTier::Excellent,
            3 => ScoreTier::Good,
            _ => ScoreTier::NeedsReview,
        }
    }

    pub fn headline(self) -> &'static str {
        match self {
            ScoreTier::Perfect => "Perfect Score! Atomic Structure Master!",
            ScoreTier::Excellent => "Excellent Understanding!",
            ScoreTier::Good => "Good Job! Keep Learning!",
            ScoreTier::NeedsReview => "Review the Material and Try Again!",
        }
    }

    /// Wire code used in `QUIZ_COMPLETED` events.
    pub fn code(self) -> u32 {
        match self {
            ScoreTier::Perfect => 0,
            ScoreTier::Excellent => 1,
            ScoreTier::Good => 2,
            ScoreTier::NeedsReview => 3,
        }
    }
}

/// Colour band of the big score number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    High,
    Medium,
    Low,
}

impl ScoreBand {
    pub fn from_score(score: usize) -> Self {
        match score {
            s if s >= 4 => ScoreBand::High,
            3 => ScoreBand::Medium,
            _ => ScoreBand::Low,
        }
    }
}

/// Final result, only available once the quiz is completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizResult {
    pub score: usize,
    pub total: usize,
    pub tier: ScoreTier,
    pub band: ScoreBand,
}

/// How the shell should paint one answer option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionMark {
    Neutral,
    /// Chosen, not yet revealed.
    Selected,
    /// Revealed: this is the right answer.
    Correct,
    /// Revealed: chosen, and wrong.
    Incorrect,
}

/// One quiz run over a fixed question list.
pub struct QuizEngine {
    questions: Vec<QuizQuestion>,
    state: QuizState,
    /// One slot per question; `None` means unanswered.
    answers: Vec<Option<usize>>,
    reveal_timer: OneShotTimer,
    /// The arming made by the last confirm. Only this one may advance the session.
    reveal: Option<TimerHandle>,
    reveal_delay_ms: u64,
}

impl QuizEngine {
    pub fn new(questions: Vec<QuizQuestion>, reveal_delay_ms: u64) -> Result<Self, LabError> {
        if questions.is_empty() {
            return Err(LabError::Catalog("question catalog is empty".into()));
        }
        let answers = vec![None; questions.len()];
        Ok(Self {
            questions,
            state: QuizState::Answering { question: 0 },
            answers,
            reveal_timer: OneShotTimer::new(),
            reveal: None,
            reveal_delay_ms,
        })
    }

    // -- Commands --

    /// Choose `option` for the active question. Re-choosing before confirming
    /// replaces the choice; once revealed or completed this does nothing.
    pub fn select_option(&mut self, option: usize) -> Result<(), LabError> {
        let question = match self.state {
            QuizState::Answering { question } | QuizState::Selected { question, .. } => question,
            QuizState::Revealed { .. } | QuizState::Completed => return Ok(()),
        };
        let len = self.questions[question].options.len();
        if option >= len {
            return Err(LabError::IndexOutOfRange { what: "option", index: option, len });
        }
        self.state = QuizState::Selected { question, option };
        Ok(())
    }

    /// Lock in the selected option at virtual time `now_ms`: record it, reveal
    /// correctness and schedule the auto-advance.
    ///
    /// Fails with `AnswerRequired` when nothing is selected; state is untouched.
    pub fn confirm(&mut self, now_ms: u64) -> Result<(), LabError> {
        match self.state {
            QuizState::Answering { .. } => Err(LabError::AnswerRequired),
            QuizState::Selected { question, option } => {
                self.reveal = Some(self.reveal_timer.arm(now_ms, self.reveal_delay_ms)?);
                self.answers[question] = Some(option);
                self.state = QuizState::Revealed { question, option };
                log::debug!(
                    "quiz: question {} answered {} ({})",
                    question + 1,
                    QuizQuestion::option_letter(option),
                    if self.questions[question].is_correct(option) { "correct" } else { "incorrect" }
                );
                Ok(())
            }
            QuizState::Revealed { .. } | QuizState::Completed => Ok(()),
        }
    }

    /// Start over from the first question, cancelling any pending advance.
    pub fn reset(&mut self) {
        if self.cancel_reveal() {
            log::debug!("quiz: cancelled pending advance on reset");
        }
        self.answers.iter_mut().for_each(|slot| *slot = None);
        self.state = QuizState::Answering { question: 0 };
    }

    /// Advance the reveal timer to `now_ms`. Returns the new state if the
    /// auto-advance fired.
    pub fn tick(&mut self, now_ms: u64) -> Option<QuizState> {
        let fired = self.reveal_timer.poll(now_ms)?;
        if self.reveal != Some(fired) {
            log::warn!("quiz: ignoring stale reveal timer due at {} ms", fired.due_ms());
            return None;
        }
        self.reveal = None;
        let QuizState::Revealed { question, .. } = self.state else {
            return None;
        };
        self.state = if question + 1 < self.questions.len() {
            QuizState::Answering { question: question + 1 }
        } else {
            QuizState::Completed
        };
        Some(self.state)
    }

    // -- Queries --

    pub fn state(&self) -> QuizState {
        self.state
    }

    /// Index of the question on screen. Stays on the last question once completed.
    pub fn current_index(&self) -> usize {
        match self.state {
            QuizState::Answering { question }
            | QuizState::Selected { question, .. }
            | QuizState::Revealed { question, .. } => question,
            QuizState::Completed => self.questions.len() - 1,
        }
    }

    pub fn current_question(&self) -> &QuizQuestion {
        &self.questions[self.current_index()]
    }

    pub fn selected_option(&self) -> Option<usize> {
        match self.state {
            QuizState::Selected { option, .. } | QuizState::Revealed { option, .. } => Some(option),
            _ => None,
        }
    }

    pub fn is_revealed(&self) -> bool {
        matches!(self.state, QuizState::Revealed { .. })
    }

    pub fn is_completed(&self) -> bool {
        self.state == QuizState::Completed
    }

    /// Whether the revealed answer is right. `None` outside the reveal.
    pub fn is_correct(&self) -> Option<bool> {
        match self.state {
            QuizState::Revealed { question, option } => Some(self.questions[question].is_correct(option)),
            _ => None,
        }
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index() == self.questions.len() - 1
    }

    pub fn answers(&self) -> &[Option<usize>] {
        &self.answers
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Whether an auto-advance is scheduled.
    pub fn has_pending_advance(&self) -> bool {
        self.pending_reveal().is_some()
    }

    /// Handle of the scheduled auto-advance, if it is still live.
    pub fn pending_reveal(&self) -> Option<TimerHandle> {
        self.reveal.filter(|handle| self.reveal_timer.is_pending(*handle))
    }

    /// Milliseconds left on the reveal, for a countdown in the shell.
    pub fn reveal_remaining_ms(&self, now_ms: u64) -> Option<u64> {
        self.pending_reveal()?;
        self.reveal_timer.remaining(now_ms)
    }

    fn cancel_reveal(&mut self) -> bool {
        self.reveal = None;
        self.reveal_timer.cancel()
    }

    /// Correct answers recorded so far, recounted from the answer slots.
    pub fn score(&self) -> usize {
        self.answers
            .iter()
            .zip(&self.questions)
            .filter(|(answer, q)| **answer == Some(q.correct_answer))
            .count()
    }

    /// Score and tier, once every question is answered.
    pub fn result(&self) -> Option<QuizResult> {
        if !self.is_completed() {
            return None;
        }
        let score = self.score();
        Some(QuizResult {
            score,
            total: self.questions.len(),
            tier: ScoreTier::from_score(score),
            band: ScoreBand::from_score(score),
        })
    }

    /// Percentage of the progress bar: the active question counts as reached.
    pub fn progress_percent(&self) -> f32 {
        (self.current_index() + 1) as f32 / self.questions.len() as f32 * 100.0
    }

    /// Paint instructions for each option of the active question.
    pub fn option_marks(&self) -> Vec<OptionMark> {
        let question = self.current_question();
        (0..question.options.len())
            .map(|i| match self.state {
                QuizState::Revealed { option, .. } => {
                    if i == question.correct_answer {
                        OptionMark::Correct
                    } else if i == option {
                        OptionMark::Incorrect
                    } else {
                        OptionMark::Neutral
                    }
                }
                QuizState::Selected { option, .. } if option == i => OptionMark::Selected,
                _ => OptionMark::Neutral,
            })
            .collect()
    }

    pub fn snapshot(&self) -> QuizSnapshot {
        let question = self.current_question();
        QuizSnapshot {
            state: self.state,
            tag: self.state.tag(),
            current_index: self.current_index(),
            total: self.questions.len(),
            question: question.question.clone(),
            options: question.options.clone(),
            option_marks: self.option_marks(),
            selected_option: self.selected_option(),
            revealed: self.is_revealed(),
            is_correct: self.is_correct(),
            explanation: self.is_revealed().then(|| question.explanation.clone()),
            is_last_question: self.is_last_question(),
            progress_percent: self.progress_percent(),
            answers: self.answers.clone(),
            result: self.result(),
            headline: self.result().map(|r| r.tier.headline()),
            reveal_due_ms: self.pending_reveal().map(|h| h.due_ms()),
        }
    }

    fn apply(&mut self, ctx: &mut LabContext, command: &LabCommand) -> Result<(), LabError> {
        match command {
            LabCommand::SelectOption { option } => {
                let before = self.state;
                self.select_option(*option)?;
                if self.state != before {
                    ctx.emit(LabEvent::with(
                        event_kinds::OPTION_SELECTED,
                        self.current_index() as f32,
                        *option as f32,
                        0.0,
                    ));
                }
            }
            LabCommand::Confirm => {
                let was_selected = matches!(self.state, QuizState::Selected { .. });
                self.confirm(ctx.now_ms())?;
                if let (true, QuizState::Revealed { question, option }) = (was_selected, self.state) {
                    let correct = self.questions[question].is_correct(option);
                    ctx.emit(LabEvent::with(
                        event_kinds::ANSWER_REVEALED,
                        question as f32,
                        option as f32,
                        if correct { 1.0 } else { 0.0 },
                    ));
                }
            }
            LabCommand::ResetQuiz => {
                self.reset();
                log::info!("quiz: reset");
                ctx.emit(LabEvent::new(event_kinds::QUIZ_RESET));
            }
            _ => {}
        }
        Ok(())
    }

    fn emit_advance(&self, ctx: &mut LabContext) {
        if let Some(result) = self.result() {
            log::info!("quiz: completed with {}/{}", result.score, result.total);
            ctx.emit(LabEvent::with(
                event_kinds::QUIZ_COMPLETED,
                result.score as f32,
                result.total as f32,
                result.tier.code() as f32,
            ));
        } else {
            ctx.emit(LabEvent::with(
                event_kinds::QUESTION_ADVANCED,
                self.current_index() as f32,
                0.0,
                0.0,
            ));
        }
    }
}

impl Activity for QuizEngine {
    fn init(&mut self, _ctx: &mut LabContext) {
        log::info!("quiz: {} questions, reveal delay {} ms", self.questions.len(), self.reveal_delay_ms);
    }

    fn update(&mut self, ctx: &mut LabContext, commands: &CommandQueue) {
        for command in commands.iter() {
            match self.apply(ctx, command) {
                Ok(()) => {}
                Err(LabError::AnswerRequired) => {
                    ctx.emit(LabEvent::new(event_kinds::ANSWER_REQUIRED));
                }
                Err(err) => {
                    log::warn!("quiz: rejected {:?}: {}", command, err);
                    ctx.emit(LabEvent::with(
                        event_kinds::COMMAND_REJECTED,
                        command.kind() as f32,
                        0.0,
                        0.0,
                    ));
                }
            }
        }

        if self.tick(ctx.now_ms()).is_some() {
            self.emit_advance(ctx);
        }
    }

    fn on_teardown(&mut self) {
        if self.cancel_reveal() {
            log::debug!("quiz: cancelled pending advance on teardown");
        }
    }
}

impl Drop for QuizEngine {
    fn drop(&mut self) {
        self.on_teardown();
    }
}

/// Outbound view of the quiz.
#[derive(Debug, Clone, Serialize)]
pub struct QuizSnapshot {
    pub state: QuizState,
    pub tag: &'static str,
    pub current_index: usize,
    pub total: usize,
    pub question: String,
    pub options: Vec<String>,
    pub option_marks: Vec<OptionMark>,
    pub selected_option: Option<usize>,
    pub revealed: bool,
    pub is_correct: Option<bool>,
    pub explanation: Option<String>,
    pub is_last_question: bool,
    pub progress_percent: f32,
    pub answers: Vec<Option<usize>>,
    pub result: Option<QuizResult>,
    pub headline: Option<&'static str>,
    /// Virtual time the auto-advance fires at, while one is scheduled.
    pub reveal_due_ms: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::protocol::command_kinds;
    use crate::catalog::Library;

    const DELAY: u64 = 2000;

    fn engine() -> QuizEngine {
        QuizEngine::new(Library::load().unwrap().questions, DELAY).unwrap()
    }

    /// Select, confirm and let the reveal timer run out. Returns the new time.
    fn answer(quiz: &mut QuizEngine, option: usize, now: u64) -> u64 {
        quiz.select_option(option).unwrap();
        quiz.confirm(now).unwrap();
        let later = now + DELAY;
        assert!(quiz.tick(later).is_some());
        later
    }

    #[test]
    fn starts_answering_first_question() {
        let quiz = engine();
        assert_eq!(quiz.state(), QuizState::Answering { question: 0 });
        assert_eq!(quiz.answers(), &[None::<usize>; 5]);
        assert_eq!(quiz.selected_option(), None);
        assert!(!quiz.is_revealed());
    }

    #[test]
    fn reselecting_replaces_choice() {
        let mut quiz = engine();
        quiz.select_option(0).unwrap();
        quiz.select_option(2).unwrap();
        assert_eq!(quiz.state(), QuizState::Selected { question: 0, option: 2 });
        assert_eq!(quiz.answers()[0], None);
    }

    #[test]
    fn confirm_without_selection_changes_nothing() {
        let mut quiz = engine();
        let before = quiz.snapshot();
        assert_eq!(quiz.confirm(0), Err(LabError::AnswerRequired));
        let after = quiz.snapshot();
        assert_eq!(before.state, after.state);
        assert_eq!(before.answers, after.answers);
        assert!(!quiz.has_pending_advance());
    }

    #[test]
    fn confirm_records_and_reveals() {
        let mut quiz = engine();
        quiz.select_option(1).unwrap();
        quiz.confirm(100).unwrap();
        assert_eq!(quiz.state(), QuizState::Revealed { question: 0, option: 1 });
        assert_eq!(quiz.answers()[0], Some(1));
        assert_eq!(quiz.is_correct(), Some(true));
        assert!(quiz.has_pending_advance());
    }

    #[test]
    fn selection_is_ignored_once_revealed() {
        let mut quiz = engine();
        quiz.select_option(0).unwrap();
        quiz.confirm(0).unwrap();
        quiz.select_option(3).unwrap();
        assert_eq!(quiz.state(), QuizState::Revealed { question: 0, option: 0 });
        assert_eq!(quiz.is_correct(), Some(false));
    }

    #[test]
    fn advance_waits_for_the_delay() {
        let mut quiz = engine();
        quiz.select_option(1).unwrap();
        quiz.confirm(1000).unwrap();
        assert_eq!(quiz.tick(2999), None);
        assert!(quiz.is_revealed());
        assert_eq!(quiz.tick(3000), Some(QuizState::Answering { question: 1 }));
        assert_eq!(quiz.selected_option(), None);
        assert!(!quiz.is_revealed());
    }

    #[test]
    fn option_out_of_range_is_rejected() {
        let mut quiz = engine();
        let err = quiz.select_option(4).unwrap_err();
        assert_eq!(err, LabError::IndexOutOfRange { what: "option", index: 4, len: 4 });
        assert_eq!(quiz.state(), QuizState::Answering { question: 0 });
    }

    #[test]
    fn four_of_five_is_excellent() {
        let mut quiz = engine();
        let correct = [1, 3, 1, 1];
        let mut now = 0;
        for &option in &correct {
            now = answer(&mut quiz, option, now);
        }
        assert!(quiz.is_last_question());
        answer(&mut quiz, 0, now);

        assert!(quiz.is_completed());
        let result = quiz.result().unwrap();
        assert_eq!(result.score, 4);
        assert_eq!(result.total, 5);
        assert_eq!(result.tier, ScoreTier::Excellent);
        assert_eq!(result.band, ScoreBand::High);
        // Reading the score twice gives the same answer.
        assert_eq!(quiz.score(), quiz.score());
    }

    #[test]
    fn reset_after_completion() {
        let mut quiz = engine();
        let mut now = 0;
        for option in [1, 3, 1, 1, 2] {
            now = answer(&mut quiz, option, now);
        }
        assert_eq!(quiz.result().unwrap().tier, ScoreTier::Perfect);

        quiz.reset();
        assert_eq!(quiz.state(), QuizState::Answering { question: 0 });
        assert_eq!(quiz.answers(), &[None::<usize>; 5]);
        assert_eq!(quiz.score(), 0);
        assert_eq!(quiz.result(), None);
    }

    #[test]
    fn reset_cancels_pending_advance() {
        let mut quiz = engine();
        quiz.select_option(1).unwrap();
        quiz.confirm(0).unwrap();
        quiz.reset();
        assert!(!quiz.has_pending_advance());
        assert_eq!(quiz.tick(10_000), None);
        assert_eq!(quiz.state(), QuizState::Answering { question: 0 });
    }

    #[test]
    fn earlier_reveal_cannot_advance_a_new_session() {
        let mut quiz = engine();
        quiz.select_option(1).unwrap();
        quiz.confirm(0).unwrap();
        let first = quiz.pending_reveal().unwrap();
        assert_eq!(first.due_ms(), DELAY);

        quiz.reset();
        assert_eq!(quiz.pending_reveal(), None);
        quiz.select_option(1).unwrap();
        quiz.confirm(1500).unwrap();
        let second = quiz.pending_reveal().unwrap();
        assert_ne!(first, second);

        // The first arming's due time passes without effect.
        assert_eq!(quiz.tick(DELAY), None);
        assert!(quiz.is_revealed());
        assert_eq!(quiz.reveal_remaining_ms(DELAY), Some(1500));
        assert_eq!(quiz.snapshot().reveal_due_ms, Some(1500 + DELAY));

        assert_eq!(quiz.tick(1500 + DELAY), Some(QuizState::Answering { question: 1 }));
        assert_eq!(quiz.pending_reveal(), None);
        assert_eq!(quiz.reveal_remaining_ms(1500 + DELAY), None);
        assert_eq!(quiz.snapshot().reveal_due_ms, None);
    }

    #[test]
    fn teardown_drops_the_reveal_handle() {
        let mut quiz = engine();
        quiz.select_option(0).unwrap();
        quiz.confirm(0).unwrap();
        assert!(quiz.pending_reveal().is_some());
        quiz.on_teardown();
        assert_eq!(quiz.pending_reveal(), None);
        assert_eq!(quiz.tick(10 * DELAY), None);
        assert!(quiz.is_revealed());
    }

    #[test]
    fn rejected_option_reports_its_command_kind() {
        let mut quiz = engine();
        let mut ctx = LabContext::default();
        let commands: CommandQueue = vec![LabCommand::SelectOption { option: 7 }].into_iter().collect();
        quiz.update(&mut ctx, &commands);
        assert_eq!(
            ctx.events(),
            &[LabEvent::with(
                event_kinds::COMMAND_REJECTED,
                command_kinds::SELECT_OPTION as f32,
                0.0,
                0.0
            )]
        );
    }

    #[test]
    fn tiers_use_literal_thresholds() {
        assert_eq!(ScoreTier::from_score(0), ScoreTier::NeedsReview);
        assert_eq!(ScoreTier::from_score(2), ScoreTier::NeedsReview);
        assert_eq!(ScoreTier::from_score(3), ScoreTier::Good);
        assert_eq!(ScoreTier::from_score(4), ScoreTier::Excellent);
        assert_eq!(ScoreTier::from_score(5), ScoreTier::Perfect);
        assert_eq!(ScoreTier::from_score(7), ScoreTier::Perfect);
        assert_eq!(ScoreBand::from_score(3), ScoreBand::Medium);
        assert_eq!(ScoreBand::from_score(1), ScoreBand::Low);
    }

    #[test]
    fn option_marks_follow_state() {
        let mut quiz = engine();
        quiz.select_option(2).unwrap();
        assert_eq!(
            quiz.option_marks(),
            vec![OptionMark::Neutral, OptionMark::Neutral, OptionMark::Selected, OptionMark::Neutral]
        );
        quiz.confirm(0).unwrap();
        assert_eq!(
            quiz.option_marks(),
            vec![OptionMark::Neutral, OptionMark::Correct, OptionMark::Incorrect, OptionMark::Neutral]
        );
    }

    #[test]
    fn progress_counts_the_active_question() {
        let mut quiz = engine();
        assert!((quiz.progress_percent() - 20.0).abs() < 1e-4);
        answer(&mut quiz, 1, 0);
        assert!((quiz.progress_percent() - 40.0).abs() < 1e-4);
    }

    #[test]
    fn snapshot_shows_explanation_only_while_revealed() {
        let mut quiz = engine();
        quiz.select_option(1).unwrap();
        assert!(quiz.snapshot().explanation.is_none());
        quiz.confirm(0).unwrap();
        let snap = quiz.snapshot();
        assert_eq!(snap.tag, "revealed");
        assert!(snap.explanation.unwrap().starts_with("The number of protons"));
    }

    #[test]
    fn update_reports_answer_required() {
        let mut quiz = engine();
        let mut ctx = LabContext::default();
        let commands: CommandQueue = vec![LabCommand::Confirm].into_iter().collect();
        quiz.update(&mut ctx, &commands);
        assert_eq!(ctx.events(), &[LabEvent::new(event_kinds::ANSWER_REQUIRED)]);
        assert_eq!(quiz.state(), QuizState::Answering { question: 0 });
    }

    #[test]
    fn update_advances_on_virtual_time() {
        let mut quiz = engine();
        let mut ctx = LabContext::default();
        let commands: CommandQueue = vec![
            LabCommand::SelectOption { option: 3 },
            LabCommand::Confirm,
        ]
        .into_iter()
        .collect();
        quiz.update(&mut ctx, &commands);
        assert_eq!(
            ctx.events()[1],
            LabEvent::with(event_kinds::ANSWER_REVEALED, 0.0, 3.0, 0.0)
        );

        ctx.clear_frame_data();
        ctx.set_now_ms(DELAY);
        quiz.update(&mut ctx, &CommandQueue::new());
        assert_eq!(
            ctx.events(),
            &[LabEvent::with(event_kinds::QUESTION_ADVANCED, 1.0, 0.0, 0.0)]
        );
    }

    #[test]
    fn empty_catalog_is_rejected() {
        assert!(QuizEngine::new(Vec::new(), DELAY).is_err());
    }
}
