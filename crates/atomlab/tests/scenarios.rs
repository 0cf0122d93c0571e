//! End-to-end scenarios driven through the command queue and a virtual clock.

use atomlab::bridge::protocol::event_kinds;
use atomlab::{
    Activity, AtomLab, CommandQueue, DisplayToggle, LabCommand, LabConfig, LabContext, LabEvent,
    QuizState, ScoreTier, VirtualClock,
};

/// Minimal harness: one lab, one clock, one context.
struct Harness {
    lab: AtomLab,
    clock: VirtualClock,
    ctx: LabContext,
}

impl Harness {
    fn new() -> Self {
        let config = LabConfig::default();
        let mut ctx = LabContext::new(config.max_events);
        let mut lab = AtomLab::new(&config).expect("embedded catalogs load");
        lab.init(&mut ctx);
        Self {
            lab,
            clock: VirtualClock::new(),
            ctx,
        }
    }

    /// Apply commands at the current time, then advance the clock and poll.
    fn step(&mut self, commands: Vec<LabCommand>, advance_ms: u64) -> Vec<LabEvent> {
        let mut events = Vec::new();

        self.ctx.clear_frame_data();
        self.ctx.set_now_ms(self.clock.now_ms());
        let queue: CommandQueue = commands.into_iter().collect();
        self.lab.update(&mut self.ctx, &queue);
        events.extend_from_slice(self.ctx.events());

        self.ctx.clear_frame_data();
        self.ctx.set_now_ms(self.clock.advance_ms(advance_ms));
        self.lab.update(&mut self.ctx, &CommandQueue::new());
        events.extend_from_slice(self.ctx.events());
        events
    }
}

#[test]
fn four_correct_then_one_wrong_is_excellent() {
    let mut h = Harness::new();
    let choices = [1, 3, 1, 1, 0];
    let mut last_events = Vec::new();

    for option in choices {
        last_events = h.step(
            vec![LabCommand::SelectOption { option }, LabCommand::Confirm],
            2000,
        );
    }

    let quiz = h.lab.quiz();
    assert_eq!(quiz.state(), QuizState::Completed);
    let result = quiz.result().unwrap();
    assert_eq!(result.score, 4);
    assert_eq!(result.tier, ScoreTier::Excellent);

    let completed = last_events
        .iter()
        .find(|e| e.kind == event_kinds::QUIZ_COMPLETED)
        .expect("completion event");
    assert_eq!(completed.a, 4.0);
    assert_eq!(completed.b, 5.0);
    assert_eq!(completed.c, ScoreTier::Excellent.code() as f32);
}

#[test]
fn advance_does_not_fire_early() {
    let mut h = Harness::new();
    h.step(vec![LabCommand::SelectOption { option: 1 }, LabCommand::Confirm], 1999);
    assert!(h.lab.quiz().is_revealed());
    h.step(vec![], 1);
    assert_eq!(h.lab.quiz().state(), QuizState::Answering { question: 1 });
}

#[test]
fn confirm_without_answer_is_a_noop() {
    let mut h = Harness::new();
    let before = h.lab.quiz().answers().to_vec();
    let events = h.step(vec![LabCommand::Confirm], 5000);
    assert!(events.contains(&LabEvent::new(event_kinds::ANSWER_REQUIRED)));
    assert_eq!(h.lab.quiz().answers(), before.as_slice());
    assert_eq!(h.lab.quiz().state(), QuizState::Answering { question: 0 });
}

#[test]
fn reset_from_completed_clears_everything() {
    let mut h = Harness::new();
    for option in [1, 3, 1, 1, 2] {
        h.step(vec![LabCommand::SelectOption { option }, LabCommand::Confirm], 2000);
    }
    assert_eq!(h.lab.quiz().result().unwrap().tier, ScoreTier::Perfect);

    h.step(vec![LabCommand::ResetQuiz], 0);
    let quiz = h.lab.quiz();
    assert_eq!(quiz.state(), QuizState::Answering { question: 0 });
    assert!(quiz.answers().iter().all(Option::is_none));
}

#[test]
fn reset_mid_reveal_stops_the_advance() {
    let mut h = Harness::new();
    h.step(vec![LabCommand::SelectOption { option: 1 }, LabCommand::Confirm], 500);
    h.step(vec![LabCommand::ResetQuiz], 5000);
    assert_eq!(h.lab.quiz().state(), QuizState::Answering { question: 0 });
    assert!(!h.lab.quiz().has_pending_advance());
}

#[test]
fn carbon_without_electrons_keeps_radii() {
    let mut h = Harness::new();
    h.step(vec![LabCommand::SelectAtomBySymbol { symbol: "C".into() }], 0);
    let snap = h.lab.viewer().snapshot();
    assert_eq!(snap.atom.protons, 6);
    assert_eq!(snap.atom.neutrons, 6);
    assert_eq!(snap.atom.electrons, 6);
    assert_eq!(snap.atom.shells, vec![2, 4]);
    let radii: Vec<f32> = snap.shells.iter().map(|s| s.radius).collect();
    assert_eq!(snap.shells[1].electrons.len(), 4);

    h.step(vec![LabCommand::Toggle { toggle: DisplayToggle::Electrons }], 0);
    let snap = h.lab.viewer().snapshot();
    let radii_after: Vec<f32> = snap.shells.iter().map(|s| s.radius).collect();
    assert_eq!(radii, radii_after);
    assert!(snap.shells.iter().all(|s| s.electrons.is_empty()));
}

#[test]
fn navigator_wraps_and_reports_bounds() {
    let mut h = Harness::new();
    assert!(h.lab.navigator().is_first());

    h.step(vec![LabCommand::JumpToModel { index: 3 }], 0);
    assert!(h.lab.navigator().is_last());

    h.step(vec![LabCommand::NextModel], 0);
    assert_eq!(h.lab.navigator().current_index(), 0);

    h.step(vec![LabCommand::PreviousModel], 0);
    assert_eq!(h.lab.navigator().current_index(), 3);

    let events = h.step(vec![LabCommand::JumpToModel { index: 4 }], 0);
    assert!(events.iter().any(|e| e.kind == event_kinds::COMMAND_REJECTED));
    assert_eq!(h.lab.navigator().current_index(), 3);
}
