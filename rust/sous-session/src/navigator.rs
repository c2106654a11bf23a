//! The step cursor.
//!
//! The navigator owns the assembled steps and a 1-based cursor into them.
//! The cursor always stays within `1..=total_steps`: moving past either end
//! is refused with a boundary message and leaves it where it was.

use std::sync::LazyLock;

use regex::Regex;
use sous_steps::Step;
use tracing::debug;

pub const LAST_STEP_MESSAGE: &str = "You're already on the last step!";
pub const FIRST_STEP_MESSAGE: &str = "You're already on the first step!";
pub const NO_STEPS_MESSAGE: &str = "This recipe has no steps.";

static NEXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:next|forward|advance)\b").expect("valid next regex"));

static PREVIOUS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:previous|prev|last|back|before)\b").expect("valid previous regex")
});

static FIRST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:first|start|begin)\b").expect("valid first regex"));

static REPEAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:repeat|again)\b").expect("valid repeat regex"));

/// A cursor transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Next,
    Previous,
    First,
    Repeat,
}

impl Move {
    /// The move a query asks for. Keywords are checked in the order next,
    /// previous, first, repeat.
    pub fn parse(query: &str) -> Option<Move> {
        if NEXT.is_match(query) {
            Some(Move::Next)
        } else if PREVIOUS.is_match(query) {
            Some(Move::Previous)
        } else if FIRST.is_match(query) {
            Some(Move::First)
        } else if REPEAT.is_match(query) {
            Some(Move::Repeat)
        } else {
            None
        }
    }
}

/// What a transition did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The cursor is on a (possibly unchanged) step.
    Moved,
    /// `next` on the last step.
    AtLastStep,
    /// `previous` on the first step.
    AtFirstStep,
    /// There are no steps to move between.
    Empty,
}

#[derive(Debug, Clone)]
pub struct StepNavigator {
    steps: Vec<Step>,
    total_steps: u32,
    cursor: u32,
}

impl StepNavigator {
    pub fn new(steps: Vec<Step>) -> Self {
        let total_steps = steps.iter().map(|step| step.step_number).max().unwrap_or(0);
        StepNavigator {
            steps,
            total_steps,
            cursor: 1,
        }
    }

    pub fn cursor(&self) -> u32 {
        self.cursor
    }

    pub fn total_steps(&self) -> u32 {
        self.total_steps
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Every record numbered with the current cursor.
    pub fn current(&self) -> impl Iterator<Item = &Step> {
        let cursor = self.cursor;
        self.steps
            .iter()
            .filter(move |step| step.step_number == cursor)
    }

    /// The first record at the cursor.
    pub fn current_step(&self) -> Option<&Step> {
        self.current().next()
    }

    pub fn apply(&mut self, movement: Move) -> Outcome {
        if self.total_steps == 0 {
            return Outcome::Empty;
        }

        let outcome = match movement {
            Move::Next if self.cursor >= self.total_steps => Outcome::AtLastStep,
            Move::Next => {
                self.cursor += 1;
                Outcome::Moved
            }
            Move::Previous if self.cursor <= 1 => Outcome::AtFirstStep,
            Move::Previous => {
                self.cursor -= 1;
                Outcome::Moved
            }
            Move::First => {
                self.cursor = 1;
                Outcome::Moved
            }
            Move::Repeat => Outcome::Moved,
        };
        debug!(?movement, ?outcome, cursor = self.cursor, "navigated");
        outcome
    }

    /// Apply a move and produce the reply: the step at the cursor, or the
    /// boundary message if the cursor could not move.
    pub fn respond(&mut self, movement: Move) -> String {
        match self.apply(movement) {
            Outcome::Moved => self.render(),
            Outcome::AtLastStep => LAST_STEP_MESSAGE.to_string(),
            Outcome::AtFirstStep => FIRST_STEP_MESSAGE.to_string(),
            Outcome::Empty => NO_STEPS_MESSAGE.to_string(),
        }
    }

    /// The records at the cursor, each with its notes.
    pub fn render(&self) -> String {
        let rendered: Vec<String> = self.current().map(Step::to_string).collect();
        if rendered.is_empty() {
            NO_STEPS_MESSAGE.to_string()
        } else {
            rendered.join("\n")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn navigator(count: u32) -> StepNavigator {
        StepNavigator::new(
            (1..=count)
                .map(|n| Step::new(n, format!("{n}.1"), format!("Do thing {n}.")))
                .collect(),
        )
    }

    #[test]
    fn parses_keywords_in_priority_order() {
        assert_eq!(Move::parse("go to the next step"), Some(Move::Next));
        assert_eq!(Move::parse("go back"), Some(Move::Previous));
        assert_eq!(Move::parse("What is the first step?"), Some(Move::First));
        assert_eq!(Move::parse("say that again"), Some(Move::Repeat));
        assert_eq!(Move::parse("next, not the previous one"), Some(Move::Next));
        assert_eq!(Move::parse("what does fold mean"), None);
        assert_eq!(Move::parse("restart"), None);
    }

    #[test]
    fn next_stops_at_last_step() {
        let mut navigator = navigator(2);
        assert_eq!(navigator.respond(Move::Next), "Step 2: Do thing 2.");
        assert_eq!(navigator.respond(Move::Next), LAST_STEP_MESSAGE);
        assert_eq!(navigator.cursor(), 2);
    }

    #[test]
    fn previous_stops_at_first_step() {
        let mut navigator = navigator(3);
        assert_eq!(navigator.apply(Move::Previous), Outcome::AtFirstStep);
        assert_eq!(navigator.cursor(), 1);
    }

    #[test]
    fn first_and_repeat() {
        let mut navigator = navigator(3);
        navigator.apply(Move::Next);
        navigator.apply(Move::Next);
        assert_eq!(navigator.respond(Move::Repeat), "Step 3: Do thing 3.");
        assert_eq!(navigator.cursor(), 3);
        assert_eq!(navigator.respond(Move::First), "Step 1: Do thing 1.");
        assert_eq!(navigator.cursor(), 1);
    }

    #[test]
    fn renders_every_record_at_cursor() {
        let mut second = Step::new(1, "1.2", "Stir.");
        second.notes.push("It will be thick.".into());
        let navigator = StepNavigator::new(vec![Step::new(1, "1.1", "Melt the butter."), second]);
        assert_eq!(
            navigator.render(),
            "Step 1: Melt the butter.\nStep 1: Stir.\n  Note: It will be thick."
        );
    }

    #[test]
    fn empty_recipe() {
        let mut navigator = StepNavigator::new(vec![]);
        assert_eq!(navigator.respond(Move::Next), NO_STEPS_MESSAGE);
        assert_eq!(navigator.respond(Move::First), NO_STEPS_MESSAGE);
        assert_eq!(navigator.current_step(), None);
    }
}
