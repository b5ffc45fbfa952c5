use crate::color::Color;
use crate::sequence::Sequence;

/// States of a game
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum State {
    /// Waiting for the start button
    Idle,
    /// Startup animation and rounds configuration
    Starting,
    /// Playing the target sequence
    Showing,
    /// Collecting the player's attempt
    Capturing,
    Evaluating,
    /// Extending the target for the next round
    Advancing,
    Victory,
    Failed,
}

/// Progress of the game being played
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    target: Sequence,
    attempt: Sequence,
    round: u8,
    best_round: u8,
}

impl Session {
    pub fn new() -> Self {
        Self {
            target: Sequence::new(),
            attempt: Sequence::new(),
            round: 1,
            best_round: 0,
        }
    }

    pub fn target(&self) -> &Sequence {
        &self.target
    }

    pub fn attempt(&self) -> &Sequence {
        &self.attempt
    }

    pub fn round(&self) -> u8 {
        self.round
    }

    pub fn best_round(&self) -> u8 {
        self.best_round
    }

    /// Begin a new game with a fresh target
    pub fn start(&mut self, target: Sequence) {
        self.restart(target);
        self.best_round = 0;
    }

    /// Back to the first round with a fresh target, best round is kept
    pub fn restart(&mut self, target: Sequence) {
        self.target = target;
        self.attempt = Sequence::new();
        self.round = 1;
    }

    /// Drop progress when the game ends
    pub fn reset(&mut self) {
        self.target = self.target.prefix(1);
        self.attempt = Sequence::new();
        self.round = 1;
        self.best_round = 0;
    }

    pub fn set_target(&mut self, target: Sequence) {
        self.target = target;
    }

    pub fn take_target(&mut self) -> Sequence {
        core::mem::take(&mut self.target)
    }

    pub fn begin_attempt(&mut self) {
        self.attempt = Sequence::new();
    }

    /// Record a confirmed color in the next attempt slot
    ///
    /// # Panics
    ///
    /// Panics when the attempt is already as long as the target.
    pub fn confirm(&mut self, color: Color) {
        assert!(
            !self.is_attempt_complete(),
            "Attempt already as long as target"
        );
        if let Err(e) = self.attempt.try_push(color) {
            panic!("Cannot record confirmed color: {}", e);
        }
    }

    pub fn is_attempt_complete(&self) -> bool {
        self.attempt.len() >= self.target.len()
    }

    /// Count the current round as completed and move to the next one
    pub fn complete_round(&mut self) {
        self.best_round = self.best_round.max(self.round);
        self.round += 1;
    }

    /// Best round reported after a failure, nothing counts before round 2
    pub fn displayed_best(&self) -> u8 {
        if self.round == 1 {
            0
        } else {
            self.best_round
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
