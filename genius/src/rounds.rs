//! Number of rounds needed to win, adjusted by the player before a game

#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};

use crate::context::{Axis, Context};
use crate::input::{ButtonState, Debouncer, StickEdge, StickTracker};
use crate::presenter::{present, Message};
use crate::sequence::CAPACITY;

pub const MIN_ROUNDS: u8 = 1;
pub const MAX_ROUNDS: u8 = CAPACITY as u8;
/// Interval between stick polls of the configurator
pub const POLL_MS: u32 = 100;

/// Rounds to complete for a victory, always within `MIN_ROUNDS..=MAX_ROUNDS`
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TotalRounds(u8);

impl TotalRounds {
    pub fn new(rounds: u8) -> Result<Self, &'static str> {
        if (MIN_ROUNDS..=MAX_ROUNDS).contains(&rounds) {
            Ok(Self(rounds))
        } else {
            Err("Total rounds out of range")
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn increment(&mut self) {
        self.0 = (self.0 + 1).min(MAX_ROUNDS);
    }

    pub fn decrement(&mut self) {
        self.0 = self.0.saturating_sub(1).max(MIN_ROUNDS);
    }

    pub fn apply(&mut self, edge: StickEdge) {
        match edge {
            StickEdge::Increase => self.increment(),
            StickEdge::Decrease => self.decrement(),
        }
    }
}

impl Default for TotalRounds {
    fn default() -> Self {
        Self(MIN_ROUNDS)
    }
}

/// Game configuration, kept in memory for the lifetime of the program
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    pub total_rounds: TotalRounds,
}

/// Let the player pick the number of rounds
///
/// Flicking the stick right adds a round, left removes one. Returns once
/// the confirm button is pressed and released.
pub fn configure<C: Context>(ctx: &mut C, config: &mut Config, confirm: &mut Debouncer) {
    let mut stick = StickTracker::new(ctx.read_axis(Axis::X));
    loop {
        if let Some(edge) = stick.update(ctx.read_axis(Axis::X)) {
            config.total_rounds.apply(edge);
            debug!("{:?}, total rounds: {}", edge, config.total_rounds.get());
        }

        present(ctx, Message::TotalRounds(config.total_rounds.get()));

        if confirm.poll(ctx) == ButtonState::Pressed {
            confirm.wait_release(ctx);
            info!("playing {} rounds", config.total_rounds.get());
            return;
        }

        ctx.delay_ms(POLL_MS);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{testing::TestingContext, Button};

    #[test]
    fn total_rounds_range() {
        assert!(TotalRounds::new(0).is_err());
        assert!(TotalRounds::new(11).is_err());
        assert_eq!(TotalRounds::new(1).map(TotalRounds::get), Ok(1));
        assert_eq!(TotalRounds::new(10).map(TotalRounds::get), Ok(10));
        assert_eq!(TotalRounds::default().get(), 1);
    }

    #[test]
    fn total_rounds_saturate() {
        let mut rounds = TotalRounds::default();
        rounds.decrement();
        assert_eq!(rounds.get(), 1);
        (0..20).for_each(|_| rounds.increment());
        assert_eq!(rounds.get(), 10);
        rounds.apply(StickEdge::Decrease);
        assert_eq!(rounds.get(), 9);
    }

    #[test]
    fn total_rounds_stay_in_range() {
        let mut ctx = TestingContext::new(7);
        let mut rounds = TotalRounds::default();
        for _ in 0..1000 {
            let edge = if ctx.gen_random() % 2 == 0 {
                StickEdge::Increase
            } else {
                StickEdge::Decrease
            };
            rounds.apply(edge);
            assert!((MIN_ROUNDS..=MAX_ROUNDS).contains(&rounds.get()));
        }
    }

    #[test]
    fn configure_counts_flicks() {
        let mut ctx = TestingContext::new(0);
        let mut config = Config::default();
        let mut confirm = Debouncer::new(Button::B);

        // first reading seeds the tracker
        ctx.script_axis(Axis::X, &[2048, 4000, 2048, 4000, 4000, 2048, 100, 2048, 4000]);
        ctx.script_button(Button::B, &[crate::Level::Inactive; 8]);
        ctx.press(Button::B);

        configure(&mut ctx, &mut config, &mut confirm);

        assert_eq!(config.total_rounds.get(), 3);
        assert_eq!(ctx.last_text(), vec!["Rounds: 3"]);
        assert_eq!(ctx.shown().len(), 9);
        assert_eq!(ctx.now(), 8 * POLL_MS + crate::input::SETTLE_MS);
    }

    #[test]
    fn configure_keeps_previous_value() {
        let mut ctx = TestingContext::new(0);
        let mut config = Config {
            total_rounds: TotalRounds::new(5).unwrap(),
        };
        let mut confirm = Debouncer::new(Button::B);

        ctx.press(Button::B);
        configure(&mut ctx, &mut config, &mut confirm);

        assert_eq!(config.total_rounds.get(), 5);
        assert_eq!(ctx.last_text(), vec!["Rounds: 5"]);
    }

    #[test]
    fn configure_floors_at_one() {
        let mut ctx = TestingContext::new(0);
        let mut config = Config::default();
        let mut confirm = Debouncer::new(Button::B);

        ctx.script_axis(Axis::X, &[2048, 100, 2048, 100]);
        ctx.script_button(Button::B, &[crate::Level::Inactive; 2]);
        ctx.press(Button::B);
        configure(&mut ctx, &mut config, &mut confirm);

        assert_eq!(config.total_rounds.get(), 1);
    }
}
