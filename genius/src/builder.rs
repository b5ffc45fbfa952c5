use crate::context::Context;
use crate::genius::Genius;
use crate::rounds::{Config, TotalRounds};

pub struct Builder<C: Context> {
    context: Option<C>,
    total_rounds: Option<u8>,
}

impl<C: Context> Builder<C> {
    pub fn new() -> Self {
        Self {
            context: None,
            total_rounds: None,
        }
    }

    pub fn with_context(mut self, ctx: C) -> Self {
        self.context = Some(ctx);
        self
    }

    /// Rounds needed for a victory before the player adjusts them, 1 if not set
    pub fn with_total_rounds(mut self, rounds: u8) -> Self {
        self.total_rounds = Some(rounds);
        self
    }

    pub fn build(self) -> Result<Genius<C>, &'static str> {
        let context = self.context.ok_or("Context not provided")?;
        let total_rounds = match self.total_rounds {
            Some(rounds) => TotalRounds::new(rounds)?,
            None => TotalRounds::default(),
        };
        Ok(Genius::new(context, Config { total_rounds }))
    }
}

impl<C: Context> Default for Builder<C> {
    fn default() -> Self {
        Self::new()
    }
}
