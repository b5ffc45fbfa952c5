use core::ops::Deref;

use heapless::{consts::U10, Vec};
#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};

use crate::color::Color;
use crate::context::Context;

/// Maximum length of a sequence
pub const CAPACITY: usize = 10;

/// Bounded, append-only list of colors
///
/// Used both for the target the player has to repeat and for the player's
/// attempt. Entries are never modified once pushed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sequence(Vec<Color, U10>);

impl Sequence {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn from_slice(colors: &[Color]) -> Result<Self, &'static str> {
        Vec::from_slice(colors)
            .map(Self)
            .or(Err("Sequence longer than capacity"))
    }

    /// Sequence of a single, randomly drawn color
    pub fn fresh<C: Context>(ctx: &mut C) -> Self {
        Self::new().extend(ctx)
    }

    /// Append one randomly drawn color
    ///
    /// # Panics
    ///
    /// Panics if the sequence is already at `CAPACITY`.
    pub fn extend<C: Context>(mut self, ctx: &mut C) -> Self {
        let color = Color::from_random(ctx.gen_random());
        if let Err(e) = self.try_push(color) {
            panic!("Cannot extend sequence of length {}: {}", self.len(), e);
        }
        debug!("sequence extended with {:?} to length {}", color, self.len());
        self
    }

    pub fn try_push(&mut self, color: Color) -> Result<(), &'static str> {
        self.0.push(color).or(Err("Sequence is full"))
    }

    pub fn is_full(&self) -> bool {
        self.0.len() == CAPACITY
    }

    /// Copy of the first `len` colors, the whole sequence if it is shorter
    ///
    /// Never shorten in place, `heapless` 0.5 `truncate` and `clear` read
    /// past the new length.
    pub fn prefix(&self, len: usize) -> Self {
        Self(self.0.iter().take(len).copied().collect())
    }
}

impl Deref for Sequence {
    type Target = [Color];

    fn deref(&self) -> &[Color] {
        &self.0
    }
}

/// Compare the player's attempt with the target, stopping at first mismatch
///
/// # Panics
///
/// Panics if lengths differ, the attempt is always collected up to the
/// target's length.
pub fn matches(target: &[Color], attempt: &[Color]) -> bool {
    assert_eq!(
        target.len(),
        attempt.len(),
        "Attempt length differs from target length"
    );
    target.iter().zip(attempt).all(|(t, a)| t == a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::testing::TestingContext;
    use Color::*;

    #[test]
    fn fresh_has_single_color() {
        let mut ctx = TestingContext::new(0);
        for _ in 0..32 {
            assert_eq!(Sequence::fresh(&mut ctx).len(), 1);
        }

        ctx.script_randoms(&[2]);
        assert_eq!(&Sequence::fresh(&mut ctx)[..], &[Blue]);
    }

    #[test]
    fn extend_keeps_prefix() {
        let mut ctx = TestingContext::new(42);
        let mut seq = Sequence::fresh(&mut ctx);
        while !seq.is_full() {
            let before = seq.clone();
            seq = seq.extend(&mut ctx);
            assert_eq!(seq.len(), before.len() + 1);
            assert_eq!(&seq[..before.len()], &before[..]);
        }
        assert_eq!(seq.len(), CAPACITY);
    }

    #[test]
    fn extend_appends_drawn_color() {
        let mut ctx = TestingContext::new(0);
        ctx.script_randoms(&[0, 3, 5]);
        let seq = Sequence::fresh(&mut ctx).extend(&mut ctx).extend(&mut ctx);
        assert_eq!(&seq[..], &[Magenta, Yellow, Green]);
    }

    #[test]
    #[should_panic(expected = "Cannot extend sequence")]
    fn extend_past_capacity() {
        let mut ctx = TestingContext::new(0);
        let seq = Sequence::from_slice(&[Blue; CAPACITY]).unwrap();
        seq.extend(&mut ctx);
    }

    #[test]
    fn bounded_push() {
        let mut seq = Sequence::new();
        for _ in 0..CAPACITY {
            seq.try_push(Green).unwrap();
        }
        assert_eq!(seq.try_push(Green), Err("Sequence is full"));
        assert!(Sequence::from_slice(&[Green; CAPACITY + 1]).is_err());
    }

    #[test]
    fn prefix_of_full_sequence() {
        let full = Sequence::from_slice(&[
            Yellow, Blue, Blue, Green, Magenta, Blue, Blue, Green, Yellow, Green,
        ])
        .unwrap();
        assert_eq!(&full.prefix(1)[..], &[Yellow]);
        assert_eq!(&full.prefix(3)[..], &[Yellow, Blue, Blue]);
        assert_eq!(full.prefix(CAPACITY), full);
        assert!(full.prefix(0).is_empty());

        let mut short = full.prefix(2);
        short.try_push(Magenta).unwrap();
        assert_eq!(&short[..], &[Yellow, Blue, Magenta]);
        assert_eq!(Sequence::new().prefix(1), Sequence::new());
    }

    #[test]
    fn matching() {
        assert!(matches(&[], &[]));
        assert!(matches(&[Blue], &[Blue]));
        assert!(matches(&[Magenta, Yellow, Green], &[Magenta, Yellow, Green]));
        assert!(!matches(&[Green], &[Blue]));
    }

    #[test]
    fn any_single_difference_fails() {
        let target = [Magenta, Green, Blue, Yellow, Magenta, Green, Blue, Yellow, Magenta, Green];
        for i in 0..target.len() {
            for &other in Color::ALL.iter().filter(|&&c| c != target[i]) {
                let mut attempt = target;
                attempt[i] = other;
                assert!(!matches(&target, &attempt), "difference at {}", i);
            }
        }
    }

    #[test]
    #[should_panic(expected = "Attempt length differs")]
    fn matching_needs_equal_lengths() {
        matches(&[Blue, Blue], &[Blue]);
    }
}
