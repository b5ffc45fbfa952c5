//! Context for accessing functionalities of the board that `Genius` is
//! played on.
//!
//! Every wait of the game goes through `delay_ms` or the blocking
//! `play_tone`, so an implementation backed by a virtual clock runs the
//! whole engine deterministically.

use crate::color::Rgb;
use crate::presenter::Line;

/// Axis of the analog stick
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Button {
    /// Start and stop
    A,
    /// Confirm
    B,
}

/// Logical level of a button
///
/// Buttons are wired active low, implementators translate the pin level so
/// that a pressed button reads `Active`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Level {
    Active,
    Inactive,
}

/// Trait aggregating board functionalities
pub trait Context {
    /// Drive the RGB indicator
    fn set_light(&mut self, rgb: Rgb);
    /// Emit a tone, blocking for `duration_ms`, silent afterwards
    fn play_tone(&mut self, freq_hz: u32, duration_ms: u32);
    /// Sample one axis of the stick, in range `0..=4095`
    fn read_axis(&mut self, axis: Axis) -> u16;
    /// Read current level of a button
    fn read_button(&mut self, button: Button) -> Level;
    /// Clear the display, draw up to two lines and present the frame
    fn show_lines(&mut self, first: Option<Line<'_>>, second: Option<Line<'_>>);
    /// Suspend the game for `ms` milliseconds
    fn delay_ms(&mut self, ms: u32);
    /// Generate random 8-bit number
    fn gen_random(&mut self) -> u8;
}
