#![no_std]

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod builder;
pub mod color;
pub mod context;
pub mod cue;
pub mod genius;
pub mod input;
pub mod presenter;
pub mod rounds;
pub mod sequence;
pub mod session;

pub use builder::Builder;
pub use color::{Color, Rgb};
pub use context::{Axis, Button, Context, Level};
pub use genius::Genius;
pub use presenter::Line;
pub use rounds::{Config, TotalRounds};
pub use sequence::Sequence;
pub use session::State;

#[cfg(feature = "embedded-graphics")]
pub use embedded_graphics;
