//! Player input: stick to color mapping, debounced buttons and stick edges
//!
//! Buttons and stick edges share the same edge tracker, which remembers the
//! last stable state and reports a transition only once.

#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};

use crate::color::Color;
use crate::context::{Axis, Button, Context, Level};

/// Readings below are a deflection to the left or down
pub const LOW_THRESHOLD: u16 = 1000;
/// Readings above are a deflection to the right or up
pub const HIGH_THRESHOLD: u16 = 3000;
/// Time a press has to stay active before it is confirmed
pub const SETTLE_MS: u32 = 20;
/// Interval of polling while waiting for a button release
pub const RELEASE_POLL_MS: u32 = 10;

/// Map a stick position to a color
///
/// X axis takes priority over Y axis, a centered stick selects nothing.
pub fn stick_color(x: u16, y: u16) -> Option<Color> {
    if x < LOW_THRESHOLD {
        Some(Color::Magenta)
    } else if x > HIGH_THRESHOLD {
        Some(Color::Blue)
    } else if y > HIGH_THRESHOLD {
        Some(Color::Green)
    } else if y < LOW_THRESHOLD {
        Some(Color::Yellow)
    } else {
        None
    }
}

/// Sample both axes and map them to a color
pub fn read_stick_color<C: Context>(ctx: &mut C) -> Option<Color> {
    let x = ctx.read_axis(Axis::X);
    let y = ctx.read_axis(Axis::Y);
    stick_color(x, y)
}

/// Remembers the last stable state of an input
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Edge<S> {
    stable: S,
}

impl<S: Copy + PartialEq> Edge<S> {
    pub fn new(initial: S) -> Self {
        Self { stable: initial }
    }

    pub fn state(&self) -> S {
        self.stable
    }

    /// Accept a new sample, returning it if it differs from the stable state
    pub fn update(&mut self, sample: S) -> Option<S> {
        if sample != self.stable {
            self.stable = sample;
            Some(sample)
        } else {
            None
        }
    }
}

/// Threshold crossing of a stick axis
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StickEdge {
    Increase,
    Decrease,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Zone {
    Low,
    Centre,
    High,
}

impl Zone {
    fn of(value: u16, low: u16, high: u16) -> Self {
        if value < low {
            Zone::Low
        } else if value > high {
            Zone::High
        } else {
            Zone::Centre
        }
    }
}

fn zone_edge(zone: Option<Zone>) -> Option<StickEdge> {
    match zone {
        Some(Zone::High) => Some(StickEdge::Increase),
        Some(Zone::Low) => Some(StickEdge::Decrease),
        _ => None,
    }
}

/// Detect a threshold crossing between two consecutive readings
///
/// Crossing above `high` from at most `high` is an increase, crossing below
/// `low` from at least `low` is a decrease.
pub fn stick_edge(last: u16, new: u16, low: u16, high: u16) -> Option<StickEdge> {
    zone_edge(Edge::new(Zone::of(last, low, high)).update(Zone::of(new, low, high)))
}

/// Stateful `stick_edge` over a stream of readings of one axis
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StickTracker {
    edge: Edge<Zone>,
}

impl StickTracker {
    pub fn new(first: u16) -> Self {
        Self {
            edge: Edge::new(Zone::of(first, LOW_THRESHOLD, HIGH_THRESHOLD)),
        }
    }

    pub fn update(&mut self, value: u16) -> Option<StickEdge> {
        zone_edge(
            self.edge
                .update(Zone::of(value, LOW_THRESHOLD, HIGH_THRESHOLD)),
        )
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ButtonState {
    Pressed,
    Released,
}

/// Software debounce of a single button
///
/// A press is reported once, when an active level is still active after
/// `SETTLE_MS`. No other press is reported until an inactive level is seen.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Debouncer {
    button: Button,
    stable: Edge<Level>,
}

impl Debouncer {
    pub fn new(button: Button) -> Self {
        Self {
            button,
            stable: Edge::new(Level::Inactive),
        }
    }

    pub fn is_held(&self) -> bool {
        self.stable.state() == Level::Active
    }

    pub fn poll<C: Context>(&mut self, ctx: &mut C) -> ButtonState {
        let level = ctx.read_button(self.button);
        if level == Level::Active && !self.is_held() {
            ctx.delay_ms(SETTLE_MS);
            if self.stable.update(ctx.read_button(self.button)) == Some(Level::Active) {
                debug!("button {:?} pressed", self.button);
                return ButtonState::Pressed;
            }
            trace!("button {:?} bounced", self.button);
        } else {
            self.stable.update(level);
        }
        ButtonState::Released
    }

    /// Block until the button is physically released
    pub fn wait_release<C: Context>(&mut self, ctx: &mut C) {
        while ctx.read_button(self.button) == Level::Active {
            ctx.delay_ms(RELEASE_POLL_MS);
        }
        self.stable.update(Level::Inactive);
        trace!("button {:?} released", self.button);
    }
}

/// Debouncers of both buttons
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Buttons {
    pub a: Debouncer,
    pub b: Debouncer,
}

impl Buttons {
    pub fn new() -> Self {
        Self {
            a: Debouncer::new(Button::A),
            b: Debouncer::new(Button::B),
        }
    }
}

impl Default for Buttons {
    fn default() -> Self {
        Self::new()
    }
}
