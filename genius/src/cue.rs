//! Light and sound presentation of colors
//!
//! Playback is strictly sequential, nothing here polls the inputs.

#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};

use crate::color::{tone, Color, Rgb};
use crate::context::Context;

/// On time of a cue while the target sequence is shown
pub const SEQUENCE_ON_MS: u32 = 500;
/// Gap after a cue while the target sequence is shown
pub const SEQUENCE_OFF_MS: u32 = 200;
/// Tone played when the player confirms a color
pub const CONFIRM_TONE_MS: u32 = 200;

/// A single light and tone presentation
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Cue {
    Color(Color),
    /// Red light with the error tone
    Incorrect,
}

impl Cue {
    pub fn rgb(self) -> Rgb {
        match self {
            Cue::Color(color) => color.rgb(),
            Cue::Incorrect => Rgb::RED,
        }
    }

    pub fn tone(self) -> u32 {
        match self {
            Cue::Color(color) => color.tone(),
            Cue::Incorrect => tone::ERROR,
        }
    }
}

/// Light the cue and sound its tone for `on_ms`, then stay dark for `off_ms`
pub fn play_cue<C: Context>(ctx: &mut C, cue: Cue, on_ms: u32, off_ms: u32) {
    trace!("cue {:?} for {}ms/{}ms", cue, on_ms, off_ms);
    ctx.set_light(cue.rgb());
    ctx.play_tone(cue.tone(), on_ms);
    ctx.set_light(Rgb::OFF);
    ctx.delay_ms(off_ms);
}

pub fn play_sequence<C: Context>(ctx: &mut C, colors: &[Color]) {
    debug!("showing {:?}", colors);
    colors
        .iter()
        .for_each(|&color| play_cue(ctx, Cue::Color(color), SEQUENCE_ON_MS, SEQUENCE_OFF_MS));
}

/// Acknowledge a confirmed color with its tone, the light is left as is
pub fn play_confirmation<C: Context>(ctx: &mut C, color: Color) {
    ctx.play_tone(color.tone(), CONFIRM_TONE_MS);
}

static COLOR_CUES: [Cue; 4] = [
    Cue::Color(Color::Magenta),
    Cue::Color(Color::Green),
    Cue::Color(Color::Blue),
    Cue::Color(Color::Yellow),
];

static INCORRECT_CUES: [Cue; 1] = [Cue::Incorrect];

/// Fixed feedback animations
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Animation {
    Startup,
    Victory,
    Error,
}

impl Animation {
    /// Cues of a single pass, number of passes, on and off time in ms
    fn pattern(self) -> (&'static [Cue], usize, u32, u32) {
        match self {
            Animation::Startup => (&COLOR_CUES[..], 2, 150, 150),
            Animation::Victory => (&COLOR_CUES[..], 3, 100, 100),
            Animation::Error => (&INCORRECT_CUES[..], 3, 100, 100),
        }
    }

    /// Total time the animation takes
    pub fn duration_ms(self) -> u32 {
        let (cues, passes, on_ms, off_ms) = self.pattern();
        (cues.len() * passes) as u32 * (on_ms + off_ms)
    }
}

pub fn play_animation<C: Context>(ctx: &mut C, animation: Animation) {
    debug!("playing {:?} animation", animation);
    let (cues, passes, on_ms, off_ms) = animation.pattern();
    for _ in 0..passes {
        for &cue in cues {
            play_cue(ctx, cue, on_ms, off_ms);
        }
    }
}
