/// Tone frequencies in Hz
pub mod tone {
    pub const MAGENTA: u32 = 2000;
    pub const GREEN: u32 = 2500;
    pub const BLUE: u32 = 3000;
    pub const YELLOW: u32 = 3500;
    pub const ERROR: u32 = 4500;
}

/// State of the three channels of the RGB indicator
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub red: bool,
    pub green: bool,
    pub blue: bool,
}

impl Rgb {
    pub const OFF: Rgb = Rgb::new(false, false, false);
    pub const RED: Rgb = Rgb::new(true, false, false);

    pub const fn new(red: bool, green: bool, blue: bool) -> Self {
        Self { red, green, blue }
    }

    pub fn is_off(&self) -> bool {
        *self == Self::OFF
    }
}

/// One of the four playable colors
///
/// The absence of a color (centered stick, no cue) is expressed with
/// `Option<Color>`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Magenta,
    Green,
    Blue,
    Yellow,
}

impl Color {
    /// Every color in the order used by the startup and victory animations
    pub const ALL: [Color; 4] = [Color::Magenta, Color::Green, Color::Blue, Color::Yellow];

    /// Map a random byte onto a color
    ///
    /// 256 is a multiple of 4, so a uniform byte gives a uniform color.
    pub fn from_random(value: u8) -> Self {
        Self::ALL[(value % Self::ALL.len() as u8) as usize]
    }

    pub fn rgb(self) -> Rgb {
        match self {
            Color::Magenta => Rgb::new(true, false, true),
            Color::Green => Rgb::new(false, true, false),
            Color::Blue => Rgb::new(false, false, true),
            Color::Yellow => Rgb::new(true, true, false),
        }
    }

    pub fn tone(self) -> u32 {
        match self {
            Color::Magenta => tone::MAGENTA,
            Color::Green => tone::GREEN,
            Color::Blue => tone::BLUE,
            Color::Yellow => tone::YELLOW,
        }
    }

    /// Reverse lookup of `tone`
    pub fn from_tone(freq_hz: u32) -> Option<Self> {
        Self::ALL.iter().copied().find(|color| color.tone() == freq_hz)
    }
}
