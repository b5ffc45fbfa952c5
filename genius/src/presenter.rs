//! Text feedback of the game
//!
//! Every message fits into two short lines drawn at fixed rows of a
//! 128x64 display.

use core::fmt::Write;

use heapless::{consts::U20, String};
#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};

use crate::context::Context;

pub const HEADLINE_ROW: u8 = 3;
pub const DETAIL_ROW: u8 = 4;
/// Pixel height of a text row
pub const ROW_HEIGHT: i32 = 8;
/// Pixel offset of text from the left edge
pub const MARGIN_X: i32 = 5;

/// A line of text placed at a display row
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Line<'a> {
    pub row: u8,
    pub text: &'a str,
}

impl<'a> Line<'a> {
    pub fn new(row: u8, text: &'a str) -> Self {
        Self { row, text }
    }

    /// Top left corner of the line in pixels
    pub fn origin(&self) -> (i32, i32) {
        (MARGIN_X, self.row as i32 * ROW_HEIGHT)
    }
}

#[cfg(feature = "embedded-graphics")]
mod graphics {
    use super::Line;

    use embedded_graphics::{
        fonts::{Font6x8, Text},
        geometry::Point,
        pixelcolor::BinaryColor,
        style::{Styled, TextStyle},
    };

    impl<'a> Line<'a> {
        /// Line laid out as a drawable text in the 6x8 font
        pub fn as_text(&self) -> Styled<Text<'a>, TextStyle<BinaryColor, Font6x8>> {
            let (x, y) = self.origin();
            Text::new(self.text, Point::new(x, y))
                .into_styled(TextStyle::new(Font6x8, BinaryColor::On))
        }
    }
}

/// Events of the game that are reported to the player
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Message {
    PressStart,
    Welcome,
    TotalRounds(u8),
    Round(u8),
    Victory,
    Incorrect { best: u8 },
}

pub fn present<C: Context>(ctx: &mut C, message: Message) {
    trace!("presenting {:?}", message);
    let mut detail: String<U20> = String::new();
    match message {
        Message::PressStart => headline(ctx, "Press button A"),
        Message::Welcome => headline(ctx, "Welcome!"),
        Message::TotalRounds(n) => {
            let _ = write!(detail, "Rounds: {}", n);
            headline(ctx, &detail)
        }
        Message::Round(n) => {
            let _ = write!(detail, "Round {}", n);
            headline(ctx, &detail)
        }
        Message::Victory => ctx.show_lines(
            Some(Line::new(HEADLINE_ROW, "You win!")),
            Some(Line::new(DETAIL_ROW, "Congrats!")),
        ),
        Message::Incorrect { best } => {
            let _ = write!(detail, "Best: {}", best);
            ctx.show_lines(
                Some(Line::new(HEADLINE_ROW, "Incorrect!")),
                Some(Line::new(DETAIL_ROW, &detail)),
            )
        }
    }
}

fn headline<C: Context>(ctx: &mut C, text: &str) {
    ctx.show_lines(Some(Line::new(HEADLINE_ROW, text)), None);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::testing::TestingContext;

    #[test]
    fn single_line_messages() {
        let mut ctx = TestingContext::new(0);

        present(&mut ctx, Message::PressStart);
        assert_eq!(ctx.last_text(), vec!["Press button A"]);

        present(&mut ctx, Message::TotalRounds(10));
        assert_eq!(ctx.last_text(), vec!["Rounds: 10"]);

        present(&mut ctx, Message::Round(7));
        assert_eq!(ctx.shown().last().unwrap().0, Some((HEADLINE_ROW, "Round 7".into())));
        assert_eq!(ctx.shown().last().unwrap().1, None);
    }

    #[test]
    fn two_line_messages() {
        let mut ctx = TestingContext::new(0);

        present(&mut ctx, Message::Incorrect { best: 4 });
        let (first, second) = ctx.shown().last().unwrap().clone();
        assert_eq!(first, Some((HEADLINE_ROW, "Incorrect!".into())));
        assert_eq!(second, Some((DETAIL_ROW, "Best: 4".into())));

        present(&mut ctx, Message::Victory);
        assert_eq!(ctx.last_text(), vec!["You win!", "Congrats!"]);
    }

    #[test]
    fn line_origin() {
        assert_eq!(Line::new(HEADLINE_ROW, "").origin(), (5, 24));
        assert_eq!(Line::new(0, "").origin(), (5, 0));
    }

    #[cfg(feature = "embedded-graphics")]
    #[test]
    fn line_as_text() {
        use embedded_graphics::geometry::Point;

        let line = Line::new(DETAIL_ROW, "Best: 1");
        let text = line.as_text();
        assert_eq!(text.primitive.position, Point::new(5, 32));
        assert_eq!(text.primitive.text, "Best: 1");
    }
}
