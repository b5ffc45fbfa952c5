#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};

use crate::color::{Color, Rgb};
use crate::context::Context;
use crate::cue::{self, Animation};
use crate::input::{self, ButtonState, Buttons};
use crate::presenter::{present, Message};
use crate::rounds::{self, Config};
use crate::sequence::{self, Sequence};
use crate::session::{Session, State};

/// Interval of input polling while idle and while capturing
pub const POLL_INTERVAL_MS: u32 = 10;
/// Time the failure message stays on screen before a new game
pub const FAILURE_PAUSE_MS: u32 = 2000;

/// The game
///
/// Owns the board context, configuration and the session being played.
/// Each call to `step` runs the current state to completion and moves to the
/// next one.
pub struct Genius<C: Context + Sized> {
    ctx: C,
    config: Config,
    session: Session,
    buttons: Buttons,
    state: State,
}

impl<C: Context + Sized> Genius<C> {
    pub fn new(ctx: C, config: Config) -> Self {
        Self {
            ctx,
            config,
            session: Session::new(),
            buttons: Buttons::new(),
            state: State::Idle,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn context(&self) -> &C {
        &self.ctx
    }

    pub fn context_mut(&mut self) -> &mut C {
        &mut self.ctx
    }

    /// Dark light and the start prompt, the state right after reset
    pub fn power_on(&mut self) {
        info!("powered on, total rounds: {}", self.config.total_rounds.get());
        self.ctx.set_light(Rgb::OFF);
        present(&mut self.ctx, Message::PressStart);
    }

    pub fn run(&mut self) -> ! {
        self.power_on();
        loop {
            self.step();
        }
    }

    pub fn step(&mut self) -> State {
        let next = match self.state {
            State::Idle => self.idle(),
            State::Starting => self.starting(),
            State::Showing => self.showing(),
            State::Capturing => self.capturing(),
            State::Evaluating => self.evaluating(),
            State::Advancing => self.advancing(),
            State::Victory => self.victory(),
            State::Failed => self.failed(),
        };
        if next != self.state {
            info!("{:?} -> {:?}", self.state, next);
        }
        self.state = next;
        next
    }

    fn idle(&mut self) -> State {
        if self.buttons.a.poll(&mut self.ctx) == ButtonState::Pressed {
            self.buttons.a.wait_release(&mut self.ctx);
            State::Starting
        } else {
            self.ctx.delay_ms(POLL_INTERVAL_MS);
            State::Idle
        }
    }

    fn starting(&mut self) -> State {
        present(&mut self.ctx, Message::Welcome);
        cue::play_animation(&mut self.ctx, Animation::Startup);
        rounds::configure(&mut self.ctx, &mut self.config, &mut self.buttons.b);
        let target = Sequence::fresh(&mut self.ctx);
        self.session.start(target);
        State::Showing
    }

    fn showing(&mut self) -> State {
        present(&mut self.ctx, Message::Round(self.session.round()));
        cue::play_sequence(&mut self.ctx, self.session.target());
        self.session.begin_attempt();
        State::Capturing
    }

    /// Collect one confirmed color per target entry
    ///
    /// The start button aborts the game. It is checked once per frame, so it
    /// takes effect between confirmations but never during a tone.
    fn capturing(&mut self) -> State {
        let mut pending: Option<Color> = None;
        while !self.session.is_attempt_complete() {
            if self.buttons.a.poll(&mut self.ctx) == ButtonState::Pressed {
                info!("game stopped at round {}", self.session.round());
                self.stop();
                self.buttons.a.wait_release(&mut self.ctx);
                return State::Idle;
            }

            if let Some(color) = input::read_stick_color(&mut self.ctx) {
                if pending != Some(color) {
                    trace!("selected {:?}", color);
                    self.ctx.set_light(color.rgb());
                }
                pending = Some(color);
            }

            if self.buttons.b.poll(&mut self.ctx) == ButtonState::Pressed {
                match pending.take() {
                    Some(color) => {
                        debug!(
                            "confirmed {:?} at {}/{}",
                            color,
                            self.session.attempt().len() + 1,
                            self.session.target().len()
                        );
                        self.session.confirm(color);
                        cue::play_confirmation(&mut self.ctx, color);
                    }
                    None => debug!("confirm ignored, nothing selected"),
                }
                self.buttons.b.wait_release(&mut self.ctx);
            }

            self.ctx.delay_ms(POLL_INTERVAL_MS);
        }
        State::Evaluating
    }

    fn evaluating(&mut self) -> State {
        if sequence::matches(self.session.target(), self.session.attempt()) {
            self.session.complete_round();
            if self.session.round() > self.config.total_rounds.get() {
                State::Victory
            } else {
                State::Advancing
            }
        } else {
            info!(
                "expected {:?}, got {:?}",
                &self.session.target()[..],
                &self.session.attempt()[..]
            );
            State::Failed
        }
    }

    fn advancing(&mut self) -> State {
        let target = self.session.take_target().extend(&mut self.ctx);
        self.session.set_target(target);
        State::Showing
    }

    fn victory(&mut self) -> State {
        present(&mut self.ctx, Message::Victory);
        cue::play_animation(&mut self.ctx, Animation::Victory);
        self.stop();
        State::Idle
    }

    /// Report the failure, then start over from the first round
    fn failed(&mut self) -> State {
        let best = self.session.displayed_best();
        present(&mut self.ctx, Message::Incorrect { best });
        cue::play_animation(&mut self.ctx, Animation::Error);
        self.ctx.delay_ms(FAILURE_PAUSE_MS);
        let target = Sequence::fresh(&mut self.ctx);
        self.session.restart(target);
        State::Showing
    }

    fn stop(&mut self) {
        self.session.reset();
        self.ctx.set_light(Rgb::OFF);
        present(&mut self.ctx, Message::PressStart);
    }
}
