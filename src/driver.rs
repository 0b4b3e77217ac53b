use std::time::{Duration, Instant};

use anyhow::Context;
use pixels::{Pixels, SurfaceTexture};
use tracing::{debug, error, info};
use winit::dpi::LogicalSize;
use winit::event::Event;
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

use crate::config::GameConfig;
use crate::dice::Dice;
use crate::draw::{Canvas, render};
use crate::game::{Game, StepReport};
use crate::input::{Command, InputQueue};

/// Fires once every `divisor` frames.
#[derive(Clone, Copy, Debug)]
pub struct MoveCadence {
    divisor: u32,
    counter: u32,
}

impl MoveCadence {
    pub fn new(divisor: u32) -> Self {
        Self {
            divisor: divisor.max(1),
            counter: 0,
        }
    }

    pub fn tick(&mut self) -> bool {
        self.counter += 1;
        if self.counter >= self.divisor {
            self.counter = 0;
            true
        } else {
            false
        }
    }
}

/// Fixed-period frame deadlines.
#[derive(Clone, Copy, Debug)]
pub struct FrameClock {
    period: Duration,
    next: Instant,
}

impl FrameClock {
    pub fn new(period: Duration, now: Instant) -> Self {
        Self { period, next: now }
    }

    pub fn due(&self, now: Instant) -> bool {
        now >= self.next
    }

    pub fn deadline(&self) -> Instant {
        self.next
    }

    /// Moves to the next boundary; skips missed ones instead of bursting.
    pub fn advance(&mut self, now: Instant) {
        self.next += self.period;
        if self.next <= now {
            self.next = now + self.period;
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    Idle,
    Stepped(StepReport),
    Quit,
}

/// Owns the game and everything that changes between frames.
pub struct Session<D> {
    pub game: Game<D>,
    cadence: MoveCadence,
    input: InputQueue,
    frames: u64,
}

impl<D: Dice> Session<D> {
    /// Same precondition as [`Game::new`]: `config` must already be validated.
    pub fn new(config: &GameConfig, dice: D) -> Self {
        Self {
            game: Game::new(config, dice),
            cadence: MoveCadence::new(config.move_divisor),
            input: InputQueue::new(),
            frames: 0,
        }
    }

    pub fn input_mut(&mut self) -> &mut InputQueue {
        &mut self.input
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Applies queued input, then steps the game if the cadence fires.
    pub fn frame(&mut self) -> FrameOutcome {
        self.frames += 1;
        for command in self.input.drain() {
            match command {
                Command::Quit => return FrameOutcome::Quit,
                Command::Turn(dir) => self.game.turn(dir),
            }
        }

        if !self.cadence.tick() {
            return FrameOutcome::Idle;
        }
        let report = self.game.step();
        debug!(frame = self.frames, events = ?report.events, "step");
        FrameOutcome::Stepped(report)
    }
}

/// Opens the window and runs the game until quit.
pub fn run<D: Dice + 'static>(config: GameConfig, dice: D) -> anyhow::Result<()> {
    config.validate()?;
    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Snake")
        .with_inner_size(LogicalSize::new(config.width, config.height))
        .with_resizable(false)
        .build(&event_loop)
        .context("failed to create window")?;

    let mut pixels = {
        let window_size = window.inner_size();
        let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, &window);
        Pixels::new(config.width, config.height, surface_texture)
            .context("failed to create pixel surface")?
    };

    let mut session = Session::new(&config, dice);
    let mut clock = FrameClock::new(config.frame_duration(), Instant::now());
    info!(
        width = config.width,
        height = config.height,
        fps = config.fps,
        moves_per_second = config.moves_per_second(),
        "starting game loop"
    );

    event_loop.run(move |event, _, control_flow| match event {
        Event::WindowEvent { event, .. } => {
            session.input_mut().handle(&event);
        }
        Event::MainEventsCleared => {
            let now = Instant::now();
            if clock.due(now) {
                if session.frame() == FrameOutcome::Quit {
                    info!(score = session.game.score, frames = session.frames(), "quit");
                    *control_flow = ControlFlow::Exit;
                    return;
                }
                clock.advance(now);
                window.request_redraw();
            }
            *control_flow = ControlFlow::WaitUntil(clock.deadline());
        }
        Event::RedrawRequested(_) => {
            {
                let mut canvas = Canvas::new(pixels.frame_mut(), config.width, config.height);
                render(&mut canvas, &session.game, &config);
            }
            if let Err(err) = pixels.render() {
                error!(%err, "failed to present frame");
                *control_flow = ControlFlow::Exit;
            }
        }
        _ => {}
    })
}
