pub mod config;
pub mod dice;
pub mod draw;
pub mod driver;
pub mod game;
pub mod grid;
pub mod input;
pub mod pos;

pub use config::{ConfigError, GameConfig, Rgb};
pub use dice::Dice;
pub use driver::{FrameOutcome, MoveCadence, Session};
pub use game::{Game, Phase, Player, StepEvent, StepReport, Target};
pub use grid::Grid;
pub use input::Command;
pub use pos::{Dir, Pos};
