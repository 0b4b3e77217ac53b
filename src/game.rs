use std::collections::VecDeque;

use tracing::{debug, info};

use crate::config::GameConfig;
use crate::dice::Dice;
use crate::grid::Grid;
use crate::pos::{Dir, Pos};

/// The player's segmented body, head first.
#[derive(Clone, Debug)]
pub struct Player {
    pub body: VecDeque<Pos>,
    pub dir: Dir,
    /// Length the body grows toward.
    pub length: usize,
}

impl Player {
    pub fn spawn<D: Dice + ?Sized>(grid: &Grid, dice: &mut D) -> Self {
        let mut body = VecDeque::new();
        body.push_back(grid.center());
        Self {
            body,
            dir: dice.pick_dir(),
            length: 1,
        }
    }

    pub fn head(&self) -> Pos {
        self.body[0]
    }

    /// Ignores a reversal into the second segment once longer than one cell.
    pub fn turn(&mut self, dir: Dir) {
        if self.length > 1 && dir == self.dir.opposite() {
            return;
        }
        self.dir = dir;
    }

    /// Whether moving the head to `next` runs into the body past the neck.
    fn bites(&self, next: Pos) -> bool {
        self.body.len() > 2 && self.body.iter().skip(2).any(|&s| s == next)
    }

    fn push_head(&mut self, next: Pos) {
        self.body.push_front(next);
        if self.body.len() > self.length {
            self.body.pop_back();
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Target {
    pub pos: Pos,
}

impl Target {
    pub fn spawn<D: Dice + ?Sized>(grid: &Grid, dice: &mut D) -> Self {
        Self {
            pos: grid.random_cell(dice),
        }
    }

    /// Uniform over every cell; player occupancy is not excluded.
    pub fn relocate<D: Dice + ?Sized>(&mut self, grid: &Grid, dice: &mut D) {
        self.pos = grid.random_cell(dice);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Running,
    /// The last step ended in a self-collision and the player respawned.
    Reset,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepEvent {
    Moved { head: Pos },
    Collided,
    TargetEaten { score: u32 },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepReport {
    pub events: Vec<StepEvent>,
}

impl StepReport {
    pub fn collided(&self) -> bool {
        self.events.contains(&StepEvent::Collided)
    }

    pub fn ate(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, StepEvent::TargetEaten { .. }))
    }
}

pub struct Game<D> {
    pub grid: Grid,
    pub player: Player,
    pub target: Target,
    /// Survives player resets.
    pub score: u32,
    pub phase: Phase,
    dice: D,
}

impl<D: Dice> Game<D> {
    /// `config` must pass [`GameConfig::validate`]; an empty grid panics on the first roll.
    pub fn new(config: &GameConfig, mut dice: D) -> Self {
        let grid = config.grid();
        let player = Player::spawn(&grid, &mut dice);
        let target = Target::spawn(&grid, &mut dice);
        debug!(dir = ?player.dir, target = ?target.pos, "spawned player and target");
        Self {
            grid,
            player,
            target,
            score: 0,
            phase: Phase::Running,
            dice,
        }
    }

    pub fn turn(&mut self, dir: Dir) {
        self.player.turn(dir);
    }

    /// Advances the player one cell and resolves collisions and eating.
    pub fn step(&mut self) -> StepReport {
        let mut report = StepReport::default();
        let next = self.grid.advance(self.player.head(), self.player.dir);

        if self.player.bites(next) {
            info!(
                length = self.player.length,
                score = self.score,
                "player ran into itself, respawning"
            );
            self.player = Player::spawn(&self.grid, &mut self.dice);
            self.phase = Phase::Reset;
            report.events.push(StepEvent::Collided);
        } else {
            self.player.push_head(next);
            self.phase = Phase::Running;
            report.events.push(StepEvent::Moved { head: next });
        }

        // Checked against the head even after a respawn.
        if self.player.head() == self.target.pos {
            self.player.length += 1;
            self.score += 1;
            self.target.relocate(&self.grid, &mut self.dice);
            info!(score = self.score, next = ?self.target.pos, "target eaten");
            report.events.push(StepEvent::TargetEaten { score: self.score });
        }

        report
    }
}
