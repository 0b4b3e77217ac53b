use rand::{Rng, RngCore};

use crate::pos::Dir;

/// Source of randomness for the simulation.
///
/// Every `rand` generator is a `Dice`; tests can script exact rolls instead.
pub trait Dice {
    /// Uniform value in `0..sides`. `sides` is never zero.
    fn roll(&mut self, sides: u32) -> u32;

    fn pick_dir(&mut self) -> Dir {
        Dir::ALL[self.roll(Dir::ALL.len() as u32) as usize]
    }
}

impl<R: RngCore> Dice for R {
    fn roll(&mut self, sides: u32) -> u32 {
        self.gen_range(0..sides)
    }
}

#[cfg(test)]
pub(crate) mod scripted {
    use super::Dice;

    /// Replays fixed rolls in order, cycling when exhausted.
    pub struct Scripted {
        rolls: Vec<u32>,
        next: usize,
    }

    impl Scripted {
        pub fn new(rolls: &[u32]) -> Self {
            Self {
                rolls: rolls.to_vec(),
                next: 0,
            }
        }
    }

    impl Dice for Scripted {
        fn roll(&mut self, sides: u32) -> u32 {
            let v = self.rolls[self.next % self.rolls.len()];
            self.next += 1;
            v % sides
        }
    }
}
