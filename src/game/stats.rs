use std::ops::{Add, AddAssign};

use super::globals::SPACES;

#[derive(Clone, Debug, PartialEq, Eq)]
/// Per-space counters collected over any number of games.
pub struct Stats {
    /// How many times a player's move put them on each space.
    pub lands: [u64; SPACES as usize],
    /// How many turns ended with the player on each space.
    pub ends: [u64; SPACES as usize],
}

impl Default for Stats {
    fn default() -> Self {
        Stats {
            lands: [0; SPACES as usize],
            ends: [0; SPACES as usize],
        }
    }
}

impl Stats {
    /// Return empty counters.
    pub fn new() -> Stats {
        Stats::default()
    }

    pub fn record_land(&mut self, position: u8) {
        self.lands[position as usize] += 1;
    }

    pub fn record_end(&mut self, position: u8) {
        self.ends[position as usize] += 1;
    }

    /// The number of land events across the whole board.
    pub fn total_lands(&self) -> u64 {
        self.lands.iter().sum()
    }

    /// The number of turn-end events across the whole board.
    pub fn total_ends(&self) -> u64 {
        self.ends.iter().sum()
    }

    /// The space where the most turns ended, or `None` if nothing was recorded.
    pub fn most_ended(&self) -> Option<u8> {
        self.ends
            .iter()
            .enumerate()
            .filter(|(_, &count)| count > 0)
            // Ties go to the lowest position
            .max_by(|(i, a), (j, b)| a.cmp(b).then(j.cmp(i)))
            .map(|(i, _)| i as u8)
    }
}

impl AddAssign<&Stats> for Stats {
    fn add_assign(&mut self, other: &Stats) {
        for (mine, theirs) in self.lands.iter_mut().zip(other.lands.iter()) {
            *mine += theirs;
        }
        for (mine, theirs) in self.ends.iter_mut().zip(other.ends.iter()) {
            *mine += theirs;
        }
    }
}

impl AddAssign for Stats {
    fn add_assign(&mut self, other: Stats) {
        *self += &other;
    }
}

impl Add for Stats {
    type Output = Stats;

    fn add(mut self, other: Stats) -> Stats {
        self += &other;
        self
    }
}
