mod details;
pub use details::*;

use lazy_static::lazy_static;
use std::collections::HashSet;

/// The number of spaces on the board. 'Go' is at 0 and 'Boardwalk' is at 39.
pub const SPACES: u8 = 40;

/// The number of cards in each of the chance and community chest decks.
pub const CARDS: usize = 15;

/// The number of games simulated when none is configured.
pub const DEFAULT_GAMES: u64 = 10_000;

/// The number of turns per game when none is configured.
pub const DEFAULT_TURNS: u32 = 40;

/// The position of the jail.
pub const JAIL_POSITION: u8 = 10;

/// The position of the 'Go To Jail' space.
pub const GO_TO_JAIL_POSITION: u8 = 30;

/// The number of turns a player sits in jail unless they roll doubles.
pub const JAIL_SENTENCE: u8 = 2;

/// Rolling this many doubles in a row sends the player to jail.
pub const MAX_DOUBLES: u8 = 3;

/// The number of faces on each die.
pub const DIE_FACES: u32 = 6;

/// Where the chance cards send the player, as signed directive codes.
pub const CHANCE_CODES: [i8; CARDS] = [
    -1, -1, -1, -1, -1, -1, -5, -5, -3, 0, 5, 10, 11, 24, 39,
];

/// Where the community chest cards send the player, as signed directive codes.
pub const CHEST_CODES: [i8; CARDS] = [
    0, -1, -1, -1, -1, -1, -1, -1, 10, -1, -1, -1, -1, -1, -1,
];

/// The name of every space, indexed by position.
pub const SPACE_NAMES: [&str; SPACES as usize] = [
    "GO",
    "Mediterranean Avenue",
    "Community Chest 1",
    "Baltic Avenue",
    "Income Tax",
    "Reading Railroad",
    "Oriental Avenue",
    "Chance 1",
    "Vermont Avenue",
    "Connecticut Avenue",
    "Jail",
    "St. Charles Place",
    "Electric Company",
    "States Avenue",
    "Virginia Avenue",
    "Pennsylvania Railroad",
    "St. James Place",
    "Community Chest 2",
    "Tennessee Avenue",
    "New York Avenue",
    "Free Parking",
    "Kentucky Avenue",
    "Chance 2",
    "Indiana Avenue",
    "Illinois Avenue",
    "B&O Railroad",
    "Atlantic Avenue",
    "Ventnor Avenue",
    "Water Works",
    "Marvin Gardens",
    "Go To Jail",
    "Pacific Avenue",
    "North Carolina Avenue",
    "Community Chest 3",
    "Pennsylvania Avenue",
    "Short Line",
    "Chance 3",
    "Park Place",
    "Luxury Tax",
    "Boardwalk",
];

lazy_static! {
    /// Positions of the chance tiles on the game board.
    pub static ref CHANCE_POSITIONS: HashSet<u8> = HashSet::from([7, 22, 36]);

    /// Positions of the community chest tiles on the game board.
    pub static ref CHEST_POSITIONS: HashSet<u8> = HashSet::from([2, 17, 33]);

    /// Positions of the railroads, in the order the player passes them.
    pub static ref RAILROAD_POSITIONS: Vec<u8> = (0..SPACES / 10)
        .map(|side| side * 10 + 5)
        .collect();
}
