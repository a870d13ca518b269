use std::convert::TryFrom;
use std::fmt;

use super::{JAIL_POSITION, JAIL_SENTENCE, RAILROAD_POSITIONS, SPACES, SPACE_NAMES};
use crate::error::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
/// The outcome of rolling both dice.
pub struct DiceRoll {
    /// The value of the first die.
    pub first: u8,
    /// The value of the second die.
    pub second: u8,
    /// The sum of the two dice.
    pub sum: u8,
    /// Whether both the dice resulted in the same number.
    pub is_double: bool,
}

impl DiceRoll {
    /// Build a roll from the two die values.
    pub fn new(first: u8, second: u8) -> DiceRoll {
        DiceRoll {
            first,
            second,
            sum: first + second,
            is_double: first == second,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// What happens to a player who draws a chance or community chest card.
///
/// Cards are written down as signed codes: `-1` does nothing, `0..=39`
/// sends the player to that space, `-3` moves them back three spaces and
/// `-5` moves them on to the next railroad.
pub enum Card {
    /// The card has no effect on the player's position.
    Stay,
    /// Move directly to the given space. Advancing to the jail space
    /// also locks the player up.
    Advance(u8),
    /// Move back the given number of spaces.
    Back(u8),
    /// Move forward to the next railroad, passing 'Go' if needed.
    NextRailroad,
}

impl Card {
    /// The space the card moves a player on `position` to, or `None`
    /// if the card leaves the player where they are.
    pub fn destination(self, position: u8) -> Option<u8> {
        match self {
            Card::Stay => None,
            Card::Advance(space) => Some(space),
            // Keep the result non-negative when stepping back past 'Go'
            Card::Back(amount) => Some((position + SPACES - amount % SPACES) % SPACES),
            Card::NextRailroad => Some(
                RAILROAD_POSITIONS
                    .iter()
                    .copied()
                    .find(|&railroad| railroad > position)
                    .unwrap_or(RAILROAD_POSITIONS[0]),
            ),
        }
    }

    /// Whether drawing this card puts the player in jail.
    pub fn sends_to_jail(self) -> bool {
        self == Card::Advance(JAIL_POSITION)
    }
}

impl TryFrom<i8> for Card {
    type Error = Error;

    fn try_from(code: i8) -> Result<Self, Self::Error> {
        match code {
            -1 => Ok(Card::Stay),
            -3 => Ok(Card::Back(3)),
            -5 => Ok(Card::NextRailroad),
            space if space >= 0 && (space as u8) < SPACES => Ok(Card::Advance(space as u8)),
            _ => Err(Error::UnknownCard(code)),
        }
    }
}

impl From<Card> for i8 {
    fn from(card: Card) -> i8 {
        match card {
            Card::Stay => -1,
            Card::Advance(space) => space as i8,
            Card::Back(amount) => -(amount as i8),
            Card::NextRailroad => -5,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// The lone player moving around the board during one game.
pub struct Player {
    /// The player's position around the board. 'Go' is at 0
    /// and 'Boardwalk' (the last tile going clockwise) is at 39.
    pub position: u8,
    /// The number of turns left in jail. 0 means the player is free.
    pub jail_turns: u8,
    /// The number of consecutive doubles the player has rolled.
    pub doubles_rolled: u8,
}

impl Player {
    /// Create a player standing on 'Go'.
    pub fn new() -> Player {
        Player::default()
    }

    /// Whether the player is currently in jail.
    pub fn in_jail(&self) -> bool {
        self.jail_turns > 0
    }

    /// Move the player forward by the specified amount of tiles.
    pub fn move_by(&mut self, amount: u8) {
        self.position = ((self.position as u16 + amount as u16) % SPACES as u16) as u8;
    }

    /// Send the player to jail.
    pub fn send_to_jail(&mut self) {
        self.position = JAIL_POSITION;
        self.jail_turns = JAIL_SENTENCE;
    }

    /// The name of the space the player is standing on.
    pub fn space_name(&self) -> &'static str {
        SPACE_NAMES[self.position as usize]
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pos_color = if self.in_jail() { "\x1b[31m" } else { "\x1b[36m" };

        write!(
            f,
            "[{}{:02}\x1b[0m] \x1b[33m{}\x1b[0mdbls \x1b[32m{}\x1b[0m jail",
            pos_color, self.position, self.doubles_rolled, self.jail_turns
        )
    }
}
