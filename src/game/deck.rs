use std::convert::TryFrom;

use super::dice::RandomSource;
use super::globals::{Card, CARDS, CHANCE_CODES, CHEST_CODES};
use crate::error::{Error, Result};

#[derive(Clone, Debug, PartialEq, Eq)]
/// A pile of chance or community chest cards.
///
/// Drawing never removes a card: the drawn card goes back under the pile,
/// so every card comes up once before any card comes up twice.
pub struct Deck {
    cards: [Card; CARDS],
}

impl Deck {
    /*********        INITIALISATION INTERFACES        *********/

    /// Return a deck holding the given cards, top card first.
    pub fn new(cards: [Card; CARDS]) -> Deck {
        Deck { cards }
    }

    /// Return a deck decoded from signed card codes, top card first.
    pub fn from_codes(codes: &[i8]) -> Result<Deck> {
        if codes.len() != CARDS {
            return Err(Error::DeckSize {
                expected: CARDS,
                found: codes.len(),
            });
        }

        let mut cards = [Card::Stay; CARDS];
        for (slot, &code) in cards.iter_mut().zip(codes) {
            *slot = Card::try_from(code)?;
        }

        Ok(Deck::new(cards))
    }

    /// The unshuffled chance deck.
    pub fn chance() -> Deck {
        Deck::from_standard_codes(&CHANCE_CODES)
    }

    /// The unshuffled community chest deck.
    pub fn chest() -> Deck {
        Deck::from_standard_codes(&CHEST_CODES)
    }

    fn from_standard_codes(codes: &[i8; CARDS]) -> Deck {
        match Deck::from_codes(codes) {
            Ok(deck) => deck,
            Err(e) => unreachable!("standard card table is invalid: {}", e),
        }
    }

    /*********        PUBLIC INTERFACES        *********/

    /// The cards in the deck, top card first.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Shuffle the deck in place (Fisher-Yates).
    pub fn shuffle<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        for i in 0..CARDS - 1 {
            // Pick uniformly from the cards that haven't been placed yet
            let j = i + rng.next_below((CARDS - i) as u32) as usize;
            self.cards.swap(i, j);
        }
    }

    /// Take the top card and put it back at the bottom of the deck.
    pub fn draw(&mut self) -> Card {
        let card = self.cards[0];
        self.cards.rotate_left(1);

        card
    }
}
