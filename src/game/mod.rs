pub mod globals;
pub use globals::*;

pub mod deck;
pub use deck::Deck;

pub mod dice;
pub use dice::{Dice, RandomSource, ScriptedSource};

pub mod stats;
pub use stats::Stats;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// What happened during one turn.
pub struct TurnRecord {
    /// The dice the player rolled.
    pub roll: DiceRoll,
    /// The space the player's move put them on (their jail cell if they stayed in).
    pub landed: u8,
    /// The space the player finished the turn on.
    pub ended: u8,
}

#[derive(Clone, Debug)]
/// A single player's game of Monopoly, tracking nothing but movement.
pub struct Game {
    /// The only player in the game.
    player: Player,
    /// The chance cards, top card first.
    chance: Deck,
    /// The community chest cards, top card first.
    chest: Deck,
}

impl Game {
    /*********        INITIALISATION INTERFACES        *********/

    /// Return a new game with the player on 'Go' and the decks in the given order.
    pub fn new(chance: Deck, chest: Deck) -> Self {
        Self {
            player: Player::new(),
            chance,
            chest,
        }
    }

    /// Return a new game with both standard decks shuffled by `rng`.
    pub fn shuffled<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        let mut chance = Deck::chance();
        let mut chest = Deck::chest();

        // Chance is shuffled before the community chest
        chance.shuffle(rng);
        chest.shuffle(rng);

        Self::new(chance, chest)
    }

    /// Replace the player, e.g. to start a game from somewhere other than 'Go'.
    pub fn with_player(self, player: Player) -> Self {
        Self { player, ..self }
    }

    /*********        GETTERS        *********/

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn chance(&self) -> &Deck {
        &self.chance
    }

    pub fn chest(&self) -> &Deck {
        &self.chest
    }

    /*********        PUBLIC INTERFACES        *********/

    /// Play `turns` turns, adding every land and turn end to `stats`.
    pub fn play<R: RandomSource>(&mut self, turns: u32, dice: &mut Dice<R>, stats: &mut Stats) {
        for _ in 0..turns {
            self.take_turn(dice, stats);
        }
    }

    /// Roll the dice and play out the turn.
    pub fn take_turn<R: RandomSource>(
        &mut self,
        dice: &mut Dice<R>,
        stats: &mut Stats,
    ) -> TurnRecord {
        let roll = dice.roll();
        self.resolve_turn(roll, stats)
    }

    /// Play out a turn in which the player rolled `roll`.
    pub fn resolve_turn(&mut self, roll: DiceRoll, stats: &mut Stats) -> TurnRecord {
        let landed = if self.player.in_jail() && !roll.is_double {
            // Still in jail
            self.player.jail_turns -= 1;
            self.player.position
        } else {
            // Doubles get the player out of jail straight away
            self.player.jail_turns = 0;
            self.player.move_by(roll.sum);
            let landed = self.player.position;

            // Chance first, so a chance card can move the player onto a community chest
            if CHANCE_POSITIONS.contains(&self.player.position) {
                let card = self.chance.draw();
                self.apply_card(card);
            }

            if CHEST_POSITIONS.contains(&self.player.position) {
                let card = self.chest.draw();
                self.apply_card(card);
            }

            if self.player.position == GO_TO_JAIL_POSITION {
                self.player.send_to_jail();
            }

            landed
        };
        stats.record_land(landed);

        if roll.is_double {
            self.player.doubles_rolled += 1;

            // Go to jail after three consecutive doubles
            if self.player.doubles_rolled == MAX_DOUBLES {
                self.player.send_to_jail();
                self.player.doubles_rolled = 0;
            }
        } else {
            self.player.doubles_rolled = 0;
        }

        let ended = self.player.position;
        stats.record_end(ended);

        log::trace!(
            "rolled {}+{} -> {} ({})",
            roll.first,
            roll.second,
            self.player,
            self.player.space_name()
        );

        TurnRecord { roll, landed, ended }
    }

    /*********        HELPER FUNCTIONS        *********/

    /// Move the player wherever `card` sends them.
    fn apply_card(&mut self, card: Card) {
        if let Some(destination) = card.destination(self.player.position) {
            self.player.position = destination;

            if card.sends_to_jail() {
                self.player.jail_turns = JAIL_SENTENCE;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A deck whose top card is `top` and whose other cards do nothing.
    fn deck_topped_with(top: i8) -> Deck {
        let mut codes = [-1; CARDS];
        codes[0] = top;
        Deck::from_codes(&codes).unwrap()
    }

    fn quiet_game() -> Game {
        Game::new(deck_topped_with(-1), deck_topped_with(-1))
    }

    fn at(position: u8) -> Player {
        Player {
            position,
            ..Player::new()
        }
    }

    #[test]
    fn plain_roll_moves_and_records() {
        let mut game = quiet_game();
        let mut stats = Stats::new();

        let record = game.resolve_turn(DiceRoll::new(2, 4), &mut stats);

        assert_eq!(record.landed, 6);
        assert_eq!(record.ended, 6);
        assert_eq!(stats.lands[6], 1);
        assert_eq!(stats.ends[6], 1);
        assert_eq!(game.player().doubles_rolled, 0);
    }

    #[test]
    fn three_doubles_go_to_jail() {
        let mut game = quiet_game();
        let mut stats = Stats::new();

        game.resolve_turn(DiceRoll::new(1, 1), &mut stats);
        game.resolve_turn(DiceRoll::new(2, 2), &mut stats);
        assert_eq!(game.player().doubles_rolled, 2);
        let record = game.resolve_turn(DiceRoll::new(3, 3), &mut stats);

        // Landed on 12 but ended in jail
        assert_eq!(record.landed, 12);
        assert_eq!(record.ended, JAIL_POSITION);
        assert_eq!(game.player().jail_turns, JAIL_SENTENCE);
        assert_eq!(game.player().doubles_rolled, 0);
    }

    #[test]
    fn a_single_miss_resets_the_streak() {
        let mut game = quiet_game();
        let mut stats = Stats::new();

        game.resolve_turn(DiceRoll::new(1, 1), &mut stats);
        game.resolve_turn(DiceRoll::new(2, 2), &mut stats);
        game.resolve_turn(DiceRoll::new(1, 2), &mut stats);
        game.resolve_turn(DiceRoll::new(4, 4), &mut stats);

        assert_eq!(game.player().doubles_rolled, 1);
        assert!(!game.player().in_jail());
    }

    #[test]
    fn staying_in_jail_counts_down() {
        let mut game = quiet_game().with_player(Player {
            position: JAIL_POSITION,
            jail_turns: 1,
            doubles_rolled: 0,
        });
        let mut stats = Stats::new();

        let record = game.resolve_turn(DiceRoll::new(2, 5), &mut stats);

        assert_eq!(record.landed, JAIL_POSITION);
        assert_eq!(record.ended, JAIL_POSITION);
        assert_eq!(game.player().jail_turns, 0);
        assert_eq!(stats.lands[JAIL_POSITION as usize], 1);
    }

    #[test]
    fn doubles_spring_the_player_from_jail() {
        let mut game = quiet_game().with_player(Player {
            position: JAIL_POSITION,
            jail_turns: 2,
            doubles_rolled: 0,
        });
        let mut stats = Stats::new();

        let record = game.resolve_turn(DiceRoll::new(4, 4), &mut stats);

        assert_eq!(record.landed, 18);
        assert_eq!(game.player().position, 18);
        assert!(!game.player().in_jail());
        assert_eq!(game.player().doubles_rolled, 1);
    }

    #[test]
    fn third_double_in_jail_still_counts() {
        let mut game = quiet_game().with_player(Player {
            position: JAIL_POSITION,
            jail_turns: 2,
            doubles_rolled: 2,
        });
        let mut stats = Stats::new();

        game.resolve_turn(DiceRoll::new(5, 5), &mut stats);

        assert_eq!(game.player().position, JAIL_POSITION);
        assert_eq!(game.player().jail_turns, JAIL_SENTENCE);
    }

    #[test]
    fn go_to_jail_space_sends_the_player_to_jail() {
        let mut game = quiet_game().with_player(at(24));
        let mut stats = Stats::new();

        let record = game.resolve_turn(DiceRoll::new(1, 5), &mut stats);

        assert_eq!(record.landed, GO_TO_JAIL_POSITION);
        assert_eq!(record.ended, JAIL_POSITION);
        assert_eq!(game.player().jail_turns, JAIL_SENTENCE);
        assert_eq!(stats.lands[GO_TO_JAIL_POSITION as usize], 1);
        assert_eq!(stats.ends[GO_TO_JAIL_POSITION as usize], 0);
    }

    #[test]
    fn a_card_onto_go_to_jail_sends_the_player_to_jail() {
        let mut game = Game::new(deck_topped_with(30), deck_topped_with(-1));
        let mut stats = Stats::new();

        game.resolve_turn(DiceRoll::new(3, 4), &mut stats);

        assert_eq!(game.player().position, JAIL_POSITION);
        assert_eq!(game.player().jail_turns, JAIL_SENTENCE);
    }

    #[test]
    fn a_chest_card_onto_go_to_jail_sends_the_player_to_jail() {
        let mut game = Game::new(deck_topped_with(-1), deck_topped_with(30));
        let mut stats = Stats::new();

        let record = game.resolve_turn(DiceRoll::new(1, 1), &mut stats);

        // 'Community Chest 1' sends the player to 'Go To Jail'
        assert_eq!(record.landed, 2);
        assert_eq!(record.ended, JAIL_POSITION);
        assert_eq!(game.player().position, JAIL_POSITION);
        assert_eq!(game.player().jail_turns, JAIL_SENTENCE);
        assert_eq!(game.chest().cards()[CARDS - 1], Card::Advance(30));
    }

    #[test]
    fn jail_card_locks_the_player_up() {
        let mut game = Game::new(deck_topped_with(-1), deck_topped_with(10));
        let mut stats = Stats::new();

        let record = game.resolve_turn(DiceRoll::new(1, 1), &mut stats);

        assert_eq!(record.landed, 2);
        assert_eq!(record.ended, JAIL_POSITION);
        assert_eq!(game.player().jail_turns, JAIL_SENTENCE);
    }

    #[test]
    fn chance_can_send_the_player_onto_community_chest() {
        // Back three from 'Chance 3' is 'Community Chest 3'
        let mut game = Game::new(deck_topped_with(-3), deck_topped_with(0))
            .with_player(at(30));
        let mut stats = Stats::new();

        let record = game.resolve_turn(DiceRoll::new(2, 4), &mut stats);

        assert_eq!(record.landed, 36);
        assert_eq!(record.ended, 0);
        // Both decks were drawn from
        assert_eq!(game.chance().cards()[CARDS - 1], Card::Back(3));
        assert_eq!(game.chest().cards()[CARDS - 1], Card::Advance(0));
    }

    #[test]
    fn railroad_card_wraps_past_go() {
        let mut game = Game::new(deck_topped_with(-5), deck_topped_with(-1))
            .with_player(at(30));
        let mut stats = Stats::new();

        let record = game.resolve_turn(DiceRoll::new(1, 5), &mut stats);

        assert_eq!(record.landed, 36);
        assert_eq!(record.ended, 5);
    }

    #[test]
    fn plain_spaces_draw_no_cards() {
        let mut game = Game::new(Deck::chance(), Deck::chest());
        let mut stats = Stats::new();

        game.resolve_turn(DiceRoll::new(2, 3), &mut stats);

        assert_eq!(game.chance(), &Deck::chance());
        assert_eq!(game.chest(), &Deck::chest());
    }

    #[test]
    fn a_full_game_records_one_land_and_end_per_turn() {
        let mut game = Game::new(Deck::chance(), Deck::chest());
        let faces = [1, 2, 6, 6, 3, 5, 4, 4, 2, 2, 1, 6];
        let mut dice = Dice::new(ScriptedSource::from_faces(&faces));
        let mut stats = Stats::new();

        game.play(DEFAULT_TURNS, &mut dice, &mut stats);

        assert_eq!(stats.total_lands(), DEFAULT_TURNS as u64);
        assert_eq!(stats.total_ends(), DEFAULT_TURNS as u64);
    }
}
