use rand::Rng;

use super::globals::{DiceRoll, DIE_FACES};

/// A source of uniformly distributed integers.
pub trait RandomSource {
    /// Return a value in `0..bound`. `bound` must be non-zero.
    fn next_below(&mut self, bound: u32) -> u32;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn next_below(&mut self, bound: u32) -> u32 {
        // `gen_range` rejects out-of-zone samples, so there's no modulo bias
        self.gen_range(0..bound)
    }
}

#[derive(Clone, Debug)]
/// A source that replays a fixed list of values, starting over when it runs out.
///
/// Each value is reduced modulo the requested bound, so a script of die
/// faces should hold `face - 1`. See [`ScriptedSource::from_faces`].
pub struct ScriptedSource {
    values: Vec<u32>,
    next: usize,
}

impl ScriptedSource {
    /// Create a source that yields `values` in order, over and over.
    ///
    /// # Panics
    ///
    /// Panics if `values` is empty.
    pub fn new(values: Vec<u32>) -> ScriptedSource {
        assert!(
            !values.is_empty(),
            "a scripted source needs at least one value"
        );
        ScriptedSource { values, next: 0 }
    }

    /// Create a source that makes [`Dice`] roll the given die faces in order.
    ///
    /// # Panics
    ///
    /// Panics if `faces` is empty or holds a value outside `1..=6`.
    pub fn from_faces(faces: &[u8]) -> ScriptedSource {
        let values = faces
            .iter()
            .map(|&face| {
                assert!(
                    (1..=DIE_FACES).contains(&(face as u32)),
                    "{} is not a die face",
                    face
                );
                face as u32 - 1
            })
            .collect();

        ScriptedSource::new(values)
    }
}

impl RandomSource for ScriptedSource {
    fn next_below(&mut self, bound: u32) -> u32 {
        let value = self.values[self.next] % bound;
        self.next = (self.next + 1) % self.values.len();
        value
    }
}

/// A pair of six-sided dice.
pub struct Dice<R> {
    source: R,
}

impl<R: RandomSource> Dice<R> {
    /// Roll dice driven by `source`.
    pub fn new(source: R) -> Self {
        Dice { source }
    }

    /// Roll one die.
    pub fn roll_die(&mut self) -> u8 {
        1 + self.source.next_below(DIE_FACES) as u8
    }

    /// Roll both dice.
    pub fn roll(&mut self) -> DiceRoll {
        let first = self.roll_die();
        let second = self.roll_die();

        DiceRoll::new(first, second)
    }
}
