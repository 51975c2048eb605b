//! Lazy, unbounded sequence of generations

use super::cell::{Cell, Generation};
use super::engine::GameOfLife;

/// Iterator that advances an owned engine once per item.
///
/// The n-th item is the seed advanced n times. It never ends; take as many
/// generations as needed.
#[derive(Debug, Clone)]
pub struct Generations {
    game: GameOfLife,
}

impl Generations {
    pub fn new<I: IntoIterator<Item = Cell>>(seed: I) -> Self {
        Self {
            game: GameOfLife::new(seed),
        }
    }

    /// The engine in its current state
    pub fn engine(&self) -> &GameOfLife {
        &self.game
    }
}

impl Iterator for Generations {
    type Item = Generation;

    fn next(&mut self) -> Option<Generation> {
        Some(self.game.tick().clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl std::iter::FusedIterator for Generations {}

/// Start a generation sequence from `seed`
pub fn game_of_life_generator<I: IntoIterator<Item = Cell>>(seed: I) -> Generations {
    Generations::new(seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_of_life::cell::generation_from;

    #[test]
    fn test_blinker_several_generations() {
        // .....      ..*..
        // .***.  ->  ..*..
        // .....      ..*..
        let mut game = game_of_life_generator(generation_from([(1, 1), (2, 1), (3, 1)]));
        assert_eq!(game.next(), Some(generation_from([(2, 0), (2, 1), (2, 2)])));
        assert_eq!(game.next(), Some(generation_from([(1, 1), (2, 1), (3, 1)])));
    }

    #[test]
    fn test_generations_from_empty_seed() {
        let mut game = game_of_life_generator(Generation::new());
        assert_eq!(game.next(), Some(Generation::new()));
        assert_eq!(game.next(), Some(Generation::new()));
    }

    #[test]
    fn test_item_matches_engine_state() {
        let mut game = Generations::new(generation_from([(0, 0), (1, 0), (0, 1)]));
        let first = game.next().unwrap();
        assert_eq!(&first, game.engine().alive_cells());
        assert_eq!(first.len(), 4);
    }

    #[test]
    fn test_nth_generation_equals_repeated_ticks() {
        let seed = generation_from([(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)]);
        let mut game = GameOfLife::from(seed.clone());
        for _ in 0..4 {
            game.tick();
        }
        let fourth = Generations::new(seed).nth(3).unwrap();
        assert_eq!(&fourth, game.alive_cells());
    }
}
