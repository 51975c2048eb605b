//! Conway's Game of Life on an unbounded plane
//!
//! The live cells of a generation are stored as a set of coordinates; a
//! transition keeps the survivors and adds the births found among the dead
//! neighbours of the live cells.

pub mod config;
pub mod error;
pub mod game_of_life;
pub mod utils;

pub use config::Settings;
pub use error::PatternError;
pub use game_of_life::{game_of_life_generator, neighbours, Cell, GameOfLife, Generation, Generations};

/// Advance `seed` by `generations` steps and return the result
pub fn evolve(seed: Generation, generations: usize) -> Generation {
    let mut game = GameOfLife::from(seed);
    for _ in 0..generations {
        game.tick();
    }
    game.into_alive_cells()
}
