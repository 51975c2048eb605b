//! Game of Life core functionality

pub mod analysis;
pub mod batch;
pub mod cell;
pub mod engine;
pub mod generations;
pub mod io;
pub mod rules;

pub use analysis::{analyze, Analysis, Behaviour};
pub use batch::{evolve_batch, BatchResult};
pub use cell::{generation_from, neighbour_set, neighbours, Cell, Generation};
pub use engine::GameOfLife;
pub use generations::{game_of_life_generator, Generations};
pub use io::{
    create_example_patterns, generation_to_string, load_generation_from_file,
    load_generations_from_directory, parse_generation, save_generation_to_file,
};
pub use rules::GameOfLifeRules;
