//! Evolve many independent seeds in parallel

use super::cell::Generation;
use super::engine::GameOfLife;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// A named seed after evolution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchResult {
    pub name: String,
    pub generation: Generation,
    pub population: usize,
}

/// Advance every seed `generations` times, one engine per seed.
///
/// Results come back in input order.
pub fn evolve_batch(seeds: Vec<(String, Generation)>, generations: usize) -> Vec<BatchResult> {
    seeds
        .into_par_iter()
        .map(|(name, seed)| {
            let mut game = GameOfLife::from(seed);
            for _ in 0..generations {
                if game.is_extinct() {
                    break;
                }
                game.tick();
            }
            let population = game.population();
            BatchResult {
                name,
                generation: game.into_alive_cells(),
                population,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_of_life::cell::generation_from;
    use crate::game_of_life::generations::Generations;

    #[test]
    fn test_batch_preserves_order() {
        let seeds: Vec<(String, Generation)> = (0..32)
            .map(|i| (format!("seed_{:02}", i), generation_from([(i, 0), (i + 1, 0), (i + 2, 0)])))
            .collect();
        let results = evolve_batch(seeds, 1);
        for (i, result) in results.iter().enumerate() {
            assert_eq!(result.name, format!("seed_{:02}", i));
            let i = i as i64;
            assert_eq!(result.generation, generation_from([(i + 1, -1), (i + 1, 0), (i + 1, 1)]));
        }
    }

    #[test]
    fn test_batch_matches_sequential_evolution() {
        let glider = generation_from([(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)]);
        let expected = Generations::new(glider.iter().copied()).nth(7).unwrap();

        let results = evolve_batch(
            vec![
                ("glider".to_string(), glider),
                ("single".to_string(), generation_from([(0, 0)])),
            ],
            8,
        );

        assert_eq!(results[0].generation, expected);
        assert_eq!(results[0].population, 5);
        assert!(results[1].generation.is_empty());
        assert_eq!(results[1].population, 0);
    }

    #[test]
    fn test_batch_with_zero_generations_returns_seeds() {
        let block = generation_from([(0, 0), (1, 0), (0, 1), (1, 1)]);
        let results = evolve_batch(vec![("block".to_string(), block.clone())], 0);
        assert_eq!(results[0].generation, block);
    }
}
