//! Behaviour classification by bounded forward simulation

use super::cell::{Cell, Generation};
use super::generations::Generations;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Long-run behaviour of a seed, as far as the simulation got
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Behaviour {
    /// Population reached zero at `generation`
    Extinct { generation: usize },
    /// The seed maps to itself
    StillLife,
    /// The seed recurs every `period` generations
    Oscillator { period: usize },
    /// Entered a cycle at `generation` that does not include the seed
    Settled { generation: usize, period: usize },
    /// No repeat found within the generation limit
    Unsettled,
}

/// Outcome of [`analyze`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    pub behaviour: Behaviour,
    pub generations_run: usize,
    /// Population per generation, starting with the seed
    pub populations: Vec<usize>,
}

/// Run `seed` forward for at most `max_generations` and classify it
pub fn analyze(seed: &Generation, max_generations: usize) -> Analysis {
    let mut populations = vec![seed.len()];

    if seed.is_empty() {
        return Analysis {
            behaviour: Behaviour::Extinct { generation: 0 },
            generations_run: 0,
            populations,
        };
    }

    let mut seen: HashMap<Vec<Cell>, usize> = HashMap::new();
    seen.insert(canonical(seed), 0);

    for (generation, cells) in (1..=max_generations).zip(Generations::new(seed.iter().copied())) {
        populations.push(cells.len());

        let behaviour = if cells.is_empty() {
            Some(Behaviour::Extinct { generation })
        } else {
            let key = canonical(&cells);
            match seen.get(&key) {
                Some(&first) => Some(classify_repeat(first, generation - first)),
                None => {
                    seen.insert(key, generation);
                    None
                }
            }
        };

        if let Some(behaviour) = behaviour {
            debug!("settled after {} generations: {}", generation, behaviour);
            return Analysis {
                behaviour,
                generations_run: generation,
                populations,
            };
        }
    }

    Analysis {
        behaviour: Behaviour::Unsettled,
        generations_run: max_generations,
        populations,
    }
}

fn classify_repeat(first: usize, period: usize) -> Behaviour {
    match (first, period) {
        (0, 1) => Behaviour::StillLife,
        (0, period) => Behaviour::Oscillator { period },
        (generation, period) => Behaviour::Settled { generation, period },
    }
}

fn canonical(generation: &Generation) -> Vec<Cell> {
    let mut cells: Vec<Cell> = generation.iter().copied().collect();
    cells.sort_unstable();
    cells
}

impl fmt::Display for Behaviour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Behaviour::Extinct { generation } => write!(f, "extinct at generation {}", generation),
            Behaviour::StillLife => write!(f, "still life"),
            Behaviour::Oscillator { period } => write!(f, "oscillator (period {})", period),
            Behaviour::Settled { generation, period } => {
                write!(f, "settled at generation {} (period {})", generation, period)
            }
            Behaviour::Unsettled => write!(f, "unsettled"),
        }
    }
}

impl fmt::Display for Analysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Behaviour: {}", self.behaviour)?;
        writeln!(f, "Generations run: {}", self.generations_run)?;
        let peak = self.populations.iter().max().copied().unwrap_or(0);
        write!(
            f,
            "Population: {} -> {} (peak {})",
            self.populations.first().copied().unwrap_or(0),
            self.populations.last().copied().unwrap_or(0),
            peak
        )
    }
}
