//! The automaton engine: owns the live-cell set and advances it

use super::cell::{neighbours, Cell, Generation};
use super::rules::GameOfLifeRules;
use log::trace;

/// Game of Life over the unbounded plane
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameOfLife {
    alive_cells: Generation,
}

impl GameOfLife {
    /// Create an engine from a seed (which may be empty)
    pub fn new<I: IntoIterator<Item = Cell>>(seed: I) -> Self {
        Self {
            alive_cells: seed.into_iter().collect(),
        }
    }

    /// Advance one generation and return the new live-cell set
    pub fn tick(&mut self) -> &Generation {
        let survivors = self.survivors();
        let births = self.births();
        trace!(
            "tick: {} alive, {} survive, {} born",
            self.alive_cells.len(),
            survivors.len(),
            births.len()
        );

        let mut next = survivors;
        next.extend(births);
        self.alive_cells = next;
        &self.alive_cells
    }

    /// Live cells with 2 or 3 live neighbours
    pub fn survivors(&self) -> Generation {
        self.alive_cells
            .iter()
            .filter(|&&cell| GameOfLifeRules::survives(self.live_neighbours(cell).len()))
            .copied()
            .collect()
    }

    /// Dead cells adjacent to the population with exactly 3 live neighbours
    pub fn births(&self) -> Generation {
        self.birth_candidates()
            .into_iter()
            .filter(|&cell| GameOfLifeRules::is_born(self.live_neighbours(cell).len()))
            .collect()
    }

    /// Neighbours of `cell` that are alive. `cell` itself need not be alive.
    pub fn live_neighbours(&self, cell: Cell) -> Generation {
        neighbours(cell)
            .into_iter()
            .filter(|n| self.alive_cells.contains(n))
            .collect()
    }

    /// Neighbours of `cell` that are dead
    pub fn dead_neighbours(&self, cell: Cell) -> Generation {
        neighbours(cell)
            .into_iter()
            .filter(|n| !self.alive_cells.contains(n))
            .collect()
    }

    /// Every dead cell adjacent to at least one live cell.
    ///
    /// Empty when nothing is alive.
    pub fn birth_candidates(&self) -> Generation {
        self.alive_cells
            .iter()
            .fold(Generation::new(), |mut candidates, &cell| {
                candidates.extend(self.dead_neighbours(cell));
                candidates
            })
    }

    pub fn alive_cells(&self) -> &Generation {
        &self.alive_cells
    }

    pub fn into_alive_cells(self) -> Generation {
        self.alive_cells
    }

    pub fn is_alive(&self, cell: Cell) -> bool {
        self.alive_cells.contains(&cell)
    }

    pub fn population(&self) -> usize {
        self.alive_cells.len()
    }

    pub fn is_extinct(&self) -> bool {
        self.alive_cells.is_empty()
    }
}

impl From<Generation> for GameOfLife {
    fn from(alive_cells: Generation) -> Self {
        Self { alive_cells }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_of_life::cell::{generation_from, neighbour_set};

    #[test]
    fn test_tick_on_empty_generation() {
        let mut game = GameOfLife::default();
        assert!(game.tick().is_empty());
        assert!(game.is_extinct());
    }

    #[test]
    fn test_tick_with_one_death() {
        let mut game = GameOfLife::from(generation_from([(0, 0)]));
        game.tick();
        assert!(game.alive_cells().is_empty());
    }

    #[test]
    fn test_tick_with_a_survival() {
        // .**.
        // .**.
        let seed = generation_from([(1, 0), (2, 0), (1, 1), (2, 1)]);
        let mut game = GameOfLife::from(seed.clone());
        assert_eq!(game.tick(), &seed);
        assert!(game.is_alive(Cell::new(1, 0)));
        assert!(!game.is_alive(Cell::new(0, 0)));
    }

    #[test]
    fn test_overpopulation() {
        // *.*
        // .*.
        // *.*
        let mut game = GameOfLife::from(generation_from([(0, 0), (2, 0), (1, 1), (0, 2), (2, 2)]));
        assert_eq!(game.live_neighbours(Cell::new(1, 1)).len(), 4);
        assert!(!game.survivors().contains(&Cell::new(1, 1)));
        assert!(!game.tick().contains(&Cell::new(1, 1)));
    }

    #[test]
    fn test_live_neighbours_with_no_live_neighbours() {
        let game = GameOfLife::from(generation_from([(1, 0)]));
        assert!(game.live_neighbours(Cell::new(1, 0)).is_empty());
    }

    #[test]
    fn test_live_neighbours_with_one_live_neighbour() {
        let game = GameOfLife::from(generation_from([(1, 0), (2, 0)]));
        assert_eq!(game.live_neighbours(Cell::new(1, 0)), generation_from([(2, 0)]));
    }

    #[test]
    fn test_live_neighbours_of_dead_cell() {
        let game = GameOfLife::from(generation_from([(1, 0), (2, 0)]));
        assert_eq!(game.live_neighbours(Cell::new(5, 5)).len(), 0);
        assert_eq!(game.live_neighbours(Cell::new(1, 1)).len(), 2);
    }

    #[test]
    fn test_live_and_dead_neighbours_partition_the_neighbourhood() {
        let game = GameOfLife::from(generation_from([(1, 0), (0, 1), (1, 1), (3, 3)]));
        for cell in [Cell::new(0, 0), Cell::new(1, 1), Cell::new(2, 2), Cell::new(-7, 4)] {
            let live = game.live_neighbours(cell);
            let dead = game.dead_neighbours(cell);
            assert!(live.is_disjoint(&dead));
            let union: Generation = live.union(&dead).copied().collect();
            assert_eq!(union, neighbour_set(cell));
        }
    }

    #[test]
    fn test_births() {
        // .*
        // **
        let game = GameOfLife::from(generation_from([(1, 0), (0, 1), (1, 1)]));
        assert_eq!(game.births(), generation_from([(0, 0)]));
    }

    #[test]
    fn test_birth_candidates() {
        let game = GameOfLife::from(generation_from([(0, 0)]));
        let candidates = game.birth_candidates();
        assert_eq!(candidates.len(), 8);
        assert_eq!(candidates, neighbour_set(Cell::new(0, 0)));
    }

    #[test]
    fn test_birth_candidates_of_empty_generation() {
        assert!(GameOfLife::default().birth_candidates().is_empty());
    }

    #[test]
    fn test_birth_candidates_exclude_live_cells() {
        let game = GameOfLife::from(generation_from([(0, 0), (1, 0)]));
        let candidates = game.birth_candidates();
        assert_eq!(candidates.len(), 10);
        assert!(!candidates.contains(&Cell::new(0, 0)));
        assert!(!candidates.contains(&Cell::new(1, 0)));
    }

    #[test]
    fn test_blinker_two_ticks() {
        let seed = generation_from([(1, 1), (2, 1), (3, 1)]);
        let mut game = GameOfLife::from(seed.clone());
        assert_eq!(game.tick(), &generation_from([(2, 0), (2, 1), (2, 2)]));
        assert_eq!(game.tick(), &seed);
        assert_eq!(game.population(), 3);
    }
}
