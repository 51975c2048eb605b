//! Game of Life rules (B3/S23)

/// Game of Life rules table
pub struct GameOfLifeRules;

impl GameOfLifeRules {
    /// Whether a cell is alive next generation given its state and live neighbour count
    pub fn should_be_alive(is_alive: bool, live_neighbours: usize) -> bool {
        if is_alive {
            Self::survives(live_neighbours)
        } else {
            Self::is_born(live_neighbours)
        }
    }

    /// A live cell survives with 2 or 3 live neighbours
    #[inline]
    pub fn survives(live_neighbours: usize) -> bool {
        Self::survival_neighbour_counts().contains(&live_neighbours)
    }

    /// A dead cell is born with exactly 3 live neighbours
    #[inline]
    pub fn is_born(live_neighbours: usize) -> bool {
        Self::birth_neighbour_counts().contains(&live_neighbours)
    }

    pub fn survival_neighbour_counts() -> &'static [usize] {
        &[2, 3]
    }

    pub fn birth_neighbour_counts() -> &'static [usize] {
        &[3]
    }

    /// Size of the Moore neighbourhood
    pub fn max_neighbour_count() -> usize {
        8
    }

    pub fn is_valid_neighbour_count(count: usize) -> bool {
        count <= Self::max_neighbour_count()
    }
}
