use rand::Rng;

use crate::grid::{Cell, Grid};
use crate::state::Snake;

/// Pick a random cell not covered by the snake.
///
/// Retries until it lands on a free cell. The snake never fills the whole
/// board in a reachable state, so this terminates with probability 1.
pub fn place(grid: &Grid, snake: &Snake, rng: &mut impl Rng) -> Cell {
    debug_assert!(snake.len() < grid.cell_count(), "no free cell for food");
    loop {
        let cell = grid.random_cell(rng);
        if !snake.contains(cell) {
            return cell;
        }
    }
}
