use log::debug;
use rand::Rng;

use crate::best_score::BestScore;
use crate::config::GameConfig;
use crate::food;
use crate::grid::Cell;
use crate::state::{GameState, Status};
use crate::store::KeyValueStore;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Collision {
    Wall,
    Body,
}

/// Overlay shown on top of the board
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Banner {
    Paused,
    GameOver,
}

/// What a single tick did
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Paused: nothing moved
    Paused,
    /// Moved one cell without eating
    Moved,
    /// Ate the food and grew
    Ate { score: u32, new_best: bool },
    /// Hit something; the game is now over
    Collided(Collision),
    /// Game already over, nothing to do
    Halted,
}

impl TickOutcome {
    /// Banner the frame after this tick should carry
    pub fn banner(&self) -> Option<Banner> {
        match self {
            TickOutcome::Paused => Some(Banner::Paused),
            TickOutcome::Collided(_) | TickOutcome::Halted => Some(Banner::GameOver),
            TickOutcome::Moved | TickOutcome::Ate { .. } => None,
        }
    }

    pub fn ends_game(&self) -> bool {
        matches!(self, TickOutcome::Collided(_) | TickOutcome::Halted)
    }
}

/// Movement, collision and scoring rules
#[derive(Debug, Clone)]
pub struct Engine {
    food_score: u32,
}

impl Engine {
    pub fn new(config: &GameConfig) -> Self {
        Engine {
            food_score: config.food_score,
        }
    }

    /// Advance the game by one step
    pub fn tick<S: KeyValueStore>(
        &self,
        state: &mut GameState,
        best: &mut BestScore<S>,
        rng: &mut impl Rng,
    ) -> TickOutcome {
        match state.status() {
            Status::GameOver => return TickOutcome::Halted,
            Status::Paused => return TickOutcome::Paused,
            Status::Running => {}
        }

        state.direction = state.pending_direction;
        let head = state.snake.head().stepped(state.direction);

        // Checked against the body before it moves, tail included: when the
        // snake grows this tick the tail does not vacate its cell.
        if let Some(collision) = self.check_collision(state, head) {
            state.game_over = true;
            debug!("{:?} collision at {:?}", collision, head);
            return TickOutcome::Collided(collision);
        }

        state.snake.push_head(head);

        if head != state.food {
            state.snake.pop_tail();
            return TickOutcome::Moved;
        }

        state.score += self.food_score;
        let new_best = best.record(state.score);
        state.food = food::place(&state.grid, &state.snake, rng);
        debug!(
            "Ate food at {:?}, score {}, next food at {:?}",
            head, state.score, state.food
        );

        TickOutcome::Ate {
            score: state.score,
            new_best,
        }
    }

    fn check_collision(&self, state: &GameState, head: Cell) -> Option<Collision> {
        if !state.grid.in_bounds(head) {
            return Some(Collision::Wall);
        }
        if state.snake.contains(head) {
            return Some(Collision::Body);
        }
        None
    }
}
