use std::collections::VecDeque;

use log::info;
use rand::Rng;

use crate::config::GameConfig;
use crate::food;
use crate::grid::{Cell, Direction, Grid};

const DEFAULT_DIRECTION: Direction = Direction::Right;

/// Snake segments, head first
#[derive(Clone, Debug, PartialEq)]
pub struct Snake {
    body: VecDeque<Cell>,
}

impl Snake {
    /// Straight snake with its head at `head`, trailing away from `direction`
    pub fn new(head: Cell, direction: Direction, length: u16) -> Self {
        let back = direction.opposite();
        let mut body = VecDeque::with_capacity(length as usize);
        let mut cell = head;
        for _ in 0..length.max(1) {
            body.push_back(cell);
            cell = cell.stepped(back);
        }
        Snake { body }
    }

    #[cfg(test)]
    pub fn from_cells(cells: impl IntoIterator<Item = Cell>) -> Self {
        let body: VecDeque<Cell> = cells.into_iter().collect();
        debug_assert!(!body.is_empty(), "snake must have a head");
        Snake { body }
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    #[cfg(test)]
    pub fn tail(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }

    pub(crate) fn push_head(&mut self, cell: Cell) {
        self.body.push_front(cell);
    }

    pub(crate) fn pop_tail(&mut self) -> Option<Cell> {
        self.body.pop_back()
    }
}

/// Where the game stands, as seen by the engine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Running,
    Paused,
    GameOver,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub grid: Grid,
    pub snake: Snake,
    /// Direction applied on the last tick
    pub direction: Direction,
    /// Direction to apply on the next tick
    pub pending_direction: Direction,
    pub food: Cell,
    pub score: u32,
    pub paused: bool,
    pub game_over: bool,
    initial_length: u16,
}

impl GameState {
    pub fn new(config: &GameConfig, rng: &mut impl Rng) -> Self {
        let grid = Grid::new(config.grid_size);
        let snake = Snake::new(grid.center(), DEFAULT_DIRECTION, config.initial_length);
        let food = food::place(&grid, &snake, rng);
        GameState {
            grid,
            snake,
            direction: DEFAULT_DIRECTION,
            pending_direction: DEFAULT_DIRECTION,
            food,
            score: 0,
            paused: false,
            game_over: false,
            initial_length: config.initial_length,
        }
    }

    /// Running state built from explicit parts
    #[cfg(test)]
    pub fn with_parts(grid: Grid, snake: Snake, direction: Direction, food: Cell) -> Self {
        let initial_length = snake.len() as u16;
        GameState {
            grid,
            snake,
            direction,
            pending_direction: direction,
            food,
            score: 0,
            paused: false,
            game_over: false,
            initial_length,
        }
    }

    /// Back to a fresh three-segment snake at the centre with new food
    pub fn reset(&mut self, rng: &mut impl Rng) {
        self.snake = Snake::new(self.grid.center(), DEFAULT_DIRECTION, self.initial_length);
        self.direction = DEFAULT_DIRECTION;
        self.pending_direction = DEFAULT_DIRECTION;
        self.score = 0;
        self.paused = false;
        self.game_over = false;
        self.food = food::place(&self.grid, &self.snake, rng);
        info!("Game reset, food at {:?}", self.food);
    }

    /// Queue a turn for the next tick. Reversing onto the current heading is ignored.
    pub fn set_pending_direction(&mut self, direction: Direction) -> bool {
        if direction == self.direction.opposite() {
            return false;
        }
        self.pending_direction = direction;
        true
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    pub fn status(&self) -> Status {
        if self.game_over {
            Status::GameOver
        } else if self.paused {
            Status::Paused
        } else {
            Status::Running
        }
    }
}
