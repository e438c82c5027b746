use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Unit step on the board
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Delta {
    pub x: i32,
    pub y: i32,
}

impl From<Direction> for Delta {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::Up => Delta { x: 0, y: -1 },
            Direction::Down => Delta { x: 0, y: 1 },
            Direction::Left => Delta { x: -1, y: 0 },
            Direction::Right => Delta { x: 1, y: 0 },
        }
    }
}

/// A board coordinate. Signed so that a step off the edge is representable
/// and can be rejected by [`Grid::in_bounds`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Cell { x, y }
    }

    pub fn stepped(&self, dir: Direction) -> Cell {
        let delta = Delta::from(dir);
        Cell {
            x: self.x + delta.x,
            y: self.y + delta.y,
        }
    }
}

/// Square N x N board
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    size: u16,
}

impl Grid {
    pub fn new(size: u16) -> Self {
        Grid { size }
    }

    pub fn size(&self) -> u16 {
        self.size
    }

    pub fn cell_count(&self) -> usize {
        self.size as usize * self.size as usize
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        let n = self.size as i32;
        cell.x >= 0 && cell.y >= 0 && cell.x < n && cell.y < n
    }

    pub fn center(&self) -> Cell {
        let mid = (self.size / 2) as i32;
        Cell::new(mid, mid)
    }

    /// Uniformly random cell on the board
    pub fn random_cell(&self, rng: &mut impl Rng) -> Cell {
        let n = self.size as i32;
        Cell::new(rng.gen_range(0..n), rng.gen_range(0..n))
    }
}
