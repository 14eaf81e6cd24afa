/// Fixed playing field, measured in cells. Movement wraps at every edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    pub width: u16,
    pub height: u16,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: u16,
    pub y: u16,
}

impl Cell {
    pub const fn new(x: u16, y: u16) -> Self {
        Cell { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

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

impl Grid {
    pub const fn new(width: u16, height: u16) -> Self {
        Grid { width, height }
    }

    pub fn center(&self) -> Cell {
        Cell {
            x: self.width / 2,
            y: self.height / 2,
        }
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.x < self.width && cell.y < self.height
    }

    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Every cell of the grid, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Cell { x, y }))
    }

    /// Steps one cell in `direction`, reappearing on the far side at an edge.
    pub fn wrap(&self, cell: Cell, direction: Direction) -> Cell {
        self.wrapped_add(cell, direction.into())
    }

    pub fn wrapped_add(&self, cell: Cell, delta: Delta) -> Cell {
        let x = (cell.x as i32 + delta.x).rem_euclid(self.width as i32) as u16;
        let y = (cell.y as i32 + delta.y).rem_euclid(self.height as i32) as u16;
        Cell { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_directions() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);

        for dir in Direction::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn test_opposite_delta_is_negated() {
        for dir in Direction::ALL {
            let delta: Delta = dir.into();
            let back: Delta = dir.opposite().into();
            assert_eq!(delta.x, -back.x);
            assert_eq!(delta.y, -back.y);
        }
    }

    #[test]
    fn test_zero_delta() {
        let grid = Grid::new(32, 24);
        let delta = Delta { x: 0, y: 0 };

        for cell in [Cell::new(16, 12), Cell::new(0, 0), Cell::new(31, 23)] {
            assert_eq!(grid.wrapped_add(cell, delta), cell);
        }
    }

    #[test]
    fn test_full_lap_returns_home() {
        let grid = Grid::new(5, 11);
        let pos = Cell::new(2, 7);

        assert_eq!(grid.wrapped_add(pos, Delta { x: 5, y: 11 }), pos);
        assert_eq!(grid.wrapped_add(pos, Delta { x: -5, y: -11 }), pos);
        assert_eq!(grid.wrapped_add(pos, Delta { x: 15, y: -22 }), pos);
    }

    #[test]
    fn test_large_deltas() {
        let grid = Grid::new(12, 9);
        let pos = Cell::new(10, 4);

        assert_eq!(grid.wrapped_add(pos, Delta { x: 3, y: -5 }), Cell::new(1, 8));
        assert_eq!(grid.wrapped_add(pos, Delta { x: 26, y: 14 }), Cell::new(0, 0));
        assert_eq!(grid.wrapped_add(pos, Delta { x: -34, y: -13 }), Cell::new(0, 0));
    }

    #[test]
    fn test_all_directions() {
        let grid = Grid::new(10, 10);
        let pos = Cell::new(5, 5);

        assert_eq!(grid.wrap(pos, Direction::Up), Cell::new(5, 4));
        assert_eq!(grid.wrap(pos, Direction::Down), Cell::new(5, 6));
        assert_eq!(grid.wrap(pos, Direction::Left), Cell::new(4, 5));
        assert_eq!(grid.wrap(pos, Direction::Right), Cell::new(6, 5));
    }

    #[test]
    fn test_wrapped_add_uneven_grid() {
        let grid = Grid::new(7, 3);

        assert_eq!(grid.wrapped_add(Cell::new(6, 2), Delta { x: 1, y: 1 }), Cell::new(0, 0));
        assert_eq!(grid.wrapped_add(Cell::new(0, 0), Delta { x: -1, y: -1 }), Cell::new(6, 2));
        // 15 = 2 laps of 7 plus 1; -7 = 2 laps of 3 plus -1
        assert_eq!(grid.wrapped_add(Cell::new(4, 1), Delta { x: 15, y: -7 }), Cell::new(5, 0));
        assert_eq!(grid.wrapped_add(Cell::new(2, 2), Delta { x: -9, y: 4 }), Cell::new(0, 0));
        // Full laps on each axis
        assert_eq!(grid.wrapped_add(Cell::new(3, 1), Delta { x: 21, y: -9 }), Cell::new(3, 1));
    }

    #[test]
    fn test_wrap_every_edge() {
        let grid = Grid::new(32, 24);

        for y in 0..grid.height {
            assert_eq!(grid.wrap(Cell::new(31, y), Direction::Right), Cell::new(0, y));
            assert_eq!(grid.wrap(Cell::new(0, y), Direction::Left), Cell::new(31, y));
        }
        for x in 0..grid.width {
            assert_eq!(grid.wrap(Cell::new(x, 23), Direction::Down), Cell::new(x, 0));
            assert_eq!(grid.wrap(Cell::new(x, 0), Direction::Up), Cell::new(x, 23));
        }
    }

    #[test]
    fn test_wrap_stays_in_bounds() {
        let grid = Grid::new(7, 3);
        for cell in grid.cells() {
            for dir in Direction::ALL {
                assert!(grid.contains(grid.wrap(cell, dir)));
            }
        }
    }

    #[test]
    fn test_single_row_grid() {
        let grid = Grid::new(4, 1);
        assert_eq!(grid.wrap(Cell::new(2, 0), Direction::Up), Cell::new(2, 0));
        assert_eq!(grid.wrap(Cell::new(2, 0), Direction::Down), Cell::new(2, 0));
    }

    #[test]
    fn test_center_and_cells() {
        let grid = Grid::new(32, 24);
        assert_eq!(grid.center(), Cell::new(16, 12));
        assert_eq!(grid.cell_count(), 32 * 24);
        assert_eq!(grid.cells().count(), grid.cell_count());
        assert!(grid.cells().all(|c| grid.contains(c)));
        assert!(!grid.contains(Cell::new(32, 0)));
        assert!(!grid.contains(Cell::new(0, 24)));
    }
}
