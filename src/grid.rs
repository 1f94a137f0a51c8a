use crate::{LifeError, Pos2};

/// How a grid is populated at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillMode {
    #[default]
    Empty,
    Random,
    Alternating,
    All,
}
impl FillMode {
    pub fn new<S: AsRef<str>>(s: S) -> Option<Self> {
        match s.as_ref() {
            "empty" => Some(Self::Empty),
            "random" => Some(Self::Random),
            "alternating" => Some(Self::Alternating),
            "all" => Some(Self::All),
            _ => None,
        }
    }

    fn fill_cell<R: rand::Rng>(&self, cell: Pos2, rng: &mut R) -> bool {
        match self {
            Self::Empty => false,
            Self::Random => rng.random_bool(0.5),
            Self::Alternating => (cell.x + cell.y) % 2 == 0,
            Self::All => true,
        }
    }
}

/// A fixed-size, row-major grid of cells, indexed as `x + y * width`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Creates an all-dead grid
    pub fn new(width: usize, height: usize) -> Result<Self, LifeError> {
        if width == 0 || height == 0 {
            return Err(LifeError::EmptyGrid { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![false; width * height],
        })
    }

    /// Creates a grid whose listed cells are alive. Positions outside the grid are ignored.
    pub fn from_alive(
        width: usize,
        height: usize,
        alive: impl IntoIterator<Item = Pos2>,
    ) -> Result<Self, LifeError> {
        let mut grid = Self::new(width, height)?;
        for pos in alive {
            grid.set(pos, true);
        }
        Ok(grid)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn contains(&self, pos: Pos2) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    /// Whether `(x, y)` sits on the outermost ring of the grid
    #[inline]
    pub fn is_border(&self, x: usize, y: usize) -> bool {
        x == 0 || y == 0 || x == self.width - 1 || y == self.height - 1
    }

    #[inline]
    fn index(&self, pos: Pos2) -> Option<usize> {
        if !self.contains(pos) {
            return None;
        }
        pos.to_index(self.width)
    }

    /// State of the cell at `pos`; anything outside the grid reads as dead
    #[inline]
    pub fn get(&self, pos: Pos2) -> bool {
        self.index(pos).is_some_and(|i| self.cells[i])
    }

    /// Sets the cell at `pos`, returning false if `pos` is outside the grid
    #[inline]
    pub fn set(&mut self, pos: Pos2, alive: bool) -> bool {
        match self.index(pos) {
            Some(i) => {
                self.cells[i] = alive;
                true
            }
            None => false,
        }
    }

    #[inline]
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }
    #[inline]
    pub(crate) fn cells_mut(&mut self) -> &mut [bool] {
        &mut self.cells
    }

    /// Kills every cell
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Gives every cell an independent, fair alive/dead coin flip
    pub fn randomize<R: rand::Rng>(&mut self, rng: &mut R) {
        self.fill(FillMode::Random, rng);
    }

    pub fn fill<R: rand::Rng>(&mut self, mode: FillMode, rng: &mut R) {
        let width = self.width;
        for (i, cell) in self.cells.iter_mut().enumerate() {
            *cell = mode.fill_cell(Pos2::from_index(i, width), rng);
        }
    }

    #[inline]
    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Positions of alive cells in row-major order
    pub fn iter_alive(&self) -> impl Iterator<Item = Pos2> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(|(i, _)| Pos2::from_index(i, self.width))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn pos(x: i32, y: i32) -> Pos2 {
        Pos2 { x, y }
    }

    #[test]
    fn rejects_empty_dimensions() {
        assert!(matches!(
            Grid::new(0, 4),
            Err(LifeError::EmptyGrid { width: 0, height: 4 })
        ));
        assert!(Grid::new(1, 1).is_ok());
    }

    #[test]
    fn index_is_x_plus_y_times_width() {
        let mut grid = Grid::new(5, 3).unwrap();
        assert!(grid.set(pos(2, 1), true));

        assert!(grid.cells()[2 + 5]);
        assert_eq!(grid.alive_count(), 1);
    }

    #[test]
    fn out_of_bounds_reads_dead_and_writes_are_dropped() {
        let mut grid = Grid::new(3, 3).unwrap();

        assert!(!grid.set(pos(3, 0), true));
        assert!(!grid.set(pos(-1, 1), true));
        assert!(!grid.get(pos(0, 3)));
        assert_eq!(grid.alive_count(), 0);
    }

    #[test]
    fn clear_kills_everything() {
        let mut grid = Grid::new(4, 4).unwrap();
        grid.fill(FillMode::All, &mut StdRng::seed_from_u64(0));
        assert_eq!(grid.alive_count(), 16);

        grid.clear();
        assert_eq!(grid.alive_count(), 0);
    }

    #[test]
    fn alternating_fill_uses_parity() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.fill(FillMode::Alternating, &mut StdRng::seed_from_u64(0));

        let expected = vec![pos(0, 0), pos(2, 0), pos(1, 1), pos(0, 2), pos(2, 2)];
        assert_eq!(grid.iter_alive().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn randomize_is_roughly_half_alive() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut grid = Grid::new(100, 100).unwrap();

        let mut alive = 0;
        for _ in 0..10 {
            grid.randomize(&mut rng);
            alive += grid.alive_count();
        }

        let ratio = alive as f64 / (10 * grid.len()) as f64;
        assert!((0.48..0.52).contains(&ratio), "alive ratio {ratio}");
    }

    #[test]
    fn border_ring_detection() {
        let grid = Grid::new(4, 3).unwrap();

        assert!(grid.is_border(0, 1));
        assert!(grid.is_border(3, 1));
        assert!(grid.is_border(1, 2));
        assert!(!grid.is_border(1, 1));
        assert!(!grid.is_border(2, 1));
    }

    #[test]
    fn fill_mode_parses() {
        assert_eq!(FillMode::new("alternating"), Some(FillMode::Alternating));
        assert_eq!(FillMode::new("nope"), None);
    }
}
