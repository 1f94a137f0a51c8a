mod boundary;
mod index;

pub use self::boundary::BoundaryPolicy;
use crate::Grid;
use rayon::prelude::*;

/// The grid stepper
///
/// Holds two equally sized grids: `front` is the current generation and `back`
/// receives the next one. They are swapped after every pass, so the rule always
/// reads a stable snapshot of the previous generation without reallocating.
#[derive(Debug, Clone)]
pub struct GameOfLife {
    front: Grid,
    back: Grid,
    boundary: BoundaryPolicy,
    generation: u64,
}

impl GameOfLife {
    pub fn new(grid: Grid, boundary: BoundaryPolicy) -> Self {
        let back = grid.clone();
        Self {
            front: grid,
            back,
            boundary,
            generation: 0,
        }
    }

    /// Advances one generation on the calling thread
    pub fn next_generation(&mut self) {
        let width = self.front.width();
        let (front, boundary) = (&self.front, self.boundary);
        for (y, row) in self.back.cells_mut().chunks_mut(width).enumerate() {
            next_row(front, boundary, y, row);
        }
        self.finish_generation();
    }

    /// Advances one generation, computing rows on the rayon thread pool
    ///
    /// Produces exactly the same grid as [`GameOfLife::next_generation`].
    pub fn next_generation_parallel(&mut self) {
        let width = self.front.width();
        let (front, boundary) = (&self.front, self.boundary);
        self.back
            .cells_mut()
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| next_row(front, boundary, y, row));
        self.finish_generation();
    }

    fn finish_generation(&mut self) {
        std::mem::swap(&mut self.front, &mut self.back);
        self.generation += 1;
    }

    /// The current generation
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.front
    }

    /// Mutable access to the current generation, for edits between steps
    #[inline]
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.front
    }

    /// Kills every cell and restarts the generation counter
    pub fn reset(&mut self) {
        self.front.clear();
        self.generation = 0;
    }

    /// Re-rolls every cell and restarts the generation counter
    pub fn randomize<R: rand::Rng>(&mut self, rng: &mut R) {
        self.front.randomize(rng);
        self.generation = 0;
    }

    #[inline]
    pub fn boundary(&self) -> BoundaryPolicy {
        self.boundary
    }

    /// Steps taken since creation or the last reset/randomize
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    pub fn alive_count(&self) -> usize {
        self.front.alive_count()
    }
}

/// Writes row `y` of the next generation into `row`
#[inline]
fn next_row(front: &Grid, boundary: BoundaryPolicy, y: usize, row: &mut [bool]) {
    let table = index::get_gol_index();
    let current = &front.cells()[y * front.width()..][..row.len()];
    for (x, next) in row.iter_mut().enumerate() {
        *next = match boundary.neighbourhood(front, x, y) {
            Some(hood) => table[hood],
            // unevaluated cells carry over, the back buffer may hold stale state
            None => current[x],
        };
    }
}
