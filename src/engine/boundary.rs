use super::index::neighbour_bit;
use crate::Grid;

/// What happens to cells on the outer ring of the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundaryPolicy {
    /// Border cells are never evaluated and keep whatever state they hold
    #[default]
    Frozen,
    /// Border cells are evaluated; neighbours outside the grid count as dead
    Dead,
    /// Neighbours wrap around both edges of the grid
    Torus,
}

impl BoundaryPolicy {
    pub fn new<S: AsRef<str>>(s: S) -> Option<Self> {
        match s.as_ref() {
            "frozen" => Some(Self::Frozen),
            "dead" => Some(Self::Dead),
            "torus" => Some(Self::Torus),
            _ => None,
        }
    }

    /// Packs the 3x3 neighbourhood around `(x, y)` into the 9-bit lookup form
    ///
    /// Returns [`None`] when the cell is not evaluated under this policy.
    #[inline]
    pub(super) fn neighbourhood(self, grid: &Grid, x: usize, y: usize) -> Option<usize> {
        // interior cells have all 8 neighbours in range under every policy
        if !grid.is_border(x, y) {
            return Some(interior_neighbourhood(grid, x, y));
        }
        match self {
            Self::Frozen => None,
            Self::Dead => Some(gather(grid, x, y, |cx, cy| {
                let inside = cx >= 0
                    && cy >= 0
                    && (cx as usize) < grid.width()
                    && (cy as usize) < grid.height();
                inside.then_some((cx as usize, cy as usize))
            })),
            Self::Torus => Some(gather(grid, x, y, |cx, cy| {
                let w = grid.width() as i32;
                let h = grid.height() as i32;
                Some((cx.rem_euclid(w) as usize, cy.rem_euclid(h) as usize))
            })),
        }
    }
}

/// Neighbourhood of an interior cell, read through linear-index arithmetic
#[inline]
fn interior_neighbourhood(grid: &Grid, x: usize, y: usize) -> usize {
    let w = grid.width();
    let cells = grid.cells();
    let i = x + y * w;

    let mut hood = 0;
    let mut sample = |index: usize, dx: i32, dy: i32| {
        if cells[index] {
            hood |= neighbour_bit(dx, dy);
        }
    };
    sample(i - w - 1, -1, -1);
    sample(i - w, 0, -1);
    sample(i - w + 1, 1, -1);
    sample(i - 1, -1, 0);
    sample(i, 0, 0);
    sample(i + 1, 1, 0);
    sample(i + w - 1, -1, 1);
    sample(i + w, 0, 1);
    sample(i + w + 1, 1, 1);
    hood
}

/// Neighbourhood of a border cell; `resolve` maps a possibly out-of-grid
/// coordinate to the cell it reads from, or [`None`] for a dead read
fn gather<F>(grid: &Grid, x: usize, y: usize, resolve: F) -> usize
where
    F: Fn(i32, i32) -> Option<(usize, usize)>,
{
    let cells = grid.cells();
    let mut hood = 0;
    for dy in -1..=1 {
        for dx in -1..=1 {
            let Some((cx, cy)) = resolve(x as i32 + dx, y as i32 + dy) else {
                continue;
            };
            if cells[cx + cy * grid.width()] {
                hood |= neighbour_bit(dx, dy);
            }
        }
    }
    hood
}
