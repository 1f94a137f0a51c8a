use std::sync::OnceLock;

/// The number of permutations for a 3x3 neighbourhood of cells
const PERMUTATIONS: usize = 1 << 9;
type GameOfLifeIndex = [bool; PERMUTATIONS];

/// Bit of the neighbourhood holding the cell being updated
pub(super) const CENTER: usize = 0b000_010_000;

/// Bit for the neighbourhood cell at offset `(dx, dy)`, each in `-1..=1`
///
/// Rows are packed top to bottom, three bits per row, left to right within a row.
#[inline]
pub(super) const fn neighbour_bit(dx: i32, dy: i32) -> usize {
    1 << ((dy + 1) * 3 + (dx + 1))
}

/// Returns a Singleton lookup table for the Game of Life ruleset
///
/// Equivalent to calling [`generate_gol_index`] once and storing the result
pub(super) fn get_gol_index() -> &'static GameOfLifeIndex {
    static CELL: OnceLock<GameOfLifeIndex> = OnceLock::new();
    CELL.get_or_init(generate_gol_index)
}

/// Creates a lookup table for the Game of Life ruleset
///
/// The table is indexed by a 9-bit number representing a cell and its neighbours.
/// The center cell is the middle-most bit, `1 << 4`.
///
/// Returns whether the center cell should be alive or dead in its arrangement
pub(super) fn generate_gol_index() -> GameOfLifeIndex {
    let mut indices = [false; PERMUTATIONS];
    for (i, next) in indices.iter_mut().enumerate() {
        *next = next_state(i & CENTER != 0, neighbour_count(i));
    }
    indices
}

/// Number of alive neighbours in a packed neighbourhood, ignoring the center
#[inline]
pub(super) fn neighbour_count(hood: usize) -> u32 {
    (hood & !CENTER).count_ones()
}

/// B3/S23: alive survives on 2 or 3 neighbours, dead is born on exactly 3
#[inline]
pub(super) fn next_state(alive: bool, neighbours: u32) -> bool {
    matches!((alive, neighbours), (true, 2) | (_, 3))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_value(alive: bool, neighbours: usize) -> usize {
        const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
            (-1, -1),
            (0, -1),
            (1, -1),
            (-1, 0),
            (1, 0),
            (-1, 1),
            (0, 1),
            (1, 1),
        ];

        let mut value = if alive { CENTER } else { 0 };
        for &(dx, dy) in NEIGHBOR_OFFSETS.iter().take(neighbours) {
            value |= neighbour_bit(dx, dy);
        }
        value
    }

    #[test]
    fn center_bit_matches_zero_offset() {
        assert_eq!(neighbour_bit(0, 0), CENTER);
        assert_eq!(neighbour_bit(-1, -1), 1);
        assert_eq!(neighbour_bit(1, 1), 1 << 8);
    }

    #[test]
    fn rules_match_conway_life() {
        let index = generate_gol_index();

        assert!(index[grid_value(true, 2)]);
        assert!(index[grid_value(true, 3)]);
        assert!(index[grid_value(false, 3)]);

        assert!(!index[grid_value(true, 0)]);
        assert!(!index[grid_value(true, 1)]);
        assert!(!index[grid_value(true, 4)]);
        assert!(!index[grid_value(true, 8)]);
        assert!(!index[grid_value(false, 2)]);
        assert!(!index[grid_value(false, 4)]);
    }

    #[test]
    fn count_ignores_center() {
        assert_eq!(neighbour_count(grid_value(true, 0)), 0);
        assert_eq!(neighbour_count(grid_value(true, 5)), 5);
        assert_eq!(neighbour_count(PERMUTATIONS - 1), 8);
    }
}
