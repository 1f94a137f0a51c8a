use crate::{Grid, LifeError, Pos2, RunLengthEncoded};

pub struct Pattern {
    pub name: &'static str,
    pub rle: &'static str,
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "block",
        rle: "2o$2o!",
    },
    Pattern {
        name: "blinker",
        rle: "3o!",
    },
    Pattern {
        name: "toad",
        rle: "b3o$3o!",
    },
    Pattern {
        name: "beacon",
        rle: "2o$2o$2b2o$2b2o!",
    },
    Pattern {
        name: "glider",
        rle: "bo$2bo$3o!",
    },
    Pattern {
        name: "r-pentomino",
        rle: "b2o$2o$bo!",
    },
    Pattern {
        name: "pulsar",
        rle: "2b3o3b3o2$o4bobo4bo$o4bobo4bo$o4bobo4bo$2b3o3b3o2$2b3o3b3o$o4bobo4bo$o4bobo4bo$o4bobo4bo2$2b3o3b3o!",
    },
    Pattern {
        name: "gosper-gun",
        rle: "24bo$22bobo$12b2o6b2o12b2o$11bo3bo4b2o12b2o$2o8bo5bo3b2o$2o8bo3bob2o4bobo$10bo5bo7bo$11bo3bo$12b2o!",
    },
];

pub fn lookup(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

/// Resolves a built-in pattern name or an inline run-length pattern to its cells
///
/// Decoding stops with [`LifeError::PatternTooLarge`] as soon as the pattern
/// outgrows `room`.
pub fn resolve(value: &str, room: (usize, usize)) -> Result<Vec<Pos2>, LifeError> {
    let decoder = RunLengthEncoded;
    if let Some(pattern) = lookup(value) {
        return decoder.decode(pattern.rle, room);
    }
    if RunLengthEncoded::looks_encoded(value) {
        return decoder.decode(value, room);
    }
    Err(LifeError::UnknownPattern(value.to_owned()))
}

/// Size of the grid without its outer ring
pub fn interior(grid: &Grid) -> (usize, usize) {
    (
        grid.width().saturating_sub(2),
        grid.height().saturating_sub(2),
    )
}

/// Clears the grid and stamps `cells` centred inside its interior
///
/// The outer ring is left out so the pattern also evolves under the frozen
/// boundary policy.
pub fn place_centered(grid: &mut Grid, cells: &[Pos2]) -> Result<(), LifeError> {
    let width = cells.iter().map(|p| p.x + 1).max().unwrap_or(0).max(0) as usize;
    let height = cells.iter().map(|p| p.y + 1).max().unwrap_or(0).max(0) as usize;
    let (room_x, room_y) = interior(grid);
    if width > room_x || height > room_y {
        return Err(LifeError::PatternTooLarge {
            width,
            height,
            room_x,
            room_y,
        });
    }

    let offset = Pos2 {
        x: (1 + (room_x - width) / 2) as i32,
        y: (1 + (room_y - height) / 2) as i32,
    };
    grid.clear();
    for &cell in cells {
        grid.set(cell + offset, true);
    }
    Ok(())
}
