use std::{
    cmp::Ordering,
    ops::{Add, Div, Mul, Sub},
};

/// An integer position, either in surface pixels or in grid cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pos2 {
    pub x: i32,
    pub y: i32,
}
impl Pos2 {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0, y: 0 }
    }

    /// Component-wise clamp into the inclusive box `lo..=hi`
    #[inline]
    pub fn clamp(self, lo: Pos2, hi: Pos2) -> Self {
        Self {
            x: self.x.clamp(lo.x, hi.x),
            y: self.y.clamp(lo.y, hi.y),
        }
    }

    /// Linear index of this position in a row-major buffer `width` cells wide
    ///
    /// Returns [`None`] for negative coordinates or an `x` past the row.
    #[inline]
    pub fn to_index(self, width: usize) -> Option<usize> {
        let x = usize::try_from(self.x).ok()?;
        let y = usize::try_from(self.y).ok()?;
        (x < width).then_some(x + y * width)
    }
    #[inline]
    pub fn from_index(index: usize, width: usize) -> Self {
        Self {
            x: (index % width) as i32,
            y: (index / width) as i32,
        }
    }
}
impl PartialOrd for Pos2 {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Pos2 {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        // row-major, same order as the grid buffer
        Ord::cmp(&self.y, &other.y).then(Ord::cmp(&self.x, &other.x))
    }
}
impl Add for Pos2 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}
impl Sub for Pos2 {
    type Output = Pos2;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}
impl Mul<i32> for Pos2 {
    type Output = Pos2;

    #[inline]
    fn mul(self, rhs: i32) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}
impl Div<i32> for Pos2 {
    type Output = Pos2;

    /// Floor division, so negative pixels land in the cell to the left/above
    #[inline]
    fn div(self, rhs: i32) -> Self::Output {
        Self {
            x: self.x.div_euclid(rhs),
            y: self.y.div_euclid(rhs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trips_through_row_major_layout() {
        let width = 7;
        for i in [0, 6, 7, 20, 48] {
            let pos = Pos2::from_index(i, width);
            assert_eq!(pos.to_index(width), Some(i));
        }
        assert_eq!(Pos2::new(3, 2).to_index(width), Some(3 + 2 * 7));
    }

    #[test]
    fn to_index_rejects_out_of_row_positions() {
        assert_eq!(Pos2::new(-1, 0).to_index(4), None);
        assert_eq!(Pos2::new(4, 0).to_index(4), None);
        assert_eq!(Pos2::new(0, -3).to_index(4), None);
    }

    #[test]
    fn division_floors() {
        assert_eq!(Pos2::new(15, 16) / 8, Pos2::new(1, 2));
        assert_eq!(Pos2::new(-1, 7) / 8, Pos2::new(-1, 0));
    }

    #[test]
    fn ordering_is_row_major() {
        let mut cells = vec![Pos2::new(2, 1), Pos2::new(5, 0), Pos2::new(0, 1)];
        cells.sort();
        assert_eq!(cells, vec![Pos2::new(5, 0), Pos2::new(0, 1), Pos2::new(2, 1)]);
    }
}
