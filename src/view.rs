use crate::{LifeError, Pos2, Simulation};

/// An RGBA colour, alpha 255 being opaque
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}
impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

pub const CELL_GRAY: Rgba = Rgba::new(175, 175, 175, 255);

/// How a drawn cell is shaded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shade {
    Alive,
    /// The cell under the pointer while paused, currently alive
    HoverAlive,
    /// The cell under the pointer while paused, currently dead
    HoverDead,
}
impl Shade {
    pub fn color(self) -> Rgba {
        let alpha = match self {
            Self::Alive => 255,
            Self::HoverAlive => 200,
            Self::HoverDead => 100,
        };
        Rgba { a: alpha, ..CELL_GRAY }
    }
}

/// A filled square to draw, in surface pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Square {
    pub cell: Pos2,
    pub origin: Pos2,
    pub side: u32,
    pub shade: Shade,
}

/// Pixel dimensions of the drawing surface and the side of one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    width: u32,
    height: u32,
    scale: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32, scale: u32) -> Result<Self, LifeError> {
        if scale == 0 {
            return Err(LifeError::ZeroScale);
        }
        let viewport = Self {
            width,
            height,
            scale,
        };
        let (n_x, n_y) = viewport.grid_size();
        if n_x == 0 || n_y == 0 {
            return Err(LifeError::EmptyGrid {
                width: n_x,
                height: n_y,
            });
        }
        Ok(viewport)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }
    #[inline]
    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Grid dimensions `(width / scale, height / scale)`
    #[inline]
    pub fn grid_size(&self) -> (usize, usize) {
        (
            (self.width / self.scale) as usize,
            (self.height / self.scale) as usize,
        )
    }

    /// Clamps a pointer position to the surface bounds
    pub fn clamp(&self, px: Pos2) -> Pos2 {
        let max = Pos2::new(self.width as i32 - 1, self.height as i32 - 1);
        px.clamp(Pos2::zero(), max)
    }

    /// The grid cell under pixel `px`
    ///
    /// Floor division by the scale. Pixels on a partial cell at the right or
    /// bottom edge map to the last whole cell.
    pub fn cell_at(&self, px: Pos2) -> Pos2 {
        let (n_x, n_y) = self.grid_size();
        let last = Pos2::new(n_x as i32 - 1, n_y as i32 - 1);
        (self.clamp(px) / self.scale as i32).clamp(Pos2::zero(), last)
    }

    /// Top-left pixel of `cell`
    #[inline]
    pub fn cell_origin(&self, cell: Pos2) -> Pos2 {
        cell * self.scale as i32
    }

    fn square(&self, cell: Pos2, shade: Shade) -> Square {
        Square {
            cell,
            origin: self.cell_origin(cell),
            side: self.scale,
            shade,
        }
    }
}

/// Everything a frontend needs to draw one frame
#[derive(Debug, Default)]
pub struct Frame {
    squares: Vec<Square>,
    status: String,
}

impl Frame {
    /// Rebuilds the draw list from the simulation, reusing the allocation
    pub fn capture(&mut self, sim: &Simulation, viewport: &Viewport) {
        self.squares.clear();

        let grid = sim.grid();
        let hovered = sim.hovered();
        for cell in grid.iter_alive() {
            if Some(cell) != hovered {
                self.squares.push(viewport.square(cell, Shade::Alive));
            }
        }
        if let Some(cell) = hovered {
            let shade = if grid.get(cell) {
                Shade::HoverAlive
            } else {
                Shade::HoverDead
            };
            self.squares.push(viewport.square(cell, shade));
        }
    }

    #[inline]
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    #[inline]
    pub fn status(&self) -> &str {
        &self.status
    }
    pub fn set_status(&mut self, status: String) {
        self.status = status;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Input, PauseMode, SimConfig};

    fn pos(x: i32, y: i32) -> Pos2 {
        Pos2 { x, y }
    }

    #[test]
    fn grid_size_divides_by_scale() {
        let viewport = Viewport::new(800, 600, 8).unwrap();
        assert_eq!(viewport.grid_size(), (100, 75));
    }

    #[test]
    fn rejects_degenerate_viewports() {
        assert!(matches!(Viewport::new(800, 800, 0), Err(LifeError::ZeroScale)));
        assert!(matches!(
            Viewport::new(4, 800, 8),
            Err(LifeError::EmptyGrid { width: 0, .. })
        ));
    }

    #[test]
    fn pixel_maps_by_floor_division() {
        let viewport = Viewport::new(800, 800, 8).unwrap();
        for (px, py) in [(0, 0), (7, 7), (8, 15), (399, 401), (799, 799)] {
            assert_eq!(viewport.cell_at(pos(px, py)), pos(px / 8, py / 8));
        }
    }

    #[test]
    fn pointer_outside_surface_is_clamped() {
        let viewport = Viewport::new(800, 800, 8).unwrap();
        assert_eq!(viewport.cell_at(pos(-20, 900)), pos(0, 99));
    }

    #[test]
    fn partial_edge_cells_map_to_last_cell() {
        let viewport = Viewport::new(805, 800, 8).unwrap();
        assert_eq!(viewport.cell_at(pos(804, 0)), pos(99, 0));
    }

    #[test]
    fn shades_follow_alive_state() {
        assert_eq!(Shade::Alive.color(), CELL_GRAY);
        assert_eq!(Shade::HoverAlive.color().a, 200);
        assert_eq!(Shade::HoverDead.color().a, 100);
    }

    #[test]
    fn capture_draws_alive_cells_and_hover_only_when_paused() {
        let viewport = Viewport::new(40, 40, 8).unwrap();
        let config = SimConfig {
            pause_mode: PauseMode::Toggle,
            ..SimConfig::default()
        };
        let mut sim = Simulation::new(&viewport, config).unwrap();
        sim.grid_mut().set(pos(1, 1), true);
        sim.handle(Input::PointerMoved(pos(17, 9)));

        let mut frame = Frame::default();
        frame.capture(&sim, &viewport);
        assert_eq!(
            frame.squares(),
            &[Square {
                cell: pos(1, 1),
                origin: pos(8, 8),
                side: 8,
                shade: Shade::Alive
            }]
        );

        sim.handle(Input::PauseDown);
        frame.capture(&sim, &viewport);
        assert_eq!(frame.squares().len(), 2);
        assert_eq!(frame.squares()[1].cell, pos(2, 1));
        assert_eq!(frame.squares()[1].shade, Shade::HoverDead);

        sim.handle(Input::PointerMoved(pos(8, 8)));
        frame.capture(&sim, &viewport);
        assert_eq!(frame.squares().len(), 1);
        assert_eq!(frame.squares()[0].shade, Shade::HoverAlive);
    }
}
