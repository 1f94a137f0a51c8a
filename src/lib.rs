//! Core library for an interactive, fixed-size Game of Life grid.

pub mod enc;
pub mod engine;
pub mod error;
pub mod grid;
pub mod patterns;
pub mod pos;
pub mod sim;
pub mod view;

pub use enc::RunLengthEncoded;
pub use engine::{BoundaryPolicy, GameOfLife};
pub use error::LifeError;
pub use grid::{FillMode, Grid};
pub use pos::Pos2;
pub use sim::{Input, PauseMode, PointerButton, SimConfig, Simulation};
pub use view::{Frame, Rgba, Shade, Square, Viewport};
