use thiserror::Error;

#[derive(Debug, Error)]
pub enum LifeError {
    #[error("grid must be at least 1x1, got {width}x{height}")]
    EmptyGrid { width: usize, height: usize },

    #[error("cell scale must be non-zero")]
    ZeroScale,

    #[error("invalid value {value:?} for option --{option}")]
    InvalidOption { option: &'static str, value: String },

    #[error("unknown pattern {0:?}")]
    UnknownPattern(String),

    #[error("malformed run-length pattern: {0}")]
    InvalidPattern(String),

    #[error("pattern is {width}x{height} but the grid interior is only {room_x}x{room_y}")]
    PatternTooLarge {
        width: usize,
        height: usize,
        room_x: usize,
        room_y: usize,
    },

    #[error("frontend failure: {0}")]
    Frontend(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
