use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Grid dimensions must be positive")]
    InvalidDimensions,
    #[error("Coordinates out of bounds")]
    OutOfBounds,
    #[error("Too many mines for the grid and safe zone")]
    TooManyMines,
}

pub type Result<T> = core::result::Result<T, GameError>;
