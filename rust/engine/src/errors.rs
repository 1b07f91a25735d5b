use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinate: ({row}, {col}), board is 3x3")]
    InvalidCoordinate { row: usize, col: usize },
    #[error("Illegal move: cell ({row}, {col}) is already occupied")]
    IllegalMove { row: usize, col: usize },
    #[error("No legal moves available: board is full")]
    NoLegalMoves,
    #[error("Game is already over")]
    GameOver,
}
