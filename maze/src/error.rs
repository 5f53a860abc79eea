//! Error types for the maze crate

use thiserror::Error;

/// Returned when a layout can't be turned into a maze
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LayoutError {
    #[error("layout is empty")]
    Empty,

    #[error("row {row} is {got} cells wide, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("unknown character '{character}' at row {row}, column {column}")]
    UnknownCharacter {
        character: char,
        row: usize,
        column: usize,
    },

    #[error("layout needs exactly one protagonist ('P'), found {0}")]
    ProtagonistCount(usize),

    #[error("no built-in layout named '{0}'")]
    UnknownLayout(String),
}

/// Returned when a named setting doesn't match anything we know about
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnknownName {
    #[error("unknown evaluation function '{0}' (expected score or better)")]
    Evaluation(String),

    #[error("unknown ghost policy '{0}' (expected random or directional)")]
    GhostPolicy(String),
}
