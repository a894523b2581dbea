//! Errors that stop a game from starting

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal conditions; rejected submissions are not errors
#[derive(Debug, Error)]
pub enum GameError {
    #[error("root word must not be empty")]
    EmptyRootWord,

    #[error("could not read word list '{}'", path.display())]
    WordList {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T, E = GameError> = std::result::Result<T, E>;
