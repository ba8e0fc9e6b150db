use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AlignError {
    #[error("invalid input for sequence {which}: {msg}")]
    InvalidInput { which: char, msg: &'static str },

    #[error("sequence file error at line {line}: {msg}")]
    Parse { msg: &'static str, line: usize },

    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("no score for symbol pair ('{}', '{}')", char::from(*.a), char::from(*.b))]
    UnknownSymbol { a: u8, b: u8 },

    #[error("score table format error at line {line}: {msg}")]
    ScoreTableFormat { msg: String, line: usize },

    #[error(
        "score table is not symmetric at ('{}', '{}')",
        char::from(*.a),
        char::from(*.b)
    )]
    AsymmetricScoreTable { a: u8, b: u8 },

    #[error("invalid aligner configuration: {msg}")]
    InvalidConfig { msg: &'static str },

    #[error("grid of {cells} cells exceeds the limit of {limit}")]
    GridTooLarge { cells: u128, limit: usize },

    #[cfg(feature = "parallel")]
    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type AlignResult<T> = Result<T, AlignError>;
