use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SplitpoError {
    #[error("{} does not exist", .0.display())]
    FileNotFound(PathBuf),

    #[error("{} is not valid UTF-8: {}", .path.display(), .source)]
    Decode {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Argument error: {0}")]
    Argument(String),
}

pub type Result<T> = std::result::Result<T, SplitpoError>;
