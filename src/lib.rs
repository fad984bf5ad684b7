pub mod catalog;
pub mod cli;
pub mod error;
pub mod ops;

pub use error::{Result, SplitpoError};
