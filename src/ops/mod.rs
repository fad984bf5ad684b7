pub mod join;
pub mod split;

pub use join::{join, JoinOptions};
pub use split::{split, SplitOptions};
