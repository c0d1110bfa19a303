pub mod fstree;
pub mod hints;

pub use fstree::{FsNode, FsTree};
pub use hints::{extract_hints, Hint};
