//! Global pairwise alignment of a guide against an off-target candidate

pub mod global;
pub mod result;

pub use global::global_align;
pub use result::{EditOp, GlobalAlignment};
