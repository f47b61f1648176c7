pub mod align;
pub mod api;
pub mod driver;
pub mod post;
pub mod sequence;
