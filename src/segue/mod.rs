//! Segue model: annotated edges and the builders that assemble them into
//! navigation graphs.

pub mod builder;
pub mod model;

pub use builder::{SegueSetExt, chain, connect, connect_both, fan_in, fan_out};
pub use model::{Segue, SegueRule};
