pub mod demo;
pub mod forwards;

pub use forwards::{smooth_step, Dual, DualNumber};
