#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]

mod game;
mod measure;
mod predecessors;
mod solver;
mod strategy;

pub use game::*;
pub use measure::*;
pub use predecessors::*;
pub use solver::*;
pub use strategy::*;
