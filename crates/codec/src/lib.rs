#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]

mod dot;
mod eg_json;
mod pgsolver;

pub use dot::*;
pub use eg_json::*;
pub use pgsolver::*;
