#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]

mod error;
mod random_test;
mod tagged_index;
mod timing;
mod verbosity;

pub use error::*;
pub use random_test::*;
pub use tagged_index::*;
pub use timing::*;
pub use verbosity::*;
