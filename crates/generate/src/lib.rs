#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]

mod random_energy_game;

pub use random_energy_game::*;
