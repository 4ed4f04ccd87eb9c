//! Parity games: an explicit representation, a recursive Zielonka solver
//! used only to cross-check the energy-to-parity reduction, and the
//! reduction itself.
//!

#![forbid(unsafe_code)]

mod parity_game;
mod predecessors;
mod reachability;
mod reduction;
pub mod zielonka;

pub use parity_game::*;
pub use predecessors::*;
pub use reachability::*;
pub use reduction::*;
pub use zielonka::solve_zielonka;
