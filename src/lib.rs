#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod cardset;
mod common;
mod config;
mod deck;
mod feedback;
mod game;
#[cfg(feature = "std")]
mod logging;
mod render;
mod session;

pub use cardset::{CardSet, CardSetError};
pub use common::*;
pub use config::*;
pub use deck::*;
pub use feedback::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use render::*;
pub use session::*;
