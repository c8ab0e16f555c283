//! Core of a classic Pong: a title screen, player-vs-player and
//! player-vs-computer modes, fixed-tick simulation and a drawing abstraction.
//!
//! Everything here is deterministic and platform-free; hosts feed keys and
//! elapsed time in and hand a [`Surface`] to [`draw_frame`].

pub mod components;
pub mod config;
pub mod error;
pub mod game;
pub mod params;
pub mod playfield;
pub mod render;
pub mod resources;
pub mod state;
pub mod systems;
pub mod ticker;

pub use components::*;
pub use config::*;
pub use error::*;
pub use game::*;
pub use params::*;
pub use playfield::*;
pub use render::*;
pub use resources::*;
pub use state::*;
pub use systems::*;
pub use ticker::*;
