//! A small arcade shooter: the player moves along the bottom of a fixed
//! play area, fires upward, and must destroy or dodge enemies that descend
//! from above.
//!
//! All game rules live in plain data types driven by a fixed-step
//! [`game::Game`] controller. Drawing goes through the [`surface::Surface`]
//! trait so the same frame can be rendered to a terminal or recorded in tests.

pub mod collision;
pub mod config;
pub mod display;
pub mod entities;
pub mod error;
pub mod game;
pub mod input;
pub mod logging;
pub mod spawner;
pub mod surface;
