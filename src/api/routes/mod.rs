//! API Routes
//!
//! Route handlers organized by functionality.

pub mod game_data;
pub mod health;
pub mod predict;
