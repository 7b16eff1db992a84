//! Game core: configuration, geometry, the drawing seam and the driver.

pub mod canvas;
pub mod config;
pub mod constants;
pub mod elements;
pub mod error;
pub mod game_loop;
pub mod geometry;
pub mod session;

pub use canvas::{Align, Canvas, Sprite, TextStyle};
pub use config::GameConfig;
pub use error::{GameError, GameResult};
pub use game_loop::{FrameClock, Game};
pub use geometry::Bounds;
pub use session::{Session, Sound};
