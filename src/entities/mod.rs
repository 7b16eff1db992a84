//! Moving things in the game world.

pub mod bird;
pub mod pipe;

pub use bird::Bird;
pub use pipe::{pipe_pair, random_offset, Pipe, PipePosition};
