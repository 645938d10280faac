//! Interactive binary fractal tree: a flat-arena layout generator plus the
//! minifb window, software rasterizer and controls around it.

pub mod config;
pub mod draw;
pub mod error;
pub mod fractal;
pub mod input;
pub mod palette;
pub mod snapshot;
pub mod types;
