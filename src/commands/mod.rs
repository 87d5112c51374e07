//! Command implementations for the trellis CLI

pub mod demo;
pub mod dispatch;
pub mod helpers;
pub mod matrix;
pub mod route;
