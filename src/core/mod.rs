pub mod actions;
pub mod algorithms;
pub mod data;
pub mod engine;
pub mod projection;
