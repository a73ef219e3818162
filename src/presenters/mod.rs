pub mod fan_out;
pub mod file;
pub mod log;
pub mod recording;
