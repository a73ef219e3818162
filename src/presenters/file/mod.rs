pub mod frames;
pub mod ppm;
