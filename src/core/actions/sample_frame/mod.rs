pub mod ports;
pub mod sample_frame_rayon;
