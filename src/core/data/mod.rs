pub mod colour;
pub mod path_grid;
pub mod pixel_buffer;
pub mod pixel_rect;
pub mod point;
pub mod pseudocode;
pub mod sortable_sequence;
