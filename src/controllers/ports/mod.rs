//! Interfaces between the visualizers and whatever draws their output.

pub mod file_presenter;
pub mod presenter;
