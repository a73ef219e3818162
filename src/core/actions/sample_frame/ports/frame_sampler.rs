use crate::core::data::point::Point;

/// Decides what a single pixel of a frame shows.
pub trait FrameSampler: Sync {
    type Sample: Send;

    fn sample(&self, pixel: Point) -> Self::Sample;
}
