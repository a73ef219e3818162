use rayon::prelude::*;

use crate::core::actions::cancellation::{CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled};
use crate::core::actions::sample_frame::ports::frame_sampler::FrameSampler;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;

/// Samples every pixel of `pixel_rect`, one rayon task per row.
///
/// Each row checks `cancel` at its start and every
/// [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels. Results are row-major.
pub fn sample_frame_parallel<S, C>(
    pixel_rect: PixelRect,
    sampler: &S,
    cancel: &C,
) -> Result<Vec<S::Sample>, Cancelled>
where
    S: FrameSampler,
    C: CancelToken,
{
    let x_start = pixel_rect.top_left().x;
    let x_end = pixel_rect.bottom_right().x;
    let row_width = pixel_rect.width() as usize;

    let rows: Result<Vec<Vec<S::Sample>>, Cancelled> = (pixel_rect.top_left().y
        ..=pixel_rect.bottom_right().y)
        .into_par_iter()
        .map(|y| {
            let mut row = Vec::with_capacity(row_width);

            for (i, x) in (x_start..=x_end).enumerate() {
                if i % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
                    return Err(Cancelled);
                }
                row.push(sampler.sample(Point { x, y }));
            }

            Ok(row)
        })
        .collect();

    rows.map(|r| r.into_iter().flatten().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::cancellation::NeverCancel;
    use std::sync::atomic::{AtomicBool, Ordering};

    struct CoordinateSampler;

    impl FrameSampler for CoordinateSampler {
        type Sample = (i32, i32);

        fn sample(&self, pixel: Point) -> Self::Sample {
            (pixel.x, pixel.y)
        }
    }

    #[test]
    fn test_samples_are_row_major() {
        let pixel_rect = PixelRect::new(Point { x: 1, y: 10 }, Point { x: 3, y: 11 }).unwrap();

        let samples = sample_frame_parallel(pixel_rect, &CoordinateSampler, &NeverCancel).unwrap();

        assert_eq!(
            samples,
            vec![(1, 10), (2, 10), (3, 10), (1, 11), (2, 11), (3, 11)]
        );
    }

    #[test]
    fn test_large_frame_matches_sequential_order() {
        let pixel_rect = PixelRect::from_size(300, 200).unwrap();

        let samples = sample_frame_parallel(pixel_rect, &CoordinateSampler, &NeverCancel).unwrap();

        assert_eq!(samples.len(), 300 * 200);
        for (index, (x, y)) in samples.into_iter().enumerate() {
            assert_eq!(index, (y * 300 + x) as usize);
        }
    }

    #[test]
    fn test_cancelled_token_aborts_sampling() {
        let pixel_rect = PixelRect::from_size(16, 16).unwrap();
        let cancelled = AtomicBool::new(true);
        let cancel_token = || cancelled.load(Ordering::Relaxed);

        let result = sample_frame_parallel(pixel_rect, &CoordinateSampler, &cancel_token);

        assert_eq!(result, Err(Cancelled));
    }
}
