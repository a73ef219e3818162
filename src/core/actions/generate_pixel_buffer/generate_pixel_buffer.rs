use crate::core::actions::cancellation::{CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled};
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferData, PixelBufferError};
use crate::core::data::pixel_rect::PixelRect;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneratePixelBufferError {
    /// Expected control flow, not something to show the user.
    #[error(transparent)]
    Cancelled(#[from] Cancelled),
    #[error("pixel buffer error: {0}")]
    PixelBuffer(#[from] PixelBufferError),
}

/// Streams mapped RGB bytes into a buffer sized for `pixel_rect`.
///
/// Checks `cancel` every [`CANCEL_CHECK_INTERVAL_PIXELS`] values.
pub fn generate_pixel_buffer<T, CMap, C>(
    input: Vec<T>,
    mapper: &CMap,
    pixel_rect: PixelRect,
    cancel: &C,
) -> Result<PixelBuffer, GeneratePixelBufferError>
where
    CMap: ColourMap<T>,
    C: CancelToken,
{
    let buffer_size = usize::try_from(pixel_rect.size() * 3).unwrap_or(0);
    let mut buffer: PixelBufferData = Vec::with_capacity(buffer_size);

    for (i, value) in input.into_iter().enumerate() {
        if i % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
            return Err(GeneratePixelBufferError::Cancelled(Cancelled));
        }

        let Colour { r, g, b } = mapper.map(value);
        buffer.extend_from_slice(&[r, g, b]);
    }

    Ok(PixelBuffer::from_data(pixel_rect, buffer)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::cancellation::NeverCancel;
    use crate::core::data::point::Point;
    use std::sync::atomic::{AtomicBool, Ordering};

    struct GreyScale;

    impl ColourMap<u8> for GreyScale {
        fn map(&self, value: u8) -> Colour {
            Colour::rgb(value, value, value)
        }

        fn display_name(&self) -> &str {
            "Grey"
        }
    }

    #[test]
    fn test_generates_pixel_buffer_correctly() {
        let input: Vec<u8> = vec![1, 2, 3, 4, 5, 6];
        let pixel_rect = PixelRect::new(Point { x: 0, y: 0 }, Point { x: 2, y: 1 }).unwrap();

        let results = generate_pixel_buffer(input, &GreyScale, pixel_rect, &NeverCancel).unwrap();

        assert_eq!(
            results.buffer(),
            &vec![1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4, 5, 5, 5, 6, 6, 6]
        );
        assert_eq!(results.pixel_rect(), pixel_rect);
    }

    #[test]
    fn test_pixel_rect_input_size_mismatch_returns_err() {
        let input: Vec<u8> = vec![1, 2, 3, 4, 5, 6];
        let pixel_rect = PixelRect::new(Point { x: 0, y: 0 }, Point { x: 1, y: 1 }).unwrap();

        let results = generate_pixel_buffer(input, &GreyScale, pixel_rect, &NeverCancel);

        assert_eq!(
            results,
            Err(GeneratePixelBufferError::PixelBuffer(
                PixelBufferError::BoundsMismatch {
                    pixel_rect_size: 12,
                    buffer_size: 18
                }
            ))
        );
    }

    #[test]
    fn test_returns_cancelled_when_token_is_cancelled() {
        let input: Vec<u8> = vec![1, 2, 3, 4, 5, 6];
        let pixel_rect = PixelRect::new(Point { x: 0, y: 0 }, Point { x: 2, y: 1 }).unwrap();
        let cancelled = AtomicBool::new(true);
        let cancel_token = || cancelled.load(Ordering::Relaxed);

        let result = generate_pixel_buffer(input, &GreyScale, pixel_rect, &cancel_token);

        assert_eq!(result, Err(GeneratePixelBufferError::Cancelled(Cancelled)));
        assert_eq!(
            GeneratePixelBufferError::Cancelled(Cancelled).to_string(),
            "execution cancelled"
        );
    }
}
