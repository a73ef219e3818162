use crate::core::actions::cancellation::CancelToken;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer,
};
use crate::core::actions::sample_frame::ports::frame_sampler::FrameSampler;
use crate::core::actions::sample_frame::sample_frame_rayon::sample_frame_parallel;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::projection::bars::bar_height_percent;
use crate::core::projection::cells::{CellClass, GridSnapshot};
use crate::core::projection::palette::{BarPalette, BarPixel, GridPalette};

/// Offset of `pixel` from the rect's top-left corner.
fn relative(pixel: Point, pixel_rect: PixelRect) -> (u64, u64) {
    let top_left = pixel_rect.top_left();
    let x = u64::try_from(pixel.x - top_left.x).unwrap_or(0);
    let y = u64::try_from(pixel.y - top_left.y).unwrap_or(0);
    (x, y)
}

/// Stretches grid cells over the whole frame.
pub struct GridSampler<'a> {
    snapshot: &'a GridSnapshot,
    pixel_rect: PixelRect,
}

impl<'a> GridSampler<'a> {
    #[must_use]
    pub fn new(snapshot: &'a GridSnapshot, pixel_rect: PixelRect) -> Self {
        Self {
            snapshot,
            pixel_rect,
        }
    }
}

impl FrameSampler for GridSampler<'_> {
    type Sample = CellClass;

    fn sample(&self, pixel: Point) -> CellClass {
        let (x, y) = relative(pixel, self.pixel_rect);
        let col = x * self.snapshot.cols as u64 / u64::from(self.pixel_rect.width());
        let row = y * self.snapshot.rows as u64 / u64::from(self.pixel_rect.height());

        self.snapshot
            .class_at(row as usize, col as usize)
            .unwrap_or(CellClass::Empty)
    }
}

/// Draws one bottom-aligned bar per value, bars sharing the width evenly.
pub struct SequenceSampler<'a> {
    values: &'a [u32],
    pixel_rect: PixelRect,
}

impl<'a> SequenceSampler<'a> {
    #[must_use]
    pub fn new(values: &'a [u32], pixel_rect: PixelRect) -> Self {
        Self { values, pixel_rect }
    }
}

impl FrameSampler for SequenceSampler<'_> {
    type Sample = BarPixel;

    fn sample(&self, pixel: Point) -> BarPixel {
        if self.values.is_empty() {
            return BarPixel::Background;
        }

        let (x, y) = relative(pixel, self.pixel_rect);
        let height = u64::from(self.pixel_rect.height());
        let index = x * self.values.len() as u64 / u64::from(self.pixel_rect.width());
        let Some(&value) = self.values.get(index as usize) else {
            return BarPixel::Background;
        };

        let bar_pixels = u64::from(bar_height_percent(value)) * height / 100;
        if y >= height - bar_pixels {
            BarPixel::Bar
        } else {
            BarPixel::Background
        }
    }
}

pub fn rasterize_grid<C: CancelToken>(
    snapshot: &GridSnapshot,
    palette: &GridPalette,
    pixel_rect: PixelRect,
    cancel: &C,
) -> Result<PixelBuffer, GeneratePixelBufferError> {
    let sampler = GridSampler::new(snapshot, pixel_rect);
    let samples = sample_frame_parallel(pixel_rect, &sampler, cancel)?;
    generate_pixel_buffer(samples, palette, pixel_rect, cancel)
}

pub fn rasterize_sequence<C: CancelToken>(
    values: &[u32],
    palette: &BarPalette,
    pixel_rect: PixelRect,
    cancel: &C,
) -> Result<PixelBuffer, GeneratePixelBufferError> {
    let sampler = SequenceSampler::new(values, pixel_rect);
    let samples = sample_frame_parallel(pixel_rect, &sampler, cancel)?;
    generate_pixel_buffer(samples, palette, pixel_rect, cancel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::cancellation::{Cancelled, NeverCancel};
    use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
    use crate::core::data::path_grid::{GridCoord, PathGrid};

    #[test]
    fn test_grid_cells_scale_to_frame() {
        let grid = PathGrid::new(2, 2, GridCoord::new(0, 0), GridCoord::new(1, 1)).unwrap();
        let snapshot = GridSnapshot::from_grid(&grid);
        let pixel_rect = PixelRect::from_size(4, 4).unwrap();
        let palette = GridPalette::default();

        let frame = rasterize_grid(&snapshot, &palette, pixel_rect, &NeverCancel).unwrap();

        assert_eq!(frame.pixel(Point { x: 1, y: 1 }).unwrap(), palette.start);
        assert_eq!(frame.pixel(Point { x: 3, y: 3 }).unwrap(), palette.end);
        assert_eq!(frame.pixel(Point { x: 3, y: 0 }).unwrap(), palette.empty);
    }

    #[test]
    fn test_bars_are_bottom_aligned() {
        let pixel_rect = PixelRect::from_size(2, 10).unwrap();
        let palette = BarPalette::default();

        let frame = rasterize_sequence(&[50, 100], &palette, pixel_rect, &NeverCancel).unwrap();

        assert_eq!(frame.pixel(Point { x: 0, y: 4 }).unwrap(), palette.background);
        assert_eq!(frame.pixel(Point { x: 0, y: 5 }).unwrap(), palette.bar);
        assert_eq!(frame.pixel(Point { x: 1, y: 0 }).unwrap(), palette.bar);
    }

    #[test]
    fn test_empty_sequence_renders_background() {
        let pixel_rect = PixelRect::from_size(3, 3).unwrap();
        let palette = BarPalette::default();

        let frame = rasterize_sequence(&[], &palette, pixel_rect, &NeverCancel).unwrap();

        assert!(
            frame
                .buffer()
                .chunks(3)
                .all(|px| px == [palette.background.r, palette.background.g, palette.background.b])
        );
        assert_eq!(palette.display_name(), "Bars");
    }

    #[test]
    fn test_cancelled_render_returns_cancelled() {
        let pixel_rect = PixelRect::from_size(3, 3).unwrap();
        let cancel = || true;

        let result = rasterize_sequence(&[1, 2], &BarPalette::default(), pixel_rect, &cancel);

        assert_eq!(result, Err(GeneratePixelBufferError::Cancelled(Cancelled)));
    }
}
