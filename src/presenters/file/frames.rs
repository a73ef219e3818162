use crate::controllers::events::step_event::StepEvent;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::controllers::ports::presenter::VisualizerPresenterPort;
use crate::core::actions::cancellation::NeverCancel;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::GeneratePixelBufferError;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
use crate::core::projection::palette::{BarPalette, GridPalette};
use crate::core::projection::rasterize::{rasterize_grid, rasterize_sequence};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum FramePresenterError {
    #[error("cannot prepare frame directory {path}")]
    Directory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    PixelRect(#[from] PixelRectError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameOptions {
    pub width: u32,
    pub height: u32,
    /// Write one frame out of every `every_nth` snapshots.
    pub every_nth: u64,
    pub grid_palette: GridPalette,
    pub bar_palette: BarPalette,
}

impl Default for FrameOptions {
    fn default() -> Self {
        Self {
            width: 800,
            height: 400,
            every_nth: 1,
            grid_palette: GridPalette::default(),
            bar_palette: BarPalette::default(),
        }
    }
}

#[derive(Default)]
struct FrameState {
    seen: u64,
    written: u64,
    pending: Option<StepEvent>,
}

/// Rasterises snapshots into numbered image files.
///
/// The last snapshot of a run is always written, even when it falls between
/// two sampled frames.
pub struct PpmFramePresenter<P: FilePresenterPort> {
    directory: PathBuf,
    options: FrameOptions,
    pixel_rect: PixelRect,
    file_presenter: P,
    state: Mutex<FrameState>,
}

impl<P: FilePresenterPort> PpmFramePresenter<P> {
    pub fn new(
        directory: impl Into<PathBuf>,
        options: FrameOptions,
        file_presenter: P,
    ) -> Result<Self, FramePresenterError> {
        let directory = directory.into();
        let pixel_rect = PixelRect::from_size(options.width, options.height)?;
        std::fs::create_dir_all(&directory).map_err(|source| FramePresenterError::Directory {
            path: directory.clone(),
            source,
        })?;

        Ok(Self {
            directory,
            options: FrameOptions {
                every_nth: options.every_nth.max(1),
                ..options
            },
            pixel_rect,
            file_presenter,
            state: Mutex::new(FrameState::default()),
        })
    }

    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    #[must_use]
    pub fn frames_written(&self) -> u64 {
        self.lock().written
    }

    fn lock(&self) -> MutexGuard<'_, FrameState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn render(&self, event: &StepEvent) -> Option<Result<PixelBuffer, GeneratePixelBufferError>> {
        match event {
            StepEvent::Sequence(values) => Some(rasterize_sequence(
                values,
                &self.options.bar_palette,
                self.pixel_rect,
                &NeverCancel,
            )),
            StepEvent::Grid(snapshot) => Some(rasterize_grid(
                snapshot,
                &self.options.grid_palette,
                self.pixel_rect,
                &NeverCancel,
            )),
            _ => None,
        }
    }

    fn write_frame(&self, state: &mut FrameState, event: &StepEvent) {
        let buffer = match self.render(event) {
            Some(Ok(buffer)) => buffer,
            Some(Err(err)) => {
                warn!(error = %err, "frame rasterisation failed");
                return;
            }
            None => return,
        };

        let path = self
            .directory
            .join(format!("frame_{:05}.ppm", state.written));
        match self.file_presenter.present(&buffer, &path) {
            Ok(()) => {
                state.written += 1;
                debug!(path = %path.display(), "frame written");
            }
            Err(err) => warn!(error = %err, path = %path.display(), "frame write failed"),
        }
    }
}

impl<P: FilePresenterPort> VisualizerPresenterPort for PpmFramePresenter<P> {
    fn present(&self, event: StepEvent) {
        let mut state = self.lock();

        if event.is_frame() {
            let due = state.seen % self.options.every_nth == 0;
            state.seen += 1;
            if due {
                state.pending = None;
                self.write_frame(&mut state, &event);
            } else {
                state.pending = Some(event);
            }
        } else if matches!(event, StepEvent::Finished(_)) {
            if let Some(pending) = state.pending.take() {
                self.write_frame(&mut state, &pending);
            }
        }
    }
}
