pub mod list_algorithms;
pub mod run_path;
pub mod run_sort;

use crate::controllers::ports::presenter::VisualizerPresenterPort;
use crate::input::cli::args::FrameArgs;
use crate::presenters::fan_out::FanOutPresenter;
use crate::presenters::file::frames::{FrameOptions, PpmFramePresenter};
use crate::presenters::file::ppm::PpmFilePresenter;
use crate::presenters::log::TracingPresenter;
use anyhow::Context;
use std::sync::Arc;
use tracing::info;

/// Log output always, PPM frames when a directory was given.
fn build_presenter(
    frames: &FrameArgs,
    mut options: FrameOptions,
) -> anyhow::Result<Arc<dyn VisualizerPresenterPort>> {
    let mut presenter = FanOutPresenter::new().with(Arc::new(TracingPresenter::default()));

    if let Some(dir) = &frames.frames_dir {
        if let Some(every_nth) = frames.every_nth {
            options.every_nth = every_nth;
        }
        let frame_presenter = PpmFramePresenter::new(dir, options, PpmFilePresenter::new())
            .with_context(|| format!("preparing frame output in {}", dir.display()))?;
        info!(dir = %dir.display(), every_nth = options.every_nth, "writing frames");
        presenter = presenter.with(Arc::new(frame_presenter));
    }

    Ok(Arc::new(presenter))
}
