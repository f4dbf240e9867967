use std::path::Path;
use std::time::Instant;

use tracing::info;

use crate::controllers::cli::args::CliArgs;
use crate::core::actions::render_frame::render_frame::render_mandelbrot_frame;
use crate::core::actions::run_batch::run_batch::{BatchReport, run_batch};
use crate::core::data::batch_config::BatchConfig;
use crate::core::data::frame_format::FrameFormat;
use crate::presenters::file::image_file_store::ImageFileStore;
use crate::storage::write_frame::write_frame;

pub struct CliController {
    args: CliArgs,
}

impl CliController {
    pub fn new(args: CliArgs) -> Self {
        Self { args }
    }

    /// Renders the still image when `--output` is given, the frame batch
    /// otherwise. Any failed frame makes the whole run fail.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config = self.args.to_config();
        config.validate()?;

        match &self.args.output {
            Some(path) => self.render_still(&config, path),
            None => self.render_batch(&config).map(|_| ()),
        }
    }

    fn render_batch(
        &self,
        config: &BatchConfig,
    ) -> Result<BatchReport, Box<dyn std::error::Error>> {
        let first = config.viewport_for_frame(0)?;
        let outfile = format!("mandel##.{}", config.format.extension());

        info!(
            x = first.center().real,
            y = first.center().imag,
            xscale = first.scale_x(),
            yscale = first.scale_y(),
            max = config.max_iterations,
            frames = config.frame_count,
            concurrent_frames = config.num_concurrent_frames,
            threads = config.thread_count,
            outfile = %config.output_dir.join(outfile).display(),
            "mandel"
        );

        let store = ImageFileStore::new(&config.output_dir, config.format)?;
        info!(dir = %store.output_dir().display(), "writing frames");

        let start = Instant::now();
        let report = run_batch(config, &store)?;

        info!(
            completed = report.completed().count(),
            failed = report.failed().count(),
            peak_concurrency = report.peak_concurrency,
            elapsed = ?start.elapsed(),
            "batch finished"
        );

        Ok(report.into_result()?)
    }

    fn render_still(
        &self,
        config: &BatchConfig,
        path: &Path,
    ) -> Result<(), Box<dyn std::error::Error>> {
        // an explicit --format wins over the file extension
        let format = match self.args.format {
            Some(format) => format,
            None => FrameFormat::from_path(path)?,
        };
        let viewport = config.still_viewport()?;

        info!(
            x = config.center_x,
            y = config.center_y,
            xscale = viewport.scale_x(),
            yscale = viewport.scale_y(),
            max = config.max_iterations,
            threads = config.thread_count,
            outfile = %path.display(),
            %format,
            "mandel"
        );

        let start = Instant::now();
        let frame = render_mandelbrot_frame(&viewport, config.thread_count()?)?;
        write_frame(&frame, path, format)?;

        info!(elapsed = ?start.elapsed(), "still frame written");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn args(extra: &[&str]) -> CliArgs {
        let mut argv = vec!["mandel", "-W", "16", "-H", "12", "-m", "25"];
        argv.extend_from_slice(extra);
        CliArgs::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_batch_writes_every_frame() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().to_str().unwrap();
        let controller = CliController::new(args(&["-f", "5", "-n", "2", "-t", "3", "-d", out]));

        controller.run().unwrap();

        for i in 0..5 {
            assert!(dir.path().join(format!("mandel{i:02}.jpg")).is_file());
        }
        assert!(!dir.path().join("mandel05.jpg").exists());
    }

    #[test]
    fn test_still_writes_single_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("still.ppm");
        let controller = CliController::new(args(&["-o", path.to_str().unwrap()]));

        controller.run().unwrap();

        assert!(path.is_file());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_still_format_follows_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("still.ppm");
        let controller = CliController::new(args(&["-o", path.to_str().unwrap()]));

        controller.run().unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"P6"));
    }

    #[test]
    fn test_explicit_format_overrides_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("still.img");
        let controller = CliController::new(args(&[
            "--format",
            "ppm",
            "-o",
            path.to_str().unwrap(),
        ]));

        controller.run().unwrap();

        assert!(std::fs::read(&path).unwrap().starts_with(b"P6"));
    }

    #[test]
    fn test_still_with_unknown_extension_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("still.png");
        let controller = CliController::new(args(&["-o", path.to_str().unwrap()]));

        let err = controller.run().unwrap_err();

        assert!(err.to_string().contains("unknown image format"));
        assert!(!path.exists());
    }

    #[test]
    fn test_invalid_config_fails_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("frames");
        let controller = CliController::new(args(&["-t", "0", "-d", out.to_str().unwrap()]));

        assert!(controller.run().is_err());
        assert!(!out.exists());
    }
}
