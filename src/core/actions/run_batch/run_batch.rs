use std::num::NonZeroUsize;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc;
use std::time::Instant;

use rayon::ThreadPoolBuilder;
use thiserror::Error;
use tracing::{debug, error, info};

use crate::core::actions::render_frame::render_frame::{
    RenderFrameError, render_mandelbrot_frame,
};
use crate::core::actions::run_batch::ports::frame_store::{FrameStore, StoreError};
use crate::core::data::batch_config::{BatchConfig, ConfigError};
use crate::core::data::batch_job::{BatchJob, JobOutcome, JobState};
use crate::core::util::panic_message::panic_message;

#[derive(Debug, Error)]
pub enum JobError {
    #[error("render failed: {0}")]
    Render(#[from] RenderFrameError),
    #[error("store failed: {0}")]
    Store(#[from] StoreError),
    #[error("frame job panicked: {0}")]
    Panicked(String),
}

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("could not start frame workers: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),
    #[error("cannot run {requested} frames at once, at most {max} frame workers are supported")]
    TooManyFrameWorkers { requested: usize, max: usize },
    #[error("{failed} of {total} frames failed")]
    JobsFailed { failed: usize, total: usize },
}

pub type BatchJobOutcome = JobOutcome<JobError>;

#[derive(Debug)]
pub struct BatchReport {
    /// One entry per job, ordered by frame index.
    pub outcomes: Vec<BatchJobOutcome>,
    /// Most frame jobs observed rendering at the same time.
    pub peak_concurrency: usize,
}

impl BatchReport {
    pub fn completed(&self) -> impl Iterator<Item = &BatchJobOutcome> {
        self.outcomes.iter().filter(|outcome| outcome.result.is_ok())
    }

    pub fn failed(&self) -> impl Iterator<Item = &BatchJobOutcome> {
        self.outcomes.iter().filter(|outcome| outcome.result.is_err())
    }

    /// Turns a report with any failed job into [`BatchError::JobsFailed`].
    pub fn into_result(self) -> Result<Self, BatchError> {
        let failed = self.failed().count();

        if failed > 0 {
            return Err(BatchError::JobsFailed {
                failed,
                total: self.outcomes.len(),
            });
        }

        Ok(self)
    }
}

#[derive(Debug, Default)]
struct SlotCounter {
    active: AtomicUsize,
    peak: AtomicUsize,
}

impl SlotCounter {
    fn acquire(&self) -> usize {
        let active = self.active.fetch_add(1, Ordering::AcqRel) + 1;
        self.peak.fetch_max(active, Ordering::AcqRel);
        active
    }

    fn release(&self) -> usize {
        self.active.fetch_sub(1, Ordering::AcqRel) - 1
    }

    fn peak(&self) -> usize {
        self.peak.load(Ordering::Acquire)
    }
}

/// Number of frame workers the batch needs: never more than there are frames.
/// Asking for more workers than rayon can run is an error rather than a
/// silently smaller pool.
fn frame_worker_count(config: &BatchConfig) -> Result<usize, BatchError> {
    let workers = config.concurrent_frames()?.get().min(config.frame_count);
    let max = rayon::max_num_threads();

    if workers > max {
        return Err(BatchError::TooManyFrameWorkers {
            requested: workers,
            max,
        });
    }

    Ok(workers)
}

/// Renders every frame of the batch on a pool of `num_concurrent_frames`
/// workers and hands each finished frame to `store`. Blocks until all jobs
/// have finished; a failed job is recorded in the report and does not stop
/// the others.
pub fn run_batch<S: FrameStore>(
    config: &BatchConfig,
    store: &S,
) -> Result<BatchReport, BatchError> {
    config.validate()?;
    let thread_count = config.thread_count()?;
    let workers = frame_worker_count(config)?;
    let jobs = config.jobs()?;

    debug!(workers, frames = jobs.len(), "starting frame workers");

    let pool = ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|index| format!("frame-worker-{index}"))
        .build()?;

    let slots = SlotCounter::default();
    let (sender, receiver) = mpsc::channel();

    pool.scope(|scope| {
        for job in jobs {
            info!(frame = job.frame_index(), state = %JobState::Queued, "frame queued");

            let sender = sender.clone();
            let slots = &slots;

            scope.spawn(move |_| {
                let outcome = run_job(&job, thread_count, store, slots);
                // receiver lives until after the scope, so this cannot fail
                let _ = sender.send(outcome);
            });
        }
    });
    drop(sender);

    let mut outcomes: Vec<BatchJobOutcome> = receiver.into_iter().collect();
    outcomes.sort_by_key(|outcome| outcome.frame_index);

    Ok(BatchReport {
        outcomes,
        peak_concurrency: slots.peak(),
    })
}

fn run_job<S: FrameStore>(
    job: &BatchJob,
    thread_count: NonZeroUsize,
    store: &S,
    slots: &SlotCounter,
) -> BatchJobOutcome {
    let frame = job.frame_index();
    let active = slots.acquire();
    info!(frame, active, "slot acquired");

    let file_name = job.file_name(store.extension());
    let start = Instant::now();

    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        render_and_store(job, thread_count, store, &file_name)
    }))
    .unwrap_or_else(|payload| Err(JobError::Panicked(panic_message(payload.as_ref()))));

    let elapsed = start.elapsed();

    match &result {
        Ok(()) => info!(
            frame,
            file = %file_name,
            ?elapsed,
            state = %JobState::Completed,
            "frame stored"
        ),
        Err(err) => error!(
            frame,
            file = %file_name,
            error = %err,
            state = %JobState::Failed,
            "frame failed"
        ),
    }

    let active = slots.release();
    info!(frame, active, "slot released");

    JobOutcome {
        frame_index: frame,
        file_name,
        elapsed,
        result,
    }
}

fn render_and_store<S: FrameStore>(
    job: &BatchJob,
    thread_count: NonZeroUsize,
    store: &S,
    file_name: &str,
) -> Result<(), JobError> {
    debug!(
        frame = job.frame_index(),
        state = %JobState::Rendering,
        center_x = job.viewport().center().real,
        scale_x = job.viewport().scale_x(),
        "rendering frame"
    );

    let frame = render_mandelbrot_frame(job.viewport(), thread_count)?;
    store.store(&frame, file_name)?;

    Ok(())
}
