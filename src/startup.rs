use crate::configuration::RuntimeSettings;
use tokio::runtime::{Builder, Runtime};

/// Build the multi-threaded runtime whose blocking pool backs
/// [`start_threads`](crate::dispatch::start_threads).
pub fn build_runtime(settings: &RuntimeSettings) -> Result<Runtime, std::io::Error> {
    // tokio panics on zero-sized pools
    if settings.max_blocking_threads == 0 || settings.worker_threads == Some(0) {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "Runtime thread counts must be greater than zero.",
        ));
    }

    let mut builder = Builder::new_multi_thread();
    builder
        .enable_all()
        .thread_name("test-support-worker")
        .max_blocking_threads(settings.max_blocking_threads);
    if let Some(worker_threads) = settings.worker_threads {
        builder.worker_threads(worker_threads);
    }
    tracing::debug!(
        worker_threads = ?settings.worker_threads,
        max_blocking_threads = settings.max_blocking_threads,
        "Building test runtime"
    );
    builder.build()
}
