//! Fan a blocking call out over the runtime's blocking pool and collect the
//! results keyed by submission index.
use crate::telemetry::{error_chain_fmt, spawn_blocking_with_tracing};
use std::collections::HashMap;
use std::convert::Infallible;
use std::sync::Arc;

/// Raised when any dispatched invocation fails.
///
/// The callable returning an error, the callable panicking and the pool
/// refusing to run it are all reported the same way.
#[derive(thiserror::Error)]
#[error("Dispatched invocation {index} failed.")]
pub struct DispatchError {
    pub index: usize,
    #[source]
    source: anyhow::Error,
}

impl DispatchError {
    fn new(index: usize, source: impl Into<anyhow::Error>) -> Self {
        Self {
            index,
            source: source.into(),
        }
    }
}

impl std::fmt::Debug for DispatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

/// Run `func(args)` `quantity` times on the blocking pool and store every
/// return value in `returns` under its submission index `0..quantity`.
///
/// `args` is cloned into each invocation; use a tuple to pass several values.
pub async fn start_threads<F, A, T>(
    quantity: usize,
    func: F,
    returns: &mut HashMap<usize, T>,
    args: A,
) -> Result<(), DispatchError>
where
    F: Fn(A) -> T + Send + Sync + 'static,
    A: Clone + Send + 'static,
    T: Send + 'static,
{
    try_start_indexed_threads(
        quantity,
        move |_, args| Ok::<_, Infallible>(func(args)),
        returns,
        args,
    )
    .await
}

/// Like [`start_threads`], for callables that can fail.
pub async fn try_start_threads<F, A, T, E>(
    quantity: usize,
    func: F,
    returns: &mut HashMap<usize, T>,
    args: A,
) -> Result<(), DispatchError>
where
    F: Fn(A) -> Result<T, E> + Send + Sync + 'static,
    A: Clone + Send + 'static,
    T: Send + 'static,
    E: Into<anyhow::Error> + Send + 'static,
{
    try_start_indexed_threads(quantity, move |_, args| func(args), returns, args).await
}

/// Like [`try_start_threads`], but each invocation also receives its index.
///
/// All invocations are submitted before the first one is awaited. Handles
/// are then joined in index order, so the reported failure is the one with
/// the lowest index among those that failed. Invocations still in flight at
/// that point keep running to completion; their results are discarded.
/// Entries stored before the failure are left in `returns`.
#[tracing::instrument(name = "Dispatching blocking invocations", skip(func, returns, args))]
pub async fn try_start_indexed_threads<F, A, T, E>(
    quantity: usize,
    func: F,
    returns: &mut HashMap<usize, T>,
    args: A,
) -> Result<(), DispatchError>
where
    F: Fn(usize, A) -> Result<T, E> + Send + Sync + 'static,
    A: Clone + Send + 'static,
    T: Send + 'static,
    E: Into<anyhow::Error> + Send + 'static,
{
    if quantity == 0 {
        return Ok(());
    }
    // `spawn_blocking` panics outside a runtime
    tokio::runtime::Handle::try_current().map_err(|e| DispatchError::new(0, e))?;

    let func = Arc::new(func);
    let handles: Vec<_> = (0..quantity)
        .map(|index| {
            let func = Arc::clone(&func);
            let args = args.clone();
            spawn_blocking_with_tracing(move || func(index, args))
        })
        .collect();

    for (index, handle) in handles.into_iter().enumerate() {
        let value = handle
            .await
            .map_err(|e| DispatchError::new(index, e))?
            .map_err(|e| DispatchError::new(index, e))?;
        returns.insert(index, value);
    }
    tracing::debug!("Collected {} results", quantity);
    Ok(())
}
