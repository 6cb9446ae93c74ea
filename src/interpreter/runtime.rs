use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder, prelude::*};

use crate::error::EvalError;

/// Sequences at least this long are mapped in parallel batches.
pub const BATCH_THRESHOLD: usize = 10_000;
/// Number of worker threads in the map pool.
pub const WORKER_COUNT: usize = 16;

/// Tuning knobs for how `map` is executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Minimum sequence length for batched execution, and the size of each
    /// batch.
    pub batch_threshold: usize,
    /// Number of threads in the worker pool.
    pub worker_count:    usize,
    /// When `false`, every map runs on the calling thread.
    pub parallel:        bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self { batch_threshold: BATCH_THRESHOLD,
               worker_count:    WORKER_COUNT,
               parallel:        true, }
    }
}

/// A cloneable, thread-safe stop signal.
///
/// All clones share one flag. Setting it asks in-flight `map` and `reduce`
/// computations to return at their next element boundary.
///
/// # Example
/// ```
/// use seqlang::interpreter::runtime::StopHandle;
///
/// let handle = StopHandle::new();
/// let other = handle.clone();
///
/// other.stop();
/// assert!(handle.is_stopped());
///
/// handle.clear();
/// assert!(!other.is_stopped());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    /// Creates a handle with the flag cleared.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation.
    pub fn stop(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Returns `true` once [`stop`](Self::stop) has been called and the flag
    /// was not cleared since.
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Clears the flag so new work can run.
    pub fn clear(&self) {
        self.0.store(false, Ordering::Release);
    }
}

/// The result of a computation that may have been cut short.
///
/// A cancelled value is best effort and must not be shown as an answer.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// Every element was processed.
    Complete(T),
    /// A stop was requested; the value is partial.
    Cancelled(T),
}

impl<T> Outcome<T> {
    /// Returns `true` if the computation was stopped early.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled(_))
    }

    /// Returns the carried value whether or not it is complete.
    #[must_use]
    pub fn into_inner(self) -> T {
        match self {
            Self::Complete(value) | Self::Cancelled(value) => value,
        }
    }

    /// Transforms the carried value, keeping the completion state.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> Outcome<U>
        where F: FnOnce(T) -> U
    {
        match self {
            Self::Complete(value) => Outcome::Complete(f(value)),
            Self::Cancelled(value) => Outcome::Cancelled(f(value)),
        }
    }

    /// Returns the value if it is complete.
    ///
    /// # Errors
    /// Returns [`EvalError::Cancelled`] for a cancelled outcome, discarding the
    /// partial value.
    pub fn complete(self) -> Result<T, EvalError> {
        match self {
            Self::Complete(value) => Ok(value),
            Self::Cancelled(_) => Err(EvalError::Cancelled),
        }
    }
}

/// How elementwise work is scheduled.
#[derive(Debug, Clone)]
pub enum ExecutionStrategy {
    /// Process every element on the calling thread.
    Sequential,
    /// Split sequences of at least `threshold` elements into batches of
    /// `threshold` and process them on `pool`.
    Batched {
        /// Minimum length for batching, and the batch size.
        threshold: usize,
        /// The worker pool batches are submitted to.
        pool:      Arc<ThreadPool>,
    },
}

/// Execution environment shared by every `map` and `reduce` of one
/// interpreter.
///
/// Owns the worker pool, so the pool lives as long as the interpreter and is
/// shut down when the last clone is dropped.
#[derive(Debug, Clone)]
pub struct Runtime {
    strategy: ExecutionStrategy,
    stop:     StopHandle,
}

impl Runtime {
    /// Builds a runtime from a configuration.
    ///
    /// # Errors
    /// Returns the pool build error if the worker threads cannot be spawned.
    pub fn new(config: &RuntimeConfig) -> Result<Self, ThreadPoolBuildError> {
        if !config.parallel {
            return Ok(Self::sequential());
        }

        let pool = ThreadPoolBuilder::new().num_threads(config.worker_count.max(1))
                                           .thread_name(|index| format!("seqlang-worker-{index}"))
                                           .build()?;

        Ok(Self::with_strategy(ExecutionStrategy::Batched { threshold: config.batch_threshold
                                                                             .max(1),
                                                            pool:      Arc::new(pool), }))
    }

    /// A runtime that never leaves the calling thread.
    #[must_use]
    pub fn sequential() -> Self {
        Self::with_strategy(ExecutionStrategy::Sequential)
    }

    /// A runtime with an explicit strategy and a fresh stop flag.
    #[must_use]
    pub fn with_strategy(strategy: ExecutionStrategy) -> Self {
        Self { strategy,
               stop: StopHandle::new() }
    }

    /// The active execution strategy.
    #[must_use]
    pub const fn strategy(&self) -> &ExecutionStrategy {
        &self.strategy
    }

    /// The stop flag polled by computations on this runtime.
    #[must_use]
    pub const fn stop_handle(&self) -> &StopHandle {
        &self.stop
    }

    /// Returns `true` if a stop was requested.
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.stop.is_stopped()
    }

    /// Replaces every element of `values` with `f(element)`.
    ///
    /// An element whose evaluation fails is left unchanged and logged. The
    /// stop flag is checked before each element; once it is set the remaining
    /// elements are skipped and the outcome is cancelled.
    ///
    /// With a batched strategy and at least `threshold` elements, the slice is
    /// cut into disjoint chunks of `threshold` elements that run on the pool,
    /// and the call returns once all of them finished.
    ///
    /// # Example
    /// ```
    /// use seqlang::interpreter::runtime::{Outcome, Runtime};
    ///
    /// let runtime = Runtime::sequential();
    /// let mut values = vec![1.0, 2.0, 3.0];
    ///
    /// let outcome = runtime.map_values(&mut values, |x| Ok(x * 10.0));
    /// assert_eq!(outcome, Outcome::Complete(()));
    /// assert_eq!(values, [10.0, 20.0, 30.0]);
    /// ```
    pub fn map_values<F>(&self, values: &mut [f64], f: F) -> Outcome<()>
        where F: Fn(f64) -> Result<f64, EvalError> + Sync
    {
        let completed = match &self.strategy {
            ExecutionStrategy::Batched { threshold, pool } if values.len() >= *threshold => {
                tracing::debug!(len = values.len(),
                                batches = values.len().div_ceil(*threshold),
                                "dispatching map batches");
                pool.install(|| {
                        values.par_chunks_mut(*threshold)
                              .enumerate()
                              .map(|(batch, chunk)| {
                                  map_chunk(&self.stop, batch * threshold, chunk, &f)
                              })
                              .reduce(|| true, |a, b| a && b)
                    })
            },
            _ => map_chunk(&self.stop, 0, values, &f),
        };

        if completed {
            Outcome::Complete(())
        } else {
            Outcome::Cancelled(())
        }
    }
}

/// Maps one contiguous chunk in place; returns `false` if it was stopped.
fn map_chunk<F>(stop: &StopHandle, offset: usize, chunk: &mut [f64], f: &F) -> bool
    where F: Fn(f64) -> Result<f64, EvalError>
{
    for (index, value) in chunk.iter_mut().enumerate() {
        if stop.is_stopped() {
            return false;
        }
        match f(*value) {
            Ok(result) => *value = result,
            Err(error) => {
                tracing::warn!(index = offset + index, %error, "map element left unchanged");
            },
        }
    }
    true
}
