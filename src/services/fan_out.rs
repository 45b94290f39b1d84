use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tokio::time::{timeout_at, Instant};

/// Runs a stage of independent upstream calls and joins on all of them
///
/// Each call runs in its own tokio task. A shared semaphore bounds how many
/// calls are in flight at once across every stage using this group, and each
/// call gets its own deadline. Results come back in input order; a call that
/// times out, panics, or would start after the group's deadline yields `None`.
///
/// Tasks live in a `JoinSet`, so dropping the `run` future aborts every call
/// still waiting for a permit or in flight.
#[derive(Clone)]
pub struct TaskGroup {
    semaphore: Arc<Semaphore>,
    call_timeout: Duration,
    deadline: Option<Instant>,
}

impl TaskGroup {
    /// Creates a group allowing `max_in_flight` concurrent calls, 0 meaning uncapped
    pub fn new(max_in_flight: usize, call_timeout: Duration) -> Self {
        let permits = if max_in_flight == 0 {
            Semaphore::MAX_PERMITS
        } else {
            max_in_flight
        };

        Self {
            semaphore: Arc::new(Semaphore::new(permits)),
            call_timeout,
            deadline: None,
        }
    }

    /// Same cap, but no call may run past `deadline`
    pub fn with_deadline(&self, deadline: Instant) -> Self {
        Self {
            deadline: Some(deadline),
            ..self.clone()
        }
    }

    /// Spawns every task, waits for all of them, and returns their outputs
    pub async fn run<T, Fut>(&self, stage: &'static str, tasks: Vec<Fut>) -> Vec<Option<T>>
    where
        Fut: Future<Output = T> + Send + 'static,
        T: Send + 'static,
    {
        let task_count = tasks.len();
        let mut join_set = JoinSet::new();

        for (index, task) in tasks.into_iter().enumerate() {
            let semaphore = Arc::clone(&self.semaphore);
            let call_timeout = self.call_timeout;
            let deadline = self.deadline;

            join_set.spawn(async move {
                let output = run_call(stage, semaphore, call_timeout, deadline, task).await;
                (index, output)
            });
        }

        let mut results: Vec<Option<T>> = (0..task_count).map(|_| None).collect();
        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok((index, output)) => results[index] = output,
                // The slot of a panicked task stays `None`.
                Err(e) => tracing::error!(stage = stage, error = %e, "Task join error"),
            }
        }

        tracing::debug!(
            stage = stage,
            tasks = task_count,
            failed = results.iter().filter(|r| r.is_none()).count(),
            "Stage completed"
        );

        results
    }
}

async fn run_call<T, Fut>(
    stage: &'static str,
    semaphore: Arc<Semaphore>,
    call_timeout: Duration,
    deadline: Option<Instant>,
    task: Fut,
) -> Option<T>
where
    Fut: Future<Output = T>,
{
    // The semaphore is never closed, so a failed acquire only means running
    // without a permit.
    let _permit = match deadline {
        Some(deadline) => timeout_at(deadline, semaphore.acquire_owned()).await.ok()?.ok(),
        None => semaphore.acquire_owned().await.ok(),
    };

    let now = Instant::now();
    let mut until = now + call_timeout;
    if let Some(deadline) = deadline {
        if deadline <= now {
            tracing::debug!(stage = stage, "Skipping call past pipeline deadline");
            return None;
        }
        until = until.min(deadline);
    }

    match timeout_at(until, task).await {
        Ok(output) => Some(output),
        Err(_) => {
            tracing::warn!(
                stage = stage,
                timeout_ms = until.duration_since(now).as_millis() as u64,
                "Upstream call timed out"
            );
            None
        }
    }
}
