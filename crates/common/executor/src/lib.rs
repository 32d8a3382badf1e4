use std::future::Future;

use tokio::{runtime::Runtime, sync::broadcast, task::JoinHandle};

/// Task executor shared by the node's long-running services: a tokio runtime
/// plus a broadcast shutdown channel every spawned task listens on.
pub struct ArborExecutor {
    runtime: Runtime,
    shutdown: broadcast::Sender<()>,
}

impl ArborExecutor {
    pub fn new() -> std::io::Result<Self> {
        let runtime = Runtime::new()?;
        let (shutdown, _) = broadcast::channel(1);
        Ok(Self { runtime, shutdown })
    }

    pub fn spawn<F>(&self, future: F) -> JoinHandle<F::Output>
    where
        F: Future + Send + 'static,
        F::Output: Send + 'static,
    {
        let mut shutdown = self.shutdown.subscribe();
        self.runtime.spawn(async move {
            tokio::select! {
                result = future => result,
                _ = shutdown.recv() => panic!("Task cancelled due to shutdown"),
            }
        })
    }

    /// Spawns a task that receives the shutdown signal and decides for
    /// itself how to wind down; resolves to `None` when interrupted by
    /// ctrl-c before completing.
    pub fn spawn_cancellable<F, Fut, T>(&self, future_fn: F) -> JoinHandle<Option<T>>
    where
        F: FnOnce(broadcast::Receiver<()>) -> Fut + Send + 'static,
        Fut: Future<Output = T> + Send,
        T: Send + 'static,
    {
        let shutdown = self.shutdown.subscribe();
        self.runtime.spawn(async move {
            let future = future_fn(shutdown);
            tokio::select! {
                result = future => Some(result),
                _ = tokio::signal::ctrl_c() => None,
            }
        })
    }

    /// Spawns multiple tasks and returns a handle that resolves when all tasks complete
    pub fn spawn_many<F, Fut, T>(&self, futures: impl IntoIterator<Item = F>) -> JoinHandle<Vec<T>>
    where
        F: FnOnce(broadcast::Receiver<()>) -> Fut + Send + 'static,
        Fut: Future<Output = T> + Send,
        T: Send + 'static,
    {
        let futures: Vec<_> = futures
            .into_iter()
            .map(|f| self.spawn_cancellable(f))
            .collect();

        self.runtime.spawn(async move {
            let results = futures::future::join_all(futures).await;
            results
                .into_iter()
                .filter_map(|r| r.ok().flatten())
                .collect()
        })
    }

    /// Triggers a shutdown signal to all spawned tasks
    pub fn shutdown(&self) {
        let _ = self.shutdown.send(());
    }

    /// Get a reference to the underlying runtime
    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }
}
