//! Browser-only task spawning.

use std::future::Future;

/// Run `task` on the browser event loop. During SSR the task is dropped
/// unpolled; screens load after hydration.
pub fn spawn<F>(task: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(task);
    #[cfg(not(feature = "hydrate"))]
    drop(task);
}
