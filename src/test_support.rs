//! Host-side harness for running effects in `hydrate` test builds.
//!
//! Effects and `spawn_local` tasks go through `any_spawner`, which is bound
//! to tokio here. Tests run inside a `LocalSet` under a fresh `Owner`.

use std::future::Future;

use leptos::prelude::Owner;

/// Run `test` on a local task set with a reactive owner in scope.
pub async fn run_local<F, Fut>(test: F)
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = ()>,
{
    if any_spawner::Executor::init_tokio().is_err() {
        log::trace!("executor already bound by an earlier test");
    }
    let owner = Owner::new();
    owner.set();
    tokio::task::LocalSet::new().run_until(test()).await;
}

/// Yield until queued effects and local tasks have run.
pub async fn settle() {
    for _ in 0..32 {
        tokio::task::yield_now().await;
    }
}
