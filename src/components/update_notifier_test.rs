use super::*;
use crate::state::update::{OFFLINE_READY_DURATION, UPDATE_TOAST_ID};
use crate::test_support::{run_local, settle};
use crate::util::toast::ExpiryCallback;
use std::sync::{Arc, Mutex};
use std::time::Duration;

struct Mounted {
    signals: UpdateSignals,
    toasts: RwSignal<ToastState>,
    expiries: Arc<Mutex<Vec<(Duration, ExpiryCallback)>>>,
}

fn mount() -> Mounted {
    let signals = UpdateSignals::new();
    let toasts = RwSignal::new(ToastState::default());
    let expiries = Arc::new(Mutex::new(Vec::new()));
    let queue = expiries.clone();
    provide_context(signals);
    provide_context(toasts);
    provide_context(ToastTimer::new(move |after, callback| {
        queue.lock().unwrap().push((after, callback));
    }));
    UpdateNotifier();
    Mounted { signals, toasts, expiries }
}

fn shown(toasts: RwSignal<ToastState>) -> Vec<(String, u64)> {
    toasts.with_untracked(|s| s.items().iter().map(|t| (t.id.clone(), t.seq)).collect())
}

#[tokio::test]
async fn sustained_update_signal_shows_one_toast() {
    run_local(|| async {
        let m = mount();
        settle().await;
        assert!(shown(m.toasts).is_empty());

        m.signals.update_available.set(true);
        settle().await;
        m.signals.update_available.set(true);
        settle().await;

        assert_eq!(shown(m.toasts), vec![(UPDATE_TOAST_ID.to_owned(), 1)]);
        assert!(m.expiries.lock().unwrap().is_empty());
    })
    .await;
}

#[tokio::test]
async fn offline_ready_toggled_twice_shows_two_toasts() {
    run_local(|| async {
        let m = mount();
        settle().await;

        for value in [true, false, true] {
            m.signals.offline_ready.set(value);
            settle().await;
        }

        assert_eq!(m.toasts.with_untracked(ToastState::len), 2);
        let expiries = std::mem::take(&mut *m.expiries.lock().unwrap());
        assert_eq!(expiries.len(), 2);
        for (after, callback) in expiries {
            assert_eq!(after, OFFLINE_READY_DURATION);
            callback();
        }
        assert!(m.toasts.with_untracked(ToastState::is_empty));
    })
    .await;
}

#[tokio::test]
async fn signals_toast_independently() {
    run_local(|| async {
        let m = mount();
        settle().await;

        m.signals.update_available.set(true);
        m.signals.offline_ready.set(true);
        settle().await;

        let ids: Vec<String> = shown(m.toasts).into_iter().map(|(id, _)| id).collect();
        assert_eq!(ids.len(), 2);
        assert!(ids.iter().any(|id| id == UPDATE_TOAST_ID));
    })
    .await;
}
