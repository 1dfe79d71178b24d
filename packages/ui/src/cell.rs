//! Glue between the store crate's seams and Dioxus.

use api::CancelToken;
use dioxus::prelude::*;
use store::StateCell;

/// A [`StateCell`] backed by a signal, so every container write re-renders
/// the components reading it.
///
/// Container reads go through [`Signal::peek`]. A store action running inside
/// `use_resource` must not subscribe the resource to the state it writes, or
/// every write would restart it.
pub struct SignalCell<S: 'static>(Signal<S>);

impl<S: 'static> SignalCell<S> {
    pub fn new(signal: Signal<S>) -> Self {
        Self(signal)
    }

    pub fn signal(&self) -> Signal<S> {
        self.0
    }
}

impl<S: 'static> Clone for SignalCell<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: 'static> Copy for SignalCell<S> {}

impl<S: Clone + 'static> StateCell<S> for SignalCell<S> {
    fn get(&self) -> S {
        self.0.peek().clone()
    }

    fn update(&self, f: impl FnOnce(&mut S)) {
        let mut signal = self.0;
        f(&mut signal.write());
    }
}

/// A token cancelled when the calling component unmounts. Pass it to every
/// store call made from that component.
pub fn use_cancel_token() -> CancelToken {
    let token = use_hook(CancelToken::new);
    use_drop({
        let token = token.clone();
        move || token.cancel()
    });
    token
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use dioxus::dioxus_core::{NoOpMutations, VirtualDom};

    use super::*;

    static RUNS: AtomicUsize = AtomicUsize::new(0);

    #[component]
    fn SelfWritingLoader() -> Element {
        let counter = use_signal(|| 0u32);
        let _loader = use_resource(move || {
            let cell = SignalCell::new(counter);
            async move {
                RUNS.fetch_add(1, Ordering::SeqCst);
                let current = cell.get();
                cell.set(current + 1);
            }
        });
        rsx! {}
    }

    #[tokio::test]
    async fn test_resource_writing_through_cell_runs_once() {
        let mut dom = VirtualDom::new(SelfWritingLoader);
        dom.rebuild_in_place();
        for _ in 0..20 {
            let _ = tokio::time::timeout(Duration::from_millis(5), dom.wait_for_work()).await;
            dom.render_immediate(&mut NoOpMutations);
        }
        assert_eq!(RUNS.load(Ordering::SeqCst), 1);
    }
}
