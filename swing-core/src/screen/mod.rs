//! Screen state containers.
//!
//! A screen is a tokio task that exclusively owns its state. Events come in
//! over a channel, remote calls run on a [`JoinSet`] owned by the same task,
//! and a snapshot of the state is published after every event and every
//! completion. Dropping the [`Screen`] handle aborts the task, and with it every
//! outstanding remote call.
use tokio::{
    sync::{mpsc, watch},
    task::{AbortHandle, JoinSet},
};

mod album;
pub use album::{
    AlbumWithInfoCompletion, AlbumWithInfoContainer, AlbumWithInfoEvent, AlbumWithInfoScreen,
    AlbumWithInfoState, album_with_info,
};

mod listing;
pub use listing::{
    ListingCompletion, ListingContainer, ListingEvent, ListingScreen, ListingState, listing,
};

/// State owned by a screen task.
pub trait StateContainer: Send + 'static {
    type Event: Send + 'static;
    type Completion: Send + 'static;
    type State: Clone + Send + Sync + 'static;

    fn state(&self) -> &Self::State;

    /// Applies a UI event. Remote work is spawned onto `tasks`.
    fn handle_event(&mut self, event: Self::Event, tasks: &mut JoinSet<Self::Completion>);

    /// Applies the result of a task spawned onto `tasks`.
    fn handle_completion(
        &mut self,
        completion: Self::Completion,
        tasks: &mut JoinSet<Self::Completion>,
    );
}

/// A handle to a running screen task.
pub struct Screen<C: StateContainer> {
    events: mpsc::UnboundedSender<C::Event>,
    state: watch::Receiver<C::State>,
    task: AbortHandle,
}
impl<C: StateContainer> Screen<C> {
    /// Spawns the screen task. Must be called within a tokio runtime.
    pub fn spawn(container: C) -> Self {
        let (events, event_rx) = mpsc::unbounded_channel();
        let (state_tx, state) = watch::channel(container.state().clone());
        let task = tokio::spawn(run(container, event_rx, state_tx)).abort_handle();
        Self {
            events,
            state,
            task,
        }
    }

    pub fn send(&self, event: C::Event) {
        if self.events.send(event).is_err() {
            tracing::debug!("Screen has shut down, dropping event");
        }
    }

    /// The latest published state.
    pub fn state(&self) -> C::State {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<C::State> {
        self.state.clone()
    }

    /// Waits until the published state satisfies `predicate`. Returns `None` if
    /// the screen shut down first.
    pub async fn wait_for(&self, predicate: impl FnMut(&C::State) -> bool) -> Option<C::State> {
        let mut state = self.state.clone();
        let result = state.wait_for(predicate).await;
        result.ok().map(|s| s.clone())
    }

    /// Stops the screen task and cancels its outstanding remote calls.
    pub fn shutdown(&self) {
        self.task.abort();
    }

    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }
}
impl<C: StateContainer> Drop for Screen<C> {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn run<C: StateContainer>(
    mut container: C,
    mut events: mpsc::UnboundedReceiver<C::Event>,
    state: watch::Sender<C::State>,
) {
    // Dropped with this future, which aborts every task still in it.
    let mut tasks = JoinSet::new();
    loop {
        tokio::select! {
            biased;
            event = events.recv() => {
                let Some(event) = event else {
                    break;
                };
                container.handle_event(event, &mut tasks);
            }
            Some(result) = tasks.join_next(), if !tasks.is_empty() => {
                match result {
                    Ok(completion) => container.handle_completion(completion, &mut tasks),
                    Err(e) if e.is_cancelled() => continue,
                    Err(e) => {
                        tracing::warn!("Screen task failed: {e}");
                        continue;
                    }
                }
            }
        }
        state.send_replace(container.state().clone());
    }
    tracing::debug!("Screen event channel closed");
}
