use std::sync::Arc;

use swing_state::Favoritable;
use tokio::task::{AbortHandle, JoinSet};

use crate::{
    FavoriteRepository, FavoriteTarget, FavoriteViews, ListingEndpoint, Page, PageKey,
    PagedItems, PagingCursor, PagingError, PendingToggle, Resource, SortSpec, sa,
    screen::{Screen, StateContainer},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingEvent {
    /// Loads the page after the last one loaded. Ignored while a load is in
    /// flight and once the end of the listing was reached.
    LoadNextPage,
    /// Discards every loaded item and loads the first page again.
    Refresh,
    /// Discards every loaded item and loads the first page in the new sort.
    ChangeSort(SortSpec),
    ToggleFavorite { hash: String, is_favorite: bool },
}

#[derive(Debug, Clone)]
pub struct ListingState<T> {
    pub items: PagedItems<T>,
    /// The state of the most recent page load, `None` before the first one.
    pub last_load: Option<Resource<PageKey>>,
    pub sort: SortSpec,
}
impl<T> ListingState<T> {
    fn new(sort: SortSpec) -> Self {
        Self {
            items: PagedItems::default(),
            last_load: None,
            sort,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.last_load.as_ref().is_some_and(Resource::is_loading)
    }

    pub fn end_reached(&self) -> bool {
        self.items.end_reached()
    }
}
impl<T: Favoritable> FavoriteViews for ListingState<T> {
    fn set_favorite(&mut self, target: &FavoriteTarget, favorite: bool) {
        if target.ty != T::FAVORITE_TYPE {
            return;
        }
        for item in self
            .items
            .items_mut()
            .iter_mut()
            .filter(|item| item.favorite_hash() == target.hash)
        {
            item.set_favorite(favorite);
        }
    }
}

pub enum ListingCompletion<T> {
    PageLoaded {
        epoch: u64,
        result: Result<Page<T>, PagingError>,
    },
    FavoriteResolved {
        toggle: PendingToggle,
        outcome: sa::ClientResult<bool>,
    },
}

/// A paged listing of albums, artists or tracks with optimistic favorite
/// toggles on its items.
pub struct ListingContainer<E: ListingEndpoint> {
    cursor: PagingCursor<E>,
    favorites: Arc<dyn FavoriteRepository>,
    state: ListingState<E::Item>,
    in_flight: Option<AbortHandle>,
    /// Incremented whenever the cursor is replaced; pages from an earlier
    /// epoch are dropped.
    epoch: u64,
}
impl<E> ListingContainer<E>
where
    E: ListingEndpoint,
    E::Item: Favoritable + Clone + Sync,
{
    pub fn new(
        endpoint: Arc<E>,
        favorites: Arc<dyn FavoriteRepository>,
        sort: SortSpec,
        page_size: usize,
    ) -> Self {
        Self {
            cursor: PagingCursor::new(endpoint, sort.clone(), page_size),
            favorites,
            state: ListingState::new(sort),
            in_flight: None,
            epoch: 0,
        }
    }

    fn load_next(&mut self, tasks: &mut JoinSet<ListingCompletion<E::Item>>) {
        if self.in_flight.is_some() {
            tracing::debug!("Page load already in flight");
            return;
        }
        let Some(request) = self.cursor.next_request() else {
            tracing::debug!("Listing exhausted, not loading more");
            return;
        };

        let epoch = self.epoch;
        self.state.last_load = Some(Resource::Loading);
        self.in_flight = Some(tasks.spawn(async move {
            ListingCompletion::PageLoaded {
                epoch,
                result: request.run().await,
            }
        }));
    }

    fn restart(&mut self, sort: SortSpec, tasks: &mut JoinSet<ListingCompletion<E::Item>>) {
        if let Some(in_flight) = self.in_flight.take() {
            in_flight.abort();
        }
        self.epoch += 1;
        self.cursor = self.cursor.with_sort(sort.clone());
        self.state = ListingState::new(sort);
        self.load_next(tasks);
    }
}
impl<E> StateContainer for ListingContainer<E>
where
    E: ListingEndpoint,
    E::Item: Favoritable + Clone + Sync,
{
    type Event = ListingEvent;
    type Completion = ListingCompletion<E::Item>;
    type State = ListingState<E::Item>;

    fn state(&self) -> &Self::State {
        &self.state
    }

    fn handle_event(&mut self, event: ListingEvent, tasks: &mut JoinSet<Self::Completion>) {
        match event {
            ListingEvent::LoadNextPage => self.load_next(tasks),
            ListingEvent::Refresh => self.restart(self.cursor.sort().clone(), tasks),
            ListingEvent::ChangeSort(sort) => self.restart(sort, tasks),
            ListingEvent::ToggleFavorite { hash, is_favorite } => {
                let target = FavoriteTarget::new(<E::Item as Favoritable>::FAVORITE_TYPE, hash);
                let toggle = PendingToggle::begin(&mut self.state, target, is_favorite, self.epoch);
                let favorites = self.favorites.clone();
                tasks.spawn(async move {
                    let outcome = toggle.dispatch(favorites.as_ref()).await;
                    ListingCompletion::FavoriteResolved { toggle, outcome }
                });
            }
        }
    }

    fn handle_completion(
        &mut self,
        completion: Self::Completion,
        _tasks: &mut JoinSet<Self::Completion>,
    ) {
        match completion {
            ListingCompletion::PageLoaded { epoch, result } => {
                if epoch != self.epoch {
                    tracing::debug!("Ignoring page from a replaced listing");
                    return;
                }
                self.in_flight = None;
                match result {
                    Ok(page) => {
                        tracing::debug!("Loaded page {} ({} items)", page.key, page.items.len());
                        self.cursor.advance(&page);
                        self.state.last_load = Some(Resource::Success(page.key));
                        self.state.items.append(page);
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load page: {}", e.cause);
                        self.state.last_load = Some(e.into());
                    }
                }
            }
            // Applied even after a reload: the reloaded page may predate the
            // server committing the change. Items that are gone are not matched.
            ListingCompletion::FavoriteResolved { toggle, outcome } => {
                toggle.resolve(&mut self.state, &outcome);
            }
        }
    }
}

pub type ListingScreen<E> = Screen<ListingContainer<E>>;

/// Spawns a listing screen. Nothing is loaded until the first
/// [`ListingEvent::LoadNextPage`].
pub fn listing<E>(
    endpoint: Arc<E>,
    favorites: Arc<dyn FavoriteRepository>,
    sort: SortSpec,
    page_size: usize,
) -> ListingScreen<E>
where
    E: ListingEndpoint,
    E::Item: Favoritable + Clone + Sync,
{
    Screen::spawn(ListingContainer::new(endpoint, favorites, sort, page_size))
}
