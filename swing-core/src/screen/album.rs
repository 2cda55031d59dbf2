use std::sync::Arc;

use swing_state::{AlbumHash, AlbumInfoWithGroupedTracks, AlbumWithInfo, Track, TrackHash};
use tokio::task::{AbortHandle, JoinSet};

use crate::{
    AlbumRepository, FavoriteRepository, FavoriteTarget, FavoriteViews, PagingError,
    PendingToggle, Resource, Subject, sa,
    screen::{Screen, StateContainer},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlbumWithInfoEvent {
    /// Back to the initial state. Loads and toggles still in flight are
    /// ignored when they resolve.
    ResetState,
    /// Sets the album to show and marks it for reloading, without loading it.
    UpdateAlbumHash(AlbumHash),
    LoadAlbumWithInfo(AlbumHash),
    /// Reloads the current album.
    RefreshAlbumInfo,
    ToggleAlbumFavorite {
        album_hash: AlbumHash,
        is_favorite: bool,
    },
    ToggleAlbumTrackFavorite {
        track_hash: TrackHash,
        is_favorite: bool,
    },
}

#[derive(Debug, Clone, Default)]
pub struct AlbumWithInfoState {
    pub album_hash: Option<AlbumHash>,
    pub reload_required: bool,
    pub info: Resource<AlbumInfoWithGroupedTracks>,
}
impl AlbumWithInfoState {
    /// The album's tracks, disc by disc. Empty unless loaded.
    pub fn ordered_tracks(&self) -> &[Track] {
        self.info
            .data()
            .map(|info| info.tracks.ordered())
            .unwrap_or_default()
    }

    pub fn album_favorite(&self) -> Option<bool> {
        Some(self.info.data()?.album_info.as_ref()?.is_favorite)
    }
}
impl FavoriteViews for AlbumWithInfoState {
    fn set_favorite(&mut self, target: &FavoriteTarget, favorite: bool) {
        let Some(info) = self.info.data_mut() else {
            return;
        };
        match target.ty {
            sa::FavoriteType::Album => {
                if info
                    .album_info
                    .as_ref()
                    .is_some_and(|album| album.hash.0 == target.hash)
                {
                    info.set_album_favorite(favorite);
                }
            }
            sa::FavoriteType::Track => {
                info.tracks
                    .set_track_favorite(&TrackHash(target.hash.clone()), favorite);
            }
            sa::FavoriteType::Artist => {}
        }
    }
}

pub enum AlbumWithInfoCompletion {
    Loaded {
        generation: u64,
        album_hash: AlbumHash,
        result: Result<AlbumWithInfo, PagingError>,
    },
    FavoriteResolved {
        toggle: PendingToggle,
        outcome: sa::ClientResult<bool>,
    },
}

/// The album detail screen: one album's metadata and grouped tracks, with
/// optimistic favorite toggles for the album and its tracks.
pub struct AlbumWithInfoContainer {
    albums: Arc<dyn AlbumRepository>,
    favorites: Arc<dyn FavoriteRepository>,
    state: AlbumWithInfoState,
    /// Incremented for every load; only the latest load may write.
    generation: u64,
    in_flight: Option<AbortHandle>,
    /// Incremented on reset; toggles from an earlier epoch are dropped.
    epoch: u64,
}
impl AlbumWithInfoContainer {
    pub fn new(albums: Arc<dyn AlbumRepository>, favorites: Arc<dyn FavoriteRepository>) -> Self {
        Self {
            albums,
            favorites,
            state: AlbumWithInfoState::default(),
            generation: 0,
            in_flight: None,
            epoch: 0,
        }
    }

    fn cancel_load(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            in_flight.abort();
        }
        self.generation += 1;
    }

    fn load(&mut self, album_hash: AlbumHash, tasks: &mut JoinSet<AlbumWithInfoCompletion>) {
        self.cancel_load();
        let generation = self.generation;
        tracing::debug!("Loading album {album_hash} (generation {generation})");

        self.state.album_hash = Some(album_hash.clone());
        self.state.info = Resource::Loading;

        let albums = self.albums.clone();
        self.in_flight = Some(tasks.spawn(async move {
            let result = albums
                .get_album_with_info(&album_hash)
                .await
                .map_err(|e| PagingError::classify(Subject::Album, e));
            AlbumWithInfoCompletion::Loaded {
                generation,
                album_hash,
                result,
            }
        }));
    }

    fn toggle(
        &mut self,
        target: FavoriteTarget,
        is_favorite: bool,
        tasks: &mut JoinSet<AlbumWithInfoCompletion>,
    ) {
        let toggle = PendingToggle::begin(&mut self.state, target, is_favorite, self.epoch);
        let favorites = self.favorites.clone();
        tasks.spawn(async move {
            let outcome = toggle.dispatch(favorites.as_ref()).await;
            AlbumWithInfoCompletion::FavoriteResolved { toggle, outcome }
        });
    }
}
impl StateContainer for AlbumWithInfoContainer {
    type Event = AlbumWithInfoEvent;
    type Completion = AlbumWithInfoCompletion;
    type State = AlbumWithInfoState;

    fn state(&self) -> &AlbumWithInfoState {
        &self.state
    }

    fn handle_event(
        &mut self,
        event: AlbumWithInfoEvent,
        tasks: &mut JoinSet<AlbumWithInfoCompletion>,
    ) {
        match event {
            AlbumWithInfoEvent::ResetState => {
                self.cancel_load();
                self.epoch += 1;
                self.state = AlbumWithInfoState::default();
            }
            AlbumWithInfoEvent::UpdateAlbumHash(album_hash) => {
                self.state.album_hash = Some(album_hash);
                self.state.reload_required = true;
            }
            AlbumWithInfoEvent::LoadAlbumWithInfo(album_hash) => self.load(album_hash, tasks),
            AlbumWithInfoEvent::RefreshAlbumInfo => match self.state.album_hash.clone() {
                Some(album_hash) => self.load(album_hash, tasks),
                None => tracing::warn!("Asked to refresh album info with no album selected"),
            },
            AlbumWithInfoEvent::ToggleAlbumFavorite {
                album_hash,
                is_favorite,
            } => self.toggle(
                FavoriteTarget::new(sa::FavoriteType::Album, album_hash.0),
                is_favorite,
                tasks,
            ),
            AlbumWithInfoEvent::ToggleAlbumTrackFavorite {
                track_hash,
                is_favorite,
            } => self.toggle(
                FavoriteTarget::new(sa::FavoriteType::Track, track_hash.0),
                is_favorite,
                tasks,
            ),
        }
    }

    fn handle_completion(
        &mut self,
        completion: AlbumWithInfoCompletion,
        _tasks: &mut JoinSet<AlbumWithInfoCompletion>,
    ) {
        match completion {
            AlbumWithInfoCompletion::Loaded {
                generation,
                album_hash,
                result,
            } => {
                if generation != self.generation {
                    tracing::debug!("Ignoring stale load of album {album_hash}");
                    return;
                }
                self.in_flight = None;
                match result {
                    Ok(album) => {
                        self.state.reload_required = false;
                        self.state.info = Resource::Success(album.into());
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load album {album_hash}: {}", e.cause);
                        self.state.info = e.into();
                    }
                }
            }
            AlbumWithInfoCompletion::FavoriteResolved { toggle, outcome } => {
                if toggle.epoch != self.epoch {
                    tracing::debug!("Ignoring favorite result for {} after reset", toggle.target);
                    return;
                }
                toggle.resolve(&mut self.state, &outcome);
            }
        }
    }
}

pub type AlbumWithInfoScreen = Screen<AlbumWithInfoContainer>;

/// Spawns an album detail screen.
pub fn album_with_info(
    albums: Arc<dyn AlbumRepository>,
    favorites: Arc<dyn FavoriteRepository>,
) -> AlbumWithInfoScreen {
    Screen::spawn(AlbumWithInfoContainer::new(albums, favorites))
}
