//! Paged library sync and optimistic favorites for Swing Music clients.
//!
//! The building blocks are a [`PagingCursor`] over the server's listing
//! endpoints, the [`Resource`] lifecycle of a remote load, and
//! [`PendingToggle`] for favorite changes applied before the server confirms
//! them. The [`screen`] module combines them into single-writer state
//! containers that front-ends drive with events.
pub mod config;
pub mod screen;

mod error;
pub use error::{ErrorKind, PagingError, Subject};

mod optimistic;
pub use optimistic::{FavoriteTarget, FavoriteViews, PendingToggle};

mod paging;
pub use paging::{
    ListingEndpoint, Page, PageKey, PageLoad, PagedItems, PagingCursor, SortSpec, collect_all,
    load,
};

mod remote;
pub use remote::{
    AlbumListing, AlbumRepository, ApiRepository, ArtistListing, FavoriteRepository,
    TrackListing,
};

mod resource;
pub use resource::{ErrorCause, Resource};

#[cfg(test)]
mod testing;

pub use swing_api as sa;
pub use swing_state;
