//! Representations of swing's library state, converted from the Swing Music API.
//!
//! Separated out to allow for use in other utilities.
#![deny(missing_docs)]

pub use swing_api as sa;

mod album;
pub use album::{Album, AlbumHash, AlbumInfo, AlbumWithInfo};

mod artist;
pub use artist::{Artist, ArtistHash, ArtistRef};

mod track;
pub use track::{Track, TrackHash};

mod grouped;
pub use grouped::{AlbumInfoWithGroupedTracks, GroupedTracks};

/// An item that carries a user favorite flag.
pub trait Favoritable {
    /// The kind of item, as the favorite endpoints name it.
    const FAVORITE_TYPE: sa::FavoriteType;

    /// The hash the favorite endpoints identify this item by.
    fn favorite_hash(&self) -> &str;

    /// Whether the item is currently a favorite.
    fn is_favorite(&self) -> bool;

    /// Overwrites the favorite flag.
    fn set_favorite(&mut self, favorite: bool);
}
