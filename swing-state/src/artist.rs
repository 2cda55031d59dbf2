use serde::{Deserialize, Serialize};

use crate::{Favoritable, sa};

/// An artist hash
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtistHash(pub String);
impl std::fmt::Display for ArtistHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A credited artist on a track or album.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistRef {
    /// The artist hash, if the server knows it
    pub hash: Option<ArtistHash>,
    /// The artist name
    pub name: String,
}
impl From<sa::ArtistRefDto> for ArtistRef {
    fn from(artist: sa::ArtistRefDto) -> Self {
        ArtistRef {
            hash: artist.artist_hash.map(ArtistHash),
            name: artist.name.unwrap_or_else(|| "Unknown Artist".to_string()),
        }
    }
}

/// A missing artist list is treated as empty.
pub(crate) fn artist_refs(artists: Option<Vec<sa::ArtistRefDto>>) -> Vec<ArtistRef> {
    artists
        .unwrap_or_default()
        .into_iter()
        .map(ArtistRef::from)
        .collect()
}

/// An artist, as `swing` cares about it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artist {
    /// The artist hash
    pub hash: ArtistHash,
    /// The artist name
    pub name: String,
    /// The artist image reference
    pub image: Option<String>,
    /// The number of albums by the artist
    pub album_count: u32,
    /// The number of tracks by the artist
    pub track_count: u32,
    /// Whether the artist is a favorite
    pub is_favorite: bool,
}
impl From<sa::ArtistDto> for Artist {
    fn from(artist: sa::ArtistDto) -> Self {
        Artist {
            hash: ArtistHash(artist.artist_hash.unwrap_or_default()),
            name: artist.name.unwrap_or_else(|| "Unknown Artist".to_string()),
            image: artist.image,
            album_count: artist
                .album_count
                .and_then(|c| u32::try_from(c).ok())
                .unwrap_or_default(),
            track_count: artist
                .track_count
                .and_then(|c| u32::try_from(c).ok())
                .unwrap_or_default(),
            is_favorite: artist.is_favorite.unwrap_or_default(),
        }
    }
}
impl Favoritable for Artist {
    const FAVORITE_TYPE: sa::FavoriteType = sa::FavoriteType::Artist;

    fn favorite_hash(&self) -> &str {
        &self.hash.0
    }

    fn is_favorite(&self) -> bool {
        self.is_favorite
    }

    fn set_favorite(&mut self, favorite: bool) {
        self.is_favorite = favorite;
    }
}
