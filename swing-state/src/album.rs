use serde::{Deserialize, Serialize};

use crate::{ArtistRef, Favoritable, Track, artist::artist_refs, sa};

/// An album hash
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlbumHash(pub String);
impl std::fmt::Display for AlbumHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An album, as it appears in album listings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Album {
    /// The album hash
    pub hash: AlbumHash,
    /// The album title
    pub title: String,
    /// The album artists, in credit order
    pub artists: Vec<ArtistRef>,
    /// The album art reference
    pub image: Option<String>,
    /// The release date, as a unix timestamp
    pub date: Option<i64>,
    /// The dominant cover color
    pub color: Option<String>,
    /// Whether the album is a favorite
    pub is_favorite: bool,
}
impl From<sa::AlbumDto> for Album {
    fn from(album: sa::AlbumDto) -> Self {
        Album {
            hash: AlbumHash(album.album_hash.unwrap_or_default()),
            title: album.title.unwrap_or_default(),
            artists: artist_refs(album.album_artists),
            image: album.image,
            date: album.date,
            color: album.color,
            is_favorite: album.is_favorite.unwrap_or_default(),
        }
    }
}
impl Favoritable for Album {
    const FAVORITE_TYPE: sa::FavoriteType = sa::FavoriteType::Album;

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

/// Descriptive album metadata shown in the album detail header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumInfo {
    /// The album hash
    pub hash: AlbumHash,
    /// The album title
    pub title: String,
    /// The album artists, in credit order
    pub artists: Vec<ArtistRef>,
    /// The release date, as a unix timestamp
    pub date: Option<i64>,
    /// The total duration in seconds
    pub duration: u64,
    /// The number of tracks
    pub track_count: u32,
    /// The genre names
    pub genres: Vec<String>,
    /// The album art reference
    pub image: Option<String>,
    /// Whether the album is a favorite
    pub is_favorite: bool,
}
impl From<sa::AlbumInfoDto> for AlbumInfo {
    fn from(info: sa::AlbumInfoDto) -> Self {
        AlbumInfo {
            hash: AlbumHash(info.album_hash.unwrap_or_default()),
            title: info.title.unwrap_or_default(),
            artists: artist_refs(info.album_artists),
            date: info.date,
            duration: info
                .duration
                .and_then(|d| u64::try_from(d).ok())
                .unwrap_or_default(),
            track_count: info
                .count
                .and_then(|c| u32::try_from(c).ok())
                .unwrap_or_default(),
            genres: info
                .genres
                .unwrap_or_default()
                .into_iter()
                .filter_map(|g| g.name)
                .collect(),
            image: info.image,
            is_favorite: info.is_favorite.unwrap_or_default(),
        }
    }
}

/// An album with its metadata, its tracks in server order and its copyright
/// notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumWithInfo {
    /// The album metadata, if the server sent any
    pub album_info: Option<AlbumInfo>,
    /// The tracks, unordered
    pub tracks: Vec<Track>,
    /// The copyright notice
    pub copyright: String,
}
impl From<sa::AlbumWithInfoDto> for AlbumWithInfo {
    fn from(album: sa::AlbumWithInfoDto) -> Self {
        AlbumWithInfo {
            album_info: album.info.map(AlbumInfo::from),
            tracks: album
                .tracks
                .unwrap_or_default()
                .into_iter()
                .map(Track::from)
                .collect(),
            copyright: album.copyright.unwrap_or_default(),
        }
    }
}
