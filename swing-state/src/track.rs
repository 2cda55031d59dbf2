use serde::{Deserialize, Serialize};

use crate::{AlbumHash, ArtistRef, Favoritable, artist::artist_refs, sa};

/// A track hash
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackHash(pub String);
impl std::fmt::Display for TrackHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A track, as `swing` cares about it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    /// The track hash
    pub hash: TrackHash,
    /// The track title
    pub title: String,
    /// The album title
    pub album: Option<String>,
    /// The album hash
    pub album_hash: Option<AlbumHash>,
    /// The track artists
    pub artists: Vec<ArtistRef>,
    /// The album artists
    pub album_artists: Vec<ArtistRef>,
    /// The duration in seconds
    pub duration: Option<u32>,
    /// The bitrate in kbps
    pub bitrate: Option<u32>,
    /// The path of the file on the server
    pub filepath: Option<String>,
    /// The folder containing the file
    pub folder: Option<String>,
    /// The album art reference
    pub image: Option<String>,
    /// The disc number; `None` when unknown
    pub disc: Option<u32>,
    /// The track number within the disc; `None` when unknown
    pub track_number: Option<u32>,
    /// Whether the track is a favorite
    pub is_favorite: bool,
}
impl From<sa::TrackDto> for Track {
    fn from(track: sa::TrackDto) -> Self {
        Track {
            hash: TrackHash(track.track_hash.unwrap_or_default()),
            title: track.title.unwrap_or_default(),
            album: track.album,
            album_hash: track.album_hash.map(AlbumHash),
            artists: artist_refs(track.artists),
            album_artists: artist_refs(track.album_artists),
            duration: non_negative(track.duration),
            bitrate: non_negative(track.bitrate),
            filepath: track.filepath,
            folder: track.folder,
            image: track.image,
            disc: non_negative(track.disc),
            track_number: non_negative(track.track_number),
            is_favorite: track.is_favorite.unwrap_or_default(),
        }
    }
}
impl Favoritable for Track {
    const FAVORITE_TYPE: sa::FavoriteType = sa::FavoriteType::Track;

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

/// Negative numbers from the server mean "unknown".
fn non_negative(value: Option<i32>) -> Option<u32> {
    value.and_then(|v| u32::try_from(v).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_dto_drops_negative_ordering() {
        let dto: sa::TrackDto = serde_json::from_str(
            r#"{"trackhash": "t1", "title": "Intro", "disc": -1, "track": 3, "duration": 61}"#,
        )
        .unwrap();
        let track = Track::from(dto);

        assert_eq!(track.hash, TrackHash("t1".to_string()));
        assert_eq!(track.disc, None);
        assert_eq!(track.track_number, Some(3));
        assert_eq!(track.duration, Some(61));
        assert!(!track.is_favorite);
        assert!(track.artists.is_empty());
    }
}
