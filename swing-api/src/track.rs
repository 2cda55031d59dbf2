use serde::{Deserialize, Serialize};

/// An artist reference attached to a track or album.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistRefDto {
    /// The artist hash.
    #[serde(rename = "artisthash", default)]
    pub artist_hash: Option<String>,
    /// The artist name.
    #[serde(default)]
    pub name: Option<String>,
}

/// A track, as the server returns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackDto {
    /// The album title
    #[serde(default)]
    pub album: Option<String>,
    /// The album artists
    #[serde(rename = "albumartists", default)]
    pub album_artists: Option<Vec<ArtistRefDto>>,
    /// The album hash
    #[serde(rename = "albumhash", default)]
    pub album_hash: Option<String>,
    /// The track artists
    #[serde(default)]
    pub artists: Option<Vec<ArtistRefDto>>,
    /// The bitrate in kbps
    #[serde(default)]
    pub bitrate: Option<i32>,
    /// The duration in seconds
    #[serde(default)]
    pub duration: Option<i32>,
    /// The path of the file on the server
    #[serde(default)]
    pub filepath: Option<String>,
    /// The folder containing the file
    #[serde(default)]
    pub folder: Option<String>,
    /// The album art reference
    #[serde(default)]
    pub image: Option<String>,
    /// Whether the track is a favorite
    #[serde(default)]
    pub is_favorite: Option<bool>,
    /// The track title
    #[serde(default)]
    pub title: Option<String>,
    /// The track hash
    #[serde(rename = "trackhash", default)]
    pub track_hash: Option<String>,
    /// The disc number
    #[serde(default)]
    pub disc: Option<i32>,
    /// The track number
    #[serde(rename = "track", default)]
    pub track_number: Option<i32>,
}
