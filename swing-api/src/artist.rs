use serde::{Deserialize, Serialize};

/// An artist as it appears in listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistDto {
    /// The hash of the artist.
    #[serde(rename = "artisthash", default)]
    pub artist_hash: Option<String>,
    /// The name of the artist.
    #[serde(default)]
    pub name: Option<String>,
    /// The artist image reference.
    #[serde(default)]
    pub image: Option<String>,
    /// The number of albums by the artist.
    #[serde(rename = "albumcount", default)]
    pub album_count: Option<i64>,
    /// The number of tracks by the artist.
    #[serde(rename = "trackcount", default)]
    pub track_count: Option<i64>,
    /// Whether the artist is a favorite.
    #[serde(default)]
    pub is_favorite: Option<bool>,
}
