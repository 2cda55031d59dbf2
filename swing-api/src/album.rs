use serde::{Deserialize, Serialize};

use crate::{ArtistRefDto, Client, ClientResult, TrackDto};

/// An album as it appears in listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumDto {
    /// The album hash
    #[serde(rename = "albumhash", default)]
    pub album_hash: Option<String>,
    /// The album title
    #[serde(default)]
    pub title: Option<String>,
    /// The album artists, in credit order
    #[serde(rename = "albumartists", default)]
    pub album_artists: Option<Vec<ArtistRefDto>>,
    /// The album art reference
    #[serde(default)]
    pub image: Option<String>,
    /// The release date, as a unix timestamp
    #[serde(default)]
    pub date: Option<i64>,
    /// The dominant cover color
    #[serde(default)]
    pub color: Option<String>,
    /// Whether the album is a favorite
    #[serde(default)]
    pub is_favorite: Option<bool>,
}

/// A genre attached to an album.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenreDto {
    /// The genre name
    #[serde(default)]
    pub name: Option<String>,
    /// The genre hash
    #[serde(rename = "genrehash", default)]
    pub genre_hash: Option<String>,
}

/// Descriptive album metadata for the album detail view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumInfoDto {
    /// The album hash
    #[serde(rename = "albumhash", default)]
    pub album_hash: Option<String>,
    /// The album title
    #[serde(default)]
    pub title: Option<String>,
    /// The album artists, in credit order
    #[serde(rename = "albumartists", default)]
    pub album_artists: Option<Vec<ArtistRefDto>>,
    /// The release date, as a unix timestamp
    #[serde(default)]
    pub date: Option<i64>,
    /// The total duration in seconds
    #[serde(default)]
    pub duration: Option<i64>,
    /// The number of tracks
    #[serde(default)]
    pub count: Option<i64>,
    /// The genres of the album
    #[serde(default)]
    pub genres: Option<Vec<GenreDto>>,
    /// The album art reference
    #[serde(default)]
    pub image: Option<String>,
    /// Whether the album is a favorite
    #[serde(default)]
    pub is_favorite: Option<bool>,
}

/// An album with its metadata, tracks and copyright notice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumWithInfoDto {
    /// The album metadata
    #[serde(default)]
    pub info: Option<AlbumInfoDto>,
    /// The tracks of the album, in no particular order
    #[serde(default)]
    pub tracks: Option<Vec<TrackDto>>,
    /// The copyright notice
    #[serde(default)]
    pub copyright: Option<String>,
}

/// Album-related endpoints.
impl Client {
    /// Get an album with its metadata and tracks.
    pub async fn get_album_with_info(
        &self,
        album_hash: impl Into<String>,
    ) -> ClientResult<AlbumWithInfoDto> {
        #[derive(Serialize)]
        struct AlbumRequest {
            albumhash: String,
        }

        self.post(
            "album",
            &AlbumRequest {
                albumhash: album_hash.into(),
            },
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_album_with_info() {
        let album: AlbumWithInfoDto = serde_json::from_str(
            r#"{
                "info": {
                    "albumhash": "a1",
                    "title": "Kind of Blue",
                    "albumartists": [{"name": "Miles Davis", "artisthash": "md"}],
                    "date": -336700800,
                    "duration": 2760,
                    "count": 5,
                    "genres": [{"name": "jazz", "genrehash": "g1"}],
                    "is_favorite": false
                },
                "tracks": [{"trackhash": "t1", "disc": 1, "track": 2}],
                "copyright": "1959 Columbia"
            }"#,
        )
        .unwrap();

        let info = album.info.unwrap();
        assert_eq!(info.album_hash.as_deref(), Some("a1"));
        assert_eq!(info.count, Some(5));
        assert_eq!(album.tracks.unwrap().len(), 1);
        assert_eq!(album.copyright.as_deref(), Some("1959 Columbia"));
    }
}
