use serde::{Deserialize, Serialize};

use crate::{Client, ClientResult};

/// The kind of item a favorite mutation refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FavoriteType {
    /// An album.
    Album,
    /// A track.
    Track,
    /// An artist.
    Artist,
}
impl FavoriteType {
    /// The name the server uses for this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            FavoriteType::Album => "album",
            FavoriteType::Track => "track",
            FavoriteType::Artist => "artist",
        }
    }
}

#[derive(Serialize)]
struct FavoriteRequest<'a> {
    hash: &'a str,
    #[serde(rename = "type")]
    ty: FavoriteType,
}

/// Favorite endpoints.
impl Client {
    /// Add an item to the user's favorites.
    ///
    /// Returns the resulting favorite state, which is always `true`.
    pub async fn add_favorite(&self, ty: FavoriteType, hash: &str) -> ClientResult<bool> {
        self.post_raw("favorites/add", &FavoriteRequest { hash, ty })
            .await?;
        Ok(true)
    }

    /// Remove an item from the user's favorites.
    ///
    /// Returns the resulting favorite state, which is always `false`.
    pub async fn remove_favorite(&self, ty: FavoriteType, hash: &str) -> ClientResult<bool> {
        self.post_raw("favorites/remove", &FavoriteRequest { hash, ty })
            .await?;
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body() {
        let body = serde_json::to_value(FavoriteRequest {
            hash: "abc",
            ty: FavoriteType::Track,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"hash": "abc", "type": "track"}));
    }
}
