use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::{AlbumDto, ArtistDto, Client, ClientResult, TrackDto};

/// The direction a listing is sorted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Smallest first.
    Ascending,
    /// Largest first.
    #[default]
    Descending,
}
impl SortOrder {
    /// The integer the server expects for this order.
    pub fn as_param(&self) -> u8 {
        match self {
            SortOrder::Ascending => 0,
            SortOrder::Descending => 1,
        }
    }
}

/// A request for one page of a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRequest {
    /// The index of the first item to return.
    pub start_index: usize,
    /// The maximum number of items to return.
    pub limit: usize,
    /// The field the server sorts by, e.g. `created_date` or `title`.
    pub sort_by: String,
    /// The direction of the sort.
    pub sort_order: SortOrder,
}
impl ListRequest {
    fn parameters(&self) -> Vec<(&'static str, String)> {
        vec![
            ("start", self.start_index.to_string()),
            ("limit", self.limit.to_string()),
            ("sortby", self.sort_by.clone()),
            ("reverse", self.sort_order.as_param().to_string()),
        ]
    }
}

#[derive(Deserialize)]
struct ItemsResponse<T> {
    /// Absent and `null` both deserialize to `None`.
    items: Option<Vec<T>>,
}

/// Paged listing endpoints.
impl Client {
    /// Get one page of all albums in the library.
    ///
    /// An empty page means there are no more albums.
    pub async fn get_all_albums(&self, request: &ListRequest) -> ClientResult<Vec<AlbumDto>> {
        self.get_all("getall/albums", request).await
    }

    /// Get one page of all artists in the library.
    pub async fn get_all_artists(&self, request: &ListRequest) -> ClientResult<Vec<ArtistDto>> {
        self.get_all("getall/artists", request).await
    }

    /// Get one page of all tracks in the library.
    pub async fn get_all_tracks(&self, request: &ListRequest) -> ClientResult<Vec<TrackDto>> {
        self.get_all("getall/tracks", request).await
    }

    async fn get_all<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        request: &ListRequest,
    ) -> ClientResult<Vec<T>> {
        Ok(self
            .get::<ItemsResponse<T>>(endpoint, &request.parameters())
            .await?
            .items
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameters() {
        let request = ListRequest {
            start_index: 40,
            limit: 20,
            sort_by: "created_date".to_string(),
            sort_order: SortOrder::Descending,
        };
        assert_eq!(
            request.parameters(),
            vec![
                ("start", "40".to_string()),
                ("limit", "20".to_string()),
                ("sortby", "created_date".to_string()),
                ("reverse", "1".to_string()),
            ]
        );
    }

    #[test]
    fn test_items_response_tolerates_missing_and_null() {
        let missing: ItemsResponse<u32> = serde_json::from_str("{}").unwrap();
        assert_eq!(missing.items.unwrap_or_default(), Vec::<u32>::new());

        let null: ItemsResponse<u32> = serde_json::from_str(r#"{"items": null}"#).unwrap();
        assert_eq!(null.items.unwrap_or_default(), Vec::<u32>::new());

        let some: ItemsResponse<u32> = serde_json::from_str(r#"{"items": [1, 2]}"#).unwrap();
        assert_eq!(some.items.unwrap_or_default(), vec![1, 2]);
    }
}
