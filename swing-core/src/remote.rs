//! The seams between the state containers and the server.
//!
//! State containers only see the traits here; [`ApiRepository`] and the
//! listing endpoints implement them over [`sa::Client`], and tests substitute
//! fakes.
use std::sync::Arc;

use swing_state::{Album, AlbumHash, AlbumWithInfo, Artist, Track};

use crate::{ListingEndpoint, Subject, sa};

/// Loads album details.
#[async_trait::async_trait]
pub trait AlbumRepository: Send + Sync {
    async fn get_album_with_info(&self, album_hash: &AlbumHash) -> sa::ClientResult<AlbumWithInfo>;
}

/// Adds and removes favorites. Both calls return the resulting favorite state.
#[async_trait::async_trait]
pub trait FavoriteRepository: Send + Sync {
    async fn add_favorite(&self, ty: sa::FavoriteType, hash: &str) -> sa::ClientResult<bool>;
    async fn remove_favorite(&self, ty: sa::FavoriteType, hash: &str) -> sa::ClientResult<bool>;
}

/// The repositories backed by the real server.
#[derive(Clone)]
pub struct ApiRepository {
    client: Arc<sa::Client>,
}
impl ApiRepository {
    pub fn new(client: Arc<sa::Client>) -> Self {
        Self { client }
    }
}
#[async_trait::async_trait]
impl AlbumRepository for ApiRepository {
    async fn get_album_with_info(&self, album_hash: &AlbumHash) -> sa::ClientResult<AlbumWithInfo> {
        Ok(self.client.get_album_with_info(&album_hash.0).await?.into())
    }
}
#[async_trait::async_trait]
impl FavoriteRepository for ApiRepository {
    async fn add_favorite(&self, ty: sa::FavoriteType, hash: &str) -> sa::ClientResult<bool> {
        self.client.add_favorite(ty, hash).await
    }

    async fn remove_favorite(&self, ty: sa::FavoriteType, hash: &str) -> sa::ClientResult<bool> {
        self.client.remove_favorite(ty, hash).await
    }
}

/// All albums in the library.
pub struct AlbumListing(pub Arc<sa::Client>);
#[async_trait::async_trait]
impl ListingEndpoint for AlbumListing {
    type Item = Album;

    fn subject(&self) -> Subject {
        Subject::Albums
    }

    async fn fetch(&self, request: &sa::ListRequest) -> sa::ClientResult<Vec<Album>> {
        let albums = self.0.get_all_albums(request).await?;
        Ok(albums.into_iter().map(Album::from).collect())
    }
}

/// All artists in the library.
pub struct ArtistListing(pub Arc<sa::Client>);
#[async_trait::async_trait]
impl ListingEndpoint for ArtistListing {
    type Item = Artist;

    fn subject(&self) -> Subject {
        Subject::Artists
    }

    async fn fetch(&self, request: &sa::ListRequest) -> sa::ClientResult<Vec<Artist>> {
        let artists = self.0.get_all_artists(request).await?;
        Ok(artists.into_iter().map(Artist::from).collect())
    }
}

/// All tracks in the library.
pub struct TrackListing(pub Arc<sa::Client>);
#[async_trait::async_trait]
impl ListingEndpoint for TrackListing {
    type Item = Track;

    fn subject(&self) -> Subject {
        Subject::Tracks
    }

    async fn fetch(&self, request: &sa::ListRequest) -> sa::ClientResult<Vec<Track>> {
        let tracks = self.0.get_all_tracks(request).await?;
        Ok(tracks.into_iter().map(Track::from).collect())
    }
}
