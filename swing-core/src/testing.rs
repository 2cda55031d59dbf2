//! Channel-driven fakes for the remote seams.
//!
//! Every call is forwarded to the test as a message carrying a responder, so
//! tests decide when and in which order remote calls resolve.
use std::sync::Arc;

use swing_state::{Album, AlbumHash, AlbumInfo, AlbumWithInfo, Track, TrackHash};
use tokio::sync::{mpsc, oneshot};

use crate::{AlbumRepository, FavoriteRepository, FavoriteTarget, ListingEndpoint, Subject, sa};

fn dropped() -> sa::ClientError {
    sa::ClientError::StatusError {
        code: 503,
        message: Some("responder dropped".to_string()),
    }
}

pub(crate) fn server_error() -> sa::ClientError {
    sa::ClientError::StatusError {
        code: 500,
        message: None,
    }
}

/// Lets every runnable task make progress.
pub(crate) async fn settle() {
    for _ in 0..16 {
        tokio::task::yield_now().await;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FavoriteAction {
    Add,
    Remove,
}

pub(crate) struct FavoriteCall {
    pub action: FavoriteAction,
    pub target: FavoriteTarget,
    pub respond: oneshot::Sender<sa::ClientResult<bool>>,
}

pub(crate) struct FakeFavorites {
    calls: mpsc::UnboundedSender<FavoriteCall>,
}
impl FakeFavorites {
    pub fn new() -> (Arc<Self>, mpsc::UnboundedReceiver<FavoriteCall>) {
        let (calls, rx) = mpsc::unbounded_channel();
        (Arc::new(Self { calls }), rx)
    }

    async fn call(
        &self,
        action: FavoriteAction,
        ty: sa::FavoriteType,
        hash: &str,
    ) -> sa::ClientResult<bool> {
        let (respond, response) = oneshot::channel();
        self.calls
            .send(FavoriteCall {
                action,
                target: FavoriteTarget::new(ty, hash),
                respond,
            })
            .map_err(|_| dropped())?;
        response.await.unwrap_or_else(|_| Err(dropped()))
    }
}
#[async_trait::async_trait]
impl FavoriteRepository for FakeFavorites {
    async fn add_favorite(&self, ty: sa::FavoriteType, hash: &str) -> sa::ClientResult<bool> {
        self.call(FavoriteAction::Add, ty, hash).await
    }

    async fn remove_favorite(&self, ty: sa::FavoriteType, hash: &str) -> sa::ClientResult<bool> {
        self.call(FavoriteAction::Remove, ty, hash).await
    }
}

pub(crate) struct AlbumCall {
    pub hash: AlbumHash,
    pub respond: oneshot::Sender<sa::ClientResult<AlbumWithInfo>>,
}

pub(crate) struct FakeAlbums {
    calls: mpsc::UnboundedSender<AlbumCall>,
}
impl FakeAlbums {
    pub fn new() -> (Arc<Self>, mpsc::UnboundedReceiver<AlbumCall>) {
        let (calls, rx) = mpsc::unbounded_channel();
        (Arc::new(Self { calls }), rx)
    }
}
#[async_trait::async_trait]
impl AlbumRepository for FakeAlbums {
    async fn get_album_with_info(&self, album_hash: &AlbumHash) -> sa::ClientResult<AlbumWithInfo> {
        let (respond, response) = oneshot::channel();
        self.calls
            .send(AlbumCall {
                hash: album_hash.clone(),
                respond,
            })
            .map_err(|_| dropped())?;
        response.await.unwrap_or_else(|_| Err(dropped()))
    }
}

pub(crate) struct PageCall {
    pub request: sa::ListRequest,
    pub respond: oneshot::Sender<sa::ClientResult<Vec<Album>>>,
}

pub(crate) struct FakeAlbumListing {
    calls: mpsc::UnboundedSender<PageCall>,
}
impl FakeAlbumListing {
    pub fn new() -> (Arc<Self>, mpsc::UnboundedReceiver<PageCall>) {
        let (calls, rx) = mpsc::unbounded_channel();
        (Arc::new(Self { calls }), rx)
    }
}
#[async_trait::async_trait]
impl ListingEndpoint for FakeAlbumListing {
    type Item = Album;

    fn subject(&self) -> Subject {
        Subject::Albums
    }

    async fn fetch(&self, request: &sa::ListRequest) -> sa::ClientResult<Vec<Album>> {
        let (respond, response) = oneshot::channel();
        self.calls
            .send(PageCall {
                request: request.clone(),
                respond,
            })
            .map_err(|_| dropped())?;
        response.await.unwrap_or_else(|_| Err(dropped()))
    }
}

pub(crate) fn track(hash: &str, disc: Option<u32>, track_number: Option<u32>) -> Track {
    Track {
        hash: TrackHash(hash.to_string()),
        title: hash.to_string(),
        album: None,
        album_hash: None,
        artists: vec![],
        album_artists: vec![],
        duration: Some(180),
        bitrate: None,
        filepath: None,
        folder: None,
        image: None,
        disc,
        track_number,
        is_favorite: false,
    }
}

pub(crate) fn album(hash: &str) -> Album {
    Album {
        hash: AlbumHash(hash.to_string()),
        title: hash.to_uppercase(),
        artists: vec![],
        image: None,
        date: None,
        color: None,
        is_favorite: false,
    }
}

pub(crate) fn album_data(hash: &str, tracks: Vec<Track>) -> AlbumWithInfo {
    AlbumWithInfo {
        album_info: Some(AlbumInfo {
            hash: AlbumHash(hash.to_string()),
            title: hash.to_uppercase(),
            artists: vec![],
            date: None,
            duration: 0,
            track_count: tracks.len() as u32,
            genres: vec![],
            image: None,
            is_favorite: false,
        }),
        tracks,
        copyright: format!("(c) {hash}"),
    }
}
