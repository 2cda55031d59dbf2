use std::{collections::BTreeMap, ops::Range};

use crate::{AlbumInfo, AlbumWithInfo, Track, TrackHash};

/// An album's tracks, grouped by disc and ordered by track number.
///
/// The tracks are stored once, in flattened order; each disc is a contiguous
/// range of that list. Flattening the grouped view in disc order therefore
/// always yields exactly [`GroupedTracks::ordered`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupedTracks {
    ordered: Vec<Track>,
    discs: BTreeMap<Option<u32>, Range<usize>>,
}
impl GroupedTracks {
    /// Builds the grouped view from an unordered track list.
    ///
    /// Tracks are stable-sorted by track number, then grouped by disc with the
    /// discs in ascending order. Unknown track numbers and unknown discs sort
    /// before everything else.
    pub fn build(mut tracks: Vec<Track>) -> Self {
        tracks.sort_by_key(|t| t.track_number);
        // Stable, so the track-number order survives within each disc.
        tracks.sort_by_key(|t| t.disc);

        let mut discs: BTreeMap<Option<u32>, Range<usize>> = BTreeMap::new();
        for (idx, track) in tracks.iter().enumerate() {
            discs
                .entry(track.disc)
                .and_modify(|range| range.end = idx + 1)
                .or_insert(idx..idx + 1);
        }

        Self {
            ordered: tracks,
            discs,
        }
    }

    /// All tracks, disc by disc.
    pub fn ordered(&self) -> &[Track] {
        &self.ordered
    }

    /// The discs in ascending order, each with its tracks.
    pub fn discs(&self) -> impl Iterator<Item = (Option<u32>, &[Track])> + '_ {
        self.discs
            .iter()
            .map(|(disc, range)| (*disc, &self.ordered[range.clone()]))
    }

    /// The tracks of one disc.
    pub fn disc(&self, disc: Option<u32>) -> Option<&[Track]> {
        self.discs
            .get(&disc)
            .map(|range| &self.ordered[range.clone()])
    }

    /// The number of discs.
    pub fn disc_count(&self) -> usize {
        self.discs.len()
    }

    /// Looks up a track by hash.
    pub fn track(&self, hash: &TrackHash) -> Option<&Track> {
        self.ordered.iter().find(|t| &t.hash == hash)
    }

    /// Applies `update` to the track list and rebuilds every view from scratch.
    pub fn rebuild_with(&mut self, update: impl FnOnce(&mut Vec<Track>)) {
        let mut tracks = std::mem::take(&mut self.ordered);
        update(&mut tracks);
        *self = Self::build(tracks);
    }

    /// Sets the favorite flag of every track with the given hash, rebuilding
    /// the views. Returns the previous flag of the first match.
    pub fn set_track_favorite(&mut self, hash: &TrackHash, favorite: bool) -> Option<bool> {
        let mut previous = None;
        self.rebuild_with(|tracks| {
            for track in tracks.iter_mut().filter(|t| &t.hash == hash) {
                previous.get_or_insert(track.is_favorite);
                track.is_favorite = favorite;
            }
        });
        previous
    }
}

/// The album detail read model: metadata, grouped tracks and copyright.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlbumInfoWithGroupedTracks {
    /// The album metadata, if the server sent any
    pub album_info: Option<AlbumInfo>,
    /// The tracks, grouped by disc
    pub tracks: GroupedTracks,
    /// The copyright notice
    pub copyright: String,
}
impl From<AlbumWithInfo> for AlbumInfoWithGroupedTracks {
    fn from(album: AlbumWithInfo) -> Self {
        AlbumInfoWithGroupedTracks {
            album_info: album.album_info,
            tracks: GroupedTracks::build(album.tracks),
            copyright: album.copyright,
        }
    }
}
impl AlbumInfoWithGroupedTracks {
    /// Sets the album's favorite flag. Returns the previous flag, or `None`
    /// when there is no album metadata.
    pub fn set_album_favorite(&mut self, favorite: bool) -> Option<bool> {
        let info = self.album_info.as_mut()?;
        Some(std::mem::replace(&mut info.is_favorite, favorite))
    }
}
