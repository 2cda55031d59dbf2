use swing_core::{
    screen::AlbumWithInfoState,
    swing_state::{Album, Artist, ArtistRef, Track},
};

/// One line of listing output.
pub trait Line {
    fn line(&self) -> String;
}

fn names(artists: &[ArtistRef]) -> String {
    if artists.is_empty() {
        return "Unknown Artist".to_string();
    }
    artists
        .iter()
        .map(|a| a.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn star(favorite: bool) -> &'static str {
    if favorite { " *" } else { "" }
}

fn duration(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

impl Line for Album {
    fn line(&self) -> String {
        format!(
            "{}  {} - {}{}",
            self.hash,
            names(&self.artists),
            self.title,
            star(self.is_favorite)
        )
    }
}

impl Line for Artist {
    fn line(&self) -> String {
        format!(
            "{}  {} ({} albums, {} tracks){}",
            self.hash,
            self.name,
            self.album_count,
            self.track_count,
            star(self.is_favorite)
        )
    }
}

impl Line for Track {
    fn line(&self) -> String {
        format!(
            "{}  {} - {} [{}]{}",
            self.hash,
            names(&self.artists),
            self.title,
            self.duration
                .map(|d| duration(d.into()))
                .unwrap_or_else(|| "-:--".to_string()),
            star(self.is_favorite)
        )
    }
}

/// Prints an album with its tracks grouped by disc.
pub fn album(state: &AlbumWithInfoState) {
    let Some(info) = state.info.data() else {
        return;
    };
    if let Some(album) = &info.album_info {
        println!("{} - {}{}", names(&album.artists), album.title, star(album.is_favorite));
        if !album.genres.is_empty() {
            println!("{}", album.genres.join(", "));
        }
        println!("{} tracks, {}", album.track_count, duration(album.duration));
    }

    let multi_disc = info.tracks.disc_count() > 1;
    for (disc, tracks) in info.tracks.discs() {
        if multi_disc {
            match disc {
                Some(disc) => println!("\nDisc {disc}"),
                None => println!("\nNo disc"),
            }
        }
        for track in tracks {
            let number = track
                .track_number
                .map(|n| format!("{n:>2}"))
                .unwrap_or_else(|| " -".to_string());
            println!(
                "{number}. {} [{}]{}",
                track.title,
                track
                    .duration
                    .map(|d| duration(d.into()))
                    .unwrap_or_else(|| "-:--".to_string()),
                star(track.is_favorite)
            );
        }
    }

    if !info.copyright.is_empty() {
        println!("\n{}", info.copyright);
    }
}
