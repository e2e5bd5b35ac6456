//! Plain-text rendering of the screen model.

use musichub_core::{SearchResults, Track};
use musichub_playback::PlaybackState;
use musichub_state::{
    AppState, Content, MainScreen, NotificationLevel, PlayerModel, Screen, SidebarModel, ViewModel,
};
use std::fmt::Write;

pub fn render(screen: &Screen<'_>, state: &AppState) -> String {
    match screen {
        Screen::Loading => "Loading...\n".to_string(),
        Screen::SignIn => {
            "Signed out. Use `login <email> <password>` or `signup <email> <password> <confirm>`.\n"
                .to_string()
        }
        Screen::Main(main) => render_main(main, state),
    }
}

fn render_main(main: &MainScreen<'_>, state: &AppState) -> String {
    let mut out = String::new();
    render_view(&mut out, &main.view, state);
    render_sidebar(&mut out, &main.sidebar);
    render_player(&mut out, &main.player);
    for notification in &main.notifications {
        let level = match notification.level {
            NotificationLevel::Info => "info",
            NotificationLevel::Error => "error",
        };
        let _ = writeln!(out, "[{level} #{}] {}", notification.id, notification.message);
    }
    out
}

fn render_view(out: &mut String, view: &ViewModel<'_>, state: &AppState) {
    let _ = writeln!(out, "== {} ==", view.title);
    if view.loading {
        let _ = writeln!(out, "  loading...");
    }
    if let Some(error) = view.error {
        let _ = writeln!(out, "  Error: {error}");
    }

    match view.content {
        Content::Tracks(tracks) => render_tracks(out, tracks, state),
        Content::Search(results) => render_search(out, results, state),
    }
}

fn render_tracks(out: &mut String, tracks: &[Track], state: &AppState) {
    for (i, track) in tracks.iter().enumerate() {
        let liked = match state.is_liked(&track.id) {
            Some(true) => " [liked]",
            _ => "",
        };
        let _ = writeln!(
            out,
            "  {:>2}. {} - {} ({}){liked}",
            i + 1,
            track.name,
            track.artist_name,
            format_duration(track.duration),
        );
    }
}

fn render_search(out: &mut String, results: &SearchResults, state: &AppState) {
    if !results.tracks.is_empty() {
        let _ = writeln!(out, "  Tracks");
        render_tracks(out, &results.tracks, state);
    }
    if !results.artists.is_empty() {
        let _ = writeln!(out, "  Artists");
        for artist in &results.artists {
            let _ = writeln!(out, "      {} (go artist:{})", artist.name, artist.id);
        }
    }
    if !results.albums.is_empty() {
        let _ = writeln!(out, "  Albums");
        for album in &results.albums {
            let _ = writeln!(
                out,
                "      {} - {} (go album:{})",
                album.name, album.artist_name, album.id
            );
        }
    }
}

fn render_sidebar(out: &mut String, sidebar: &SidebarModel<'_>) {
    let _ = write!(out, "Playlists:");
    if sidebar.loading && sidebar.playlists.is_empty() {
        let _ = write!(out, " loading...");
    }
    for (i, playlist) in sidebar.playlists.iter().enumerate() {
        let marker = if sidebar.active == Some(&playlist.id) { "*" } else { "" };
        let _ = write!(out, "  {}. {}{marker}", i + 1, playlist.name);
    }
    out.push('\n');
}

fn render_player(out: &mut String, player: &PlayerModel<'_>) {
    let Some(track) = player.current else {
        if player.queue_len > 0 {
            let _ = writeln!(out, "Queue: {} track(s), nothing selected", player.queue_len);
        }
        return;
    };

    let state = match player.state {
        PlaybackState::Playing => "playing",
        PlaybackState::Paused => "paused",
        PlaybackState::Blocked => "blocked",
        PlaybackState::Stopped => "stopped",
    };
    let position = player.position.map_or(0, |p| p + 1);
    let _ = writeln!(
        out,
        "Now {state}: {} - {} [{position}/{}]",
        track.name, track.artist_name, player.queue_len
    );
}

/// `m:ss`
pub fn format_duration(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
