//! Turning parsed commands into controller events.
//!
//! Positions in commands refer to what is on screen, so resolution reads the
//! current state: track numbers index the active view's list and playlist
//! numbers index the sidebar.

use crate::command::Command;
use musichub_core::{Playlist, Track};
use musichub_state::{view_model, AppState, Event, View};

/// What the command loop should do
#[derive(Debug, Clone, PartialEq)]
#[allow(clippy::large_enum_variant)]
pub enum Action {
    Dispatch(Event),
    SignUp { email: String, password: String },
    SignIn { email: String, password: String },
    SignOut,
    Show,
    Help,
    Quit,
}

pub fn resolve(command: Command, state: &AppState) -> Result<Action, String> {
    let action = match command {
        Command::SignUp {
            email,
            password,
            confirm,
        } => {
            if password != confirm {
                return Err("Passwords do not match.".to_string());
            }
            Action::SignUp { email, password }
        }
        Command::SignIn { email, password } => Action::SignIn { email, password },
        Command::SignOut => Action::SignOut,
        Command::Show => Action::Show,
        Command::Help => Action::Help,
        Command::Quit => Action::Quit,
        other => Action::Dispatch(event(other, state)?),
    };
    Ok(action)
}

fn event(command: Command, state: &AppState) -> Result<Event, String> {
    let event = match command {
        Command::Go(view) => Event::Navigate(view),
        Command::Open(index) => Event::Navigate(View::Playlist(playlist_at(state, index)?.id.clone())),
        Command::Artist(index) => {
            let track = track_at(state, index)?;
            let artist_id = track
                .artist_id
                .clone()
                .ok_or_else(|| format!("\"{}\" has no artist page", track.name))?;
            Event::Navigate(View::Artist(artist_id))
        }
        Command::Album(index) => {
            let track = track_at(state, index)?;
            let album_id = track
                .album_id
                .clone()
                .ok_or_else(|| format!("\"{}\" has no album page", track.name))?;
            Event::Navigate(View::Album(album_id))
        }
        Command::Search(query) => Event::SubmitSearch(query),
        Command::Type(text) => Event::SearchInput(text),

        Command::Play(index) => {
            let tracks = visible_tracks(state);
            if index >= tracks.len() {
                return Err(no_track(index));
            }
            Event::PlayList {
                tracks: tracks.to_vec(),
                start_index: index,
            }
        }
        Command::Queue(index) => Event::Enqueue(track_at(state, index)?.clone()),
        Command::Next => Event::PlayNext,
        Command::Prev => Event::PlayPrevious,
        Command::Pause => Event::TogglePause,

        Command::Like(index) => Event::ToggleLike(track_at(state, index)?.clone()),
        Command::New(name) => Event::CreatePlaylist(name),
        Command::Rename { playlist, name } => Event::RenamePlaylist {
            playlist_id: playlist_at(state, playlist)?.id.clone(),
            name,
        },
        Command::Delete(index) => Event::DeletePlaylist(playlist_at(state, index)?.id.clone()),
        Command::Add { track, playlist } => Event::AddToPlaylist {
            playlist_id: playlist_at(state, playlist)?.id.clone(),
            track: track_at(state, track)?.clone(),
        },
        Command::Remove(index) => {
            let View::Playlist(playlist_id) = &state.view else {
                return Err("Open a playlist to remove tracks from it.".to_string());
            };
            Event::RemoveFromPlaylist {
                playlist_id: playlist_id.clone(),
                track_id: track_at(state, index)?.id.clone(),
            }
        }
        Command::Dismiss(id) => Event::DismissNotification(id),

        Command::SignUp { .. }
        | Command::SignIn { .. }
        | Command::SignOut
        | Command::Show
        | Command::Help
        | Command::Quit => return Err("Not a view command".to_string()),
    };
    Ok(event)
}

/// Tracks listed by the active view
pub fn visible_tracks(state: &AppState) -> &[Track] {
    if !state.is_signed_in() {
        return &[];
    }
    match view_model::view_model(state).content {
        view_model::Content::Tracks(tracks) => tracks,
        view_model::Content::Search(results) => &results.tracks,
    }
}

fn track_at(state: &AppState, index: usize) -> Result<&Track, String> {
    visible_tracks(state).get(index).ok_or_else(|| no_track(index))
}

fn playlist_at(state: &AppState, index: usize) -> Result<&Playlist, String> {
    state
        .playlists
        .data
        .get(index)
        .ok_or_else(|| format!("No playlist at position {}", index + 1))
}

fn no_track(index: usize) -> String {
    format!("No track at position {}", index + 1)
}
