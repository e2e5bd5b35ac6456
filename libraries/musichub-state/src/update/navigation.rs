use crate::config::StateConfig;
use crate::effect::Effect;
use crate::state::{AppState, DetailFocus};
use crate::view::View;
use tracing::debug;

/// Switch views and run the new view's on-enter load
///
/// Leaving Search clears the query and results; leaving the artist/album
/// pages clears their scratch data. Re-entering the active view reloads it.
pub(crate) fn navigate(state: &mut AppState, target: View, config: &StateConfig) -> Vec<Effect> {
    if !state.is_signed_in() {
        debug!(view = %target, "Ignoring navigation while signed out");
        return Vec::new();
    }

    if state.view == View::Search && target != View::Search {
        state.search.clear();
    }
    if !target.is_detail() {
        state.detail.clear();
    }

    debug!(from = %state.view, to = %target, "Navigating");
    state.view = target;
    enter(state, config)
}

/// On-enter load for the current view
pub(super) fn enter(state: &mut AppState, config: &StateConfig) -> Vec<Effect> {
    let Some(user_id) = state.session.user_id().cloned() else {
        return Vec::new();
    };

    match state.view.clone() {
        View::Home => {
            let token = state.issue_token();
            state.home.begin(token);
            vec![Effect::FetchPopular {
                limit: config.popular_limit,
                token,
            }]
        }
        View::Library => {
            let token = state.issue_token();
            state.library.begin(token);
            vec![Effect::FetchLiked { user_id, token }]
        }
        View::Playlist(playlist_id) => {
            let page = &mut state.playlist_page;
            if !page.shows(&playlist_id) {
                page.tracks.data.clear();
                page.playlist_id = Some(playlist_id.clone());
            }
            let token = state.issue_token();
            state.playlist_page.tracks.begin(token);
            vec![Effect::FetchPlaylistTracks { playlist_id, token }]
        }
        View::Artist(artist_id) => {
            state.detail.clear();
            state.detail.focus = Some(DetailFocus::Artist(artist_id.clone()));
            let token = state.issue_token();
            state.detail.tracks.begin(token);
            vec![Effect::FetchArtistTracks {
                artist_id,
                limit: config.detail_limit,
                token,
            }]
        }
        View::Album(album_id) => {
            state.detail.clear();
            state.detail.focus = Some(DetailFocus::Album(album_id.clone()));
            let token = state.issue_token();
            state.detail.tracks.begin(token);
            vec![Effect::FetchAlbumTracks {
                album_id,
                limit: config.detail_limit,
                token,
            }]
        }
        View::Search => Vec::new(),
    }
}
