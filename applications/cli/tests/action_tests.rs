use musichub_cli::{resolve, Action, Command};
use musichub_core::{
    AlbumId, ArtistId, AuthState, Playlist, PlaylistId, Session, Track, TrackId, UserId,
};
use musichub_state::{update, AppState, Effect, Event, StateConfig, View};

fn track(id: &str) -> Track {
    Track::new(TrackId::new(id), format!("Track {id}"), format!("https://cdn/{id}.mp3"))
}

/// Signed in, with two home tracks and one playlist loaded
fn browsing() -> AppState {
    let config = StateConfig::default();
    let mut state = AppState::new();
    let effects = update(
        &mut state,
        Event::AuthChanged(AuthState::resolved(Session::Authenticated(UserId::new("u1")))),
        &config,
    );

    for effect in effects {
        let event = match effect {
            Effect::LoadPlaylists { token, .. } => Event::PlaylistsLoaded {
                token,
                result: Ok(vec![Playlist::with_id(
                    PlaylistId::new("p1"),
                    UserId::new("u1"),
                    "Mix",
                )]),
            },
            Effect::FetchPopular { token, .. } => Event::PopularLoaded {
                token,
                result: Ok(vec![
                    track("1").with_artist("Ikson"),
                    Track {
                        artist_id: Some(ArtistId::new("a2")),
                        album_id: Some(AlbumId::new("b2")),
                        ..track("2")
                    },
                ]),
            },
            other => panic!("unexpected effect {other:?}"),
        };
        update(&mut state, event, &config);
    }
    state
}

#[test]
fn play_uses_the_visible_list() {
    let state = browsing();

    let action = resolve(Command::Play(1), &state).unwrap();

    let Action::Dispatch(Event::PlayList {
        tracks,
        start_index,
    }) = action
    else {
        panic!("expected PlayList, got {action:?}");
    };
    assert_eq!(tracks.len(), 2);
    assert_eq!(start_index, 1);
}

#[test]
fn positions_out_of_range_are_reported() {
    let state = browsing();

    assert_eq!(
        resolve(Command::Queue(5), &state),
        Err("No track at position 6".to_string())
    );
    assert_eq!(
        resolve(Command::Delete(3), &state),
        Err("No playlist at position 4".to_string())
    );
}

#[test]
fn detail_pages_need_ids() {
    let state = browsing();

    assert_eq!(
        resolve(Command::Artist(1), &state),
        Ok(Action::Dispatch(Event::Navigate(View::Artist(ArtistId::new("a2")))))
    );
    assert_eq!(
        resolve(Command::Album(1), &state),
        Ok(Action::Dispatch(Event::Navigate(View::Album(AlbumId::new("b2")))))
    );
    assert!(resolve(Command::Artist(0), &state).is_err());
}

#[test]
fn add_targets_sidebar_playlist() {
    let state = browsing();

    assert_eq!(
        resolve(
            Command::Add {
                track: 0,
                playlist: 0
            },
            &state
        ),
        Ok(Action::Dispatch(Event::AddToPlaylist {
            playlist_id: PlaylistId::new("p1"),
            track: track("1"),
        }))
    );
}

#[test]
fn remove_needs_an_open_playlist() {
    let state = browsing();
    assert!(resolve(Command::Remove(0), &state).is_err());
}

#[test]
fn signup_checks_confirmation() {
    let state = AppState::new();

    assert_eq!(
        resolve(
            Command::SignUp {
                email: "a@b.co".into(),
                password: "secret1".into(),
                confirm: "secret2".into(),
            },
            &state
        ),
        Err("Passwords do not match.".to_string())
    );
    assert_eq!(
        resolve(
            Command::SignUp {
                email: "a@b.co".into(),
                password: "secret1".into(),
                confirm: "secret1".into(),
            },
            &state
        ),
        Ok(Action::SignUp {
            email: "a@b.co".into(),
            password: "secret1".into(),
        })
    );
}
