//! Effect execution against mocked services.

use async_trait::async_trait;
use mockall::mock;
use mockall::predicate::eq;
use musichub_core::{
    Album, AlbumId, Artist, ArtistId, CatalogService, CollectionStore, HubError, Playlist,
    PlaylistId, Result, Track, TrackId, UserId,
};
use musichub_state::{execute, AppState, Effect, Event, MutationOp, MutationOutput};

mock! {
    pub Catalog {}

    #[async_trait]
    impl CatalogService for Catalog {
        async fn fetch_popular(&self, limit: u32) -> Result<Vec<Track>>;
        async fn search_tracks(&self, query: &str, limit: u32) -> Result<Vec<Track>>;
        async fn search_artists(&self, query: &str, limit: u32) -> Result<Vec<Artist>>;
        async fn search_albums(&self, query: &str, limit: u32) -> Result<Vec<Album>>;
        async fn tracks_by_artist(&self, artist_id: &ArtistId, limit: u32) -> Result<Vec<Track>>;
        async fn tracks_by_album(&self, album_id: &AlbumId, limit: u32) -> Result<Vec<Track>>;
    }
}

mock! {
    pub Store {}

    #[async_trait]
    impl CollectionStore for Store {
        async fn like_track(&self, user_id: &UserId, track: &Track) -> Result<()>;
        async fn unlike_track(&self, user_id: &UserId, track_id: &TrackId) -> Result<()>;
        async fn is_track_liked(&self, user_id: &UserId, track_id: &TrackId) -> Result<bool>;
        async fn liked_tracks(&self, user_id: &UserId) -> Result<Vec<Track>>;
        async fn create_playlist(&self, user_id: &UserId, name: &str) -> Result<Playlist>;
        async fn user_playlists(&self, user_id: &UserId) -> Result<Vec<Playlist>>;
        async fn rename_playlist(&self, playlist_id: &PlaylistId, name: &str) -> Result<()>;
        async fn delete_playlist(&self, playlist_id: &PlaylistId) -> Result<()>;
        async fn add_track_to_playlist(&self, playlist_id: &PlaylistId, track: &Track) -> Result<()>;
        async fn remove_track_from_playlist(
            &self,
            playlist_id: &PlaylistId,
            track_id: &TrackId,
        ) -> Result<()>;
        async fn playlist_tracks(&self, playlist_id: &PlaylistId) -> Result<Vec<Track>>;
    }
}

fn token() -> musichub_state::RequestToken {
    AppState::new().issue_token()
}

fn user() -> UserId {
    UserId::new("user-1")
}

#[tokio::test]
async fn fetch_error_becomes_message() {
    let mut catalog = MockCatalog::new();
    catalog
        .expect_fetch_popular()
        .with(eq(20))
        .returning(|_| Err(HubError::Catalog("HTTP error! status: 503".into())));
    let store = MockStore::new();

    let token = token();
    let event = execute(&catalog, &store, Effect::FetchPopular { limit: 20, token }).await;

    assert_eq!(
        event,
        Event::PopularLoaded {
            token,
            result: Err("HTTP error! status: 503".into()),
        }
    );
}

#[tokio::test]
async fn failed_liked_check_reads_as_not_liked() {
    let catalog = MockCatalog::new();
    let mut store = MockStore::new();
    store
        .expect_is_track_liked()
        .returning(|_, _| Err(HubError::Storage("database is locked".into())));

    let token = token();
    let event = execute(
        &catalog,
        &store,
        Effect::CheckLiked {
            user_id: user(),
            track_id: TrackId::new("1"),
            token,
        },
    )
    .await;

    assert_eq!(
        event,
        Event::LikeStatusLoaded {
            token,
            track_id: TrackId::new("1"),
            liked: false,
        }
    );
}

#[tokio::test]
async fn create_returns_the_stored_playlist() {
    let catalog = MockCatalog::new();
    let mut store = MockStore::new();
    store
        .expect_create_playlist()
        .withf(|_, name| name == "Focus")
        .returning(|user_id, name| Ok(Playlist::new(user_id.clone(), name)));

    let mut state = AppState::new();
    let effects = musichub_state::update(
        &mut state,
        Event::AuthChanged(musichub_core::AuthState::resolved(
            musichub_core::Session::Authenticated(user()),
        )),
        &Default::default(),
    );
    assert!(!effects.is_empty());
    let effects = musichub_state::update(
        &mut state,
        Event::CreatePlaylist("Focus".into()),
        &Default::default(),
    );
    let [effect] = effects.as_slice() else {
        panic!("expected one effect, got {effects:?}");
    };

    let Event::MutationSettled { result, .. } = execute(&catalog, &store, effect.clone()).await
    else {
        panic!("expected a settled mutation");
    };
    assert!(matches!(result, Ok(MutationOutput::Created(p)) if p.name == "Focus"));
}

#[tokio::test]
async fn unlike_dispatches_to_store() {
    let catalog = MockCatalog::new();
    let mut store = MockStore::new();
    store
        .expect_unlike_track()
        .withf(|user_id, track_id| *user_id == user() && track_id.as_str() == "1")
        .times(1)
        .returning(|_, _| Ok(()));

    let mut state = AppState::new();
    let _ = musichub_state::update(
        &mut state,
        Event::AuthChanged(musichub_core::AuthState::resolved(
            musichub_core::Session::Authenticated(user()),
        )),
        &Default::default(),
    );
    let effects = musichub_state::update(&mut state, Event::ObserveLike(TrackId::new("1")), &Default::default());
    let Some(Effect::CheckLiked { token, .. }) = effects.first().cloned() else {
        panic!("expected a liked check");
    };
    musichub_state::update(
        &mut state,
        Event::LikeStatusLoaded {
            token,
            track_id: TrackId::new("1"),
            liked: true,
        },
        &Default::default(),
    );

    let effects = musichub_state::update(
        &mut state,
        Event::ToggleLike(Track::new(TrackId::new("1"), "One", "https://cdn/1.mp3")),
        &Default::default(),
    );
    let Some(Effect::Persist { op, .. }) = effects.first().cloned() else {
        panic!("expected a persist effect");
    };
    assert!(matches!(op, MutationOp::Unlike { .. }));

    let event = execute(&catalog, &store, effects[0].clone()).await;
    assert!(matches!(
        event,
        Event::MutationSettled {
            result: Ok(MutationOutput::Done),
            ..
        }
    ));
}
