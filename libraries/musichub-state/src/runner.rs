//! Effect runner
//!
//! Executes [`Effect`]s against the injected services on the tokio runtime
//! and reports each outcome back as one [`Event`].

use crate::effect::{Effect, MutationOp, MutationOutput};
use crate::event::Event;
use musichub_catalog::search_all;
use musichub_core::{CatalogService, CollectionStore, HubError};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Sender half of the controller's event channel
pub type EventSender = mpsc::UnboundedSender<Event>;

pub struct EffectRunner {
    catalog: Arc<dyn CatalogService>,
    store: Arc<dyn CollectionStore>,
    events: EventSender,
}

impl EffectRunner {
    pub fn new(
        catalog: Arc<dyn CatalogService>,
        store: Arc<dyn CollectionStore>,
        events: EventSender,
    ) -> Self {
        Self {
            catalog,
            store,
            events,
        }
    }

    /// Run `effect` in the background; its result event is sent to the controller
    pub fn spawn(&self, effect: Effect) -> JoinHandle<()> {
        let catalog = Arc::clone(&self.catalog);
        let store = Arc::clone(&self.store);
        let events = self.events.clone();

        tokio::spawn(async move {
            let event = execute(catalog.as_ref(), store.as_ref(), effect).await;
            if events.send(event).is_err() {
                debug!("Controller dropped; discarding effect result");
            }
        })
    }
}

/// Execute one effect and produce its result event
pub async fn execute(
    catalog: &dyn CatalogService,
    store: &dyn CollectionStore,
    effect: Effect,
) -> Event {
    match effect {
        Effect::FetchPopular { limit, token } => Event::PopularLoaded {
            token,
            result: catalog.fetch_popular(limit).await.map_err(message),
        },
        Effect::FetchLiked { user_id, token } => Event::LikedLoaded {
            token,
            result: store.liked_tracks(&user_id).await.map_err(message),
        },
        Effect::FetchPlaylistTracks { playlist_id, token } => Event::PlaylistTracksLoaded {
            token,
            result: store.playlist_tracks(&playlist_id).await.map_err(message),
        },
        Effect::FetchArtistTracks {
            artist_id,
            limit,
            token,
        } => Event::DetailLoaded {
            token,
            result: catalog
                .tracks_by_artist(&artist_id, limit)
                .await
                .map_err(message),
        },
        Effect::FetchAlbumTracks {
            album_id,
            limit,
            token,
        } => Event::DetailLoaded {
            token,
            result: catalog
                .tracks_by_album(&album_id, limit)
                .await
                .map_err(message),
        },
        Effect::Search {
            query,
            limits,
            token,
        } => Event::SearchCompleted {
            token,
            result: search_all(catalog, &query, limits).await.map_err(message),
        },
        Effect::LoadPlaylists { user_id, token } => Event::PlaylistsLoaded {
            token,
            result: store.user_playlists(&user_id).await.map_err(message),
        },
        Effect::CheckLiked {
            user_id,
            track_id,
            token,
        } => {
            // A failed check reads as "not liked"
            let liked = store
                .is_track_liked(&user_id, &track_id)
                .await
                .unwrap_or_else(|e| {
                    warn!(track_id = %track_id, error = %e, "Liked status check failed");
                    false
                });
            Event::LikeStatusLoaded {
                token,
                track_id,
                liked,
            }
        }
        Effect::Persist { mutation, op } => Event::MutationSettled {
            id: mutation,
            result: persist(store, op).await.map_err(message),
        },
    }
}

async fn persist(store: &dyn CollectionStore, op: MutationOp) -> musichub_core::Result<MutationOutput> {
    match op {
        MutationOp::Like { user_id, track } => store.like_track(&user_id, &track).await?,
        MutationOp::Unlike { user_id, track_id } => store.unlike_track(&user_id, &track_id).await?,
        MutationOp::CreatePlaylist { user_id, name } => {
            let playlist = store.create_playlist(&user_id, &name).await?;
            return Ok(MutationOutput::Created(playlist));
        }
        MutationOp::RenamePlaylist { playlist_id, name } => {
            store.rename_playlist(&playlist_id, &name).await?;
        }
        MutationOp::DeletePlaylist { playlist_id } => store.delete_playlist(&playlist_id).await?,
        MutationOp::AddTrack { playlist_id, track } => {
            store.add_track_to_playlist(&playlist_id, &track).await?;
        }
        MutationOp::RemoveTrack {
            playlist_id,
            track_id,
        } => {
            store
                .remove_track_from_playlist(&playlist_id, &track_id)
                .await?;
        }
    }
    Ok(MutationOutput::Done)
}

fn message(err: HubError) -> String {
    err.to_string()
}
