//! Aggregated search across tracks, artists and albums.

use musichub_core::{CatalogService, HubError, Result, SearchLimits, SearchResults};
use std::fmt::Display;
use tracing::{error, warn};

/// Search all three catalog categories concurrently.
///
/// A failing category is logged and contributes an empty list. The call only
/// fails when every category fails. A blank query returns empty results
/// without touching the catalog.
pub async fn search_all<C>(catalog: &C, query: &str, limits: SearchLimits) -> Result<SearchResults>
where
    C: CatalogService + ?Sized,
{
    let query = query.trim();
    if query.is_empty() {
        return Ok(SearchResults::default());
    }

    let (tracks, artists, albums) = tokio::join!(
        catalog.search_tracks(query, limits.tracks),
        catalog.search_artists(query, limits.artists),
        catalog.search_albums(query, limits.albums),
    );

    if tracks.is_err() && artists.is_err() && albums.is_err() {
        error!(query, "All search requests failed");
        return Err(HubError::Catalog(format!(
            "All search requests failed for query \"{query}\""
        )));
    }

    Ok(SearchResults {
        tracks: settle("tracks", query, tracks),
        artists: settle("artists", query, artists),
        albums: settle("albums", query, albums),
    })
}

fn settle<T, E: Display>(
    category: &str,
    query: &str,
    result: std::result::Result<Vec<T>, E>,
) -> Vec<T> {
    result.unwrap_or_else(|err| {
        warn!(category, query, error = %err, "Search category failed");
        Vec::new()
    })
}
