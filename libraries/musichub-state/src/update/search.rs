use super::navigation;
use crate::config::StateConfig;
use crate::effect::Effect;
use crate::state::AppState;
use crate::view::View;

pub(super) fn input(state: &mut AppState, raw: String) -> Vec<Effect> {
    if state.is_signed_in() && state.view == View::Search {
        state.search.raw_query = raw;
    }
    Vec::new()
}

/// The debounced input changed; only acted on while Search is showing
pub(super) fn settled(state: &mut AppState, query: &str, config: &StateConfig) -> Vec<Effect> {
    if !state.is_signed_in() || state.view != View::Search {
        return Vec::new();
    }
    run(state, query, config)
}

pub(super) fn submit(state: &mut AppState, query: String, config: &StateConfig) -> Vec<Effect> {
    if !state.is_signed_in() {
        return Vec::new();
    }

    let mut effects = Vec::new();
    if state.view != View::Search {
        effects.extend(navigation::navigate(state, View::Search, config));
    }
    effects.extend(run(state, &query, config));
    state.search.raw_query = query;
    effects
}

/// Issue a search for `query`, superseding any search in flight
///
/// A blank query clears the results instead.
fn run(state: &mut AppState, query: &str, config: &StateConfig) -> Vec<Effect> {
    let query = query.trim();
    if query.is_empty() {
        state.search.submitted_query.clear();
        state.search.results.reset();
        return Vec::new();
    }

    state.search.submitted_query = query.to_string();
    let token = state.issue_token();
    state.search.results.begin(token);
    vec![Effect::Search {
        query: query.to_string(),
        limits: config.search_limits,
        token,
    }]
}
