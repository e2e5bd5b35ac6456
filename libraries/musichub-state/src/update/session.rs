use super::navigation;
use crate::config::StateConfig;
use crate::effect::Effect;
use crate::state::AppState;
use musichub_core::AuthState;
use tracing::info;

/// Session transitions
///
/// Signing out (or switching user) wipes everything user-specific. Signing
/// in loads the sidebar playlists and enters the current view.
pub(super) fn auth_changed(
    state: &mut AppState,
    auth: AuthState,
    config: &StateConfig,
) -> Vec<Effect> {
    if !auth.resolved {
        return Vec::new();
    }
    state.auth_ready = true;

    if auth.session == state.session {
        return Vec::new();
    }

    if state.is_signed_in() {
        info!("Session ended; clearing user data");
        state.clear_session_data();
    }
    state.session = auth.session;

    let Some(user_id) = state.session.user_id().cloned() else {
        return Vec::new();
    };
    info!(user_id = %user_id, "Session started");

    let token = state.issue_token();
    state.playlists.begin(token);
    let mut effects = vec![Effect::LoadPlaylists { user_id, token }];
    effects.extend(navigation::enter(state, config));
    effects
}
