use crate::config::Config;

/// Shared application state injected into route handlers via Axum extractors.
/// The parser core is pure and stateless, so there is nothing else to share.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}
