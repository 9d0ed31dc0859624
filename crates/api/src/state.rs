/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable: the pool is reference-counted internally.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool. Each repository call checks out one
    /// connection and returns it when the call completes.
    pub pool: adboard_db::DbPool,
}
