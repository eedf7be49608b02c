pub mod config;
pub mod error;
pub mod observability;
pub mod routes;

pub use routes::AppState;

/// Create the app router against a data directory
///
/// Loads the embedded recipe catalog and all persisted state, then builds
/// the Axum router with every route configured - useful for integration
/// testing without starting the full server.
pub fn create_app(data_dir: &std::path::Path) -> anyhow::Result<axum::Router> {
    let catalog = fridgeplan_recipe::RecipeCatalog::embedded()?;
    let state = AppState::load(data_dir, catalog)?;
    Ok(routes::router(state))
}
