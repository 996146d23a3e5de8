use sea_orm::DatabaseConnection;
use service::media::MediaStore;

/// Shared by every handler; cloning is cheap (pooled connection handle).
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub media: MediaStore,
}
