use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of the add/remove favorite endpoints.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct FavoriteRequest {
    pub user_id: i32,
}
