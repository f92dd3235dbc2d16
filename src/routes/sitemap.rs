use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use crate::routes::doc::ApiDoc;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Endpoint {
    pub method: String,
    pub path: String,
}

/// Every documented endpoint, sorted by path then method.
pub fn endpoints() -> Vec<Endpoint> {
    let doc = ApiDoc::openapi();
    let mut endpoints = Vec::new();
    for (path, item) in doc.paths.paths.iter() {
        let operations = [
            ("GET", item.get.is_some()),
            ("POST", item.post.is_some()),
            ("PUT", item.put.is_some()),
            ("PATCH", item.patch.is_some()),
            ("DELETE", item.delete.is_some()),
        ];
        for (method, present) in operations {
            if present {
                endpoints.push(Endpoint {
                    method: method.to_string(),
                    path: path.clone(),
                });
            }
        }
    }
    endpoints.sort_by(|a, b| a.path.cmp(&b.path).then_with(|| a.method.cmp(&b.method)));
    endpoints
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Available endpoints", body = Vec<Endpoint>)
    ),
    tag = "Sitemap"
)]
pub async fn sitemap() -> Json<Vec<Endpoint>> {
    Json(endpoints())
}
