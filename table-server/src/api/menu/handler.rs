//! Menu API Handlers
//!
//! Read-only views over the catalog collaborator. The engine itself never
//! lists the menu — it only resolves ids — so these handlers are purely
//! presentation support.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::services::catalog;
use shared::models::MenuItem;

#[derive(Debug, Default, Deserialize)]
pub struct MenuQuery {
    #[serde(default)]
    pub keyword: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

/// GET /api/menu - メニュー一覧（キーワード・カテゴリ絞り込み）
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<MenuQuery>,
) -> Json<Vec<MenuItem>> {
    let items = state.catalog.items();
    let filtered = catalog::filter_items(
        &items,
        query.keyword.as_deref().unwrap_or(""),
        query.category.as_deref().unwrap_or(""),
    );
    Json(filtered)
}

/// GET /api/menu/categories - カテゴリ一覧
pub async fn categories(State(state): State<ServerState>) -> Json<Vec<String>> {
    Json(catalog::categories(&state.catalog.items()))
}
