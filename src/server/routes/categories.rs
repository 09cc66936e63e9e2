use std::collections::BTreeMap;

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use sqlx::SqlitePool;

use crate::db::queries::categories::get_all_categories;
use crate::db::queries::questions::get_questions_by_category;
use crate::db::Category;
use crate::server::app::AppState;
use crate::server::error::{ApiError, ApiResult};

use super::{paginate, Pagination};

/// `{id -> type}` mapping; JSON object keys come out as stringified
/// ids in ascending order.
pub(super) fn category_map(categories: Vec<Category>) -> BTreeMap<i64, String> {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}

async fn get_categories(State(pool): State<SqlitePool>) -> ApiResult<Json<Value>> {
    let categories = get_all_categories(&pool).await?;
    if categories.is_empty() {
        return Err(ApiError::NotFound);
    }
    let total_categories = categories.len();

    Ok(Json(json!({
        "success": true,
        "categories": category_map(categories),
        "total_categories": total_categories,
    })))
}

async fn questions_by_category(
    State(pool): State<SqlitePool>,
    category_id: Result<Path<i64>, PathRejection>,
    pagination: Result<Query<Pagination>, QueryRejection>,
) -> ApiResult<Json<Value>> {
    // a non-numeric id never matches a stored row
    let Path(category_id) = category_id.map_err(|_| ApiError::NotFound)?;
    let pagination = pagination.map(|Query(p)| p).unwrap_or_default();
    let selection = get_questions_by_category(&pool, category_id).await?;
    let total_questions = selection.len();
    let questions = paginate(selection, pagination.page);
    if questions.is_empty() {
        return Err(ApiError::NotFound);
    }

    Ok(Json(json!({
        "success": true,
        "questions": questions,
        "total_questions": total_questions,
    })))
}

pub fn category_router(state: AppState) -> Router {
    Router::new()
        .route("/categories", get(get_categories))
        .route("/categories/{category_id}/questions", get(questions_by_category))
        .with_state(state)
}
