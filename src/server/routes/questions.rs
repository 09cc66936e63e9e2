use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    routing::{delete, get},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use sqlx::SqlitePool;

use crate::db::queries::categories::get_all_categories;
use crate::db::queries::questions::{
    count_questions, create_question, delete_question, get_questions, search_questions,
};
use crate::server::app::AppState;
use crate::server::error::{ApiError, ApiResult};

use super::categories::category_map;
use super::{paginate, Pagination};

/// POST /questions doubles as search and create; `searchTerm` wins
/// when both shapes are present.
#[derive(Deserialize)]
#[serde(untagged)]
enum QuestionsBody {
    Search {
        #[serde(rename = "searchTerm")]
        search_term: String,
    },
    Create {
        question: String,
        answer: String,
        category: i64,
        difficulty: i64,
    },
}

async fn list_questions(
    State(pool): State<SqlitePool>,
    pagination: Result<Query<Pagination>, QueryRejection>,
) -> ApiResult<Json<Value>> {
    let pagination = pagination.map(|Query(p)| p).unwrap_or_default();
    let selection = get_questions(&pool).await?;
    let total_questions = selection.len();
    let questions = paginate(selection, pagination.page);
    let categories = get_all_categories(&pool).await?;
    if questions.is_empty() {
        return Err(ApiError::NotFound);
    }

    Ok(Json(json!({
        "success": true,
        "questions": questions,
        "total_questions": total_questions,
        "current_category": "Placeholder",
        "categories": category_map(categories),
    })))
}

async fn create_or_search_question(
    State(pool): State<SqlitePool>,
    pagination: Result<Query<Pagination>, QueryRejection>,
    body: Result<Json<QuestionsBody>, JsonRejection>,
) -> ApiResult<Json<Value>> {
    let pagination = pagination.map(|Query(p)| p).unwrap_or_default();
    let Json(body) = body.map_err(|_| ApiError::Unprocessable)?;

    match body {
        QuestionsBody::Search { search_term } => {
            let selection = search_questions(&pool, &search_term).await?;
            let total_questions = selection.len();
            let questions = paginate(selection, pagination.page);

            Ok(Json(json!({
                "success": true,
                "questions": questions,
                "total_questions": total_questions,
            })))
        }
        QuestionsBody::Create {
            question,
            answer,
            category,
            difficulty,
        } => {
            let id = create_question(&pool, &question, &answer, category, difficulty).await?;
            let total_questions = count_questions(&pool).await?;

            Ok(Json(json!({
                "success": true,
                "created": id,
                "total_questions": total_questions,
            })))
        }
    }
}

async fn remove_question(
    State(pool): State<SqlitePool>,
    question_id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<Value>> {
    let Path(question_id) = question_id.map_err(|_| ApiError::NotFound)?;
    let removed = delete_question(&pool, question_id).await?;
    if removed == 0 {
        return Err(ApiError::NotFound);
    }
    let total_questions = count_questions(&pool).await?;

    Ok(Json(json!({
        "success": true,
        "deleted": question_id,
        "total_questions": total_questions,
    })))
}

pub fn questions_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/questions",
            get(list_questions).post(create_or_search_question),
        )
        .route("/questions/{question_id}", delete(remove_question))
        .with_state(state)
}
