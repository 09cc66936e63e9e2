use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use rand::seq::SliceRandom;
use serde::Deserialize;
use serde_json::{json, Value};
use sqlx::SqlitePool;

use crate::db::queries::questions::{get_questions, get_questions_by_category};
use crate::server::app::AppState;
use crate::server::error::{ApiError, ApiResult};
use crate::telemetry::QUIZ_QUESTION_CNTR;

#[derive(Deserialize)]
struct QuizBody {
    previous_questions: Vec<i64>,
    quiz_category: QuizCategory,
}

/// Category id 0 means "all categories".
#[derive(Deserialize)]
struct QuizCategory {
    id: i64,
}

async fn next_quiz_question(
    State(pool): State<SqlitePool>,
    body: Result<Json<QuizBody>, JsonRejection>,
) -> ApiResult<Json<Value>> {
    let Json(body) = body.map_err(|_| ApiError::Unprocessable)?;

    let selection = if body.quiz_category.id != 0 {
        get_questions_by_category(&pool, body.quiz_category.id).await?
    } else {
        get_questions(&pool).await?
    };
    let candidates: Vec<_> = selection
        .into_iter()
        .filter(|q| !body.previous_questions.contains(&q.id))
        .collect();

    let question = candidates
        .choose(&mut rand::thread_rng())
        .ok_or(ApiError::NotFound)?;

    QUIZ_QUESTION_CNTR
        .with_label_values(&[question.category.to_string().as_str()])
        .inc();

    Ok(Json(json!({
        "success": true,
        "question": question,
    })))
}

pub fn quiz_router(state: AppState) -> Router {
    Router::new()
        .route("/quizzes", post(next_quiz_question))
        .with_state(state)
}
