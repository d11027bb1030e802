use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;

use greenside_core::course::{Course, CourseId, Hole};
use greenside_core::game::{Game, GameId, StrokeMatrix};
use greenside_core::player::Player;

use crate::error::AppError;
use crate::state::AppState;

/// Longest accepted course or player name.
const MAX_NAME_LEN: usize = 64;

fn check_name(kind: &str, name: &str) -> Result<(), AppError> {
    if name.len() > MAX_NAME_LEN {
        return Err(AppError::BadRequest(format!(
            "{kind} name exceeds {MAX_NAME_LEN} chars"
        )));
    }
    Ok(())
}

/// Request body for creating or replacing a course.
#[derive(Debug, Deserialize)]
pub struct CourseBody {
    pub name: String,
    pub holes: Vec<Hole>,
}

/// GET /api/v1/courses
pub async fn list_courses(State(state): State<AppState>) -> Json<Vec<Course>> {
    Json(state.records.read().await.courses().to_vec())
}

/// POST /api/v1/courses
pub async fn create_course(
    State(state): State<AppState>,
    Json(body): Json<CourseBody>,
) -> Result<(StatusCode, Json<Course>), AppError> {
    check_name("course", &body.name)?;
    let mut records = state.records.write().await;
    let course = Course {
        id: records.next_course_id(),
        name: body.name,
        holes: body.holes,
    };
    let created = records.add_course(course)?.clone();
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/v1/courses/{id}
pub async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<CourseId>,
) -> Result<Json<Course>, AppError> {
    Ok(Json(state.records.read().await.course(id)?.clone()))
}

/// PUT /api/v1/courses/{id}
pub async fn update_course(
    State(state): State<AppState>,
    Path(id): Path<CourseId>,
    Json(body): Json<CourseBody>,
) -> Result<Json<Course>, AppError> {
    check_name("course", &body.name)?;
    let course = Course {
        id,
        name: body.name,
        holes: body.holes,
    };
    state.records.write().await.update_course(course.clone())?;
    tracing::info!(course = id, "Updated course");
    Ok(Json(course))
}

/// DELETE /api/v1/courses/{id}
pub async fn delete_course(
    State(state): State<AppState>,
    Path(id): Path<CourseId>,
) -> Result<StatusCode, AppError> {
    state.records.write().await.delete_course(id)?;
    tracing::info!(course = id, "Deleted course");
    Ok(StatusCode::NO_CONTENT)
}

/// Request body for starting a game.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGameBody {
    pub course_id: CourseId,
    pub players: Vec<Player>,
    #[serde(default = "first_hole")]
    pub starting_hole: u32,
    /// Omitted means nobody gives strokes.
    #[serde(default)]
    pub strokes_given: Option<StrokeMatrix>,
}

fn first_hole() -> u32 {
    1
}

/// GET /api/v1/games
pub async fn list_games(State(state): State<AppState>) -> Json<Vec<Game>> {
    Json(state.records.read().await.games().to_vec())
}

/// POST /api/v1/games: start a game on a stored course.
pub async fn create_game(
    State(state): State<AppState>,
    Json(body): Json<NewGameBody>,
) -> Result<(StatusCode, Json<Game>), AppError> {
    for player in &body.players {
        check_name("player", &player.name)?;
    }
    let mut records = state.records.write().await;
    let strokes_given = body
        .strokes_given
        .unwrap_or_else(|| StrokeMatrix::new(body.players.len()));
    let game = Game {
        id: records.next_game_id(),
        course_id: body.course_id,
        players: body.players,
        starting_hole: body.starting_hole,
        strokes_given,
        scores: Vec::new(),
    };
    let created = records.add_game(game)?.clone();
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/v1/games/{id}
pub async fn get_game(
    State(state): State<AppState>,
    Path(id): Path<GameId>,
) -> Result<Json<Game>, AppError> {
    Ok(Json(state.records.read().await.game(id)?.clone()))
}

/// DELETE /api/v1/games/{id}
pub async fn delete_game(
    State(state): State<AppState>,
    Path(id): Path<GameId>,
) -> Result<StatusCode, AppError> {
    state.records.write().await.delete_game(id)?;
    tracing::info!(game = id, "Deleted game");
    Ok(StatusCode::NO_CONTENT)
}
