use axum::extract::{Path, State};
use axum::response::Json;
use serde::{Deserialize, Serialize};

use greenside_core::course::Course;
use greenside_core::error::RecordError;
use greenside_core::game::{Game, GameId};
use greenside_matchplay::{StrokeTable, clamp_input, game_scorecard};

use crate::error::AppError;
use crate::state::AppState;

/// One row of the scorecard table.
#[derive(Debug, Serialize)]
pub struct HoleLine {
    /// 1-based hole number.
    pub number: usize,
    pub par: u8,
    pub hcp: u8,
    /// Stored raw net per player; empty when not entered.
    pub scores: Vec<String>,
    pub points: Vec<i32>,
    /// Whether each player receives a stroke from anyone on this hole.
    pub strokes: Vec<bool>,
}

/// A game's scorecard: the derived points laid out hole by hole.
#[derive(Debug, Serialize)]
pub struct ScorecardView {
    pub game_id: GameId,
    pub course_name: String,
    pub starting_hole: u32,
    pub players: Vec<String>,
    pub holes: Vec<HoleLine>,
    pub total_points: Vec<i32>,
    pub total_net: Vec<i32>,
    /// Index of the points leader, earliest player on ties.
    pub leader: Option<usize>,
}

impl ScorecardView {
    /// Build from a game whose score sheet is laid out for `course`.
    pub fn build(game: &Game, course: &Course) -> Self {
        let card = game_scorecard(game, course);
        let table = StrokeTable::build(&course.holes, &game.strokes_given, game.player_count());
        let holes = course
            .holes
            .iter()
            .enumerate()
            .map(|(h, hole)| HoleLine {
                number: h + 1,
                par: hole.par,
                hcp: hole.difficulty_rank,
                scores: (0..game.player_count())
                    .map(|p| game.score_cell(h, p).unwrap_or_default().to_string())
                    .collect(),
                points: card.hole_points[h].clone(),
                strokes: (0..game.player_count())
                    .map(|p| table.receives_any(h, p))
                    .collect(),
            })
            .collect();
        let leader = card.leader();
        Self {
            game_id: game.id,
            course_name: course.name.clone(),
            starting_hole: game.starting_hole,
            players: game
                .players
                .iter()
                .enumerate()
                .map(|(i, p)| p.display_name(i))
                .collect(),
            holes,
            total_points: card.total_points,
            total_net: card.total_net,
            leader,
        }
    }
}

/// GET /api/v1/games/{id}/scorecard
pub async fn get_scorecard(
    State(state): State<AppState>,
    Path(id): Path<GameId>,
) -> Result<Json<ScorecardView>, AppError> {
    let (game, course) = state.records.read().await.open_game(id)?;
    Ok(Json(ScorecardView::build(&game, &course)))
}

/// Request body for entering a score: the text as typed.
#[derive(Debug, Deserialize)]
pub struct ScoreEntry {
    pub value: String,
}

/// Response for a stored score.
#[derive(Debug, Serialize)]
pub struct ScoreEntryResponse {
    /// The value actually stored after clamping.
    pub stored: i32,
    pub scorecard: ScorecardView,
}

/// PUT /api/v1/games/{id}/scores/{hole}/{player}: clamp the typed value to
/// the hole's bounds, store it and return the refreshed scorecard.
///
/// `hole` and `player` are 0-based indices.
pub async fn put_score(
    State(state): State<AppState>,
    Path((id, hole, player)): Path<(GameId, usize, usize)>,
    Json(body): Json<ScoreEntry>,
) -> Result<Json<ScoreEntryResponse>, AppError> {
    let mut records = state.records.write().await;
    let (mut game, course) = records.open_game(id)?;

    let par = course.par(hole).ok_or(RecordError::HoleOutOfRange {
        hole,
        holes: course.hole_count(),
    })?;
    let stored = clamp_input(&body.value, par);
    game.set_score(hole, player, stored)?;
    records.update_game(game.clone())?;
    drop(records);

    tracing::debug!(game = id, hole, player, typed = %body.value, stored, "Recorded score");
    Ok(Json(ScoreEntryResponse {
        stored,
        scorecard: ScorecardView::build(&game, &course),
    }))
}
