//! Shape and invariant checks applied where records enter the system.
//!
//! Scoring code trusts what it is handed; these checks run when a record is
//! created or opened so that malformed data is rejected before it is scored.

use crate::course::Course;
use crate::error::RecordError;
use crate::game::Game;

/// Upper bounds on record sizes accepted from callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub max_players: usize,
    pub max_holes: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_players: 8,
            max_holes: 36,
        }
    }
}

/// Check a course before it is stored.
pub fn validate_course(course: &Course, limits: &Limits) -> Result<(), RecordError> {
    if course.holes.is_empty() {
        return Err(RecordError::NoHoles);
    }
    if course.holes.len() > limits.max_holes {
        return Err(RecordError::TooManyHoles {
            holes: course.holes.len(),
            max: limits.max_holes,
        });
    }
    if let Some((hole, h)) = course.holes.iter().enumerate().find(|(_, h)| h.par == 0) {
        return Err(RecordError::InvalidPar { hole, par: h.par });
    }
    let dupes = duplicate_ranks(course);
    if !dupes.is_empty() {
        tracing::warn!(
            course = course.id,
            ranks = ?dupes,
            "course repeats difficulty ranks; tied holes take strokes in course order"
        );
    }
    Ok(())
}

/// Difficulty ranks that appear on more than one hole, ascending.
pub fn duplicate_ranks(course: &Course) -> Vec<u8> {
    let mut ranks: Vec<u8> = course.holes.iter().map(|h| h.difficulty_rank).collect();
    ranks.sort_unstable();
    let mut dupes: Vec<u8> = ranks
        .windows(2)
        .filter(|w| w[0] == w[1])
        .map(|w| w[0])
        .collect();
    dupes.dedup();
    dupes
}

/// Full check for a game being started: structure plus the one-way stroke rule.
pub fn validate_new_game(game: &Game, course: &Course, limits: &Limits) -> Result<(), RecordError> {
    if game.players.len() > limits.max_players {
        return Err(RecordError::TooManyPlayers {
            players: game.players.len(),
            max: limits.max_players,
        });
    }
    check_game_shape(game, course)?;

    for (giver, row) in game.strokes_given.rows().iter().enumerate() {
        if let Some(receiver) = row.iter().position(|&s| s < 0) {
            return Err(RecordError::NegativeStrokes { giver, receiver });
        }
    }
    if let Some(&(first, second)) = game.strokes_given.two_way_pairs().first() {
        return Err(RecordError::TwoWayStrokes { first, second });
    }
    if game.starting_hole == 0 || game.starting_hole as usize > course.hole_count() {
        return Err(RecordError::StartingHoleOutOfRange {
            starting_hole: game.starting_hole,
            holes: course.hole_count(),
        });
    }
    Ok(())
}

/// Structural check for a game about to be scored against `course`.
///
/// Two-way stroke pairs are reported but tolerated: scoring honors each
/// direction independently.
pub fn check_game_shape(game: &Game, course: &Course) -> Result<(), RecordError> {
    let n = game.player_count();
    if n == 0 {
        return Err(RecordError::NoPlayers);
    }
    if !game.strokes_given.is_square(n) {
        return Err(RecordError::StrokeMatrixShape { players: n });
    }
    if let Some(player) = (0..n).find(|&i| game.strokes_given.rows()[i][i] != 0) {
        return Err(RecordError::SelfStrokes { player });
    }
    if game.has_score_sheet()
        && (game.scores.len() != course.hole_count() || game.scores.iter().any(|r| r.len() != n))
    {
        return Err(RecordError::ScoreSheetShape {
            holes: course.hole_count(),
            players: n,
        });
    }
    let two_way = game.strokes_given.two_way_pairs();
    if !two_way.is_empty() {
        tracing::warn!(game = game.id, pairs = ?two_way, "stroke matrix gives strokes both ways");
    }
    Ok(())
}
