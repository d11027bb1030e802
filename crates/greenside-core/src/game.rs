use serde::{Deserialize, Serialize};

use crate::course::CourseId;
use crate::error::RecordError;
use crate::player::Player;

/// Unique identifier for a game record.
pub type GameId = u64;

/// Handicap strokes given between players, indexed `[giver][receiver]`.
///
/// Strokes are meant to flow one way per pair: when `[i][j] > 0` the reverse
/// entry `[j][i]` is zero. Readers tolerate ragged or negative data and treat
/// any missing or negative entry as zero strokes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StrokeMatrix(Vec<Vec<i32>>);

impl StrokeMatrix {
    /// An all-zero matrix for `players` players.
    pub fn new(players: usize) -> Self {
        Self(vec![vec![0; players]; players])
    }

    pub fn from_rows(rows: Vec<Vec<i32>>) -> Self {
        Self(rows)
    }

    pub fn rows(&self) -> &[Vec<i32>] {
        &self.0
    }

    /// Number of giver rows.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Strokes `giver` gives `receiver`. Missing and negative entries read as 0.
    pub fn strokes(&self, giver: usize, receiver: usize) -> u32 {
        self.0
            .get(giver)
            .and_then(|row| row.get(receiver))
            .copied()
            .map_or(0, |n| n.max(0).unsigned_abs())
    }

    /// Set `[giver][receiver]` the way the handicap editor does: negatives
    /// become 0 and a positive count clears the reverse direction.
    ///
    /// Out-of-range indices and the diagonal are ignored.
    pub fn give(&mut self, giver: usize, receiver: usize, strokes: i32) {
        let n = self.0.len();
        if giver == receiver || giver >= n || receiver >= n {
            return;
        }
        let strokes = strokes.max(0);
        if strokes > 0 && let Some(cell) = self.0[receiver].get_mut(giver) {
            *cell = 0;
        }
        if let Some(cell) = self.0[giver].get_mut(receiver) {
            *cell = strokes;
        }
    }

    /// Resize to `players × players`, keeping entries whose indices survive.
    pub fn resize(&mut self, players: usize) {
        let resized = (0..players)
            .map(|i| {
                (0..players)
                    .map(|j| self.0.get(i).and_then(|r| r.get(j)).copied().unwrap_or(0))
                    .collect()
            })
            .collect();
        self.0 = resized;
    }

    /// True if the matrix has exactly `players` rows of `players` entries.
    pub fn is_square(&self, players: usize) -> bool {
        self.0.len() == players && self.0.iter().all(|row| row.len() == players)
    }

    /// Unordered pairs `(i, j)`, `i < j`, where strokes flow in both directions.
    pub fn two_way_pairs(&self) -> Vec<(usize, usize)> {
        let n = self.0.len();
        let mut pairs = Vec::new();
        for i in 0..n {
            for j in (i + 1)..n {
                if self.strokes(i, j) > 0 && self.strokes(j, i) > 0 {
                    pairs.push((i, j));
                }
            }
        }
        pairs
    }
}

/// A persisted game: players, handicap setup and the raw score sheet.
///
/// `scores` is indexed `[hole][player]`; each cell holds an integer net score
/// relative to par as text, or an empty string when not yet entered. A game
/// that has never been opened carries an empty sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: GameId,
    pub course_id: CourseId,
    pub players: Vec<Player>,
    pub starting_hole: u32,
    pub strokes_given: StrokeMatrix,
    #[serde(default)]
    pub scores: Vec<Vec<String>>,
}

impl Game {
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Whether the score sheet has been laid out yet.
    pub fn has_score_sheet(&self) -> bool {
        !self.scores.is_empty()
    }

    /// Lay out an empty `hole_count × players` sheet if none exists.
    /// Returns true when a sheet was created.
    pub fn ensure_score_sheet(&mut self, hole_count: usize) -> bool {
        if self.has_score_sheet() {
            return false;
        }
        self.scores = vec![vec![String::new(); self.players.len()]; hole_count];
        true
    }

    /// Stored text for one cell, if the sheet has it.
    pub fn score_cell(&self, hole: usize, player: usize) -> Option<&str> {
        self.scores
            .get(hole)
            .and_then(|row| row.get(player))
            .map(String::as_str)
    }

    /// Store an already-clamped score for `(hole, player)`.
    pub fn set_score(&mut self, hole: usize, player: usize, value: i32) -> Result<(), RecordError> {
        let holes = self.scores.len();
        let cell = self
            .scores
            .get_mut(hole)
            .ok_or(RecordError::HoleOutOfRange { hole, holes })?;
        let players = cell.len();
        let cell = cell
            .get_mut(player)
            .ok_or(RecordError::PlayerOutOfRange { player, players })?;
        *cell = value.to_string();
        Ok(())
    }
}
