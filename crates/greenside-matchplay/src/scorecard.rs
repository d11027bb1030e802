use serde::Serialize;

use greenside_core::course::Course;
use greenside_core::game::{Game, StrokeMatrix};
use greenside_core::player::Player;

use crate::clamp::parse_stored;
use crate::resolve::resolve_hole;
use crate::strokes::StrokeTable;

/// Derived points for a whole round. Recomputed from the records on every
/// request and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scorecard {
    /// Signed points `[hole][player]`, holes in course order.
    pub hole_points: Vec<Vec<i32>>,
    /// Sum of `hole_points` per player.
    pub total_points: Vec<i32>,
    /// Sum of every entered raw net score per player.
    pub total_net: Vec<i32>,
}

impl Scorecard {
    /// Index of the player with the most points; the earliest player wins ties.
    pub fn leader(&self) -> Option<usize> {
        self.total_points
            .iter()
            .enumerate()
            .max_by(|(a_idx, a), (b_idx, b)| a.cmp(b).then(b_idx.cmp(a_idx)))
            .map(|(idx, _)| idx)
    }
}

/// Raw nets for one hole of a stored score sheet, parsed per player.
/// Missing rows and cells are absent.
pub fn hole_scores(scores: &[Vec<String>], hole: usize, players: usize) -> Vec<Option<i32>> {
    let row = scores.get(hole);
    (0..players)
        .map(|p| row.and_then(|r| r.get(p)).and_then(|cell| parse_stored(cell)))
        .collect()
}

/// Compute the scorecard for `players` on `course` from a stored score sheet
/// (`[hole][player]` text cells) and a stroke matrix.
pub fn aggregate(
    course: &Course,
    scores: &[Vec<String>],
    strokes: &StrokeMatrix,
    players: &[Player],
) -> Scorecard {
    let n = players.len();
    let table = StrokeTable::build(&course.holes, strokes, n);

    let hole_points: Vec<Vec<i32>> = (0..course.hole_count())
        .map(|h| resolve_hole(h, &hole_scores(scores, h, n), &table))
        .collect();

    let mut total_points = vec![0i32; n];
    for points in &hole_points {
        for (total, p) in total_points.iter_mut().zip(points) {
            *total = total.saturating_add(*p);
        }
    }

    let mut total_net = vec![0i32; n];
    for row in scores {
        for (total, cell) in total_net.iter_mut().zip(row) {
            if let Some(raw) = parse_stored(cell) {
                *total = total.saturating_add(raw);
            }
        }
    }

    Scorecard {
        hole_points,
        total_points,
        total_net,
    }
}

/// [`aggregate`] over a game record and its course.
pub fn game_scorecard(game: &Game, course: &Course) -> Scorecard {
    aggregate(course, &game.scores, &game.strokes_given, &game.players)
}
