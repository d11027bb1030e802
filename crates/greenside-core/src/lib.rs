pub mod course;
pub mod error;
pub mod game;
pub mod player;
pub mod records;
pub mod store;
pub mod validate;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use crate::course::{Course, Hole};
    use crate::game::{Game, StrokeMatrix};
    use crate::player::Player;

    /// Create `n` test players named `Player1..`, handicap 0.
    pub fn make_players(n: usize) -> Vec<Player> {
        (0..n)
            .map(|i| Player::new(format!("Player{}", i + 1), 0))
            .collect()
    }

    /// A par-4 course of `holes` holes, ranked hardest-first in course order
    /// (hole 1 has rank 1).
    pub fn make_course(holes: usize) -> Course {
        Course {
            id: 1,
            name: format!("Test Course {holes}"),
            holes: (0..holes)
                .map(|i| Hole::new(4, u8::try_from(i + 1).unwrap_or(u8::MAX)))
                .collect(),
        }
    }

    /// A course built from explicit `(par, hcp)` pairs.
    pub fn course_from(holes: &[(u8, u8)]) -> Course {
        Course {
            id: 1,
            name: "Custom Course".to_string(),
            holes: holes.iter().map(|&(par, hcp)| Hole::new(par, hcp)).collect(),
        }
    }

    /// A fresh game on `course` with `players` players, no strokes and no
    /// score sheet.
    pub fn make_game(course: &Course, players: usize) -> Game {
        Game {
            id: 1,
            course_id: course.id,
            players: make_players(players),
            starting_hole: 1,
            strokes_given: StrokeMatrix::new(players),
            scores: Vec::new(),
        }
    }

    /// A score sheet from string rows, `[hole][player]`.
    pub fn score_sheet(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|row| row.iter().map(|cell| (*cell).to_string()).collect())
            .collect()
    }
}
