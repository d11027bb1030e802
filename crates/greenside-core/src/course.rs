use serde::{Deserialize, Serialize};

/// Unique identifier for a course record.
pub type CourseId = u64;

/// A single hole: its par and its stroke-index ranking (1 = hardest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hole {
    pub par: u8,
    /// Handicap stroke index. Lower ranks receive handicap strokes first.
    #[serde(rename = "hcp", alias = "difficultyRank")]
    pub difficulty_rank: u8,
}

impl Hole {
    pub const fn new(par: u8, difficulty_rank: u8) -> Self {
        Self {
            par,
            difficulty_rank,
        }
    }
}

/// A course definition: an ordered list of holes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub name: String,
    pub holes: Vec<Hole>,
}

impl Course {
    pub fn hole_count(&self) -> usize {
        self.holes.len()
    }

    /// Par of the hole at `index`, if the course has that many holes.
    pub fn par(&self, index: usize) -> Option<u8> {
        self.holes.get(index).map(|h| h.par)
    }

    /// Sum of par over every hole.
    pub fn total_par(&self) -> u32 {
        self.holes.iter().map(|h| u32::from(h.par)).sum()
    }
}

/// Build an 18-hole course from `(par, hcp)` pairs.
fn course(id: CourseId, name: &str, holes: [(u8, u8); 18]) -> Course {
    Course {
        id,
        name: name.to_string(),
        holes: holes.iter().map(|&(par, hcp)| Hole::new(par, hcp)).collect(),
    }
}

/// The courses seeded into a record store that has never saved any.
pub fn default_courses() -> Vec<Course> {
    vec![
        course(
            1735971331517,
            "Modern Golf & Country Club",
            [
                (5, 15),
                (4, 3),
                (3, 9),
                (4, 17),
                (5, 7),
                (3, 11),
                (4, 1),
                (4, 5),
                (4, 13),
                (4, 14),
                (3, 6),
                (4, 18),
                (4, 2),
                (5, 4),
                (4, 16),
                (4, 12),
                (3, 10),
                (5, 8),
            ],
        ),
        course(
            1736003908460,
            "Imperial Klub Golf",
            [
                (4, 15),
                (4, 1),
                (4, 9),
                (4, 5),
                (3, 13),
                (5, 7),
                (3, 17),
                (4, 11),
                (5, 3),
                (4, 12),
                (5, 10),
                (4, 8),
                (4, 4),
                (3, 18),
                (4, 6),
                (3, 14),
                (4, 16),
                (5, 2),
            ],
        ),
        course(
            1736004039252,
            "Gading Raya Golf Club",
            [
                (4, 4),
                (5, 8),
                (3, 16),
                (4, 12),
                (4, 2),
                (4, 18),
                (3, 14),
                (5, 10),
                (4, 6),
                (5, 17),
                (4, 3),
                (3, 7),
                (4, 9),
                (3, 15),
                (4, 5),
                (4, 1),
                (4, 13),
                (5, 11),
            ],
        ),
        course(
            1736004253197,
            "Kedaton Golf and Country Club",
            [
                (4, 13),
                (5, 9),
                (4, 3),
                (4, 11),
                (3, 7),
                (5, 15),
                (4, 5),
                (3, 17),
                (4, 1),
                (4, 6),
                (4, 14),
                (3, 16),
                (4, 4),
                (5, 10),
                (4, 8),
                (3, 12),
                (5, 18),
                (4, 2),
            ],
        ),
        course(
            1736004371690,
            "Tigaraksa Golf Residens",
            [
                (5, 8),
                (4, 18),
                (5, 16),
                (4, 12),
                (3, 14),
                (4, 4),
                (4, 2),
                (3, 6),
                (4, 10),
                (4, 13),
                (5, 3),
                (4, 17),
                (3, 11),
                (5, 1),
                (4, 5),
                (4, 15),
                (4, 7),
                (3, 9),
            ],
        ),
        course(
            1736004492100,
            "Permata Sentul Golf & Country Club",
            [
                (4, 3),
                (5, 11),
                (4, 1),
                (4, 5),
                (5, 9),
                (3, 17),
                (4, 7),
                (3, 13),
                (3, 15),
                (4, 12),
                (3, 14),
                (4, 8),
                (4, 4),
                (4, 6),
                (3, 16),
                (5, 2),
                (4, 18),
                (5, 10),
            ],
        ),
        course(
            1736004588290,
            "Klub Golf Bogor Raya",
            [
                (5, 10),
                (4, 12),
                (3, 18),
                (4, 14),
                (4, 4),
                (4, 2),
                (3, 16),
                (5, 8),
                (4, 6),
                (4, 17),
                (3, 13),
                (5, 7),
                (4, 5),
                (4, 3),
                (3, 9),
                (5, 11),
                (3, 15),
                (4, 1),
            ],
        ),
    ]
}
