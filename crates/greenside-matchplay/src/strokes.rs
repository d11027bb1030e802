//! Handicap stroke allocation.
//!
//! A giver who gives `n` strokes to a receiver gives one stroke on each of
//! the `n` hardest holes (lowest difficulty rank). Each ordered
//! `(giver, receiver)` pair is allocated independently.

use greenside_core::course::Hole;
use greenside_core::game::StrokeMatrix;

/// Hole indices ordered hardest first. Holes sharing a rank keep course order.
pub fn stroke_order(holes: &[Hole]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..holes.len()).collect();
    // `sort_by_key` is stable, which fixes the order among tied ranks.
    order.sort_by_key(|&i| holes[i].difficulty_rank);
    order
}

/// Whether `receiver` gets a stroke from `giver` on hole `hole`.
///
/// `order` is the result of [`stroke_order`] for the course being played.
pub fn receives_stroke(
    hole: usize,
    giver: usize,
    receiver: usize,
    matrix: &StrokeMatrix,
    order: &[usize],
) -> bool {
    let strokes = matrix.strokes(giver, receiver) as usize;
    order.iter().take(strokes).any(|&h| h == hole)
}

/// Precomputed stroke allocation for one game on one course, indexed
/// `[hole][giver][receiver]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrokeTable {
    holes: usize,
    players: usize,
    cells: Vec<bool>,
}

impl StrokeTable {
    pub fn build(holes: &[Hole], matrix: &StrokeMatrix, players: usize) -> Self {
        let order = stroke_order(holes);
        let mut cells = vec![false; holes.len() * players * players];
        for giver in 0..players {
            for receiver in 0..players {
                let strokes = matrix.strokes(giver, receiver) as usize;
                for &hole in order.iter().take(strokes) {
                    cells[(hole * players + giver) * players + receiver] = true;
                }
            }
        }
        Self {
            holes: holes.len(),
            players,
            cells,
        }
    }

    pub fn hole_count(&self) -> usize {
        self.holes
    }

    pub fn player_count(&self) -> usize {
        self.players
    }

    /// Whether `receiver` gets a stroke from `giver` on `hole`.
    /// Out-of-range indices never receive.
    pub fn receives(&self, hole: usize, giver: usize, receiver: usize) -> bool {
        if hole >= self.holes || giver >= self.players || receiver >= self.players {
            return false;
        }
        self.cells[(hole * self.players + giver) * self.players + receiver]
    }

    /// Whether `player` receives a stroke from anyone on `hole`.
    pub fn receives_any(&self, hole: usize, player: usize) -> bool {
        (0..self.players).any(|giver| self.receives(hole, giver, player))
    }

    /// Hole indices on which `receiver` gets a stroke from `giver`, in course order.
    pub fn stroke_holes(&self, giver: usize, receiver: usize) -> Vec<usize> {
        (0..self.holes)
            .filter(|&h| self.receives(h, giver, receiver))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use greenside_core::course::default_courses;
    use greenside_core::test_helpers::{course_from, make_course};

    #[test]
    fn order_is_hardest_first() {
        let course = course_from(&[(4, 3), (4, 1), (3, 2)]);
        assert_eq!(stroke_order(&course.holes), vec![1, 2, 0]);
    }

    #[test]
    fn order_keeps_course_order_on_ties() {
        let course = course_from(&[(4, 2), (4, 1), (3, 2), (5, 1)]);
        assert_eq!(stroke_order(&course.holes), vec![1, 3, 0, 2]);
    }

    #[test]
    fn zero_strokes_never_receive() {
        let course = make_course(18);
        let order = stroke_order(&course.holes);
        let matrix = StrokeMatrix::new(2);
        assert!((0..18).all(|h| !receives_stroke(h, 0, 1, &matrix, &order)));
    }

    #[test]
    fn two_strokes_land_on_two_hardest_holes() {
        let course = &default_courses()[0];
        let order = stroke_order(&course.holes);
        let mut matrix = StrokeMatrix::new(2);
        matrix.give(0, 1, 2);

        // Modern Golf & Country Club: rank 1 is hole 7, rank 2 is hole 13.
        let stroke_holes: Vec<usize> = (0..18)
            .filter(|&h| receives_stroke(h, 0, 1, &matrix, &order))
            .collect();
        assert_eq!(stroke_holes, vec![6, 12]);
        assert!((0..18).all(|h| !receives_stroke(h, 1, 0, &matrix, &order)));
    }

    #[test]
    fn strokes_beyond_hole_count_cover_every_hole() {
        let course = make_course(9);
        let order = stroke_order(&course.holes);
        let matrix = StrokeMatrix::from_rows(vec![vec![0, 27], vec![0, 0]]);
        assert!((0..9).all(|h| receives_stroke(h, 0, 1, &matrix, &order)));
    }

    #[test]
    fn negative_strokes_give_nothing() {
        let course = make_course(9);
        let order = stroke_order(&course.holes);
        let matrix = StrokeMatrix::from_rows(vec![vec![0, -4], vec![0, 0]]);
        assert!((0..9).all(|h| !receives_stroke(h, 0, 1, &matrix, &order)));
    }

    #[test]
    fn table_matches_direct_lookup() {
        let course = &default_courses()[3];
        let matrix = StrokeMatrix::from_rows(vec![
            vec![0, 5, 0],
            vec![0, 0, 0],
            vec![12, 3, 0],
        ]);
        let order = stroke_order(&course.holes);
        let table = StrokeTable::build(&course.holes, &matrix, 3);
        for h in 0..course.hole_count() {
            for g in 0..3 {
                for r in 0..3 {
                    assert_eq!(
                        table.receives(h, g, r),
                        receives_stroke(h, g, r, &matrix, &order),
                        "hole {h} giver {g} receiver {r}"
                    );
                }
            }
        }
    }

    #[test]
    fn table_honors_both_directions_when_matrix_is_two_way() {
        let course = make_course(4);
        let matrix = StrokeMatrix::from_rows(vec![vec![0, 1], vec![2, 0]]);
        let table = StrokeTable::build(&course.holes, &matrix, 2);
        assert_eq!(table.stroke_holes(0, 1), vec![0]);
        assert_eq!(table.stroke_holes(1, 0), vec![0, 1]);
    }

    #[test]
    fn table_tolerates_undersized_matrix() {
        let course = make_course(4);
        let matrix = StrokeMatrix::from_rows(vec![vec![0, 2]]);
        let table = StrokeTable::build(&course.holes, &matrix, 3);
        assert_eq!(table.stroke_holes(0, 1), vec![0, 1]);
        assert!(table.stroke_holes(2, 0).is_empty());
        assert!(!table.receives(9, 0, 1));
        assert!(table.receives_any(1, 1));
        assert!(!table.receives_any(1, 0));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn allocates_min_of_strokes_and_holes(
                ranks in proptest::collection::vec(1u8..=18, 1..=18),
                strokes in 0i32..40,
            ) {
                let holes: Vec<Hole> = ranks.iter().map(|&r| Hole::new(4, r)).collect();
                let mut matrix = StrokeMatrix::new(2);
                matrix.give(0, 1, strokes);
                let table = StrokeTable::build(&holes, &matrix, 2);

                let given = table.stroke_holes(0, 1);
                prop_assert_eq!(given.len(), (strokes as usize).min(holes.len()));
                prop_assert!(table.stroke_holes(1, 0).is_empty());

                // Every stroked hole is at least as hard as every unstroked hole.
                for &s in &given {
                    for h in (0..holes.len()).filter(|h| !given.contains(h)) {
                        prop_assert!(holes[s].difficulty_rank <= holes[h].difficulty_rank);
                    }
                }
            }
        }
    }
}
