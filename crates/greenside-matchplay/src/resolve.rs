use crate::strokes::StrokeTable;

/// Point multiplier for a win, from the winner's raw net before strokes:
/// birdie (-1) doubles, eagle (-2) quadruples.
pub fn raw_multiplier(raw: i32) -> i32 {
    match raw {
        -1 => 2,
        -2 => 4,
        _ => 1,
    }
}

/// Points won by player `i` against player `j` on one hole. Player `j`'s
/// result is the negation.
///
/// A received stroke lowers that player's net by one. The lower adjusted
/// net wins one point times the winner's raw multiplier; equal nets push.
pub fn pair_delta(raw_i: i32, raw_j: i32, i_receives: bool, j_receives: bool) -> i32 {
    let final_i = raw_i.saturating_sub(i32::from(i_receives));
    let final_j = raw_j.saturating_sub(i32::from(j_receives));
    match final_i.cmp(&final_j) {
        std::cmp::Ordering::Less => raw_multiplier(raw_i),
        std::cmp::Ordering::Greater => -raw_multiplier(raw_j),
        std::cmp::Ordering::Equal => 0,
    }
}

/// Signed points for every player on hole `hole`.
///
/// `raw` holds each player's raw net (`None` when not entered). Every pair of
/// players who both have a score is compared head to head; a player without
/// a score neither wins nor loses against anyone. The returned vector has one
/// entry per player in the stroke table.
pub fn resolve_hole(hole: usize, raw: &[Option<i32>], strokes: &StrokeTable) -> Vec<i32> {
    let n = strokes.player_count();
    let mut points = vec![0i32; n];
    for i in 0..n {
        let Some(raw_i) = raw.get(i).copied().flatten() else {
            continue;
        };
        for j in (i + 1)..n {
            let Some(raw_j) = raw.get(j).copied().flatten() else {
                continue;
            };
            let delta = pair_delta(
                raw_i,
                raw_j,
                strokes.receives(hole, j, i),
                strokes.receives(hole, i, j),
            );
            points[i] = points[i].saturating_add(delta);
            points[j] = points[j].saturating_sub(delta);
        }
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use greenside_core::game::StrokeMatrix;
    use greenside_core::test_helpers::{course_from, make_course};

    fn table(players: usize, matrix: StrokeMatrix) -> StrokeTable {
        StrokeTable::build(&make_course(18).holes, &matrix, players)
    }

    #[test]
    fn multiplier_from_raw_net() {
        assert_eq!(raw_multiplier(-2), 4);
        assert_eq!(raw_multiplier(-1), 2);
        assert_eq!(raw_multiplier(0), 1);
        assert_eq!(raw_multiplier(-3), 1);
        assert_eq!(raw_multiplier(3), 1);
    }

    #[test]
    fn birdie_wins_double() {
        let course = course_from(&[(4, 1)]);
        let strokes = StrokeTable::build(&course.holes, &StrokeMatrix::new(2), 2);
        assert_eq!(resolve_hole(0, &[Some(-1), Some(0)], &strokes), vec![2, -2]);
    }

    #[test]
    fn eagle_wins_quadruple() {
        let course = course_from(&[(5, 1)]);
        let strokes = StrokeTable::build(&course.holes, &StrokeMatrix::new(2), 2);
        assert_eq!(resolve_hole(0, &[Some(-2), Some(0)], &strokes), vec![4, -4]);
    }

    #[test]
    fn plain_win_is_one_point() {
        let strokes = table(2, StrokeMatrix::new(2));
        assert_eq!(resolve_hole(5, &[Some(2), Some(1)], &strokes), vec![-1, 1]);
    }

    #[test]
    fn stroke_turns_loss_into_push() {
        let mut matrix = StrokeMatrix::new(2);
        matrix.give(0, 1, 1);
        let strokes = table(2, matrix);
        // Player 1 receives on hole 0 only (rank 1).
        assert_eq!(resolve_hole(0, &[Some(0), Some(1)], &strokes), vec![0, 0]);
        assert_eq!(resolve_hole(1, &[Some(0), Some(1)], &strokes), vec![1, -1]);
    }

    #[test]
    fn multiplier_ignores_stroke_adjusted_net() {
        let mut matrix = StrokeMatrix::new(2);
        matrix.give(1, 0, 1);
        let strokes = table(2, matrix);
        // Player 0 types par (0) and gets a stroke: adjusted -1, but no birdie bonus.
        assert_eq!(resolve_hole(0, &[Some(0), Some(0)], &strokes), vec![1, -1]);
        // Player 0 types birdie and gets a stroke: still only a birdie multiplier.
        assert_eq!(resolve_hole(0, &[Some(-1), Some(-1)], &strokes), vec![2, -2]);
    }

    #[test]
    fn stroked_winner_with_raw_eagle_quadruples() {
        let mut matrix = StrokeMatrix::new(2);
        matrix.give(0, 1, 18);
        let strokes = table(2, matrix);
        assert_eq!(resolve_hole(7, &[Some(-2), Some(-2)], &strokes), vec![-4, 4]);
    }

    #[test]
    fn tie_exchanges_nothing() {
        let strokes = table(3, StrokeMatrix::new(3));
        assert_eq!(
            resolve_hole(0, &[Some(1), Some(1), Some(1)], &strokes),
            vec![0, 0, 0]
        );
    }

    #[test]
    fn absent_player_sits_out() {
        let strokes = table(3, StrokeMatrix::new(3));
        let points = resolve_hole(0, &[Some(0), Some(1), None], &strokes);
        assert_eq!(points, vec![1, -1, 0]);
    }

    #[test]
    fn short_score_row_reads_as_absent() {
        let strokes = table(3, StrokeMatrix::new(3));
        assert_eq!(resolve_hole(0, &[Some(-1), Some(0)], &strokes), vec![2, -2, 0]);
        assert_eq!(resolve_hole(0, &[], &strokes), vec![0, 0, 0]);
    }

    #[test]
    fn extreme_stored_nets_do_not_overflow() {
        let mut matrix = StrokeMatrix::new(2);
        matrix.give(1, 0, 1);
        let strokes = table(2, matrix);
        assert_eq!(pair_delta(i32::MIN, 0, true, false), 1);
        assert_eq!(resolve_hole(0, &[Some(i32::MIN), Some(0)], &strokes), vec![1, -1]);
        assert_eq!(resolve_hole(0, &[Some(i32::MAX), Some(0)], &strokes), vec![-1, 1]);
    }

    #[test]
    fn four_ball_sums_pairwise_results() {
        let mut matrix = StrokeMatrix::new(4);
        matrix.give(0, 3, 2);
        let strokes = table(4, matrix);
        // Hole 0: player 3 receives from player 0.
        // 0 vs 1: -1 beats 0 -> 0 +2
        // 0 vs 2: -1 beats 1 -> 0 +2
        // 0 vs 3: -1 vs (0-1) push
        // 1 vs 2: 0 beats 1 -> 1 +1
        // 1 vs 3: 0 vs 0 push (no stroke between 1 and 3)
        // 2 vs 3: 1 loses to 0 -> 3 +1
        let points = resolve_hole(0, &[Some(-1), Some(0), Some(1), Some(0)], &strokes);
        assert_eq!(points, vec![4, -1, -4, 1]);
        assert_eq!(points.iter().sum::<i32>(), 0);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn pair_delta_is_antisymmetric(
                raw_i in -4i32..=10,
                raw_j in -4i32..=10,
                i_receives in proptest::bool::ANY,
                j_receives in proptest::bool::ANY,
            ) {
                prop_assert_eq!(
                    pair_delta(raw_i, raw_j, i_receives, j_receives),
                    -pair_delta(raw_j, raw_i, j_receives, i_receives)
                );
            }

            #[test]
            fn hole_is_zero_sum(
                raw in proptest::collection::vec(proptest::option::of(-3i32..=8), 1..=6),
                strokes in proptest::collection::vec(0i32..=20, 36),
            ) {
                let n = raw.len();
                let rows = (0..n)
                    .map(|g| (0..n).map(|r| if g == r { 0 } else { strokes[g * 6 + r] }).collect())
                    .collect();
                let table = StrokeTable::build(&make_course(18).holes, &StrokeMatrix::from_rows(rows), n);
                for hole in 0..18 {
                    let points = resolve_hole(hole, &raw, &table);
                    prop_assert_eq!(points.iter().sum::<i32>(), 0);
                    for (p, score) in raw.iter().enumerate() {
                        if score.is_none() {
                            prop_assert_eq!(points[p], 0);
                        }
                    }
                }
            }
        }
    }
}
