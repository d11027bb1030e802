//! Match-play points for golf side games.
//!
//! Every player plays every other player head to head on each hole. Handicap
//! strokes flow from a giver to a receiver on the hardest holes, the lower
//! adjusted net wins a point, and a win on a typed birdie or eagle is worth
//! double or quadruple. The functions here are pure: they read course and
//! game records and return derived numbers.

pub mod clamp;
pub mod resolve;
pub mod scorecard;
pub mod strokes;

pub use clamp::{clamp_input, clamp_score, parse_stored, score_bounds};
pub use resolve::{pair_delta, raw_multiplier, resolve_hole};
pub use scorecard::{Scorecard, aggregate, game_scorecard, hole_scores};
pub use strokes::{StrokeTable, receives_stroke, stroke_order};
