//! Score constants for Four-in-a-Row evaluation
//!
//! Window scores are asymmetric: the side to maximize values its own threes
//! and twos slightly above the opponent's.

/// Scoring weights used by the evaluator and the search
pub struct WindowScore;

impl WindowScore {
    /// A side already has four in a row
    pub const WIN: i32 = 100_000;

    /// Window fully held by the maximizer
    pub const FOUR: i32 = 10_000;
    /// Window fully held by the minimizer
    pub const OPP_FOUR: i32 = -10_000;

    /// Three maximizer marks and one empty cell
    pub const THREE: i32 = 500;
    /// Three minimizer marks and one empty cell
    pub const OPP_THREE: i32 = -400;

    /// Two maximizer marks and two empty cells
    pub const TWO: i32 = 50;
    /// Two minimizer marks and two empty cells
    pub const OPP_TWO: i32 = -40;

    /// Per maximizer mark in the center column
    pub const CENTER: i32 = 5;
}

/// Score one length-4 window from its cell counts.
///
/// `own`, `opp` and `empty` count maximizer, minimizer and empty cells.
/// Windows holding both marks can never complete and score 0.
#[inline]
#[must_use]
pub fn score_window(own: usize, opp: usize, empty: usize) -> i32 {
    match (own, opp, empty) {
        (4, _, _) => WindowScore::FOUR,
        (_, 4, _) => WindowScore::OPP_FOUR,
        (3, 0, 1) => WindowScore::THREE,
        (0, 3, 1) => WindowScore::OPP_THREE,
        (2, 0, 2) => WindowScore::TWO,
        (0, 2, 2) => WindowScore::OPP_TWO,
        _ => 0,
    }
}
