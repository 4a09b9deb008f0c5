// traffic-core/src/scorer/length.rs
use traffic_calc::i_score;

use crate::stats::LengthStats;

/// Scores the keyword length; shorter keywords are assumed to draw more traffic.
///
/// Length counts Unicode scalar values, so "café" has length 4.
pub fn keyword_length(keyword: &str, max_keyword_length: usize) -> LengthStats {
    let length = keyword.chars().count();
    LengthStats {
        length,
        score: i_score(1.0, max_keyword_length as f64, length as f64),
    }
}
