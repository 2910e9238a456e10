pub mod config;
pub mod dataset;
pub mod day;
pub mod game;
pub mod line_score;
pub mod record_against;
pub mod schedule;
pub mod series;
pub mod standings;
pub mod teams;

/// Win probability as a whole percentage, halves rounding to even.
pub fn odds_percent(probability: f64) -> i64 {
    (probability * 100.0).round_ties_even() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn odds_round_to_whole_percent() {
        assert_eq!(odds_percent(0.5432), 54);
        assert_eq!(odds_percent(0.4568), 46);
        assert_eq!(odds_percent(1.0), 100);
        assert_eq!(odds_percent(0.0), 0);
    }
}
