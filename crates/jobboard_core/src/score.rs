/// Display class of a job's trust score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreClass {
    High,
    Medium,
    Low,
}

/// Maps a 0-100 trust score onto its display class.
///
/// `> 85` is high, `60..=85` is medium and anything below 60 is low.
pub fn classify(score: u8) -> ScoreClass {
    match score {
        86.. => ScoreClass::High,
        60..=85 => ScoreClass::Medium,
        _ => ScoreClass::Low,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds() {
        assert_eq!(classify(100), ScoreClass::High);
        assert_eq!(classify(86), ScoreClass::High);
        assert_eq!(classify(85), ScoreClass::Medium);
        assert_eq!(classify(60), ScoreClass::Medium);
        assert_eq!(classify(59), ScoreClass::Low);
        assert_eq!(classify(0), ScoreClass::Low);
    }

    #[test]
    fn every_score_has_exactly_one_class() {
        let counts = (0..=100u8).fold([0usize; 3], |mut acc, score| {
            match classify(score) {
                ScoreClass::High => acc[0] += 1,
                ScoreClass::Medium => acc[1] += 1,
                ScoreClass::Low => acc[2] += 1,
            }
            acc
        });
        assert_eq!(counts, [15, 26, 60]);
    }
}
