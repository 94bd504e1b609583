//! Per-dimension scores and their display levels.

/// Upper bound of every score.
pub const MAX_SCORE: f64 = 10.0;

/// Score assigned to every dimension when no data is available.
pub const NEUTRAL_SCORE: f64 = 5.0;

/// Scores for one spot at one instant, each in `0.0..=10.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scores {
    /// Wave quality.
    pub wave: f64,
    /// Wind quality.
    pub wind: f64,
    /// Tide suitability.
    pub tide: f64,
    /// Weather comfort.
    pub weather: f64,
    /// Weighted combination used for ranking.
    pub overall: f64,
}

impl Scores {
    /// Scores used when a spot's conditions could not be assessed.
    #[must_use]
    pub const fn neutral() -> Self {
        Self {
            wave: NEUTRAL_SCORE,
            wind: NEUTRAL_SCORE,
            tide: NEUTRAL_SCORE,
            weather: NEUTRAL_SCORE,
            overall: NEUTRAL_SCORE,
        }
    }

    /// Display level of the overall score.
    #[must_use]
    pub const fn level(&self) -> ScoreLevel {
        ScoreLevel::from_score(self.overall)
    }
}

/// Coarse label for a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ScoreLevel {
    /// Below 4.
    Poor,
    /// At least 4.
    Fair,
    /// At least 6.
    Good,
    /// At least 8.
    Excellent,
}

impl ScoreLevel {
    /// Classify `score`. Non-finite scores are [`ScoreLevel::Poor`].
    ///
    /// # Examples
    /// ```
    /// use surfside_core::ScoreLevel;
    ///
    /// assert_eq!(ScoreLevel::from_score(8.0), ScoreLevel::Excellent);
    /// assert_eq!(ScoreLevel::from_score(5.9), ScoreLevel::Fair);
    /// assert_eq!(ScoreLevel::from_score(f64::NAN), ScoreLevel::Poor);
    /// ```
    #[must_use]
    pub const fn from_score(score: f64) -> Self {
        if score >= 8.0 {
            Self::Excellent
        } else if score >= 6.0 {
            Self::Good
        } else if score >= 4.0 {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    /// Capitalised label for display.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
        }
    }
}

impl std::fmt::Display for ScoreLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(10.0, ScoreLevel::Excellent)]
    #[case(7.99, ScoreLevel::Good)]
    #[case(6.0, ScoreLevel::Good)]
    #[case(4.0, ScoreLevel::Fair)]
    #[case(3.99, ScoreLevel::Poor)]
    #[case(0.0, ScoreLevel::Poor)]
    fn level_boundaries(#[case] score: f64, #[case] expected: ScoreLevel) {
        assert_eq!(ScoreLevel::from_score(score), expected);
    }

    #[test]
    fn neutral_scores_are_fair() {
        let scores = Scores::neutral();
        assert_eq!(scores.overall, NEUTRAL_SCORE);
        assert_eq!(scores.level(), ScoreLevel::Fair);
    }
}
