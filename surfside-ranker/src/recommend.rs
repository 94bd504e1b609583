//! Top-N recommendations with short reasons.

use serde::{Deserialize, Serialize};
use surfside_core::{Analysis, ScoreLevel, WeatherCondition};

/// Most condition reasons quoted for one recommendation.
pub const REASON_LIMIT: usize = 3;

/// Reason used when no condition stands out.
pub const FALLBACK_REASON: &str = "relatively good overall";

/// One entry of a top-N list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// 1-based position in the ranking.
    pub rank: usize,
    /// Id of the recommended spot.
    pub spot_id: String,
    /// Display name of the recommended spot.
    pub spot: String,
    /// Overall score.
    pub score: f64,
    /// Qualitative band of `score`.
    pub level: ScoreLevel,
    /// Region the spot belongs to.
    pub region: String,
    /// Why the spot was recommended; never empty.
    pub reason: String,
}

/// Take the first `n` analyses as ranked recommendations.
///
/// `analyses` is expected in ranking order, as returned by
/// [`RankingEngine::rank_spots`](crate::RankingEngine::rank_spots).
///
/// # Examples
///
/// ```
/// use chrono::{NaiveDate, Utc};
/// use surfside_core::Analysis;
/// use surfside_core::test_support::sample_spot;
/// use surfside_ranker::top_n;
///
/// let date = NaiveDate::from_ymd_opt(2024, 7, 1).expect("valid date");
/// let analyses = vec![
///     Analysis::unavailable(sample_spot("dongsha"), date, Utc::now()),
///     Analysis::unavailable(sample_spot("lulan"), date, Utc::now()),
/// ];
/// let top = top_n(&analyses, 3);
/// assert_eq!(top.len(), 2);
/// assert_eq!(top[1].reason, "relatively good overall, second choice");
/// ```
#[must_use]
pub fn top_n(analyses: &[Analysis], n: usize) -> Vec<Recommendation> {
    analyses
        .iter()
        .take(n)
        .zip(1_usize..)
        .map(|(analysis, rank)| Recommendation {
            rank,
            spot_id: analysis.spot.id.clone(),
            spot: analysis.spot.name.clone(),
            score: analysis.scores.overall,
            level: analysis.scores.level(),
            region: analysis.spot.region.clone(),
            reason: reason(analysis, rank),
        })
        .collect()
}

/// Build the reason text for `analysis` at `rank`.
///
/// Quotes up to [`REASON_LIMIT`] standout conditions, or
/// [`FALLBACK_REASON`] when there are none, followed by the closing phrase
/// for the first three ranks.
#[must_use]
pub fn reason(analysis: &Analysis, rank: usize) -> String {
    let mut parts = condition_reasons(analysis);
    parts.truncate(REASON_LIMIT);
    if parts.is_empty() {
        parts.push(FALLBACK_REASON.to_owned());
    }
    if let Some(closing) = closing_phrase(rank) {
        parts.push(closing.to_owned());
    }
    parts.join(", ")
}

/// Closing phrase for podium ranks.
#[must_use]
pub const fn closing_phrase(rank: usize) -> Option<&'static str> {
    match rank {
        1 => Some("best overall"),
        2 => Some("second choice"),
        3 => Some("third choice"),
        _ => None,
    }
}

fn condition_reasons(analysis: &Analysis) -> Vec<String> {
    let Some(sample) = analysis.sample.as_ref() else {
        return Vec::new();
    };
    let scores = &analysis.scores;
    let mut reasons = Vec::with_capacity(4);

    if scores.wave >= 8.0 {
        reasons.push(format!("excellent waves ({} m)", sample.wave.height));
    } else if scores.wave >= 6.0 {
        reasons.push(format!("good waves ({} m)", sample.wave.height));
    }

    if scores.wind >= 8.0 {
        reasons.push(format!("ideal wind ({} kt)", sample.wind.speed));
    } else if scores.wind >= 6.0 {
        reasons.push(format!("favourable wind ({} kt)", sample.wind.speed));
    }

    if scores.tide >= 7.0 {
        reasons.push(format!("tide {}", sample.tide.level));
    }

    if sample.weather.condition == WeatherCondition::Clear {
        reasons.push("clear skies".to_owned());
    }
    reasons
}
