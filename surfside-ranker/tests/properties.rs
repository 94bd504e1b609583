//! Property tests for recommendation lists.

use chrono::{NaiveDate, Utc};
use proptest::prelude::*;
use surfside_core::test_support::{sample_reading, sample_spot};
use surfside_core::{Analysis, Scores};
use surfside_ranker::top_n;

fn score() -> impl Strategy<Value = f64> {
    prop_oneof![0.0_f64..=10.0, Just(f64::NAN)]
}

prop_compose! {
    fn analysis()(
        dims in prop::array::uniform5(score()),
        has_sample in any::<bool>(),
    ) -> Analysis {
        let [wave, wind, tide, weather, overall] = dims;
        let date = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap_or_default();
        Analysis {
            sample: has_sample.then(sample_reading),
            scores: Scores { wave, wind, tide, weather, overall },
            ..Analysis::unavailable(sample_spot("p"), date, Utc::now())
        }
    }
}

proptest! {
    #[test]
    fn ranks_are_consecutive_and_reasons_present(
        analyses in prop::collection::vec(analysis(), 0..8),
        n in 0_usize..10,
    ) {
        let top = top_n(&analyses, n);
        prop_assert_eq!(top.len(), n.min(analyses.len()));
        for (expected, recommendation) in (1_usize..).zip(&top) {
            prop_assert_eq!(recommendation.rank, expected);
            prop_assert!(!recommendation.reason.is_empty());
        }
    }
}
