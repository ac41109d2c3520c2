mod common;

use common::{history, pb};
use cubetimer_core::scramble;
use cubetimer_core::timefmt::{format_time, parse_time_str};
use cubetimer_core::{average_of, plan_best_updates, AverageKind, CurrentAverages, CurrentBests, Puzzle};
use fastrand::Rng;
use proptest::prelude::*;
use strum::IntoEnumIterator;

// --- STRATEGIES ---

fn arb_puzzle() -> impl Strategy<Value = Puzzle> {
    proptest::sample::select(Puzzle::iter().collect::<Vec<_>>())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn scrambles_always_satisfy_length_and_adjacency(
        seed in any::<u64>(),
        puzzle in arb_puzzle()
    ) {
        let mut rng = Rng::with_seed(seed);
        let s = scramble::generate(puzzle, &mut rng);

        prop_assert_eq!(s.moves.len(), puzzle.scramble_len());
        for pair in s.moves.windows(2) {
            prop_assert_ne!(pair[1].face, pair[0].face);
            prop_assert_ne!(pair[1].face, pair[0].face.opposite());
        }
    }

    #[test]
    fn two_decimal_times_survive_format_then_parse(centis in 0u32..360_000) {
        let t = f64::from(centis) / 100.0;
        let text = format_time(Some(t));
        let stripped = text
            .strip_suffix("min")
            .or_else(|| text.strip_suffix('s'))
            .unwrap();
        let parsed = parse_time_str(stripped).unwrap();
        prop_assert!((parsed - t).abs() < 1e-9, "{} -> {} -> {}", t, text, parsed);
    }

    #[test]
    fn rolling_averages_stay_within_window_extremes(
        times in proptest::collection::vec(1.0f64..600.0, 5..40),
        trimmed in any::<bool>()
    ) {
        let h = history(Puzzle::Cube3, &times);
        let avg = average_of(5, &h, trimmed).unwrap();

        let window = &times[..5];
        let lo = window.iter().cloned().fold(f64::INFINITY, f64::min);
        let hi = window.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        prop_assert!(avg.time_secs >= lo - 1e-9);
        prop_assert!(avg.time_secs <= hi + 1e-9);
    }

    #[test]
    fn replacement_happens_exactly_when_strictly_faster(
        incumbent in 1.0f64..100.0,
        fresh in 1.0f64..100.0
    ) {
        let bests = CurrentBests::from_records(vec![pb(AverageKind::Single, incumbent)]);
        let current = CurrentAverages::compute(&history(Puzzle::Cube3, &[fresh]));
        let plans = plan_best_updates(&bests, &current);

        prop_assert_eq!(!plans.is_empty(), fresh < incumbent);
    }

    #[test]
    fn trimmed_average_lives_inside_the_kept_middle(
        times in proptest::collection::vec(1.0f64..600.0, 5)
    ) {
        let h = history(Puzzle::Cube3, &times);
        let trimmed = average_of(5, &h, true).unwrap().time_secs;

        let mut sorted = times.clone();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
        // With one extreme dropped on each side, the mean is bounded by the
        // second-smallest and second-largest times.
        prop_assert!(trimmed >= sorted[1] - 1e-9);
        prop_assert!(trimmed <= sorted[3] + 1e-9);
    }
}
