//! Property tests for the weight and ranking engines.

use ahp_topsis::domain::analysis::{
    upper_pairs, Alternative, AnalysisError, Criterion, JudgmentSet, PairwiseMatrix,
    RankingEngine, WeightEngine, WeightVector, WEIGHT_SUM_TOLERANCE,
};
use proptest::prelude::*;

const SCALE: [f64; 17] = [
    1.0 / 9.0,
    1.0 / 8.0,
    1.0 / 7.0,
    1.0 / 6.0,
    1.0 / 5.0,
    1.0 / 4.0,
    1.0 / 3.0,
    1.0 / 2.0,
    1.0,
    2.0,
    3.0,
    4.0,
    5.0,
    6.0,
    7.0,
    8.0,
    9.0,
];

fn criteria(n: usize) -> Vec<Criterion> {
    (0..n).map(|i| Criterion::new(format!("C{}", i))).collect()
}

/// A complete judgment set for 2..=7 criteria.
fn complete_judgments() -> impl Strategy<Value = (usize, JudgmentSet)> {
    (2usize..=7).prop_flat_map(|n| {
        let pairs = n * (n - 1) / 2;
        prop::collection::vec(prop::sample::select(SCALE.to_vec()), pairs).prop_map(
            move |values| {
                let mut set = JudgmentSet::new();
                for ((row, col), value) in upper_pairs(n).zip(values) {
                    set.insert(row, col, value).unwrap();
                }
                (n, set)
            },
        )
    })
}

/// Normalized positive weights plus alternatives scored in [0, 1].
fn ranking_input() -> impl Strategy<Value = (WeightVector, Vec<Alternative>)> {
    (1usize..=6, 1usize..=8).prop_flat_map(|(n, m)| {
        (
            prop::collection::vec(0.01f64..1.0, n),
            prop::collection::vec(prop::collection::vec(0.0f64..=1.0, n), m),
        )
            .prop_map(|(raw, rows)| {
                let total: f64 = raw.iter().sum();
                let weights =
                    WeightVector::try_from_values(raw.iter().map(|w| w / total).collect())
                        .unwrap();
                let alternatives = rows
                    .into_iter()
                    .enumerate()
                    .map(|(i, scores)| Alternative::new(format!("S{}", i), scores))
                    .collect();
                (weights, alternatives)
            })
    })
}

proptest! {
    #[test]
    fn matrix_is_reciprocal((n, set) in complete_judgments()) {
        let matrix = PairwiseMatrix::build(n, &set).unwrap();
        for i in 0..n {
            prop_assert_eq!(matrix.get(i, i), Some(1.0));
            for j in 0..n {
                let product = matrix.get(i, j).unwrap() * matrix.get(j, i).unwrap();
                prop_assert!((product - 1.0).abs() < 1e-12, "m[{}][{}]*m[{}][{}] = {}", i, j, j, i, product);
            }
        }
    }

    #[test]
    fn weights_sum_to_one((n, set) in complete_judgments()) {
        let result = WeightEngine::compute_weights(&criteria(n), &set).unwrap();
        prop_assert_eq!(result.weights.len(), n);
        prop_assert!((result.weights.sum() - 1.0).abs() <= WEIGHT_SUM_TOLERANCE);
        prop_assert!(result.weights.values().iter().all(|w| *w > 0.0));
    }

    #[test]
    fn indifferent_judgments_weight_equally(n in 1usize..=12) {
        let result = WeightEngine::compute_weights(&criteria(n), &JudgmentSet::indifferent(n)).unwrap();
        for weight in result.weights.values() {
            prop_assert!((weight - 1.0 / n as f64).abs() < 1e-12);
        }
    }

    #[test]
    fn missing_any_pair_is_incomplete((n, set) in complete_judgments(), skip in any::<prop::sample::Index>()) {
        let judgments = set.judgments();
        let dropped = skip.index(judgments.len());
        let partial = JudgmentSet::from_judgments(
            judgments.into_iter().enumerate().filter(|(i, _)| *i != dropped).map(|(_, j)| j),
        ).unwrap();

        let result = WeightEngine::compute_weights(&criteria(n), &partial);
        let is_incomplete = matches!(result, Err(AnalysisError::IncompleteJudgmentSet { .. }));
        prop_assert!(is_incomplete);
    }

    #[test]
    fn ranking_is_a_permutation_with_bounded_scores((weights, alternatives) in ranking_input()) {
        let ranking = RankingEngine::rank_alternatives(&weights, &alternatives).unwrap();

        let mut indices: Vec<_> = ranking.results.iter().map(|r| r.input_index).collect();
        indices.sort_unstable();
        prop_assert_eq!(indices, (0..alternatives.len()).collect::<Vec<_>>());

        for result in &ranking.results {
            prop_assert!((0.0..=1.0).contains(&result.performance_score));
            prop_assert_eq!(&result.name, &alternatives[result.input_index].name);
        }
        for pair in ranking.results.windows(2) {
            prop_assert!(pair[0].performance_score >= pair[1].performance_score);
            if pair[0].performance_score == pair[1].performance_score {
                prop_assert!(pair[0].input_index < pair[1].input_index);
            }
        }
    }

    #[test]
    fn ideal_scores_one_and_negative_ideal_scores_zero((weights, mut alternatives) in ranking_input()) {
        let n = weights.len();
        alternatives.push(Alternative::new("Top", vec![1.0; n]));
        alternatives.push(Alternative::new("Bottom", vec![0.0; n]));

        let ranking = RankingEngine::rank_alternatives(&weights, &alternatives).unwrap();
        let score = |name: &str| {
            ranking.results.iter().find(|r| r.name == name).unwrap().performance_score
        };

        prop_assert_eq!(score("Top"), 1.0);
        prop_assert_eq!(score("Bottom"), 0.0);
        prop_assert_eq!(ranking.ideal_solution, vec![1.0; n]);
        prop_assert_eq!(ranking.negative_ideal_solution, vec![0.0; n]);
    }

    #[test]
    fn short_score_vector_is_dimension_mismatch((weights, mut alternatives) in ranking_input()) {
        let n = weights.len();
        alternatives.push(Alternative::new("Short", vec![0.5; n - 1]));

        let result = RankingEngine::rank_alternatives(&weights, &alternatives);
        prop_assert_eq!(
            result,
            Err(AnalysisError::DimensionMismatch {
                alternative: "Short".to_string(),
                expected: n,
                actual: n - 1,
            })
        );
    }
}
