//! Command handlers.

mod compute_weights;
mod rank_scenarios;

pub use compute_weights::{ComputeWeightsCommand, ComputeWeightsHandler};
pub use rank_scenarios::{RankScenariosCommand, RankScenariosHandler};

#[cfg(test)]
pub(crate) mod test_support {
    use crate::domain::analysis::DecisionProblem;
    use crate::ports::{ProblemSource, ProblemSourceError};

    /// Serves a fixed problem.
    pub struct StaticProblemSource {
        problem: DecisionProblem,
    }

    impl StaticProblemSource {
        pub fn new(problem: DecisionProblem) -> Self {
            Self { problem }
        }
    }

    impl ProblemSource for StaticProblemSource {
        fn load(&self) -> Result<DecisionProblem, ProblemSourceError> {
            Ok(self.problem.clone())
        }

        fn describe(&self) -> String {
            "static".to_string()
        }
    }

    /// Always fails to load.
    pub struct FailingProblemSource;

    impl ProblemSource for FailingProblemSource {
        fn load(&self) -> Result<DecisionProblem, ProblemSourceError> {
            Err(ProblemSourceError::IoError("disk unavailable".to_string()))
        }

        fn describe(&self) -> String {
            "failing".to_string()
        }
    }
}
