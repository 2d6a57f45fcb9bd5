//! ComputeWeightsHandler - Derives criterion weights for a problem.

use std::sync::Arc;

use tracing::info;

use crate::application::ApplicationError;
use crate::domain::analysis::{DecisionReport, DecisionSession};
use crate::ports::ProblemSource;

/// Command to compute criterion weights.
#[derive(Debug, Clone, Default)]
pub struct ComputeWeightsCommand {
    /// Treat unjudged pairs as equally important, even if the problem doesn't.
    pub fill_missing_with_indifference: bool,
}

/// Handler for computing weights without ranking alternatives.
pub struct ComputeWeightsHandler {
    source: Arc<dyn ProblemSource>,
}

impl ComputeWeightsHandler {
    pub fn new(source: Arc<dyn ProblemSource>) -> Self {
        Self { source }
    }

    pub fn handle(&self, cmd: ComputeWeightsCommand) -> Result<DecisionReport, ApplicationError> {
        // 1. Load problem
        let problem = self.source.load()?;

        // 2. Build session
        let mut session = DecisionSession::from_problem(&problem)?;
        if cmd.fill_missing_with_indifference {
            session.fill_missing_with_indifference();
        }

        // 3. Derive weights
        let computation = session.compute_weights()?;

        info!(
            source = %self.source.describe(),
            criteria = session.criteria().len(),
            judgments = session.judgment_count(),
            "Computed criterion weights"
        );

        Ok(DecisionReport::from_weights(
            problem.title,
            session.criteria(),
            computation,
        ))
    }
}
