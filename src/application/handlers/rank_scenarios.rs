//! RankScenariosHandler - Weights criteria, then ranks scenarios with TOPSIS.

use std::sync::Arc;

use tracing::{info, warn};

use crate::application::ApplicationError;
use crate::domain::analysis::{DecisionReport, DecisionSession};
use crate::ports::ProblemSource;

/// Command to rank the scenarios of a problem.
#[derive(Debug, Clone, Default)]
pub struct RankScenariosCommand {
    /// Treat unjudged pairs as equally important, even if the problem doesn't.
    pub fill_missing_with_indifference: bool,
}

/// Handler for the full weighting and ranking flow.
pub struct RankScenariosHandler {
    source: Arc<dyn ProblemSource>,
}

impl RankScenariosHandler {
    pub fn new(source: Arc<dyn ProblemSource>) -> Self {
        Self { source }
    }

    pub fn handle(&self, cmd: RankScenariosCommand) -> Result<DecisionReport, ApplicationError> {
        // 1. Load problem
        let problem = self.source.load()?;

        // 2. Build session
        let mut session = DecisionSession::from_problem(&problem)?;
        if cmd.fill_missing_with_indifference {
            let filled = session.fill_missing_with_indifference();
            if filled > 0 {
                warn!(pairs = filled, "Filled unjudged pairs with equal importance");
            }
        }

        // 3. Weight and rank
        let (computation, ranking) = session.rank()?;

        info!(
            source = %self.source.describe(),
            criteria = session.criteria().len(),
            alternatives = ranking.results.len(),
            best = ranking.best().map(|r| r.name.as_str()),
            "Ranked scenarios"
        );

        Ok(
            DecisionReport::from_weights(problem.title, session.criteria(), computation)
                .with_ranking(ranking),
        )
    }
}
