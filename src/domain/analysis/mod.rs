//! Analysis Module - Pure domain services for criterion weighting and ranking.
//!
//! # Components
//!
//! - `JudgmentSet` / `PairwiseMatrix` - Upper-triangle judgments and the
//!   reciprocal matrix derived from them
//! - `WeightEngine` - AHP weights by column normalization and row averaging
//! - `RankingEngine` - TOPSIS closeness to the ideal solution
//! - `DecisionSession` - Caller-owned criteria, judgments and alternatives
//!
//! # Design Philosophy
//!
//! The engines are stateless: they take plain data and return computed
//! results. No ports or adapters are needed since there is no I/O.

mod criteria;
mod errors;
mod judgment_set;
mod pairwise_matrix;
mod problem;
mod ranking_engine;
mod report;
mod session;
mod weight_engine;

pub use criteria::Criterion;
pub use errors::AnalysisError;
pub use judgment_set::{upper_pairs, JudgmentSet, PairwiseJudgment};
pub use pairwise_matrix::PairwiseMatrix;
pub use problem::{DecisionProblem, NamedJudgment};
pub use ranking_engine::{Alternative, RankedResult, Ranking, RankingEngine, TIED_CLOSENESS};
pub use report::DecisionReport;
pub use session::DecisionSession;
pub use weight_engine::{
    CriterionWeight, WeightComputation, WeightEngine, WeightVector,
    EXTERNAL_WEIGHT_SUM_TOLERANCE, WEIGHT_SUM_TOLERANCE,
};
