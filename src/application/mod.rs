//! Application layer - Command handlers that orchestrate domain operations.

mod error;
pub mod handlers;

pub use error::ApplicationError;
pub use handlers::{
    ComputeWeightsCommand, ComputeWeightsHandler, RankScenariosCommand, RankScenariosHandler,
};
