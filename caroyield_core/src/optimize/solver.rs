//! Trait connecting the yield sweep to an external flux balance solver
use thiserror::Error;

use crate::metabolic_model::medium::Medium;
use crate::optimize::constraint::FluxConstraint;
use crate::optimize::{FluxSolution, ObjectiveSense};

/// Capability interface of the external genome-scale solver
///
/// Implementations wrap a metabolic reconstruction together with whatever
/// linear programming backend drives it. Every call carries the complete
/// description of one solve: the medium limiting substrate uptake, the
/// objective reaction, equality constraints on individual fluxes, and the
/// optimization sense. The receiver is mutable because backends commonly
/// keep per-solve scratch state, which also keeps a non-reentrant backend
/// safe under a sequential sweep.
pub trait FluxBalanceSolver {
    /// Solve for the flux distribution optimizing `objective_id`
    fn optimize(
        &mut self,
        medium: &Medium,
        objective_id: &str,
        constraints: &[FluxConstraint],
        sense: ObjectiveSense,
    ) -> Result<FluxSolution, SolverError>;
}

/// Errors reported by solver implementations
#[derive(Debug, Clone, Error)]
pub enum SolverError {
    /// The objective reaction is not part of the wrapped model
    #[error("objective reaction {0} is not part of the model")]
    UnknownObjective(String),
    /// A medium or constrained reaction is not part of the wrapped model
    #[error("reaction {0} is not part of the model")]
    UnknownReaction(String),
    /// The backend itself failed
    #[error("solver backend failed: {0}")]
    Backend(String),
}
