//! Module for describing optimization requests to an external flux balance
//! solver

pub mod constraint;
pub mod solver;

use indexmap::IndexMap;

/// Struct representing the solution to a flux balance optimization
#[derive(Debug, Clone)]
pub struct FluxSolution {
    /// The status of the optimization, representing if the solve was
    /// completed successfully
    pub status: OptimizationStatus,
    /// Optimized value of the objective flux (mmol)
    ///
    /// Some(f64) if the optimization was completed successfully, None
    /// otherwise
    pub objective_value: Option<f64>,
    /// Flux values at the optimum
    ///
    /// Some(IndexMap), keyed by reaction id, with values corresponding to
    /// reaction fluxes at the optimum if the problem could be solved, None
    /// otherwise
    pub fluxes: Option<IndexMap<String, f64>>,
}

impl FluxSolution {
    /// Flux through a single reaction at the optimum, None if the solution
    /// carries no flux distribution or the reaction is absent from it
    pub fn flux(&self, reaction_id: &str) -> Option<f64> {
        self.fluxes.as_ref()?.get(reaction_id).copied()
    }
}

/// Status of a completed flux balance solve
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum OptimizationStatus {
    /// An optimum has been found
    Optimal,
    /// An approximate optimum has been found
    AlmostOptimal,
    /// The objective value is not bounded
    Unbounded,
    /// The constraints conflict and no flux distribution satisfies them
    Infeasible,
    /// A numerical error occurred during solving
    NumericalError,
    /// The solver hit its iteration or time limit, or made insufficient
    /// progress
    SolverHalted,
}

impl OptimizationStatus {
    /// Whether the solver produced a usable optimum
    pub fn is_optimal(&self) -> bool {
        matches!(
            self,
            OptimizationStatus::Optimal | OptimizationStatus::AlmostOptimal
        )
    }
}

/// Represents the sense of the objective, whether it should be maximized or
/// minimized
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ObjectiveSense {
    /// The objective flux should be minimized
    Minimize,
    /// The objective flux should be maximized
    Maximize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usable_statuses() {
        assert!(OptimizationStatus::Optimal.is_optimal());
        assert!(OptimizationStatus::AlmostOptimal.is_optimal());
        assert!(!OptimizationStatus::Infeasible.is_optimal());
        assert!(!OptimizationStatus::Unbounded.is_optimal());
        assert!(!OptimizationStatus::NumericalError.is_optimal());
        assert!(!OptimizationStatus::SolverHalted.is_optimal());
    }

    #[test]
    fn flux_lookup() {
        let mut fluxes = IndexMap::new();
        fluxes.insert("EX_caro_e".to_string(), 2.5);
        let solution = FluxSolution {
            status: OptimizationStatus::Optimal,
            objective_value: Some(2.5),
            fluxes: Some(fluxes),
        };
        assert!((solution.flux("EX_caro_e").unwrap() - 2.5).abs() < 1e-12);
        assert_eq!(solution.flux("EX_o2_e"), None);

        let empty = FluxSolution {
            status: OptimizationStatus::Infeasible,
            objective_value: None,
            fluxes: None,
        };
        assert_eq!(empty.flux("EX_caro_e"), None);
    }
}
