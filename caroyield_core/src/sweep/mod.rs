//! Module generating the co-feeding yield table
//!
//! The sweep walks 41 evenly spaced glucose mass fractions, asks the solver
//! for the maximal beta-carotene secretion flux at each point, and collects
//! the product and CO2 masses into a [`YieldTable`].
use log::{debug, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::configuration::CONFIGURATION;
use crate::metabolic_model::medium::{
    Medium, BETA_CAROTENE_EXCHANGE, CO2_EXCHANGE, GLUCOSE_EXCHANGE, OLEIC_ACID_EXCHANGE,
};
use crate::optimize::constraint::FluxConstraint;
use crate::optimize::solver::{FluxBalanceSolver, SolverError};
use crate::optimize::{ObjectiveSense, OptimizationStatus};
use crate::units::{
    grams_to_millimoles, millimoles_to_grams, BETA_CAROTENE_MOLAR_MASS, CO2_MOLAR_MASS,
    GLUCOSE_MOLAR_MASS, OLEIC_ACID_MOLAR_MASS,
};

/// Number of sweep points over the feed ratio
pub const SWEEP_STEPS: usize = 41;
/// Glucose mass increment between consecutive sweep points (g)
pub const GLUCOSE_STEP_GRAMS: f64 = 0.025;
/// Total substrate mass fed at every sweep point (g)
pub const TOTAL_SUBSTRATE_GRAMS: f64 = 1.;

/// One row of the yield table
///
/// Glucose and oleic acid always add up to [`TOTAL_SUBSTRATE_GRAMS`] by
/// construction. The serde field names match the column names of the
/// exported table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    /// Glucose fed (g)
    #[serde(rename = "g_glucose")]
    pub glucose_grams: f64,
    /// Oleic acid fed (g)
    #[serde(rename = "g_oleic_acid")]
    pub oleic_acid_grams: f64,
    /// Maximal beta-carotene production (g)
    #[serde(rename = "g_beta_carotene")]
    pub beta_carotene_grams: f64,
    /// CO2 released at that optimum (g)
    #[serde(rename = "g_co2")]
    pub co2_grams: f64,
}

impl SweepPoint {
    /// Whether glucose and oleic acid add up to the total substrate mass
    pub fn is_mass_balanced(&self) -> bool {
        let tolerance = CONFIGURATION.read().unwrap().tolerance;
        (self.glucose_grams + self.oleic_acid_grams - TOTAL_SUBSTRATE_GRAMS).abs() < tolerance
    }
}

/// Ordered collection of sweep points, increasing in glucose fraction
///
/// The order is significant: the chart draws reference lines between the
/// first and last rows. A table is built once per sweep and never mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct YieldTable {
    points: Vec<SweepPoint>,
}

impl YieldTable {
    /// Create a table from rows already in sweep order
    pub fn new(points: Vec<SweepPoint>) -> Self {
        YieldTable { points }
    }

    /// All rows in sweep order
    pub fn points(&self) -> &[SweepPoint] {
        &self.points
    }

    /// The row with the lowest glucose fraction
    pub fn first(&self) -> Option<&SweepPoint> {
        self.points.first()
    }

    /// The row with the highest glucose fraction
    pub fn last(&self) -> Option<&SweepPoint> {
        self.points.last()
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the table holds no rows
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Errors aborting a sweep
///
/// Any of these discards the whole run; no partial table is returned.
#[derive(Debug, Error)]
pub enum SweepError {
    /// The solver itself failed
    #[error(transparent)]
    Solver(#[from] SolverError),
    /// The solve finished without reaching an optimum
    #[error("solve finished with status {status:?} instead of an optimum")]
    NotOptimal {
        /// Status the solver reported
        status: OptimizationStatus,
    },
    /// An optimal status came back without an objective value
    #[error("solver reported an optimum but no objective value")]
    MissingObjective,
    /// An optimal status came back without a flux distribution
    #[error("solver reported an optimum but no flux distribution")]
    MissingFluxes,
    /// The flux distribution misses a reaction the sweep needs
    #[error("flux distribution has no entry for {reaction}")]
    MissingFlux {
        /// The absent reaction
        reaction: String,
    },
}

/// Maximal beta-carotene production for a single glucose / oleic acid split
///
/// Converts both masses to millimoles, builds the co-feeding medium, pins
/// both uptakes to exactly the fed amounts, and asks the solver to maximize
/// flux through the beta-carotene exchange. The objective flux and the CO2
/// exchange flux are converted back to grams.
pub fn co_feed_point<S: FluxBalanceSolver>(
    solver: &mut S,
    glucose_grams: f64,
    oleic_acid_grams: f64,
) -> Result<SweepPoint, SweepError> {
    let glucose_millimoles = grams_to_millimoles(glucose_grams, GLUCOSE_MOLAR_MASS);
    let oleic_acid_millimoles = grams_to_millimoles(oleic_acid_grams, OLEIC_ACID_MOLAR_MASS);

    let medium = Medium::co_feed(glucose_millimoles, oleic_acid_millimoles);
    // The medium alone only caps the uptakes; the equality constraints force
    // both substrates to be consumed completely.
    let constraints = [
        FluxConstraint::uptake(GLUCOSE_EXCHANGE, glucose_millimoles),
        FluxConstraint::uptake(OLEIC_ACID_EXCHANGE, oleic_acid_millimoles),
    ];

    let solution = solver.optimize(
        &medium,
        BETA_CAROTENE_EXCHANGE,
        &constraints,
        ObjectiveSense::Maximize,
    )?;
    if !solution.status.is_optimal() {
        return Err(SweepError::NotOptimal {
            status: solution.status,
        });
    }
    let carotene_millimoles = solution.objective_value.ok_or(SweepError::MissingObjective)?;
    if solution.fluxes.is_none() {
        return Err(SweepError::MissingFluxes);
    }
    let co2_millimoles = solution
        .flux(CO2_EXCHANGE)
        .ok_or_else(|| SweepError::MissingFlux {
            reaction: CO2_EXCHANGE.to_string(),
        })?;

    Ok(SweepPoint {
        glucose_grams,
        oleic_acid_grams,
        beta_carotene_grams: millimoles_to_grams(carotene_millimoles, BETA_CAROTENE_MOLAR_MASS),
        co2_grams: millimoles_to_grams(co2_millimoles, CO2_MOLAR_MASS),
    })
}

/// Sweep all feed ratios and collect the yield table
///
/// Runs [`SWEEP_STEPS`] sequential solves with the glucose fraction rising
/// by [`GLUCOSE_STEP_GRAMS`] per step. The first failing point aborts the
/// whole sweep.
pub fn generate_yield_table<S: FluxBalanceSolver>(
    solver: &mut S,
) -> Result<YieldTable, SweepError> {
    let mut points = Vec::with_capacity(SWEEP_STEPS);
    for step in 0..SWEEP_STEPS {
        let glucose_grams = step as f64 * GLUCOSE_STEP_GRAMS;
        let oleic_acid_grams = TOTAL_SUBSTRATE_GRAMS - glucose_grams;
        let point = co_feed_point(solver, glucose_grams, oleic_acid_grams)?;
        debug!(
            "step {}: {:.3} g glucose, {:.3} g oleic acid -> {:.4} g beta-carotene, {:.4} g CO2",
            step,
            point.glucose_grams,
            point.oleic_acid_grams,
            point.beta_carotene_grams,
            point.co2_grams
        );
        points.push(point);
    }
    info!("swept {} feed ratios", points.len());
    Ok(YieldTable::new(points))
}
