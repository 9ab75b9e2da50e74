//! This module provides the Medium struct describing substrate availability
//! for a single solve
use indexmap::IndexMap;

use crate::configuration::CONFIGURATION;

/// Exchange reaction for glucose uptake
pub const GLUCOSE_EXCHANGE: &str = "EX_glc_e";
/// Exchange reaction for oleic acid uptake
pub const OLEIC_ACID_EXCHANGE: &str = "EX_ocdcea_e";
/// Exchange reaction for glycerol uptake, shut off during the sweep
pub const GLYCEROL_EXCHANGE: &str = "EX_glyc_e";
/// Exchange reaction for water
pub const WATER_EXCHANGE: &str = "EX_h2o_e";
/// Exchange reaction for protons
pub const PROTON_EXCHANGE: &str = "EX_h_e";
/// Exchange reaction for ammonium
pub const AMMONIUM_EXCHANGE: &str = "EX_nh4_e";
/// Exchange reaction for oxygen
pub const OXYGEN_EXCHANGE: &str = "EX_o2_e";
/// Exchange reaction for phosphate
pub const PHOSPHATE_EXCHANGE: &str = "EX_pi_e";
/// Exchange reaction for sulfate
pub const SULFATE_EXCHANGE: &str = "EX_so4_e";
/// Cytosolic trehalose transport, shut off during the sweep
pub const TREHALOSE_TRANSPORT: &str = "trehalose_c_tp";
/// Exchange reaction secreting beta-carotene, the sweep objective
pub const BETA_CAROTENE_EXCHANGE: &str = "EX_caro_e";
/// Exchange reaction for carbon dioxide
///
/// # Note:
/// The reconstruction names this exchange with parenthesized compartment
/// notation, unlike the underscore notation of the uptake exchanges.
pub const CO2_EXCHANGE: &str = "EX_co2(e)";

/// Map of exchange reaction ids to maximum uptake rates (mmol)
///
/// A Medium is built fresh for every solve and passed by reference, so no
/// medium state survives between calls.
#[derive(Debug, Clone, PartialEq)]
pub struct Medium {
    bounds: IndexMap<String, f64>,
}

impl Medium {
    /// Create the co-feeding medium for one sweep point
    ///
    /// Glucose and oleic acid are capped at the supplied amounts, glycerol
    /// uptake and trehalose transport are shut off, and the remaining
    /// inorganic exchanges are left at the unconstrained uptake bound.
    pub fn co_feed(glucose_millimoles: f64, oleic_acid_millimoles: f64) -> Self {
        let unconstrained = CONFIGURATION.read().unwrap().unconstrained_uptake;
        let mut bounds = IndexMap::new();
        bounds.insert(GLUCOSE_EXCHANGE.to_string(), glucose_millimoles);
        bounds.insert(OLEIC_ACID_EXCHANGE.to_string(), oleic_acid_millimoles);
        bounds.insert(GLYCEROL_EXCHANGE.to_string(), 0.);
        bounds.insert(WATER_EXCHANGE.to_string(), unconstrained);
        bounds.insert(PROTON_EXCHANGE.to_string(), unconstrained);
        bounds.insert(AMMONIUM_EXCHANGE.to_string(), unconstrained);
        bounds.insert(OXYGEN_EXCHANGE.to_string(), unconstrained);
        bounds.insert(PHOSPHATE_EXCHANGE.to_string(), unconstrained);
        bounds.insert(SULFATE_EXCHANGE.to_string(), unconstrained);
        bounds.insert(TREHALOSE_TRANSPORT.to_string(), 0.);
        Medium { bounds }
    }

    /// Maximum uptake rate for an exchange reaction, None if the medium does
    /// not mention it
    pub fn uptake_bound(&self, exchange_id: &str) -> Option<f64> {
        self.bounds.get(exchange_id).copied()
    }

    /// Iterate over (exchange id, bound) pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.bounds.iter().map(|(id, bound)| (id.as_str(), *bound))
    }

    /// Number of exchange reactions in the medium
    pub fn len(&self) -> usize {
        self.bounds.len()
    }

    /// Whether the medium holds no exchange bounds
    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }
}
