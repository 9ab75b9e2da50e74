//! Theoretical yield curves for beta-carotene production under glucose and
//! oleic acid co-feeding.
//!
//! A genome-scale metabolic reconstruction, wrapped behind the
//! [`FluxBalanceSolver`] capability, is asked for the maximal beta-carotene
//! secretion flux at 41 evenly spaced feed ratios. The resulting table of
//! product and CO2 masses can be exported ([`io`]) or drawn as a line chart
//! ([`plot`]).
//!
//! # Example
//! ```ignore
//! use caroyield_core::plot::{render_yield_curve, PlotConfig};
//! use caroyield_core::sweep::generate_yield_table;
//!
//! // `IYaliSolver` adapts a Yarrowia lipolytica reconstruction to the
//! // FluxBalanceSolver trait; any FBA backend works the same way.
//! let mut solver = IYaliSolver::load("iYali.json")?;
//! let table = generate_yield_table(&mut solver)?;
//! render_yield_curve(&table, "beta_carotene_yield.svg", &PlotConfig::default())?;
//! ```

pub mod configuration;
pub mod io;
pub mod metabolic_model;
pub mod optimize;
pub mod plot;
pub mod sweep;
pub mod units;

pub use optimize::solver::FluxBalanceSolver;
pub use sweep::{generate_yield_table, SweepPoint, YieldTable};
