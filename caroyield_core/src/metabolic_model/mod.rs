//! Module for the medium-facing view of an external metabolic model
//!
//! The genome-scale reconstruction itself is owned by the solver
//! implementation; the only model state this crate describes is the
//! [`medium::Medium`] handed to each solve.
pub mod medium;
