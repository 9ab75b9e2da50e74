//! Provides struct for representing a flux constraint handed to the solver
use std::fmt::{Display, Formatter};

/// A linear equality pinning the flux of one reaction to a fixed value
#[derive(Debug, Clone, PartialEq)]
pub struct FluxConstraint {
    /// Reaction whose flux is pinned
    pub reaction: String,
    /// The right hand side of the equality constraint
    pub equals: f64,
}

impl FluxConstraint {
    /// Create a new equality constraint `reaction = equals`
    pub fn new(reaction: &str, equals: f64) -> Self {
        FluxConstraint {
            reaction: reaction.to_string(),
            equals,
        }
    }

    /// Pin a reaction to an uptake of `millimoles`
    ///
    /// Uptake is negative flux through an exchange reaction, so the pinned
    /// value is `-millimoles`.
    pub fn uptake(reaction: &str, millimoles: f64) -> Self {
        FluxConstraint::new(reaction, -millimoles)
    }
}

impl Display for FluxConstraint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {}", self.reaction, self.equals)
    }
}
