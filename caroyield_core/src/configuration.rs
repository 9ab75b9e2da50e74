use std::sync::{LazyLock, RwLock};

pub static CONFIGURATION: LazyLock<RwLock<Configuration>> =
    LazyLock::new(|| RwLock::new(Configuration::default()));

/// Process-wide settings for medium construction and float comparisons
pub struct Configuration {
    /// Uptake bound applied to exchanges left effectively unconstrained
    /// during the co-feeding sweep
    pub unconstrained_uptake: f64,
    /// Absolute tolerance for mass-balance checks
    pub tolerance: f64,
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            unconstrained_uptake: 10000.,
            tolerance: 1e-09,
        }
    }
}
