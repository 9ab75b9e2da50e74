//! Conversion between substrate masses and the molar amounts the solver
//! operates on

/// Molar mass of glucose (g/mol)
pub const GLUCOSE_MOLAR_MASS: f64 = 180.16;
/// Molar mass of oleic acid (g/mol)
pub const OLEIC_ACID_MOLAR_MASS: f64 = 282.47;
/// Molar mass of beta-carotene (g/mol)
pub const BETA_CAROTENE_MOLAR_MASS: f64 = 536.87;
/// Molar mass of carbon dioxide (g/mol)
pub const CO2_MOLAR_MASS: f64 = 44.01;

/// Convert a mass in grams to an amount in millimoles
pub fn grams_to_millimoles(grams: f64, molar_mass: f64) -> f64 {
    1000. * grams / molar_mass
}

/// Convert an amount in millimoles back to a mass in grams
pub fn millimoles_to_grams(millimoles: f64, molar_mass: f64) -> f64 {
    millimoles / 1000. * molar_mass
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        for grams in [0., 0.025, 0.5, 1., 7.25] {
            for molar_mass in [
                GLUCOSE_MOLAR_MASS,
                OLEIC_ACID_MOLAR_MASS,
                BETA_CAROTENE_MOLAR_MASS,
                CO2_MOLAR_MASS,
            ] {
                let back = millimoles_to_grams(grams_to_millimoles(grams, molar_mass), molar_mass);
                assert!((back - grams).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn one_gram_of_each_substrate() {
        assert!((grams_to_millimoles(1., GLUCOSE_MOLAR_MASS) - 5.5506).abs() < 1e-4);
        assert!((grams_to_millimoles(1., OLEIC_ACID_MOLAR_MASS) - 3.5403).abs() < 1e-4);
    }
}
