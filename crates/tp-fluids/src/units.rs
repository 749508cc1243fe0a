//! Engineering <-> SI unit translation.
//!
//! The engine works in SI (K, Pa, J). The engineering convention uses °C, bar
//! and kJ. Which rule applies is decided by the quantity category of the
//! canonical identifier, never by the raw alias the caller typed.

use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;
use uom::si::available_energy::{joule_per_kilogram, kilojoule_per_kilogram};
use uom::si::f64::{AvailableEnergy, Pressure, ThermodynamicTemperature};
use uom::si::pressure::{bar, pascal};
use uom::si::thermodynamic_temperature::{degree_celsius, kelvin};

/// Physical-dimension class governing the conversion rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuantityCategory {
    /// °C <-> K, additive 273.15
    Temperature,
    /// bar <-> Pa, factor 1e5
    Pressure,
    /// kJ-based <-> J-based (enthalpy, energy, entropy, heat capacity), factor 1000
    EnergyLike,
    /// No conversion
    Other,
}

impl fmt::Display for QuantityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Temperature => write!(f, "Temperature"),
            Self::Pressure => write!(f, "Pressure"),
            Self::EnergyLike => write!(f, "Energy-like"),
            Self::Other => write!(f, "Other"),
        }
    }
}

const TEMPERATURE_NAMES: &[&str] = &[
    "T", "Tcrit", "Tmax", "Tmin", "Ttriple", "T_freeze", "T_reducing", "Twb", "Tdp",
];

const PRESSURE_NAMES: &[&str] = &["P", "Pcrit", "pmax", "pmin", "ptriple", "p_reducing", "P_w"];

const ENERGY_LIKE_NAMES: &[&str] = &[
    "H", "Hmolar", "U", "Umolar", "S", "Smolar", "Smolar_residual", "Cpmass", "Cvmass",
    "Cpmolar", "Cvmolar", "Cp0mass", "Cp0molar", "G", "Gmolar", "Hda", "Hha", "Sda", "Sha",
    "Cda", "Cha",
];

struct CategorySets {
    temperature: HashSet<String>,
    pressure: HashSet<String>,
    energy_like: HashSet<String>,
}

fn upper_set(names: &[&str]) -> HashSet<String> {
    names.iter().map(|n| n.to_uppercase()).collect()
}

static CATEGORIES: LazyLock<CategorySets> = LazyLock::new(|| CategorySets {
    temperature: upper_set(TEMPERATURE_NAMES),
    pressure: upper_set(PRESSURE_NAMES),
    energy_like: upper_set(ENERGY_LIKE_NAMES),
});

/// Classify a canonical identifier (fluid or humid-air vocabulary).
///
/// Membership is case-insensitive; anything not listed is [`QuantityCategory::Other`].
pub fn classify(canonical: &str) -> QuantityCategory {
    let key = canonical.to_uppercase();
    let sets = &*CATEGORIES;
    if sets.temperature.contains(&key) {
        QuantityCategory::Temperature
    } else if sets.pressure.contains(&key) {
        QuantityCategory::Pressure
    } else if sets.energy_like.contains(&key) {
        QuantityCategory::EnergyLike
    } else {
        QuantityCategory::Other
    }
}

/// Engineering value to SI.
pub fn to_si(category: QuantityCategory, value: f64) -> f64 {
    match category {
        QuantityCategory::Temperature => {
            ThermodynamicTemperature::new::<degree_celsius>(value).get::<kelvin>()
        }
        QuantityCategory::Pressure => Pressure::new::<bar>(value).get::<pascal>(),
        QuantityCategory::EnergyLike => {
            AvailableEnergy::new::<kilojoule_per_kilogram>(value).get::<joule_per_kilogram>()
        }
        QuantityCategory::Other => value,
    }
}

/// SI value to engineering.
pub fn from_si(category: QuantityCategory, value: f64) -> f64 {
    match category {
        QuantityCategory::Temperature => {
            ThermodynamicTemperature::new::<kelvin>(value).get::<degree_celsius>()
        }
        QuantityCategory::Pressure => Pressure::new::<pascal>(value).get::<bar>(),
        QuantityCategory::EnergyLike => {
            AvailableEnergy::new::<joule_per_kilogram>(value).get::<kilojoule_per_kilogram>()
        }
        QuantityCategory::Other => value,
    }
}

/// Unit convention the caller speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnitSystem {
    /// Values pass through untouched.
    #[default]
    Si,
    /// °C, bar, kJ; converted per identifier category.
    Engineering,
}

impl UnitSystem {
    /// Convert a caller value for `canonical` into the engine's SI value.
    pub fn input(self, canonical: &str, value: f64) -> f64 {
        match self {
            UnitSystem::Si => value,
            UnitSystem::Engineering => to_si(classify(canonical), value),
        }
    }

    /// Convert an engine SI result for `canonical` back to the caller's units.
    pub fn output(self, canonical: &str, value: f64) -> f64 {
        match self {
            UnitSystem::Si => value,
            UnitSystem::Engineering => from_si(classify(canonical), value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tp_core::{Tolerances, nearly_equal};

    fn close(a: f64, b: f64) -> bool {
        nearly_equal(a, b, Tolerances::default())
    }

    #[test]
    fn classify_canonical_names() {
        assert_eq!(classify("T"), QuantityCategory::Temperature);
        assert_eq!(classify("Tcrit"), QuantityCategory::Temperature);
        assert_eq!(classify("Twb"), QuantityCategory::Temperature);
        assert_eq!(classify("P"), QuantityCategory::Pressure);
        assert_eq!(classify("P_w"), QuantityCategory::Pressure);
        assert_eq!(classify("H"), QuantityCategory::EnergyLike);
        assert_eq!(classify("Cpmass"), QuantityCategory::EnergyLike);
        assert_eq!(classify("Hda"), QuantityCategory::EnergyLike);
        assert_eq!(classify("D"), QuantityCategory::Other);
        assert_eq!(classify("Q"), QuantityCategory::Other);
        assert_eq!(classify("viscosity"), QuantityCategory::Other);
    }

    #[test]
    fn classify_ignores_case() {
        assert_eq!(classify("tcrit"), QuantityCategory::Temperature);
        assert_eq!(classify("PMAX"), QuantityCategory::Pressure);
    }

    #[test]
    fn raw_aliases_are_not_categories() {
        // Only canonical names carry a category; aliases must be resolved first.
        assert_eq!(classify("Temperature"), QuantityCategory::Other);
        assert_eq!(classify("Enthalpy"), QuantityCategory::Other);
    }

    #[test]
    fn forward_rules() {
        assert!(close(to_si(QuantityCategory::Temperature, 25.0), 298.15));
        assert!(close(to_si(QuantityCategory::Pressure, 1.01325), 101_325.0));
        assert!(close(to_si(QuantityCategory::EnergyLike, 2.5), 2500.0));
        assert_eq!(to_si(QuantityCategory::Other, 0.42), 0.42);
    }

    #[test]
    fn inverse_rules() {
        assert!(close(from_si(QuantityCategory::Temperature, 647.096), 373.946));
        assert!(close(from_si(QuantityCategory::Pressure, 2.2064e7), 220.64));
        assert!(close(from_si(QuantityCategory::EnergyLike, 4180.0), 4.18));
        assert_eq!(from_si(QuantityCategory::Other, 998.2), 998.2);
    }

    #[test]
    fn unit_system_dispatches_per_identifier() {
        let eng = UnitSystem::Engineering;
        assert!(close(eng.input("T", 100.0), 373.15));
        assert!(close(eng.input("P", 1.0), 1.0e5));
        assert!(close(eng.output("H", 2_675_000.0), 2675.0));
        assert_eq!(eng.input("Q", 0.5), 0.5);
        assert_eq!(UnitSystem::Si.input("T", 300.0), 300.0);
        assert_eq!(UnitSystem::Si.output("P", 101_325.0), 101_325.0);
    }
}
