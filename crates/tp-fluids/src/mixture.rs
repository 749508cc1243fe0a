//! Composite mixture specification strings.
//!
//! The engine accepts `HEOS::Name1[fraction1]&Name2[fraction2]...` wherever a
//! fluid name is expected.

use std::fmt;
use tp_core::{PropsError, PropsResult};

/// Prefix selecting the Helmholtz-energy backend for mixtures.
pub const HEOS_PREFIX: &str = "HEOS::";

/// True when `token` is already a composite mixture specification.
pub fn is_mixture(token: &str) -> bool {
    token.contains('&')
        || token
            .get(..HEOS_PREFIX.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(HEOS_PREFIX))
}

/// One mixture component.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    pub name: String,
    pub fraction: f64,
}

/// Accumulates validated components into a mixture string.
///
/// Fractions are mole or mass fractions as the caller intends; they are
/// range-checked but not normalized.
#[derive(Debug, Default, Clone)]
pub struct MixtureBuilder {
    components: Vec<Component>,
}

impl MixtureBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the component found at 1-based `position`.
    ///
    /// A blank name is skipped (the caller's row is empty). A fraction outside
    /// `[0, 1]` is rejected.
    pub fn push(&mut self, position: usize, name: &str, fraction: f64) -> PropsResult<()> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(());
        }
        if !(0.0..=1.0).contains(&fraction) {
            return Err(PropsError::InvalidMixture {
                what: format!(
                    "Fraction value {fraction} at position {position} is out of range [0, 1]."
                ),
            });
        }
        self.components.push(Component {
            name: name.to_string(),
            fraction,
        });
        Ok(())
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Finish, failing when every row was blank.
    pub fn build(self) -> PropsResult<Mixture> {
        if self.components.is_empty() {
            return Err(PropsError::InvalidMixture {
                what: "No valid components found.".to_string(),
            });
        }
        Ok(Mixture {
            components: self.components,
        })
    }
}

/// A non-empty list of components.
#[derive(Debug, Clone, PartialEq)]
pub struct Mixture {
    components: Vec<Component>,
}

impl Mixture {
    pub fn components(&self) -> &[Component] {
        &self.components
    }
}

impl fmt::Display for Mixture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(HEOS_PREFIX)?;
        for (i, c) in self.components.iter().enumerate() {
            if i > 0 {
                f.write_str("&")?;
            }
            write!(f, "{}[{}]", c.name, c.fraction)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_heos_string() {
        let mut b = MixtureBuilder::new();
        b.push(1, "Water", 0.5).unwrap();
        b.push(2, " Ethanol ", 0.5).unwrap();
        let mix = b.build().unwrap();
        assert_eq!(mix.to_string(), "HEOS::Water[0.5]&Ethanol[0.5]");
        assert!(is_mixture(&mix.to_string()));
    }

    #[test]
    fn whole_fractions_print_without_decimals() {
        let mut b = MixtureBuilder::new();
        b.push(1, "Nitrogen", 1.0).unwrap();
        assert_eq!(b.build().unwrap().to_string(), "HEOS::Nitrogen[1]");
    }

    #[test]
    fn blank_names_are_skipped() {
        let mut b = MixtureBuilder::new();
        b.push(1, "   ", 0.3).unwrap();
        b.push(2, "Argon", 0.7).unwrap();
        assert_eq!(b.components().len(), 1);
    }

    #[test]
    fn out_of_range_fraction_names_position() {
        let mut b = MixtureBuilder::new();
        let err = b.push(3, "Methane", 1.2).unwrap_err();
        assert!(err.to_string().contains("position 3"));
        assert!(b.push(1, "Methane", -0.1).is_err());
        assert!(b.push(1, "Methane", f64::NAN).is_err());
    }

    #[test]
    fn empty_builder_fails() {
        let err = MixtureBuilder::new().build().unwrap_err();
        assert!(matches!(err, PropsError::InvalidMixture { .. }));
    }

    #[test]
    fn mixture_detection() {
        assert!(is_mixture("HEOS::Water"));
        assert!(is_mixture("Heos::Water[0.5]&Ethanol[0.5]"));
        assert!(is_mixture("Water&Ethanol"));
        assert!(!is_mixture("Water"));
        assert!(!is_mixture("HEO"));
        assert!(!is_mixture("REFPROP::Water"));
    }
}
