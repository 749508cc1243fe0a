//! Identifier aliasing for the three engine vocabularies.
//!
//! Each table maps a case-insensitive raw token to the canonical name the
//! engine expects. Lookups never fail: a token with no entry is forwarded to
//! the engine unchanged, where an unknown name surfaces as an engine error.

use crate::mixture::is_mixture;
use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Which alias table to consult.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vocabulary {
    /// Fluid-state property codes (`T`, `P`, `Hmass`, ...).
    Property,
    /// Pure fluid and predefined mixture names.
    Fluid,
    /// Humid-air property codes (`Twb`, `R`, `W`, ...).
    HumidAir,
}

impl Vocabulary {
    pub const ALL: [Vocabulary; 3] = [
        Vocabulary::Property,
        Vocabulary::Fluid,
        Vocabulary::HumidAir,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Vocabulary::Property => "property",
            Vocabulary::Fluid => "fluid",
            Vocabulary::HumidAir => "humid-air",
        }
    }

    pub fn table(self) -> &'static AliasTable {
        match self {
            Vocabulary::Property => &PROPERTY_ALIASES,
            Vocabulary::Fluid => &FLUID_ALIASES,
            Vocabulary::HumidAir => &HUMID_AIR_ALIASES,
        }
    }
}

impl std::str::FromStr for Vocabulary {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "property" | "prop" => Ok(Vocabulary::Property),
            "fluid" => Ok(Vocabulary::Fluid),
            "humid-air" | "humidair" | "ha" => Ok(Vocabulary::HumidAir),
            _ => Err("unknown vocabulary (expected property, fluid or humid-air)"),
        }
    }
}

/// Immutable case-insensitive alias map.
pub struct AliasTable {
    entries: HashMap<String, &'static str>,
}

impl AliasTable {
    fn from_entries(entries: &[(&'static str, &'static str)]) -> Self {
        Self {
            entries: entries
                .iter()
                .map(|(alias, canonical)| (alias.to_uppercase(), *canonical))
                .collect(),
        }
    }

    /// Case-insensitive lookup.
    pub fn get(&self, token: &str) -> Option<&'static str> {
        self.entries.get(&token.to_uppercase()).copied()
    }

    /// Mapped canonical name, or the token itself on a miss.
    pub fn resolve<'a>(&self, token: &'a str) -> Cow<'a, str> {
        match self.get(token) {
            Some(canonical) => Cow::Borrowed(canonical),
            None => Cow::Borrowed(token),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct canonical names, sorted.
    pub fn canonical_names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.entries.values().copied().collect();
        names.sort_unstable();
        names.dedup();
        names
    }
}

/// Resolve a token against the given vocabulary.
///
/// Fluid names get the mixture bypass and separator stripping of
/// [`resolve_fluid`]; the other vocabularies are a plain table lookup.
pub fn resolve(vocabulary: Vocabulary, token: &str) -> Cow<'_, str> {
    match vocabulary {
        Vocabulary::Fluid => resolve_fluid(token),
        other => other.table().resolve(token),
    }
}

/// Canonical fluid-state property code.
pub fn resolve_property(token: &str) -> Cow<'_, str> {
    PROPERTY_ALIASES.resolve(token)
}

/// Canonical humid-air property code.
pub fn resolve_humid_air(token: &str) -> Cow<'_, str> {
    HUMID_AIR_ALIASES.resolve(token)
}

/// Canonical fluid name.
///
/// Mixture specifications (containing `&` or starting with `HEOS::`) pass
/// through untouched. Otherwise `-`, `_` and spaces are stripped before the
/// lookup, so `R-134a`, `r134a` and `R_134A` all resolve to `R134a`. On a
/// miss the token is returned as given, not the stripped form.
pub fn resolve_fluid(token: &str) -> Cow<'_, str> {
    if is_mixture(token) {
        return Cow::Borrowed(token);
    }
    let normalized: String = token
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .collect();
    match FLUID_ALIASES.get(&normalized) {
        Some(canonical) => Cow::Borrowed(canonical),
        None => Cow::Borrowed(token),
    }
}

pub static PROPERTY_ALIASES: LazyLock<AliasTable> =
    LazyLock::new(|| AliasTable::from_entries(PROPERTY_ENTRIES));
pub static FLUID_ALIASES: LazyLock<AliasTable> =
    LazyLock::new(|| AliasTable::from_entries(FLUID_ENTRIES));
pub static HUMID_AIR_ALIASES: LazyLock<AliasTable> =
    LazyLock::new(|| AliasTable::from_entries(HUMID_AIR_ENTRIES));

#[rustfmt::skip]
const PROPERTY_ENTRIES: &[(&str, &str)] = &[
    // temperature
    ("T", "T"), ("TEMP", "T"), ("TEMPERATURE", "T"),
    // pressure
    ("P", "P"), ("PRES", "P"), ("PRESSURE", "P"),
    // enthalpy
    ("H", "H"), ("ENTH", "H"), ("ENTHALPY", "H"), ("HMASS", "H"), ("H_MASS", "H"),
    ("HMOLAR", "Hmolar"), ("H_MOLAR", "Hmolar"),
    // internal energy
    ("U", "U"), ("INTERNALENERGY", "U"), ("UMASS", "U"), ("U_MASS", "U"),
    ("UMOLAR", "Umolar"), ("U_MOLAR", "Umolar"),
    // entropy
    ("S", "S"), ("ENTR", "S"), ("ENTROPY", "S"), ("SMASS", "S"), ("S_MASS", "S"),
    ("SMOLAR", "Smolar"), ("S_MOLAR", "Smolar"),
    ("SMOLAR_RESIDUAL", "Smolar_residual"), ("SMOLARRESIDUAL", "Smolar_residual"),
    // density
    ("D", "D"), ("RHO", "D"), ("DENS", "D"), ("DENSITY", "D"), ("DMASS", "D"), ("D_MASS", "D"),
    ("RHOMASS", "D"),
    ("DMOLAR", "Dmolar"), ("RHOMOLAR", "Dmolar"), ("DMOL", "Dmolar"), ("D_MOL", "Dmolar"),
    ("D_MOLAR", "Dmolar"),
    // heat capacities
    ("CVMASS", "Cvmass"), ("CV", "Cvmass"),
    ("CPMASS", "Cpmass"), ("CP", "Cpmass"), ("C", "Cpmass"),
    ("CPMOLAR", "Cpmolar"), ("CPMOL", "Cpmolar"),
    ("CVMOLAR", "Cvmolar"), ("CVMOL", "Cvmolar"),
    ("CP0MASS", "Cp0mass"), ("CP0MOLAR", "Cp0molar"),
    // quality
    ("Q", "Q"), ("QUALITY", "Q"), ("X", "Q"), ("VAPORFRACTION", "Q"), ("VAPOR_FRACTION", "Q"),
    // reduced state
    ("TAU", "Tau"), ("DELTA", "Delta"),
    // Helmholtz energy derivatives
    ("ALPHA0", "Alpha0"), ("ALPHAR", "Alphar"),
    ("DALPHA0_DDELTA_CONSTTAU", "DALPHA0_DDELTA_CONSTTAU"),
    ("DALPHA0_DDELTA", "DALPHA0_DDELTA_CONSTTAU"),
    ("DALPHA0_DTAU_CONSTDELTA", "DALPHA0_DTAU_CONSTDELTA"),
    ("DALPHA0_DTAU", "DALPHA0_DTAU_CONSTDELTA"),
    ("DALPHAR_DDELTA_CONSTTAU", "DALPHAR_DDELTA_CONSTTAU"),
    ("DALPHAR_DDELTA", "DALPHAR_DDELTA_CONSTTAU"),
    ("DALPHAR_DTAU_CONSTDELTA", "DALPHAR_DTAU_CONSTDELTA"),
    ("DALPHAR_DTAU", "DALPHAR_DTAU_CONSTDELTA"),
    // speed of sound
    ("SPEED_OF_SOUND", "A"), ("SPEEDOFSOUND", "A"), ("A", "A"), ("W", "A"),
    // virial coefficients
    ("BVIRIAL", "Bvirial"), ("CVIRIAL", "Cvirial"),
    ("DBVIRIAL_DT", "DBVIRIAL_DT"), ("DBVIRIAL", "DBVIRIAL_DT"), ("DBVIRIALDT", "DBVIRIAL_DT"),
    ("DCVIRIAL_DT", "DCVIRIAL_DT"), ("DCVIRIAL", "DCVIRIAL_DT"), ("DCVIRIALDT", "DCVIRIAL_DT"),
    // transport
    ("K", "conductivity"), ("CONDUCTIVITY", "conductivity"), ("L", "conductivity"),
    ("MU", "viscosity"), ("VISCOSITY", "viscosity"), ("V", "viscosity"),
    ("PRANDTL", "Prandtl"),
    ("DIPOLE_MOMENT", "DIPOLE_MOMENT"), ("DIPOLEMOMENT", "DIPOLE_MOMENT"), ("DIPOLE", "DIPOLE_MOMENT"),
    // Gibbs and Helmholtz energies
    ("G", "G"), ("GMASS", "G"), ("GIBBS", "G"), ("GMOLAR", "Gmolar"),
    ("HELMHOLTZMASS", "HELMHOLTZMASS"), ("HELMHOLTZMOLAR", "HELMHOLTZMOLAR"), ("HH", "HELMHOLTZMASS"),
    // expansion and compressibility
    ("GAMMA", "isentropic_expansion_coefficient"),
    ("ISENTROPICEXPANSIONCOEFFICIENT", "isentropic_expansion_coefficient"),
    ("ISOBARIC_EXPANSION_COEFFICIENT", "isobaric_expansion_coefficient"),
    ("ISOBARICEXPANSION", "isobaric_expansion_coefficient"),
    ("ISOBARICEXPANSIONCOEFFICIENT", "isobaric_expansion_coefficient"),
    ("ISOTHERMAL_COMPRESSIBILITY", "isothermal_compressibility"),
    ("ISOTHERMALCOMPRESSIBILITY", "isothermal_compressibility"),
    ("Z", "Z"), ("COMPRESSIBILITY", "Z"), ("COMPRESSIBILITYFACTOR", "Z"),
    // surface tension
    ("SURFACE_TENSION", "surface_tension"), ("SURFACETENSION", "surface_tension"),
    ("SIGMA", "surface_tension"), ("I", "surface_tension"),
    // molar mass
    ("MM", "M"), ("MOLAR_MASS", "M"), ("MOLARMASS", "M"), ("MOLEMASS", "M"),
    // critical point
    ("PCRIT", "Pcrit"), ("P_CRITICAL", "Pcrit"), ("PCRITICAL", "Pcrit"),
    ("TCRIT", "Tcrit"), ("T_CRITICAL", "Tcrit"), ("TCRITICAL", "Tcrit"),
    ("RHOCRIT", "rhocrit"), ("RHOCRITICAL", "rhocrit"), ("DCRIT", "rhocrit"),
    ("RHOMASS_CRITICAL", "rhomass_critical"), ("RHOMASSCRITICAL", "rhomass_critical"),
    ("RHOMOLAR_CRITICAL", "rhomolar_critical"), ("RHOMOLARCRITICAL", "rhomolar_critical"),
    ("PHASE", "Phase"),
    // limits
    ("PMAX", "pmax"), ("P_MAX", "pmax"),
    ("PMIN", "pmin"), ("P_MIN", "pmin"),
    ("TMAX", "Tmax"), ("T_MAX", "Tmax"),
    ("TMIN", "Tmin"), ("T_MIN", "Tmin"),
    // triple point
    ("PTRIPLE", "ptriple"), ("P_TRIPLE", "ptriple"), ("PTRIP", "ptriple"),
    ("TTRIPLE", "Ttriple"), ("T_TRIPLE", "Ttriple"), ("TTRIP", "Ttriple"),
    // reducing state
    ("P_REDUCING", "p_reducing"), ("PREDUCING", "p_reducing"),
    ("T_REDUCING", "T_reducing"), ("TREDUCING", "T_reducing"),
    ("RHOMASS_REDUCING", "rhomass_reducing"), ("RHOMASSREDUCING", "rhomass_reducing"),
    ("RHOMOLAR_REDUCING", "rhomolar_reducing"), ("RHOMOLARREDUCING", "rhomolar_reducing"),
    ("T_FREEZE", "T_freeze"), ("TFREEZE", "T_freeze"), ("FREEZING_TEMPERATURE", "T_freeze"),
    // acentric factor
    ("ACENTRIC", "acentric"), ("ACENTRIC_FACTOR", "acentric"), ("ACENTRICFACTOR", "acentric"),
    ("OMEGA", "acentric"),
    // miscellaneous
    ("FUNDAMENTAL_DERIVATIVE_OF_GAS_DYNAMICS", "fundamental_derivative_of_gas_dynamics"),
    ("FUNDAMENTALDERIVATIVE", "fundamental_derivative_of_gas_dynamics"),
    ("FH", "fundamental_derivative_of_gas_dynamics"),
    ("GAS_CONSTANT", "gas_constant"), ("GASCONSTANT", "gas_constant"),
    ("FRACTION_MAX", "fraction_max"), ("FRACTIONMAX", "fraction_max"),
    ("FRACTION_MIN", "fraction_min"), ("FRACTIONMIN", "fraction_min"),
    ("GWP20", "GWP20"), ("GWP_20", "GWP20"),
    ("GWP100", "GWP100"), ("GWP_100", "GWP100"),
    ("GWP500", "GWP500"), ("GWP_500", "GWP500"),
    ("ODP", "ODP"), ("OZONEDEPLETIONPOTENTIAL", "ODP"),
    ("PIP", "PIP"),
];

// Keys are stored with `-`, `_` and spaces already removed.
#[rustfmt::skip]
const FLUID_ENTRIES: &[(&str, &str)] = &[
    ("1BUTENE", "1-Butene"), ("ACETONE", "Acetone"), ("AIR", "Air"),
    ("AMMONIA", "Ammonia"), ("NH3", "Ammonia"),
    ("ARGON", "Argon"), ("AR", "Argon"),
    ("BENZENE", "Benzene"),
    ("CARBONDIOXIDE", "CarbonDioxide"), ("CO2", "CarbonDioxide"),
    ("CARBONMONOXIDE", "CarbonMonoxide"), ("CO", "CarbonMonoxide"),
    ("CARBONYLSULFIDE", "CarbonylSulfide"), ("COS", "CarbonylSulfide"),
    ("CIS2BUTENE", "cis-2-Butene"),
    ("CYCLOHEXANE", "CycloHexane"), ("CYCLOPENTANE", "Cyclopentane"),
    ("CYCLOPROPANE", "CycloPropane"),
    ("D4", "D4"), ("D5", "D5"), ("D6", "D6"),
    ("DEUTERIUM", "Deuterium"), ("D2", "Deuterium"),
    ("DICHLOROETHANE", "Dichloroethane"), ("DIETHYLETHER", "DiethylEther"),
    ("DIMETHYLCARBONATE", "DimethylCarbonate"),
    ("DIMETHYLETHER", "DimethylEther"), ("DME", "DimethylEther"),
    ("ETHANE", "Ethane"), ("C2H6", "Ethane"),
    ("ETHANOL", "Ethanol"), ("ETHYLBENZENE", "EthylBenzene"),
    ("ETHYLENE", "Ethylene"), ("C2H4", "Ethylene"),
    ("ETHYLENEOXIDE", "EthyleneOxide"),
    ("FLUORINE", "Fluorine"), ("F2", "Fluorine"),
    ("HEAVYWATER", "HeavyWater"), ("D2O", "HeavyWater"),
    ("HELIUM", "Helium"), ("HE", "Helium"),
    ("HFE143M", "HFE143m"),
    ("HYDROGEN", "Hydrogen"), ("H2", "Hydrogen"),
    ("HYDROGENCHLORIDE", "HydrogenChloride"), ("HCL", "HydrogenChloride"),
    ("HYDROGENSULFIDE", "HydrogenSulfide"), ("H2S", "HydrogenSulfide"),
    ("ISOBUTANE", "IsoButane"), ("IBUTANE", "IsoButane"),
    ("ISOBUTENE", "IsoButene"), ("IBUTENE", "IsoButene"),
    ("ISOHEXANE", "Isohexane"), ("ISOPENTANE", "Isopentane"),
    ("KRYPTON", "Krypton"), ("KR", "Krypton"),
    ("MXYLENE", "m-Xylene"),
    ("MD2M", "MD2M"), ("MD3M", "MD3M"), ("MD4M", "MD4M"), ("MDM", "MDM"),
    ("METHANE", "Methane"), ("CH4", "Methane"),
    ("METHANOL", "Methanol"), ("MEOH", "Methanol"),
    ("METHYLLINOLEATE", "MethylLinoleate"), ("METHYLLINOLENATE", "MethylLinolenate"),
    ("METHYLOLEATE", "MethylOleate"), ("METHYLPALMITATE", "MethylPalmitate"),
    ("METHYLSTEARATE", "MethylStearate"),
    ("MM", "MM"),
    ("NBUTANE", "n-Butane"), ("BUTANE", "n-Butane"),
    ("NDECANE", "n-Decane"), ("DECANE", "n-Decane"),
    ("NDODECANE", "n-Dodecane"), ("DODECANE", "n-Dodecane"),
    ("NHEPTANE", "n-Heptane"), ("HEPTANE", "n-Heptane"),
    ("NHEXANE", "n-Hexane"), ("HEXANE", "n-Hexane"),
    ("NNONANE", "n-Nonane"), ("NONANE", "n-Nonane"),
    ("NOCTANE", "n-Octane"), ("OCTANE", "n-Octane"),
    ("NPENTANE", "n-Pentane"), ("PENTANE", "n-Pentane"),
    ("NPROPANE", "n-Propane"), ("PROPANE", "n-Propane"),
    ("NUNDECANE", "n-Undecane"), ("UNDECANE", "n-Undecane"),
    ("NEON", "Neon"), ("NE", "Neon"),
    ("NEOPENTANE", "Neopentane"),
    ("NITROGEN", "Nitrogen"), ("N2", "Nitrogen"),
    ("NITROUSOXIDE", "NitrousOxide"), ("N2O", "NitrousOxide"),
    ("NOVEC649", "Novec649"),
    ("OXYLENE", "o-Xylene"),
    ("ORTHODEUTERIUM", "OrthoDeuterium"), ("ORTHOHYDROGEN", "OrthoHydrogen"),
    ("OXYGEN", "Oxygen"), ("O2", "Oxygen"),
    ("PXYLENE", "p-Xylene"),
    ("PARADEUTERIUM", "ParaDeuterium"), ("PARAHYDROGEN", "ParaHydrogen"),
    ("PROPYLENE", "Propylene"), ("C3H6", "Propylene"),
    ("PROPYNE", "Propyne"),
    // refrigerants
    ("R11", "R11"), ("R113", "R113"), ("R114", "R114"), ("R115", "R115"),
    ("R116", "R116"), ("R12", "R12"), ("R123", "R123"),
    ("R1233ZDE", "R1233zd(E)"), ("R1233ZD(E)", "R1233zd(E)"),
    ("R1234YF", "R1234yf"),
    ("R1234ZEE", "R1234ze(E)"), ("R1234ZE(E)", "R1234ze(E)"),
    ("R1234ZEZ", "R1234ze(Z)"), ("R1234ZE(Z)", "R1234ze(Z)"),
    ("R124", "R124"), ("R125", "R125"), ("R13", "R13"),
    ("R134A", "R134a"), ("R13I1", "R13I1"), ("R14", "R14"),
    ("R141B", "R141b"), ("R142B", "R142b"), ("R143A", "R143a"),
    ("R152A", "R152A"), ("R161", "R161"), ("R21", "R21"),
    ("R218", "R218"), ("R22", "R22"), ("R227EA", "R227EA"),
    ("R23", "R23"), ("R236EA", "R236EA"), ("R236FA", "R236FA"),
    ("R245CA", "R245ca"), ("R245FA", "R245fa"), ("R32", "R32"),
    ("R365MFC", "R365MFC"), ("R40", "R40"),
    ("R404A", "R404A"), ("R407C", "R407C"), ("R41", "R41"),
    ("R410A", "R410A"), ("R507A", "R507A"),
    ("RC318", "RC318"),
    ("SES36", "SES36"),
    ("SULFURDIOXIDE", "SulfurDioxide"), ("SO2", "SulfurDioxide"),
    ("SULFURHEXAFLUORIDE", "SulfurHexafluoride"), ("SF6", "SulfurHexafluoride"),
    ("TOLUENE", "Toluene"),
    ("TRANS2BUTENE", "trans-2-Butene"),
    ("WATER", "Water"), ("H2O", "Water"),
    ("XENON", "Xenon"), ("XE", "Xenon"),
];

#[rustfmt::skip]
const HUMID_AIR_ENTRIES: &[(&str, &str)] = &[
    // wet-bulb and dew-point temperatures
    ("B", "Twb"), ("TWB", "Twb"), ("T_WB", "Twb"), ("WETBULB", "Twb"), ("WETBULBTEMP", "Twb"),
    ("WETBULBTEMPERATURE", "Twb"),
    ("D", "Tdp"), ("TDP", "Tdp"), ("T_DP", "Tdp"), ("DEWPOINT", "Tdp"), ("DEWPOINTTEMP", "Tdp"),
    ("DEWPOINTTEMPERATURE", "Tdp"),
    // dry-bulb temperature
    ("T", "T"), ("TDB", "T"), ("T_DB", "T"), ("TEMP", "T"), ("TEMPERATURE", "T"),
    ("DRYBULB", "T"), ("DRYBULBTEMP", "T"), ("DRYBULBTEMPERATURE", "T"),
    // heat capacities
    ("C", "Cda"), ("CP", "Cda"), ("CDA", "Cda"), ("CPDA", "Cda"), ("CP_DA", "Cda"),
    ("CHA", "Cha"), ("CPHA", "Cha"), ("CP_HA", "Cha"),
    ("CV", "CV"), ("CVMASS", "CV"),
    ("CVHA", "CVha"), ("CV_HA", "CVha"),
    // enthalpy and entropy
    ("H", "Hda"), ("HDA", "Hda"), ("H_DA", "Hda"), ("ENTHALPY", "Hda"),
    ("HHA", "Hha"), ("H_HA", "Hha"),
    ("S", "Sda"), ("SDA", "Sda"), ("S_DA", "Sda"), ("ENTROPY", "Sda"),
    ("SHA", "Sha"), ("S_HA", "Sha"),
    // transport
    ("K", "K"), ("CONDUCTIVITY", "K"), ("THERMALCONDUCTIVITY", "K"),
    ("M", "MU"), ("MU", "MU"), ("VISC", "MU"), ("VISCOSITY", "MU"), ("DYNAMICVISCOSITY", "MU"),
    // water content
    ("PSI_W", "Psi_w"), ("PSIW", "Psi_w"), ("Y", "Psi_w"),
    ("R", "R"), ("RH", "R"), ("RELHUM", "R"), ("RELATIVEHUMIDITY", "R"),
    ("W", "W"), ("OMEGA", "W"), ("HUMRAT", "W"), ("HUMIDITYRATIO", "W"), ("MIXINGRATIO", "W"),
    // pressures
    ("P", "P"), ("PRESSURE", "P"), ("PRES", "P"),
    ("P_W", "P_w"), ("PW", "P_w"), ("PARTIALPRESSURE", "P_w"), ("WATERPRESSURE", "P_w"),
    // specific volume and density
    ("V", "Vda"), ("VDA", "Vda"), ("V_DA", "Vda"),
    ("VHA", "Vha"), ("V_HA", "Vha"),
    ("DDA", "Dda"), ("RHODA", "Dda"),
    ("DHA", "Dha"), ("RHOHA", "Dha"),
    ("Z", "Z"), ("COMPRESSIBILITY", "Z"), ("COMPRESSIBILITYFACTOR", "Z"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_lookup_is_case_insensitive() {
        assert_eq!(resolve_property("pressure"), "P");
        assert_eq!(resolve_property("PRESSURE"), "P");
        assert_eq!(resolve_property("Pressure"), "P");
        assert_eq!(resolve_property("tcrit"), "Tcrit");
        assert_eq!(resolve_property("Hmass"), "H");
    }

    #[test]
    fn unknown_tokens_pass_through_verbatim() {
        assert_eq!(resolve_property("NotAProperty"), "NotAProperty");
        assert_eq!(resolve_humid_air("xyz"), "xyz");
        assert_eq!(resolve_fluid("Unobtainium"), "Unobtainium");
    }

    #[test]
    fn fluid_separators_are_stripped() {
        assert_eq!(resolve_fluid("R-134a"), "R134a");
        assert_eq!(resolve_fluid("r134a"), "R134a");
        assert_eq!(resolve_fluid("R_134A"), "R134a");
        assert_eq!(resolve_fluid("n-butane"), "n-Butane");
        assert_eq!(resolve_fluid("carbon dioxide"), "CarbonDioxide");
        assert_eq!(resolve_fluid("R1234ze(E)"), "R1234ze(E)");
    }

    #[test]
    fn fluid_miss_returns_unstripped_token() {
        assert_eq!(resolve_fluid("My-Custom_Fluid"), "My-Custom_Fluid");
    }

    #[test]
    fn mixtures_bypass_the_table() {
        let mixture = "HEOS::Water[0.5]&Ethanol[0.5]";
        assert_eq!(resolve_fluid(mixture), mixture);
        assert_eq!(resolve_fluid("heos::water"), "heos::water");
        assert_eq!(resolve_fluid("Water&Ethanol"), "Water&Ethanol");
    }

    #[test]
    fn vocabularies_are_independent() {
        // Same raw token, three different meanings.
        assert_eq!(resolve(Vocabulary::Property, "D"), "D");
        assert_eq!(resolve(Vocabulary::HumidAir, "D"), "Tdp");
        assert_eq!(resolve(Vocabulary::Property, "W"), "A");
        assert_eq!(resolve(Vocabulary::HumidAir, "W"), "W");
        assert_eq!(resolve(Vocabulary::Property, "MM"), "M");
        assert_eq!(resolve(Vocabulary::Fluid, "MM"), "MM");
    }

    #[test]
    fn humid_air_density_aliases() {
        assert_eq!(resolve_humid_air("rhoda"), "Dda");
        assert_eq!(resolve_humid_air("RhoHa"), "Dha");
    }

    #[test]
    fn tables_have_no_case_collisions() {
        assert_eq!(PROPERTY_ALIASES.len(), PROPERTY_ENTRIES.len());
        assert_eq!(FLUID_ALIASES.len(), FLUID_ENTRIES.len());
        assert_eq!(HUMID_AIR_ALIASES.len(), HUMID_AIR_ENTRIES.len());
    }

    #[test]
    fn canonical_names_are_sorted_and_unique() {
        let names = Vocabulary::Property.table().canonical_names();
        assert!(names.windows(2).all(|w| w[0] < w[1]));
        assert!(names.contains(&"Tcrit"));
    }

    #[test]
    fn vocabulary_from_str() {
        assert_eq!("fluid".parse::<Vocabulary>(), Ok(Vocabulary::Fluid));
        assert_eq!("HA".parse::<Vocabulary>(), Ok(Vocabulary::HumidAir));
        assert!("colour".parse::<Vocabulary>().is_err());
    }
}
