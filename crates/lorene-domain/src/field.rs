//! Field module - the named quantities of a neutron star model

use std::fmt;

/// A numeric quantity recorded for one equilibrium model
///
/// Variants are listed in record order; that order is the order of keys in
/// JSON output and is relied on by [`Field::ALL`] and [`Field::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    /// Gravitational (ADM) mass [M_sun]
    MGrav,
    /// Baryonic mass [M_sun]
    MBary,
    /// Binding energy, `M_bary - M_grav` [M_sun]
    MBinding,
    /// Circumferential equatorial radius [km]
    RCirc,
    /// Polar radius, `R_circ * axis_ratio` [km]
    RPolar,
    /// Axis ratio r_p / r_eq
    AxisRatio,
    /// Central rotation frequency [Hz]
    FCentral,
    /// Equatorial surface rotation frequency [Hz]
    FEquatorial,
    /// Maximum rotation frequency [Hz]
    FMax,
    /// Central angular velocity [rad/s]
    OmegaC,
    /// Equatorial angular velocity [rad/s]
    OmegaEq,
    /// Total angular momentum [GM_sun^2/c]
    J,
    /// Dimensionless spin parameter cJ/(GM^2)
    JSpin,
    /// Rotational to gravitational energy ratio T/|W|
    TW,
    /// Central enthalpy [c^2]
    HCentral,
    /// Central baryon density [fm^-3]
    RhoCentral,
    /// Central pressure [MeV/fm^3]
    PCentral,
    /// First differential rotation parameter
    Lambda1,
    /// Second differential rotation parameter
    Lambda2,
    /// Rotation law coefficient A2
    A2,
    /// Rotation law coefficient B2
    B2,
    /// 2-D virial identity error [%]
    Grv2,
    /// 3-D virial identity error [%]
    Grv3,
    /// TOV mass of the equation of state [M_sun]
    MTov,
    /// Mass enhancement M_grav / M_TOV - 1
    MassEnhancement,
}

impl Field {
    /// Number of fields in a record
    pub const COUNT: usize = 25;

    /// Every field, in record order
    pub const ALL: [Field; Field::COUNT] = [
        Field::MGrav,
        Field::MBary,
        Field::MBinding,
        Field::RCirc,
        Field::RPolar,
        Field::AxisRatio,
        Field::FCentral,
        Field::FEquatorial,
        Field::FMax,
        Field::OmegaC,
        Field::OmegaEq,
        Field::J,
        Field::JSpin,
        Field::TW,
        Field::HCentral,
        Field::RhoCentral,
        Field::PCentral,
        Field::Lambda1,
        Field::Lambda2,
        Field::A2,
        Field::B2,
        Field::Grv2,
        Field::Grv3,
        Field::MTov,
        Field::MassEnhancement,
    ];

    /// Position of the field in record order
    pub fn index(self) -> usize {
        self as usize
    }

    /// External name of the field (JSON and config key)
    pub fn key(self) -> &'static str {
        match self {
            Field::MGrav => "M_grav",
            Field::MBary => "M_bary",
            Field::MBinding => "M_binding",
            Field::RCirc => "R_circ",
            Field::RPolar => "R_polar",
            Field::AxisRatio => "axis_ratio",
            Field::FCentral => "f_central",
            Field::FEquatorial => "f_equatorial",
            Field::FMax => "f_max",
            Field::OmegaC => "Omega_c",
            Field::OmegaEq => "Omega_eq",
            Field::J => "J",
            Field::JSpin => "j_spin",
            Field::TW => "T_W",
            Field::HCentral => "H_central",
            Field::RhoCentral => "rho_central",
            Field::PCentral => "P_central",
            Field::Lambda1 => "lambda_1",
            Field::Lambda2 => "lambda_2",
            Field::A2 => "A2",
            Field::B2 => "B2",
            Field::Grv2 => "GRV2",
            Field::Grv3 => "GRV3",
            Field::MTov => "M_TOV",
            Field::MassEnhancement => "mass_enhancement",
        }
    }

    /// Parse a field from its external name
    ///
    /// Keys are case-sensitive: `J` and `j_spin` are different quantities.
    pub fn parse(s: &str) -> Option<Self> {
        Field::ALL.iter().copied().find(|f| f.key() == s)
    }

    /// Display unit of the field, empty for dimensionless quantities
    pub fn unit(self) -> &'static str {
        match self {
            Field::MGrav | Field::MBary | Field::MBinding | Field::MTov => "M_sun",
            Field::RCirc | Field::RPolar => "km",
            Field::FCentral | Field::FEquatorial | Field::FMax => "Hz",
            Field::OmegaC | Field::OmegaEq => "rad/s",
            Field::J => "GM_sun^2/c",
            Field::HCentral => "c^2",
            Field::RhoCentral => "fm^-3",
            Field::PCentral => "MeV/fm^3",
            Field::Grv2 | Field::Grv3 => "%",
            _ => "",
        }
    }

    /// Whether the field is computed from other fields rather than read
    pub fn is_derived(self) -> bool {
        matches!(self, Field::MBinding | Field::RPolar)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Unknown field: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_in_index_order() {
        for (i, field) in Field::ALL.iter().enumerate() {
            assert_eq!(field.index(), i);
        }
    }

    #[test]
    fn test_key_parse_round_trip() {
        for field in Field::ALL {
            assert_eq!(Field::parse(field.key()), Some(field));
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(Field::parse("J"), Some(Field::J));
        assert_eq!(Field::parse("j"), None);
        assert_eq!(Field::parse("m_grav"), None);
    }

    #[test]
    fn test_from_str_error() {
        let err = "radius".parse::<Field>().unwrap_err();
        assert!(err.contains("radius"));
    }

    #[test]
    fn test_derived_fields() {
        let derived: Vec<_> = Field::ALL.iter().filter(|f| f.is_derived()).collect();
        assert_eq!(derived, vec![&Field::MBinding, &Field::RPolar]);
    }

    #[test]
    fn test_units() {
        assert_eq!(Field::MGrav.unit(), "M_sun");
        assert_eq!(Field::RPolar.unit(), "km");
        assert_eq!(Field::Grv3.unit(), "%");
        assert_eq!(Field::AxisRatio.unit(), "");
    }
}
