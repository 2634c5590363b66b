//! Named configuration profiles for controller sources.

use serde::{Deserialize, Serialize};

/// Named operating profile for a deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Default datacenter tuning.
    Balanced,
    /// Higher temperature and load ceilings, thinner margins.
    Performance,
    /// Lower ceilings, wider safety margins.
    Conservative,
}

impl Preset {
    /// Look up a preset by its lowercase name.
    pub fn named(name: &str) -> Option<Self> {
        match name {
            "balanced" => Some(Self::Balanced),
            "performance" => Some(Self::Performance),
            "conservative" => Some(Self::Conservative),
            _ => None,
        }
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Balanced => write!(f, "balanced"),
            Self::Performance => write!(f, "performance"),
            Self::Conservative => write!(f, "conservative"),
        }
    }
}

impl std::str::FromStr for Preset {
    type Err = resguard_core::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::named(s)
            .ok_or_else(|| resguard_core::Error::Config(format!("Unknown preset: {}", s)))
    }
}

/// Readable configuration of a thermal controller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThermalProfile {
    /// Temperature the controller steers toward (°C).
    pub target_temp: f64,
    /// Upper bound of the safe operating range (°C); must exceed target.
    pub max_safe_temp: f64,
}

impl ThermalProfile {
    pub fn for_preset(preset: Preset) -> Self {
        match preset {
            Preset::Balanced => Self {
                target_temp: 60.0,
                max_safe_temp: 90.0,
            },
            Preset::Performance => Self {
                target_temp: 70.0,
                max_safe_temp: 95.0,
            },
            Preset::Conservative => Self {
                target_temp: 55.0,
                max_safe_temp: 80.0,
            },
        }
    }
}

/// Readable configuration of a power controller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerProfile {
    /// Hard capacity ceiling (kW); must be positive.
    pub max_capacity_kw: f64,
    /// Fraction of capacity held back as headroom, in [0, 1).
    pub safety_margin: f64,
}

impl PowerProfile {
    pub fn for_preset(preset: Preset) -> Self {
        match preset {
            Preset::Balanced => Self {
                max_capacity_kw: 100.0,
                safety_margin: 0.2,
            },
            Preset::Performance => Self {
                max_capacity_kw: 120.0,
                safety_margin: 0.1,
            },
            Preset::Conservative => Self {
                max_capacity_kw: 80.0,
                safety_margin: 0.3,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_lookup_by_name() {
        assert_eq!(Preset::named("balanced"), Some(Preset::Balanced));
        assert_eq!(Preset::named("performance"), Some(Preset::Performance));
        assert_eq!(Preset::named("conservative"), Some(Preset::Conservative));
        assert_eq!(Preset::named("turbo"), None);
    }

    #[test]
    fn test_preset_from_str() {
        let preset: Preset = "conservative".parse().unwrap();
        assert_eq!(preset, Preset::Conservative);

        let err = "turbo".parse::<Preset>().unwrap_err();
        assert!(err.to_string().contains("Unknown preset"));
    }

    #[test]
    fn test_preset_display_matches_lookup() {
        for preset in [Preset::Balanced, Preset::Performance, Preset::Conservative] {
            assert_eq!(Preset::named(&preset.to_string()), Some(preset));
        }
    }

    #[test]
    fn test_balanced_profiles() {
        let thermal = ThermalProfile::for_preset(Preset::Balanced);
        assert_eq!(thermal.target_temp, 60.0);
        assert_eq!(thermal.max_safe_temp, 90.0);

        let power = PowerProfile::for_preset(Preset::Balanced);
        assert_eq!(power.max_capacity_kw, 100.0);
        assert_eq!(power.safety_margin, 0.2);
    }

    #[test]
    fn test_profiles_are_well_formed() {
        for preset in [Preset::Balanced, Preset::Performance, Preset::Conservative] {
            let thermal = ThermalProfile::for_preset(preset);
            assert!(thermal.target_temp < thermal.max_safe_temp);

            let power = PowerProfile::for_preset(preset);
            assert!(power.max_capacity_kw > 0.0);
            assert!(power.safety_margin >= 0.0 && power.safety_margin < 1.0);
        }
    }

    #[test]
    fn test_profile_serde_round_trip() {
        let profile = ThermalProfile::for_preset(Preset::Conservative);
        let json = serde_json::to_string(&profile).unwrap();
        let back: ThermalProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, profile);

        let preset: Preset = serde_json::from_str("\"performance\"").unwrap();
        assert_eq!(preset, Preset::Performance);
    }
}
