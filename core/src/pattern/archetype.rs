use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Closed set of antenna archetypes the synthesizer knows how to shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum AntennaArchetype {
    Isotropic,
    HalfwaveDipole,
    PcbDipoleReflector,
    FoldedDipole,
    Patch,
    TaperedSlot,
    QuarterWaveMonopole,
    Helix,
    PyramidalHorn,
    ConicalHorn,
    Yagi,
    Parabolic,
    PhasedArray,
    LogPeriodic,
    Lindenblad,
    Biconical,
    RectangleLoop,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown antenna archetype '{0}'")]
pub struct UnknownArchetype(pub String);

impl AntennaArchetype {
    pub const ALL: [AntennaArchetype; 17] = [
        Self::Isotropic,
        Self::HalfwaveDipole,
        Self::PcbDipoleReflector,
        Self::FoldedDipole,
        Self::Patch,
        Self::TaperedSlot,
        Self::QuarterWaveMonopole,
        Self::Helix,
        Self::PyramidalHorn,
        Self::ConicalHorn,
        Self::Yagi,
        Self::Parabolic,
        Self::PhasedArray,
        Self::LogPeriodic,
        Self::Lindenblad,
        Self::Biconical,
        Self::RectangleLoop,
    ];

    /// Stable snake-case identifier, as used in worksheets.
    pub fn id(self) -> &'static str {
        match self {
            Self::Isotropic => "isotropic",
            Self::HalfwaveDipole => "halfwave_dipole",
            Self::PcbDipoleReflector => "pcb_dipole_reflector",
            Self::FoldedDipole => "folded_dipole",
            Self::Patch => "patch",
            Self::TaperedSlot => "tapered_slot",
            Self::QuarterWaveMonopole => "quarter_wave_monopole",
            Self::Helix => "helix",
            Self::PyramidalHorn => "pyramidal_horn",
            Self::ConicalHorn => "conical_horn",
            Self::Yagi => "yagi",
            Self::Parabolic => "parabolic",
            Self::PhasedArray => "phased_array",
            Self::LogPeriodic => "log_periodic",
            Self::Lindenblad => "lindenblad",
            Self::Biconical => "biconical",
            Self::RectangleLoop => "rectangle_loop",
        }
    }

    /// Human-facing name shown by hosts.
    pub fn label(self) -> &'static str {
        match self {
            Self::Isotropic => "Isotropic radiator",
            Self::HalfwaveDipole => "Halfwave dipole",
            Self::PcbDipoleReflector => "PCB dipole w/ reflector",
            Self::FoldedDipole => "Folded dipole",
            Self::Patch => "Patch antenna",
            Self::TaperedSlot => "Tapered slot antenna",
            Self::QuarterWaveMonopole => "1/4 wave whip (monopole)",
            Self::Helix => "Helix",
            Self::PyramidalHorn => "Pyramidal horn",
            Self::ConicalHorn => "Conical horn",
            Self::Yagi => "Yagi",
            Self::Parabolic => "Parabolic antenna",
            Self::PhasedArray => "Phased array",
            Self::LogPeriodic => "Logarithmic-periodic dipole antenna",
            Self::Lindenblad => "Lindenblad antenna",
            Self::Biconical => "Biconical",
            Self::RectangleLoop => "Rectangle loop",
        }
    }

    /// Typical gain, beamwidth and polarization figures for the archetype.
    pub fn typical_spec(self) -> &'static str {
        match self {
            Self::Isotropic => {
                "0 dBi reference, 360° beamwidth, linear polarization (definition only)."
            }
            Self::HalfwaveDipole => "~2.1 dBi, 80° elevation beam, linear pol; broad azimuth omni.",
            Self::PcbDipoleReflector => "4–6 dBi with reflector, narrower front lobe, linear pol.",
            Self::FoldedDipole => "~3 dBi, broader bandwidth than halfwave dipole, linear pol.",
            Self::Patch => "5–9 dBi, 40°–80° beam, linear or circular pol; bandwidth ~3%.",
            Self::TaperedSlot => "6–12 dBi, 40°–70° beam, linear pol, 2–4 octave bandwidth.",
            Self::QuarterWaveMonopole => {
                "~5.2 dBi over ground plane, 45°–90° elevation beam, vertical pol."
            }
            Self::Helix => {
                "8–15 dBi axial mode, 40°–60° beam, circular pol; gain ~15 N (C/λ)² (S/λ)."
            }
            Self::PyramidalHorn => "10–20 dBi, 15°–40° beam, linear pol; bandwidth ~5%.",
            Self::ConicalHorn => "8–15 dBi, 20°–50° beam, linear/circular pol; bandwidth ~5%.",
            Self::Yagi => "6–15 dBi, 15°–50° beam depending on elements, linear pol.",
            Self::Parabolic => {
                "20–45 dBi, beamwidth ≈ 70λ/D, linear/circular pol depending on feed."
            }
            Self::PhasedArray => {
                "Gain scales with element count; beamwidth ≈ 0.88λ/(Nd); electronic steering."
            }
            Self::LogPeriodic => "4–8 dBi, 50°–70° beam, very wideband, linear pol.",
            Self::Lindenblad => {
                "3–7 dBi, near-omni in azimuth with circular pol (satellite comms)."
            }
            Self::Biconical => {
                "1–4 dBi, broadband omni with vertical pol; 80° elevation beam typical."
            }
            Self::RectangleLoop => {
                "1–3 dBi, figure-8 pattern; loop size sets bandwidth, linear pol."
            }
        }
    }
}

impl fmt::Display for AntennaArchetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AntennaArchetype {
    type Err = UnknownArchetype;

    /// Accepts either the snake-case id or the display label, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|a| a.id() == wanted || a.label().to_lowercase() == wanted)
            .ok_or_else(|| UnknownArchetype(s.to_string()))
    }
}

impl TryFrom<String> for AntennaArchetype {
    type Error = UnknownArchetype;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ids_and_labels() {
        assert_eq!("yagi".parse(), Ok(AntennaArchetype::Yagi));
        assert_eq!("Halfwave dipole".parse(), Ok(AntennaArchetype::HalfwaveDipole));
        assert_eq!(
            " 1/4 WAVE WHIP (MONOPOLE) ".parse(),
            Ok(AntennaArchetype::QuarterWaveMonopole)
        );
        assert!("dish".parse::<AntennaArchetype>().is_err());
    }

    #[test]
    fn ids_round_trip_through_serde() {
        for archetype in AntennaArchetype::ALL {
            let json = serde_json::to_string(&archetype).unwrap();
            assert_eq!(json, format!("\"{}\"", archetype.id()));
            let back: AntennaArchetype = serde_json::from_str(&json).unwrap();
            assert_eq!(back, archetype);
        }
    }

    #[test]
    fn labels_deserialize_too() {
        let parsed: AntennaArchetype = serde_json::from_str("\"Parabolic antenna\"").unwrap();
        assert_eq!(parsed, AntennaArchetype::Parabolic);
    }
}
