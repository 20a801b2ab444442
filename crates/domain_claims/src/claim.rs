//! Claim attributes and the phrase tables that detect them

use std::fmt;

use serde::{Deserialize, Serialize};

use core_kernel::{first_match, PhraseGroup};

/// Type of loss
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LossType {
    Theft,
    Accident,
    Fire,
    #[serde(rename = "Flood / Water Damage")]
    FloodWaterDamage,
    Vandalism,
    #[serde(rename = "Storm / Natural Peril")]
    StormNaturalPeril,
    #[serde(rename = "Other / Unknown")]
    Other,
}

/// Severity of the reported damage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// Asset the loss happened to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AffectedAsset {
    #[serde(rename = "Motor Vehicle")]
    MotorVehicle,
    #[serde(rename = "Two Wheeler")]
    TwoWheeler,
    #[serde(rename = "Residential Property")]
    ResidentialProperty,
    #[serde(rename = "Commercial Property")]
    CommercialProperty,
    #[serde(rename = "Portable Gadget / Valuables")]
    PortableGadget,
    #[serde(rename = "Unknown Asset")]
    Unknown,
}

impl LossType {
    /// Loss-type phrase groups in priority order
    pub const GROUPS: &'static [PhraseGroup<LossType>] = &[
        PhraseGroup { outcome: LossType::Theft, phrases: &["theft", "stolen", "robbed"] },
        PhraseGroup {
            outcome: LossType::Accident,
            phrases: &["accident", "collision", "crash", "hit", "impact"],
        },
        PhraseGroup { outcome: LossType::Fire, phrases: &["fire", "burn", "flames"] },
        PhraseGroup {
            outcome: LossType::FloodWaterDamage,
            phrases: &["flood", "water logging", "water damage", "inundation"],
        },
        PhraseGroup {
            outcome: LossType::Vandalism,
            phrases: &["vandalism", "malicious", "broken window", "smashed"],
        },
        PhraseGroup {
            outcome: LossType::StormNaturalPeril,
            phrases: &["storm", "hail", "cyclone", "hurricane"],
        },
    ];

    /// Detects the loss type in lowercased text
    pub fn detect(lowered: &str) -> Self {
        first_match(Self::GROUPS, lowered, LossType::Other)
    }

    /// Returns the display label
    pub fn label(&self) -> &'static str {
        match self {
            LossType::Theft => "Theft",
            LossType::Accident => "Accident",
            LossType::Fire => "Fire",
            LossType::FloodWaterDamage => "Flood / Water Damage",
            LossType::Vandalism => "Vandalism",
            LossType::StormNaturalPeril => "Storm / Natural Peril",
            LossType::Other => "Other / Unknown",
        }
    }
}

impl Severity {
    /// Severity tiers, highest first
    pub const GROUPS: &'static [PhraseGroup<Severity>] = &[
        PhraseGroup {
            outcome: Severity::High,
            phrases: &["total loss", "severe", "major", "complete loss", "engine damage"],
        },
        PhraseGroup {
            outcome: Severity::Medium,
            phrases: &["moderate", "partial damage", "bumper", "door", "panel damage"],
        },
        PhraseGroup { outcome: Severity::Low, phrases: &["minor", "scratch", "dent", "small"] },
    ];

    /// Detects severity in lowercased text, defaulting to `Medium`
    pub fn detect(lowered: &str) -> Self {
        first_match(Self::GROUPS, lowered, Severity::Medium)
    }

    /// Returns the display label
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
        }
    }
}

impl AffectedAsset {
    /// Asset phrase groups in priority order
    pub const GROUPS: &'static [PhraseGroup<AffectedAsset>] = &[
        PhraseGroup {
            outcome: AffectedAsset::MotorVehicle,
            phrases: &["car", "vehicle", "auto", "four wheeler", "sedan", "suv"],
        },
        PhraseGroup {
            outcome: AffectedAsset::TwoWheeler,
            phrases: &["bike", "two wheeler", "motorcycle", "scooter"],
        },
        PhraseGroup {
            outcome: AffectedAsset::ResidentialProperty,
            phrases: &["house", "home", "building", "flat", "apartment"],
        },
        PhraseGroup {
            outcome: AffectedAsset::CommercialProperty,
            phrases: &["shop", "office", "factory", "warehouse"],
        },
        PhraseGroup {
            outcome: AffectedAsset::PortableGadget,
            phrases: &["mobile", "phone", "laptop", "jewellery", "jewelry"],
        },
    ];

    /// Detects the affected asset in lowercased text
    pub fn detect(lowered: &str) -> Self {
        first_match(Self::GROUPS, lowered, AffectedAsset::Unknown)
    }

    /// Returns the display label
    pub fn label(&self) -> &'static str {
        match self {
            AffectedAsset::MotorVehicle => "Motor Vehicle",
            AffectedAsset::TwoWheeler => "Two Wheeler",
            AffectedAsset::ResidentialProperty => "Residential Property",
            AffectedAsset::CommercialProperty => "Commercial Property",
            AffectedAsset::PortableGadget => "Portable Gadget / Valuables",
            AffectedAsset::Unknown => "Unknown Asset",
        }
    }
}

impl fmt::Display for LossType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for AffectedAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
