//! FEMA P-154 Level 1 reference data (high seismicity form).
//!
//! One entry per building-type code. Loaded nowhere, mutated never: the table
//! is compiled in as `'static` data and resolved through [`ScoringTable`].

use crate::error::{BcResult, BuildcheckError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumString};

/// The 17 building-type codes of the Level 1 screening form.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum BuildingType {
    W1,
    W1A,
    W2,
    #[strum(serialize = "S1_MRF", serialize = "S1")]
    #[serde(rename = "S1_MRF")]
    S1Mrf,
    #[strum(serialize = "S2_BR", serialize = "S2")]
    #[serde(rename = "S2_BR")]
    S2Br,
    #[strum(serialize = "S3_LM", serialize = "S3")]
    #[serde(rename = "S3_LM")]
    S3Lm,
    #[strum(serialize = "S4_RCSW", serialize = "S4")]
    #[serde(rename = "S4_RCSW")]
    S4Rcsw,
    #[strum(serialize = "S5_URMINF", serialize = "S5")]
    #[serde(rename = "S5_URMINF")]
    S5UrmInf,
    #[strum(serialize = "C1_MRF", serialize = "C1")]
    #[serde(rename = "C1_MRF")]
    C1Mrf,
    #[strum(serialize = "C2_SW", serialize = "C2")]
    #[serde(rename = "C2_SW")]
    C2Sw,
    #[strum(serialize = "C3_URMINF", serialize = "C3")]
    #[serde(rename = "C3_URMINF")]
    C3UrmInf,
    #[strum(serialize = "PC1_TU", serialize = "PC1")]
    #[serde(rename = "PC1_TU")]
    Pc1Tu,
    #[strum(serialize = "PC2")]
    #[serde(rename = "PC2")]
    Pc2,
    #[strum(serialize = "RM1_FC", serialize = "RM1")]
    #[serde(rename = "RM1_FC")]
    Rm1Fc,
    #[strum(serialize = "RM2_RD", serialize = "RM2")]
    #[serde(rename = "RM2_RD")]
    Rm2Rd,
    #[strum(serialize = "URM")]
    #[serde(rename = "URM")]
    Urm,
    #[strum(serialize = "MH")]
    #[serde(rename = "MH")]
    Mh,
}

impl BuildingType {
    /// The screening form's catalogue text for this structural system.
    pub fn description(&self) -> &'static str {
        match self {
            BuildingType::W1 => {
                "Light wood frame single- or multiple-family dwellings of one or more stories in height"
            }
            BuildingType::W1A => {
                "Light wood frame multi-unit, multi-story residential buildings with plan areas on each floor of greater than 3,000 square feet"
            }
            BuildingType::W2 => {
                "Wood frame commercial and industrial buildings with a floor area larger than 5,000 square feet"
            }
            BuildingType::S1Mrf => "Steel moment-resisting frame",
            BuildingType::S2Br => "Braced steel frame",
            BuildingType::S3Lm => "Light metal building",
            BuildingType::S4Rcsw => "Steel frames with cast-in-place concrete shear walls",
            BuildingType::S5UrmInf => "Steel frames with unreinforced masonry infill walls",
            BuildingType::C1Mrf => "Concrete moment-resisting frames",
            BuildingType::C2Sw => "Concrete shear wall buildings",
            BuildingType::C3UrmInf => "Concrete frames with unreinforced masonry infill walls",
            BuildingType::Pc1Tu => "Tilt-up buildings",
            BuildingType::Pc2 => "Precast concrete frame buildings",
            BuildingType::Rm1Fc => "Reinforced masonry buildings with flexible diaphragms",
            BuildingType::Rm2Rd => "Reinforced masonry buildings with rigid diaphragms",
            BuildingType::Urm => "Unreinforced masonry buildings",
            BuildingType::Mh => "Manufactured housing",
        }
    }
}

/// One row of the scoring rubric. `None` means the category does not apply to
/// this building type and contributes nothing when triggered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringTableEntry {
    pub basic_score: f64,
    pub min_score: f64,
    pub severe_vertical: Option<f64>,
    pub moderate_vertical: Option<f64>,
    pub plan_irregularity: Option<f64>,
    pub precode: Option<f64>,
    pub post_benchmark: Option<f64>,
    pub soil_ab: Option<f64>,
    pub soil_e_low_rise: Option<f64>,
    pub soil_e_high_rise: Option<f64>,
}

pub struct ScoringTable;

impl ScoringTable {
    /// Resolve the rubric row for a known building type. Infallible: the enum
    /// is closed over exactly the codes the table defines.
    pub fn entry(building_type: BuildingType) -> &'static ScoringTableEntry {
        use BuildingType::*;
        match building_type {
            W1 => &ScoringTableEntry {
                basic_score: 3.6,
                min_score: 1.1,
                severe_vertical: Some(-1.2),
                moderate_vertical: Some(-0.7),
                plan_irregularity: Some(-1.1),
                precode: Some(-1.1),
                post_benchmark: Some(1.6),
                soil_ab: Some(0.1),
                soil_e_low_rise: Some(0.0),
                soil_e_high_rise: Some(-0.3),
            },
            W1A => &ScoringTableEntry {
                basic_score: 3.2,
                min_score: 0.9,
                severe_vertical: Some(-1.2),
                moderate_vertical: Some(-0.7),
                plan_irregularity: Some(-1.0),
                precode: Some(-1.0),
                post_benchmark: Some(1.9),
                soil_ab: Some(0.3),
                soil_e_low_rise: Some(-0.1),
                soil_e_high_rise: Some(-0.6),
            },
            W2 => &ScoringTableEntry {
                basic_score: 2.9,
                min_score: 0.7,
                severe_vertical: Some(-1.2),
                moderate_vertical: Some(-0.7),
                plan_irregularity: Some(-1.0),
                precode: Some(-0.9),
                post_benchmark: Some(2.2),
                soil_ab: Some(0.5),
                soil_e_low_rise: Some(-0.3),
                soil_e_high_rise: Some(-0.9),
            },
            S1Mrf => &ScoringTableEntry {
                basic_score: 2.1,
                min_score: 0.5,
                severe_vertical: Some(-1.0),
                moderate_vertical: Some(-0.6),
                plan_irregularity: Some(-0.8),
                precode: Some(-0.6),
                post_benchmark: Some(1.4),
                soil_ab: Some(0.4),
                soil_e_low_rise: Some(-0.4),
                soil_e_high_rise: Some(-0.6),
            },
            S2Br => &ScoringTableEntry {
                basic_score: 2.0,
                min_score: 0.5,
                severe_vertical: Some(-1.0),
                moderate_vertical: Some(-0.6),
                plan_irregularity: Some(-0.7),
                precode: Some(-0.6),
                post_benchmark: Some(1.4),
                soil_ab: Some(0.6),
                soil_e_low_rise: Some(-0.5),
                soil_e_high_rise: Some(-0.6),
            },
            S3Lm => &ScoringTableEntry {
                basic_score: 2.6,
                min_score: 0.5,
                severe_vertical: Some(-1.1),
                moderate_vertical: Some(-0.7),
                plan_irregularity: Some(-0.9),
                precode: Some(-0.8),
                post_benchmark: Some(1.1),
                soil_ab: Some(0.1),
                soil_e_low_rise: Some(0.0),
                soil_e_high_rise: None,
            },
            S4Rcsw => &ScoringTableEntry {
                basic_score: 2.0,
                min_score: 0.5,
                severe_vertical: Some(-1.0),
                moderate_vertical: Some(-0.6),
                plan_irregularity: Some(-0.7),
                precode: Some(-0.6),
                post_benchmark: Some(1.9),
                soil_ab: Some(0.6),
                soil_e_low_rise: Some(-0.4),
                soil_e_high_rise: Some(-0.6),
            },
            S5UrmInf => &ScoringTableEntry {
                basic_score: 1.7,
                min_score: 0.5,
                severe_vertical: Some(-0.8),
                moderate_vertical: Some(-0.5),
                plan_irregularity: Some(-0.6),
                precode: Some(-0.2),
                post_benchmark: None,
                soil_ab: Some(0.5),
                soil_e_low_rise: Some(-0.4),
                soil_e_high_rise: Some(-0.4),
            },
            C1Mrf => &ScoringTableEntry {
                basic_score: 1.5,
                min_score: 0.3,
                severe_vertical: Some(-0.9),
                moderate_vertical: Some(-0.5),
                plan_irregularity: Some(-0.6),
                precode: Some(-0.4),
                post_benchmark: Some(1.9),
                soil_ab: Some(0.4),
                soil_e_low_rise: Some(0.0),
                soil_e_high_rise: Some(-0.5),
            },
            C2Sw => &ScoringTableEntry {
                basic_score: 2.0,
                min_score: 0.3,
                severe_vertical: Some(-1.0),
                moderate_vertical: Some(-0.6),
                plan_irregularity: Some(-0.8),
                precode: Some(-0.7),
                post_benchmark: Some(2.1),
                soil_ab: Some(0.5),
                soil_e_low_rise: Some(-0.1),
                soil_e_high_rise: Some(-0.7),
            },
            C3UrmInf => &ScoringTableEntry {
                basic_score: 1.2,
                min_score: 0.3,
                severe_vertical: Some(-0.7),
                moderate_vertical: Some(-0.4),
                plan_irregularity: Some(-0.5),
                precode: Some(-0.1),
                post_benchmark: None,
                soil_ab: Some(0.3),
                soil_e_low_rise: Some(-0.2),
                soil_e_high_rise: Some(-0.3),
            },
            Pc1Tu => &ScoringTableEntry {
                basic_score: 1.6,
                min_score: 0.2,
                severe_vertical: Some(-1.0),
                moderate_vertical: Some(-0.6),
                plan_irregularity: Some(-0.7),
                precode: Some(-0.5),
                post_benchmark: Some(2.0),
                soil_ab: Some(0.6),
                soil_e_low_rise: Some(-0.3),
                soil_e_high_rise: None,
            },
            Pc2 => &ScoringTableEntry {
                basic_score: 1.4,
                min_score: 0.2,
                severe_vertical: Some(-0.9),
                moderate_vertical: Some(-0.5),
                plan_irregularity: Some(-0.6),
                precode: Some(-0.3),
                post_benchmark: Some(2.4),
                soil_ab: Some(0.4),
                soil_e_low_rise: Some(-0.1),
                soil_e_high_rise: Some(-0.4),
            },
            Rm1Fc => &ScoringTableEntry {
                basic_score: 1.7,
                min_score: 0.3,
                severe_vertical: Some(-0.9),
                moderate_vertical: Some(-0.5),
                plan_irregularity: Some(-0.6),
                precode: Some(-0.5),
                post_benchmark: Some(2.1),
                soil_ab: Some(0.5),
                soil_e_low_rise: Some(-0.5),
                soil_e_high_rise: Some(-0.7),
            },
            Rm2Rd => &ScoringTableEntry {
                basic_score: 1.7,
                min_score: 0.3,
                severe_vertical: Some(-0.9),
                moderate_vertical: Some(-0.5),
                plan_irregularity: Some(-0.6),
                precode: Some(-0.5),
                post_benchmark: Some(2.1),
                soil_ab: Some(0.5),
                soil_e_low_rise: Some(-0.5),
                soil_e_high_rise: Some(-0.6),
            },
            Urm => &ScoringTableEntry {
                basic_score: 1.0,
                min_score: 0.2,
                severe_vertical: Some(-0.7),
                moderate_vertical: Some(-0.4),
                plan_irregularity: Some(-0.4),
                precode: Some(-0.1),
                post_benchmark: None,
                soil_ab: Some(0.3),
                soil_e_low_rise: Some(-0.2),
                soil_e_high_rise: Some(-0.3),
            },
            Mh => &ScoringTableEntry {
                basic_score: 1.5,
                min_score: 1.0,
                severe_vertical: None,
                moderate_vertical: None,
                plan_irregularity: None,
                precode: Some(-0.1),
                post_benchmark: Some(1.2),
                soil_ab: Some(0.3),
                soil_e_low_rise: Some(-0.4),
                soil_e_high_rise: None,
            },
        }
    }

    /// Resolve a code string. Unknown codes are a typed error, never a silent
    /// zero score.
    pub fn lookup(code: &str) -> BcResult<(BuildingType, &'static ScoringTableEntry)> {
        let building_type = BuildingType::from_str(code)
            .map_err(|_| BuildcheckError::UnknownBuildingType(code.to_string()))?;
        Ok((building_type, Self::entry(building_type)))
    }
}
