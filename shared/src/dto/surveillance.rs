//! # Surveillance Data Transfer Objects
//!
//! Reference and observed data served under `/data/*`: municipalities,
//! weekly arbovirus case counts and municipal social indicators.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Arbovirus tracked by the surveillance system.
///
/// Closed set: any other value on the wire fails deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Disease {
    Dengue,
    Zika,
    Chikungunya,
}

impl Disease {
    pub const ALL: [Disease; 3] = [Disease::Dengue, Disease::Zika, Disease::Chikungunya];

    pub fn as_str(&self) -> &'static str {
        match self {
            Disease::Dengue => "dengue",
            Disease::Zika => "zika",
            Disease::Chikungunya => "chikungunya",
        }
    }
}

impl fmt::Display for Disease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Disease {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Disease::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown disease: {}", s))
    }
}

/// Brazilian municipality (reference entity)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Municipality {
    pub id: i64,
    pub ibge_code: String,
    pub name: String,
    pub state: String,
    pub region: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub population: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_km2: Option<f64>,
}

/// Weekly case count for one disease in one municipality
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ArbovirusCase {
    pub id: i64,
    pub municipality_id: i64,
    pub disease: Disease,
    pub epidemiological_week: u32,
    pub year: i32,
    pub confirmed_cases: i64,
    pub probable_cases: i64,
    pub deaths: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub incidence_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification_date: Option<NaiveDate>,
}

/// Yearly socioeconomic indicators for a municipality.
///
/// Every indicator is optional. `None` means "not reported" and must never
/// be read as zero.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SocialIndicator {
    pub id: i64,
    pub municipality_id: i64,
    pub year: i32,

    // Demographic
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub population_density: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urban_population_pct: Option<f64>,

    // Socioeconomic
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gdp_per_capita: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gini_index: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poverty_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unemployment_rate: Option<f64>,

    // Education
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub literacy_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education_index: Option<f64>,

    // Health
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub infant_mortality_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub life_expectancy: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_coverage_pct: Option<f64>,

    // Infrastructure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub water_supply_pct: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sewage_treatment_pct: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub garbage_collection_pct: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub electricity_access_pct: Option<f64>,
}
