use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// Columns the loader insists on. Anything else in the raw file is ignored.
pub const AREA_COLUMNS: [&str; 11] = [
    "provinceName",
    "cityName",
    "province_confirmedCount",
    "province_suspectedCount",
    "province_curedCount",
    "province_deadCount",
    "city_confirmedCount",
    "city_suspectedCount",
    "city_curedCount",
    "city_deadCount",
    "updateTime",
];

/// Header shared by the province table and every city table.
pub const SUMMARY_HEADER: [&str; 6] = [
    "name",
    "confirmed",
    "suspected",
    "discharged",
    "deceased",
    "updatedAtDate",
];

/// One observation from the raw area file.
///
/// Counts stay as the strings found in the file: the pipeline never
/// validates them, it only moves them into the output tables. Fields absent
/// from a short line come through empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AreaRecord {
    #[serde(rename = "provinceName")]
    pub province_name: String,
    #[serde(rename = "cityName")]
    pub city_name: String,
    #[serde(rename = "province_confirmedCount")]
    pub province_confirmed: String,
    #[serde(rename = "province_suspectedCount")]
    pub province_suspected: String,
    #[serde(rename = "province_curedCount")]
    pub province_cured: String,
    #[serde(rename = "province_deadCount")]
    pub province_dead: String,
    #[serde(rename = "city_confirmedCount")]
    pub city_confirmed: String,
    #[serde(rename = "city_suspectedCount")]
    pub city_suspected: String,
    #[serde(rename = "city_curedCount")]
    pub city_cured: String,
    #[serde(rename = "city_deadCount")]
    pub city_dead: String,
    #[serde(rename = "updateTime")]
    pub update_time: String,
}

#[derive(Debug, Serialize, Tabled, Clone, PartialEq, Eq)]
pub struct ProvinceDailySummary {
    pub name: String,
    pub confirmed: String,
    pub suspected: String,
    pub discharged: String,
    pub deceased: String,
    #[serde(rename = "updatedAtDate")]
    #[tabled(rename = "updatedAtDate")]
    pub updated_at_date: String,
}

#[derive(Debug, Serialize, Tabled, Clone, PartialEq, Eq)]
pub struct CityDailySummary {
    pub name: String,
    pub confirmed: String,
    pub suspected: String,
    pub discharged: String,
    pub deceased: String,
    #[serde(rename = "updatedAtDate")]
    #[tabled(rename = "updatedAtDate")]
    pub updated_at_date: String,
}
