//! Query parameter types for the report endpoints.
//!
//! Timestamps are RFC 3339, or offset-less values read as UTC. The
//! camelCase names used by older clients are accepted as aliases.

use pvtrack_core::time::parse_timestamp;
use pvtrack_core::types::Timestamp;
use serde::{de, Deserialize, Deserializer};

/// `?timestamp=&duration=` for the produced-energy sum.
#[derive(Debug, Deserialize)]
pub struct EnergySumParams {
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub timestamp: Timestamp,
    /// Window length in minutes.
    pub duration: i64,
}

/// `?start_timestamp=&duration=&page=` for the production timeline.
#[derive(Debug, Deserialize)]
pub struct TimelineParams {
    #[serde(alias = "startTimestamp", deserialize_with = "deserialize_timestamp")]
    pub start_timestamp: Timestamp,
    /// Total span in minutes.
    pub duration: i64,
    /// 1-indexed page of 60 minutes.
    pub page: i64,
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<Timestamp, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).map_err(de::Error::custom)
}
