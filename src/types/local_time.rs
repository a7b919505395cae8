//! Serde helpers for the local, offset-less ISO-8601 timestamps Open-Meteo returns
//! (`2024-06-21T14:00`, sometimes with seconds).

use chrono::NaiveDateTime;
use serde::de::Error;
use serde::{Deserialize, Deserializer};

const FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"];

pub fn parse(value: &str) -> Option<NaiveDateTime> {
    FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
}

fn parse_or_error<E: Error>(value: &str) -> Result<NaiveDateTime, E> {
    parse(value).ok_or_else(|| E::custom(format!("invalid local timestamp '{value}'")))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_or_error(&raw)
}

pub mod vec {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Vec::<String>::deserialize(deserializer)?
            .iter()
            .map(|s| parse_or_error(s))
            .collect()
    }
}

pub mod optional_vec {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<Option<NaiveDateTime>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Vec::<Option<String>>::deserialize(deserializer)?
            .iter()
            .map(|s| s.as_deref().map(parse_or_error).transpose())
            .collect()
    }
}
