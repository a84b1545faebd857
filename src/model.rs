//! Response payloads. Joined entities are always nested objects.

use serde::{Serialize, Serializer};

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Circuit {
    pub circuit_id: i64,
    pub circuit_ref: String,
    pub name: String,
    pub location: Option<String>,
    pub country: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub alt: Option<i64>,
    pub url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Constructor {
    pub constructor_id: i64,
    pub constructor_ref: String,
    pub name: String,
    pub nationality: Option<String>,
    pub url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    pub driver_id: i64,
    pub driver_ref: String,
    pub number: Option<i64>,
    pub code: Option<String>,
    pub forename: String,
    pub surname: String,
    pub dob: Option<String>,
    pub nationality: Option<String>,
    pub url: Option<String>,
}

/// Race as nested inside results, qualifying and standings.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RaceSummary {
    pub race_id: i64,
    pub year: i64,
    pub round: i64,
    pub name: String,
    pub date: Option<String>,
    pub time: Option<String>,
    pub url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Race {
    #[serde(flatten)]
    pub summary: RaceSummary,
    pub circuit: Circuit,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Status {
    pub status_id: i64,
    pub status: String,
}

/// A classified race result. `position` is `null` for unclassified finishers.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RaceResult {
    pub result_id: i64,
    pub number: Option<i64>,
    pub grid: Option<i64>,
    pub position: Option<i64>,
    pub position_text: Option<String>,
    pub position_order: Option<i64>,
    #[serde(serialize_with = "points")]
    pub points: Option<f64>,
    pub laps: Option<i64>,
    pub time: Option<String>,
    pub milliseconds: Option<i64>,
    pub fastest_lap: Option<i64>,
    pub rank: Option<i64>,
    pub fastest_lap_time: Option<String>,
    pub fastest_lap_speed: Option<String>,
    pub status: Status,
    pub driver: Driver,
    pub constructor: Constructor,
    pub race: RaceSummary,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QualifyingEntry {
    pub qualify_id: i64,
    pub number: Option<i64>,
    pub position: Option<i64>,
    pub q1: Option<String>,
    pub q2: Option<String>,
    pub q3: Option<String>,
    pub driver: Driver,
    pub constructor: Constructor,
    pub race: RaceSummary,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverStanding {
    pub driver_standings_id: i64,
    #[serde(serialize_with = "points")]
    pub points: Option<f64>,
    pub position: Option<i64>,
    pub position_text: Option<String>,
    pub wins: Option<i64>,
    pub driver: Driver,
    pub race: RaceSummary,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstructorStanding {
    pub constructor_standings_id: i64,
    #[serde(serialize_with = "points")]
    pub points: Option<f64>,
    pub position: Option<i64>,
    pub position_text: Option<String>,
    pub wins: Option<i64>,
    pub constructor: Constructor,
    pub race: RaceSummary,
}

/// Whole-number points serialize as integers (`25`, not `25.0`).
fn points<S: Serializer>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(p) if p.fract() == 0.0 && p.abs() < 1e15 => serializer.serialize_i64(*p as i64),
        Some(p) => serializer.serialize_f64(*p),
        None => serializer.serialize_none(),
    }
}
