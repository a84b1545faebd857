//! Row to payload mappers. Pure: they only reshape columns already fetched,
//! reading each joined entity through its projection scope.

use crate::model::{
    Circuit, Constructor, ConstructorStanding, Driver, DriverStanding, QualifyingEntry, Race,
    RaceResult, RaceSummary, Status,
};
use crate::source::Row;
use crate::sql::projections::{
    CIRCUIT, CONSTRUCTOR, CONSTRUCTOR_STANDING, DRIVER, DRIVER_STANDING, QUALIFYING, RACE,
    RESULT, STATUS,
};
use crate::sql::Projection;
use serde_json::Value;
use thiserror::Error;

/// Null marker used by the dataset dump in place of SQL NULL.
const DUMP_NULL: &str = "\\N";

#[derive(Error, Debug)]
pub enum MapError {
    #[error("column '{0}' is missing or null")]
    MissingColumn(String),
    #[error("column '{column}' has unexpected value {value}")]
    InvalidValue { column: String, value: Value },
}

pub trait MapRow: Sized {
    fn map_row(row: &Row) -> Result<Self, MapError>;
}

pub fn map_rows<T: MapRow>(rows: &[Row]) -> Result<Vec<T>, MapError> {
    rows.iter().map(T::map_row).collect()
}

/// View of the columns one projection contributed to a row.
pub struct Scoped<'r> {
    row: &'r Row,
    projection: &'static Projection,
}

pub fn scoped<'r>(row: &'r Row, projection: &'static Projection) -> Scoped<'r> {
    Scoped { row, projection }
}

impl<'r> Scoped<'r> {
    /// Present, non-null value of `column`.
    fn value(&self, column: &str) -> Option<&'r Value> {
        debug_assert!(
            self.projection.columns.contains(&column),
            "column {column} is not part of projection {}",
            self.projection.scope
        );
        match self.row.get(&self.projection.key(column)) {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) if s == DUMP_NULL => None,
            Some(v) => Some(v),
        }
    }

    fn missing(&self, column: &str) -> MapError {
        MapError::MissingColumn(self.projection.key(column))
    }

    /// Required integer column (identifiers, season, round).
    pub fn id(&self, column: &str) -> Result<i64, MapError> {
        let v = self.value(column).ok_or_else(|| self.missing(column))?;
        as_int(v).ok_or_else(|| MapError::InvalidValue {
            column: self.projection.key(column),
            value: v.clone(),
        })
    }

    pub fn required_text(&self, column: &str) -> Result<String, MapError> {
        self.text(column).ok_or_else(|| self.missing(column))
    }

    /// Values that are not integers read as absent.
    pub fn int(&self, column: &str) -> Option<i64> {
        self.value(column).and_then(as_int)
    }

    pub fn float(&self, column: &str) -> Option<f64> {
        match self.value(column)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn text(&self, column: &str) -> Option<String> {
        match self.value(column)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

fn as_int(v: &Value) -> Option<i64> {
    match v {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

impl MapRow for Circuit {
    fn map_row(row: &Row) -> Result<Self, MapError> {
        let c = scoped(row, &CIRCUIT);
        Ok(Circuit {
            circuit_id: c.id("circuitId")?,
            circuit_ref: c.required_text("circuitRef")?,
            name: c.required_text("name")?,
            location: c.text("location"),
            country: c.text("country"),
            lat: c.float("lat"),
            lng: c.float("lng"),
            alt: c.int("alt"),
            url: c.text("url"),
        })
    }
}

impl MapRow for Constructor {
    fn map_row(row: &Row) -> Result<Self, MapError> {
        let k = scoped(row, &CONSTRUCTOR);
        Ok(Constructor {
            constructor_id: k.id("constructorId")?,
            constructor_ref: k.required_text("constructorRef")?,
            name: k.required_text("name")?,
            nationality: k.text("nationality"),
            url: k.text("url"),
        })
    }
}

impl MapRow for Driver {
    fn map_row(row: &Row) -> Result<Self, MapError> {
        let d = scoped(row, &DRIVER);
        Ok(Driver {
            driver_id: d.id("driverId")?,
            driver_ref: d.required_text("driverRef")?,
            number: d.int("number"),
            code: d.text("code"),
            forename: d.required_text("forename")?,
            surname: d.required_text("surname")?,
            dob: d.text("dob"),
            nationality: d.text("nationality"),
            url: d.text("url"),
        })
    }
}

impl MapRow for RaceSummary {
    fn map_row(row: &Row) -> Result<Self, MapError> {
        let r = scoped(row, &RACE);
        Ok(RaceSummary {
            race_id: r.id("raceId")?,
            year: r.id("year")?,
            round: r.id("round")?,
            name: r.required_text("name")?,
            date: r.text("date"),
            time: r.text("time"),
            url: r.text("url"),
        })
    }
}

impl MapRow for Race {
    fn map_row(row: &Row) -> Result<Self, MapError> {
        Ok(Race {
            summary: RaceSummary::map_row(row)?,
            circuit: Circuit::map_row(row)?,
        })
    }
}

impl MapRow for Status {
    fn map_row(row: &Row) -> Result<Self, MapError> {
        let s = scoped(row, &STATUS);
        Ok(Status {
            status_id: s.id("statusId")?,
            status: s.required_text("status")?,
        })
    }
}

impl MapRow for RaceResult {
    fn map_row(row: &Row) -> Result<Self, MapError> {
        let r = scoped(row, &RESULT);
        Ok(RaceResult {
            result_id: r.id("resultId")?,
            number: r.int("number"),
            grid: r.int("grid"),
            position: r.int("position"),
            position_text: r.text("positionText"),
            position_order: r.int("positionOrder"),
            points: r.float("points"),
            laps: r.int("laps"),
            time: r.text("time"),
            milliseconds: r.int("milliseconds"),
            fastest_lap: r.int("fastestLap"),
            rank: r.int("rank"),
            fastest_lap_time: r.text("fastestLapTime"),
            fastest_lap_speed: r.text("fastestLapSpeed"),
            status: Status::map_row(row)?,
            driver: Driver::map_row(row)?,
            constructor: Constructor::map_row(row)?,
            race: RaceSummary::map_row(row)?,
        })
    }
}

impl MapRow for QualifyingEntry {
    fn map_row(row: &Row) -> Result<Self, MapError> {
        let q = scoped(row, &QUALIFYING);
        Ok(QualifyingEntry {
            qualify_id: q.id("qualifyId")?,
            number: q.int("number"),
            position: q.int("position"),
            q1: q.text("q1"),
            q2: q.text("q2"),
            q3: q.text("q3"),
            driver: Driver::map_row(row)?,
            constructor: Constructor::map_row(row)?,
            race: RaceSummary::map_row(row)?,
        })
    }
}

impl MapRow for DriverStanding {
    fn map_row(row: &Row) -> Result<Self, MapError> {
        let s = scoped(row, &DRIVER_STANDING);
        Ok(DriverStanding {
            driver_standings_id: s.id("driverStandingsId")?,
            points: s.float("points"),
            position: s.int("position"),
            position_text: s.text("positionText"),
            wins: s.int("wins"),
            driver: Driver::map_row(row)?,
            race: RaceSummary::map_row(row)?,
        })
    }
}

impl MapRow for ConstructorStanding {
    fn map_row(row: &Row) -> Result<Self, MapError> {
        let s = scoped(row, &CONSTRUCTOR_STANDING);
        Ok(ConstructorStanding {
            constructor_standings_id: s.id("constructorStandingsId")?,
            points: s.float("points"),
            position: s.int("position"),
            position_text: s.text("positionText"),
            wins: s.int("wins"),
            constructor: Constructor::map_row(row)?,
            race: RaceSummary::map_row(row)?,
        })
    }
}
