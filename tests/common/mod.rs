//! Shared fixture: an in-memory copy of a slice of the championship dataset.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use f1_api::sql::QueryBuf;
use f1_api::{build_router, AppState, DataSource, DataSourceError, Row, SqliteDataSource};
use serde_json::Value;
use sqlx::sqlite::SqlitePoolOptions;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tower::ServiceExt;

const SCHEMA: &str = r#"
CREATE TABLE circuits (
    circuitId INTEGER PRIMARY KEY, circuitRef TEXT NOT NULL, name TEXT NOT NULL,
    location TEXT, country TEXT, lat REAL, lng REAL, alt INTEGER, url TEXT
);
CREATE TABLE constructors (
    constructorId INTEGER PRIMARY KEY, constructorRef TEXT NOT NULL, name TEXT NOT NULL,
    nationality TEXT, url TEXT
);
CREATE TABLE drivers (
    driverId INTEGER PRIMARY KEY, driverRef TEXT NOT NULL, number INTEGER, code TEXT,
    forename TEXT NOT NULL, surname TEXT NOT NULL, dob TEXT, nationality TEXT, url TEXT
);
CREATE TABLE races (
    raceId INTEGER PRIMARY KEY, year INTEGER NOT NULL, round INTEGER NOT NULL,
    circuitId INTEGER NOT NULL, name TEXT NOT NULL, date TEXT, time TEXT, url TEXT
);
CREATE TABLE status (statusId INTEGER PRIMARY KEY, status TEXT NOT NULL);
CREATE TABLE results (
    resultId INTEGER PRIMARY KEY, raceId INTEGER, driverId INTEGER, constructorId INTEGER,
    number INTEGER, grid INTEGER, position INTEGER, positionText TEXT, positionOrder INTEGER,
    points REAL, laps INTEGER, time TEXT, milliseconds INTEGER, fastestLap INTEGER,
    rank INTEGER, fastestLapTime TEXT, fastestLapSpeed TEXT, statusId INTEGER
);
CREATE TABLE qualifying (
    qualifyId INTEGER PRIMARY KEY, raceId INTEGER, driverId INTEGER, constructorId INTEGER,
    number INTEGER, position INTEGER, q1 TEXT, q2 TEXT, q3 TEXT
);
CREATE TABLE driver_standings (
    driverStandingsId INTEGER PRIMARY KEY, raceId INTEGER, driverId INTEGER,
    points REAL, position INTEGER, positionText TEXT, wins INTEGER
);
CREATE TABLE constructor_standings (
    constructorStandingsId INTEGER PRIMARY KEY, raceId INTEGER, constructorId INTEGER,
    points REAL, position INTEGER, positionText TEXT, wins INTEGER
);
"#;

const DATA: &str = r#"
INSERT INTO circuits VALUES
    (9, 'silverstone', 'Silverstone Circuit', 'Silverstone', 'UK', 52.0786, -1.01694, 153, 'http://en.wikipedia.org/wiki/Silverstone_Circuit'),
    (6, 'monaco', 'Circuit de Monaco', 'Monte-Carlo', 'Monaco', 43.7347, 7.42056, 7, 'http://en.wikipedia.org/wiki/Circuit_de_Monaco'),
    (14, 'monza', 'Autodromo Nazionale di Monza', 'Monza', 'Italy', 45.6156, 9.28111, 162, 'http://en.wikipedia.org/wiki/Autodromo_Nazionale_Monza'),
    (70, 'red_bull_ring', 'Red Bull Ring', 'Spielberg', 'Austria', 47.2197, 14.7647, 678, 'http://en.wikipedia.org/wiki/Red_Bull_Ring');

INSERT INTO constructors VALUES
    (1, 'mclaren', 'McLaren', 'British', 'http://en.wikipedia.org/wiki/McLaren'),
    (6, 'ferrari', 'Ferrari', 'Italian', 'http://en.wikipedia.org/wiki/Scuderia_Ferrari'),
    (51, 'alfa', 'Alfa Romeo', 'Swiss', 'http://en.wikipedia.org/wiki/Alfa_Romeo_in_Formula_One'),
    (5, 'toro_rosso', 'Toro Rosso', 'Italian', 'http://en.wikipedia.org/wiki/Scuderia_Toro_Rosso');

INSERT INTO drivers VALUES
    (1, 'hamilton', 44, 'HAM', 'Lewis', 'Hamilton', '1985-01-07', 'British', 'http://en.wikipedia.org/wiki/Lewis_Hamilton'),
    (20, 'vettel', 5, 'VET', 'Sebastian', 'Vettel', '1987-07-03', 'German', 'http://en.wikipedia.org/wiki/Sebastian_Vettel'),
    (579, 'fangio', NULL, NULL, 'Juan', 'Fangio', '1911-06-24', 'Argentine', 'http://en.wikipedia.org/wiki/Juan_Manuel_Fangio'),
    (642, 'farina', NULL, NULL, 'Nino', 'Farina', '1906-10-30', 'Italian', 'http://en.wikipedia.org/wiki/Nino_Farina'),
    (633, 'hampshire', '\N', '\N', 'David', 'Hampshire', '1917-12-29', 'British', 'http://en.wikipedia.org/wiki/David_Hampshire'),
    (700, 'duncan_hamilton', NULL, NULL, 'Duncan', 'Hamilton', '1920-04-30', 'British', 'http://en.wikipedia.org/wiki/Duncan_Hamilton');

INSERT INTO races VALUES
    (833, 1950, 1, 9, 'British Grand Prix', '1950-05-13', NULL, 'http://en.wikipedia.org/wiki/1950_British_Grand_Prix'),
    (834, 1950, 2, 6, 'Monaco Grand Prix', '1950-05-21', NULL, 'http://en.wikipedia.org/wiki/1950_Monaco_Grand_Prix'),
    (841, 1950, 7, 14, 'Italian Grand Prix', '1950-09-03', NULL, 'http://en.wikipedia.org/wiki/1950_Italian_Grand_Prix'),
    (1000, 2001, 15, 14, 'Italian Grand Prix', '2001-09-16', NULL, NULL),
    (1001, 2003, 14, 14, 'Italian Grand Prix', '2003-09-14', NULL, NULL),
    (1002, 2005, 14, 14, 'Italian Grand Prix', '2005-09-04', NULL, NULL),
    (1050, 2007, 14, 14, 'Italian Grand Prix', '2007-09-09', NULL, NULL),
    (1099, 2008, 9, 9, 'British Grand Prix', '2008-07-06', '12:00:00', NULL),
    (1100, 2008, 14, 14, 'Italian Grand Prix', '2008-09-14', '12:00:00', 'http://en.wikipedia.org/wiki/2008_Italian_Grand_Prix'),
    (1042, 2020, 8, 14, 'Italian Grand Prix', '2020-09-06', '13:10:00', NULL),
    (1041, 2020, 2, 70, 'Styrian Grand Prix', '2020-07-12', '13:10:00', NULL),
    (1040, 2020, 1, 70, 'Austrian Grand Prix', '2020-07-05', '13:10:00', NULL);

INSERT INTO status VALUES (1, 'Finished'), (5, 'Engine'), (11, '+1 Lap');

INSERT INTO results VALUES
    (3, 833, 633, 6, 4, 9, 9, '9', 9, 0, 68, NULL, NULL, NULL, NULL, NULL, NULL, 11),
    (2, 833, 579, 51, 1, 3, NULL, 'R', 8, 0, 62, NULL, NULL, NULL, NULL, NULL, NULL, 5),
    (1, 833, 642, 51, 2, 1, 1, '1', 1, 9, 70, '2:13:23.6', 8003600, NULL, NULL, NULL, NULL, 1),
    (4, 833, 9999, 51, 3, 2, 2, '2', 2, 6, 70, '+2.6', 8006200, NULL, NULL, NULL, NULL, 1),
    (21, 1100, 1, 1, 22, 15, 7, '7', 7, 2, 53, '+29.912', 5203730, 53, 5, '1:28.394', '235.931', 1),
    (20, 1100, 20, 5, 15, 1, 1, '1', 1, 10, 53, '1:26:13.818', 5173818, 53, 4, '1:28.047', '236.887', 1),
    (10, 1050, 1, 1, 2, 2, 2, '2', 2, 8, 53, '+6.062', 4594330, 17, 2, '1:22.314', '253.422', 1);

INSERT INTO qualifying VALUES
    (101, 1100, 1, 1, 22, 15, '1:36.142', NULL, NULL),
    (100, 1100, 20, 5, 15, 1, '1:35.837', '1:36.631', '1:37.555'),
    (102, 1100, 1, 999, 22, 16, '1:36.500', NULL, NULL);

INSERT INTO driver_standings VALUES
    (501, 1100, 20, 35, 8, '8', 1),
    (500, 1100, 1, 78, 1, '1', 3),
    (502, 1100, 9999, 0, 20, '20', 0);

INSERT INTO constructor_standings VALUES
    (602, 1100, 5, 10.5, 6, '6', 1),
    (603, 1100, 999, 0, 10, '10', 0),
    (600, 1100, 6, 134, 1, '1', 6),
    (601, 1100, 1, 133, 2, '2', 4);
"#;

pub async fn seeded_source() -> SqliteDataSource {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("open in-memory sqlite");
    sqlx::raw_sql(SCHEMA).execute(&pool).await.expect("create schema");
    sqlx::raw_sql(DATA).execute(&pool).await.expect("insert fixture rows");
    SqliteDataSource::from_pool(pool)
}

pub async fn app() -> Router {
    build_router(AppState::new(seeded_source().await), None)
}

pub async fn send(app: &Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("build request");
    let response = app.clone().oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    (status, bytes.to_vec())
}

pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let (status, bytes) = send(app, uri).await;
    let body = serde_json::from_slice(&bytes).expect("response body is JSON");
    (status, body)
}

/// Field `key` of every element of a JSON array body.
pub fn pluck<'a>(body: &'a Value, key: &str) -> Vec<&'a Value> {
    body.as_array()
        .expect("array body")
        .iter()
        .map(|item| &item[key])
        .collect()
}

/// Counts queries before delegating.
pub struct CountingSource {
    pub inner: SqliteDataSource,
    pub calls: Arc<AtomicUsize>,
}

#[async_trait]
impl DataSource for CountingSource {
    async fn fetch_all(&self, query: &QueryBuf) -> Result<Vec<Row>, DataSourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.fetch_all(query).await
    }

    async fn fetch_one(&self, query: &QueryBuf) -> Result<Option<Row>, DataSourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.fetch_one(query).await
    }
}

/// Every query fails as if the store were unreachable.
pub struct FailingSource;

#[async_trait]
impl DataSource for FailingSource {
    async fn fetch_all(&self, _query: &QueryBuf) -> Result<Vec<Row>, DataSourceError> {
        Err(DataSourceError::Query(sqlx::Error::PoolTimedOut))
    }

    async fn fetch_one(&self, _query: &QueryBuf) -> Result<Option<Row>, DataSourceError> {
        Err(DataSourceError::Query(sqlx::Error::PoolTimedOut))
    }
}
