//! One query per access pattern. Every ordering ends on the primary key so
//! repeated calls return rows in the same order.

use super::builder::{Order, QueryBuf, Select};
use super::projections::{
    CIRCUIT, CONSTRUCTOR, CONSTRUCTOR_STANDING, DRIVER, DRIVER_STANDING, QUALIFYING, RACE,
    RESULT, STATUS,
};
use crate::params::SeasonRange;

pub fn all_circuits() -> QueryBuf {
    Select::from("circuits", "c")
        .project("c", &CIRCUIT)
        .order_by("c", "name", Order::Asc)
        .order_by("c", "circuitId", Order::Asc)
        .build()
}

/// Circuits raced in `year`, once each, in the order of their first round.
pub fn circuits_by_season(year: i64) -> QueryBuf {
    Select::from("circuits", "c")
        .project("c", &CIRCUIT)
        .inner_join("races", "r", "circuitId", "c")
        .where_eq("r", "year", year)
        .group_by("c", "circuitId")
        .order_by_min("r", "round", Order::Asc)
        .order_by("c", "circuitId", Order::Asc)
        .build()
}

pub fn circuit_by_ref(reference: &str) -> QueryBuf {
    Select::from("circuits", "c")
        .project("c", &CIRCUIT)
        .where_ref("c", "circuitRef", reference)
        .build()
}

pub fn all_constructors() -> QueryBuf {
    Select::from("constructors", "k")
        .project("k", &CONSTRUCTOR)
        .order_by("k", "name", Order::Asc)
        .order_by("k", "constructorId", Order::Asc)
        .build()
}

pub fn constructor_by_ref(reference: &str) -> QueryBuf {
    Select::from("constructors", "k")
        .project("k", &CONSTRUCTOR)
        .where_ref("k", "constructorRef", reference)
        .build()
}

fn drivers() -> Select {
    Select::from("drivers", "d").project("d", &DRIVER)
}

fn by_name(select: Select) -> Select {
    select
        .order_by("d", "surname", Order::Asc)
        .order_by("d", "forename", Order::Asc)
        .order_by("d", "driverId", Order::Asc)
}

pub fn all_drivers() -> QueryBuf {
    by_name(drivers()).build()
}

pub fn driver_by_ref(reference: &str) -> QueryBuf {
    drivers().where_ref("d", "driverRef", reference).build()
}

pub fn drivers_by_surname_prefix(prefix: &str) -> QueryBuf {
    by_name(drivers().where_prefix("d", "surname", prefix)).build()
}

fn races() -> Select {
    Select::from("races", "r")
        .project("r", &RACE)
        .project("c", &CIRCUIT)
        .inner_join("circuits", "c", "circuitId", "r")
}

fn chronological(select: Select, alias: &str) -> Select {
    select
        .order_by(alias, "year", Order::Asc)
        .order_by(alias, "round", Order::Asc)
}

pub fn race_by_season_round(year: i64, round: i64) -> QueryBuf {
    races()
        .where_eq("r", "year", year)
        .where_eq("r", "round", round)
        .build()
}

pub fn races_by_season(year: i64) -> QueryBuf {
    races()
        .where_eq("r", "year", year)
        .order_by("r", "round", Order::Asc)
        .order_by("r", "raceId", Order::Asc)
        .build()
}

pub fn races_by_circuit(reference: &str) -> QueryBuf {
    chronological(races().where_ref("c", "circuitRef", reference), "r")
        .order_by("r", "raceId", Order::Asc)
        .build()
}

pub fn races_by_circuit_in_seasons(reference: &str, seasons: SeasonRange) -> QueryBuf {
    let select = races()
        .where_ref("c", "circuitRef", reference)
        .where_between("r", "year", seasons.start(), seasons.end());
    chronological(select, "r")
        .order_by("r", "raceId", Order::Asc)
        .build()
}

pub fn race_by_id(race_id: i64) -> QueryBuf {
    races().where_eq("r", "raceId", race_id).build()
}

fn results() -> Select {
    Select::from("results", "res")
        .project("res", &RESULT)
        .project("s", &STATUS)
        .project("d", &DRIVER)
        .project("k", &CONSTRUCTOR)
        .project("ra", &RACE)
        .inner_join("drivers", "d", "driverId", "res")
        .inner_join("constructors", "k", "constructorId", "res")
        .inner_join("races", "ra", "raceId", "res")
        .inner_join("status", "s", "statusId", "res")
}

pub fn results_by_race(race_id: i64) -> QueryBuf {
    results()
        .where_eq("res", "raceId", race_id)
        .order_by("res", "grid", Order::Asc)
        .order_by("res", "resultId", Order::Asc)
        .build()
}

fn driver_career(select: Select) -> QueryBuf {
    chronological(select, "ra")
        .order_by("res", "grid", Order::Asc)
        .order_by("res", "resultId", Order::Asc)
        .build()
}

pub fn results_by_driver(reference: &str) -> QueryBuf {
    driver_career(results().where_ref("d", "driverRef", reference))
}

pub fn results_by_driver_in_seasons(reference: &str, seasons: SeasonRange) -> QueryBuf {
    driver_career(
        results()
            .where_ref("d", "driverRef", reference)
            .where_between("ra", "year", seasons.start(), seasons.end()),
    )
}

pub fn qualifying_by_race(race_id: i64) -> QueryBuf {
    Select::from("qualifying", "q")
        .project("q", &QUALIFYING)
        .project("d", &DRIVER)
        .project("k", &CONSTRUCTOR)
        .project("ra", &RACE)
        .inner_join("drivers", "d", "driverId", "q")
        .inner_join("constructors", "k", "constructorId", "q")
        .inner_join("races", "ra", "raceId", "q")
        .where_eq("q", "raceId", race_id)
        .order_by("q", "position", Order::Asc)
        .order_by("q", "qualifyId", Order::Asc)
        .build()
}

pub fn driver_standings_by_race(race_id: i64) -> QueryBuf {
    Select::from("driver_standings", "ds")
        .project("ds", &DRIVER_STANDING)
        .project("d", &DRIVER)
        .project("ra", &RACE)
        .inner_join("drivers", "d", "driverId", "ds")
        .inner_join("races", "ra", "raceId", "ds")
        .where_eq("ds", "raceId", race_id)
        .order_by("ds", "position", Order::Asc)
        .order_by("ds", "driverStandingsId", Order::Asc)
        .build()
}

pub fn constructor_standings_by_race(race_id: i64) -> QueryBuf {
    Select::from("constructor_standings", "cs")
        .project("cs", &CONSTRUCTOR_STANDING)
        .project("k", &CONSTRUCTOR)
        .project("ra", &RACE)
        .inner_join("constructors", "k", "constructorId", "cs")
        .inner_join("races", "ra", "raceId", "cs")
        .where_eq("cs", "raceId", race_id)
        .order_by("cs", "position", Order::Asc)
        .order_by("cs", "constructorStandingsId", Order::Asc)
        .build()
}
