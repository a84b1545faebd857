//! Resource routes, all read-only GETs.

use crate::handlers::{circuits, constructors, drivers, qualifying, races, results, standings};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/circuits", get(circuits::list))
        .route("/circuits/season/:year", get(circuits::by_season))
        .route("/circuits/:ref", get(circuits::by_ref))
        .route("/constructors", get(constructors::list))
        .route("/constructors/:ref", get(constructors::by_ref))
        .route("/drivers", get(drivers::list))
        .route("/drivers/race/:race_id", get(drivers::by_race))
        .route("/drivers/search/:substring", get(drivers::search))
        .route("/drivers/:ref", get(drivers::by_ref))
        .route("/races/season/:year/:round", get(races::by_season_round))
        .route("/races/season/:year", get(races::by_season))
        .route(
            "/races/circuits/:ref/season/:start/:end",
            get(races::by_circuit_in_seasons),
        )
        .route("/races/circuits/:ref", get(races::by_circuit))
        .route("/races/:race_id", get(races::by_id))
        .route(
            "/results/drivers/:ref/seasons/:start/:end",
            get(results::by_driver_in_seasons),
        )
        .route("/results/driver/:ref", get(results::by_driver))
        .route("/results/:race_id", get(results::by_race))
        .route("/qualifying/:race_id", get(qualifying::by_race))
        .route("/standings/drivers/:race_id", get(standings::drivers))
        .route("/standings/constructors/:race_id", get(standings::constructors))
        .with_state(state)
}
