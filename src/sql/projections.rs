//! Output shape of every table the API reads. Mappers read the same scopes.

use super::builder::Projection;

pub const CIRCUIT: Projection = Projection {
    scope: "circuit",
    columns: &[
        "circuitId",
        "circuitRef",
        "name",
        "location",
        "country",
        "lat",
        "lng",
        "alt",
        "url",
    ],
};

pub const CONSTRUCTOR: Projection = Projection {
    scope: "constructor",
    columns: &["constructorId", "constructorRef", "name", "nationality", "url"],
};

pub const DRIVER: Projection = Projection {
    scope: "driver",
    columns: &[
        "driverId",
        "driverRef",
        "number",
        "code",
        "forename",
        "surname",
        "dob",
        "nationality",
        "url",
    ],
};

pub const RACE: Projection = Projection {
    scope: "race",
    columns: &["raceId", "year", "round", "name", "date", "time", "url"],
};

pub const STATUS: Projection = Projection {
    scope: "status",
    columns: &["statusId", "status"],
};

pub const RESULT: Projection = Projection {
    scope: "result",
    columns: &[
        "resultId",
        "number",
        "grid",
        "position",
        "positionText",
        "positionOrder",
        "points",
        "laps",
        "time",
        "milliseconds",
        "fastestLap",
        "rank",
        "fastestLapTime",
        "fastestLapSpeed",
    ],
};

pub const QUALIFYING: Projection = Projection {
    scope: "qualifying",
    columns: &["qualifyId", "number", "position", "q1", "q2", "q3"],
};

pub const DRIVER_STANDING: Projection = Projection {
    scope: "standing",
    columns: &["driverStandingsId", "points", "position", "positionText", "wins"],
};

pub const CONSTRUCTOR_STANDING: Projection = Projection {
    scope: "standing",
    columns: &[
        "constructorStandingsId",
        "points",
        "position",
        "positionText",
        "wins",
    ],
};
