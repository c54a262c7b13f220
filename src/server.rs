use rocket::{Build, Rocket, routes, catchers};

use crate::catchers::{internal_error, not_found};
use crate::cors::CORS;
use crate::request_log::RequestLogger;
use crate::routes::{all_options, cast_vote, health_check, index, leaderboard, AppState};

pub fn rocket(state: AppState, port: u16) -> Rocket<Build> {
    let figment = rocket::Config::figment()
        .merge(("port", port))
        .merge(("address", "0.0.0.0"));

    rocket::custom(figment)
        .attach(RequestLogger)
        .attach(CORS)
        .manage(state)
        .mount(
            "/",
            routes![
                index,
                leaderboard,
                cast_vote,
                health_check,
                all_options
            ],
        )
        .register("/", catchers![not_found, internal_error])
}
