use std::time::Instant;

use rocket::fairing::{Fairing, Info, Kind};
use rocket::{Data, Request, Response};
use tracing::info;

#[derive(Copy, Clone)]
struct RequestStart(Instant);

pub struct RequestLogger;

#[rocket::async_trait]
impl Fairing for RequestLogger {
    fn info(&self) -> Info {
        Info {
            name: "Request logger",
            kind: Kind::Request | Kind::Response
        }
    }

    async fn on_request(&self, req: &mut Request<'_>, _data: &mut Data<'_>) {
        req.local_cache(|| RequestStart(Instant::now()));
    }

    async fn on_response<'r>(&self, req: &'r Request<'_>, res: &mut Response<'r>) {
        let started = req.local_cache(|| RequestStart(Instant::now())).0;
        let status = res.status().code;

        match res.body().preset_size() {
            Some(size) => info!(
                "{} {} {} {}b {:.1?}",
                req.method(), req.uri(), status, size, started.elapsed()
            ),
            None => info!(
                "{} {} {} - {:.1?}",
                req.method(), req.uri(), status, started.elapsed()
            ),
        }
    }
}
