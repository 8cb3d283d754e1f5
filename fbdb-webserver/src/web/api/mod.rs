use std::{fmt::Display, result};

use fbdb_boundary::Error as JsonErrorResponse;
use rocket::{
    self, get,
    http::Status,
    post,
    response::{self, Responder},
    routes,
    serde::json::{Error as JsonError, Json},
    Route, State,
};

use super::{guards::*, memory};
use crate::{
    adapters::json::{self, from_json, to_json},
    core::{prelude::*, usecases},
};

mod error;

pub use self::error::Error as ApiError;


type Result<T> = result::Result<Json<T>, ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;

pub fn routes() -> Vec<Route> {
    routes![
        // ---   feedback   --- //
        get_feedback,
        post_feedback,
        // ---   count   --- //
        get_count_feedback,
        // ---   server   --- //
        get_version,
    ]
}

#[get("/feedback")]
pub fn get_feedback(connections: memory::Connections, dates: Dates) -> Result<json::FeedbackPage> {
    let view = usecases::feedback_page(&connections.shared(), false, dates.format())?;
    Ok(Json(to_json::feedback_page(view)))
}

#[post("/feedback", format = "application/json", data = "<body>")]
pub fn post_feedback(
    connections: memory::Connections,
    dates: Dates,
    body: JsonResult<json::NewFeedback>,
) -> Result<json::FeedbackPage> {
    let submission = from_json::feedback_submission(body?.into_inner());
    {
        let db = connections.exclusive();
        usecases::submit_feedback(&db, submission, Timestamp::now())?;
    }
    let view = usecases::feedback_page(&connections.shared(), true, dates.format())?;
    Ok(Json(to_json::feedback_page(view)))
}

#[get("/count/feedback")]
pub fn get_count_feedback(connections: memory::Connections) -> Result<usize> {
    Ok(Json(usecases::count_feedback(&connections.shared())?))
}

#[get("/server/version")]
pub fn get_version(version: &State<Version>) -> &'static str {
    version.0
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    let message = err.to_string();
    let boundary_error = JsonErrorResponse {
        http_status: status.code,
        message,
    };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}
