use std::{fmt::Display, result};

use reloc_boundary::Error as JsonErrorResponse;
use rocket::{
    self, get,
    http::Status,
    post,
    response::{self, status::Created, Responder},
    routes,
    serde::json::{Error as JsonError, Json},
    Route, State,
};

use crate::{
    adapters::json::{self, from_json, to_json},
    web::sqlite,
};
use reloc_application::prelude as flows;
use reloc_core::usecases;

mod comments;
mod error;
mod posts;
mod stubs;
mod uploads;
mod util;

pub use self::error::Error as ApiError;


type Result<T> = result::Result<Json<T>, ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;
type CreatedResult<T> = result::Result<Created<Json<T>>, ApiError>;
type StatusResult = result::Result<Status, ApiError>;

pub fn routes() -> Vec<Route> {
    routes![
        // ---   posts   --- //
        posts::get_posts,
        posts::post_post,
        posts::post_like,
        // ---   comments   --- //
        comments::get_comments,
        comments::post_comment,
        // ---   uploads   --- //
        uploads::post_upload,
        // ---   stubs   --- //
        stubs::get_messages,
        stubs::post_message,
        stubs::post_payment,
        stubs::get_notifications,
        // ---   util   --- //
        util::get_version,
    ]
}

pub fn root_routes() -> Vec<Route> {
    routes![util::get_index, util::get_health, util::get_db_test]
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
