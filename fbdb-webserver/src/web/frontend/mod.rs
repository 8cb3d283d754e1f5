use std::{borrow::Cow, ffi::OsStr, path::PathBuf};

use anyhow::anyhow;
use maud::Markup;
use rocket::{
    self,
    form::Form,
    get,
    http::{ContentType, Status},
    post,
    response::Redirect,
    routes, uri, FromForm, Route,
};
use rust_embed::RustEmbed;

use crate::{
    core::{prelude::*, usecases},
    web::{api::ApiError, guards::*, memory},
};

mod view;


#[derive(RustEmbed)]
#[folder = "public/"]
struct PublicAsset;

type Result<T> = std::result::Result<T, ApiError>;

#[get("/")]
pub fn get_index() -> Redirect {
    Redirect::to(uri!(get_feedback))
}

#[get("/hello")]
pub fn get_hello() -> &'static str {
    "Hello"
}

#[get("/feedback")]
pub fn get_feedback(connections: memory::Connections, dates: Dates) -> Result<Markup> {
    let view = usecases::feedback_page(&connections.shared(), false, dates.format())?;
    Ok(view::feedback(&view))
}

#[derive(FromForm)]
pub struct FeedbackForm<'r> {
    rating: i64,
    comment: &'r str,
}

impl From<FeedbackForm<'_>> for FeedbackSubmission {
    fn from(from: FeedbackForm) -> Self {
        let FeedbackForm { rating, comment } = from;
        Self {
            rating,
            comment: comment.to_string(),
        }
    }
}

#[post("/feedback", data = "<form>")]
pub fn post_feedback(
    connections: memory::Connections,
    dates: Dates,
    form: Option<Form<FeedbackForm>>,
) -> Result<Markup> {
    let Some(form) = form else {
        return Err(ApiError::OtherWithStatus(
            anyhow!("Invalid feedback form"),
            Status::BadRequest,
        ));
    };
    {
        let db = connections.exclusive();
        usecases::submit_feedback(&db, form.into_inner().into(), Timestamp::now())?;
    }
    let view = usecases::feedback_page(&connections.shared(), true, dates.format())?;
    Ok(view::feedback(&view))
}

#[get("/public/<file..>")]
pub fn get_public(file: PathBuf) -> Option<(ContentType, Cow<'static, [u8]>)> {
    let filename = file.display().to_string();
    let asset = PublicAsset::get(&filename)?;
    let content_type = file
        .extension()
        .and_then(OsStr::to_str)
        .and_then(ContentType::from_extension)
        .unwrap_or(ContentType::Bytes);
    Some((content_type, asset.data))
}

pub fn routes() -> Vec<Route> {
    routes![get_index, get_hello, get_feedback, post_feedback, get_public]
}
