use rocket::{
    request::{FromRequest, Outcome, Request},
    State,
};

use crate::{core::prelude::*, web::Cfg};

pub struct Version(pub &'static str);

/// The format for rendering the dates of feedback entries.
pub struct Dates<'r>(&'r DateFormat);

impl Dates<'_> {
    pub fn format(&self) -> &DateFormat {
        self.0
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Dates<'r> {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        request
            .guard::<&State<Cfg>>()
            .await
            .map(|cfg| Dates(&cfg.inner().date_format))
    }
}
