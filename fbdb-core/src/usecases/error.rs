use crate::{repositories, util::validate::FeedbackInvalidation};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Rating value out of range")]
    RatingValue,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<FeedbackInvalidation> for Error {
    fn from(err: FeedbackInvalidation) -> Self {
        match err {
            FeedbackInvalidation::RatingOutOfRange(_) => Self::RatingValue,
        }
    }
}

impl From<fbdb_entities::rating::RatingValueOutOfRange> for Error {
    fn from(_: fbdb_entities::rating::RatingValueOutOfRange) -> Self {
        Self::RatingValue
    }
}
