use fbdb_entities::{feedback::FeedbackSubmission, rating::RatingValue};
use thiserror::Error;

pub trait Validate {
    type Error;
    fn validate(&self) -> Result<(), Self::Error>;
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FeedbackInvalidation {
    #[error("Rating {0} is out of range")]
    RatingOutOfRange(i64),
}

impl Validate for FeedbackSubmission {
    type Error = FeedbackInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        // NOTE:
        // The comment is accepted as is, even if empty.
        RatingValue::try_from(self.rating)
            .map(|_| ())
            .map_err(|err| Self::Error::RatingOutOfRange(err.0))
    }
}
