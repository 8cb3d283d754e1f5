use crate::{rating::*, time::*};

/// A single, accepted piece of feedback.
///
/// The rating is always within the valid range,
/// because a [`RatingValue`] cannot be created otherwise.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub created_at : Timestamp,
    pub rating     : RatingValue,
    pub comment    : String,
}

impl Feedback {
    pub fn new(created_at: Timestamp, rating: RatingValue, comment: String) -> Self {
        Self {
            created_at,
            rating,
            comment,
        }
    }
}

/// Unchecked feedback as submitted by a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackSubmission {
    pub rating: i64,
    pub comment: String,
}

impl FeedbackSubmission {
    // Only the rating is checked, the comment is accepted as is.
    pub const fn is_valid(&self) -> bool {
        RatingValue::is_valid_raw(self.rating)
    }
}
