// Low-level storage access traits.
// Reading and writing are separated so that read-only
// access can be handed out without an exclusive lock.

use crate::entities::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait FeedbackReader {
    /// All feedback, the most recent first.
    fn all_feedback(&self) -> Result<Vec<Feedback>>;

    fn count_feedback(&self) -> Result<usize>;
}

pub trait FeedbackRepo: FeedbackReader {
    // The feedback is expected to be validated already
    fn create_feedback(&self, feedback: Feedback) -> Result<()>;
}
