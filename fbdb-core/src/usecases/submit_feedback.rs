use super::prelude::*;
use crate::util::validate::Validate;

pub fn submit_feedback<R>(repo: &R, submission: FeedbackSubmission, now: Timestamp) -> Result<()>
where
    R: FeedbackRepo,
{
    if let Err(err) = submission.validate() {
        log::debug!("Rejected feedback: {err}");
        return Err(err.into());
    }
    let FeedbackSubmission { rating, comment } = submission;
    let feedback = Feedback::new(now, RatingValue::try_from(rating)?, comment);
    log::debug!("Storing new feedback rated with {rating}");
    repo.create_feedback(feedback)?;
    Ok(())
}
