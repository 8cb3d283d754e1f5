use super::prelude::*;
use crate::view::{build_view, FeedbackView};

pub fn feedback_page<R>(
    repo: &R,
    show_confirmation: bool,
    date_format: &DateFormat,
) -> Result<FeedbackView>
where
    R: FeedbackReader,
{
    let feedback = super::load_feedback(repo)?;
    Ok(build_view(&feedback, show_confirmation, date_format))
}
