use super::prelude::*;

pub fn load_feedback<R>(repo: &R) -> Result<Vec<Feedback>>
where
    R: FeedbackReader,
{
    let feedback = repo.all_feedback()?;
    debug_assert!(feedback
        .windows(2)
        .all(|w| w[0].created_at >= w[1].created_at));
    Ok(feedback)
}
