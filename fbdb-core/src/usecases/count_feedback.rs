use super::prelude::*;

pub fn count_feedback<R>(repo: &R) -> Result<usize>
where
    R: FeedbackReader,
{
    Ok(repo.count_feedback()?)
}
