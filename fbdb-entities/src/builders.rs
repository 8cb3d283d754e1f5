pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::feedback_builder::*;

pub mod feedback_builder {

    use super::*;
    use crate::{feedback::*, rating::*, time::*};

    #[derive(Debug)]
    pub struct FeedbackBuild {
        feedback: Feedback,
    }

    impl FeedbackBuild {
        pub fn created_at(mut self, ts: Timestamp) -> Self {
            self.feedback.created_at = ts;
            self
        }
        pub fn created_at_seconds(mut self, seconds: i64) -> Self {
            self.feedback.created_at = Timestamp::try_from_seconds(seconds).unwrap();
            self
        }
        pub fn rating(mut self, v: i64) -> Self {
            self.feedback.rating = RatingValue::try_from(v).unwrap();
            self
        }
        pub fn comment(mut self, comment: &str) -> Self {
            self.feedback.comment = comment.into();
            self
        }
        pub fn finish(self) -> Feedback {
            self.feedback
        }
    }

    impl Builder for Feedback {
        type Build = FeedbackBuild;
        fn build() -> FeedbackBuild {
            FeedbackBuild {
                feedback: Feedback {
                    created_at: Timestamp::now(),
                    rating: RatingValue::max(),
                    comment: "".into(),
                },
            }
        }
    }
}
