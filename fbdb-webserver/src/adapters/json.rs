pub use fbdb_boundary::*;

use crate::core::prelude as e;

pub mod from_json {
    //! JSON -> Entity

    use super::*;

    // NOTE:
    // We cannot impl From<T> here, because the JSON structs
    // and the entities both are outside this crate.

    pub fn feedback_submission(from: NewFeedback) -> e::FeedbackSubmission {
        let NewFeedback { rating, comment } = from;
        e::FeedbackSubmission { rating, comment }
    }
}

pub mod to_json {
    //! Entity -> JSON

    use super::*;

    pub fn feedback_page(from: e::FeedbackView) -> FeedbackPage {
        let e::FeedbackView {
            show_confirmation,
            entries,
            number_of_records,
            average_rating,
        } = from;
        let feedback = entries.into_iter().map(feedback_entry).collect();
        FeedbackPage {
            show_confirmation,
            feedback,
            number_of_records,
            average_rating: average_rating.into(),
        }
    }

    fn feedback_entry(from: e::FeedbackViewEntry) -> FeedbackEntry {
        let e::FeedbackViewEntry {
            date,
            rating,
            comment,
        } = from;
        FeedbackEntry {
            date,
            rating,
            comment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert_feedback_view() {
        let view = e::FeedbackView {
            show_confirmation: false,
            entries: vec![e::FeedbackViewEntry {
                date: "1/2/03".into(),
                rating: 2,
                comment: "ok".into(),
            }],
            number_of_records: 1,
            average_rating: 2.0.into(),
        };
        let page = to_json::feedback_page(view);
        assert_eq!(page.number_of_records, 1);
        assert_eq!(page.average_rating, 2.0);
        assert_eq!(
            page.feedback,
            vec![FeedbackEntry {
                date: "1/2/03".into(),
                rating: 2,
                comment: "ok".into(),
            }]
        );
    }

    #[test]
    fn convert_new_feedback() {
        let s = from_json::feedback_submission(NewFeedback {
            rating: 9,
            comment: "too good".into(),
        });
        assert_eq!(s.rating, 9);
        assert!(!s.is_valid());
    }
}
