use crate::entities::*;

/// Presentation of all feedback, recomputed on every request.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackView {
    pub show_confirmation: bool,
    pub entries: Vec<FeedbackViewEntry>,
    pub number_of_records: usize,
    pub average_rating: AvgRatingValue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackViewEntry {
    pub date: String,
    pub rating: i8,
    pub comment: String,
}

impl FeedbackViewEntry {
    fn new(feedback: &Feedback, date_format: &DateFormat) -> Self {
        let Feedback {
            created_at,
            rating,
            comment,
        } = feedback;
        Self {
            date: created_at.format_date(date_format),
            rating: (*rating).into(),
            comment: comment.clone(),
        }
    }
}

/// Builds the view from feedback that is already in display order.
pub fn build_view(
    feedback: &[Feedback],
    show_confirmation: bool,
    date_format: &DateFormat,
) -> FeedbackView {
    let entries: Vec<_> = feedback
        .iter()
        .map(|f| FeedbackViewEntry::new(f, date_format))
        .collect();
    let average_rating = feedback
        .iter()
        .map(|f| f.rating)
        .collect::<AvgRatingValueBuilder>()
        .build();
    FeedbackView {
        show_confirmation,
        number_of_records: entries.len(),
        entries,
        average_rating,
    }
}
