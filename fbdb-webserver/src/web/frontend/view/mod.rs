use maud::{html, Markup};

use crate::core::prelude::*;

mod page;

use page::*;

pub fn feedback(view: &FeedbackView) -> Markup {
    let FeedbackView {
        show_confirmation,
        entries,
        number_of_records,
        average_rating,
    } = view;
    page(
        "Feedback",
        html! {
            main class="feedback" {
                h1 { "Feedback" }
                @if *show_confirmation {
                    div class="flash success" { "Thank you for your feedback!" }
                }
                (feedback_form())
                div class="summary" {
                    span class="count" { "ratings: " (number_of_records) }
                    span class="average" {
                        "average: " (format!("{:.2}", f64::from(*average_rating)))
                    }
                }
                (feedback_list(entries))
            }
        },
    )
}

fn feedback_form() -> Markup {
    let min = i8::from(RatingValue::min());
    let max = i8::from(RatingValue::max());
    html! {
        form class="feedback-form" action="/feedback" method="POST" {
            label for="rating" { "Rating" }
            select id="rating" name="rating" required {
                @for v in (min..=max).rev() {
                    option value=(v) { (v) }
                }
            }
            label for="comment" { "Comment" }
            textarea id="comment" name="comment" rows=(4) {}
            input class="btn" type="submit" value="Send";
        }
    }
}

fn feedback_list(entries: &[FeedbackViewEntry]) -> Markup {
    html! {
        @if entries.is_empty() {
            p class="empty" { "No feedback yet." }
        } @else {
            ul class="feedback-list" {
                @for e in entries {
                    li {
                        span class="date" { (e.date) }
                        span class="rating" { (e.rating) "/5" }
                        @if !e.comment.is_empty() {
                            p class="comment" { (e.comment) }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(date: &str, rating: i8, comment: &str) -> FeedbackViewEntry {
        FeedbackViewEntry {
            date: date.into(),
            rating,
            comment: comment.into(),
        }
    }

    #[test]
    fn render_empty_page() {
        let view = FeedbackView {
            show_confirmation: false,
            entries: vec![],
            number_of_records: 0,
            average_rating: 0.0.into(),
        };
        let html = feedback(&view).into_string();
        assert!(html.contains("ratings: 0"));
        assert!(html.contains("average: 0.00"));
        assert!(html.contains("No feedback yet."));
        assert!(!html.contains("Thank you"));
    }

    #[test]
    fn render_confirmation_and_entries() {
        let view = FeedbackView {
            show_confirmation: true,
            entries: vec![entry("3/7/18", 4, "<b>nice</b>"), entry("3/6/18", 2, "")],
            number_of_records: 2,
            average_rating: 3.0.into(),
        };
        let html = feedback(&view).into_string();
        assert!(html.contains("Thank you for your feedback!"));
        assert!(html.contains("ratings: 2"));
        assert!(html.contains("average: 3.00"));
        assert!(html.contains("3/7/18"));
        assert!(html.contains("&lt;b&gt;nice&lt;/b&gt;"));
        assert!(html.find("3/7/18") < html.find("3/6/18"));
    }

    #[test]
    fn offer_all_valid_ratings() {
        let html = feedback_form().into_string();
        for v in 1..=5 {
            assert!(html.contains(&format!(r#"<option value="{v}">"#)));
        }
        assert!(!html.contains(r#"<option value="0">"#));
        assert!(!html.contains(r#"<option value="6">"#));
        assert!(!html.contains("maxlength"));
    }
}
