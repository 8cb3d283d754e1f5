use fbdb_core::entities::Feedback;

/// Append-only, in-memory collection of feedback.
///
/// The store itself is not synchronized, concurrent access
/// must be serialized by the owner (see [`crate::Connections`]).
#[derive(Debug, Default)]
pub struct FeedbackStore {
    // The index is the insertion sequence number
    records: Vec<Feedback>,
}

impl FeedbackStore {
    pub fn add(&mut self, feedback: Feedback) {
        self.records.push(feedback);
    }

    /// Returns all records, the most recent first.
    ///
    /// Records with equal timestamps are ordered by
    /// insertion, the last added record comes first.
    pub fn all(&self) -> Vec<Feedback> {
        let mut sorted: Vec<(usize, &Feedback)> = self.records.iter().enumerate().collect();
        sorted.sort_unstable_by(|(seq_a, a), (seq_b, b)| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| seq_b.cmp(seq_a))
        });
        sorted.into_iter().map(|(_, f)| f.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fbdb_entities::builders::*;

    fn new_feedback(seconds: i64, comment: &str) -> Feedback {
        Feedback::build()
            .created_at_seconds(seconds)
            .comment(comment)
            .finish()
    }

    fn comments(store: &FeedbackStore) -> Vec<String> {
        store.all().into_iter().map(|f| f.comment).collect()
    }

    #[test]
    fn empty_store() {
        let store = FeedbackStore::default();
        assert!(store.is_empty());
        assert!(store.all().is_empty());
    }

    #[test]
    fn contains_added_feedback() {
        let mut store = FeedbackStore::default();
        let feedback = new_feedback(1, "x");
        store.add(feedback.clone());
        assert_eq!(store.len(), 1);
        assert!(store.all().contains(&feedback));
    }

    #[test]
    fn keep_duplicates() {
        let mut store = FeedbackStore::default();
        let feedback = new_feedback(1, "x");
        store.add(feedback.clone());
        store.add(feedback);
        assert_eq!(store.all().len(), 2);
    }

    #[test]
    fn most_recent_first() {
        let mut store = FeedbackStore::default();
        store.add(new_feedback(20, "b"));
        store.add(new_feedback(10, "a"));
        store.add(new_feedback(30, "c"));
        assert_eq!(comments(&store), ["c", "b", "a"]);
    }

    #[test]
    fn last_added_first_on_equal_timestamps() {
        let mut store = FeedbackStore::default();
        store.add(new_feedback(10, "old"));
        store.add(new_feedback(20, "first"));
        store.add(new_feedback(20, "second"));
        store.add(new_feedback(20, "third"));
        assert_eq!(comments(&store), ["third", "second", "first", "old"]);
    }

    #[test]
    fn reading_is_repeatable() {
        let mut store = FeedbackStore::default();
        store.add(new_feedback(5, "x"));
        store.add(new_feedback(5, "y"));
        store.add(new_feedback(7, "z"));
        assert_eq!(store.all(), store.all());
    }
}
