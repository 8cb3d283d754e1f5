use fbdb_core::{entities::Feedback, repositories as repo};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::{cell::RefCell, sync::Arc};

mod store;

pub use store::FeedbackStore;

type SharedStore = Arc<RwLock<FeedbackStore>>;

type Result<T> = std::result::Result<T, repo::Error>;

pub struct DbReadOnly<'a> {
    store: RwLockReadGuard<'a, FeedbackStore>,
}

pub struct DbReadWrite<'a> {
    store: RefCell<RwLockWriteGuard<'a, FeedbackStore>>,
}

#[derive(Clone, Default)]
pub struct Connections {
    // Only a single writer will be granted access at a
    // time while multiple readers may access the store
    // concurrently.
    store: SharedStore,
}

impl Connections {
    pub fn init() -> Self {
        log::info!("Initializing in-memory feedback store");
        Self::default()
    }

    pub fn shared(&self) -> DbReadOnly<'_> {
        DbReadOnly {
            store: self.store.read(),
        }
    }

    pub fn exclusive(&self) -> DbReadWrite<'_> {
        DbReadWrite {
            store: RefCell::new(self.store.write()),
        }
    }
}

impl repo::FeedbackReader for DbReadOnly<'_> {
    fn all_feedback(&self) -> Result<Vec<Feedback>> {
        Ok(self.store.all())
    }

    fn count_feedback(&self) -> Result<usize> {
        Ok(self.store.len())
    }
}

impl repo::FeedbackReader for DbReadWrite<'_> {
    fn all_feedback(&self) -> Result<Vec<Feedback>> {
        Ok(self.store.borrow().all())
    }

    fn count_feedback(&self) -> Result<usize> {
        Ok(self.store.borrow().len())
    }
}

impl repo::FeedbackRepo for DbReadWrite<'_> {
    fn create_feedback(&self, feedback: Feedback) -> Result<()> {
        self.store.borrow_mut().add(feedback);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fbdb_core::{
        entities::{DateFormat, FeedbackSubmission, Timestamp},
        repositories::*,
        usecases,
    };
    use std::thread;

    fn submission(rating: i64) -> FeedbackSubmission {
        FeedbackSubmission {
            rating,
            comment: format!("rated {rating}"),
        }
    }

    #[test]
    fn write_then_read() {
        let connections = Connections::init();
        {
            let db = connections.exclusive();
            usecases::submit_feedback(&db, submission(3), Timestamp::now()).unwrap();
            assert_eq!(db.count_feedback().unwrap(), 1);
        }
        let db = connections.shared();
        assert_eq!(db.all_feedback().unwrap().len(), 1);
    }

    #[test]
    fn rejected_feedback_is_not_stored() {
        let connections = Connections::init();
        {
            let db = connections.exclusive();
            assert!(usecases::submit_feedback(&db, submission(6), Timestamp::now()).is_err());
            assert!(usecases::submit_feedback(&db, submission(0), Timestamp::now()).is_err());
        }
        assert_eq!(connections.shared().count_feedback().unwrap(), 0);
    }

    #[test]
    fn cloned_connections_share_the_store() {
        let connections = Connections::init();
        let cloned = connections.clone();
        {
            let db = cloned.exclusive();
            usecases::submit_feedback(&db, submission(5), Timestamp::now()).unwrap();
        }
        let page =
            usecases::feedback_page(&connections.shared(), false, &DateFormat::default()).unwrap();
        assert_eq!(page.number_of_records, 1);
    }

    #[test]
    fn serialize_concurrent_writers() {
        let connections = Connections::init();
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let connections = connections.clone();
                thread::spawn(move || {
                    for _ in 0..25 {
                        let db = connections.exclusive();
                        usecases::submit_feedback(&db, submission(i % 5 + 1), Timestamp::now())
                            .unwrap();
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(connections.shared().count_feedback().unwrap(), 200);
    }
}
