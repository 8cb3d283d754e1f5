//! # fbdb-core
//!
//! Business rules of feedbackdb: validation of submissions,
//! the repository abstraction and the aggregated feedback view.

pub mod entities {
    pub use fbdb_entities::{feedback::*, rating::*, time::*};
}
pub mod repositories;
pub mod usecases;
pub mod util;
pub mod view;
