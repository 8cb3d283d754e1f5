#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # fbdb-entities
//!
//! Reusable, agnostic domain entities for feedbackdb.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod feedback;
pub mod rating;
pub mod time;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
