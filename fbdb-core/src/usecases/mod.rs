mod count_feedback;
mod error;
mod feedback_page;
mod load_feedback;
mod submit_feedback;


pub use self::{
    count_feedback::*, error::Error, feedback_page::*, load_feedback::*, submit_feedback::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::*};
}
