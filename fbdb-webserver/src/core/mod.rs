pub use fbdb_core::{repositories, usecases, view};

pub mod entities {
    pub use fbdb_core::entities::*;
    #[cfg(test)]
    pub use fbdb_entities::builders::*;
}

pub mod prelude {
    pub use super::{entities::*, repositories::*, view::*};
}
