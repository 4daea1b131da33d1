#[macro_use]
extern crate log;

mod add_comment;
mod create_post;

pub mod prelude {
    pub use super::{add_comment::*, create_post::*};
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use reloc_core::{entities::*, usecases};

#[cfg(test)]
mod tests;

pub(crate) mod sqlite {
    pub use reloc_db_sqlite::Connections;
}
