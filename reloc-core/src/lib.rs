pub mod repositories;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use reloc_entities::{comment::*, id::*, post::*, time::*};
}
