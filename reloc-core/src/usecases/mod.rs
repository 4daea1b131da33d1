mod add_comment;
mod comment_tree;
mod create_post;
mod error;
mod like_post;
mod list_comments;
mod list_posts;

#[cfg(test)]
pub mod tests;

pub use self::{
    add_comment::*, comment_tree::*, create_post::*, error::Error, like_post::*, list_comments::*,
    list_posts::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::*, util::validate};
}
