// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use crate::entities::*;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait PostRepository {
    fn create_post(&self, _: Post) -> Result<()>;

    fn load_post(&self, id: &str) -> Result<Post>;

    // Newest first
    fn all_posts(&self) -> Result<Vec<Post>>;

    // Returns the updated number of likes
    fn like_post(&self, id: &str) -> Result<i64>;
}

pub trait CommentRepository {
    fn create_comment(&self, _: Comment) -> Result<()>;

    fn load_comment(&self, id: &str) -> Result<Comment>;

    // The transitive closure over the comment forest of a post:
    // every comment attached directly or indirectly to the post,
    // sorted by creation time ascending. Parents always precede
    // their replies.
    fn load_comments_of_post(&self, post_id: &str) -> Result<Vec<Comment>>;
}
