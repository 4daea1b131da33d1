use crate::repositories;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The identifier is invalid")]
    Id,
    #[error("The comment author is missing")]
    EmptyCommentAuthor,
    #[error("The comment text is missing")]
    EmptyCommentText,
    #[error("The post author is missing")]
    EmptyPostAuthor,
    #[error("The post content is missing")]
    EmptyPostContent,
    #[error("The parent comment does not belong to the post")]
    ParentComment,
    #[error("Comment {comment} references the parent {parent} which is missing from the closure")]
    CommentTreeIntegrity { comment: String, parent: String },
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}
