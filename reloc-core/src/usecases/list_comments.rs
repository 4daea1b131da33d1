use super::{comment_tree::build_comment_tree, prelude::*, CommentNode};

/// Load all comments of a post as a nested forest of root comments.
///
/// A post without comments yields an empty forest, not an error.
pub fn list_comments<R>(repo: &R, post_id: &Id) -> Result<Vec<CommentNode>>
where
    R: CommentRepository,
{
    if !post_id.is_valid() {
        return Err(Error::Id);
    }
    let comments = repo.load_comments_of_post(post_id.as_str())?;
    build_comment_tree(comments)
}
