use super::prelude::*;
use crate::repositories::Error as RepoError;

#[derive(Debug, Clone)]
pub struct NewComment {
    pub post_id: Id,
    pub author: String,
    pub text: String,
    pub parent_id: Option<Id>,
}

/// Append a comment (or reply) to the forest of a post.
///
/// A reply must reference a parent comment of the same post. The created
/// comment is returned to the caller.
pub fn add_comment<R>(repo: &R, new_comment: NewComment) -> Result<Comment>
where
    R: CommentRepository + PostRepository,
{
    let NewComment {
        post_id,
        author,
        text,
        parent_id,
    } = new_comment;

    if !post_id.is_valid() {
        return Err(Error::Id);
    }
    if !validate::is_non_empty_text(&author) {
        return Err(Error::EmptyCommentAuthor);
    }
    if !validate::is_non_empty_text(&text) {
        return Err(Error::EmptyCommentText);
    }

    let _post = repo.load_post(post_id.as_str())?;

    if let Some(ref parent_id) = parent_id {
        let parent = repo
            .load_comment(parent_id.as_str())
            .map_err(|err| match err {
                RepoError::NotFound => Error::ParentComment,
                err => Error::Repo(err),
            })?;
        if parent.post_id != post_id {
            return Err(Error::ParentComment);
        }
    }

    let comment = Comment {
        id: Id::new(),
        post_id,
        author,
        text,
        parent_id,
        created_at: Timestamp::now(),
    };
    log::debug!("Adding comment {} to post {}", comment.id, comment.post_id);
    repo.create_comment(comment.clone())?;
    Ok(comment)
}
