use super::prelude::*;

/// Increment the like counter of a post and return the new value.
pub fn like_post<R>(repo: &R, post_id: &Id) -> Result<i64>
where
    R: PostRepository,
{
    if !post_id.is_valid() {
        return Err(Error::Id);
    }
    Ok(repo.like_post(post_id.as_str())?)
}
