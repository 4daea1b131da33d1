use super::prelude::*;

// Newest first
pub fn list_posts<R>(repo: &R) -> Result<Vec<Post>>
where
    R: PostRepository,
{
    Ok(repo.all_posts()?)
}
