use super::prelude::*;

#[derive(Debug, Clone, Default)]
pub struct NewPost {
    pub author: String,
    pub content: String,
    pub media_url: Option<String>,
    pub is_video: bool,
}

pub fn create_post<R>(repo: &R, new_post: NewPost) -> Result<Post>
where
    R: PostRepository,
{
    let NewPost {
        author,
        content,
        media_url,
        is_video,
    } = new_post;

    if !validate::is_non_empty_text(&author) {
        return Err(Error::EmptyPostAuthor);
    }
    if !validate::is_non_empty_text(&content) {
        return Err(Error::EmptyPostContent);
    }

    let post = Post {
        id: Id::new(),
        author,
        content,
        media_url,
        is_video,
        likes: 0,
        created_at: Timestamp::now(),
    };
    log::debug!("Creating post {}", post.id);
    repo.create_post(post.clone())?;
    Ok(post)
}
