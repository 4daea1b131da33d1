use super::*;

/// Validate and persist a new community post in a single transaction.
pub fn create_post(
    connections: &sqlite::Connections,
    new_post: usecases::NewPost,
) -> Result<Post> {
    let mut connection = connections.exclusive()?;
    let post = connection.transaction(|conn| usecases::create_post(conn, new_post))?;
    info!("Created post {}", post.id);
    Ok(post)
}
