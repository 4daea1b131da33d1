use super::*;

/// Validate and persist a new comment in a single transaction.
pub fn add_comment(
    connections: &sqlite::Connections,
    new_comment: usecases::NewComment,
) -> Result<Comment> {
    let mut connection = connections.exclusive()?;
    let comment = connection.transaction(|conn| usecases::add_comment(conn, new_comment))?;
    info!("Added comment {} to post {}", comment.id, comment.post_id);
    Ok(comment)
}
