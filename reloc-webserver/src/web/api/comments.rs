use super::*;

#[get("/posts/<post_id>/comments")]
pub fn get_comments(db: sqlite::Connections, post_id: String) -> Result<Vec<json::Comment>> {
    let forest = usecases::list_comments(&db.shared()?, &post_id.into())?;
    Ok(Json(
        forest.into_iter().map(to_json::comment_node).collect(),
    ))
}

#[post(
    "/posts/<post_id>/comments",
    format = "application/json",
    data = "<new_comment>"
)]
pub fn post_comment(
    db: sqlite::Connections,
    post_id: String,
    new_comment: JsonResult<json::NewComment>,
) -> CreatedResult<json::Comment> {
    let new_comment = from_json::new_comment(post_id.into(), new_comment?.into_inner());
    let comment = flows::add_comment(&db, new_comment)?;
    let location = format!("/api/posts/{}/comments", comment.post_id);
    Ok(Created::new(location).body(Json(to_json::created_comment(comment))))
}
