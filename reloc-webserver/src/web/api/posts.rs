use super::*;

#[get("/posts")]
pub fn get_posts(db: sqlite::Connections) -> Result<Vec<json::Post>> {
    let posts = usecases::list_posts(&db.shared()?)?;
    Ok(Json(posts.into_iter().map(to_json::post).collect()))
}

#[post("/posts", format = "application/json", data = "<new_post>")]
pub fn post_post(
    db: sqlite::Connections,
    new_post: JsonResult<json::NewPost>,
) -> CreatedResult<json::Post> {
    let new_post = from_json::new_post(new_post?.into_inner());
    let post = flows::create_post(&db, new_post)?;
    let location = format!("/api/posts/{}", post.id);
    Ok(Created::new(location).body(Json(to_json::post(post))))
}

#[post("/posts/<id>/like")]
pub fn post_like(db: sqlite::Connections, id: String) -> Result<json::LikeCount> {
    let likes = usecases::like_post(&db.exclusive()?, &id.into())?;
    Ok(Json(json::LikeCount { likes }))
}
