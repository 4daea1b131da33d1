use super::*;

impl<'a> PostRepository for DbReadWrite<'a> {
    fn create_post(&self, post: Post) -> Result<()> {
        create_post(&mut self.conn.borrow_mut(), post)
    }
    fn load_post(&self, id: &str) -> Result<Post> {
        load_post(&mut self.conn.borrow_mut(), id)
    }
    fn all_posts(&self) -> Result<Vec<Post>> {
        all_posts(&mut self.conn.borrow_mut())
    }
    fn like_post(&self, id: &str) -> Result<i64> {
        like_post(&mut self.conn.borrow_mut(), id)
    }
}

impl<'a> PostRepository for DbConnection<'a> {
    fn create_post(&self, post: Post) -> Result<()> {
        create_post(&mut self.conn.borrow_mut(), post)
    }
    fn load_post(&self, id: &str) -> Result<Post> {
        load_post(&mut self.conn.borrow_mut(), id)
    }
    fn all_posts(&self) -> Result<Vec<Post>> {
        all_posts(&mut self.conn.borrow_mut())
    }
    fn like_post(&self, id: &str) -> Result<i64> {
        like_post(&mut self.conn.borrow_mut(), id)
    }
}

impl<'a> PostRepository for DbReadOnly<'a> {
    fn create_post(&self, _post: Post) -> Result<()> {
        unreachable!();
    }
    fn load_post(&self, id: &str) -> Result<Post> {
        load_post(&mut self.conn.borrow_mut(), id)
    }
    fn all_posts(&self) -> Result<Vec<Post>> {
        all_posts(&mut self.conn.borrow_mut())
    }
    fn like_post(&self, _id: &str) -> Result<i64> {
        unreachable!();
    }
}

fn create_post(conn: &mut SqliteConnection, post: Post) -> Result<()> {
    let Post {
        id,
        author,
        content,
        media_url,
        is_video,
        likes,
        created_at,
    } = post;
    let new_post = models::NewPost {
        id: id.as_str(),
        author: &author,
        content: &content,
        media_url: media_url.as_deref(),
        is_video,
        likes,
        created_at: created_at.as_millis(),
    };
    let _count = diesel::insert_into(schema::posts::table)
        .values(&new_post)
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert_eq!(1, _count);
    Ok(())
}

fn load_post(conn: &mut SqliteConnection, id: &str) -> Result<Post> {
    use schema::posts::dsl;
    schema::posts::table
        .filter(dsl::id.eq(id))
        .first::<models::PostRow>(conn)
        .map_err(from_diesel_err)
        .map(Into::into)
}

fn all_posts(conn: &mut SqliteConnection) -> Result<Vec<Post>> {
    use schema::posts::dsl;
    Ok(schema::posts::table
        .order((dsl::created_at.desc(), dsl::rowid.desc()))
        .load::<models::PostRow>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn like_post(conn: &mut SqliteConnection, id: &str) -> Result<i64> {
    use schema::posts::dsl;
    let count = diesel::update(schema::posts::table.filter(dsl::id.eq(id)))
        .set(dsl::likes.eq(dsl::likes + 1))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    schema::posts::table
        .select(dsl::likes)
        .filter(dsl::id.eq(id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)
}
