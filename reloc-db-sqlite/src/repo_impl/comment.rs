use diesel::sql_types::Text;

use super::*;

impl<'a> CommentRepository for DbReadWrite<'a> {
    fn create_comment(&self, comment: Comment) -> Result<()> {
        create_comment(&mut self.conn.borrow_mut(), comment)
    }
    fn load_comment(&self, id: &str) -> Result<Comment> {
        load_comment(&mut self.conn.borrow_mut(), id)
    }
    fn load_comments_of_post(&self, post_id: &str) -> Result<Vec<Comment>> {
        load_comments_of_post(&mut self.conn.borrow_mut(), post_id)
    }
}

impl<'a> CommentRepository for DbConnection<'a> {
    fn create_comment(&self, comment: Comment) -> Result<()> {
        create_comment(&mut self.conn.borrow_mut(), comment)
    }
    fn load_comment(&self, id: &str) -> Result<Comment> {
        load_comment(&mut self.conn.borrow_mut(), id)
    }
    fn load_comments_of_post(&self, post_id: &str) -> Result<Vec<Comment>> {
        load_comments_of_post(&mut self.conn.borrow_mut(), post_id)
    }
}

impl<'a> CommentRepository for DbReadOnly<'a> {
    fn create_comment(&self, _comment: Comment) -> Result<()> {
        unreachable!();
    }
    fn load_comment(&self, id: &str) -> Result<Comment> {
        load_comment(&mut self.conn.borrow_mut(), id)
    }
    fn load_comments_of_post(&self, post_id: &str) -> Result<Vec<Comment>> {
        load_comments_of_post(&mut self.conn.borrow_mut(), post_id)
    }
}

fn create_comment(conn: &mut SqliteConnection, comment: Comment) -> Result<()> {
    let Comment {
        id,
        post_id,
        author,
        text,
        parent_id,
        created_at,
    } = comment;
    let new_comment = models::NewComment {
        id: id.as_str(),
        post_id: post_id.as_str(),
        author: &author,
        text: &text,
        parent_comment_id: parent_id.as_ref().map(Id::as_str),
        created_at: created_at.as_millis(),
    };
    let _count = diesel::insert_into(schema::comments::table)
        .values(&new_comment)
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert_eq!(1, _count);
    Ok(())
}

fn load_comment(conn: &mut SqliteConnection, id: &str) -> Result<Comment> {
    use schema::comments::dsl;
    schema::comments::table
        .filter(dsl::id.eq(id))
        .first::<models::CommentRow>(conn)
        .map_err(from_diesel_err)
        .map(Into::into)
}

// The closure is seeded with the post's root comments and transitively
// follows parent -> child edges until no more rows match. The rowid
// tie-breaker keeps parents before replies that were created within
// the same millisecond.
const COMMENT_CLOSURE_QUERY: &str = r#"
WITH RECURSIVE comment_closure AS (
    SELECT rowid, id, post_id, author, text, parent_comment_id, created_at
    FROM comments
    WHERE post_id = ? AND parent_comment_id IS NULL
    UNION ALL
    SELECT c.rowid, c.id, c.post_id, c.author, c.text, c.parent_comment_id, c.created_at
    FROM comments c
    INNER JOIN comment_closure cc ON c.parent_comment_id = cc.id
)
SELECT id, post_id, author, text, parent_comment_id, created_at
FROM comment_closure
ORDER BY created_at ASC, rowid ASC
"#;

fn load_comments_of_post(conn: &mut SqliteConnection, post_id: &str) -> Result<Vec<Comment>> {
    Ok(diesel::sql_query(COMMENT_CLOSURE_QUERY)
        .bind::<Text, _>(post_id)
        .load::<models::CommentClosureRow>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}
