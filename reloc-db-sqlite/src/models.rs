// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use diesel::sql_types::{BigInt, Nullable, Text};

use reloc_core::entities;

use super::schema::*;

#[derive(Insertable)]
#[diesel(table_name = posts)]
pub struct NewPost<'a> {
    pub id: &'a str,
    pub author: &'a str,
    pub content: &'a str,
    pub media_url: Option<&'a str>,
    pub is_video: bool,
    pub likes: i64,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct PostRow {
    pub rowid: i64,
    pub id: String,
    pub author: String,
    pub content: String,
    pub media_url: Option<String>,
    pub is_video: bool,
    pub likes: i64,
    pub created_at: i64,
}

impl From<PostRow> for entities::Post {
    fn from(from: PostRow) -> Self {
        let PostRow {
            rowid: _,
            id,
            author,
            content,
            media_url,
            is_video,
            likes,
            created_at,
        } = from;
        Self {
            id: id.into(),
            author,
            content,
            media_url,
            is_video,
            likes,
            created_at: entities::Timestamp::from_millis(created_at),
        }
    }
}

#[derive(Insertable)]
#[diesel(table_name = comments)]
pub struct NewComment<'a> {
    pub id: &'a str,
    pub post_id: &'a str,
    pub author: &'a str,
    pub text: &'a str,
    pub parent_comment_id: Option<&'a str>,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct CommentRow {
    pub rowid: i64,
    pub id: String,
    pub post_id: String,
    pub author: String,
    pub text: String,
    pub parent_comment_id: Option<String>,
    pub created_at: i64,
}

impl From<CommentRow> for entities::Comment {
    fn from(from: CommentRow) -> Self {
        let CommentRow {
            rowid: _,
            id,
            post_id,
            author,
            text,
            parent_comment_id,
            created_at,
        } = from;
        Self {
            id: id.into(),
            post_id: post_id.into(),
            author,
            text,
            parent_id: parent_comment_id.map(Into::into),
            created_at: entities::Timestamp::from_millis(created_at),
        }
    }
}

// Rows produced by the recursive closure query over a post's comment forest.
#[derive(QueryableByName)]
pub struct CommentClosureRow {
    #[diesel(sql_type = Text)]
    pub id: String,
    #[diesel(sql_type = Text)]
    pub post_id: String,
    #[diesel(sql_type = Text)]
    pub author: String,
    #[diesel(sql_type = Text)]
    pub text: String,
    #[diesel(sql_type = Nullable<Text>)]
    pub parent_comment_id: Option<String>,
    #[diesel(sql_type = BigInt)]
    pub created_at: i64,
}

impl From<CommentClosureRow> for entities::Comment {
    fn from(from: CommentClosureRow) -> Self {
        let CommentClosureRow {
            id,
            post_id,
            author,
            text,
            parent_comment_id,
            created_at,
        } = from;
        Self {
            id: id.into(),
            post_id: post_id.into(),
            author,
            text,
            parent_id: parent_comment_id.map(Into::into),
            created_at: entities::Timestamp::from_millis(created_at),
        }
    }
}
