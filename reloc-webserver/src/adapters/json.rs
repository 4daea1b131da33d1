pub use reloc_boundary::*;

use reloc_core::{entities as e, usecases};

pub mod to_json {
    //! Entity -> JSON

    use super::*;

    // NOTE:
    // We cannot impl From<T> here, because the JSON structs
    // and the entities both are outside this crate.

    pub fn post(from: e::Post) -> Post {
        let e::Post {
            id,
            author,
            content,
            media_url,
            is_video,
            likes,
            created_at,
        } = from;
        Post {
            id: id.into(),
            author,
            content,
            media_url,
            is_video,
            likes,
            created: created_at.as_millis(),
        }
    }

    pub fn comment_node(from: usecases::CommentNode) -> Comment {
        let usecases::CommentNode { comment, replies } = from;
        let replies = replies.into_iter().map(comment_node).collect();
        comment_with_replies(comment, replies)
    }

    pub fn created_comment(from: e::Comment) -> Comment {
        comment_with_replies(from, vec![])
    }

    fn comment_with_replies(from: e::Comment, replies: Vec<Comment>) -> Comment {
        let e::Comment {
            id,
            post_id,
            author,
            text,
            parent_id,
            created_at,
        } = from;
        Comment {
            id: id.into(),
            post_id: post_id.into(),
            author,
            text,
            parent_comment_id: parent_id.map(Into::into),
            created: created_at.as_millis(),
            replies,
        }
    }
}

pub mod from_json {
    //! JSON -> Entity

    use super::*;

    pub fn new_post(from: NewPost) -> usecases::NewPost {
        let NewPost {
            author,
            content,
            media_url,
            is_video,
        } = from;
        usecases::NewPost {
            author,
            content,
            media_url,
            is_video,
        }
    }

    pub fn new_comment(post_id: e::Id, from: NewComment) -> usecases::NewComment {
        let NewComment {
            author,
            text,
            parent_comment_id,
        } = from;
        usecases::NewComment {
            post_id,
            author,
            text,
            parent_id: parent_comment_id.map(Into::into),
        }
    }
}
