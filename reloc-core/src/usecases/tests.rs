use std::cell::RefCell;

use super::prelude::*;
use super::*;
use crate::repositories::Error as RepoError;

type RepoResult<T> = std::result::Result<T, RepoError>;

#[derive(Default)]
pub struct MockDb {
    pub posts: RefCell<Vec<Post>>,
    pub comments: RefCell<Vec<Comment>>,
}

impl PostRepository for MockDb {
    fn create_post(&self, post: Post) -> RepoResult<()> {
        if self.posts.borrow().iter().any(|p| p.id == post.id) {
            return Err(RepoError::AlreadyExists);
        }
        self.posts.borrow_mut().push(post);
        Ok(())
    }

    fn load_post(&self, id: &str) -> RepoResult<Post> {
        self.posts
            .borrow()
            .iter()
            .find(|p| p.id.as_str() == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn all_posts(&self) -> RepoResult<Vec<Post>> {
        let mut posts = self.posts.borrow().clone();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(posts)
    }

    fn like_post(&self, id: &str) -> RepoResult<i64> {
        let mut posts = self.posts.borrow_mut();
        let post = posts
            .iter_mut()
            .find(|p| p.id.as_str() == id)
            .ok_or(RepoError::NotFound)?;
        post.likes += 1;
        Ok(post.likes)
    }
}

impl CommentRepository for MockDb {
    fn create_comment(&self, comment: Comment) -> RepoResult<()> {
        if self.comments.borrow().iter().any(|c| c.id == comment.id) {
            return Err(RepoError::AlreadyExists);
        }
        self.comments.borrow_mut().push(comment);
        Ok(())
    }

    fn load_comment(&self, id: &str) -> RepoResult<Comment> {
        self.comments
            .borrow()
            .iter()
            .find(|c| c.id.as_str() == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn load_comments_of_post(&self, post_id: &str) -> RepoResult<Vec<Comment>> {
        // Stable sort: insertion order breaks timestamp ties, which
        // keeps parents before their replies just like the SQL closure.
        let mut comments: Vec<_> = self
            .comments
            .borrow()
            .iter()
            .filter(|c| c.post_id.as_str() == post_id)
            .cloned()
            .collect();
        comments.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(comments)
    }
}

fn post_fixture(db: &MockDb) -> Post {
    create_post(
        db,
        NewPost {
            author: "ana".into(),
            content: "moving to nairobi next month".into(),
            ..Default::default()
        },
    )
    .unwrap()
}

#[test]
fn create_a_new_post() {
    let db = MockDb::default();
    let post = post_fixture(&db);
    assert_eq!(post.likes, 0);
    assert!(post.id.is_valid());
    assert_eq!(db.posts.borrow().len(), 1);
}

#[test]
fn reject_post_without_author() {
    let db = MockDb::default();
    let err = create_post(
        &db,
        NewPost {
            author: "  ".into(),
            content: "hello".into(),
            ..Default::default()
        },
    )
    .unwrap_err();
    assert!(matches!(err, Error::EmptyPostAuthor));
    assert!(db.posts.borrow().is_empty());
}

#[test]
fn reject_post_without_content() {
    let db = MockDb::default();
    let err = create_post(
        &db,
        NewPost {
            author: "ana".into(),
            content: String::new(),
            ..Default::default()
        },
    )
    .unwrap_err();
    assert!(matches!(err, Error::EmptyPostContent));
}

#[test]
fn list_posts_newest_first() {
    let db = MockDb::default();
    db.posts.borrow_mut().push(Post {
        id: "old".into(),
        author: "ana".into(),
        content: "older".into(),
        media_url: None,
        is_video: false,
        likes: 0,
        created_at: Timestamp::from_millis(1_000),
    });
    db.posts.borrow_mut().push(Post {
        id: "new".into(),
        author: "bob".into(),
        content: "newer".into(),
        media_url: None,
        is_video: false,
        likes: 0,
        created_at: Timestamp::from_millis(2_000),
    });
    let posts = list_posts(&db).unwrap();
    assert_eq!(posts[0].id.as_str(), "new");
    assert_eq!(posts[1].id.as_str(), "old");
}

#[test]
fn like_a_post_twice() {
    let db = MockDb::default();
    let post = post_fixture(&db);
    assert_eq!(like_post(&db, &post.id).unwrap(), 1);
    assert_eq!(like_post(&db, &post.id).unwrap(), 2);
}

#[test]
fn like_an_unknown_post() {
    let db = MockDb::default();
    let err = like_post(&db, &"nope".into()).unwrap_err();
    assert!(matches!(err, Error::Repo(RepoError::NotFound)));
}

#[test]
fn add_a_root_comment() {
    let db = MockDb::default();
    let post = post_fixture(&db);
    let comment = add_comment(
        &db,
        NewComment {
            post_id: post.id.clone(),
            author: "bob".into(),
            text: "welcome!".into(),
            parent_id: None,
        },
    )
    .unwrap();
    assert_eq!(comment.post_id, post.id);
    assert!(comment.parent_id.is_none());
    assert_eq!(db.comments.borrow().len(), 1);
}

#[test]
fn reject_comment_without_author() {
    let db = MockDb::default();
    let post = post_fixture(&db);
    let err = add_comment(
        &db,
        NewComment {
            post_id: post.id,
            author: String::new(),
            text: "hi".into(),
            parent_id: None,
        },
    )
    .unwrap_err();
    assert!(matches!(err, Error::EmptyCommentAuthor));
    // Nothing must have been inserted
    assert!(db.comments.borrow().is_empty());
}

#[test]
fn reject_comment_without_text() {
    let db = MockDb::default();
    let post = post_fixture(&db);
    let err = add_comment(
        &db,
        NewComment {
            post_id: post.id,
            author: "bob".into(),
            text: "\n".into(),
            parent_id: None,
        },
    )
    .unwrap_err();
    assert!(matches!(err, Error::EmptyCommentText));
    assert!(db.comments.borrow().is_empty());
}

#[test]
fn reject_comment_on_unknown_post() {
    let db = MockDb::default();
    let err = add_comment(
        &db,
        NewComment {
            post_id: "missing".into(),
            author: "bob".into(),
            text: "hi".into(),
            parent_id: None,
        },
    )
    .unwrap_err();
    assert!(matches!(err, Error::Repo(RepoError::NotFound)));
}

#[test]
fn reject_reply_to_unknown_parent() {
    let db = MockDb::default();
    let post = post_fixture(&db);
    let err = add_comment(
        &db,
        NewComment {
            post_id: post.id,
            author: "bob".into(),
            text: "hi".into(),
            parent_id: Some("missing".into()),
        },
    )
    .unwrap_err();
    assert!(matches!(err, Error::ParentComment));
    assert!(db.comments.borrow().is_empty());
}

#[test]
fn reject_reply_to_parent_of_another_post() {
    let db = MockDb::default();
    let first = post_fixture(&db);
    let second = create_post(
        &db,
        NewPost {
            author: "bob".into(),
            content: "second post".into(),
            ..Default::default()
        },
    )
    .unwrap();
    let parent = add_comment(
        &db,
        NewComment {
            post_id: first.id,
            author: "carol".into(),
            text: "on the first post".into(),
            parent_id: None,
        },
    )
    .unwrap();
    let err = add_comment(
        &db,
        NewComment {
            post_id: second.id.clone(),
            author: "dave".into(),
            text: "cross-post reply".into(),
            parent_id: Some(parent.id),
        },
    )
    .unwrap_err();
    assert!(matches!(err, Error::ParentComment));
    assert!(list_comments(&db, &second.id).unwrap().is_empty());
}

#[test]
fn list_comments_of_a_post_without_comments() {
    let db = MockDb::default();
    let post = post_fixture(&db);
    assert!(list_comments(&db, &post.id).unwrap().is_empty());
}

#[test]
fn round_trip_a_nested_reply() {
    let db = MockDb::default();
    let post = post_fixture(&db);
    let root = add_comment(
        &db,
        NewComment {
            post_id: post.id.clone(),
            author: "bob".into(),
            text: "root".into(),
            parent_id: None,
        },
    )
    .unwrap();
    let reply = add_comment(
        &db,
        NewComment {
            post_id: post.id.clone(),
            author: "carol".into(),
            text: "reply".into(),
            parent_id: Some(root.id.clone()),
        },
    )
    .unwrap();
    let forest = list_comments(&db, &post.id).unwrap();
    assert_eq!(forest.len(), 1);
    assert_eq!(forest[0].comment.id, root.id);
    assert_eq!(forest[0].replies.len(), 1);
    assert_eq!(forest[0].replies[0].comment.id, reply.id);
}

#[test]
fn list_comments_is_idempotent() {
    let db = MockDb::default();
    let post = post_fixture(&db);
    for text in ["one", "two", "three"] {
        add_comment(
            &db,
            NewComment {
                post_id: post.id.clone(),
                author: "bob".into(),
                text: text.into(),
                parent_id: None,
            },
        )
        .unwrap();
    }
    let first = list_comments(&db, &post.id).unwrap();
    let second = list_comments(&db, &post.id).unwrap();
    assert_eq!(first, second);
}

#[test]
fn reject_empty_post_id() {
    let db = MockDb::default();
    let err = list_comments(&db, &Id::default()).unwrap_err();
    assert!(matches!(err, Error::Id));
}
