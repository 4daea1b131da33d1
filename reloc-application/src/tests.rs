use super::{error::*, prelude::*, *};
use reloc_core::usecases::Error as ParameterError;

fn setup() -> sqlite::Connections {
    let connections = reloc_db_sqlite::Connections::init(":memory:", 1).unwrap();
    reloc_db_sqlite::run_embedded_database_migrations(connections.exclusive().unwrap());
    connections
}

fn default_new_post() -> usecases::NewPost {
    usecases::NewPost {
        author: "ana".into(),
        content: "moving across town".into(),
        ..Default::default()
    }
}

#[test]
fn create_post_and_add_comment_round_trip() {
    let connections = setup();
    let post = create_post(&connections, default_new_post()).unwrap();
    let root = add_comment(
        &connections,
        usecases::NewComment {
            post_id: post.id.clone(),
            author: "bob".into(),
            text: "good luck!".into(),
            parent_id: None,
        },
    )
    .unwrap();
    let reply = add_comment(
        &connections,
        usecases::NewComment {
            post_id: post.id.clone(),
            author: "carol".into(),
            text: "+1".into(),
            parent_id: Some(root.id.clone()),
        },
    )
    .unwrap();

    let forest = usecases::list_comments(&connections.shared().unwrap(), &post.id).unwrap();
    assert_eq!(forest.len(), 1);
    assert_eq!(forest[0].comment.id, root.id);
    assert_eq!(forest[0].replies.len(), 1);
    assert_eq!(forest[0].replies[0].comment.id, reply.id);
}

#[test]
fn validation_failure_rolls_back_the_transaction() {
    let connections = setup();
    let post = create_post(&connections, default_new_post()).unwrap();
    let err = add_comment(
        &connections,
        usecases::NewComment {
            post_id: post.id.clone(),
            author: String::new(),
            text: "hi".into(),
            parent_id: None,
        },
    )
    .unwrap_err();
    assert!(matches!(
        err,
        AppError::Business(BError::Parameter(ParameterError::EmptyCommentAuthor))
    ));
    let forest = usecases::list_comments(&connections.shared().unwrap(), &post.id).unwrap();
    assert!(forest.is_empty());
}

#[test]
fn reject_reply_to_a_parent_of_another_post() {
    let connections = setup();
    let first = create_post(&connections, default_new_post()).unwrap();
    let second = create_post(
        &connections,
        usecases::NewPost {
            author: "bob".into(),
            content: "selling a couch".into(),
            ..Default::default()
        },
    )
    .unwrap();
    let parent = add_comment(
        &connections,
        usecases::NewComment {
            post_id: first.id.clone(),
            author: "carol".into(),
            text: "on the first post".into(),
            parent_id: None,
        },
    )
    .unwrap();
    let err = add_comment(
        &connections,
        usecases::NewComment {
            post_id: second.id.clone(),
            author: "dave".into(),
            text: "cross-post reply".into(),
            parent_id: Some(parent.id),
        },
    )
    .unwrap_err();
    assert!(matches!(
        err,
        AppError::Business(BError::Parameter(ParameterError::ParentComment))
    ));
    let forest = usecases::list_comments(&connections.shared().unwrap(), &second.id).unwrap();
    assert!(forest.is_empty());
}
