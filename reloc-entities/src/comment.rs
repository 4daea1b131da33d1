use crate::{id::*, time::*};

/// A single comment on a community post.
///
/// Comments form a forest per post: a comment without a parent is a root,
/// all others are replies. The nested reply structure is only materialized
/// in the tree-shaped view and never persisted.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id         : Id,
    pub post_id    : Id,
    pub author     : String,
    pub text       : String,
    pub parent_id  : Option<Id>,
    pub created_at : Timestamp,
}
