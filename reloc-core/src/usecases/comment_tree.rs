use std::collections::HashMap;

use super::prelude::*;

/// A comment enriched with its transitively nested replies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentNode {
    pub comment: Comment,
    pub replies: Vec<CommentNode>,
}

impl CommentNode {
    /// Number of comments in this subtree, including the comment itself.
    pub fn total_count(&self) -> usize {
        1 + self
            .replies
            .iter()
            .map(CommentNode::total_count)
            .sum::<usize>()
    }
}

struct Slot {
    comment: Comment,
    reply_ids: Vec<Id>,
}

/// Group a flat, chronologically ordered comment closure into the forest
/// of root comments with nested replies.
///
/// The input must list every parent before its replies, which the
/// repository guarantees for closures generated from a post's root
/// comments. A reply whose parent is missing from the closure is a
/// data-integrity violation and reported as an error instead of being
/// dropped or promoted to root. Replies keep the relative order of the
/// input below their parent.
pub fn build_comment_tree(comments: Vec<Comment>) -> Result<Vec<CommentNode>> {
    // Link phase: each comment is registered exactly once and
    // referenced by id from its parent's slot.
    let mut slots: HashMap<Id, Slot> = HashMap::with_capacity(comments.len());
    let mut root_ids = Vec::new();
    for comment in comments {
        match comment.parent_id {
            Some(ref parent_id) => {
                let parent =
                    slots
                        .get_mut(parent_id)
                        .ok_or_else(|| Error::CommentTreeIntegrity {
                            comment: comment.id.to_string(),
                            parent: parent_id.to_string(),
                        })?;
                parent.reply_ids.push(comment.id.clone());
            }
            None => root_ids.push(comment.id.clone()),
        }
        slots.insert(
            comment.id.clone(),
            Slot {
                comment,
                reply_ids: Vec::new(),
            },
        );
    }

    // Materialization phase: every slot is consumed exactly once.
    Ok(root_ids
        .into_iter()
        .filter_map(|id| materialize(&id, &mut slots))
        .collect())
}

fn materialize(id: &Id, slots: &mut HashMap<Id, Slot>) -> Option<CommentNode> {
    let Slot { comment, reply_ids } = slots.remove(id)?;
    let replies = reply_ids
        .iter()
        .filter_map(|reply_id| materialize(reply_id, slots))
        .collect();
    Some(CommentNode { comment, replies })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comment(id: u32, parent: Option<u32>, millis: i64) -> Comment {
        Comment {
            id: id.to_string().into(),
            post_id: "5".into(),
            author: format!("author-{id}"),
            text: format!("text-{id}"),
            parent_id: parent.map(|p| p.to_string().into()),
            created_at: Timestamp::from_millis(millis),
        }
    }

    #[test]
    fn empty_closure_yields_empty_forest() {
        assert_eq!(build_comment_tree(vec![]).unwrap(), vec![]);
    }

    #[test]
    fn group_replies_below_their_parents() {
        let rows = vec![
            comment(1, None, 1),
            comment(2, Some(1), 2),
            comment(3, None, 3),
        ];
        let forest = build_comment_tree(rows).unwrap();
        assert_eq!(forest.len(), 2);
        assert_eq!(forest[0].comment.id.as_str(), "1");
        assert_eq!(forest[0].replies.len(), 1);
        assert_eq!(forest[0].replies[0].comment.id.as_str(), "2");
        assert!(forest[0].replies[0].replies.is_empty());
        assert_eq!(forest[1].comment.id.as_str(), "3");
        assert!(forest[1].replies.is_empty());
    }

    #[test]
    fn forest_preserves_the_total_comment_count() {
        let rows = vec![
            comment(1, None, 1),
            comment(2, Some(1), 2),
            comment(3, Some(2), 3),
            comment(4, Some(1), 4),
            comment(5, None, 5),
            comment(6, Some(5), 6),
        ];
        let total_rows = rows.len();
        let forest = build_comment_tree(rows).unwrap();
        let total: usize = forest.iter().map(CommentNode::total_count).sum();
        assert_eq!(total, total_rows);
    }

    #[test]
    fn replies_keep_their_chronological_order() {
        let rows = vec![
            comment(1, None, 1),
            comment(2, Some(1), 2),
            comment(3, Some(1), 3),
            comment(4, Some(1), 4),
        ];
        let forest = build_comment_tree(rows).unwrap();
        let reply_ids: Vec<_> = forest[0]
            .replies
            .iter()
            .map(|node| node.comment.id.as_str())
            .collect();
        assert_eq!(reply_ids, ["2", "3", "4"]);
    }

    #[test]
    fn orphaned_reply_is_a_data_integrity_error() {
        let rows = vec![comment(1, None, 1), comment(9, Some(99), 5)];
        let err = build_comment_tree(rows).unwrap_err();
        assert!(matches!(
            err,
            Error::CommentTreeIntegrity { ref comment, ref parent }
                if comment == "9" && parent == "99"
        ));
    }
}
