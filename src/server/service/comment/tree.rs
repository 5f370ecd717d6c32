//! Assembly of the threaded comment forest.
//!
//! Comments are stored flat; each row carries an optional parent id. The
//! assembler partitions the list by parent in a single pass, then expands
//! the tree depth-first from the roots. Input order is preserved within
//! every sibling list, so the repository's query order is the display
//! order. A comment whose parent id does not resolve within the input set
//! is promoted to a root rather than dropped.

use std::collections::{HashMap, HashSet};

use crate::server::model::comment::{Comment, CommentNode};

/// Builds the nested comment forest from a flat, pre-ordered comment list.
///
/// `viewer_likes` holds the ids of comments the viewing user has liked;
/// it only sets the `liked_by_viewer` flag and never affects the shape of
/// the forest. Every input comment appears in the output exactly once.
pub fn assemble_forest(comments: Vec<Comment>, viewer_likes: &HashSet<i32>) -> Vec<CommentNode> {
    let known_ids: HashSet<i32> = comments.iter().map(|c| c.id).collect();

    let mut children: HashMap<i32, Vec<Comment>> = HashMap::new();
    let mut roots: Vec<Comment> = Vec::new();

    for comment in comments {
        match comment.parent_id {
            Some(parent_id) if known_ids.contains(&parent_id) => {
                children.entry(parent_id).or_default().push(comment);
            }
            // Top-level, or the parent is not in the set (deleted out from
            // under a reply): promote to root.
            _ => roots.push(comment),
        }
    }

    roots
        .into_iter()
        .map(|comment| expand(comment, &mut children, viewer_likes))
        .collect()
}

/// A node under construction together with its not-yet-expanded replies.
struct Frame {
    node: CommentNode,
    pending: std::vec::IntoIter<Comment>,
}

/// Expands one root depth-first with an explicit stack, so reply depth is
/// bounded by memory rather than the call stack.
fn expand(
    comment: Comment,
    children: &mut HashMap<i32, Vec<Comment>>,
    viewer_likes: &HashSet<i32>,
) -> CommentNode {
    let mut root = open_frame(comment, children, viewer_likes);
    let mut stack: Vec<Frame> = Vec::new();

    loop {
        let current = stack.last_mut().unwrap_or(&mut root);
        match current.pending.next() {
            Some(reply) => {
                let next = open_frame(reply, children, viewer_likes);
                stack.push(next);
            }
            None => match stack.pop() {
                Some(done) => {
                    let parent = stack.last_mut().unwrap_or(&mut root);
                    parent.node.children.push(done.node);
                }
                None => return root.node,
            },
        }
    }
}

fn open_frame(
    comment: Comment,
    children: &mut HashMap<i32, Vec<Comment>>,
    viewer_likes: &HashSet<i32>,
) -> Frame {
    let pending = children.remove(&comment.id).unwrap_or_default().into_iter();
    let author_username = comment.author.username().to_string();

    Frame {
        node: CommentNode {
            id: comment.id,
            author_id: comment.author.id,
            author_username,
            author_avatar: comment.author.discord_avatar,
            body: comment.body,
            like_count: comment.like_count,
            liked_by_viewer: viewer_likes.contains(&comment.id),
            was_edited: comment.was_edited,
            created_at: comment.created_at,
            updated_at: comment.updated_at,
            children: Vec::new(),
        },
        pending,
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use entity::user::Role;

    use super::*;
    use crate::server::model::user::User;

    fn author(id: i32) -> User {
        User {
            id,
            discord_id: format!("{}", 100_000 + id),
            discord_username: format!("user{}", id),
            discord_email: format!("user{}@example.com", id),
            discord_avatar: None,
            display_name: None,
            biography: String::new(),
            role: Role::Reader,
            banned: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn comment(id: i32, parent_id: Option<i32>) -> Comment {
        Comment {
            id,
            article_id: 1,
            parent_id,
            body: format!("comment {}", id),
            like_count: 0,
            was_edited: false,
            author: author(id),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn count_nodes(forest: &[CommentNode]) -> usize {
        forest
            .iter()
            .map(|node| 1 + count_nodes(&node.children))
            .sum()
    }

    #[test]
    fn nests_replies_under_their_parents() {
        let comments = vec![
            comment(1, None),
            comment(2, Some(1)),
            comment(3, Some(1)),
            comment(4, Some(2)),
        ];

        let forest = assemble_forest(comments, &HashSet::from([3]));

        assert_eq!(forest.len(), 1);
        let root = &forest[0];
        assert_eq!(root.id, 1);
        assert_eq!(root.children.len(), 2);
        assert_eq!(root.children[0].id, 2);
        assert_eq!(root.children[1].id, 3);
        assert_eq!(root.children[0].children.len(), 1);
        assert_eq!(root.children[0].children[0].id, 4);

        assert!(root.children[1].liked_by_viewer);
        assert!(!root.children[0].liked_by_viewer);
        assert!(!root.liked_by_viewer);
    }

    #[test]
    fn every_comment_appears_exactly_once() {
        let comments = vec![
            comment(1, None),
            comment(2, Some(1)),
            comment(3, None),
            comment(4, Some(3)),
            comment(5, Some(4)),
        ];

        let forest = assemble_forest(comments, &HashSet::new());

        assert_eq!(count_nodes(&forest), 5);
    }

    #[test]
    fn orphaned_reply_is_promoted_to_root() {
        // Parent 99 is not in the input set.
        let comments = vec![comment(1, None), comment(2, Some(99)), comment(3, Some(2))];

        let forest = assemble_forest(comments, &HashSet::new());

        assert_eq!(forest.len(), 2);
        assert_eq!(forest[0].id, 1);
        assert_eq!(forest[1].id, 2);
        assert_eq!(forest[1].children[0].id, 3);
        assert_eq!(count_nodes(&forest), 3);
    }

    #[test]
    fn sibling_order_follows_input_order() {
        let comments = vec![
            comment(10, None),
            comment(7, None),
            comment(12, Some(7)),
            comment(3, Some(7)),
        ];

        let forest = assemble_forest(comments, &HashSet::new());

        let root_ids: Vec<i32> = forest.iter().map(|n| n.id).collect();
        assert_eq!(root_ids, vec![10, 7]);

        let reply_ids: Vec<i32> = forest[1].children.iter().map(|n| n.id).collect();
        assert_eq!(reply_ids, vec![12, 3]);
    }

    #[test]
    fn likes_annotate_without_changing_shape() {
        let comments = vec![comment(1, None), comment(2, Some(1))];

        let bare = assemble_forest(comments.clone(), &HashSet::new());
        let annotated = assemble_forest(comments, &HashSet::from([1, 2]));

        assert_eq!(count_nodes(&bare), count_nodes(&annotated));
        assert_eq!(bare[0].id, annotated[0].id);
        assert!(annotated[0].liked_by_viewer);
        assert!(annotated[0].children[0].liked_by_viewer);
    }

    #[test]
    fn empty_input_yields_empty_forest() {
        assert!(assemble_forest(Vec::new(), &HashSet::new()).is_empty());
    }

    #[test]
    fn deep_reply_chain_does_not_overflow() {
        let mut comments = vec![comment(1, None)];
        for id in 2..=10_000 {
            comments.push(comment(id, Some(id - 1)));
        }

        let forest = assemble_forest(comments, &HashSet::new());

        assert_eq!(forest.len(), 1);

        let mut depth = 1;
        let mut node = &forest[0];
        while let Some(child) = node.children.first() {
            depth += 1;
            node = child;
        }
        assert_eq!(depth, 10_000);
    }
}
