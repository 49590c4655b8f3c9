//! Comment entity - two-level threaded comments on a photo

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Comment on a photo
///
/// Threads are exactly two levels deep: a root has `parent_id = None`, a
/// reply references a root. Replying to a reply is redirected to the root
/// before the comment is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: Snowflake,
    pub photo_id: Snowflake,
    pub user_id: Snowflake,
    pub content: String,
    pub parent_id: Option<Snowflake>,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Create a new Comment
    pub fn new(
        id: Snowflake,
        photo_id: Snowflake,
        user_id: Snowflake,
        content: String,
        parent_id: Option<Snowflake>,
    ) -> Self {
        Self {
            id,
            photo_id,
            user_id,
            content,
            parent_id,
            created_at: Utc::now(),
        }
    }

    #[inline]
    pub fn is_reply(&self) -> bool {
        self.parent_id.is_some()
    }

    /// The id a reply to this comment must target, keeping threads two deep
    pub fn thread_root(&self) -> Snowflake {
        self.parent_id.unwrap_or(self.id)
    }
}

/// A root comment with its flat list of replies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentThread {
    pub root: Comment,
    pub replies: Vec<Comment>,
}

impl CommentThread {
    /// Partition a flat comment list into root threads.
    ///
    /// Roots keep their input order; replies are grouped under their parent
    /// in input order. A reply whose parent is missing from the list is
    /// promoted to a root so it stays visible.
    pub fn build(comments: Vec<Comment>) -> Vec<CommentThread> {
        let mut threads: Vec<CommentThread> = Vec::new();
        let mut orphans: Vec<Comment> = Vec::new();

        for comment in comments {
            match comment.parent_id {
                None => threads.push(CommentThread {
                    root: comment,
                    replies: Vec::new(),
                }),
                Some(parent_id) => {
                    match threads.iter_mut().find(|t| t.root.id == parent_id) {
                        Some(thread) => thread.replies.push(comment),
                        None => orphans.push(comment),
                    }
                }
            }
        }

        // Second pass for replies that arrived before their root in the list
        for orphan in orphans {
            let parent_id = orphan.parent_id.unwrap_or(orphan.id);
            match threads.iter_mut().find(|t| t.root.id == parent_id) {
                Some(thread) => thread.replies.push(orphan),
                None => threads.push(CommentThread {
                    root: orphan,
                    replies: Vec::new(),
                }),
            }
        }

        threads
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comment(id: i64, parent: Option<i64>) -> Comment {
        Comment::new(
            Snowflake::new(id),
            Snowflake::new(1),
            Snowflake::new(10),
            format!("comment {id}"),
            parent.map(Snowflake::new),
        )
    }

    #[test]
    fn test_roots_and_replies_partitioned() {
        let threads = CommentThread::build(vec![
            comment(1, None),
            comment(2, Some(1)),
            comment(3, None),
            comment(4, Some(1)),
            comment(5, Some(3)),
        ]);

        assert_eq!(threads.len(), 2);
        assert_eq!(threads[0].root.id, Snowflake::new(1));
        assert_eq!(threads[0].replies.len(), 2);
        assert_eq!(threads[1].root.id, Snowflake::new(3));
        assert_eq!(threads[1].replies.len(), 1);
    }

    #[test]
    fn test_every_reply_under_exactly_one_root() {
        let input = vec![
            comment(1, None),
            comment(2, Some(1)),
            comment(3, None),
            comment(4, Some(3)),
        ];
        let reply_count = input.iter().filter(|c| c.is_reply()).count();

        let threads = CommentThread::build(input);
        let placed: usize = threads.iter().map(|t| t.replies.len()).sum();
        assert_eq!(placed, reply_count);
        for thread in &threads {
            assert!(!thread.root.is_reply(), "no comment is both root and reply");
            for reply in &thread.replies {
                assert_eq!(reply.parent_id, Some(thread.root.id));
            }
        }
    }

    #[test]
    fn test_reply_before_root_in_input() {
        let threads = CommentThread::build(vec![comment(2, Some(1)), comment(1, None)]);
        assert_eq!(threads.len(), 1);
        assert_eq!(threads[0].root.id, Snowflake::new(1));
        assert_eq!(threads[0].replies.len(), 1);
    }

    #[test]
    fn test_orphan_reply_promoted_to_root() {
        let threads = CommentThread::build(vec![comment(5, Some(99))]);
        assert_eq!(threads.len(), 1);
        assert_eq!(threads[0].root.id, Snowflake::new(5));
        assert!(threads[0].replies.is_empty());
    }

    #[test]
    fn test_thread_root_redirects_reply_to_reply() {
        let root = comment(1, None);
        let reply = comment(2, Some(1));

        // Replying to the root targets the root itself
        assert_eq!(root.thread_root(), Snowflake::new(1));
        // Replying to a reply is redirected to that reply's root
        assert_eq!(reply.thread_root(), Snowflake::new(1));
    }
}
