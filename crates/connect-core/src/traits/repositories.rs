//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{Comment, Connection, ConnectionStatus, Like, Message, Photo, User};
use crate::error::DomainError;
use crate::value_objects::{Snowflake, Year};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

/// Filter for the discovery/search feed
#[derive(Debug, Clone, Default)]
pub struct DiscoverFilter {
    /// Case-insensitive substring match on name or username
    pub query: Option<String>,
    pub college: Option<String>,
    pub branch: Option<String>,
    pub year: Option<Year>,
    pub limit: i64,
    pub offset: i64,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Find user by username
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;

    /// Fetch several users at once (order unspecified)
    async fn find_by_ids(&self, ids: &[Snowflake]) -> RepoResult<Vec<User>>;

    /// Check if email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Check if username is already taken
    async fn username_exists(&self, username: &str) -> RepoResult<bool>;

    /// Create a new user
    async fn create(&self, user: &User) -> RepoResult<()>;

    /// Update an existing user
    async fn update(&self, user: &User) -> RepoResult<()>;

    /// Search onboarded users for the discovery feed
    async fn search(&self, filter: &DiscoverFilter) -> RepoResult<Vec<User>>;
}

// ============================================================================
// Connection Repository
// ============================================================================

#[async_trait]
pub trait ConnectionRepository: Send + Sync {
    /// Find connection by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Connection>>;

    /// All edges touching the user, either direction
    async fn find_by_user(&self, user_id: Snowflake) -> RepoResult<Vec<Connection>>;

    /// The single edge between a pair, either direction
    async fn find_between(&self, a: Snowflake, b: Snowflake) -> RepoResult<Option<Connection>>;

    /// Create a new pending edge
    async fn create(&self, connection: &Connection) -> RepoResult<()>;

    /// Move an edge to a terminal status
    async fn set_status(&self, id: Snowflake, status: ConnectionStatus) -> RepoResult<()>;
}

// ============================================================================
// Message Repository
// ============================================================================

#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Find message by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Message>>;

    /// Full thread between two users, ascending by time
    async fn find_thread(&self, a: Snowflake, b: Snowflake) -> RepoResult<Vec<Message>>;

    /// All messages where the user is sender or receiver, descending by time
    async fn find_by_user(&self, user_id: Snowflake) -> RepoResult<Vec<Message>>;

    /// Create a new message
    async fn create(&self, message: &Message) -> RepoResult<()>;

    /// Mark every message from `counterpart_id` to `user_id` as read
    async fn mark_read(&self, user_id: Snowflake, counterpart_id: Snowflake) -> RepoResult<u64>;

    /// Count of unread messages addressed to the user
    async fn unread_count(&self, user_id: Snowflake) -> RepoResult<i64>;
}

// ============================================================================
// Photo Repository
// ============================================================================

/// Keyset pagination for the feed
#[derive(Debug, Clone, Default)]
pub struct PhotoQuery {
    /// Return posts with an id strictly below this one
    pub before: Option<Snowflake>,
    pub limit: i64,
}

#[async_trait]
pub trait PhotoRepository: Send + Sync {
    /// Find photo by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Photo>>;

    /// Recent posts across all users, descending by id
    async fn find_recent(&self, query: &PhotoQuery) -> RepoResult<Vec<Photo>>;

    /// All posts by one user, descending by id
    async fn find_by_user(&self, user_id: Snowflake) -> RepoResult<Vec<Photo>>;

    /// Create a new photo
    async fn create(&self, photo: &Photo) -> RepoResult<()>;

    /// Delete a photo and its likes/comments
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Like Repository
// ============================================================================

#[async_trait]
pub trait LikeRepository: Send + Sync {
    /// Whether the user has liked the photo
    async fn exists(&self, photo_id: Snowflake, user_id: Snowflake) -> RepoResult<bool>;

    /// Like count for a photo
    async fn count_for_photo(&self, photo_id: Snowflake) -> RepoResult<i64>;

    /// Photo ids the user has liked, out of the given set
    async fn liked_of(&self, user_id: Snowflake, photo_ids: &[Snowflake])
        -> RepoResult<Vec<Snowflake>>;

    /// Record a like; no-op is a conflict, surfaced as AlreadyLiked upstream
    async fn create(&self, like: &Like) -> RepoResult<()>;

    /// Remove a like
    async fn delete(&self, photo_id: Snowflake, user_id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Find comment by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Comment>>;

    /// All comments on a photo, ascending by time
    async fn find_by_photo(&self, photo_id: Snowflake) -> RepoResult<Vec<Comment>>;

    /// Comment count for a photo
    async fn count_for_photo(&self, photo_id: Snowflake) -> RepoResult<i64>;

    /// Create a new comment
    async fn create(&self, comment: &Comment) -> RepoResult<()>;

    /// Delete a comment and its replies
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}
