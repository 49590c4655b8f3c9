mod repositories;

pub use repositories::{
    CommentRepository, ConnectionRepository, DiscoverFilter, LikeRepository, MessageRepository,
    PhotoQuery, PhotoRepository, RepoResult, UserRepository,
};
