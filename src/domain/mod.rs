pub mod article;
pub mod topic;

pub use article::{Article, FeedItem};
pub use topic::Topic;
