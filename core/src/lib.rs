pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use application::{FeedService, create_store};
pub use domain::common::services::Service;
pub use infrastructure::store::repositories::memory::MemoryDocumentStore;
pub use infrastructure::store::repositories::mongo::MongoDocumentStore;
