use feed_core::FeedService;

/// Application state shared across request handlers
#[derive(Clone)]
pub struct AppState {
    pub service: FeedService,
}

impl AppState {
    /// Create a new AppState with the given service
    pub fn new(service: FeedService) -> Self {
        Self { service }
    }
}
