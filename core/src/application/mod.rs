use mongodb::{Client, options::ClientOptions};

use crate::domain::common::{CoreError, services::Service};
use crate::infrastructure::store::repositories::mongo::MongoDocumentStore;

/// The service aggregate the API layer runs against in production.
pub type FeedService = Service<MongoDocumentStore>;

/// Connect to MongoDB and build the document store backing [`FeedService`].
pub async fn create_store(uri: &str, database: &str) -> Result<MongoDocumentStore, CoreError> {
    let mut options = ClientOptions::parse(uri)
        .await
        .map_err(|e| CoreError::StoreUnavailable { msg: e.to_string() })?;
    options.app_name = Some("feed-api".to_string());

    let client = Client::with_options(options)
        .map_err(|e| CoreError::StoreUnavailable { msg: e.to_string() })?;

    Ok(MongoDocumentStore::new(&client.database(database)))
}
