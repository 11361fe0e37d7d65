use bson::{Bson, Document, doc, oid::ObjectId};
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::{Collection, Database, options::FindOptions};

use crate::domain::{
    common::CoreError,
    store::{
        DocumentId, FieldMap, FieldValue, StoredDocument,
        ports::{DocumentStore, OrderDirection},
    },
};

/// MongoDB-backed [`DocumentStore`]. One BSON collection per entity type,
/// documents keyed by `_id: ObjectId`, exposed to callers as the hex form.
#[derive(Clone)]
pub struct MongoDocumentStore {
    db: Database,
}

impl MongoDocumentStore {
    pub fn new(db: &Database) -> Self {
        Self { db: db.clone() }
    }

    fn collection(&self, name: &str) -> Collection<Document> {
        self.db.collection::<Document>(name)
    }
}

fn store_error(err: mongodb::error::Error) -> CoreError {
    CoreError::StoreUnavailable {
        msg: err.to_string(),
    }
}

fn to_bson(value: &FieldValue) -> Bson {
    match value {
        FieldValue::Str(v) => Bson::String(v.clone()),
        FieldValue::Int(v) => Bson::Int64(*v),
        FieldValue::Float(v) => Bson::Double(*v),
        FieldValue::Bool(v) => Bson::Boolean(*v),
        // timestamps are written in their epoch-millisecond integer form
        FieldValue::Timestamp(at) => Bson::Int64(at.timestamp_millis()),
        FieldValue::StrList(values) => {
            Bson::Array(values.iter().cloned().map(Bson::String).collect())
        }
    }
}

fn from_bson(value: &Bson) -> Option<FieldValue> {
    match value {
        Bson::String(v) => Some(FieldValue::Str(v.clone())),
        Bson::Int32(v) => Some(FieldValue::Int(i64::from(*v))),
        Bson::Int64(v) => Some(FieldValue::Int(*v)),
        Bson::Double(v) => Some(FieldValue::Float(*v)),
        Bson::Boolean(v) => Some(FieldValue::Bool(*v)),
        Bson::DateTime(at) => Some(FieldValue::Timestamp(
            DateTime::<Utc>::from_timestamp_millis(at.timestamp_millis())
                .unwrap_or(DateTime::UNIX_EPOCH),
        )),
        Bson::Array(values) => Some(FieldValue::StrList(
            values
                .iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect(),
        )),
        _ => None,
    }
}

fn to_document(fields: &FieldMap) -> Document {
    let mut document = Document::new();
    for (name, value) in fields {
        document.insert(name.clone(), to_bson(value));
    }
    document
}

fn to_stored(mut document: Document) -> StoredDocument {
    let id = match document.remove("_id") {
        Some(Bson::ObjectId(oid)) => oid.to_hex(),
        Some(other) => other.as_str().unwrap_or_default().to_string(),
        None => String::new(),
    };

    let mut fields = FieldMap::new();
    for (name, value) in document {
        if let Some(field) = from_bson(&value) {
            fields.insert(name, field);
        }
    }

    StoredDocument::new(id, fields)
}

impl DocumentStore for MongoDocumentStore {
    async fn get(
        &self,
        collection: &str,
        id: &DocumentId,
    ) -> Result<Option<StoredDocument>, CoreError> {
        // an id that does not parse as an ObjectId cannot name a stored document
        let Ok(oid) = ObjectId::parse_str(&id.0) else {
            return Ok(None);
        };

        let document = self
            .collection(collection)
            .find_one(doc! { "_id": oid })
            .await
            .map_err(store_error)?;

        Ok(document.map(to_stored))
    }

    async fn insert(&self, collection: &str, fields: FieldMap) -> Result<DocumentId, CoreError> {
        let oid = ObjectId::new();
        let mut document = to_document(&fields);
        document.insert("_id", oid);

        self.collection(collection)
            .insert_one(document)
            .await
            .map_err(store_error)?;

        tracing::debug!(collection, id = %oid, "document inserted");

        Ok(DocumentId(oid.to_hex()))
    }

    async fn replace(
        &self,
        collection: &str,
        id: &DocumentId,
        fields: FieldMap,
    ) -> Result<bool, CoreError> {
        let Ok(oid) = ObjectId::parse_str(&id.0) else {
            return Ok(false);
        };

        let result = self
            .collection(collection)
            .replace_one(doc! { "_id": oid }, to_document(&fields))
            .await
            .map_err(store_error)?;

        Ok(result.matched_count > 0)
    }

    async fn delete(&self, collection: &str, id: &DocumentId) -> Result<bool, CoreError> {
        let Ok(oid) = ObjectId::parse_str(&id.0) else {
            return Ok(false);
        };

        let result = self
            .collection(collection)
            .delete_one(doc! { "_id": oid })
            .await
            .map_err(store_error)?;

        if result.deleted_count > 0 {
            tracing::debug!(collection, id = %id, "document deleted");
        }

        Ok(result.deleted_count > 0)
    }

    async fn query(
        &self,
        collection: &str,
        filter: Option<(&str, FieldValue)>,
        order_by: &str,
        direction: OrderDirection,
    ) -> Result<Vec<StoredDocument>, CoreError> {
        let mut filter_document = Document::new();
        if let Some((field, value)) = filter {
            filter_document.insert(field, to_bson(&value));
        }

        let mut sort = Document::new();
        sort.insert(
            order_by,
            match direction {
                OrderDirection::Ascending => 1,
                OrderDirection::Descending => -1,
            },
        );
        let options = FindOptions::builder().sort(sort).build();

        let mut cursor = self
            .collection(collection)
            .find(filter_document)
            .with_options(options)
            .await
            .map_err(store_error)?;

        let mut documents = Vec::new();
        while let Some(document) = cursor.try_next().await.map_err(store_error)? {
            documents.push(to_stored(document));
        }

        Ok(documents)
    }
}
