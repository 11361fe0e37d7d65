use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use uuid::Uuid;

use crate::domain::{
    common::CoreError,
    store::{
        DocumentId, FieldMap, FieldValue, StoredDocument,
        ports::{DocumentStore, OrderDirection},
    },
};

/// In-process [`DocumentStore`] over a mutex-guarded map. Backs the unit
/// tests; ids are generated v4 uuids.
#[derive(Clone, Default)]
pub struct MemoryDocumentStore {
    collections: Arc<Mutex<HashMap<String, HashMap<String, FieldMap>>>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn compare(a: Option<&FieldValue>, b: Option<&FieldValue>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => compare_values(a, b),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
}

fn compare_values(a: &FieldValue, b: &FieldValue) -> Ordering {
    // temporal fields order by their millisecond view regardless of encoding
    if let (Some(a), Some(b)) = (a.timestamp_millis(), b.timestamp_millis()) {
        return a.cmp(&b);
    }
    match (a, b) {
        (FieldValue::Str(a), FieldValue::Str(b)) => a.cmp(b),
        (FieldValue::Float(a), FieldValue::Float(b)) => {
            a.partial_cmp(b).unwrap_or(Ordering::Equal)
        }
        (FieldValue::Bool(a), FieldValue::Bool(b)) => a.cmp(b),
        _ => Ordering::Equal,
    }
}

impl DocumentStore for MemoryDocumentStore {
    async fn get(
        &self,
        collection: &str,
        id: &DocumentId,
    ) -> Result<Option<StoredDocument>, CoreError> {
        let collections = self.collections.lock().unwrap();

        let document = collections
            .get(collection)
            .and_then(|documents| documents.get(&id.0))
            .map(|fields| StoredDocument::new(id.0.clone(), fields.clone()));

        Ok(document)
    }

    async fn insert(&self, collection: &str, fields: FieldMap) -> Result<DocumentId, CoreError> {
        let mut collections = self.collections.lock().unwrap();

        let id = Uuid::new_v4().simple().to_string();
        collections
            .entry(collection.to_string())
            .or_default()
            .insert(id.clone(), fields);

        Ok(DocumentId(id))
    }

    async fn replace(
        &self,
        collection: &str,
        id: &DocumentId,
        fields: FieldMap,
    ) -> Result<bool, CoreError> {
        let mut collections = self.collections.lock().unwrap();

        match collections
            .get_mut(collection)
            .and_then(|documents| documents.get_mut(&id.0))
        {
            Some(slot) => {
                *slot = fields;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, collection: &str, id: &DocumentId) -> Result<bool, CoreError> {
        let mut collections = self.collections.lock().unwrap();

        Ok(collections
            .get_mut(collection)
            .and_then(|documents| documents.remove(&id.0))
            .is_some())
    }

    async fn query(
        &self,
        collection: &str,
        filter: Option<(&str, FieldValue)>,
        order_by: &str,
        direction: OrderDirection,
    ) -> Result<Vec<StoredDocument>, CoreError> {
        let collections = self.collections.lock().unwrap();

        let mut documents: Vec<StoredDocument> = collections
            .get(collection)
            .map(|documents| {
                documents
                    .iter()
                    .filter(|(_, fields)| match &filter {
                        Some((field, value)) => fields.get(*field) == Some(value),
                        None => true,
                    })
                    .map(|(id, fields)| StoredDocument::new(id.clone(), fields.clone()))
                    .collect()
            })
            .unwrap_or_default();

        documents.sort_by(|a, b| {
            let ordering = compare(a.fields.get(order_by), b.fields.get(order_by));
            match direction {
                OrderDirection::Ascending => ordering,
                OrderDirection::Descending => ordering.reverse(),
            }
        });

        Ok(documents)
    }
}
