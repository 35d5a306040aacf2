//! # Receipt Store
//!
//! In-memory map from receipt id to the accepted receipt and its points.
//! Contents live only as long as the process.

use std::collections::HashMap;

use points_core::Receipt;
use tokio::sync::RwLock;
use uuid::Uuid;

/// An accepted receipt together with the score computed at submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredReceipt {
    pub receipt: Receipt,
    pub points: u64,
}

/// Receipts keyed by their assigned id.
#[derive(Debug, Default)]
pub struct ReceiptStore {
    receipts: RwLock<HashMap<Uuid, StoredReceipt>>,
}

impl ReceiptStore {
    /// Stores a receipt under a freshly generated id and returns the id.
    pub async fn insert(&self, receipt: Receipt, points: u64) -> Uuid {
        let mut receipts = self.receipts.write().await;
        let mut id = Uuid::new_v4();
        while receipts.contains_key(&id) {
            id = Uuid::new_v4();
        }
        receipts.insert(id, StoredReceipt { receipt, points });
        id
    }

    /// The receipt stored under `id` with its points, if any.
    pub async fn get(&self, id: &Uuid) -> Option<StoredReceipt> {
        self.receipts.read().await.get(id).cloned()
    }

    pub async fn is_empty(&self) -> bool {
        self.receipts.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use points_core::Item;

    use super::*;

    fn receipt(retailer: &str) -> Receipt {
        Receipt {
            retailer: retailer.to_string(),
            purchase_date: "2022-01-01".to_string(),
            purchase_time: "13:01".to_string(),
            items: Some(vec![Item::new("  abc ", "1.00")]),
            total: "1.00".to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_then_lookup() {
        let store = ReceiptStore::default();
        assert!(store.is_empty().await);

        let id = store.insert(receipt("Target"), 28).await;
        let stored = store.get(&id).await.unwrap();
        assert_eq!(stored.points, 28);
        assert_eq!(stored.receipt.retailer, "Target");
        assert_eq!(stored.receipt.items()[0].short_description, "  abc ");
        assert!(!store.is_empty().await);
    }

    #[tokio::test]
    async fn test_unknown_id() {
        let store = ReceiptStore::default();
        store.insert(receipt("Target"), 1).await;
        assert_eq!(store.get(&Uuid::new_v4()).await, None);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_inserts_get_distinct_ids() {
        let store = Arc::new(ReceiptStore::default());
        let mut handles = Vec::new();
        for n in 0..32u64 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.insert(receipt("Shop"), n).await
            }));
        }

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 32);
        for id in &ids {
            assert!(store.get(id).await.is_some());
        }
    }
}
