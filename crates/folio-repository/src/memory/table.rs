use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::{RwLock, RwLockWriteGuard};

/// Rows keyed by a sequence-assigned id, iterated in id order.
#[derive(Debug)]
pub struct SequenceTable<E> {
    rows: RwLock<BTreeMap<i64, E>>,
    sequence: AtomicI64,
}

impl<E: Clone> SequenceTable<E> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(BTreeMap::new()),
            sequence: AtomicI64::new(0),
        }
    }

    /// Draws the next id. Ids are never reused, even after deletes.
    pub fn next_id(&self) -> i64 {
        self.sequence.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub async fn get(&self, id: i64) -> Option<E> {
        self.rows.read().await.get(&id).cloned()
    }

    /// Rows matching `predicate`, in id order.
    pub async fn select<P>(&self, predicate: P) -> Vec<E>
    where
        P: Fn(&E) -> bool,
    {
        self.rows
            .read()
            .await
            .values()
            .filter(|row| predicate(row))
            .cloned()
            .collect()
    }

    pub async fn all(&self) -> Vec<E> {
        self.select(|_| true).await
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn remove(&self, id: i64) -> bool {
        self.rows.write().await.remove(&id).is_some()
    }

    /// Exclusive access for read-modify-write operations.
    pub async fn write(&self) -> RwLockWriteGuard<'_, BTreeMap<i64, E>> {
        self.rows.write().await
    }
}

impl<E: Clone> Default for SequenceTable<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ids_are_not_reused() {
        let table: SequenceTable<&str> = SequenceTable::new();
        let a = table.next_id();
        table.write().await.insert(a, "a");
        assert!(table.remove(a).await);
        let b = table.next_id();
        assert_eq!((a, b), (1, 2));
        assert_eq!(table.len().await, 0);
    }

    #[tokio::test]
    async fn test_select_in_id_order() {
        let table = SequenceTable::new();
        {
            let mut rows = table.write().await;
            rows.insert(3, 30);
            rows.insert(1, 10);
            rows.insert(2, 20);
        }
        assert_eq!(table.all().await, vec![10, 20, 30]);
        assert_eq!(table.select(|v| *v > 15).await, vec![20, 30]);
        assert_eq!(table.get(2).await, Some(20));
    }
}
