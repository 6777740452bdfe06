//! Admin Approval Queues
//!
//! Rows waiting for an approve/reject decision plus the count shown on the
//! matching dashboard card. The two are fetched separately and may disagree;
//! a decision always removes the row and lowers the count by one.

use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::listing::{DietType, ServiceCategory};

#[derive(Debug, Clone, PartialEq)]
pub struct PendingQueue<T: Entity> {
    rows: Vec<T>,
    count: u32,
}

impl<T: Entity> Default for PendingQueue<T> {
    fn default() -> Self {
        Self { rows: Vec::new(), count: 0 }
    }
}

impl<T: Entity> PendingQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn set_rows(&mut self, rows: Vec<T>) {
        self.rows = rows;
    }

    pub fn set_count(&mut self, count: u32) {
        self.count = count;
    }

    pub fn get(&self, id: T::Id) -> Option<&T> {
        self.rows.iter().find(|row| row.id() == id)
    }

    /// Drop a decided row. The count goes down even when the row was not in
    /// the local list, but never below zero.
    pub fn resolve(&mut self, id: T::Id) -> Option<T> {
        self.count = self.count.saturating_sub(1);
        let pos = self.rows.iter().position(|row| row.id() == id)?;
        Some(self.rows.remove(pos))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingHouse {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub provider_business_name: String,
}

impl Entity for PendingHouse {
    type Id = i64;
    fn id(&self) -> i64 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingTiffin {
    pub id: i64,
    #[serde(default)]
    pub provider_business_name: String,
    #[serde(default)]
    pub diet_type: DietType,
}

impl Entity for PendingTiffin {
    type Id = i64;
    fn id(&self) -> i64 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingService {
    pub id: i64,
    #[serde(default)]
    pub service_category: ServiceCategory,
    #[serde(default)]
    pub service_title: String,
    #[serde(default)]
    pub provider_business_name: String,
}

impl Entity for PendingService {
    type Id = i64;
    fn id(&self) -> i64 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn house(id: i64) -> PendingHouse {
        PendingHouse { id, title: format!("House {}", id), provider_business_name: "Acme".into() }
    }

    #[test]
    fn test_resolve_removes_row_and_decrements() {
        let mut queue = PendingQueue::new();
        queue.set_rows(vec![house(1), house(2)]);
        queue.set_count(2);

        let removed = queue.resolve(1).unwrap();
        assert_eq!(removed.id, 1);
        assert_eq!(queue.count(), 1);
        assert_eq!(queue.rows().len(), 1);
        assert!(queue.get(1).is_none());

        queue.resolve(2);
        assert!(queue.is_empty());
        assert_eq!(queue.count(), 0);
    }

    #[test]
    fn test_count_never_negative() {
        let mut queue: PendingQueue<PendingHouse> = PendingQueue::new();
        assert!(queue.resolve(9).is_none());
        assert_eq!(queue.count(), 0);
    }

    #[test]
    fn test_pending_service_row() {
        let row: PendingService = serde_json::from_str(
            r#"{"id": 5, "service_category": "ac_repair", "service_title": "Split AC", "provider_business_name": "CoolFix"}"#,
        )
        .unwrap();
        assert_eq!(row.service_category, ServiceCategory::AcRepair);
    }
}
