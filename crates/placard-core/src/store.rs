//! Ordered element store.

use crate::element::{Element, ElementId, ElementKind, ElementPatch};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

/// Store mutation errors.
///
/// The store stays explicit about failures; the degrade-to-no-op policies
/// for racing async callbacks live in the coordinator, not here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("no element with id {0}")]
    NotFound(ElementId),
    #[error("duplicate element id {0}")]
    DuplicateId(ElementId),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Generates element ids in the `{KIND}__{millis}__{sequence}` shape.
///
/// The sequence part is a monotonic per-store counter rather than the store
/// length, so delete-then-add within the same millisecond cannot collide.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct IdGenerator {
    sequence: u64,
}

impl IdGenerator {
    fn next(&mut self, kind: ElementKind) -> ElementId {
        let id = ElementId::compose(kind, unix_millis(), self.sequence);
        self.sequence += 1;
        id
    }
}

fn unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}

/// The ordered sequence of placed elements.
///
/// Order is paint order only. Every successful mutation bumps `revision`,
/// which is how observers detect change (the replace-the-reference contract
/// of the original UI, expressed as a counter).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ElementStore {
    elements: Vec<Element>,
    generator: IdGenerator,
    revision: u64,
}

impl ElementStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a new element of `kind` with the per-kind defaults and a
    /// freshly generated id, and append it to the store.
    pub fn add(&mut self, kind: ElementKind) -> ElementId {
        let id = self.generator.next(kind);
        self.elements.push(Element::new(id.clone(), kind));
        self.revision += 1;
        id
    }

    /// Insert a pre-built element (templates, tests). Rejects ids already
    /// present so the one-element-per-id invariant holds.
    pub fn insert(&mut self, element: Element) -> StoreResult<()> {
        if self.contains(&element.id) {
            return Err(StoreError::DuplicateId(element.id));
        }
        self.elements.push(element);
        self.revision += 1;
        Ok(())
    }

    /// Shallow-merge a patch onto the element with the matching id, writing
    /// the merged record back at the same index.
    pub fn apply(&mut self, patch: &ElementPatch) -> StoreResult<()> {
        let Some(element) = self.elements.iter_mut().find(|e| e.id == patch.id) else {
            return Err(StoreError::NotFound(patch.id.clone()));
        };
        patch.apply_to(element);
        self.revision += 1;
        Ok(())
    }

    /// Remove every element whose id is in `ids` in a single pass, preserving
    /// the relative order of survivors. Returns how many were removed.
    pub fn remove_many(&mut self, ids: &HashSet<ElementId>) -> usize {
        let before = self.elements.len();
        self.elements.retain(|e| !ids.contains(&e.id));
        let removed = before - self.elements.len();
        if removed > 0 {
            self.revision += 1;
        }
        removed
    }

    pub fn get(&self, id: &ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| &e.id == id)
    }

    pub fn contains(&self, id: &ElementId) -> bool {
        self.get(id).is_some()
    }

    /// Elements in paint order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Ids in paint order.
    pub fn ids(&self) -> impl Iterator<Item = &ElementId> {
        self.elements.iter().map(|e| &e.id)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Mutation counter for change detection.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}
