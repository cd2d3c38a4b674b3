//! Catalog Spatial Index
//!
//! R-tree over catalog source markers in pixel space. Gives hosts an
//! [`ObjectLookup`] for rectangle selections and a point query for click
//! hit testing, both in O(log n + k).

use crate::host::ObjectLookup;
use crate::input::{PixelPoint, PixelRect};
use crate::selection::SelectionResult;
use rstar::{AABB, RTree, RTreeObject};
use std::collections::HashMap;

/// A catalog source marker: its pixel position and hit radius.
#[derive(Debug, Clone, Copy)]
pub struct SourceEntry {
    pub source_id: u64,
    pub center: PixelPoint,
    pub radius: f64,
}

impl SourceEntry {
    pub fn new(source_id: u64, center: PixelPoint, radius: f64) -> Self {
        Self {
            source_id,
            center,
            radius: radius.max(0.0),
        }
    }

    #[inline]
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        let (dx, dy) = (x - self.center.x, y - self.center.y);
        dx * dx + dy * dy <= self.radius * self.radius
    }
}

impl RTreeObject for SourceEntry {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(
            [self.center.x - self.radius, self.center.y - self.radius],
            [self.center.x + self.radius, self.center.y + self.radius],
        )
    }
}

impl PartialEq for SourceEntry {
    fn eq(&self, other: &Self) -> bool {
        self.source_id == other.source_id
    }
}

/// Spatial index of catalog sources currently on screen.
pub struct CatalogIndex {
    tree: RTree<SourceEntry>,
    entries: HashMap<u64, SourceEntry>,
}

impl CatalogIndex {
    pub fn new() -> Self {
        Self {
            tree: RTree::new(),
            entries: HashMap::new(),
        }
    }

    /// Build an index from `(id, center, radius)` triples.
    pub fn from_sources<I>(sources: I) -> Self
    where
        I: IntoIterator<Item = (u64, PixelPoint, f64)>,
    {
        let mut index = Self::new();
        index.rebuild(sources);
        index
    }

    /// Insert or move a source.
    pub fn insert(&mut self, source_id: u64, center: PixelPoint, radius: f64) {
        if let Some(old_entry) = self.entries.remove(&source_id) {
            self.tree.remove(&old_entry);
        }

        let entry = SourceEntry::new(source_id, center, radius);
        self.tree.insert(entry);
        self.entries.insert(source_id, entry);
    }

    pub fn remove(&mut self, source_id: u64) -> bool {
        if let Some(entry) = self.entries.remove(&source_id) {
            self.tree.remove(&entry);
            true
        } else {
            false
        }
    }

    pub fn get(&self, source_id: u64) -> Option<&SourceEntry> {
        self.entries.get(&source_id)
    }

    /// Sources whose marker covers `(x, y)`.
    pub fn query_point(&self, x: f64, y: f64) -> Vec<u64> {
        let point_envelope = AABB::from_point([x, y]);

        self.tree
            .locate_in_envelope_intersecting(&point_envelope)
            .filter(|entry| entry.contains_point(x, y))
            .map(|entry| entry.source_id)
            .collect()
    }

    /// Sources whose center lies inside `rect`, sorted by id.
    pub fn query_rect(&self, rect: PixelRect) -> Vec<u64> {
        let envelope = AABB::from_corners([rect.min_x(), rect.min_y()], [rect.max_x(), rect.max_y()]);

        let mut ids: Vec<u64> = self
            .tree
            .locate_in_envelope_intersecting(&envelope)
            .filter(|entry| rect.contains(entry.center))
            .map(|entry| entry.source_id)
            .collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replace the whole content, e.g. after the view moved.
    pub fn rebuild<I>(&mut self, sources: I)
    where
        I: IntoIterator<Item = (u64, PixelPoint, f64)>,
    {
        self.entries = sources
            .into_iter()
            .map(|(id, center, radius)| (id, SourceEntry::new(id, center, radius)))
            .collect();
        self.tree = RTree::bulk_load(self.entries.values().copied().collect());
    }

    pub fn clear(&mut self) {
        self.tree = RTree::new();
        self.entries.clear();
    }
}

impl Default for CatalogIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl ObjectLookup for CatalogIndex {
    type Object = u64;

    fn objects_in_region(&self, region: &SelectionResult) -> Vec<u64> {
        self.query_rect(region.bbox())
    }
}
