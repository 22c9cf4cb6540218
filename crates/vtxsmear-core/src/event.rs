//! Minimal event-record container.
//!
//! An [`Event`] holds the records put into it by the modules of the
//! pipeline, each tagged with the label of the module that produced it.
//! A record handle may be invalid (its producer failed to deliver it); the
//! consumer decides what that means.

use serde::{Deserialize, Serialize};

use crate::types::FourVector;

// ---------------------------------------------------------------------------
// GenVertex / GenEvent
// ---------------------------------------------------------------------------

/// One interaction or decay point of a generated event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenVertex {
    /// Generator-assigned identifier, unique within the event.
    pub barcode: i32,
    pub position: FourVector,
}

impl GenVertex {
    pub const fn new(barcode: i32, position: FourVector) -> Self {
        Self { barcode, position }
    }
}

/// A generated event: an ordered collection of vertices.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenEvent {
    pub event_number: u64,
    vertices: Vec<GenVertex>,
}

impl GenEvent {
    pub const fn new(event_number: u64) -> Self {
        Self {
            event_number,
            vertices: Vec::new(),
        }
    }

    /// Append a vertex and return its barcode.
    ///
    /// Barcodes are assigned `-1, -2, ...` in insertion order.
    pub fn add_vertex(&mut self, position: FourVector) -> i32 {
        let barcode = -i32::try_from(self.vertices.len() + 1).unwrap_or(i32::MAX);
        self.vertices.push(GenVertex::new(barcode, position));
        barcode
    }

    pub fn vertices(&self) -> &[GenVertex] {
        &self.vertices
    }

    pub fn vertices_mut(&mut self) -> impl Iterator<Item = &mut GenVertex> {
        self.vertices.iter_mut()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
}

// ---------------------------------------------------------------------------
// RecordHandle
// ---------------------------------------------------------------------------

/// A record in an event together with the label of the module that put it
/// there. `record` is `None` when the producer marked it invalid.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordHandle {
    label: String,
    record: Option<GenEvent>,
}

impl RecordHandle {
    pub fn valid(label: impl Into<String>, record: GenEvent) -> Self {
        Self {
            label: label.into(),
            record: Some(record),
        }
    }

    pub fn invalid(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            record: None,
        }
    }

    /// Label of the producing module.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub const fn is_valid(&self) -> bool {
        self.record.is_some()
    }

    pub const fn record(&self) -> Option<&GenEvent> {
        self.record.as_ref()
    }
}

// ---------------------------------------------------------------------------
// Event
// ---------------------------------------------------------------------------

/// Per-event store of labelled records.
#[derive(Debug, Clone, Default)]
pub struct Event {
    pub id: u64,
    records: Vec<RecordHandle>,
}

impl Event {
    pub const fn new(id: u64) -> Self {
        Self {
            id,
            records: Vec::new(),
        }
    }

    /// All records of this event, in insertion order.
    pub fn records(&self) -> &[RecordHandle] {
        &self.records
    }

    /// First valid record produced by `label`.
    pub fn get(&self, label: &str) -> Option<&GenEvent> {
        self.records
            .iter()
            .filter(|h| h.label == label)
            .find_map(RecordHandle::record)
    }

    /// Add a record produced by `label`.
    pub fn put(&mut self, label: impl Into<String>, record: GenEvent) {
        self.records.push(RecordHandle::valid(label, record));
    }

    /// Add a handle as-is, including invalid ones.
    pub fn put_handle(&mut self, handle: RecordHandle) {
        self.records.push(handle);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
