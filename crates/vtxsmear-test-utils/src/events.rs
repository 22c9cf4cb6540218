//! Builders for upstream event records.

use vtxsmear_core::event::{Event, GenEvent};
use vtxsmear_core::types::FourVector;

/// A record with one vertex at `position`.
pub fn single_vertex_record(event_number: u64, position: FourVector) -> GenEvent {
    let mut record = GenEvent::new(event_number);
    record.add_vertex(position);
    record
}

/// A record with one vertex per entry of `positions`.
pub fn record_with_vertices(
    event_number: u64,
    positions: impl IntoIterator<Item = FourVector>,
) -> GenEvent {
    let mut record = GenEvent::new(event_number);
    for p in positions {
        record.add_vertex(p);
    }
    record
}

/// An event holding `record` under `label`.
pub fn event_with_record(label: &str, record: GenEvent) -> Event {
    let mut event = Event::new(record.event_number);
    event.put(label, record);
    event
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_with_record_is_retrievable() {
        let event = event_with_record("generator", single_vertex_record(3, FourVector::default()));
        assert_eq!(event.id, 3);
        assert_eq!(event.get("generator").map(GenEvent::vertex_count), Some(1));
    }

    #[test]
    fn record_with_vertices_keeps_order() {
        let rec = record_with_vertices(
            0,
            [
                FourVector::new(1.0, 0.0, 0.0, 0.0),
                FourVector::new(2.0, 0.0, 0.0, 0.0),
            ],
        );
        let xs: Vec<f64> = rec.vertices().iter().map(|v| v.position.x).collect();
        assert_eq!(xs, vec![1.0, 2.0]);
    }
}
