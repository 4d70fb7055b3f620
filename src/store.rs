use crate::record::Record;

/// In-memory, insertion-ordered record collection for one session.
///
/// Append-only: there is no update or delete. Ids are not required to be
/// unique; lookup returns the first match.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, record: Record) {
        self.records.push(record);
    }

    /// All records in insertion order.
    pub fn list(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First record whose id, in string form, equals `id`.
    pub fn find_by_id(&self, id: &str) -> Option<&Record> {
        self.records
            .iter()
            .find(|r| r.id_string().as_deref() == Some(id))
    }
}
