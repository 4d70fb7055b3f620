use crate::record::Record;
use crate::store::RecordStore;

/// One line per record in insertion order, or "no users" when empty.
pub fn handle(store: &RecordStore) -> String {
    if store.is_empty() {
        return "no users".into();
    }
    store
        .list()
        .iter()
        .map(Record::summary)
        .collect::<Vec<_>>()
        .join("\n")
}
