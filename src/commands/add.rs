use crate::commands::CommandError;
use crate::record::Record;
use crate::store::RecordStore;

/// Parse a verified flag: "true", "1", or "yes" in any case; anything else is false.
pub fn parse_flag(arg: &str) -> bool {
    ["true", "1", "yes"]
        .iter()
        .any(|t| arg.eq_ignore_ascii_case(t))
}

/// Build a record from `<id> <age> <verified> <region>` and append it.
/// Extra arguments are ignored. The store is untouched on error.
pub fn handle(args: &[String], store: &mut RecordStore) -> Result<String, CommandError> {
    let [id, age, verified, region, ..] = args else {
        return Err(CommandError::AddUsage);
    };
    let age: i64 = age.parse().map_err(|_| CommandError::AgeNotNumber)?;
    let record = Record::user(id.as_str(), age, parse_flag(verified), region.as_str());
    store.add(record);
    log::info!("added record {id}");
    Ok(format!("added {id}"))
}
