use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Contact;
use crate::store::{BucketStore, ContactSink};
use tracing::{info, warn};

/// Writes every contact to `sink`, buckets A to Z, each bucket in stored order.
pub fn run<K: ContactSink>(store: &BucketStore, sink: &mut K) -> Result<CmdResult> {
    let lines: Vec<String> = store.iter().map(Contact::to_line).collect();
    let location = sink.location();

    if let Err(e) = sink.write_lines(&lines) {
        warn!(%location, error = %e, "dump failed");
        return Err(e);
    }
    info!(%location, count = lines.len(), "contacts dumped");

    let mut result = CmdResult::default();
    if lines.is_empty() {
        result.add_message(CmdMessage::info("No contacts to save."));
    }
    result.add_message(CmdMessage::success(format!(
        "Contacts saved to {}.",
        location
    )));
    Ok(result.with_dump_location(location))
}
