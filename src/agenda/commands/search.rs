use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::BucketStore;
use tracing::debug;

use super::helpers::locate;

pub fn run(store: &BucketStore, name: &str) -> Result<CmdResult> {
    let (bucket, slot) = locate(store, name)?;
    debug!(name, bucket, slot, "contact found");
    let contact = store.bucket(bucket)[slot].clone();
    Ok(CmdResult::default().with_listed_contacts(vec![contact]))
}
