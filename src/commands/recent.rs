use crate::api::{ClickUp, Transport};
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;

pub async fn cmd<T: Transport>(client: &mut ClickUp<T>) -> Result<()> {
    let entries = client.get_recent_time_entries().await?;
    if entries.is_empty() {
        msg_info!(Message::NoRecentEntries);
        return Ok(());
    }

    msg_print!(Message::RecentEntriesHeader);
    View::time_entries(&entries);

    Ok(())
}
