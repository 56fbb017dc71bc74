use crate::api::{ClickUp, TimeEntry, Transport};
use crate::libs::formatter::{elapsed_minutes, now_millis};
use crate::libs::messages::Message;
use crate::{msg_info, msg_print};
use anyhow::Result;

pub async fn cmd<T: Transport>(client: &mut ClickUp<T>) -> Result<()> {
    let running = client.get_running_timer().await?;
    match report(running.as_ref(), now_millis()).as_slice() {
        [] => msg_info!(Message::NoActiveTimer),
        lines => {
            for line in lines {
                msg_print!(line);
            }
        }
    }
    Ok(())
}

/// Lines describing the running entry at `now_ms`. Empty when nothing runs.
pub fn report(running: Option<&TimeEntry>, now_ms: i64) -> Vec<Message> {
    let Some(entry) = running else {
        return Vec::new();
    };

    let mut lines = vec![Message::CurrentlyTracking {
        name: entry.task.name.clone(),
        url: entry.url().to_string(),
    }];
    if let Some(start) = entry.start_millis() {
        lines.push(Message::TimerDuration(elapsed_minutes(start, now_ms)));
    }
    lines
}
