use crate::api::{ClickUp, Transport};
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;

pub async fn cmd<T: Transport>(client: &mut ClickUp<T>) -> Result<()> {
    let tasks = client.get_assigned_tasks().await?;
    if tasks.is_empty() {
        msg_info!(Message::NoAssignedTasks);
        return Ok(());
    }

    msg_print!(Message::AssignedTasksHeader);
    View::tasks(&tasks);

    Ok(())
}
