use crate::api::{ClickUp, Transport};
use crate::libs::messages::Message;
use crate::libs::resolver::{resolve_previous, Resolution};
use crate::{msg_info, msg_print, msg_success};
use anyhow::Result;

pub async fn cmd<T: Transport>(client: &mut ClickUp<T>) -> Result<()> {
    let task = match resolve_previous(client).await? {
        Resolution::Found(task) => task,
        _ => {
            msg_info!(Message::NoPreviousTask);
            return Ok(());
        }
    };

    msg_print!(Message::SwitchingBack {
        name: task.name.clone(),
        id: task.id.clone(),
    });
    client.start_timer(&task.id, None).await?;
    msg_success!(Message::TimerStarted);

    Ok(())
}
