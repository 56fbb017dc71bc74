use crate::api::{ClickUp, Transport};
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;

pub async fn cmd<T: Transport>(client: &mut ClickUp<T>) -> Result<()> {
    client.stop_timer().await?;
    msg_success!(Message::TimerStopped);

    Ok(())
}
