use crate::api::{ClickUp, Transport};
use crate::libs::messages::Message;
use crate::libs::resolver::{resolve_by_id, Resolution};
use crate::{msg_error, msg_print, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct SwitchArgs {
    #[arg(required = true, help = "Task ID to start tracking")]
    pub query: String,
    #[arg(short, long, help = "Description for the new time entry")]
    pub description: Option<String>,
}

/// Starts a timer on the task whose id equals the query.
///
/// A running timer is not stopped first: ClickUp replaces it when a new one starts.
pub async fn cmd<T: Transport>(client: &mut ClickUp<T>, args: SwitchArgs) -> Result<()> {
    let task = match resolve_by_id(client, &args.query).await? {
        Resolution::Found(task) => task,
        _ => {
            msg_error!(Message::NoTaskForQuery(args.query));
            return Ok(());
        }
    };

    msg_print!(Message::TaskFound {
        name: task.name.clone(),
        id: task.id.clone(),
    });
    client.start_timer(&task.id, args.description.as_deref()).await?;
    msg_success!(Message::TimerStartedFor(task.name));

    Ok(())
}
