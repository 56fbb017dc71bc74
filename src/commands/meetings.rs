use crate::api::{ClickUp, Transport};
use crate::libs::messages::Message;
use crate::libs::resolver::{resolve_by_name, Resolution};
use crate::{msg_error, msg_print, msg_success};
use anyhow::Result;
use clap::Args;

pub const MEETINGS_TASK: &str = "Meetings";

#[derive(Debug, Args)]
pub struct MeetingsArgs {
    #[arg(long, default_value = MEETINGS_TASK, help = "Name of the task to track meetings against")]
    pub name: String,
    #[arg(short, long, help = "Description for the new time entry")]
    pub description: Option<String>,
}

impl Default for MeetingsArgs {
    fn default() -> Self {
        Self {
            name: MEETINGS_TASK.to_string(),
            description: None,
        }
    }
}

pub async fn cmd<T: Transport>(client: &mut ClickUp<T>, args: MeetingsArgs) -> Result<()> {
    msg_print!(Message::SearchingTask(args.name.clone()));

    let task = match resolve_by_name(client, &args.name).await? {
        Resolution::Found(task) => task,
        _ => {
            msg_error!(Message::NoTaskNamed(args.name));
            return Ok(());
        }
    };

    msg_print!(Message::TaskFound {
        name: task.name.clone(),
        id: task.id.clone(),
    });
    // No description unless asked: free ClickUp plans reject them on timers.
    client.start_timer(&task.id, args.description.as_deref()).await?;
    msg_success!(Message::TimerStartedFor(task.name));

    Ok(())
}
