use crate::api::{ClickUp, Transport};
use crate::libs::messages::Message;
use crate::{msg_print, msg_warning};
use anyhow::Result;

pub async fn cmd<T: Transport>(client: &mut ClickUp<T>) -> Result<()> {
    let me = client.get_me().await?;
    msg_print!(Message::SignedInAs {
        username: me.username,
        email: me.email,
    });

    let teams = client.get_teams().await?;
    msg_print!(Message::TeamCount(teams.len()));
    if teams.is_empty() {
        msg_warning!(Message::NoTeamsForKey);
        return Ok(());
    }

    // Answered from the cache seeded by `get_teams`.
    let team_id = client.get_default_team_id().await?;
    if let Some(team) = teams.iter().find(|team| team.id == team_id) {
        msg_print!(Message::DefaultTeam {
            name: team.name.clone(),
            id: team.id.clone(),
        });
    }

    Ok(())
}
