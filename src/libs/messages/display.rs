//! Display implementation for clk application messages.
//!
//! Every line clk prints for a human is produced here, so the wording of a
//! command's output can be checked in one place. Task and time entry data
//! itself (task lists, the recent entries table) is rendered by
//! [`crate::libs::view::View`].

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TIMER MESSAGES ===
            Message::CurrentlyTracking { name, url } => format!("Currently tracking: [{}] ({})", name, url),
            Message::TimerDuration(minutes) => format!("Duration: {} minutes", minutes),
            Message::NoActiveTimer => "No active timer found.".to_string(),
            Message::TimerStartedFor(name) => format!("Timer started for {}", name),
            Message::TimerStarted => "Timer started.".to_string(),
            Message::TimerStopped => "Timer stopped.".to_string(),

            // === TASK MESSAGES ===
            Message::SearchingTask(name) => format!("Searching for '{}'...", name),
            Message::TaskFound { name, id } => format!("Found: {} ({})", name, id),
            Message::NoTaskNamed(name) => format!("No task named '{}' found.", name),
            Message::NoTaskForQuery(query) => format!("No task found for '{}'", query),
            Message::NoAssignedTasks => "No assigned tasks found.".to_string(),
            Message::AssignedTasksHeader => "Assigned Tasks:".to_string(),

            // === SWITCH MESSAGES ===
            Message::SwitchingBack { name, id } => format!("Switching back to: {} ({})", name, id),
            Message::NoPreviousTask => "No previous different task found in recent history.".to_string(),

            // === HISTORY MESSAGES ===
            Message::RecentEntriesHeader => "Recent time entries:".to_string(),
            Message::NoRecentEntries => "No recent time entries found.".to_string(),

            // === IDENTITY MESSAGES ===
            Message::SignedInAs { username, email } => format!("Signed in as {} <{}>", username, email),
            Message::DefaultTeam { name, id } => format!("Default team: {} ({})", name, id),
            Message::TeamCount(count) => format!("Member of {} team(s)", count),
            Message::NoTeamsForKey => "No teams found for this API key, timer commands will fail.".to_string(),

            // === ERROR MESSAGES ===
            Message::CommandFailed(error) => format!("Error: {}", error),
        };
        write!(f, "{}", text)
    }
}
