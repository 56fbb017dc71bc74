//! ClickUp API v2 client for time tracking.
//!
//! Wraps the handful of ClickUp endpoints clk needs into typed operations.
//! Almost every call is scoped to "the current user's default team", so the
//! client resolves the user and the team lazily on first use and keeps them
//! for the rest of the process. clk runs one command per process, which is
//! why the cache is never invalidated.
//!
//! ## Endpoints
//!
//! | Operation                  | Endpoint                                   |
//! |----------------------------|--------------------------------------------|
//! | `get_me`                   | `GET /user`                                |
//! | `get_teams`                | `GET /team`                                |
//! | `get_assigned_tasks`       | `GET /team/{team}/task?assignees[]=...`    |
//! | `search_tasks`             | `GET /team/{team}/task?search=...`         |
//! | `start_timer`              | `POST /team/{team}/time_entries/start`     |
//! | `stop_timer`               | `POST /team/{team}/time_entries/stop`      |
//! | `get_recent_time_entries`  | `GET /team/{team}/time_entries`            |
//! | `get_running_timer`        | `GET /team/{team}/time_entries/current`    |

use super::{ApiError, Request, Transport};
use crate::libs::config::Config;
use crate::libs::http::Http;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::cmp::Reverse;
use tracing::debug;

/// Number of time entries `get_recent_time_entries` returns at most.
pub const RECENT_ENTRIES_LIMIT: usize = 10;

/// The owner of the API key.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct User {
    pub id: u64,
    pub username: String,
    pub email: String,
    /// ClickUp sends `null` for users who never picked a color.
    pub color: Option<String>,
}

/// A ClickUp workspace. The API still calls these teams.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Team {
    pub id: String,
    pub name: String,
    pub color: Option<String>,
    pub avatar: Option<String>,
    #[serde(default)]
    pub members: Vec<TeamMember>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TeamMember {
    pub user: MemberUser,
}

/// Team members are reported with looser fields than `/user` (pending invites have no username).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MemberUser {
    pub id: u64,
    pub username: Option<String>,
    pub email: Option<String>,
    pub color: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TaskStatus {
    pub status: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Task {
    pub id: String,
    pub name: String,
    pub status: TaskStatus,
    /// Absent on tasks embedded in time entries.
    #[serde(default)]
    pub url: String,
}

/// A tracked interval. `start` and `end` are millisecond epoch timestamps sent as strings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TimeEntry {
    pub id: String,
    pub task: Task,
    pub start: String,
    pub end: Option<String>,
    pub duration: Option<String>,
    pub description: Option<String>,
    pub task_url: Option<String>,
}

impl TimeEntry {
    pub fn start_millis(&self) -> Option<i64> {
        self.start.trim().parse().ok()
    }

    pub fn end_millis(&self) -> Option<i64> {
        self.end.as_deref().and_then(|end| end.trim().parse().ok())
    }

    pub fn is_running(&self) -> bool {
        self.end_millis().is_none()
    }

    /// Task URL, taken from the embedded task or from the entry itself.
    pub fn url(&self) -> &str {
        if !self.task.url.is_empty() {
            return &self.task.url;
        }
        self.task_url.as_deref().unwrap_or_default()
    }
}

#[derive(Deserialize, Debug)]
struct UserResponse {
    user: User,
}

#[derive(Deserialize, Debug)]
struct TeamsResponse {
    teams: Vec<Team>,
}

#[derive(Deserialize, Debug)]
struct TasksResponse {
    tasks: Vec<Task>,
}

#[derive(Deserialize, Debug)]
struct TimeEntriesResponse {
    data: Vec<TimeEntry>,
}

#[derive(Deserialize, Debug)]
struct RunningTimerResponse {
    data: Option<TimeEntry>,
}

/// Typed ClickUp client.
///
/// Owns the transport plus the two values resolved lazily on first use:
/// the current user and the default team id. Both are written once and never
/// invalidated; construct one client per command invocation.
#[derive(Debug)]
pub struct ClickUp<T: Transport = Http> {
    transport: T,
    user: Option<User>,
    default_team_id: Option<String>,
}

impl ClickUp<Http> {
    /// Creates a client talking to the configured ClickUp endpoint over HTTPS.
    pub fn new(config: &Config) -> Self {
        Self::with_transport(Http::new(config))
    }
}

impl<T: Transport> ClickUp<T> {
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport,
            user: None,
            default_team_id: None,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn fetch<R: DeserializeOwned>(&self, request: Request) -> Result<R, ApiError> {
        let endpoint = request.endpoint.clone();
        let value = self.transport.send(request).await?;
        serde_json::from_value(value).map_err(|source| ApiError::Decode { endpoint, source })
    }

    /// Returns the user owning the API key.
    ///
    /// The first call hits `GET /user`; later calls answer from the cache.
    pub async fn get_me(&mut self) -> Result<User, ApiError> {
        if let Some(user) = &self.user {
            debug!(user_id = user.id, "using cached user");
            return Ok(user.clone());
        }
        let response: UserResponse = self.fetch(Request::get("/user")).await?;
        self.user = Some(response.user.clone());
        Ok(response.user)
    }

    /// Lists every team the API key has access to. An empty list is valid.
    ///
    /// The first team of the list also becomes the cached default team, so a
    /// later [`ClickUp::get_default_team_id`] needs no second `GET /team`.
    pub async fn get_teams(&mut self) -> Result<Vec<Team>, ApiError> {
        let response: TeamsResponse = self.fetch(Request::get("/team")).await?;
        if self.default_team_id.is_none() {
            if let Some(team) = response.teams.first() {
                debug!(team_id = %team.id, team = %team.name, "resolved default team");
                self.default_team_id = Some(team.id.clone());
            }
        }
        Ok(response.teams)
    }

    /// Id of the first team returned by ClickUp, cached after the first call.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NoTeams`] when the team list is empty.
    pub async fn get_default_team_id(&mut self) -> Result<String, ApiError> {
        if let Some(team_id) = &self.default_team_id {
            debug!(team_id = %team_id, "using cached default team");
            return Ok(team_id.clone());
        }
        self.get_teams().await?;
        self.default_team_id.clone().ok_or(ApiError::NoTeams)
    }

    /// Open tasks (subtasks included) assigned to the current user.
    pub async fn get_assigned_tasks(&mut self) -> Result<Vec<Task>, ApiError> {
        let team_id = self.get_default_team_id().await?;
        let me = self.get_me().await?;
        let request = Request::get(format!("/team/{}/task", team_id))
            .query("assignees[]", me.id)
            .query("include_closed", false)
            .query("subtasks", true);
        let response: TasksResponse = self.fetch(request).await?;
        Ok(response.tasks)
    }

    /// Open tasks of the default team matching a free-text query.
    pub async fn search_tasks(&mut self, query: &str) -> Result<Vec<Task>, ApiError> {
        let team_id = self.get_default_team_id().await?;
        let request = Request::get(format!("/team/{}/task", team_id))
            .query("search", query)
            .query("include_closed", false);
        let response: TasksResponse = self.fetch(request).await?;
        Ok(response.tasks)
    }

    /// Starts a timer against `task_id`.
    ///
    /// ClickUp allows a single running timer per user; whatever happens to a
    /// timer that is already running is decided by the service.
    pub async fn start_timer(&mut self, task_id: &str, description: Option<&str>) -> Result<Value, ApiError> {
        let team_id = self.get_default_team_id().await?;
        let mut body = json!({ "tid": task_id });
        if let Some(description) = description {
            body["description"] = json!(description);
        }
        let request = Request::post(format!("/team/{}/time_entries/start", team_id)).json(body);
        self.transport.send(request).await
    }

    /// Stops the running timer. Stopping with nothing running is left to ClickUp to answer.
    pub async fn stop_timer(&mut self) -> Result<Value, ApiError> {
        let team_id = self.get_default_team_id().await?;
        self.transport.send(Request::post(format!("/team/{}/time_entries/stop", team_id))).await
    }

    /// The most recent time entries, newest first.
    ///
    /// ClickUp returns entries oldest first, so they are sorted here by numeric
    /// `start` descending. Entries whose `start` does not parse sort last.
    pub async fn get_recent_time_entries(&mut self) -> Result<Vec<TimeEntry>, ApiError> {
        let team_id = self.get_default_team_id().await?;
        let request = Request::get(format!("/team/{}/time_entries", team_id)).query("limit", RECENT_ENTRIES_LIMIT);
        let response: TimeEntriesResponse = self.fetch(request).await?;
        Ok(newest_first(response.data))
    }

    /// The currently running time entry, if any.
    pub async fn get_running_timer(&mut self) -> Result<Option<TimeEntry>, ApiError> {
        let team_id = self.get_default_team_id().await?;
        let response: RunningTimerResponse = self.fetch(Request::get(format!("/team/{}/time_entries/current", team_id))).await?;
        Ok(response.data)
    }
}

fn newest_first(mut entries: Vec<TimeEntry>) -> Vec<TimeEntry> {
    entries.sort_by_key(|entry| Reverse(entry.start_millis().unwrap_or(i64::MIN)));
    entries.truncate(RECENT_ENTRIES_LIMIT);
    entries
}
