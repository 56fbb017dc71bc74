#![allow(dead_code)]

use clk::api::{ApiError, ClickUp, Request, Transport};
use reqwest::Method;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Mutex;

pub const TEAM_ID: &str = "9001";
pub const USER_ID: u64 = 42;

type Reply = Result<Value, (u16, String)>;

/// Transport answering from canned JSON per method and endpoint, recording every request.
#[derive(Debug, Default)]
pub struct MockTransport {
    routes: HashMap<(Method, String), Reply>,
    requests: Mutex<Vec<Request>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// A mock that already knows the user and a single default team.
    pub fn with_team() -> Self {
        Self::new()
            .on(Method::GET, "/team", teams_json(&[TEAM_ID]))
            .on(Method::GET, "/user", user_json())
    }

    pub fn on(mut self, method: Method, endpoint: &str, body: Value) -> Self {
        self.routes.insert((method, endpoint.to_string()), Ok(body));
        self
    }

    pub fn fail(mut self, method: Method, endpoint: &str, status: u16, body: &str) -> Self {
        self.routes.insert((method, endpoint.to_string()), Err((status, body.to_string())));
        self
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }

    pub fn count(&self, method: Method, endpoint: &str) -> usize {
        self.requests().iter().filter(|r| r.method == method && r.endpoint == endpoint).count()
    }

    pub fn last(&self, method: Method, endpoint: &str) -> Option<Request> {
        self.requests().into_iter().rev().find(|r| r.method == method && r.endpoint == endpoint)
    }
}

impl Transport for MockTransport {
    async fn send(&self, request: Request) -> Result<Value, ApiError> {
        self.requests.lock().unwrap().push(request.clone());
        match self.routes.get(&(request.method.clone(), request.endpoint.clone())) {
            Some(Ok(body)) => Ok(body.clone()),
            Some(Err((status, body))) => Err(ApiError::Status {
                status: *status,
                body: body.clone(),
            }),
            None => Err(ApiError::Status {
                status: 404,
                body: format!("no route for {} {}", request.method, request.endpoint),
            }),
        }
    }
}

pub fn client(transport: MockTransport) -> ClickUp<MockTransport> {
    ClickUp::with_transport(transport)
}

pub fn tasks_endpoint() -> String {
    format!("/team/{}/task", TEAM_ID)
}

pub fn entries_endpoint(suffix: &str) -> String {
    format!("/team/{}/time_entries{}", TEAM_ID, suffix)
}

pub fn user_json() -> Value {
    json!({
        "user": {
            "id": USER_ID,
            "username": "jdoe",
            "email": "jdoe@example.com",
            "color": "#7b68ee",
            "profilePicture": null
        }
    })
}

pub fn teams_json(ids: &[&str]) -> Value {
    let teams: Vec<Value> = ids
        .iter()
        .map(|id| {
            json!({
                "id": id,
                "name": format!("Team {}", id),
                "color": "#536cfe",
                "avatar": null,
                "members": [
                    { "user": { "id": USER_ID, "username": "jdoe", "email": "jdoe@example.com", "color": null } },
                    { "user": { "id": 7, "username": null, "email": "invite@example.com", "color": null } }
                ]
            })
        })
        .collect();
    json!({ "teams": teams })
}

pub fn task_json(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "status": { "status": "in progress", "color": "#4194f6", "type": "custom" },
        "url": format!("https://app.clickup.com/t/{}", id)
    })
}

pub fn tasks_json(tasks: &[(&str, &str)]) -> Value {
    let tasks: Vec<Value> = tasks.iter().map(|(id, name)| task_json(id, name)).collect();
    json!({ "tasks": tasks })
}

/// Time entries embed a task without `url`; the link comes as `task_url`.
pub fn entry_json(id: &str, task_id: &str, start: i64, end: Option<i64>) -> Value {
    json!({
        "id": id,
        "task": {
            "id": task_id,
            "name": format!("Task {}", task_id),
            "status": { "status": "open" }
        },
        "start": start.to_string(),
        "end": end.map(|end| end.to_string()),
        "duration": match end {
            Some(end) => (end - start).to_string(),
            None => (-start).to_string(),
        },
        "description": "",
        "task_url": format!("https://app.clickup.com/t/{}", task_id)
    })
}

pub fn entries_json(entries: Vec<Value>) -> Value {
    json!({ "data": entries })
}
