#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // === TIMER MESSAGES ===
    CurrentlyTracking { name: String, url: String },
    TimerDuration(i64),
    NoActiveTimer,
    TimerStartedFor(String),
    TimerStarted,
    TimerStopped,

    // === TASK MESSAGES ===
    SearchingTask(String),
    TaskFound { name: String, id: String },
    NoTaskNamed(String),
    NoTaskForQuery(String),
    NoAssignedTasks,
    AssignedTasksHeader,

    // === SWITCH MESSAGES ===
    SwitchingBack { name: String, id: String },
    NoPreviousTask,

    // === HISTORY MESSAGES ===
    RecentEntriesHeader,
    NoRecentEntries,

    // === IDENTITY MESSAGES ===
    SignedInAs { username: String, email: String },
    DefaultTeam { name: String, id: String },
    TeamCount(usize),
    NoTeamsForKey,

    // === ERROR MESSAGES ===
    CommandFailed(String),
}
