use super::formatter::{format_entry_duration, format_timestamp};
use crate::api::{Task, TimeEntry};
use crate::msg_print;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// One line per task: `id - name [STATUS]`.
    pub fn task_line(task: &Task) -> String {
        format!("{} - {} [{}]", task.id, task.name, task.status.status.to_uppercase())
    }

    pub fn tasks(tasks: &[Task]) {
        for task in tasks {
            msg_print!(Self::task_line(task));
        }
    }

    pub fn time_entries_table(entries: &[TimeEntry]) -> Table {
        let mut table = Table::new();

        table.add_row(row!["TASK ID", "TASK", "START", "DURATION"]);
        for entry in entries {
            let start = entry.start_millis().map(format_timestamp).unwrap_or_else(|| "-".to_string());
            table.add_row(row![entry.task.id, entry.task.name, start, format_entry_duration(entry)]);
        }

        table
    }

    pub fn time_entries(entries: &[TimeEntry]) {
        Self::time_entries_table(entries).printstd();
    }
}
