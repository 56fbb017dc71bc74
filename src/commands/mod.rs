pub mod back;
pub mod meetings;
pub mod recent;
pub mod status;
pub mod stop;
pub mod switch;
pub mod tasks;
pub mod whoami;

use crate::api::ClickUp;
use crate::libs::config::Config;
use crate::msg_debug;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Show current running timer")]
    Status,
    #[command(about = "Switch timer to the 'Meetings' task")]
    Meetings(meetings::MeetingsArgs),
    #[command(about = "List tasks assigned to me")]
    Tasks,
    #[command(about = "Switch to a task by ID", arg_required_else_help = true)]
    Switch(switch::SwitchArgs),
    #[command(about = "Switch to the previous task (most recent time entry before current)")]
    Back,
    #[command(about = "Stop the current timer")]
    Stop,
    #[command(about = "Show recent time entries")]
    Recent,
    #[command(about = "Show the current user and default team")]
    Whoami,
}

#[derive(Debug, Parser)]
#[command(name = "clk", author, version, about = "ClickUp helper CLI", long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[arg(long, global = true, value_name = "PATH", help = "Read CLICKUP_* variables from this file instead of .env")]
    env_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        Self::parse().run().await
    }

    pub async fn run(self) -> Result<()> {
        let config = Config::load(self.env_file.as_deref())?;
        msg_debug!(format!("Using ClickUp API at {}", config.api_url));
        let mut client = ClickUp::new(&config);

        match self.command {
            Commands::Status => status::cmd(&mut client).await,
            Commands::Meetings(args) => meetings::cmd(&mut client, args).await,
            Commands::Tasks => tasks::cmd(&mut client).await,
            Commands::Switch(args) => switch::cmd(&mut client, args).await,
            Commands::Back => back::cmd(&mut client).await,
            Commands::Stop => stop::cmd(&mut client).await,
            Commands::Recent => recent::cmd(&mut client).await,
            Commands::Whoami => whoami::cmd(&mut client).await,
        }
    }
}
