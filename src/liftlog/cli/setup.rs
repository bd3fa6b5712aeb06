use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "liftlog", bin_name = "liftlog", version)]
#[command(about = "Log your workouts in a single Markdown file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Log file to use (default: workout_log.md, or `document` in liftlog.json)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 管理可用动作 (Manage available actions)
    #[command(subcommand)]
    Action(ActionCommands),

    /// 记录一次训练 (Record a workout session)
    Record {
        /// 动作名称 (Name of the action, matched case-insensitively by substring)
        action: String,

        /// 每组次数 (Repetitions per set)
        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        reps: u32,

        /// 重量 (Weight in KG)
        #[arg(value_parser = parse_weight)]
        weight: f64,

        /// 组数 (Number of sets)
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
        sets: Option<u32>,
    },

    /// 显示所有历史训练记录 (Show all historical workout logs)
    History {
        /// Only show actions containing this text
        #[arg(short, long)]
        action: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },
}

#[derive(Subcommand, Debug)]
pub enum ActionCommands {
    /// 显示所有可用动作 (Show all available actions)
    Show,

    /// 添加一个新动作 (Add a new action)
    Add {
        /// 要添加的动作名称 (The name of the action to add)
        name: String,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

fn parse_weight(s: &str) -> Result<f64, String> {
    let weight: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a number", s))?;
    if !weight.is_finite() || weight < 0.0 {
        return Err(format!("weight must be a non-negative number, got {}", s));
    }
    // `-0` passes the sign check but would be written as `-0.0`.
    Ok(if weight == 0.0 { 0.0 } else { weight })
}
