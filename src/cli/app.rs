//! CLI definitions and entry point

use clap::{Parser, Subcommand};

use super::commands;
use pmcli::config::GlobalConfig;
use pmcli::output::OutputMode;

/// pmcli - manage users, projects and tasks from the terminal
#[derive(Parser, Debug)]
#[command(
    name = "pmcli",
    version,
    about = "A CLI client for a project management REST service",
    long_about = "Browse and mutate users, projects and tasks against the backend API.\n\n\
                  Authentication uses a bearer token stored locally; obtain one from\n\
                  your login flow and register it with 'pmcli auth token <TOKEN>'."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage users
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Manage projects
    Project {
        #[command(subcommand)]
        action: ProjectAction,
    },

    /// Manage tasks
    Task {
        #[command(subcommand)]
        action: TaskAction,
    },

    /// Manage the stored bearer token
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },

    /// Show version
    Version,
}

#[derive(Subcommand, Debug)]
pub enum UserAction {
    /// List all users
    List,

    /// Show a user
    Get {
        /// User id
        id: i64,
    },

    /// Create a user
    Create {
        /// Login name
        #[arg(long)]
        username: String,

        /// First name
        #[arg(long)]
        first_name: String,

        /// Last name
        #[arg(long)]
        last_name: String,

        /// Email address
        #[arg(long)]
        email: String,

        /// Role: ADMIN, PROJECT_MANAGER, DEVELOPER, TESTER
        #[arg(long, default_value = "DEVELOPER")]
        role: String,

        /// Create the account deactivated
        #[arg(long)]
        inactive: bool,
    },

    /// Replace a user
    Update {
        /// User id
        id: i64,

        /// Login name
        #[arg(long)]
        username: String,

        /// First name
        #[arg(long)]
        first_name: String,

        /// Last name
        #[arg(long)]
        last_name: String,

        /// Email address
        #[arg(long)]
        email: String,

        /// Role: ADMIN, PROJECT_MANAGER, DEVELOPER, TESTER
        #[arg(long, default_value = "DEVELOPER")]
        role: String,

        /// Deactivate the account
        #[arg(long)]
        inactive: bool,
    },

    /// Delete a user
    Delete {
        /// User id
        id: i64,
    },
}

#[derive(Subcommand, Debug)]
pub enum ProjectAction {
    /// List projects, optionally narrowed by one server-side filter
    List {
        /// Only projects in this status
        #[arg(long, conflicts_with_all = ["manager", "member"])]
        status: Option<String>,

        /// Only projects managed by this user
        #[arg(long, conflicts_with = "member")]
        manager: Option<i64>,

        /// Only projects this user is a team member of
        #[arg(long)]
        member: Option<i64>,
    },

    /// Show a project
    Get {
        /// Project id
        id: i64,
    },

    /// Create a project
    Create {
        /// Project name
        #[arg(long)]
        name: String,

        /// Description
        #[arg(long)]
        description: Option<String>,

        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        start: Option<String>,

        /// Planned end date (YYYY-MM-DD)
        #[arg(long)]
        target_end: Option<String>,

        /// Actual end date (YYYY-MM-DD)
        #[arg(long)]
        actual_end: Option<String>,

        /// Status: planning, in_progress, on_hold, completed, cancelled
        #[arg(long, default_value = "planning")]
        status: String,

        /// Planned effort in hours
        #[arg(long)]
        estimated_hours: Option<i32>,

        /// Actual effort in hours
        #[arg(long)]
        actual_hours: Option<i32>,

        /// Project manager user id
        #[arg(long)]
        manager: i64,

        /// Team member user id (repeatable)
        #[arg(long)]
        member: Vec<i64>,
    },

    /// Replace a project
    Update {
        /// Project id
        id: i64,

        /// Project name
        #[arg(long)]
        name: String,

        /// Description
        #[arg(long)]
        description: Option<String>,

        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        start: Option<String>,

        /// Planned end date (YYYY-MM-DD)
        #[arg(long)]
        target_end: Option<String>,

        /// Actual end date (YYYY-MM-DD)
        #[arg(long)]
        actual_end: Option<String>,

        /// Status: planning, in_progress, on_hold, completed, cancelled
        #[arg(long, default_value = "planning")]
        status: String,

        /// Planned effort in hours
        #[arg(long)]
        estimated_hours: Option<i32>,

        /// Actual effort in hours
        #[arg(long)]
        actual_hours: Option<i32>,

        /// Project manager user id
        #[arg(long)]
        manager: i64,

        /// Team member user id (repeatable)
        #[arg(long)]
        member: Vec<i64>,
    },

    /// Move a project to a new status
    SetStatus {
        /// Project id
        id: i64,

        /// New status
        status: String,
    },

    /// Add a user to the project team
    AddMember {
        /// Project id
        id: i64,

        /// User id
        user_id: i64,
    },

    /// Remove a user from the project team
    RemoveMember {
        /// Project id
        id: i64,

        /// User id
        user_id: i64,
    },

    /// Delete a project
    Delete {
        /// Project id
        id: i64,
    },
}

#[derive(Subcommand, Debug)]
pub enum TaskAction {
    /// List tasks, optionally narrowed server-side and filtered client-side
    List {
        /// Only tasks of this project
        #[arg(long, conflicts_with = "assignee")]
        project: Option<i64>,

        /// Only tasks assigned to this user
        #[arg(long)]
        assignee: Option<i64>,

        /// Server-side status filter (combined with --project or --assignee)
        #[arg(long)]
        status: Option<String>,

        /// Only tasks whose due date has passed
        #[arg(long, conflicts_with_all = ["project", "assignee", "status"])]
        overdue: bool,

        /// Only subtasks of this task
        #[arg(long, conflicts_with_all = ["project", "assignee", "status", "overdue"])]
        subtasks_of: Option<i64>,

        /// Range start (YYYY-MM-DD, with --to and --project)
        #[arg(long, requires = "to")]
        from: Option<String>,

        /// Range end (YYYY-MM-DD, with --from and --project)
        #[arg(long, requires = "from")]
        to: Option<String>,

        /// Client-side status filter applied after the fetch
        #[arg(long)]
        filter_status: Option<String>,

        /// Client-side search over title and description (case-insensitive)
        #[arg(long)]
        search: Option<String>,
    },

    /// Show a task
    Get {
        /// Task id
        id: i64,
    },

    /// Create a task
    Create {
        /// Short summary
        #[arg(long)]
        title: String,

        /// Description
        #[arg(long)]
        description: Option<String>,

        /// Status: backlog, todo, in_progress, review, done, cancelled
        #[arg(long, default_value = "backlog")]
        status: String,

        /// Priority: low, medium, high, critical
        #[arg(long, default_value = "medium")]
        priority: String,

        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: String,

        /// Estimated effort in hours
        #[arg(long)]
        estimated_hours: Option<i32>,

        /// Owning project id
        #[arg(long)]
        project: i64,

        /// Assignee user id
        #[arg(long)]
        assignee: Option<i64>,

        /// Parent task id (makes this a subtask)
        #[arg(long)]
        parent: Option<i64>,
    },

    /// Replace a task
    Update {
        /// Task id
        id: i64,

        /// Short summary
        #[arg(long)]
        title: String,

        /// Description
        #[arg(long)]
        description: Option<String>,

        /// Status: backlog, todo, in_progress, review, done, cancelled
        #[arg(long, default_value = "backlog")]
        status: String,

        /// Priority: low, medium, high, critical
        #[arg(long, default_value = "medium")]
        priority: String,

        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: String,

        /// Estimated effort in hours
        #[arg(long)]
        estimated_hours: Option<i32>,

        /// Owning project id
        #[arg(long)]
        project: i64,

        /// Assignee user id
        #[arg(long)]
        assignee: Option<i64>,

        /// Parent task id
        #[arg(long)]
        parent: Option<i64>,
    },

    /// Move a task to a new status
    SetStatus {
        /// Task id
        id: i64,

        /// New status
        status: String,
    },

    /// Assign a task to a user
    Assign {
        /// Task id
        id: i64,

        /// Assignee user id
        user_id: i64,
    },

    /// Delete a task
    Delete {
        /// Task id
        id: i64,
    },
}

#[derive(Subcommand, Debug)]
pub enum AuthAction {
    /// Store a bearer token obtained from an external login flow
    Token {
        /// The token value
        token: String,
    },

    /// Show whether a token is stored
    Show,

    /// Clear the stored token
    Clear,
}

/// Parse arguments and dispatch to the matching command
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let config = GlobalConfig::load();
    let output_mode = if cli.json || config.ui.format == "json" {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::User { action }) => commands::user_cmd(action, output_mode).await,
        Some(Command::Project { action }) => commands::project_cmd(action, output_mode).await,
        Some(Command::Task { action }) => commands::task_cmd(action, output_mode).await,
        Some(Command::Auth { action }) => commands::auth_cmd(action, output_mode).await,
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("pmcli v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("pmcli v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'pmcli --help' for usage");
                println!("Run 'pmcli auth token <TOKEN>' to store your session token");
            }
            Ok(())
        },
    }
}
