//! Command-line front-end for the taskdeck core.
//!
//! # Responsibility
//! - Validate user input and translate commands into store operations.
//! - Render the projected view; all board state lives in the core.

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use taskdeck_core::{
    default_log_level, init_logging, move_item, reconcile_visible_order, FilterPatch,
    JsonFileStorage, Priority, PriorityFilter, SortBy, StatusFilter, Task, TaskDraft, TaskStatus,
    TaskStore,
};

#[derive(Parser)]
#[command(name = "taskdeck")]
#[command(about = "A task board in your terminal")]
#[command(version)]
struct Cli {
    /// Path to the task data file (default: $TASKDECK_DATA or
    /// ~/.taskdeck/tasks.json)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new task to the end of the board
    Add {
        /// Task title
        title: String,

        /// Free-form description
        #[arg(short, long, default_value = "")]
        description: String,

        #[arg(short, long, value_enum, default_value_t = StatusArg::Todo)]
        status: StatusArg,

        #[arg(short, long, value_enum, default_value_t = PriorityArg::Medium)]
        priority: PriorityArg,
    },
    /// List tasks, optionally filtered and sorted
    List {
        #[arg(long, value_enum)]
        status: Option<StatusFilterArg>,

        #[arg(long, value_enum)]
        priority: Option<PriorityFilterArg>,

        #[arg(long, value_enum)]
        sort: Option<SortArg>,
    },
    /// Edit fields of an existing task
    Edit {
        /// Task id (or unique id prefix)
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long, value_enum)]
        status: Option<StatusArg>,

        #[arg(long, value_enum)]
        priority: Option<PriorityArg>,
    },
    /// Delete a task
    Delete {
        /// Task id (or unique id prefix)
        id: String,
    },
    /// Move a task to a new position in the current view
    Move {
        /// Task id (or unique id prefix)
        id: String,

        /// Target position in the view, starting at 1
        position: usize,

        /// View filter the positions refer to
        #[arg(long, value_enum)]
        status: Option<StatusFilterArg>,

        #[arg(long, value_enum)]
        priority: Option<PriorityFilterArg>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum StatusArg {
    Todo,
    InProgress,
    Completed,
}

impl From<StatusArg> for TaskStatus {
    fn from(value: StatusArg) -> Self {
        match value {
            StatusArg::Todo => Self::Todo,
            StatusArg::InProgress => Self::InProgress,
            StatusArg::Completed => Self::Completed,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum PriorityArg {
    Low,
    Medium,
    High,
}

impl From<PriorityArg> for Priority {
    fn from(value: PriorityArg) -> Self {
        match value {
            PriorityArg::Low => Self::Low,
            PriorityArg::Medium => Self::Medium,
            PriorityArg::High => Self::High,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum StatusFilterArg {
    All,
    Todo,
    InProgress,
    Completed,
}

impl From<StatusFilterArg> for StatusFilter {
    fn from(value: StatusFilterArg) -> Self {
        match value {
            StatusFilterArg::All => Self::All,
            StatusFilterArg::Todo => Self::Todo,
            StatusFilterArg::InProgress => Self::InProgress,
            StatusFilterArg::Completed => Self::Completed,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum PriorityFilterArg {
    All,
    Low,
    Medium,
    High,
}

impl From<PriorityFilterArg> for PriorityFilter {
    fn from(value: PriorityFilterArg) -> Self {
        match value {
            PriorityFilterArg::All => Self::All,
            PriorityFilterArg::Low => Self::Low,
            PriorityFilterArg::Medium => Self::Medium,
            PriorityFilterArg::High => Self::High,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum SortArg {
    Date,
    Priority,
}

impl From<SortArg> for SortBy {
    fn from(value: SortArg) -> Self {
        match value {
            SortArg::Date => Self::Date,
            SortArg::Priority => Self::Priority,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let data_path = resolve_data_path(cli.data)?;
    if let Some(log_dir) = data_path.parent().map(|dir| dir.join("logs")) {
        if let Some(log_dir) = log_dir.to_str() {
            // A broken log setup degrades to stderr-only; board data is
            // unaffected.
            if let Err(err) = init_logging(default_log_level(), log_dir) {
                eprintln!("warning: {err}");
            }
        }
    }

    let mut store =
        TaskStore::open(JsonFileStorage::new(&data_path)).with_context(|| {
            format!("failed to open task data at {}", data_path.display())
        })?;

    match cli.command {
        Commands::Add {
            title,
            description,
            status,
            priority,
        } => {
            let draft = TaskDraft {
                title,
                description,
                status: status.into(),
                priority: priority.into(),
            };
            draft.validate()?;
            let id = store.add_task(draft)?;
            println!("added task {id}");
        }
        Commands::List {
            status,
            priority,
            sort,
        } => {
            store.set_filter(FilterPatch {
                status: status.map(Into::into),
                priority: priority.map(Into::into),
                sort_by: sort.map(Into::into),
            });
            render_tasks(&store.visible_tasks());
        }
        Commands::Edit {
            id,
            title,
            description,
            status,
            priority,
        } => {
            let mut task = find_task(store.tasks(), &id)?.clone();
            if let Some(title) = title {
                task.title = title;
            }
            if let Some(description) = description {
                task.description = description;
            }
            if let Some(status) = status {
                task.status = status.into();
            }
            if let Some(priority) = priority {
                task.priority = priority.into();
            }
            let draft = TaskDraft {
                title: task.title.clone(),
                description: task.description.clone(),
                status: task.status,
                priority: task.priority,
            };
            draft.validate()?;
            let task_id = task.id;
            if store.update_task(task)? {
                println!("updated task {task_id}");
            } else {
                bail!("no task with id {task_id}");
            }
        }
        Commands::Delete { id } => {
            let task_id = find_task(store.tasks(), &id)?.id;
            if store.delete_task(task_id)? {
                println!("deleted task {task_id}");
            }
        }
        Commands::Move {
            id,
            position,
            status,
            priority,
        } => {
            store.set_filter(FilterPatch {
                status: status.map(Into::into),
                priority: priority.map(Into::into),
                sort_by: None,
            });
            let visible = store.visible_tasks();
            let task_id = find_task(&visible, &id)?.id;
            let from = visible
                .iter()
                .position(|task| task.id == task_id)
                .expect("task was just resolved from the visible view");
            if position == 0 || position > visible.len() {
                bail!("position must be between 1 and {}", visible.len());
            }
            let to = position - 1;

            let moved = move_item(&visible, from, to);
            let visible_order: Vec<_> = moved.iter().map(|task| task.id).collect();
            let new_order = reconcile_visible_order(store.tasks(), &visible_order)
                .ok_or_else(|| anyhow!("view is stale; rerun the command"))?;
            store.reorder_tasks(new_order)?;
            println!("moved task {task_id} to position {position}");
        }
    }

    Ok(())
}

fn resolve_data_path(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = flag {
        return Ok(path);
    }
    if let Some(path) = std::env::var_os("TASKDECK_DATA") {
        return Ok(PathBuf::from(path));
    }
    let home = std::env::var_os("HOME")
        .ok_or_else(|| anyhow!("cannot resolve data path: HOME is not set; pass --data"))?;
    Ok(PathBuf::from(home).join(".taskdeck").join("tasks.json"))
}

/// Resolves a full id or a unique id prefix against the given tasks.
fn find_task<'a>(tasks: &'a [Task], needle: &str) -> Result<&'a Task> {
    let needle = needle.trim().to_ascii_lowercase();
    if needle.is_empty() {
        bail!("task id must not be empty");
    }

    let mut matches = tasks
        .iter()
        .filter(|task| task.id.to_string().starts_with(&needle));
    let first = matches
        .next()
        .ok_or_else(|| anyhow!("no task with id {needle}"))?;
    if matches.next().is_some() {
        bail!("id prefix {needle} is ambiguous");
    }
    Ok(first)
}

fn render_tasks(tasks: &[Task]) {
    if tasks.is_empty() {
        println!("no tasks found");
        return;
    }

    println!(
        "{:<10} {:<12} {:<8} {:<17} TITLE",
        "ID", "STATUS", "PRIORITY", "CREATED"
    );
    for task in tasks {
        let id = task.id.to_string();
        println!(
            "{:<10} {:<12} {:<8} {:<17} {}",
            &id[..8],
            status_label(task.status),
            priority_label(task.priority),
            task.created_at.format("%Y-%m-%d %H:%M"),
            task.title
        );
        if !task.description.is_empty() {
            println!("{:<50} {}", "", task.description);
        }
    }
}

fn status_label(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Todo => "todo",
        TaskStatus::InProgress => "in-progress",
        TaskStatus::Completed => "completed",
    }
}

fn priority_label(priority: Priority) -> &'static str {
    match priority {
        Priority::Low => "low",
        Priority::Medium => "medium",
        Priority::High => "high",
    }
}
