//! Task commands
//!
//! `task list` is the one place with client-side behavior: after the fetch,
//! `--filter-status` and `--search` narrow the list locally instead of going
//! back to the server.

use pmcli::api::ApiClient;
use pmcli::auth::TokenStore;
use pmcli::filter::filter_tasks;
use pmcli::models::{CreateTaskRequest, Task, TaskPriority, TaskStatus};
use pmcli::output::{OutputMode, TaskRow, priority_colored, task_status_colored};
use pmcli::services::TaskService;

use crate::cli::app::TaskAction;

use super::parse_date;

/// Handle task subcommands
pub async fn task_cmd(action: TaskAction, mode: OutputMode) -> anyhow::Result<()> {
    let client = ApiClient::new(TokenStore::new());
    let tasks = TaskService::new(&client);

    match action {
        TaskAction::List {
            project,
            assignee,
            status,
            overdue,
            subtasks_of,
            from,
            to,
            filter_status,
            search,
        } => {
            let query = ListQuery {
                project,
                assignee,
                status: parse_status_opt(status.as_deref())?,
                overdue,
                subtasks_of,
                from: from.as_deref().map(parse_date).transpose()?,
                to: to.as_deref().map(parse_date).transpose()?,
            };
            let fetched = fetch(tasks, &query).await?;
            let narrowed = filter_tasks(
                &fetched,
                parse_status_opt(filter_status.as_deref())?,
                search.as_deref(),
            );
            render_list(&narrowed, mode)
        },
        TaskAction::Get { id } => get(tasks, id, mode).await,
        TaskAction::Create {
            title,
            description,
            status,
            priority,
            due,
            estimated_hours,
            project,
            assignee,
            parent,
        } => {
            let request = CreateTaskRequest {
                title,
                description,
                status: parse_status(&status)?,
                priority: parse_priority(&priority)?,
                due_date: parse_date(&due)?,
                estimated_hours,
                project_id: project,
                assignee_id: assignee,
                parent_task_id: parent,
            };
            let task = tasks.create(&request).await?;
            report(&task, "Created", mode)
        },
        TaskAction::Update {
            id,
            title,
            description,
            status,
            priority,
            due,
            estimated_hours,
            project,
            assignee,
            parent,
        } => {
            let request = CreateTaskRequest {
                title,
                description,
                status: parse_status(&status)?,
                priority: parse_priority(&priority)?,
                due_date: parse_date(&due)?,
                estimated_hours,
                project_id: project,
                assignee_id: assignee,
                parent_task_id: parent,
            };
            let task = tasks.update(id, &request).await?;
            report(&task, "Updated", mode)
        },
        TaskAction::SetStatus { id, status } => {
            let task = tasks.update_status(id, parse_status(&status)?).await?;
            report(&task, "Updated", mode)
        },
        TaskAction::Assign { id, user_id } => {
            let task = tasks.assign(id, user_id).await?;
            if mode == OutputMode::Json {
                println!("{}", serde_json::to_string_pretty(&task)?);
            } else {
                let assignee = task
                    .assignee
                    .as_ref()
                    .map_or_else(|| user_id.to_string(), |u| u.username.clone());
                println!("Assigned task #{} to {assignee}", task.id);
            }
            Ok(())
        },
        TaskAction::Delete { id } => {
            tasks.delete(id).await?;
            if mode == OutputMode::Json {
                println!("{}", serde_json::json!({ "success": true, "id": id }));
            } else {
                println!("Deleted task #{id}");
            }
            Ok(())
        },
    }
}

struct ListQuery {
    project: Option<i64>,
    assignee: Option<i64>,
    status: Option<TaskStatus>,
    overdue: bool,
    subtasks_of: Option<i64>,
    from: Option<chrono::NaiveDate>,
    to: Option<chrono::NaiveDate>,
}

/// Pick the one server-side read matching the query flags
async fn fetch(tasks: TaskService<'_>, query: &ListQuery) -> anyhow::Result<Vec<Task>> {
    if query.overdue {
        return Ok(tasks.get_overdue().await?);
    }
    if let Some(parent) = query.subtasks_of {
        return Ok(tasks.get_subtasks(parent).await?);
    }
    if let (Some(from), Some(to)) = (query.from, query.to) {
        let project = query
            .project
            .ok_or_else(|| anyhow::anyhow!("--from/--to require --project"))?;
        return Ok(tasks.get_by_project_and_date_range(project, from, to).await?);
    }
    if let Some(project_id) = query.project {
        return Ok(match query.status {
            Some(status) => tasks.get_by_project_and_status(project_id, status).await?,
            None => tasks.get_by_project(project_id).await?,
        });
    }
    if let Some(assignee_id) = query.assignee {
        return Ok(match query.status {
            Some(status) => tasks.get_by_assignee_and_status(assignee_id, status).await?,
            None => tasks.get_by_assignee(assignee_id).await?,
        });
    }
    if query.status.is_some() {
        anyhow::bail!("--status requires --project or --assignee");
    }
    Ok(tasks.get_all().await?)
}

fn parse_status(s: &str) -> anyhow::Result<TaskStatus> {
    s.parse().map_err(|err: String| anyhow::anyhow!(err))
}

fn parse_status_opt(s: Option<&str>) -> anyhow::Result<Option<TaskStatus>> {
    s.map(parse_status).transpose()
}

fn parse_priority(s: &str) -> anyhow::Result<TaskPriority> {
    s.parse().map_err(|err: String| anyhow::anyhow!(err))
}

fn render_list(tasks: &[Task], mode: OutputMode) -> anyhow::Result<()> {
    if mode == OutputMode::Json {
        let rows: Vec<TaskRow> = tasks.iter().map(TaskRow::from).collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if tasks.is_empty() {
        println!("No tasks.");
        return Ok(());
    }
    for task in tasks {
        println!(
            "#{:<4} {:<12} {:<8} {}  (due {})",
            task.id,
            task_status_colored(task.status),
            priority_colored(task.priority),
            task.title,
            task.due_date
        );
    }
    Ok(())
}

async fn get(tasks: TaskService<'_>, id: i64, mode: OutputMode) -> anyhow::Result<()> {
    let task = tasks.get_by_id(id).await?;

    if mode == OutputMode::Json {
        println!("{}", serde_json::to_string_pretty(&task)?);
        return Ok(());
    }

    println!("Task #{}: {}", task.id, task.title);
    if let Some(description) = &task.description {
        println!("  Description: {description}");
    }
    println!("  Status:      {}", task_status_colored(task.status));
    println!("  Priority:    {}", priority_colored(task.priority));
    println!("  Due:         {}", task.due_date);
    if let Some(hours) = task.estimated_hours {
        println!("  Estimated:   {hours}h");
    }
    if let Some(hours) = task.actual_hours {
        println!("  Actual:      {hours}h");
    }
    println!("  Project:     #{}", task.project_id);
    if let Some(assignee) = &task.assignee {
        println!("  Assignee:    {}", assignee.username);
    }
    if let Some(parent) = task.parent_task_id {
        println!("  Parent:      #{parent}");
    }
    Ok(())
}

fn report(task: &Task, verb: &str, mode: OutputMode) -> anyhow::Result<()> {
    if mode == OutputMode::Json {
        println!("{}", serde_json::to_string_pretty(task)?);
    } else {
        println!("{verb} task #{}: {}", task.id, task.title);
        println!("  Status:   {}", task_status_colored(task.status));
        println!("  Priority: {}", priority_colored(task.priority));
        println!("  Due:      {}", task.due_date);
    }
    Ok(())
}
