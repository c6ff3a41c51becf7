//! Project commands

use pmcli::api::ApiClient;
use pmcli::auth::TokenStore;
use pmcli::models::{CreateProjectRequest, Project, ProjectStatus};
use pmcli::output::{OutputMode, ProjectRow};
use pmcli::services::ProjectService;

use crate::cli::app::ProjectAction;

use super::parse_date_opt;

/// Handle project subcommands
pub async fn project_cmd(action: ProjectAction, mode: OutputMode) -> anyhow::Result<()> {
    let client = ApiClient::new(TokenStore::new());
    let projects = ProjectService::new(&client);

    match action {
        ProjectAction::List {
            status,
            manager,
            member,
        } => list(projects, status.as_deref(), manager, member, mode).await,
        ProjectAction::Get { id } => get(projects, id, mode).await,
        ProjectAction::Create {
            name,
            description,
            start,
            target_end,
            actual_end,
            status,
            estimated_hours,
            actual_hours,
            manager,
            member,
        } => {
            let request = draft(
                name,
                description,
                start.as_deref(),
                target_end.as_deref(),
                actual_end.as_deref(),
                &status,
                estimated_hours,
                actual_hours,
                manager,
                member,
            )?;
            let project = projects.create(&request).await?;
            report(&project, "Created", mode)
        },
        ProjectAction::Update {
            id,
            name,
            description,
            start,
            target_end,
            actual_end,
            status,
            estimated_hours,
            actual_hours,
            manager,
            member,
        } => {
            let request = draft(
                name,
                description,
                start.as_deref(),
                target_end.as_deref(),
                actual_end.as_deref(),
                &status,
                estimated_hours,
                actual_hours,
                manager,
                member,
            )?;
            let project = projects.update(id, &request).await?;
            report(&project, "Updated", mode)
        },
        ProjectAction::SetStatus { id, status } => {
            let status = parse_status(&status)?;
            let project = projects.update_status(id, status).await?;
            report(&project, "Updated", mode)
        },
        ProjectAction::AddMember { id, user_id } => {
            let project = projects.add_team_member(id, user_id).await?;
            team(&project, mode)
        },
        ProjectAction::RemoveMember { id, user_id } => {
            let project = projects.remove_team_member(id, user_id).await?;
            team(&project, mode)
        },
        ProjectAction::Delete { id } => {
            projects.delete(id).await?;
            if mode == OutputMode::Json {
                println!("{}", serde_json::json!({ "success": true, "id": id }));
            } else {
                println!("Deleted project #{id}");
            }
            Ok(())
        },
    }
}

fn parse_status(s: &str) -> anyhow::Result<ProjectStatus> {
    s.parse().map_err(|err: String| anyhow::anyhow!(err))
}

#[allow(clippy::too_many_arguments)]
fn draft(
    name: String,
    description: Option<String>,
    start: Option<&str>,
    target_end: Option<&str>,
    actual_end: Option<&str>,
    status: &str,
    estimated_hours: Option<i32>,
    actual_hours: Option<i32>,
    manager: i64,
    members: Vec<i64>,
) -> anyhow::Result<CreateProjectRequest> {
    Ok(CreateProjectRequest {
        name,
        description,
        start_date: parse_date_opt(start)?,
        target_end_date: parse_date_opt(target_end)?,
        actual_end_date: parse_date_opt(actual_end)?,
        status: parse_status(status)?,
        estimated_effort_hours: estimated_hours,
        actual_effort_hours: actual_hours,
        project_manager_id: manager,
        team_member_ids: members,
    })
}

async fn list(
    projects: ProjectService<'_>,
    status: Option<&str>,
    manager: Option<i64>,
    member: Option<i64>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let fetched = if let Some(status) = status {
        projects.get_by_status(parse_status(status)?).await?
    } else if let Some(manager_id) = manager {
        projects.get_by_manager(manager_id).await?
    } else if let Some(user_id) = member {
        projects.get_by_team_member(user_id).await?
    } else {
        projects.get_all().await?
    };

    if mode == OutputMode::Json {
        let rows: Vec<ProjectRow> = fetched.iter().map(ProjectRow::from).collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if fetched.is_empty() {
        println!("No projects.");
        return Ok(());
    }
    for project in &fetched {
        println!(
            "#{:<4} {:<12} {:<32} manager: {} ({} members)",
            project.id,
            project.status,
            project.name,
            project.project_manager.username,
            project.team_members.len()
        );
    }
    Ok(())
}

async fn get(projects: ProjectService<'_>, id: i64, mode: OutputMode) -> anyhow::Result<()> {
    let project = projects.get_by_id(id).await?;

    if mode == OutputMode::Json {
        println!("{}", serde_json::to_string_pretty(&project)?);
        return Ok(());
    }

    println!("Project #{}: {}", project.id, project.name);
    if let Some(description) = &project.description {
        println!("  Description: {description}");
    }
    println!("  Status:      {}", project.status);
    if let Some(start) = project.start_date {
        println!("  Start:       {start}");
    }
    if let Some(target) = project.target_end_date {
        println!("  Target end:  {target}");
    }
    if let Some(actual) = project.actual_end_date {
        println!("  Actual end:  {actual}");
    }
    if let Some(hours) = project.estimated_effort_hours {
        println!("  Estimated:   {hours}h");
    }
    if let Some(hours) = project.actual_effort_hours {
        println!("  Actual:      {hours}h");
    }
    println!("  Manager:     {}", project.project_manager.username);
    if !project.team_members.is_empty() {
        println!("  Team:");
        for user in &project.team_members {
            println!("    #{:<4} {}", user.id, user.username);
        }
    }
    Ok(())
}

fn report(project: &Project, verb: &str, mode: OutputMode) -> anyhow::Result<()> {
    if mode == OutputMode::Json {
        println!("{}", serde_json::to_string_pretty(project)?);
    } else {
        println!("{verb} project #{}: {}", project.id, project.name);
    }
    Ok(())
}

fn team(project: &Project, mode: OutputMode) -> anyhow::Result<()> {
    if mode == OutputMode::Json {
        println!("{}", serde_json::to_string_pretty(project)?);
        return Ok(());
    }

    println!("Project #{}: {} team:", project.id, project.name);
    if project.team_members.is_empty() {
        println!("  (empty)");
    }
    for user in &project.team_members {
        println!("  #{:<4} {}", user.id, user.username);
    }
    Ok(())
}
