//! Team command implementation

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::Args;
use serde_json::json;
use teambook_core::commands::{util, CommandError, RemoveFromTeam};
use teambook_core::{Index, Team};

use crate::util::index_from_arg;
use crate::util::state::{load_model, persist_model};

/// Manage teams and team membership
#[derive(Args, Debug)]
pub struct TeamArgs {
    /// Subcommand (defaults to listing teams)
    #[command(subcommand)]
    command: Option<TeamCommand>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(clap::Subcommand, Debug)]
pub enum TeamCommand {
    /// Create an empty team
    Create(CreateArgs),

    /// Assign displayed persons to a team
    Add(AddArgs),

    /// Remove displayed persons from their current teams
    Remove(RemoveArgs),
}

/// Create an empty team
#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Team name (unique)
    name: String,
}

/// Assign displayed persons to a team
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Team name
    team: String,

    /// 1-based indices of the persons to assign
    #[arg(required = true, value_parser = clap::value_parser!(u64).range(1..))]
    indices: Vec<u64>,
}

/// Remove displayed persons from their current teams
#[derive(Args, Debug)]
pub struct RemoveArgs {
    /// 1-based indices of the persons to remove
    #[arg(required = true, value_parser = clap::value_parser!(u64).range(1..))]
    indices: Vec<u64>,
}

/// Execute the team command
pub fn execute(args: TeamArgs) -> Result<()> {
    if let Some(command) = args.command {
        return match command {
            TeamCommand::Create(create_args) => create(create_args),
            TeamCommand::Add(add_args) => add(add_args),
            TeamCommand::Remove(remove_args) => remove(remove_args),
        };
    }

    list(args.json)
}

fn list(as_json: bool) -> Result<()> {
    let (model, _path) = load_model()?;
    let mut teams: Vec<&Team> = model.teams().iter().collect();
    teams.sort_by(|a, b| a.name.cmp(&b.name));

    if as_json {
        let output = json!({
            "teams": teams.iter().map(|t| json!({
                "name": t.name,
                "memberCount": t.members.len(),
                "createdAt": t.created_at,
            })).collect::<Vec<_>>()
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if teams.is_empty() {
        println!("No teams found");
    } else {
        println!("Teams:");
        for team in &teams {
            let age = format_age(team.created_at);
            let name = &team.name;
            let count = team.members.len();
            println!("  {name:20}  {count} members    Created {age}");
        }
    }

    Ok(())
}

fn create(args: CreateArgs) -> Result<()> {
    if Team::is_none_name(&args.name) {
        anyhow::bail!("'{}' is reserved for unassigned persons", Team::NONE);
    }

    let (mut model, path) = load_model()?;
    if model.contains_team(&args.name) {
        return Err(CommandError::DuplicateTeam { team: args.name }.into());
    }

    let now_ms = Utc::now().timestamp_millis() as u64;
    model.add_team(Team::new(args.name.clone(), now_ms));
    persist_model(&model, &path)?;

    println!("New team created: {}", args.name);
    Ok(())
}

fn add(args: AddArgs) -> Result<()> {
    let (mut model, path) = load_model()?;

    if !model.contains_team(&args.team) {
        anyhow::bail!(
            "Team '{}' not found; create it with 'tbook team create'",
            args.team
        );
    }

    // Resolve the whole batch before assigning anyone
    let mut targets = Vec::with_capacity(args.indices.len());
    for &raw in &args.indices {
        let person = util::target_person(&model, index_from_arg(raw))?;
        if !person.is_unassigned() {
            return Err(CommandError::AlreadyInTeam {
                person: person.email.clone(),
                team: person.team_name.clone(),
            }
            .into());
        }
        targets.push(person);
    }

    let mut lines = Vec::with_capacity(targets.len());
    for person in targets {
        let updated = person.with_team(&args.team);
        model.set_person(&person, updated.clone());
        model.add_person_to_team(&updated, &args.team);
        lines.push(format!("Person {updated} added to team {}", args.team));
    }
    persist_model(&model, &path)?;

    println!("{}", lines.join("\n"));
    Ok(())
}

fn remove(args: RemoveArgs) -> Result<()> {
    let (mut model, path) = load_model()?;

    let indices: Vec<Index> = args.indices.iter().map(|&raw| index_from_arg(raw)).collect();
    let result = RemoveFromTeam::new(indices).execute(&mut model)?;
    persist_model(&model, &path)?;

    println!("{}", result.feedback);
    Ok(())
}

/// Format age as human-readable string (e.g., "2 days ago")
fn format_age(timestamp_ms: u64) -> String {
    let created = DateTime::from_timestamp((timestamp_ms / 1000) as i64, 0);

    match created {
        Some(created_dt) => {
            let now = Utc::now();
            let duration = now.signed_duration_since(created_dt);

            let days = duration.num_days();
            let hours = duration.num_hours();
            let minutes = duration.num_minutes();

            if days > 0 {
                if days == 1 {
                    "1 day ago".to_string()
                } else {
                    format!("{days} days ago")
                }
            } else if hours > 0 {
                if hours == 1 {
                    "1 hour ago".to_string()
                } else {
                    format!("{hours} hours ago")
                }
            } else if minutes > 0 {
                if minutes == 1 {
                    "1 minute ago".to_string()
                } else {
                    format!("{minutes} minutes ago")
                }
            } else {
                "just now".to_string()
            }
        }
        None => "unknown".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_age() {
        let now = Utc::now();
        let one_day_ago = now - chrono::Duration::days(1);
        let timestamp = (one_day_ago.timestamp() * 1000) as u64;

        let age = format_age(timestamp);
        assert!(age.contains("day"));
    }
}
