//! Renderers: pure functions over domain data that redraw one named region
//! of the interface in full.

use crate::app::Section;

use std::io::{self, Write};

use st_core::progress::{sprint_progress, story_progress};
use st_core::{GitHubIssue, Lanes, Sprint, Task, TeamMember, UserStory};

fn progress_bar(percent: u8) -> String {
    let filled = (percent as usize) / 10;
    format!("[{}{}] {percent}%", "#".repeat(filled), ".".repeat(10 - filled))
}

fn format_date(date: &chrono::NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Resolve a task's assignee by linear lookup in the loaded member list.
fn assignee_name<'a>(task: &Task, members: &'a [TeamMember]) -> Option<&'a str> {
    let id = task.assigned_team_member_id?;
    members.iter().find(|m| m.id == id).map(|m| m.name.as_str())
}

pub(crate) fn menu(out: &mut impl Write, section: Section) -> io::Result<()> {
    let hint = match section {
        Section::Sprints => "[:n:] open sprint | [c] create sprint | [t] team | [g] github | [q] quit",
        Section::SprintDetails => {
            "[:n:] open story | [c] add story | [x :n:] delete story | [u] edit sprint | [d] delete sprint | [p] back"
        }
        Section::StoryBoard => {
            "[m :n: todo|in_progress|done] move task | [a] add task | [e :n:] edit task | [x :n:] delete task | [u] edit story | [d] delete story | [p] back"
        }
        Section::Team => "[c] add member | [e :n:] edit member | [x :n:] delete member | [p] back",
        Section::GitHub => "[f] fetch issues | [i :n:] import issue | [p] back",
    };

    writeln!(out)?;
    writeln!(out, "{hint}")?;
    write!(out, "> ")?;
    out.flush()
}

pub(crate) fn sprint_list(out: &mut impl Write, sprints: &[Sprint]) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "================================ SPRINTS ================================")?;

    if sprints.is_empty() {
        writeln!(out, "No sprints found. Use [c] to create one.")?;
        return Ok(());
    }

    for (i, sprint) in sprints.iter().enumerate() {
        writeln!(
            out,
            "[{}] {}  {} - {}  {} stories  {}",
            i + 1,
            sprint.name,
            format_date(&sprint.start_date),
            format_date(&sprint.end_date),
            sprint.user_stories.len(),
            progress_bar(sprint_progress(sprint)),
        )?;
    }

    Ok(())
}

pub(crate) fn sprint_details(out: &mut impl Write, sprint: &Sprint) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "================================ SPRINT =================================")?;
    writeln!(
        out,
        "{}  {} - {}  {}",
        sprint.name,
        format_date(&sprint.start_date),
        format_date(&sprint.end_date),
        progress_bar(sprint_progress(sprint)),
    )?;
    if let Some(goal) = &sprint.goal {
        writeln!(out, "Goal: {goal}")?;
    }

    writeln!(out)?;
    writeln!(out, "------------------------------ USER STORIES -----------------------------")?;

    if sprint.user_stories.is_empty() {
        writeln!(out, "No user stories found. Use [c] to add one.")?;
        return Ok(());
    }

    for (i, story) in sprint.user_stories.iter().enumerate() {
        let done = story
            .tasks
            .iter()
            .filter(|t| t.status == st_core::TaskStatus::Done)
            .count();
        writeln!(
            out,
            "[{}] {}  {}  {} pts  {} tasks ({} done)  {}",
            i + 1,
            story.title,
            story.priority,
            story.story_points,
            story.tasks.len(),
            done,
            progress_bar(story_progress(story)),
        )?;
    }

    Ok(())
}

/// Redraw the three board lanes. Cards are numbered continuously in display
/// order so commands can reference them; the numbering walk matches
/// `App::task_id_at`.
pub(crate) fn board(
    out: &mut impl Write,
    story: &UserStory,
    members: &[TeamMember],
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "================================= STORY =================================")?;
    writeln!(
        out,
        "{}  {}  {} pts  {}",
        story.title,
        story.priority,
        story.story_points,
        progress_bar(story_progress(story)),
    )?;
    writeln!(out, "{}", story.description)?;

    if story.tasks.is_empty() {
        writeln!(out)?;
        writeln!(out, "No tasks found. Use [a] to add one.")?;
        return Ok(());
    }

    let lanes = Lanes::partition(&story.tasks);
    let mut number = 0;

    for status in st_core::TaskStatus::ALL {
        writeln!(out)?;
        writeln!(out, "--- {} ---", status.label())?;

        let lane = lanes.lane(status);
        if lane.is_empty() {
            writeln!(out, "  No tasks")?;
            continue;
        }

        for &task in lane {
            number += 1;
            match assignee_name(task, members) {
                Some(name) => writeln!(out, " [{number}] {}  ({name})", task.title)?,
                None => writeln!(out, " [{number}] {}", task.title)?,
            }
        }
    }

    Ok(())
}

pub(crate) fn team(out: &mut impl Write, members: &[TeamMember]) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "============================== TEAM MEMBERS =============================")?;

    if members.is_empty() {
        writeln!(out, "No team members found. Use [c] to add one.")?;
        return Ok(());
    }

    for (i, member) in members.iter().enumerate() {
        match &member.github_username {
            Some(github) => writeln!(
                out,
                "[{}] {}  {}  (github: {github})",
                i + 1,
                member.name,
                member.email
            )?,
            None => writeln!(out, "[{}] {}  {}", i + 1, member.name, member.email)?,
        }
    }

    Ok(())
}

pub(crate) fn github_header(out: &mut impl Write, live_import: bool) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "============================== GITHUB IMPORT ============================")?;
    writeln!(
        out,
        "Mode: {}",
        if live_import { "live" } else { "sample data" }
    )?;
    writeln!(out, "Fetch issues from a GitHub repository to see them here.")?;
    Ok(())
}

pub(crate) fn github_issues(out: &mut impl Write, issues: &[GitHubIssue]) -> io::Result<()> {
    writeln!(out)?;

    if issues.is_empty() {
        writeln!(out, "No open issues found in this repository.")?;
        return Ok(());
    }

    for (i, issue) in issues.iter().enumerate() {
        writeln!(out, "[{}] #{} {}", i + 1, issue.number, issue.title)?;
        match &issue.description {
            Some(description) => writeln!(out, "     {description}")?,
            None => writeln!(out, "     No description available.")?,
        }
    }

    Ok(())
}
