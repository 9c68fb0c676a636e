//! End-to-end tests for the application controller: scripted input, captured
//! output, wiremock server.

use std::io::Cursor;

use serde_json::{Value, json};
use st_cli::{App, Client, Section};
use st_config::GithubConfig;
use st_core::TaskStatus;
use uuid::Uuid;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_string_contains, method, path},
};

const SPRINT_ID: Uuid = Uuid::from_u128(1);
const STORY_ID: Uuid = Uuid::from_u128(2);
const TASK_ID: Uuid = Uuid::from_u128(3);
const MEMBER_ID: Uuid = Uuid::from_u128(4);

fn task_json(status: &str) -> Value {
    json!({
        "id": TASK_ID,
        "title": "Fix login",
        "description": "desc",
        "status": status,
        "assignedTeamMemberId": MEMBER_ID
    })
}

fn story_json(status: &str) -> Value {
    json!({
        "id": STORY_ID,
        "title": "Story One",
        "description": "story desc",
        "priority": "HIGH",
        "storyPoints": 3,
        "tasks": [task_json(status)]
    })
}

fn sprint_json(status: &str) -> Value {
    json!({
        "id": SPRINT_ID,
        "name": "Sprint 1",
        "startDate": "2025-03-03",
        "endDate": "2025-03-17",
        "userStories": [story_json(status)]
    })
}

fn member_json() -> Value {
    json!({
        "id": MEMBER_ID,
        "name": "Ada",
        "email": "ada@example.com"
    })
}

fn app_with(server: &MockServer, script: &str) -> App<Cursor<String>, Vec<u8>> {
    App::new(
        Client::new(&server.uri()),
        GithubConfig::default(),
        Cursor::new(script.to_string()),
        Vec::new(),
    )
}

async fn mount_base(server: &MockServer, status: &str) {
    Mock::given(method("GET"))
        .and(path("/api/team-members"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([member_json()])))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/sprints"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([sprint_json(status)])))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/api/sprints/{SPRINT_ID}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(sprint_json(status)))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_move_task_sends_full_payload_then_refetches_before_rerender() {
    let server = MockServer::start().await;
    mount_base(&server, "TO_DO").await;

    // First story fetch renders the To Do board; the refetch after the move
    // observes the task done
    Mock::given(method("GET"))
        .and(path(format!("/api/sprints/{SPRINT_ID}/stories/{STORY_ID}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(story_json("TO_DO")))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/api/sprints/{SPRINT_ID}/stories/{STORY_ID}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(story_json("DONE")))
        .expect(1)
        .mount(&server)
        .await;

    // The update carries the whole task, status already in wire spelling
    Mock::given(method("PUT"))
        .and(path(format!(
            "/api/sprints/{SPRINT_ID}/stories/{STORY_ID}/tasks/{TASK_ID}"
        )))
        .and(body_string_contains("\"status\":\"DONE\""))
        .and(body_string_contains("\"title\":\"Fix login\""))
        .and(body_string_contains("\"assignedTeamMemberId\""))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let mut app = app_with(&server, "1\n1\nm 1 done\nq\n");
    app.run().await.unwrap();

    // The refetched story replaced both references
    let story = app.current_story.as_ref().unwrap();
    assert_eq!(story.tasks[0].status, TaskStatus::Done);
    let sprint_copy = app
        .current_sprint
        .as_ref()
        .unwrap()
        .story(STORY_ID)
        .unwrap();
    assert_eq!(sprint_copy.tasks[0].status, TaskStatus::Done);

    let output = String::from_utf8_lossy(app.output());
    assert!(output.contains("--- Done ---"));
    assert!(output.contains("(Ada)"));
}

#[tokio::test]
async fn test_refetch_failure_falls_back_to_section_reload() {
    let server = MockServer::start().await;
    mount_base(&server, "TO_DO").await;

    Mock::given(method("GET"))
        .and(path(format!("/api/sprints/{SPRINT_ID}/stories/{STORY_ID}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(story_json("TO_DO")))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    // Every refetch after the write fails; the fallback lands on the
    // sprint's last-known-good copy
    Mock::given(method("GET"))
        .and(path(format!("/api/sprints/{SPRINT_ID}/stories/{STORY_ID}")))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path(format!(
            "/api/sprints/{SPRINT_ID}/stories/{STORY_ID}/tasks/{TASK_ID}"
        )))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let mut app = app_with(&server, "1\n1\nm 1 done\nq\n");
    app.run().await.unwrap();

    // Previous rendered state is kept and the board stays open
    assert_eq!(app.section(), Section::StoryBoard);
    let story = app.current_story.as_ref().unwrap();
    assert_eq!(story.tasks[0].status, TaskStatus::Todo);
}

#[tokio::test]
async fn test_create_sprint_with_empty_name_never_hits_the_network() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/team-members"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/sprints"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/sprints"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    // Create form: empty name, default dates
    let mut app = app_with(&server, "c\n\n\n\nq\n");
    app.run().await.unwrap();

    let output = String::from_utf8_lossy(app.output());
    assert!(output.contains("Error:"));
    assert!(output.contains("name is required"));
}

#[tokio::test]
async fn test_deleting_team_member_keeps_task_assignments() {
    let server = MockServer::start().await;

    // Member list: present on the first two fetches, gone after the delete
    Mock::given(method("GET"))
        .and(path("/api/team-members"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([member_json()])))
        .up_to_n_times(2)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/team-members"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/sprints"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([sprint_json("TO_DO")])))
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path(format!("/api/team-members/{MEMBER_ID}")))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let mut app = app_with(&server, "t\nx 1\ny\n");
    app.run().await.unwrap();

    assert!(app.team_members.is_empty());

    // The loaded task still references the deleted member; any cascade is
    // the server's business
    let task = &app.sprints[0].user_stories[0].tasks[0];
    assert_eq!(task.assigned_team_member_id, Some(MEMBER_ID));
}

#[tokio::test]
async fn test_github_demo_import_creates_task_locally() {
    let server = MockServer::start().await;
    mount_base(&server, "TO_DO").await;

    Mock::given(method("GET"))
        .and(path("/api/github/issues"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/github/issues"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    // GitHub section, fetch acme/webapp, import issue 1 into sprint 1 story 1
    let mut app = app_with(&server, "g\nf\nacme\nwebapp\ni 1\n1\n1\n");
    app.run().await.unwrap();

    let tasks = &app.sprints[0].user_stories[0].tasks;
    let imported = tasks.last().unwrap();
    assert_eq!(imported.title, "Fix login page");
    assert_eq!(imported.status, TaskStatus::Todo);
    assert_eq!(
        imported.github_issue_url.as_deref(),
        Some("https://github.com/acme/webapp/issues/1")
    );

    let output = String::from_utf8_lossy(app.output());
    assert!(output.contains("GitHub issue imported successfully!"));
    assert!(output.contains("Mode: sample data"));
}
