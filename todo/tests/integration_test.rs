//! End-to-end behaviour of the to-do application.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)] // Test code can use unwrap/expect/panic

use std::sync::Arc;
use todolist::components::TextPolicy;
use todolist::todos::TodoEnvironment;
use todolist::{
    render_text, visible_todos, App, AppEnvironment, Config, Node, Outcome, RenderOptions, Shell,
    ShellError, UiEvent, VisibilityFilter,
};
use todolist_testing::SequentialIdGenerator;

fn app_with(config: &Config) -> App {
    let env = AppEnvironment {
        todos: TodoEnvironment::new(Arc::new(SequentialIdGenerator::new())),
    };
    App::new(config, env)
}

fn app() -> App {
    app_with(&Config::default())
}

fn add(app: &mut App, text: &str) {
    app.handle(UiEvent::InputChanged(text.to_string())).unwrap();
    app.handle(UiEvent::Submit).unwrap();
}

fn texts_under(app: &App, filter: VisibilityFilter) -> Vec<String> {
    let state = app.state();
    visible_todos(&state.todos.todos, filter)
        .into_iter()
        .map(|t| t.text.clone())
        .collect()
}

#[test]
fn add_two_toggle_first() {
    let mut app = app();
    add(&mut app, "Buy milk");
    add(&mut app, "Walk dog");

    let first = app.state().todos.todos[0].id;
    app.handle(UiEvent::RowClicked(first)).unwrap();

    assert_eq!(texts_under(&app, VisibilityFilter::ShowActive), vec!["Walk dog"]);
    assert_eq!(texts_under(&app, VisibilityFilter::ShowCompleted), vec!["Buy milk"]);
    assert_eq!(
        texts_under(&app, VisibilityFilter::ShowAll),
        vec!["Buy milk", "Walk dog"]
    );
}

#[test]
fn item_added_under_show_completed_is_hidden() {
    let mut app = app();
    app.handle(UiEvent::FilterClicked(VisibilityFilter::ShowCompleted)).unwrap();

    add(&mut app, "Read book");

    assert_eq!(app.state().todos.count(), 1);
    assert!(app.render().row_ids().is_empty());

    let id = app.state().todos.todos[0].id;
    app.handle(UiEvent::RowClicked(id)).unwrap();
    assert_eq!(app.render().row_ids(), vec![id]);
}

#[test]
fn blank_submissions_do_not_add() {
    let mut app = app();

    add(&mut app, "");
    add(&mut app, "   ");

    assert_eq!(app.state().todos.count(), 0);
}

#[test]
fn text_is_stored_raw_by_default() {
    let mut app = app();
    add(&mut app, "  Walk dog ");
    assert_eq!(app.state().todos.todos[0].text, "  Walk dog ");
}

#[test]
fn trimmed_policy_stores_trimmed_text() {
    let config = Config {
        text_policy: TextPolicy::Trimmed,
        ..Config::default()
    };
    let mut app = app_with(&config);

    add(&mut app, "  Walk dog ");

    assert_eq!(app.state().todos.todos[0].text, "Walk dog");
}

#[test]
fn add_works_with_degenerate_store_settings() {
    let config = Config::from_lookup(|key| match key {
        "TODOLIST_MAX_FEEDBACK_ACTIONS" => Some("0".to_string()),
        "TODOLIST_ACTION_BROADCAST_CAPACITY" => Some(usize::MAX.to_string()),
        _ => None,
    });
    let mut app = app_with(&config);
    let mut actions = app.subscribe_actions();

    app.handle(UiEvent::InputChanged("Buy milk".to_string())).unwrap();
    app.handle(UiEvent::Submit).unwrap();

    assert_eq!(app.state().todos.count(), 1);
    assert_eq!(actions.try_recv().unwrap().name(), "AddTodo");
}

#[test]
fn snapshots_are_not_changed_by_later_actions() {
    let mut app = app();
    add(&mut app, "Buy milk");
    let before = app.state();

    let id = before.todos.todos[0].id;
    app.handle(UiEvent::RowClicked(id)).unwrap();

    assert!(!before.todos.todos[0].completed);
    assert!(app.state().todos.todos[0].completed);
}

#[test]
fn ids_are_assigned_before_items_are_visible() {
    let mut app = app();
    let mut states = app.subscribe();

    add(&mut app, "Buy milk");

    let state = states.borrow_and_update().clone();
    assert_eq!(
        state.todos.todos[0].id.as_uuid(),
        &SequentialIdGenerator::nth(1)
    );
}

#[test]
fn rendered_view_has_form_rows_and_footer() {
    let mut app = app();
    add(&mut app, "Buy milk");
    add(&mut app, "Walk dog");
    let first = app.state().todos.todos[0].id;
    app.handle(UiEvent::RowClicked(first)).unwrap();

    let text = render_text(&app.render(), &RenderOptions { ansi: false });

    assert_eq!(
        text,
        "> Add Todo\n1. ~~Buy milk~~\n2. Walk dog\nShow: [All] Active Completed"
    );
}

#[test]
fn current_filter_button_is_disabled_in_view() {
    let mut app = app();
    app.handle(UiEvent::FilterClicked(VisibilityFilter::ShowActive)).unwrap();

    let Node::Column(children) = app.render() else {
        panic!("expected a column");
    };
    let Some(Node::Row(buttons)) = children.last() else {
        panic!("expected the footer row");
    };

    let disabled: Vec<bool> = buttons
        .iter()
        .filter_map(|node| match node {
            Node::Button { disabled, .. } => Some(*disabled),
            _ => None,
        })
        .collect();
    assert_eq!(disabled, vec![false, true, false]);
}

#[test]
fn shell_commands_drive_the_app() {
    let mut shell = Shell::new(app(), RenderOptions { ansi: false });

    shell.execute_line("add Buy milk").unwrap();
    shell.execute_line("a Walk dog").unwrap();
    let Outcome::Print(view) = shell.execute_line("toggle 1").unwrap() else {
        panic!("expected output");
    };
    assert!(view.contains("1. ~~Buy milk~~"));

    let Outcome::Print(view) = shell.execute_line("f active").unwrap() else {
        panic!("expected output");
    };
    assert!(view.contains("1. Walk dog"));
    assert!(!view.contains("Buy milk"));

    assert!(matches!(shell.execute_line("toggle 2"), Err(ShellError::NoSuchRow(2))));
    assert!(matches!(shell.execute_line("toggle 0"), Err(ShellError::NoSuchRow(0))));
    assert_eq!(shell.execute_line("quit").unwrap(), Outcome::Quit);
}

#[test]
fn shell_state_prints_json() {
    let mut shell = Shell::new(app(), RenderOptions::default());
    shell.execute_line("add Buy milk").unwrap();

    let Outcome::Print(json) = shell.execute_line("state").unwrap() else {
        panic!("expected output");
    };
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["visibility_filter"], "SHOW_ALL");
    assert_eq!(value["todos"]["todos"][0]["text"], "Buy milk");
    assert_eq!(value["todos"]["todos"][0]["completed"], false);
}

#[test]
fn shell_clears_input_after_blank_add() {
    let mut shell = Shell::new(app(), RenderOptions { ansi: false });

    shell.execute_line("add    ").unwrap();

    assert_eq!(shell.app().input().text(), "");
    assert_eq!(shell.app().state().todos.count(), 0);
}

#[tokio::test]
async fn shell_session_over_streams() {
    let mut shell = Shell::new(app(), RenderOptions { ansi: false });
    let input: &[u8] = b"add Buy milk\nbogus\nfilter nope\ntoggle 1\nquit\nadd never\n";
    let mut output = Vec::new();

    shell.run(input, &mut output).await.unwrap();

    let output = String::from_utf8(output).unwrap();
    assert!(output.contains("Type `help` for commands."));
    assert!(output.contains("1. Buy milk"));
    assert!(output.contains("error: Unknown command: bogus"));
    assert!(output.contains("error: Invalid filter"));
    assert!(output.contains("1. ~~Buy milk~~"));
    assert!(!output.contains("never"));
    assert_eq!(shell.app().state().todos.count(), 1);
}
