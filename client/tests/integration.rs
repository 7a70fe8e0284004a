//! Full end-to-end tests against the live GraphQL server.
//!
//! # Design
//! Starts the real server on a random port, then exercises every client
//! operation over actual HTTP using ureq. Validates that the core's
//! request building and response parsing agree with the server's schema
//! end-to-end, and drives the view state machine against the same live
//! server.

use todo_client::{
    ApiError, Effect, Phase, Priority, StatusFilter, TodoClient, TodoFilter, TodoInput, TodoView,
};
use todo_client::{HttpRequest, HttpResponse};

/// Execute an `HttpRequest` using ureq and return an `HttpResponse`.
///
/// Disables ureq's automatic status-code-as-error behavior so 4xx/5xx
/// responses are returned as data rather than `Err`, letting the core
/// client handle status interpretation.
fn execute(req: HttpRequest) -> HttpResponse {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut response = agent
        .post(&req.url)
        .content_type("application/json")
        .send(req.body.as_bytes())
        .expect("HTTP transport error");

    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string().unwrap_or_default();

    HttpResponse {
        status,
        headers: Vec::new(),
        body,
    }
}

/// Start the server on a random port in a background thread and return
/// its base URL.
fn start_server() -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            todo_server::run(listener, todo_server::TodoStore::new()).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

fn add(client: &TodoClient, task: &str, priority: Priority) -> todo_client::Todo {
    let input = TodoInput {
        task: task.to_string(),
        priority: Some(priority),
    };
    let req = client.build_add_todo(&input).unwrap();
    client.parse_add_todo(execute(req)).unwrap()
}

fn list(client: &TodoClient, filter: TodoFilter) -> Vec<todo_client::Todo> {
    let req = client.build_get_todos(&filter).unwrap();
    client.parse_get_todos(execute(req)).unwrap()
}

#[test]
fn graphql_lifecycle() {
    let client = TodoClient::new(&start_server());

    // Step 1: list — should be empty.
    assert!(list(&client, TodoFilter::default()).is_empty());

    // Step 2: seed Coding/high, Assignments/medium, and Trekking/low,
    // then mark Trekking completed.
    let coding = add(&client, "Coding", Priority::High);
    add(&client, "Assignments", Priority::Medium);
    let trekking = add(&client, "Trekking", Priority::Low);
    let req = client.build_toggle_todo(&trekking.id);
    let trekking = client.parse_toggle_todo(execute(req)).unwrap();
    assert!(trekking.completed);

    // Step 3: active items are the first two, in insertion order.
    let active = list(
        &client,
        TodoFilter {
            completed: Some(false),
            priority: None,
        },
    );
    let tasks: Vec<&str> = active.iter().map(|t| t.task.as_str()).collect();
    assert_eq!(tasks, ["Coding", "Assignments"]);

    // Step 4: toggle Coding — completed flips to true.
    let req = client.build_toggle_todo(&coding.id);
    let toggled = client.parse_toggle_todo(execute(req)).unwrap();
    assert!(toggled.completed);
    assert_eq!(toggled.id, coding.id);

    // Step 5: the completed view now holds Coding and Trekking.
    let completed = list(
        &client,
        TodoFilter {
            completed: Some(true),
            priority: None,
        },
    );
    let tasks: Vec<&str> = completed.iter().map(|t| t.task.as_str()).collect();
    assert_eq!(tasks, ["Coding", "Trekking"]);

    // Step 6: both predicates apply at once.
    let high_active = list(
        &client,
        TodoFilter {
            completed: Some(false),
            priority: Some(Priority::High),
        },
    );
    assert!(high_active.is_empty());

    // Step 7: delete Coding — true, then false on the second attempt.
    let req = client.build_delete_todo(&coding.id);
    assert!(client.parse_delete_todo(execute(req)).unwrap());
    let req = client.build_delete_todo(&coding.id);
    assert!(!client.parse_delete_todo(execute(req)).unwrap());

    // Step 8: server-side validation — a whitespace-only task is
    // rejected by the store, not just by the view's pre-submit guard.
    let input = TodoInput {
        task: "   ".to_string(),
        priority: None,
    };
    let req = client.build_add_todo(&input).unwrap();
    let err = client.parse_add_todo(execute(req)).unwrap_err();
    assert!(matches!(err, ApiError::Invalid(_)));

    // Step 9: toggling an unknown id is a typed NotFound.
    let req = client.build_toggle_todo("missing");
    let err = client.parse_toggle_todo(execute(req)).unwrap_err();
    assert!(matches!(err, ApiError::NotFound));
}

/// Run one effect and any follow-up it produces, the way a UI host does.
fn run_effect(view: &mut TodoView, client: &TodoClient, effect: Effect) {
    let mut next = Some(effect);
    while let Some(effect) = next.take() {
        next = match effect {
            Effect::Fetch(filter) => {
                let req = client.build_get_todos(&filter).unwrap();
                view.on_fetched(client.parse_get_todos(execute(req)));
                None
            }
            Effect::Add(input) => {
                let req = client.build_add_todo(&input).unwrap();
                view.on_added(client.parse_add_todo(execute(req)))
            }
            Effect::Toggle(id) => {
                let req = client.build_toggle_todo(&id);
                view.on_toggled(client.parse_toggle_todo(execute(req)))
            }
            Effect::Delete(id) => {
                let req = client.build_delete_todo(&id);
                view.on_deleted(client.parse_delete_todo(execute(req)))
            }
        };
    }
}

#[test]
fn view_session_against_live_server() {
    let client = TodoClient::new(&start_server());
    let mut view = TodoView::new();

    // Step 1: opening the view loads an empty list.
    let effect = view.open();
    run_effect(&mut view, &client, effect);
    assert_eq!(view.phase(), &Phase::Ready);
    assert!(view.todos().is_empty());

    // Step 2: submitting the form adds a todo and refetches.
    view.set_task_input("Walk dog");
    view.set_priority_input(Priority::High);
    let effect = view.submit().unwrap();
    run_effect(&mut view, &client, effect);
    assert_eq!(view.todos().len(), 1);
    assert_eq!(view.todos()[0].task, "Walk dog");
    assert_eq!(view.task_input(), "");
    assert_eq!(view.priority_input(), Priority::High); // selection persists

    // Step 3: toggling the item through the view refetches it completed.
    let id = view.todos()[0].id.clone();
    let effect = view.toggle_item(&id);
    run_effect(&mut view, &client, effect);
    assert!(view.todos()[0].completed);

    // Step 4: the active filter now hides it.
    let effect = view.set_status_filter(StatusFilter::Active);
    run_effect(&mut view, &client, effect);
    assert!(view.todos().is_empty());
    assert_eq!(view.phase(), &Phase::Ready);

    // Step 5: deleting through the view leaves the list empty under
    // every filter.
    let effect = view.set_status_filter(StatusFilter::All);
    run_effect(&mut view, &client, effect);
    let id = view.todos()[0].id.clone();
    let effect = view.delete_item(&id);
    run_effect(&mut view, &client, effect);
    assert!(view.todos().is_empty());

    // Step 6: a toggle for the now-deleted id surfaces a notice and
    // leaves the phase intact.
    let effect = view.toggle_item(&id);
    run_effect(&mut view, &client, effect);
    assert_eq!(view.notice(), Some("todo not found"));
    assert_eq!(view.phase(), &Phase::Ready);
}
