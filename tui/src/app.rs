//! TUI application state: hosts the view state machine and runs its
//! effects over HTTP.

use todo_client::{
    Effect, HttpRequest, HttpResponse, Priority, PriorityFilter, StatusFilter, TodoClient,
    TodoView,
};

/// Which region receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Typing into the task field.
    #[default]
    Editing,
    /// Navigating the list.
    Browsing,
}

/// TUI application state.
pub struct App {
    /// The pure view state machine; everything rendered comes from here.
    pub view: TodoView,
    /// Current input mode.
    pub input_mode: InputMode,
    /// Selected row in the list (Browsing mode).
    pub selected: usize,
    /// Whether the app should quit.
    pub should_quit: bool,
    client: TodoClient,
    agent: ureq::Agent,
}

impl App {
    /// Create the app and load the initial list.
    pub fn new(base_url: &str) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        let mut app = Self {
            view: TodoView::new(),
            input_mode: InputMode::default(),
            selected: 0,
            should_quit: false,
            client: TodoClient::new(base_url),
            agent,
        };
        let effect = app.view.open();
        app.run_effect(effect);
        app
    }

    // --- form events ---

    pub fn enter_char(&mut self, c: char) {
        let mut task = self.view.task_input().to_string();
        task.push(c);
        self.view.set_task_input(task);
    }

    pub fn delete_char(&mut self) {
        let mut task = self.view.task_input().to_string();
        task.pop();
        self.view.set_task_input(task);
    }

    pub fn submit(&mut self) {
        if let Some(effect) = self.view.submit() {
            self.run_effect(effect);
        }
    }

    pub fn cycle_priority_input(&mut self) {
        let next = match self.view.priority_input() {
            Priority::High => Priority::Medium,
            Priority::Medium => Priority::Low,
            Priority::Low => Priority::High,
        };
        self.view.set_priority_input(next);
    }

    // --- filter panel events ---

    pub fn toggle_filter_panel(&mut self) {
        self.view.toggle_filter_panel();
    }

    pub fn cycle_status_filter(&mut self) {
        let next = match self.view.status_filter() {
            StatusFilter::All => StatusFilter::Active,
            StatusFilter::Active => StatusFilter::Completed,
            StatusFilter::Completed => StatusFilter::All,
        };
        let effect = self.view.set_status_filter(next);
        self.run_effect(effect);
    }

    pub fn cycle_priority_filter(&mut self) {
        let next = match self.view.priority_filter() {
            PriorityFilter::All => PriorityFilter::High,
            PriorityFilter::High => PriorityFilter::Medium,
            PriorityFilter::Medium => PriorityFilter::Low,
            PriorityFilter::Low => PriorityFilter::All,
        };
        let effect = self.view.set_priority_filter(next);
        self.run_effect(effect);
    }

    // --- list events ---

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.view.todos().len() {
            self.selected += 1;
        }
    }

    pub fn toggle_selected(&mut self) {
        let Some(id) = self.view.todos().get(self.selected).map(|t| t.id.clone()) else {
            return;
        };
        let effect = self.view.toggle_item(&id);
        self.run_effect(effect);
    }

    pub fn delete_selected(&mut self) {
        let Some(id) = self.view.todos().get(self.selected).map(|t| t.id.clone()) else {
            return;
        };
        let effect = self.view.delete_item(&id);
        self.run_effect(effect);
    }

    /// Execute one effect and any follow-up it produces (a mutation
    /// acknowledgment queues the refetch).
    fn run_effect(&mut self, effect: Effect) {
        let mut next = Some(effect);
        while let Some(effect) = next.take() {
            next = match effect {
                Effect::Fetch(filter) => {
                    match self.client.build_get_todos(&filter) {
                        Ok(req) => {
                            let resp = self.execute(req);
                            self.view.on_fetched(self.client.parse_get_todos(resp));
                        }
                        Err(err) => self.view.on_fetched(Err(err)),
                    }
                    None
                }
                Effect::Add(input) => match self.client.build_add_todo(&input) {
                    Ok(req) => {
                        let resp = self.execute(req);
                        self.view.on_added(self.client.parse_add_todo(resp))
                    }
                    Err(err) => self.view.on_added(Err(err)),
                },
                Effect::Toggle(id) => {
                    let req = self.client.build_toggle_todo(&id);
                    let resp = self.execute(req);
                    self.view.on_toggled(self.client.parse_toggle_todo(resp))
                }
                Effect::Delete(id) => {
                    let req = self.client.build_delete_todo(&id);
                    let resp = self.execute(req);
                    self.view.on_deleted(self.client.parse_delete_todo(resp))
                }
            };
        }
        self.clamp_selection();
    }

    /// The host side of the core's host-does-IO split: run one POST.
    /// Transport failures are folded into a status-0 response so the
    /// view's error path handles them uniformly.
    fn execute(&self, req: HttpRequest) -> HttpResponse {
        let result = self
            .agent
            .post(&req.url)
            .content_type("application/json")
            .send(req.body.as_bytes());

        match result {
            Ok(mut response) => {
                let status = response.status().as_u16();
                let body = response.body_mut().read_to_string().unwrap_or_default();
                HttpResponse {
                    status,
                    headers: Vec::new(),
                    body,
                }
            }
            Err(err) => HttpResponse {
                status: 0,
                headers: Vec::new(),
                body: err.to_string(),
            },
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.view.todos().len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}
