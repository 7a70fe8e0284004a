//! TUI rendering using ratatui.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};
use todo_client::{Phase, Priority, PriorityFilter, StatusFilter, Todo};

use crate::app::{App, InputMode};

/// Draw the TUI.
pub fn draw(frame: &mut Frame, app: &App) {
    let mut constraints = vec![
        Constraint::Length(1), // Header
        Constraint::Length(3), // Creation form
    ];
    if app.view.filters_visible() {
        constraints.push(Constraint::Length(3)); // Filter panel
    }
    constraints.push(Constraint::Min(3)); // List
    constraints.push(Constraint::Length(1)); // Status line
    constraints.push(Constraint::Length(1)); // Footer

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(frame.area());

    let mut idx = 0;
    draw_header(frame, chunks[idx]);
    idx += 1;
    draw_form(frame, app, chunks[idx]);
    idx += 1;
    if app.view.filters_visible() {
        draw_filters(frame, app, chunks[idx]);
        idx += 1;
    }
    draw_list(frame, app, chunks[idx]);
    idx += 1;
    draw_status(frame, app, chunks[idx]);
    idx += 1;
    draw_footer(frame, app, chunks[idx]);
}

/// Draw the header bar.
fn draw_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(" Todos ").style(
        Style::default()
            .bg(Color::Blue)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(header, area);
}

/// Draw the creation form: task input plus the priority the next task
/// will be created with.
fn draw_form(frame: &mut Frame, app: &App, area: Rect) {
    let editing = app.input_mode == InputMode::Editing;
    let style = if editing {
        Style::default()
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let title = format!(" New task [{}] ", priority_name(app.view.priority_input()));

    let input = Paragraph::new(app.view.task_input())
        .style(style)
        .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(input, area);

    if editing {
        let cursor_x = area.x + app.view.task_input().len() as u16 + 1;
        frame.set_cursor_position((cursor_x, area.y + 1));
    }
}

/// Draw the filter panel.
fn draw_filters(frame: &mut Frame, app: &App, area: Rect) {
    let text = format!(
        " status: {}   priority: {} ",
        status_name(app.view.status_filter()),
        priority_filter_name(app.view.priority_filter()),
    );
    let panel = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title(" Filters "));
    frame.render_widget(panel, area);
}

/// Draw the todo list.
fn draw_list(frame: &mut Frame, app: &App, area: Rect) {
    let browsing = app.input_mode == InputMode::Browsing;
    let items: Vec<ListItem> = app
        .view
        .todos()
        .iter()
        .enumerate()
        .map(|(i, todo)| list_item(todo, browsing && i == app.selected))
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(" Todos "));
    frame.render_widget(list, area);
}

fn list_item(todo: &Todo, selected: bool) -> ListItem<'static> {
    let marker = if todo.completed { "[x]" } else { "[ ]" };

    let mut text_style = if todo.completed {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default()
    };
    if selected {
        text_style = text_style.add_modifier(Modifier::REVERSED);
    }
    let priority_style = Style::default().fg(priority_color(todo.priority));

    ListItem::new(Line::from(vec![
        Span::styled(format!("{marker} "), text_style),
        Span::styled(format!("{:<7}", priority_name(todo.priority)), priority_style),
        Span::styled(todo.task.clone(), text_style),
    ]))
}

/// Draw the status line: phase of the current query, or the last
/// surfaced mutation error.
fn draw_status(frame: &mut Frame, app: &App, area: Rect) {
    let error_style = Style::default().bg(Color::Red).fg(Color::White);
    let normal_style = Style::default().bg(Color::DarkGray).fg(Color::White);

    let (text, style) = if let Some(notice) = app.view.notice() {
        (format!(" {notice} "), error_style)
    } else {
        match app.view.phase() {
            Phase::Idle => (" Starting... ".to_string(), normal_style),
            Phase::Loading => (" Loading... ".to_string(), normal_style),
            Phase::Ready => (format!(" {} todos ", app.view.todos().len()), normal_style),
            Phase::Failed(msg) => (format!(" Error: {msg} "), error_style),
        }
    };

    frame.render_widget(Paragraph::new(text).style(style), area);
}

/// Draw the footer with keybindings.
fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let keys = match app.input_mode {
        InputMode::Editing => "Enter: add | Tab: priority | Esc: browse | Ctrl+C: quit",
        InputMode::Browsing => {
            "j/k: move | Space: toggle | d: delete | f: filters | s/p: cycle filter | e: edit | q: quit"
        }
    };
    let footer = Paragraph::new(format!(" {keys} "))
        .style(Style::default().bg(Color::DarkGray).fg(Color::White));
    frame.render_widget(footer, area);
}

fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::High => Color::Red,
        Priority::Medium => Color::Yellow,
        Priority::Low => Color::Green,
    }
}

fn priority_name(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "high",
        Priority::Medium => "medium",
        Priority::Low => "low",
    }
}

fn status_name(filter: StatusFilter) -> &'static str {
    match filter {
        StatusFilter::All => "all",
        StatusFilter::Active => "active",
        StatusFilter::Completed => "completed",
    }
}

fn priority_filter_name(filter: PriorityFilter) -> &'static str {
    match filter {
        PriorityFilter::All => "all",
        PriorityFilter::High => "high",
        PriorityFilter::Medium => "medium",
        PriorityFilter::Low => "low",
    }
}
