// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{execute, terminal};
use jobdash_app::{
    ApiError, ApiReply, AppCommand, AppEvent, AppMode, AppState, Application, ApplicationDraft,
    ApplicationId, ApplicationStatus, Connection, DELETE_CONFIRM_PROMPT, DraftField,
    LIST_ERROR_TTL, StatusChange, StatusFilter,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Wrap};
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;
use tracing::{debug, warn};

const STATUS_TTL: Duration = Duration::from_secs(4);
const EMPTY_TITLE: &str = "No applications found.";
const EMPTY_HINT: &str = "Add your first job application above.";
const LOADING_TEXT: &str = "Loading...";

/// Backend access for the dashboard. The `spawn_*` defaults run the call on
/// the caller's thread and post the completion to `tx`; real runtimes
/// override them to run off the UI thread.
pub trait AppRuntime {
    fn list_applications(&mut self) -> Result<Vec<Application>, ApiError>;
    fn create_application(
        &mut self,
        draft: &ApplicationDraft,
    ) -> Result<ApiReply<Application>, ApiError>;
    fn update_status(
        &mut self,
        id: ApplicationId,
        status: ApplicationStatus,
    ) -> Result<ApiReply<Application>, ApiError>;
    fn delete_application(&mut self, id: ApplicationId) -> Result<(), ApiError>;

    fn spawn_fetch(&mut self, generation: u64, tx: Sender<InternalEvent>) -> Result<()> {
        let result = self.list_applications();
        send_completion(&tx, ApiCompletion::Fetched { generation, result })
    }

    fn spawn_create(&mut self, draft: ApplicationDraft, tx: Sender<InternalEvent>) -> Result<()> {
        let result = self.create_application(&draft);
        send_completion(&tx, ApiCompletion::Created(result))
    }

    fn spawn_status_change(
        &mut self,
        change: StatusChange,
        tx: Sender<InternalEvent>,
    ) -> Result<()> {
        let result = self.update_status(change.id, change.requested);
        send_completion(&tx, ApiCompletion::StatusChanged { change, result })
    }

    fn spawn_delete(&mut self, id: ApplicationId, tx: Sender<InternalEvent>) -> Result<()> {
        let result = self.delete_application(id);
        send_completion(&tx, ApiCompletion::Deleted { id, result })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCompletion {
    Fetched {
        generation: u64,
        result: Result<Vec<Application>, ApiError>,
    },
    Created(Result<ApiReply<Application>, ApiError>),
    StatusChanged {
        change: StatusChange,
        result: Result<ApiReply<Application>, ApiError>,
    },
    Deleted {
        id: ApplicationId,
        result: Result<(), ApiError>,
    },
}

impl ApiCompletion {
    fn into_command(self) -> AppCommand {
        match self {
            Self::Fetched { generation, result } => AppCommand::FetchFinished { generation, result },
            Self::Created(result) => AppCommand::CreateFinished(result),
            Self::StatusChanged { change, result } => {
                AppCommand::StatusChangeFinished { change, result }
            }
            Self::Deleted { id, result } => AppCommand::DeleteFinished { id, result },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternalEvent {
    ClearStatus { token: u64 },
    ClearListError { token: u64 },
    Api(ApiCompletion),
}

pub fn send_completion(tx: &Sender<InternalEvent>, completion: ApiCompletion) -> Result<()> {
    tx.send(InternalEvent::Api(completion))
        .map_err(|_| anyhow!("api completion channel closed"))
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct ViewData {
    selected_row: usize,
    help_visible: bool,
    status_token: u64,
}

pub fn run_app<R: AppRuntime>(state: &mut AppState, runtime: &mut R) -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    let mut view_data = ViewData::default();
    let (internal_tx, internal_rx) = mpsc::channel();

    dispatch_and_apply(
        state,
        runtime,
        &mut view_data,
        &internal_tx,
        AppCommand::Mount,
    );

    let mut result = Ok(());
    loop {
        process_internal_events(state, runtime, &mut view_data, &internal_tx, &internal_rx);

        if let Err(error) = terminal.draw(|frame| render(frame, state, &view_data)) {
            result = Err(error).context("draw frame");
            break;
        }

        let has_event = match event::poll(Duration::from_millis(120)).context("poll event") {
            Ok(has_event) => has_event,
            Err(error) => {
                result = Err(error);
                break;
            }
        };
        if has_event {
            match event::read().context("read event") {
                Ok(Event::Key(key)) => {
                    if handle_key_event(state, runtime, &mut view_data, &internal_tx, key) {
                        break;
                    }
                }
                Ok(_) => {}
                Err(error) => {
                    result = Err(error);
                    break;
                }
            }
        }
    }

    disable_raw_mode().context("disable raw mode")?;
    execute!(io::stdout(), terminal::LeaveAlternateScreen).context("leave alternate screen")?;
    result
}

fn process_internal_events<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    tx: &Sender<InternalEvent>,
    rx: &Receiver<InternalEvent>,
) {
    while let Ok(event) = rx.try_recv() {
        match event {
            InternalEvent::ClearStatus { token } if token == view_data.status_token => {
                state.dispatch(AppCommand::ClearStatus);
            }
            InternalEvent::ClearStatus { .. } => {}
            InternalEvent::ClearListError { token } => {
                state.dispatch(AppCommand::ClearListError { token });
            }
            InternalEvent::Api(completion) => {
                dispatch_and_apply(state, runtime, view_data, tx, completion.into_command());
            }
        }
    }
}

/// Dispatches `command` and carries out whatever side effects the resulting
/// events ask for.
fn dispatch_and_apply<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    tx: &Sender<InternalEvent>,
    command: AppCommand,
) {
    let events = state.dispatch(command);
    let mut unstarted = Vec::new();
    for event in events {
        let failed = match event {
            AppEvent::FetchRequested { generation } => {
                not_started(runtime.spawn_fetch(generation, tx.clone()), |error| {
                    ApiCompletion::Fetched {
                        generation,
                        result: Err(error),
                    }
                })
            }
            AppEvent::CreateRequested(draft) => {
                not_started(runtime.spawn_create(draft, tx.clone()), |error| {
                    ApiCompletion::Created(Err(error))
                })
            }
            AppEvent::StatusChangeRequested(change) => {
                not_started(runtime.spawn_status_change(change, tx.clone()), |error| {
                    ApiCompletion::StatusChanged {
                        change,
                        result: Err(error),
                    }
                })
            }
            AppEvent::DeleteRequested(id) => {
                not_started(runtime.spawn_delete(id, tx.clone()), |error| {
                    ApiCompletion::Deleted {
                        id,
                        result: Err(error),
                    }
                })
            }
            AppEvent::ListErrorRaised { token } => {
                schedule_list_error_clear(tx, token);
                None
            }
            AppEvent::StatusUpdated(_) => {
                view_data.status_token = view_data.status_token.saturating_add(1);
                schedule_status_clear(tx, view_data.status_token);
                None
            }
            AppEvent::Created => {
                emit_status(state, view_data, tx, "application added");
                None
            }
            AppEvent::Deleted(id) => {
                debug!(%id, "application deleted");
                None
            }
            _ => None,
        };
        unstarted.extend(failed);
    }
    // A request that never left settles the same way a failed one does.
    for completion in unstarted {
        dispatch_and_apply(state, runtime, view_data, tx, completion.into_command());
    }
    clamp_selection(state, view_data);
}

fn not_started(
    started: Result<()>,
    completion: impl FnOnce(ApiError) -> ApiCompletion,
) -> Option<ApiCompletion> {
    let error = started.err()?;
    warn!("background request did not start: {error:#}");
    Some(completion(ApiError::unexpected(format!(
        "request did not start: {error:#}"
    ))))
}

fn schedule_status_clear(internal_tx: &Sender<InternalEvent>, token: u64) {
    let sender = internal_tx.clone();
    thread::spawn(move || {
        thread::sleep(STATUS_TTL);
        let _ = sender.send(InternalEvent::ClearStatus { token });
    });
}

fn schedule_list_error_clear(internal_tx: &Sender<InternalEvent>, token: u64) {
    let sender = internal_tx.clone();
    thread::spawn(move || {
        thread::sleep(LIST_ERROR_TTL);
        let _ = sender.send(InternalEvent::ClearListError { token });
    });
}

fn emit_status(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    message: impl Into<String>,
) {
    state.dispatch(AppCommand::SetStatus(message.into()));
    view_data.status_token = view_data.status_token.saturating_add(1);
    schedule_status_clear(internal_tx, view_data.status_token);
}

fn handle_key_event<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) -> bool {
    if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    if view_data.help_visible {
        if key.code == KeyCode::Esc || key.code == KeyCode::Char('?') {
            view_data.help_visible = false;
        }
        return false;
    }

    let command = match state.mode {
        AppMode::ConfirmDelete(_) => confirm_command_for_key(key),
        AppMode::Form => form_command_for_key(key),
        AppMode::Nav => {
            match (key.code, key.modifiers) {
                (KeyCode::Char('q'), KeyModifiers::NONE) => return true,
                (KeyCode::Char('?'), _) => {
                    view_data.help_visible = true;
                    return false;
                }
                (KeyCode::Char('j') | KeyCode::Down, _) => {
                    move_row(state, view_data, 1);
                    return false;
                }
                (KeyCode::Char('k') | KeyCode::Up, _) => {
                    move_row(state, view_data, -1);
                    return false;
                }
                (KeyCode::Char('g') | KeyCode::Home, _) => {
                    view_data.selected_row = 0;
                    return false;
                }
                (KeyCode::Char('G') | KeyCode::End, _) => {
                    view_data.selected_row = state.visible_applications().len().saturating_sub(1);
                    return false;
                }
                _ => {}
            }
            nav_command_for_key(state, view_data, key)
        }
    };

    match command {
        Some(command) => dispatch_and_apply(state, runtime, view_data, internal_tx, command),
        None => {
            if state.mode == AppMode::Nav
                && matches!(key.code, KeyCode::Char('s' | 'S' | 'd' | '1'..='4'))
                && selected_application(state, view_data).is_none()
            {
                emit_status(state, view_data, internal_tx, "no application selected");
            }
        }
    }
    false
}

fn nav_command_for_key(state: &AppState, view_data: &ViewData, key: KeyEvent) -> Option<AppCommand> {
    match (key.code, key.modifiers) {
        (KeyCode::Char('r'), KeyModifiers::CONTROL) => Some(AppCommand::Refresh),
        (KeyCode::Char('r'), KeyModifiers::NONE) => Some(AppCommand::Retry),
        (KeyCode::Char('a'), KeyModifiers::NONE) => Some(AppCommand::FocusForm),
        (KeyCode::Char('f'), KeyModifiers::NONE) => Some(AppCommand::NextFilter),
        (KeyCode::Char('F'), _) => Some(AppCommand::PrevFilter),
        (KeyCode::Char('0'), _) => Some(AppCommand::SetFilter(StatusFilter::All)),
        (KeyCode::Char('s'), KeyModifiers::NONE) => {
            let app = selected_application(state, view_data)?;
            Some(AppCommand::ChangeStatus {
                id: app.id,
                status: app.status.rotate(1),
            })
        }
        (KeyCode::Char('S'), _) => {
            let app = selected_application(state, view_data)?;
            Some(AppCommand::ChangeStatus {
                id: app.id,
                status: app.status.rotate(-1),
            })
        }
        (KeyCode::Char(digit @ '1'..='4'), _) => {
            let app = selected_application(state, view_data)?;
            let index = digit.to_digit(10)? as usize - 1;
            Some(AppCommand::ChangeStatus {
                id: app.id,
                status: *ApplicationStatus::ALL.get(index)?,
            })
        }
        (KeyCode::Char('d'), KeyModifiers::NONE) => {
            let app = selected_application(state, view_data)?;
            Some(AppCommand::RequestDelete(app.id))
        }
        _ => None,
    }
}

fn form_command_for_key(key: KeyEvent) -> Option<AppCommand> {
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) => Some(AppCommand::LeaveForm),
        (KeyCode::Enter, _) | (KeyCode::Char('s'), KeyModifiers::CONTROL) => {
            Some(AppCommand::SubmitForm)
        }
        (KeyCode::Tab | KeyCode::Down, _) => Some(AppCommand::FormNextField),
        (KeyCode::BackTab | KeyCode::Up, _) => Some(AppCommand::FormPrevField),
        (KeyCode::Backspace, _) => Some(AppCommand::FormBackspace),
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => Some(AppCommand::FormClearField),
        (KeyCode::Char(ch), modifiers)
            if !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(AppCommand::FormInput(ch))
        }
        _ => None,
    }
}

fn confirm_command_for_key(key: KeyEvent) -> Option<AppCommand> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Enter => Some(AppCommand::ConfirmDelete),
        KeyCode::Char('n') | KeyCode::Esc => Some(AppCommand::CancelDelete),
        _ => None,
    }
}

fn selected_application<'a>(state: &'a AppState, view_data: &ViewData) -> Option<&'a Application> {
    state
        .visible_applications()
        .get(view_data.selected_row)
        .copied()
}

fn move_row(state: &AppState, view_data: &mut ViewData, delta: isize) {
    let len = state.visible_applications().len();
    if len == 0 {
        view_data.selected_row = 0;
        return;
    }
    let next = (view_data.selected_row as isize + delta).clamp(0, len as isize - 1);
    view_data.selected_row = next as usize;
}

fn clamp_selection(state: &AppState, view_data: &mut ViewData) {
    let len = state.visible_applications().len();
    view_data.selected_row = view_data.selected_row.min(len.saturating_sub(1));
}

fn render(frame: &mut ratatui::Frame<'_>, state: &AppState, view_data: &ViewData) {
    let banner = banner_text(state);
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(6),
            Constraint::Length(if banner.is_some() { 3 } else { 0 }),
            Constraint::Min(3),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let connection = state.connection();
    let connection_color = match connection {
        Connection::Connected => Color::Green,
        Connection::Disconnected => Color::Red,
    };
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "Job Dash",
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            format!("● {}", connection.label()),
            Style::default().fg(connection_color),
        ),
    ]))
    .block(Block::default().title("jobdash").borders(Borders::ALL));
    frame.render_widget(header, layout[0]);

    let counts = Paragraph::new(counts_text(state))
        .block(Block::default().title("overview").borders(Borders::ALL));
    frame.render_widget(counts, layout[1]);

    render_form(frame, layout[2], state);

    if let Some(banner) = banner {
        let widget = Paragraph::new(banner)
            .style(Style::default().fg(Color::Red))
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(widget, layout[3]);
    }

    render_table(frame, layout[4], state, view_data);

    let status_widget = Paragraph::new(status_text(state, view_data))
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status_widget, layout[5]);

    if let AppMode::ConfirmDelete(id) = state.mode {
        let area = centered_rect(56, 24, frame.area());
        frame.render_widget(Clear, area);
        let confirm = Paragraph::new(confirm_overlay_text(state, id))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title("delete")
                    .borders(Borders::ALL)
                    .style(Style::default().fg(Color::Red)),
            );
        frame.render_widget(confirm, area);
    }

    if view_data.help_visible {
        let area = centered_rect(70, 50, frame.area());
        frame.render_widget(Clear, area);
        let help = Paragraph::new(help_overlay_text())
            .block(Block::default().title("help").borders(Borders::ALL));
        frame.render_widget(help, area);
    }
}

fn counts_text(state: &AppState) -> String {
    if state.counts_pending() {
        return "Total Applications: - | Interviews: - | Offers: -".to_owned();
    }
    let counts = state.counts();
    format!(
        "Total Applications: {} | Interviews: {} | Offers: {}",
        counts.total, counts.interviews, counts.offers
    )
}

/// The persistent fetch advisory wins over a transient list error.
fn banner_text(state: &AppState) -> Option<String> {
    if let Some(error) = state.load_error() {
        return Some(format!("{error} (r to retry)"));
    }
    state.list().error().map(|error| error.message.clone())
}

fn render_form(frame: &mut ratatui::Frame<'_>, area: Rect, state: &AppState) {
    let form = state.form();
    let editing = state.mode == AppMode::Form;
    let label_width = DraftField::ALL
        .iter()
        .map(|field| field.label().len())
        .max()
        .unwrap_or(0);

    let mut lines = DraftField::ALL
        .iter()
        .map(|field| {
            let focused = editing && form.focus() == *field;
            let label_style = if focused {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let value = form.draft().value(*field);
            let mut spans = vec![Span::styled(
                format!("{:<label_width$}  ", field.label()),
                label_style,
            )];
            if value.is_empty() && !focused {
                spans.push(Span::styled(
                    field.placeholder(),
                    Style::default().fg(Color::DarkGray),
                ));
            } else {
                spans.push(Span::raw(value.to_owned()));
            }
            if focused {
                spans.push(Span::styled("▏", Style::default().fg(Color::Cyan)));
            }
            Line::from(spans)
        })
        .collect::<Vec<_>>();

    let footer = match form.error() {
        Some(error) => Line::from(Span::styled(
            error.to_owned(),
            Style::default().fg(Color::Red),
        )),
        None => Line::from(Span::styled(
            form_hint(state),
            Style::default().fg(Color::DarkGray),
        )),
    };
    lines.push(footer);

    let title = if editing {
        "add application"
    } else {
        "add application (a)"
    };
    let widget = Paragraph::new(lines).block(Block::default().title(title).borders(Borders::ALL));
    frame.render_widget(widget, area);
}

fn form_hint(state: &AppState) -> &'static str {
    if state.form().is_submitting() {
        "Adding..."
    } else if state.mode == AppMode::Form {
        "enter Add Application"
    } else {
        "press a to add an application"
    }
}

fn render_table(
    frame: &mut ratatui::Frame<'_>,
    area: Rect,
    state: &AppState,
    view_data: &ViewData,
) {
    let block = Block::default()
        .title(table_title(state))
        .borders(Borders::ALL);
    let visible = state.visible_applications();

    if visible.is_empty() {
        let text = if state.counts_pending() {
            LOADING_TEXT.to_owned()
        } else {
            empty_state_text()
        };
        let placeholder = Paragraph::new(text)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(placeholder, area);
        return;
    }

    let header = Row::new(["ID", "Company", "Role", "Source", "Status"].map(|label| {
        Cell::from(label).style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
    }));

    let rows = visible.iter().enumerate().map(|(row_index, app)| {
        let deleting = state.list().is_deleting(app.id);
        let mut style = status_style(app.status);
        if deleting {
            style = Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT);
        }
        if row_index == view_data.selected_row {
            style = style.bg(Color::DarkGray).add_modifier(Modifier::BOLD);
        }
        Row::new(vec![
            Cell::from(format!("#{}", app.id)),
            Cell::from(app.company_name.clone()),
            Cell::from(app.role.clone()),
            Cell::from(app.source.clone()),
            Cell::from(status_cell_text(state, app)),
        ])
        .style(style)
    });

    let widths = [
        Constraint::Length(6),
        Constraint::Percentage(28),
        Constraint::Percentage(28),
        Constraint::Percentage(20),
        Constraint::Percentage(20),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(1)
        .block(block);
    frame.render_widget(table, area);
}

fn status_cell_text(state: &AppState, app: &Application) -> String {
    if state.list().is_deleting(app.id) {
        "deleting...".to_owned()
    } else if state.list().is_updating(app.id) {
        format!("{}…", app.status.label())
    } else {
        app.status.label().to_owned()
    }
}

fn status_style(status: ApplicationStatus) -> Style {
    match status {
        ApplicationStatus::Applied => Style::default().fg(Color::Blue),
        ApplicationStatus::Interview => Style::default().fg(Color::Yellow),
        ApplicationStatus::Offer => Style::default().fg(Color::Green),
        ApplicationStatus::Rejected => Style::default().fg(Color::Red),
    }
}

fn table_title(state: &AppState) -> String {
    format!(
        "applications | {} | {}/{}",
        state.filter.label(),
        state.visible_applications().len(),
        state.applications().len()
    )
}

fn empty_state_text() -> String {
    format!("{EMPTY_TITLE}\n{EMPTY_HINT}")
}

fn confirm_overlay_text(state: &AppState, id: ApplicationId) -> String {
    let target = state
        .applications()
        .iter()
        .find(|app| app.id == id)
        .map(|app| format!("{} | {}", app.company_name, app.role))
        .unwrap_or_else(|| format!("application {id}"));
    format!("{DELETE_CONFIRM_PROMPT}\n\n{target}\n\ny/enter delete | n/esc cancel")
}

fn status_text(state: &AppState, view_data: &ViewData) -> String {
    if view_data.help_visible {
        return String::new();
    }

    let mode = mode_label(state.mode);
    let hints = match state.mode {
        AppMode::Nav => {
            "j/k move | a add | s/S status | 1-4 set | d delete | f/F filter | r retry | ? help | q quit"
        }
        AppMode::Form => "tab/shift+tab field | enter submit | ctrl+u clear | esc done",
        AppMode::ConfirmDelete(_) => "y confirm | n cancel",
    };
    match &state.status_line {
        Some(status) => format!("{mode} | {status} | {hints}"),
        None => format!("{mode} | {hints}"),
    }
}

fn mode_label(mode: AppMode) -> &'static str {
    match mode {
        AppMode::Nav => "NAV",
        AppMode::Form => "FORM",
        AppMode::ConfirmDelete(_) => "CONFIRM",
    }
}

fn help_overlay_text() -> &'static str {
    "global: ctrl+q quit | ? help\n\
nav: j/k or up/down move | g/G first/last | q quit\n\
nav: a add application | s/S next/prev status | 1-4 applied/interview/offer/rejected\n\
nav: d delete (asks first) | f/F next/prev filter | 0 all statuses\n\
nav: r retry fetch | ctrl+r refresh\n\
form: type to edit | tab/shift+tab field | backspace | ctrl+u clear field | enter submit | esc nav\n\
confirm: y/enter delete | n/esc cancel"
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
