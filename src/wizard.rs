use crate::compiler::compile;
use crate::error::ValidationError;
use crate::field::{Field, FieldKind};
use crate::page::{default_pages, Control, Page};
use crate::types::ScanConfiguration;
use crate::validate::validate;

/// Semantic key events delivered by the terminal runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Quit,
    Up,
    Down,
    Left,
    Right,
    Select,
    Char(char),
    Backspace,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Editing,
    /// Finished with the compiled nmap arguments
    Submitted(Vec<String>),
    /// The user quit; nothing is produced
    Aborted,
}

/// The form state machine: pages, cursor, configuration and terminal status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wizard {
    pages: Vec<Page>,
    page: usize,
    focus: usize,
    config: ScanConfiguration,
    status: Status,
}

impl Wizard {
    pub fn new() -> Self {
        let pages = default_pages();
        log::debug!("[wizard] new: pages={}", pages.len());
        Self {
            pages,
            page: 0,
            focus: 0,
            config: ScanConfiguration::new(),
            status: Status::Editing,
        }
    }

    /// Pure transition: consume the state and an event, return the next state
    pub fn update(mut self, event: Event) -> Self {
        self.handle(event);
        self
    }

    /// Apply one event in place
    pub fn handle(&mut self, event: Event) {
        if self.is_finished() {
            log::trace!("[wizard] event_ignored: event={:?} status={:?}", event, self.status);
            return;
        }

        log::trace!("[wizard] handle: event={:?} page={} focus={}", event, self.page, self.focus);

        match event {
            Event::Quit => {
                log::info!("[wizard] aborted: page={} focus={}", self.page, self.focus);
                self.status = Status::Aborted;
            }
            Event::Up => self.focus = self.focus.saturating_sub(1),
            Event::Down => self.focus = (self.focus + 1).min(self.last_focus()),
            Event::Left => self.goto_page(self.page.saturating_sub(1)),
            Event::Right => self.goto_page((self.page + 1).min(self.pages.len().saturating_sub(1))),
            Event::Select => self.select(),
            Event::Char(ch) => self.type_char(ch),
            Event::Backspace => self.backspace(),
        }
    }

    fn last_focus(&self) -> usize {
        self.current_page().map(Page::len).unwrap_or(0).saturating_sub(1)
    }

    fn goto_page(&mut self, page: usize) {
        if page != self.page {
            log::debug!("[wizard] page_changed: old={} new={}", self.page, page);
            self.page = page;
            self.focus = 0;
        }
    }

    fn select(&mut self) {
        match self.focused_control().cloned() {
            Some(Control::Submit) => self.submit(),
            Some(Control::Field(field)) if field.is_text() => {
                // enter on a text field moves on to the next control
                self.focus = (self.focus + 1).min(self.last_focus());
            }
            Some(Control::Field(field)) => {
                let result = field.activate(&mut self.config);
                self.record(result);
            }
            None => {}
        }
    }

    fn type_char(&mut self, ch: char) {
        let Some(Control::Field(field)) = self.focused_control().cloned() else {
            return;
        };

        let result = match (field.kind, ch) {
            (FieldKind::Text(_), _) => field.push_char(&mut self.config, ch),
            (FieldKind::Counter { .. }, '+' | '=') => field.increment(&mut self.config),
            (FieldKind::Counter { .. }, '-') => field.decrement(&mut self.config),
            (FieldKind::Toggle | FieldKind::Choice, ' ') => field.activate(&mut self.config),
            _ => return,
        };
        self.record(result);
    }

    fn backspace(&mut self) {
        let Some(Control::Field(field)) = self.focused_control().cloned() else {
            return;
        };

        let result = match field.kind {
            FieldKind::Text(_) => field.pop_char(&mut self.config),
            FieldKind::Counter { .. } => field.decrement(&mut self.config),
            _ => return,
        };
        self.record(result);
    }

    fn record(&mut self, result: Result<(), ValidationError>) {
        match result {
            Ok(()) => self.config.last_error = None,
            Err(err) => {
                log::debug!("[wizard] edit_rejected: page={} focus={} error={}", self.page, self.focus, err);
                self.config.last_error = Some(err.to_string());
            }
        }
    }

    fn submit(&mut self) {
        match validate(&self.config) {
            Ok(()) => {
                self.config.last_error = None;
                let tokens = compile(&self.config);
                log::info!("[wizard] submitted: tokens={}", tokens.len());
                self.status = Status::Submitted(tokens);
            }
            Err(err) => {
                log::info!("[wizard] submit_blocked: reason={}", err);
                self.config.last_error = Some(err.to_string());
            }
        }
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page_index(&self) -> usize {
        self.page
    }

    pub fn focus_index(&self) -> usize {
        self.focus
    }

    pub fn current_page(&self) -> Option<&Page> {
        self.pages.get(self.page)
    }

    pub fn focused_control(&self) -> Option<&Control> {
        self.current_page().and_then(|p| p.control(self.focus))
    }

    pub fn focused_field(&self) -> Option<&Field> {
        self.focused_control().and_then(Control::as_field)
    }

    /// Whether character keys are currently text input
    pub fn is_typing(&self) -> bool {
        self.focused_field().map(Field::is_text).unwrap_or(false)
    }

    pub fn config(&self) -> &ScanConfiguration {
        &self.config
    }

    pub fn last_error(&self) -> Option<&str> {
        self.config.last_error.as_deref()
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn is_finished(&self) -> bool {
        !matches!(self.status, Status::Editing)
    }
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}
