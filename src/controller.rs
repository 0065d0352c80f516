//! Autocomplete Controller
//!
//! State machine behind one autocomplete-with-create field. It owns the
//! field's local state and decides what happens on every user event; the
//! component only renders it and performs the network calls it asks for.
//!
//! Network results come back with the [`Ticket`] of the mount that issued
//! them and are dropped if the field has since been unmounted or remounted.

use crate::models::{eq_ignore_case, ListOption};

/// Lifecycle of the field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Not mounted yet, nothing fetched
    Idle,
    /// List fetch in flight
    Loading,
    /// List cached (or fetch failed); local filtering only
    Ready,
    /// Create request in flight
    Creating,
}

/// Identifies the mount a network call belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// A create call the component must send to the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateRequest {
    pub ticket: Ticket,
    pub option: ListOption,
}

#[derive(Debug, Clone)]
pub struct AutocompleteController {
    committed: Option<String>,
    input_text: String,
    suggestions: Vec<ListOption>,
    all_options: Vec<ListOption>,
    show_suggestions: bool,
    phase: Phase,
    error: Option<String>,
    pending: Option<ListOption>,
    generation: u64,
    mounted: bool,
}

impl AutocompleteController {
    /// `committed` is the value already stored on the record, if any
    pub fn new(committed: Option<String>) -> Self {
        let committed = committed.filter(|v| !v.is_empty());
        Self {
            input_text: committed.clone().unwrap_or_default(),
            committed,
            suggestions: Vec::new(),
            all_options: Vec::new(),
            show_suggestions: false,
            phase: Phase::Idle,
            error: None,
            pending: None,
            generation: 0,
            mounted: false,
        }
    }

    // ========================
    // Accessors
    // ========================

    pub fn committed(&self) -> Option<&str> {
        self.committed.as_deref()
    }

    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    pub fn suggestions(&self) -> &[ListOption] {
        &self.suggestions
    }

    pub fn all_options(&self) -> &[ListOption] {
        &self.all_options
    }

    pub fn shows_suggestions(&self) -> bool {
        self.show_suggestions
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading | Phase::Creating)
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether the "Create new option" row should be offered
    pub fn offers_create(&self) -> bool {
        let text = self.input_text.trim();
        self.phase == Phase::Ready
            && !text.is_empty()
            && !self.suggestions.iter().any(|s| eq_ignore_case(&s.label, text))
    }

    // ========================
    // Mount / fetch
    // ========================

    /// Start a mount; the returned ticket tags the list fetch
    pub fn mount(&mut self) -> Ticket {
        self.generation += 1;
        self.mounted = true;
        self.phase = Phase::Loading;
        self.error = None;
        self.pending = None;
        Ticket(self.generation)
    }

    pub fn unmount(&mut self) {
        self.mounted = false;
        self.generation += 1;
        self.pending = None;
    }

    fn is_current(&self, ticket: Ticket) -> bool {
        self.mounted && ticket.0 == self.generation
    }

    /// Apply the list fetch result. Returns false if it was discarded.
    pub fn apply_fetch(&mut self, ticket: Ticket, result: Result<Vec<ListOption>, String>) -> bool {
        if !self.is_current(ticket) || self.phase != Phase::Loading {
            return false;
        }
        self.phase = Phase::Ready;

        match result {
            Ok(options) => {
                self.all_options = options;
                // Text typed while loading wins over the stored label
                if let Some(value) = self.committed.as_ref().filter(|v| **v == self.input_text) {
                    // Legacy records may hold a value with no matching option
                    self.input_text = self
                        .all_options
                        .iter()
                        .find(|o| &o.value == value)
                        .map(|o| o.label.clone())
                        .unwrap_or_else(|| value.clone());
                }
                self.refilter();
                self.commit_exact_match();
            }
            Err(message) => {
                self.error = Some(message);
            }
        }
        true
    }

    // ========================
    // Typing / selection
    // ========================

    pub fn input(&mut self, text: impl Into<String>) {
        self.input_text = text.into();
        self.error = None;

        if self.input_text.is_empty() {
            self.suggestions.clear();
            self.show_suggestions = false;
            self.committed = None;
        } else {
            self.refilter();
            self.show_suggestions = true;
            self.commit_exact_match();
        }
    }

    /// Re-open suggestions for existing text
    pub fn focus(&mut self) {
        if !self.input_text.is_empty() {
            self.refilter();
            self.show_suggestions = true;
        }
    }

    pub fn select(&mut self, option: &ListOption) {
        self.input_text = option.label.clone();
        self.committed = Some(option.value.clone());
        self.show_suggestions = false;
        self.suggestions.clear();
    }

    /// Enter key: pick the single suggestion, otherwise try to create
    pub fn press_enter(&mut self) -> Option<CreateRequest> {
        if let [only] = self.suggestions.as_slice() {
            let only = only.clone();
            self.select(&only);
            return None;
        }

        let text = self.input_text.trim();
        if text.is_empty() {
            return None;
        }
        let known = self.all_options.iter().any(|o| eq_ignore_case(&o.label, text));
        if !known || self.suggestions.is_empty() {
            return self.request_create();
        }
        None
    }

    /// Create a new option from the typed text.
    ///
    /// If the text matches an existing option by label or derived value, that
    /// option is selected instead and no request is made. Nothing is created
    /// until the list has loaded or while another create is in flight.
    pub fn request_create(&mut self) -> Option<CreateRequest> {
        if self.phase != Phase::Ready {
            return None;
        }
        let text = self.input_text.trim();
        if text.is_empty() {
            return None;
        }

        let candidate = ListOption::from_label(text);
        if let Some(existing) = self
            .all_options
            .iter()
            .find(|o| o.collides_with(&candidate))
            .cloned()
        {
            self.select(&existing);
            return None;
        }

        self.phase = Phase::Creating;
        self.error = None;
        self.pending = Some(candidate.clone());
        Some(CreateRequest {
            ticket: Ticket(self.generation),
            option: candidate,
        })
    }

    /// Apply the create result. Returns false if it was discarded.
    pub fn finish_create(
        &mut self,
        ticket: Ticket,
        result: Result<Vec<ListOption>, String>,
    ) -> bool {
        if !self.is_current(ticket) || self.phase != Phase::Creating {
            return false;
        }
        self.phase = Phase::Ready;
        let Some(requested) = self.pending.take() else {
            return false;
        };

        match result {
            Ok(options) => {
                self.all_options = options;
                // Someone else may have stored an equal option first
                let stored = self
                    .all_options
                    .iter()
                    .find(|o| o.collides_with(&requested))
                    .cloned()
                    .unwrap_or(requested);
                self.select(&stored);
            }
            Err(message) => {
                self.error = Some(message);
            }
        }
        true
    }

    fn refilter(&mut self) {
        let query = self.input_text.to_lowercase();
        self.suggestions = self
            .all_options
            .iter()
            .filter(|o| o.label.to_lowercase().contains(&query))
            .cloned()
            .collect();
    }

    fn commit_exact_match(&mut self) {
        if let Some(matched) = self
            .all_options
            .iter()
            .find(|o| eq_ignore_case(&o.label, &self.input_text))
        {
            if self.committed.as_deref() != Some(matched.value.as_str()) {
                self.committed = Some(matched.value.clone());
            }
        }
    }
}
