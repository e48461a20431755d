//! Application state and core logic

use crate::config::{FormDraft, TuiConfig};
use crate::controller::RecommendationController;
use crate::state::{
    AppState, Form, FormInput, RecommendationForm, SettingsState, ThemeContext, ToastQueue, View,
};
use crate::webhook::{RecommendationClientTrait, WebhookClient};
use anyhow::Result;
use chrono::{DateTime, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// One full pulse of the loading skeleton
const PULSE_PERIOD: Duration = Duration::from_millis(1200);

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Owns the recommendation request lifecycle
    pub controller: RecommendationController,
    /// Global theme collaborator
    pub theme: ThemeContext,
    /// Transient notifications
    pub toasts: ToastQueue,
    /// Loaded user configuration
    pub config: TuiConfig,
    /// Feedback message shown in the status bar until the next key press
    pub status_message: Option<String>,
    /// When the form draft was last saved
    pub draft_saved_at: Option<DateTime<Utc>>,
    started_at: Instant,
    persist_to_disk: bool,
    quit: bool,
}

impl App {
    /// Create the app from the user's configuration and saved draft
    pub fn new() -> Result<Self> {
        let config = TuiConfig::load().unwrap_or_else(|e| {
            tracing::warn!("Failed to load config, using defaults: {e}");
            TuiConfig::default()
        });

        let client = WebhookClient::new(config.resolved_webhook_url())?;
        tracing::info!("Using recommendation webhook at {}", client.url());

        let draft = if config.autosave() {
            FormDraft::load().unwrap_or_else(|e| {
                tracing::warn!("Failed to load form draft: {e}");
                None
            })
        } else {
            None
        };

        let theme = ThemeContext::new(config.theme());
        let mut app = Self::from_parts(config, Arc::new(client), theme, draft);
        app.persist_to_disk = true;
        Ok(app)
    }

    /// Assemble an app from its collaborators without touching the disk
    pub fn from_parts(
        config: TuiConfig,
        client: Arc<dyn RecommendationClientTrait>,
        theme: ThemeContext,
        draft: Option<FormDraft>,
    ) -> Self {
        let settings = SettingsState::from_config(&config);
        let mut controller = RecommendationController::new(client, config.request_timeout());
        controller.set_success_notifications(settings.notifications);

        let (form, draft_saved_at) = match draft {
            Some(draft) => (
                RecommendationForm::from_input(&draft.input),
                Some(draft.saved_at),
            ),
            None => (RecommendationForm::new(), None),
        };

        Self {
            state: AppState {
                form,
                settings,
                ..AppState::default()
            },
            controller,
            theme,
            toasts: ToastQueue::new(),
            config,
            status_message: None,
            draft_saved_at,
            started_at: Instant::now(),
            persist_to_disk: false,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Commit finished requests and expire old toasts. Called once per frame.
    pub fn tick(&mut self) {
        if self.controller.poll_completions(&mut self.toasts) {
            self.state.reset_results_scroll();
        }
        self.toasts.expire(Instant::now());
    }

    /// Whether the loading skeleton is animating
    pub fn is_animating(&self) -> bool {
        self.controller.is_loading() && self.state.settings.animations
    }

    /// Eased pulse phase in `0.0..=1.0` for the skeleton, `None` when static
    pub fn skeleton_pulse(&self) -> Option<f32> {
        if !self.is_animating() {
            return None;
        }
        let period = PULSE_PERIOD.as_secs_f32();
        let phase = (self.started_at.elapsed().as_secs_f32() % period) / period;
        // Triangle wave so the pulse rises then falls
        let t = if phase < 0.5 {
            phase * 2.0
        } else {
            2.0 - phase * 2.0
        };
        Some(simple_easing::sine_in_out(t))
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if ctrl && key.code == KeyCode::Char('c') {
            self.quit = true;
            return Ok(());
        }

        // Clear any status messages on key press
        self.status_message = None;

        if key.code == KeyCode::F(2) || (ctrl && key.code == KeyCode::Char('o')) {
            self.state.toggle_settings();
            return Ok(());
        }

        match self.state.current_view {
            View::Recommend => self.handle_recommend_key(key),
            View::Settings => self.handle_settings_key(key),
        }
    }

    /// Handle keys in the recommendation form
    fn handle_recommend_key(&mut self, key: KeyEvent) -> Result<()> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let on_submit_row = self.state.form.is_submit_row_active();

        match key.code {
            KeyCode::Tab => self.state.form.next_field(),
            KeyCode::BackTab => self.state.form.prev_field(),
            KeyCode::Char('s') if ctrl => self.submit_form(),
            KeyCode::Char('r') if ctrl => self.retry(),
            KeyCode::Char('l') if ctrl => {
                if self.controller.reset() {
                    self.state.reset_results_scroll();
                }
            }
            KeyCode::Char('y') if ctrl => {
                if let Err(e) = self.copy_recommendation() {
                    tracing::warn!("Clipboard copy failed: {e}");
                    self.status_message = Some("Clipboard unavailable".to_string());
                }
            }
            KeyCode::PageDown => self.state.scroll_results_down(),
            KeyCode::PageUp => self.state.scroll_results_up(),
            KeyCode::Esc => self.toasts.dismiss(),
            KeyCode::Enter if on_submit_row => self.submit_form(),
            KeyCode::Enter => {
                let is_multiline = self
                    .state
                    .form
                    .get_field(self.state.form.active_field())
                    .is_some_and(|f| f.is_multiline);
                if is_multiline {
                    if let Some(field) = self.state.form.get_active_field_mut() {
                        field.push_newline();
                    }
                } else {
                    self.state.form.next_field();
                }
            }
            KeyCode::Char(c) if !ctrl => {
                if let Some(field) = self.state.form.get_active_field_mut() {
                    field.push_char(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = self.state.form.get_active_field_mut() {
                    field.pop_char();
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Handle keys in the settings panel
    fn handle_settings_key(&mut self, key: KeyEvent) -> Result<()> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => self.state.current_view = View::Recommend,
            KeyCode::Up | KeyCode::Char('k') => self.state.settings.move_selection_up(),
            KeyCode::Down | KeyCode::Char('j') => self.state.settings.move_selection_down(),
            KeyCode::Char('s') if ctrl => self.save_settings(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.state.settings.activate(&mut self.theme);
                self.apply_settings();
            }
            _ => {}
        }
        Ok(())
    }

    /// Submit the form if it is complete and nothing is in flight
    fn submit_form(&mut self) {
        if self.controller.is_loading() {
            return;
        }

        let input = self.state.form.to_input();
        if !self.controller.submit(input.clone()) {
            let missing: Vec<&str> = self
                .state
                .form
                .missing_fields()
                .iter()
                .map(|field| field.name.as_str())
                .collect();
            tracing::debug!(?missing, "Submit blocked by blank required fields");
            self.status_message = Some(format!(
                "Please fill in: {}",
                self.state.form.missing_labels()
            ));
            return;
        }

        self.state.reset_results_scroll();
        if self.state.settings.autosave {
            self.save_draft(input);
        }
    }

    fn retry(&mut self) {
        if self.controller.retry() {
            self.state.reset_results_scroll();
        }
    }

    /// Push preference changes to their collaborators
    fn apply_settings(&mut self) {
        self.controller
            .set_success_notifications(self.state.settings.notifications);
        if self.state.settings.autosave && self.state.settings.dirty {
            self.save_settings();
        }
    }

    fn save_settings(&mut self) {
        self.state
            .settings
            .apply_to(&mut self.config, &self.theme);

        if self.persist_to_disk {
            if let Err(e) = self.config.save() {
                tracing::warn!("Failed to save settings: {e}");
                self.status_message = Some("Failed to save settings".to_string());
                return;
            }
        }

        self.state.settings.dirty = false;
        self.status_message = Some("Settings saved".to_string());
    }

    fn save_draft(&mut self, input: FormInput) {
        let draft = FormDraft::new(input);
        if self.persist_to_disk {
            if let Err(e) = draft.save() {
                tracing::warn!("Failed to save form draft: {e}");
                return;
            }
        }
        self.draft_saved_at = Some(draft.saved_at);
    }

    fn copy_recommendation(&mut self) -> Result<()> {
        if let Some(recommendation) = self.controller.state().recommendation() {
            let text = recommendation.to_plain_text();
            copy_to_clipboard(&text)?;
            self.status_message = Some("Copied recommendations".to_string());
        }
        Ok(())
    }

    /// Save the draft and abandon any in-flight request before exit
    pub fn shutdown(&mut self) {
        if self.state.settings.autosave && !self.state.form.is_blank() {
            self.save_draft(self.state.form.to_input());
        }
        self.controller.cancel();
    }
}

fn copy_to_clipboard(text: &str) -> Result<()> {
    use arboard::Clipboard;
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}
