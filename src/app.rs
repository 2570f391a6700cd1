//! Application state and core logic

use crate::config::TuiConfig;
use crate::platform;
use crate::state::{AppState, FormFocus};
use crate::storage::StorageClient;
use crate::submission::{self, SubmitError};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Storage client for avatar uploads
    pub storage: StorageClient,
    /// Loaded user configuration
    pub config: TuiConfig,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub async fn new() -> Result<Self> {
        let config = TuiConfig::load().unwrap_or_else(|err| {
            tracing::warn!("Failed to load config: {err:#}");
            TuiConfig::default()
        });

        let storage = StorageClient::new(config.storage_address.clone()).await?;

        let state = AppState {
            storage_connected: storage.check_connection().await,
            ..Default::default()
        };

        Ok(Self {
            state,
            storage,
            config,
            quit: false,
        })
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.quit = true;
            }
            KeyCode::Tab => self.state.form.next_field(),
            KeyCode::BackTab => self.state.form.prev_field(),
            // Submit (Ctrl+S from anywhere)
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit().await?;
            }
            KeyCode::Char('t') if key.modifiers.contains(platform::SHORTCUT_MODIFIER) => {
                self.state.form.append_tech();
            }
            KeyCode::Char('r') if key.modifiers.contains(platform::SHORTCUT_MODIFIER) => {
                self.remove_focused_tech();
            }
            KeyCode::Esc => {
                self.state.reset_form();
                self.state.clear_messages();
                self.state.output = None;
            }
            KeyCode::Left if self.state.form.is_buttons_row_active() => {
                self.state.form.prev_button();
            }
            KeyCode::Right if self.state.form.is_buttons_row_active() => {
                self.state.form.next_button();
            }
            // Enter on the buttons row triggers the selected button
            // Button order: 0=Adicionar, 1=Salvar
            KeyCode::Enter if self.state.form.is_buttons_row_active() => {
                match self.state.form.selected_button {
                    0 => self.state.form.append_tech(),
                    1 => self.submit().await?,
                    _ => {}
                }
            }
            // All fields are single-line; Enter advances
            KeyCode::Enter => self.state.form.next_field(),
            // Form field input
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(field) = self.state.form.active_field_mut() {
                    field.push_char(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = self.state.form.active_field_mut() {
                    field.pop_char();
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Remove the tech row under the cursor, if any
    fn remove_focused_tech(&mut self) {
        match self.state.form.focus() {
            FormFocus::TechTitle(row) | FormFocus::TechKnowledge(row) => {
                self.state.form.remove_tech_at(row);
            }
            _ => {}
        }
    }

    /// Validate, upload the avatar, and echo the payload
    pub async fn submit(&mut self) -> Result<()> {
        // One submission at a time
        if self.state.submitting {
            return Ok(());
        }
        self.state.submitting = true;
        self.state.clear_messages();

        let input = self.state.form.to_input();
        let bucket = self.config.bucket_or_default().to_string();
        let result = submission::submit(&mut self.storage, &bucket, input).await;
        self.state.submitting = false;

        match result {
            Ok(payload) => {
                self.state.output = Some(serde_json::to_string_pretty(&payload)?);
                self.state.reset_form();
                self.state.status_message = Some("Usuário criado!".to_string());
                tracing::info!(user = %payload.name, "sign-up submitted");
            }
            Err(SubmitError::Validation(errors)) => {
                tracing::debug!(count = errors.len(), "validation failed");
                self.state.field_errors = errors;
            }
            Err(SubmitError::Upload(err)) => {
                tracing::warn!("avatar upload failed: {err:#}");
                // The form is kept as-is so the user can resubmit
                self.state.push_error(format!("Falha no upload: {err:#}"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_app() -> App {
        // No storage service is listening in tests; the client stays
        // disconnected, which only matters for the status-bar dot.
        App::new().await.unwrap()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn shortcut(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), platform::SHORTCUT_MODIFIER)
    }

    #[tokio::test]
    async fn test_typing_fills_active_field() {
        let mut app = test_app().await;
        app.state.form.active_field_index = 1; // name
        app.handle_key(key(KeyCode::Char('i'))).await.unwrap();
        app.handle_key(key(KeyCode::Char('g'))).await.unwrap();
        app.handle_key(key(KeyCode::Backspace)).await.unwrap();
        assert_eq!(app.state.form.name.as_text(), "i");
    }

    #[tokio::test]
    async fn test_ctrl_t_appends_tech_row() {
        let mut app = test_app().await;
        app.handle_key(shortcut('t')).await.unwrap();
        app.handle_key(shortcut('t')).await.unwrap();
        assert_eq!(app.state.form.techs().len(), 2);
    }

    #[tokio::test]
    async fn test_ctrl_r_removes_focused_tech_row() {
        let mut app = test_app().await;
        app.handle_key(shortcut('t')).await.unwrap();
        app.state.form.active_field_index = 4; // first tech title
        app.handle_key(shortcut('r')).await.unwrap();
        assert!(app.state.form.techs().is_empty());
    }

    #[tokio::test]
    async fn test_ctrl_r_outside_tech_rows_is_noop() {
        let mut app = test_app().await;
        app.handle_key(shortcut('t')).await.unwrap();
        app.state.form.active_field_index = 0; // avatar
        app.handle_key(shortcut('r')).await.unwrap();
        assert_eq!(app.state.form.techs().len(), 1);
    }

    #[tokio::test]
    async fn test_submit_with_invalid_form_sets_field_errors() {
        let mut app = test_app().await;
        app.submit().await.unwrap();
        assert!(!app.state.field_errors.is_empty());
        assert!(app.state.field_errors.get("avatar").is_some());
        assert!(app.state.output.is_none());
    }

    #[tokio::test]
    async fn test_submit_blocked_while_in_flight() {
        let mut app = test_app().await;
        app.state.submitting = true;
        app.submit().await.unwrap();
        // Untouched: the guard returned before validation ran
        assert!(app.state.field_errors.is_empty());
    }

    #[tokio::test]
    async fn test_esc_resets_form_and_output() {
        let mut app = test_app().await;
        app.state.form.name.set_text("igor".to_string());
        app.state.output = Some("{}".to_string());
        app.handle_key(key(KeyCode::Esc)).await.unwrap();
        assert_eq!(app.state.form.name.as_text(), "");
        assert!(app.state.output.is_none());
    }

    #[tokio::test]
    async fn test_ctrl_c_requests_quit() {
        let mut app = test_app().await;
        assert!(!app.should_quit());
        app.handle_key(ctrl('c')).await.unwrap();
        assert!(app.should_quit());
    }
}
