//! Sign-up form state: fixed fields plus the dynamic tech list

use super::field::FormField;
use crate::validation::{AvatarFile, SignupInput, TechInput};
use uuid::Uuid;

/// Fixed fields before the tech rows (avatar, name, email, password)
const FIXED_FIELDS: usize = 4;
/// Sub-fields per tech row (title, knowledge)
const TECH_ROW_FIELDS: usize = 2;
/// Buttons on the trailing buttons row (Adicionar, Salvar)
pub const FORM_BUTTONS: usize = 2;

/// One repeatable technology/knowledge row
///
/// `id` is a stable render key, independent of the row's position in
/// the list.
#[derive(Debug, Clone)]
pub struct TechRow {
    pub id: Uuid,
    pub title: FormField,
    pub knowledge: FormField,
}

impl TechRow {
    fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            title: FormField::text("title", "Título"),
            knowledge: FormField::number("knowledge", "1-100", "0"),
        }
    }
}

/// Which part of the form currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    AvatarPath,
    Name,
    Email,
    Password,
    TechTitle(usize),
    TechKnowledge(usize),
    Buttons,
}

/// The whole sign-up form session
///
/// Created empty, mutated on every keystroke, replaced by a fresh
/// instance after a successful submit.
#[derive(Debug, Clone)]
pub struct SignupForm {
    pub avatar_path: FormField,
    pub name: FormField,
    pub email: FormField,
    pub password: FormField,
    techs: Vec<TechRow>,
    pub active_field_index: usize,
    /// Which button is selected when on the buttons row (0=Adicionar, 1=Salvar)
    pub selected_button: usize,
}

impl SignupForm {
    pub fn new() -> Self {
        Self {
            avatar_path: FormField::text("avatar", "Avatar (caminho do arquivo)"),
            name: FormField::text("name", "Name"),
            email: FormField::text("email", "Email"),
            password: FormField::password("password", "Senha"),
            techs: Vec::new(),
            active_field_index: 0,
            selected_button: 1, // Default to "Salvar"
        }
    }

    /// Total focusable positions: fixed fields, tech sub-fields, buttons row
    pub fn field_count(&self) -> usize {
        FIXED_FIELDS + self.techs.len() * TECH_ROW_FIELDS + 1
    }

    pub fn next_field(&mut self) {
        self.active_field_index = (self.active_field_index + 1) % self.field_count();
    }

    pub fn prev_field(&mut self) {
        if self.active_field_index == 0 {
            self.active_field_index = self.field_count() - 1;
        } else {
            self.active_field_index -= 1;
        }
    }

    /// Map the flat focus index onto the form structure
    pub fn focus(&self) -> FormFocus {
        match self.active_field_index {
            0 => FormFocus::AvatarPath,
            1 => FormFocus::Name,
            2 => FormFocus::Email,
            3 => FormFocus::Password,
            i => {
                let offset = i - FIXED_FIELDS;
                let row = offset / TECH_ROW_FIELDS;
                if row >= self.techs.len() {
                    FormFocus::Buttons
                } else if offset % TECH_ROW_FIELDS == 0 {
                    FormFocus::TechTitle(row)
                } else {
                    FormFocus::TechKnowledge(row)
                }
            }
        }
    }

    /// The field under the cursor, if focus is on an editable field
    pub fn active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.focus() {
            FormFocus::AvatarPath => Some(&mut self.avatar_path),
            FormFocus::Name => Some(&mut self.name),
            FormFocus::Email => Some(&mut self.email),
            FormFocus::Password => Some(&mut self.password),
            FormFocus::TechTitle(row) => self.techs.get_mut(row).map(|t| &mut t.title),
            FormFocus::TechKnowledge(row) => self.techs.get_mut(row).map(|t| &mut t.knowledge),
            FormFocus::Buttons => None,
        }
    }

    /// Returns true if the buttons row is currently active
    pub fn is_buttons_row_active(&self) -> bool {
        matches!(self.focus(), FormFocus::Buttons)
    }

    /// Move to the next button (wraps around)
    pub fn next_button(&mut self) {
        self.selected_button = (self.selected_button + 1) % FORM_BUTTONS;
    }

    /// Move to the previous button (wraps around)
    pub fn prev_button(&mut self) {
        if self.selected_button == 0 {
            self.selected_button = FORM_BUTTONS - 1;
        } else {
            self.selected_button -= 1;
        }
    }

    /// Append a fresh default tech row at the end of the list
    pub fn append_tech(&mut self) {
        self.techs.push(TechRow::new());
    }

    /// Remove the tech row at `index`, shifting later rows down
    ///
    /// Out-of-bounds indexes are a silent no-op.
    pub fn remove_tech_at(&mut self, index: usize) {
        if index < self.techs.len() {
            self.techs.remove(index);
            // Focus may now point past the shortened form
            self.active_field_index = self.active_field_index.min(self.field_count() - 1);
        }
    }

    /// The current ordered tech rows
    pub fn techs(&self) -> &[TechRow] {
        &self.techs
    }

    /// Snapshot the form into a validation input
    ///
    /// The avatar path is resolved to file metadata here, so validation
    /// itself never touches the filesystem.
    pub fn to_input(&self) -> SignupInput {
        SignupInput {
            avatar: AvatarFile::from_path(self.avatar_path.as_text()),
            name: self.name.as_text().to_string(),
            email: self.email.as_text().to_string(),
            password: self.password.as_text().to_string(),
            techs: self
                .techs
                .iter()
                .map(|row| TechInput {
                    title: row.title.as_text().to_string(),
                    knowledge: row.knowledge.as_text().to_string(),
                })
                .collect(),
        }
    }
}

impl Default for SignupForm {
    fn default() -> Self {
        Self::new()
    }
}
