//! Sign-up form rendering

use super::field_renderer::{draw_error_line, draw_field};
use crate::app::App;
use crate::platform;
use crate::state::{FormFocus, TechRow};
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use crate::validation::FieldErrors;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Field box height (top border + content + bottom border)
const FIELD_HEIGHT: u16 = 3;
/// Width of the knowledge box in a tech row
const KNOWLEDGE_WIDTH: u16 = 12;

/// Draw the sign-up form with inline validation errors
pub fn draw_signup_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let errors = &app.state.field_errors;
    let focus = form.focus();

    let block = Block::default()
        .title(" Cadastro ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let scalar_fields = [
        (&form.avatar_path, FormFocus::AvatarPath, "avatar"),
        (&form.name, FormFocus::Name, "name"),
        (&form.email, FormFocus::Email, "email"),
        (&form.password, FormFocus::Password, "password"),
    ];

    // Build the vertical layout; error lines take space only when present
    let mut constraints: Vec<Constraint> = Vec::new();
    for (_, _, path) in &scalar_fields {
        constraints.push(Constraint::Length(FIELD_HEIGHT));
        if errors.get(path).is_some() {
            constraints.push(Constraint::Length(1));
        }
    }
    constraints.push(Constraint::Length(1)); // tech section header
    for index in 0..form.techs().len() {
        constraints.push(Constraint::Length(FIELD_HEIGHT));
        if tech_row_error(errors, index).is_some() {
            constraints.push(Constraint::Length(1));
        }
    }
    if errors.get("techs").is_some() {
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Length(BUTTON_HEIGHT)); // buttons row
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let mut cursor = 0;
    for (field, field_focus, path) in scalar_fields {
        draw_field(frame, chunks[cursor], field, focus == field_focus);
        cursor += 1;
        if let Some(message) = errors.get(path) {
            draw_error_line(frame, chunks[cursor], message);
            cursor += 1;
        }
    }

    draw_tech_header(frame, chunks[cursor]);
    cursor += 1;

    for (index, row) in form.techs().iter().enumerate() {
        draw_tech_row(frame, chunks[cursor], row, index, focus);
        cursor += 1;
        if let Some(message) = tech_row_error(errors, index) {
            draw_error_line(frame, chunks[cursor], message);
            cursor += 1;
        }
    }
    if let Some(message) = errors.get("techs") {
        draw_error_line(frame, chunks[cursor], message);
        cursor += 1;
    }

    draw_buttons_row(
        frame,
        chunks[cursor],
        form.is_buttons_row_active(),
        form.selected_button,
    );
}

/// First error for a tech row, title before knowledge
fn tech_row_error(errors: &FieldErrors, index: usize) -> Option<&str> {
    errors
        .get(&format!("techs[{index}].title"))
        .or_else(|| errors.get(&format!("techs[{index}].knowledge")))
}

fn draw_tech_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::raw(" Tecnologias"),
        Span::styled(
            format!(
                "  ({}: adicionar, {}: remover)",
                platform::ADD_TECH_SHORTCUT,
                platform::REMOVE_TECH_SHORTCUT
            ),
            Style::default().fg(Color::DarkGray),
        ),
    ]));
    frame.render_widget(header, area);
}

fn draw_tech_row(frame: &mut Frame, area: Rect, row: &TechRow, index: usize, focus: FormFocus) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),                // Title
            Constraint::Length(KNOWLEDGE_WIDTH), // Knowledge
        ])
        .split(area);

    draw_field(
        frame,
        chunks[0],
        &row.title,
        focus == FormFocus::TechTitle(index),
    );
    draw_field(
        frame,
        chunks[1],
        &row.knowledge,
        focus == FormFocus::TechKnowledge(index),
    );
}

fn draw_buttons_row(frame: &mut Frame, area: Rect, is_focused: bool, selected_button: usize) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(14), // Adicionar
            Constraint::Length(14), // Salvar
            Constraint::Min(0),
        ])
        .split(area);

    render_action_button(
        frame,
        chunks[0],
        "Adicionar",
        is_focused && selected_button == 0,
        Color::Blue,
    );
    render_action_button(
        frame,
        chunks[1],
        "Salvar",
        is_focused && selected_button == 1,
        Color::Green,
    );
}
