//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod output;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let (form_area, output_area) = layout::create_layout(area);

    forms::draw_signup_form(frame, form_area, app);
    output::draw(frame, output_area, app);

    layout::draw_status_bar(frame, app);
}
