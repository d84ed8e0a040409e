//! Help dialog component
//!
//! Lists the keyboard and mouse controls of the workspace.

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const BINDINGS: &[(&str, &str)] = &[
    ("j / ↓", "Next project"),
    ("k / ↑", "Previous project"),
    ("Enter", "Open highlighted project"),
    ("[", "Collapse / expand left pane"),
    ("]", "Collapse / expand right pane"),
    ("drag │", "Resize pane"),
    ("click ◀ ▶", "Collapse / expand pane"),
    ("?", "This help"),
    ("q", "Quit"),
];

#[derive(Default)]
pub struct HelpDialog;

impl Component for HelpDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => Some(Action::CloseModal),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let height = BINDINGS.len() as u16 + 4;
        let popup_area = centered_popup(area, 48, height);
        frame.render_widget(Clear, popup_area);

        let mut content = vec![Line::from("")];
        content.extend(BINDINGS.iter().map(|(keys, description)| {
            Line::from(vec![
                Span::styled(
                    format!(" {:>11} ", keys),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!(" {}", description)),
            ])
        }));

        let paragraph = Paragraph::new(content).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Controls ")
                .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                .border_style(Style::default().fg(Color::Cyan)),
        );
        frame.render_widget(paragraph, popup_area);
        Ok(())
    }
}
