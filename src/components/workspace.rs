//! Workspace component - the three-pane writing screen
//!
//! Left: project navigator. Center: manuscript. Right: assistant panel.
//! Owns navigator state; pane geometry comes from the layout controller.

use crate::action::Action;
use crate::component::Component;
use crate::components::{compose, WorkspaceLayout};
use crate::model::{PaneLayout, PanePhase, PaneSide, PointerCapture};
use crate::services::{ProjectId, ProjectKey};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

// ═══════════════════════════════════════════════════════════════════════════════
// Workspace Component
// ═══════════════════════════════════════════════════════════════════════════════

pub struct WorkspaceComponent {
    projects: Vec<ProjectId>,
    pub list_state: ListState,
}

impl WorkspaceComponent {
    /// Build the navigator, highlighting `active` if it is listed.
    ///
    /// An active project missing from `projects` is appended so it can
    /// always be reselected.
    pub fn new(mut projects: Vec<ProjectId>, active: Option<&ProjectId>) -> Self {
        if let Some(active) = active {
            if !projects.contains(active) {
                projects.push(active.clone());
            }
        }
        let selected = active
            .and_then(|a| projects.iter().position(|p| p == a))
            .or(if projects.is_empty() { None } else { Some(0) });

        let mut list_state = ListState::default();
        list_state.select(selected);
        Self {
            projects,
            list_state,
        }
    }

    pub fn projects(&self) -> &[ProjectId] {
        &self.projects
    }

    pub fn selected_project(&self) -> Option<&ProjectId> {
        self.list_state.selected().and_then(|i| self.projects.get(i))
    }

    pub fn select_next(&mut self) {
        if self.projects.is_empty() {
            return;
        }
        let next = match self.list_state.selected() {
            Some(i) => (i + 1).min(self.projects.len() - 1),
            None => 0,
        };
        self.list_state.select(Some(next));
    }

    pub fn select_prev(&mut self) {
        if self.projects.is_empty() {
            return;
        }
        let prev = self.list_state.selected().map_or(0, |i| i.saturating_sub(1));
        self.list_state.select(Some(prev));
    }

    fn render_navigator(&mut self, frame: &mut Frame, area: Rect, active: Option<&ProjectId>) {
        let items: Vec<ListItem> = if self.projects.is_empty() {
            vec![ListItem::new(Span::styled(
                "No projects configured",
                Style::default().fg(Color::DarkGray),
            ))]
        } else {
            self.projects
                .iter()
                .map(|project| {
                    let is_active = Some(project) == active;
                    let marker = if is_active { "● " } else { "  " };
                    let style = if is_active {
                        Style::default()
                            .fg(Color::Green)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(Color::White)
                    };
                    ListItem::new(Line::from(vec![
                        Span::styled(marker, Style::default().fg(Color::Green)),
                        Span::styled(project.to_string(), style),
                    ]))
                })
                .collect()
        };

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Projects ")
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .highlight_style(Style::default().bg(Color::DarkGray))
            .highlight_symbol("> ");
        frame.render_stateful_widget(list, area, &mut self.list_state);
    }
}

impl Component for WorkspaceComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::ForceQuit)
            }
            KeyCode::Char('j') | KeyCode::Down => Some(Action::NextProject),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevProject),
            KeyCode::Enter => Some(Action::ActivateProject),
            KeyCode::Char('[') => Some(Action::ToggleCollapse(PaneSide::Left)),
            KeyCode::Char(']') => Some(Action::ToggleCollapse(PaneSide::Right)),
            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::OpenQuitDialog),
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::NextProject => self.select_next(),
            Action::PrevProject => self.select_prev(),
            _ => {}
        }
        Ok(None)
    }

    /// Draws only the navigator; see [`draw_workspace`] for the full screen
    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        self.render_navigator(frame, area, None);
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Rendering
// ═══════════════════════════════════════════════════════════════════════════════

/// Everything the workspace needs from the App to render a frame
pub struct WorkspaceRenderContext<'a> {
    pub panes: &'a PaneLayout,
    pub capture: &'a PointerCapture,
    pub active_project: Option<&'a ProjectId>,
    pub cell_width_px: u32,
    pub min_center_cols: u16,
    pub status_message: Option<&'a str>,
}

/// Draw the workspace and return its geometry for mouse hit testing
pub fn draw_workspace(
    frame: &mut Frame,
    area: Rect,
    workspace: &mut WorkspaceComponent,
    ctx: &WorkspaceRenderContext,
) -> Result<WorkspaceLayout> {
    let layout = compose(area, ctx.panes, ctx.cell_width_px, ctx.min_center_cols);

    if let Some(left) = layout.left {
        workspace.render_navigator(frame, left, ctx.active_project);
    }
    render_splitter(frame, layout.left_splitter, PaneSide::Left, ctx);
    render_manuscript(frame, layout.center, ctx);
    render_splitter(frame, layout.right_splitter, PaneSide::Right, ctx);
    if let Some(right) = layout.right {
        render_assistant(frame, right, ctx);
    }
    render_status_bar(frame, layout.status, ctx);

    Ok(layout)
}

/// Glyph on a splitter's toggle cell; points the way the pane will move
fn toggle_glyph(side: PaneSide, collapsed: bool) -> &'static str {
    match (side, collapsed) {
        (PaneSide::Left, false) | (PaneSide::Right, true) => "◀",
        (PaneSide::Left, true) | (PaneSide::Right, false) => "▶",
    }
}

fn render_splitter(frame: &mut Frame, area: Rect, side: PaneSide, ctx: &WorkspaceRenderContext) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let style = if ctx.capture.owner() == Some(side) {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else if ctx.panes.is_collapsed(side) {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Gray)
    };

    let mut lines = Vec::with_capacity(area.height as usize);
    lines.push(Line::from(Span::styled(
        toggle_glyph(side, ctx.panes.is_collapsed(side)),
        Style::default().fg(Color::Cyan),
    )));
    let rail = if ctx.panes.is_collapsed(side) { "┆" } else { "│" };
    for _ in 1..area.height {
        lines.push(Line::from(Span::styled(rail, style)));
    }
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_manuscript(frame: &mut Frame, area: Rect, ctx: &WorkspaceRenderContext) {
    let title = match ctx.active_project {
        Some(project) => format!(" Manuscript · {} ", project),
        None => " Manuscript ".to_string(),
    };
    let body = match ctx.active_project {
        Some(_) => vec![
            Line::from(""),
            Line::from(Span::styled(
                "Chapters open here.",
                Style::default().fg(Color::White),
            )),
        ],
        None => vec![
            Line::from(""),
            Line::from(Span::styled(
                "No project open. Pick one on the left and press Enter.",
                Style::default().fg(Color::DarkGray),
            )),
        ],
    };

    // A resize in progress disables selection-style highlighting
    let border = if ctx.capture.is_captured() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Cyan)
    };
    let paragraph = Paragraph::new(body)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(border),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn phase_label(phase: PanePhase) -> &'static str {
    match phase {
        PanePhase::Expanded => "expanded",
        PanePhase::Dragging => "resizing",
        PanePhase::Collapsed => "collapsed",
    }
}

fn render_assistant(frame: &mut Frame, area: Rect, ctx: &WorkspaceRenderContext) {
    let mut lines = vec![Line::from("")];
    for side in PaneSide::all() {
        let bounds = ctx.panes.bounds(side);
        let max = bounds
            .max
            .map_or_else(|| "∞".to_string(), |m| m.to_string());
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {:<5} ", side.name()),
                Style::default().fg(Color::Yellow),
            ),
            Span::raw(format!("{:>4}px ", ctx.panes.width(side))),
            Span::styled(
                format!("[{}..{}] ", bounds.min, max),
                Style::default().fg(Color::DarkGray),
            ),
            Span::raw(phase_label(ctx.panes.phase(side))),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Assistant ")
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(paragraph, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, ctx: &WorkspaceRenderContext) {
    let key = ProjectKey::resolve(ctx.active_project);
    let mut spans = vec![
        Span::styled(
            format!(" {} ", key.as_str()),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(
            " L {}px  R {}px ",
            ctx.panes.width(PaneSide::Left),
            ctx.panes.width(PaneSide::Right)
        )),
    ];

    if let Some(side) = ctx.capture.owner() {
        spans.push(Span::styled(
            format!(" resizing {} pane ", side),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
    }

    if let Some(status) = ctx.status_message {
        spans.push(Span::styled(
            format!(" {} ", status),
            Style::default().fg(Color::Yellow),
        ));
    }

    spans.push(Span::styled(" ? help ", Style::default().fg(Color::DarkGray)));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(names: &[&str]) -> Vec<ProjectId> {
        names.iter().filter_map(|n| ProjectId::new(*n)).collect()
    }

    #[test]
    fn test_navigator_selects_active_project() {
        let active = ProjectId::new("b");
        let workspace = WorkspaceComponent::new(ids(&["a", "b", "c"]), active.as_ref());
        assert_eq!(workspace.selected_project(), active.as_ref());
    }

    #[test]
    fn test_unlisted_active_project_is_appended() {
        let active = ProjectId::new("z");
        let workspace = WorkspaceComponent::new(ids(&["a"]), active.as_ref());
        assert_eq!(workspace.projects().len(), 2);
        assert_eq!(workspace.selected_project(), active.as_ref());
    }

    #[test]
    fn test_navigation_clamps_at_ends() {
        let mut workspace = WorkspaceComponent::new(ids(&["a", "b"]), None);
        workspace.select_prev();
        assert_eq!(workspace.selected_project().map(|p| p.as_str()), Some("a"));
        workspace.select_next();
        workspace.select_next();
        assert_eq!(workspace.selected_project().map(|p| p.as_str()), Some("b"));
    }

    #[test]
    fn test_empty_navigator() {
        let mut workspace = WorkspaceComponent::new(Vec::new(), None);
        workspace.select_next();
        assert_eq!(workspace.selected_project(), None);
    }

    #[test]
    fn test_key_bindings() {
        let mut workspace = WorkspaceComponent::new(Vec::new(), None);
        let press = |c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE);
        assert_eq!(
            workspace.handle_key_event(press('[')).unwrap(),
            Some(Action::ToggleCollapse(PaneSide::Left))
        );
        assert_eq!(
            workspace.handle_key_event(press(']')).unwrap(),
            Some(Action::ToggleCollapse(PaneSide::Right))
        );
        assert_eq!(
            workspace.handle_key_event(press('q')).unwrap(),
            Some(Action::OpenQuitDialog)
        );
    }

    #[test]
    fn test_toggle_glyph_direction() {
        assert_eq!(toggle_glyph(PaneSide::Left, false), "◀");
        assert_eq!(toggle_glyph(PaneSide::Left, true), "▶");
        assert_eq!(toggle_glyph(PaneSide::Right, false), "▶");
        assert_eq!(toggle_glyph(PaneSide::Right, true), "◀");
    }
}
