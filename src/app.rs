//! Root application component
//!
//! The App owns the pane layout controller, the width store and the
//! pointer capture, and routes terminal events to them. Child components
//! handle navigation and overlays.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    column_to_px, draw_workspace, HelpDialog, Hit, QuitDialog, WorkspaceComponent,
    WorkspaceLayout, WorkspaceRenderContext,
};
use crate::config::Config;
use crate::model::modal::{Modal, ModalStack};
use crate::model::{LayoutEvent, PaneLayout, PaneSide, PointerCapture};
use crate::services::{KeyValueStore, ProjectId, ProjectKey, WidthStore};
use anyhow::Result;
use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{layout::Rect, Frame};
use tracing::{debug, info, warn};

// ═══════════════════════════════════════════════════════════════════════════════
// App Struct
// ═══════════════════════════════════════════════════════════════════════════════

pub struct App {
    pub config: Config,

    /// Persisted widths and active project
    width_store: WidthStore,

    /// `None` when no project is open; widths then go under the default key
    pub active_project: Option<ProjectId>,

    pub panes: PaneLayout,

    /// Held while a splitter drag is in progress
    pub capture: PointerCapture,

    /// Geometry of the last drawn frame, used for mouse hit testing
    last_layout: Option<WorkspaceLayout>,

    pub modals: ModalStack,

    pub should_quit: bool,

    /// Status message to display
    pub status_message: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub workspace: WorkspaceComponent,
    pub quit_dialog: QuitDialog,
    pub help_dialog: HelpDialog,
}

// ═══════════════════════════════════════════════════════════════════════════════
// App Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    /// Create the app over `store`.
    ///
    /// `project` overrides the active project recorded in storage and is
    /// written back as the new active project.
    pub fn new(config: Config, store: Box<dyn KeyValueStore>, project: Option<ProjectId>) -> App {
        let width_store = WidthStore::new(store);

        let active_project = match project {
            Some(id) => {
                if let Err(e) = width_store.set_active_project(Some(&id)) {
                    warn!(error = %e, "could not record active project");
                }
                Some(id)
            }
            None => width_store.active_project(),
        };

        let key = ProjectKey::resolve(active_project.as_ref());
        let stored = width_store.load(&key);
        let panes = PaneLayout::new(&config, stored);
        info!(
            project = key.as_str(),
            left = panes.width(PaneSide::Left),
            right = panes.width(PaneSide::Right),
            "workspace layout restored"
        );

        let projects = config
            .projects
            .iter()
            .filter_map(|p| ProjectId::new(p.as_str()))
            .collect();
        let workspace = WorkspaceComponent::new(projects, active_project.as_ref());

        App {
            config,
            width_store,
            active_project,
            panes,
            capture: PointerCapture::new(),
            last_layout: None,
            modals: ModalStack::new(),
            should_quit: false,
            status_message: None,
            workspace,
            quit_dialog: QuitDialog,
            help_dialog: HelpDialog,
        }
    }

    pub fn width_store(&self) -> &WidthStore {
        &self.width_store
    }

    fn project_key(&self) -> ProjectKey {
        ProjectKey::resolve(self.active_project.as_ref())
    }

    fn pointer_px(&self, column: u16) -> i32 {
        column_to_px(column, self.config.cell_width_px)
    }

    /// Feed controller events to the pointer capture and the width store
    fn apply(&mut self, events: Vec<LayoutEvent>) {
        for event in events {
            self.capture.observe(&event);
            match event {
                LayoutEvent::WidthChanged { side, width } | LayoutEvent::Expanded { side, width } => {
                    self.persist_width(side, width);
                }
                LayoutEvent::Collapsed(side) => debug!(side = %side, "pane collapsed"),
                LayoutEvent::DragStarted(side) => debug!(side = %side, "drag started"),
                LayoutEvent::DragEnded(side) => {
                    debug!(side = %side, width = self.panes.width(side), "drag ended")
                }
            }
        }
    }

    fn persist_width(&mut self, side: PaneSide, width: u32) {
        let key = self.project_key();
        if let Err(e) = self.width_store.save(side, &key, width) {
            warn!(side = %side, project = key.as_str(), error = %e, "failed to save pane width");
            self.status_message = Some("Could not save pane layout".to_string());
        }
    }

    /// Make `project` active and restore its saved widths
    fn switch_project(&mut self, project: ProjectId) {
        if self.active_project.as_ref() == Some(&project) {
            return;
        }
        let events = self.panes.end_drag();
        self.apply(events);

        if let Err(e) = self.width_store.set_active_project(Some(&project)) {
            warn!(error = %e, "could not record active project");
        }
        let key = ProjectKey::resolve(Some(&project));
        let stored = self.width_store.load(&key);
        self.panes = PaneLayout::new(&self.config, stored);
        info!(project = key.as_str(), "switched project");
        self.active_project = Some(project);
        self.status_message = None;
    }

    /// Release everything held by an in-progress gesture.
    ///
    /// Called before the terminal is restored so a drag never outlives
    /// the UI.
    pub fn shutdown(&mut self) {
        let events = self.panes.end_drag();
        self.apply(events);
    }

    fn handle_modal_key_event(&mut self, modal: &Modal, key: KeyEvent) -> Result<Option<Action>> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.handle_key_event(key),
            Modal::Help => self.help_dialog.handle_key_event(key),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if let Some(modal) = self.modals.top().cloned() {
            self.handle_modal_key_event(&modal, key)
        } else {
            self.workspace.handle_key_event(key)
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        // A captured pointer goes to the drag wherever it is
        if self.capture.is_captured() {
            let action = match mouse.kind {
                MouseEventKind::Drag(_) | MouseEventKind::Moved => {
                    Some(Action::DragTo(self.pointer_px(mouse.column)))
                }
                MouseEventKind::Up(_) => Some(Action::EndDrag),
                _ => None,
            };
            return Ok(action);
        }

        if !self.modals.is_empty() {
            return Ok(None);
        }

        let MouseEventKind::Down(MouseButton::Left) = mouse.kind else {
            return Ok(None);
        };
        let hit = self
            .last_layout
            .and_then(|layout| layout.hit_test(mouse.column, mouse.row));
        let action = match hit {
            Some(Hit::Toggle(side)) => Some(Action::ToggleCollapse(side)),
            Some(Hit::Splitter(side)) if !self.panes.is_collapsed(side) => {
                Some(Action::BeginDrag(side, self.pointer_px(mouse.column)))
            }
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::Tick | Action::Resize(_, _) => {}
            Action::FocusLost | Action::EndDrag => {
                let events = self.panes.end_drag();
                self.apply(events);
            }
            Action::ForceQuit => {
                self.shutdown();
                self.should_quit = true;
            }
            Action::BeginDrag(side, x) => {
                let events = self.panes.begin_drag(side, x);
                self.apply(events);
            }
            Action::DragTo(x) => {
                let events = self.panes.on_pointer_move(x);
                self.apply(events);
            }
            Action::ToggleCollapse(side) => {
                let events = self.panes.toggle_collapse(side);
                self.apply(events);
            }
            Action::NextProject | Action::PrevProject => {
                return self.workspace.update(action);
            }
            Action::ActivateProject => {
                if let Some(project) = self.workspace.selected_project().cloned() {
                    self.switch_project(project);
                }
            }
            Action::OpenQuitDialog => self.modals.push(Modal::QuitConfirm),
            Action::OpenHelp => self.modals.push(Modal::Help),
            Action::CloseModal => {
                self.modals.pop();
            }
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let ctx = WorkspaceRenderContext {
            panes: &self.panes,
            capture: &self.capture,
            active_project: self.active_project.as_ref(),
            cell_width_px: self.config.cell_width_px,
            min_center_cols: self.config.min_center_cols,
            status_message: self.status_message.as_deref(),
        };
        let layout = draw_workspace(frame, area, &mut self.workspace, &ctx)?;
        self.last_layout = Some(layout);

        match self.modals.top() {
            Some(Modal::QuitConfirm) => self.quit_dialog.draw(frame, area)?,
            Some(Modal::Help) => self.help_dialog.draw(frame, area)?,
            None => {}
        }
        Ok(())
    }
}
