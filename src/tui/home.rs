//! Home view - task list and navigation

use chrono::{Local, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::app::Action;
use super::components::HelpOverlay;
use super::dialogs::{ConfirmDialog, DetailDialog, DialogResult, TaskFormDialog};
use super::styles::Theme;
use crate::task::store::TaskFields;
use crate::task::{Priority, Task, TaskStore};

const TITLE_COL: usize = 38;

pub struct HomeView {
    store: TaskStore,

    // UI state
    cursor: usize,
    status: Option<String>,

    // Dialogs
    show_help: bool,
    form_dialog: Option<TaskFormDialog>,
    confirm_dialog: Option<ConfirmDialog>,
    detail_dialog: Option<DetailDialog>,
}

impl HomeView {
    pub fn new(store: TaskStore) -> Self {
        Self {
            store,
            cursor: 0,
            status: None,
            show_help: false,
            form_dialog: None,
            confirm_dialog: None,
            detail_dialog: None,
        }
    }

    pub fn has_dialog(&self) -> bool {
        self.show_help
            || self.form_dialog.is_some()
            || self.confirm_dialog.is_some()
            || self.detail_dialog.is_some()
    }

    fn selected(&self) -> Option<&Task> {
        self.store.tasks().get(self.cursor)
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        // Handle dialog input first
        if self.show_help {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')
            ) {
                self.show_help = false;
            }
            return None;
        }

        if let Some(mut dialog) = self.form_dialog.take() {
            match dialog.handle_key(key) {
                DialogResult::Continue => self.form_dialog = Some(dialog),
                DialogResult::Cancel => {}
                DialogResult::Submit(data) => {
                    let editing = dialog.editing().map(str::to_string);
                    self.apply_form(data, editing);
                }
            }
            return None;
        }

        if let Some(dialog) = &mut self.confirm_dialog {
            match dialog.handle_key(key) {
                DialogResult::Continue => {}
                DialogResult::Cancel => self.confirm_dialog = None,
                DialogResult::Submit(()) => {
                    self.confirm_dialog = None;
                    self.delete_selected();
                }
            }
            return None;
        }

        if let Some(dialog) = &mut self.detail_dialog {
            if matches!(dialog.handle_key(key), DialogResult::Cancel) {
                self.detail_dialog = None;
            }
            return None;
        }

        // Normal mode keybindings
        match key.code {
            KeyCode::Char('q') => return Some(Action::Quit),
            KeyCode::Char('?') => {
                self.show_help = true;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_cursor(-1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_cursor(1);
            }
            KeyCode::PageUp => {
                self.move_cursor(-10);
            }
            KeyCode::PageDown => {
                self.move_cursor(10);
            }
            KeyCode::Home | KeyCode::Char('g') => {
                self.cursor = 0;
            }
            KeyCode::End | KeyCode::Char('G') => {
                if !self.store.is_empty() {
                    self.cursor = self.store.len() - 1;
                }
            }
            KeyCode::Char('n') => {
                self.status = None;
                self.form_dialog = Some(TaskFormDialog::new());
            }
            KeyCode::Char('e') => {
                if let Some(dialog) = self.selected().map(TaskFormDialog::edit) {
                    self.status = None;
                    self.form_dialog = Some(dialog);
                }
            }
            KeyCode::Char('d') => {
                if let Some(dialog) = self.selected().map(|task| {
                    ConfirmDialog::new(
                        "Delete Task",
                        &format!("Are you sure you want to delete '{}'?", task.title),
                    )
                }) {
                    self.confirm_dialog = Some(dialog);
                }
            }
            KeyCode::Enter | KeyCode::Char('v') => {
                if let Some(dialog) = self.selected().map(DetailDialog::new) {
                    self.detail_dialog = Some(dialog);
                }
            }
            KeyCode::Char('p') => {
                match self.store.sort_by_priority() {
                    Ok(()) => self.status = Some("Sorted by priority".to_string()),
                    Err(e) => self.report_save_error(e),
                }
                self.cursor = 0;
            }
            KeyCode::Char('u') => {
                match self.store.sort_by_due_date() {
                    Ok(()) => self.status = Some("Sorted by due date".to_string()),
                    Err(e) => self.report_save_error(e),
                }
                self.cursor = 0;
            }
            _ => {}
        }

        None
    }

    fn move_cursor(&mut self, delta: i32) {
        let items = self.store.len();
        if items == 0 {
            return;
        }

        self.cursor = if delta < 0 {
            self.cursor.saturating_sub((-delta) as usize)
        } else {
            (self.cursor + delta as usize).min(items - 1)
        };
    }

    fn apply_form(&mut self, data: super::dialogs::TaskFormData, editing: Option<String>) {
        let result = match &editing {
            Some(id) => self
                .store
                .update(
                    id,
                    TaskFields {
                        title: data.title,
                        description: data.description,
                        due: data.due,
                        priority: data.priority,
                    },
                )
                .map(|_| ()),
            None => self
                .store
                .add(Task::new(&data.title, &data.description, data.due, data.priority)),
        };

        // The in-memory list reflects the change even when the save failed,
        // so the cursor moves either way.
        if editing.is_none() {
            self.cursor = self.store.len().saturating_sub(1);
        }

        if let Err(e) = result {
            self.report_save_error(e);
        }
    }

    fn delete_selected(&mut self) {
        let Some(id) = self.selected().map(|task| task.id.clone()) else {
            return;
        };

        let result = self.store.delete(&id);

        if self.cursor >= self.store.len() {
            self.cursor = self.store.len().saturating_sub(1);
        }

        if let Err(e) = result {
            self.report_save_error(e);
        }
    }

    fn report_save_error(&mut self, e: anyhow::Error) {
        tracing::error!("Failed to save tasks: {:#}", e);
        self.status = Some(format!("Save failed: {}", e));
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        // Layout: list + status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(area);

        self.render_list(frame, main_chunks[0], theme);
        self.render_status_bar(frame, main_chunks[1], theme);

        // Render dialogs on top
        if self.show_help {
            HelpOverlay::render(frame, area, theme);
        }

        if let Some(dialog) = &self.form_dialog {
            dialog.render(frame, area, theme);
        }

        if let Some(dialog) = &self.confirm_dialog {
            dialog.render(frame, area, theme);
        }

        if let Some(dialog) = &self.detail_dialog {
            dialog.render(frame, area, theme);
        }
    }

    fn render_list(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(format!(" Taskdeck ({}) ", self.store.len()))
            .title_style(Style::default().fg(theme.title).bold());

        let inner = block.inner(area);
        frame.render_widget(block, area);

        if self.store.is_empty() {
            let empty_text = vec![
                Line::from(""),
                Line::from("No tasks yet").style(Style::default().fg(theme.dimmed)),
                Line::from(""),
                Line::from("Press 'n' to add one").style(Style::default().fg(theme.hint)),
                Line::from("or run 'td add'").style(Style::default().fg(theme.hint)),
            ];
            let para = Paragraph::new(empty_text).alignment(Alignment::Center);
            frame.render_widget(para, inner);
            return;
        }

        let today = Local::now().date_naive();
        let list_items: Vec<ListItem> = self
            .store
            .tasks()
            .iter()
            .enumerate()
            .map(|(idx, task)| self.render_task_row(task, idx == self.cursor, today, theme))
            .collect();

        let list = List::new(list_items);
        frame.render_widget(list, inner);
    }

    fn render_task_row(
        &self,
        task: &Task,
        is_selected: bool,
        today: NaiveDate,
        theme: &Theme,
    ) -> ListItem<'_> {
        let marker = if task.completed { "✔" } else { " " };

        let title_style = if is_selected {
            Style::default().fg(theme.text).bold()
        } else {
            Style::default().fg(theme.text)
        };

        let due_style = if task.due < today && !task.completed {
            Style::default().fg(theme.overdue)
        } else {
            Style::default().fg(theme.dimmed)
        };

        let priority_color = match task.priority {
            Priority::Low => theme.low,
            Priority::Medium => theme.medium,
            Priority::High => theme.high,
        };

        let line = Line::from(vec![
            Span::styled(format!(" {} ", marker), Style::default().fg(theme.done)),
            Span::styled(
                format!(
                    "{:<width$}",
                    crate::cli::truncate(&task.title, TITLE_COL),
                    width = TITLE_COL
                ),
                title_style,
            ),
            Span::raw("  "),
            Span::styled(task.due.format("%Y-%m-%d").to_string(), due_style),
            Span::raw("  "),
            Span::styled(task.priority.label(), Style::default().fg(priority_color)),
        ]);

        if is_selected {
            ListItem::new(line).style(Style::default().bg(theme.selection))
        } else {
            ListItem::new(line)
        }
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        if let Some(status) = &self.status {
            let para = Paragraph::new(format!(" {}", status))
                .style(Style::default().fg(theme.hint).bg(theme.selection));
            frame.render_widget(para, area);
            return;
        }

        let key_style = Style::default().fg(theme.accent).bold();
        let desc_style = Style::default().fg(theme.dimmed);
        let sep_style = Style::default().fg(theme.border);

        let spans = vec![
            Span::styled(" j/k", key_style),
            Span::styled(" Navigate ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" n", key_style),
            Span::styled(" New ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" e", key_style),
            Span::styled(" Edit ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" d", key_style),
            Span::styled(" Delete ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" p/u", key_style),
            Span::styled(" Sort ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" ?", key_style),
            Span::styled(" Help ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" q", key_style),
            Span::styled(" Quit", desc_style),
        ];

        let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.selection));
        frame.render_widget(status, area);
    }
}
