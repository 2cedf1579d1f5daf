//! Task form dialog, used for both creating and editing a task

use chrono::{Local, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::*;
use tui_input::backend::crossterm::EventHandler;
use tui_input::Input;

use super::DialogResult;
use crate::task::{Priority, Task};
use crate::tui::styles::Theme;

const FIELD_COUNT: usize = 4;
const PRIORITY_FIELD: usize = 3;

/// Validated full replacement set produced by the form.
#[derive(Clone)]
pub struct TaskFormData {
    pub title: String,
    pub description: String,
    pub due: NaiveDate,
    pub priority: Priority,
}

pub struct TaskFormDialog {
    title: Input,
    description: Input,
    due: Input,
    priority_index: usize,
    focused_field: usize,
    editing: Option<String>,
    error_message: Option<String>,
}

impl TaskFormDialog {
    /// Empty form for a new task: due date defaults to today, priority to
    /// medium.
    pub fn new() -> Self {
        Self {
            title: Input::default(),
            description: Input::default(),
            due: Input::new(Local::now().date_naive().format("%Y-%m-%d").to_string()),
            priority_index: priority_index_of(Priority::default()),
            focused_field: 0,
            editing: None,
            error_message: None,
        }
    }

    /// Form pre-filled with a task's current values; submitting produces
    /// the full replacement set for an update.
    pub fn edit(task: &Task) -> Self {
        Self {
            title: Input::new(task.title.clone()),
            description: Input::new(task.description.clone()),
            due: Input::new(task.due.format("%Y-%m-%d").to_string()),
            priority_index: priority_index_of(task.priority),
            focused_field: 0,
            editing: Some(task.id.clone()),
            error_message: None,
        }
    }

    /// Id of the task being edited, if this is an edit form.
    pub fn editing(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> DialogResult<TaskFormData> {
        match key.code {
            KeyCode::Esc => {
                self.error_message = None;
                DialogResult::Cancel
            }
            KeyCode::Enter => {
                let title = self.title.value().trim().to_string();
                if title.is_empty() {
                    self.error_message = Some("Title must not be empty".to_string());
                    return DialogResult::Continue;
                }

                let due = match NaiveDate::parse_from_str(self.due.value().trim(), "%Y-%m-%d") {
                    Ok(due) => due,
                    Err(_) => {
                        self.error_message =
                            Some("Due date must be a valid YYYY-MM-DD date".to_string());
                        return DialogResult::Continue;
                    }
                };

                self.error_message = None;
                DialogResult::Submit(TaskFormData {
                    title,
                    description: self.description.value().trim().to_string(),
                    due,
                    priority: Priority::all()[self.priority_index],
                })
            }
            KeyCode::Tab => {
                self.focused_field = (self.focused_field + 1) % FIELD_COUNT;
                DialogResult::Continue
            }
            KeyCode::BackTab => {
                self.focused_field = if self.focused_field == 0 {
                    FIELD_COUNT - 1
                } else {
                    self.focused_field - 1
                };
                DialogResult::Continue
            }
            KeyCode::Left if self.focused_field == PRIORITY_FIELD => {
                self.priority_index = if self.priority_index == 0 {
                    Priority::all().len() - 1
                } else {
                    self.priority_index - 1
                };
                DialogResult::Continue
            }
            KeyCode::Right | KeyCode::Char(' ') if self.focused_field == PRIORITY_FIELD => {
                self.priority_index = (self.priority_index + 1) % Priority::all().len();
                DialogResult::Continue
            }
            _ => {
                if self.focused_field != PRIORITY_FIELD {
                    self.current_input_mut()
                        .handle_event(&crossterm::event::Event::Key(key));
                    self.error_message = None;
                }
                DialogResult::Continue
            }
        }
    }

    fn current_input_mut(&mut self) -> &mut Input {
        match self.focused_field {
            0 => &mut self.title,
            1 => &mut self.description,
            2 => &mut self.due,
            _ => &mut self.title,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let dialog_area = super::centered_rect(area, 60, 14);

        frame.render_widget(Clear, dialog_area);

        let title = if self.editing.is_some() {
            " Edit Task "
        } else {
            " New Task "
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .title(title)
            .title_style(Style::default().fg(theme.title).bold());

        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Min(1),
            ])
            .split(inner);

        let text_fields: [(&str, &Input); 3] = [
            ("Title:", &self.title),
            ("Description:", &self.description),
            ("Due date:", &self.due),
        ];

        for (idx, (label, input)) in text_fields.iter().enumerate() {
            let is_focused = idx == self.focused_field;
            self.render_text_field(frame, chunks[idx], label, input, is_focused, theme);
        }

        self.render_priority_field(frame, chunks[PRIORITY_FIELD], theme);

        // Error message, or key hints
        let footer = if let Some(error) = &self.error_message {
            Line::from(Span::styled(
                error.clone(),
                Style::default().fg(theme.error),
            ))
        } else {
            Line::from(vec![
                Span::styled("Enter", Style::default().fg(theme.hint)),
                Span::raw(" save  "),
                Span::styled("Tab", Style::default().fg(theme.hint)),
                Span::raw(" next field  "),
                Span::styled("Esc", Style::default().fg(theme.hint)),
                Span::raw(" cancel"),
            ])
        };
        frame.render_widget(Paragraph::new(footer), chunks[4]);
    }

    fn render_text_field(
        &self,
        frame: &mut Frame,
        area: Rect,
        label: &str,
        input: &Input,
        is_focused: bool,
        theme: &Theme,
    ) {
        let label_style = if is_focused {
            Style::default().fg(theme.accent).underlined()
        } else {
            Style::default().fg(theme.dimmed)
        };
        let value_style = if is_focused {
            Style::default().fg(theme.accent)
        } else {
            Style::default().fg(theme.text)
        };

        let value = input.value();
        let mut spans = vec![Span::styled(format!("{:<13}", label), label_style)];

        if is_focused {
            let cursor = input.visual_cursor().min(value.len());
            let (before, after) = value.split_at(cursor);
            spans.push(Span::styled(before.to_string(), value_style));
            spans.push(Span::styled("█", Style::default().fg(theme.accent)));
            spans.push(Span::styled(after.to_string(), value_style));
        } else {
            spans.push(Span::styled(value.to_string(), value_style));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_priority_field(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let is_focused = self.focused_field == PRIORITY_FIELD;
        let label_style = if is_focused {
            Style::default().fg(theme.accent).underlined()
        } else {
            Style::default().fg(theme.dimmed)
        };

        let mut spans = vec![Span::styled(format!("{:<13}", "Priority:"), label_style)];
        for (idx, priority) in Priority::all().iter().enumerate() {
            let style = if idx == self.priority_index {
                Style::default().fg(theme.accent).bold()
            } else {
                Style::default().fg(theme.dimmed)
            };
            spans.push(Span::styled(format!("[{}] ", priority.label()), style));
        }
        if is_focused {
            spans.push(Span::styled(
                " ←/→ change",
                Style::default().fg(theme.hint),
            ));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

fn priority_index_of(priority: Priority) -> usize {
    Priority::all()
        .iter()
        .position(|p| *p == priority)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(dialog: &mut TaskFormDialog, s: &str) {
        for c in s.chars() {
            dialog.handle_key(key(KeyCode::Char(c)));
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_task() -> Task {
        Task::new("Buy milk", "two liters", date(2024, 6, 1), Priority::High)
    }

    #[test]
    fn test_new_form_defaults() {
        let dialog = TaskFormDialog::new();
        assert!(dialog.title.value().is_empty());
        assert_eq!(dialog.priority_index, priority_index_of(Priority::Medium));
        assert!(dialog.editing().is_none());
        // Due defaults to today's date in form format.
        assert!(NaiveDate::parse_from_str(dialog.due.value(), "%Y-%m-%d").is_ok());
    }

    #[test]
    fn test_edit_form_prefills() {
        let task = sample_task();
        let dialog = TaskFormDialog::edit(&task);
        assert_eq!(dialog.title.value(), "Buy milk");
        assert_eq!(dialog.description.value(), "two liters");
        assert_eq!(dialog.due.value(), "2024-06-01");
        assert_eq!(dialog.priority_index, priority_index_of(Priority::High));
        assert_eq!(dialog.editing(), Some(task.id.as_str()));
    }

    #[test]
    fn test_esc_cancels() {
        let mut dialog = TaskFormDialog::new();
        let result = dialog.handle_key(key(KeyCode::Esc));
        assert!(matches!(result, DialogResult::Cancel));
    }

    #[test]
    fn test_tab_cycles_fields() {
        let mut dialog = TaskFormDialog::new();
        assert_eq!(dialog.focused_field, 0);

        for expected in [1, 2, 3, 0] {
            dialog.handle_key(key(KeyCode::Tab));
            assert_eq!(dialog.focused_field, expected);
        }

        dialog.handle_key(key(KeyCode::BackTab));
        assert_eq!(dialog.focused_field, FIELD_COUNT - 1);
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut dialog = TaskFormDialog::new();
        type_str(&mut dialog, "Water plants");
        assert_eq!(dialog.title.value(), "Water plants");

        dialog.handle_key(key(KeyCode::Tab));
        type_str(&mut dialog, "front and back");
        assert_eq!(dialog.description.value(), "front and back");
        assert_eq!(dialog.title.value(), "Water plants");
    }

    #[test]
    fn test_priority_cycling() {
        let mut dialog = TaskFormDialog::new();
        // Focus the priority field.
        dialog.focused_field = PRIORITY_FIELD;
        let start = dialog.priority_index;

        dialog.handle_key(key(KeyCode::Right));
        assert_eq!(
            dialog.priority_index,
            (start + 1) % Priority::all().len()
        );

        dialog.handle_key(key(KeyCode::Left));
        assert_eq!(dialog.priority_index, start);
    }

    #[test]
    fn test_submit_empty_title_is_rejected() {
        let mut dialog = TaskFormDialog::new();
        let result = dialog.handle_key(key(KeyCode::Enter));
        assert!(matches!(result, DialogResult::Continue));
        assert!(dialog.error_message.is_some());
    }

    #[test]
    fn test_submit_invalid_date_is_rejected() {
        let mut dialog = TaskFormDialog::new();
        type_str(&mut dialog, "Title");
        // Move to the due field and replace its contents.
        dialog.focused_field = 2;
        dialog.due = Input::new("soonish".to_string());

        let result = dialog.handle_key(key(KeyCode::Enter));
        assert!(matches!(result, DialogResult::Continue));
        assert!(dialog.error_message.is_some());
    }

    #[test]
    fn test_submit_valid_form() {
        let mut dialog = TaskFormDialog::new();
        type_str(&mut dialog, "  Water plants  ");
        dialog.due = Input::new("2024-07-15".to_string());
        dialog.focused_field = PRIORITY_FIELD;
        dialog.handle_key(key(KeyCode::Right)); // medium -> high

        let result = dialog.handle_key(key(KeyCode::Enter));
        match result {
            DialogResult::Submit(data) => {
                assert_eq!(data.title, "Water plants");
                assert_eq!(data.due, date(2024, 7, 15));
                assert_eq!(data.priority, Priority::High);
            }
            _ => panic!("expected submit"),
        }
    }

    #[test]
    fn test_typing_clears_error() {
        let mut dialog = TaskFormDialog::new();
        dialog.handle_key(key(KeyCode::Enter));
        assert!(dialog.error_message.is_some());

        dialog.handle_key(key(KeyCode::Char('a')));
        assert!(dialog.error_message.is_none());
    }
}
