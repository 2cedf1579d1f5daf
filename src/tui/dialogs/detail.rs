//! Task detail dialog

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::DialogResult;
use crate::task::Task;
use crate::tui::styles::Theme;

pub struct DetailDialog {
    task: Task,
}

impl DetailDialog {
    pub fn new(task: &Task) -> Self {
        Self { task: task.clone() }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> DialogResult<()> {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('q') => {
                DialogResult::Cancel
            }
            _ => DialogResult::Continue,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let dialog_area = super::centered_rect(area, 56, 12);

        frame.render_widget(Clear, dialog_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(format!(" {} ", self.task.title))
            .title_style(Style::default().fg(theme.title).bold());

        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        let label_style = Style::default().fg(theme.dimmed);
        let value_style = Style::default().fg(theme.text);

        let description = if self.task.description.is_empty() {
            "(none)".to_string()
        } else {
            self.task.description.clone()
        };

        let lines = vec![
            Line::from(vec![
                Span::styled("Description: ", label_style),
                Span::styled(description, value_style),
            ]),
            Line::from(vec![
                Span::styled("Due date:    ", label_style),
                Span::styled(self.task.due.format("%Y-%m-%d").to_string(), value_style),
            ]),
            Line::from(vec![
                Span::styled("Priority:    ", label_style),
                Span::styled(self.task.priority.label(), value_style),
            ]),
            Line::from(vec![
                Span::styled("Completed:   ", label_style),
                Span::styled(if self.task.completed { "yes" } else { "no" }, value_style),
            ]),
            Line::from(vec![
                Span::styled("ID:          ", label_style),
                Span::styled(self.task.id.clone(), Style::default().fg(theme.hint)),
            ]),
        ];

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(inner);

        let body = Paragraph::new(lines).wrap(Wrap { trim: true });
        frame.render_widget(body, chunks[0]);

        let hint = Line::from(vec![
            Span::styled("Esc", Style::default().fg(theme.hint)),
            Span::raw(" close"),
        ]);
        frame.render_widget(Paragraph::new(hint), chunks[1]);
    }
}
