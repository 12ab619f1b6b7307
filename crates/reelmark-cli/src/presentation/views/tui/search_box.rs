use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::SearchBoxViewModel;

pub struct SearchBoxView<'a> {
    model: &'a SearchBoxViewModel,
    focused: bool,
}

impl<'a> SearchBoxView<'a> {
    pub fn new(model: &'a SearchBoxViewModel, focused: bool) -> Self {
        Self { model, focused }
    }
}

impl<'a> Widget for SearchBoxView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = if self.focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(" Search for a film ");

        let content = if self.model.term.is_empty() && !self.focused {
            Span::styled("press / to type", Style::default().fg(Color::DarkGray))
        } else {
            Span::raw(self.model.term.as_str())
        };

        Paragraph::new(content).block(block).render(area, buf);
    }
}
