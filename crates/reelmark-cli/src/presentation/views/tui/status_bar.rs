//! Status Bar View Component
//!
//! Renders the bottom status bar with the active view, card count and key help.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use reelmark_runtime::View;

use crate::presentation::view_models::StatusBarViewModel;

pub struct StatusBarView<'a> {
    model: &'a StatusBarViewModel,
}

impl<'a> StatusBarView<'a> {
    pub fn new(model: &'a StatusBarViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for StatusBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        use ratatui::layout::{Constraint, Layout};

        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::horizontal([Constraint::Percentage(35), Constraint::Percentage(65)])
            .split(inner);

        let view = match self.model.view {
            View::Search => "Search",
            View::Favorites => "Favorites",
        };
        let mut status = vec![
            Span::raw(format!("{} ", view)),
            Span::raw("| "),
            Span::raw(format!("{} film(s) ", self.model.card_count)),
        ];
        if self.model.loading {
            status.push(Span::styled("| loading", Style::default().fg(Color::Cyan)));
        }
        Paragraph::new(Line::from(status)).render(chunks[0], buf);

        let key = Style::default().fg(Color::Yellow);
        let help_line = Line::from(vec![
            Span::styled("[/]", key),
            Span::raw("search "),
            Span::styled("[Tab]", key),
            Span::raw("view "),
            Span::styled("[j/k]", key),
            Span::raw("move "),
            Span::styled("[Enter]", key),
            Span::raw("details "),
            Span::styled("[f]", key),
            Span::raw("fav "),
            Span::styled("[1-5]", key),
            Span::raw("rate "),
            Span::styled("[q]", key),
            Span::raw("uit"),
        ]);
        Paragraph::new(help_line).render(chunks[1], buf);
    }
}
