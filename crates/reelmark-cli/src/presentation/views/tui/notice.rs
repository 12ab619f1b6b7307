use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::presentation::view_models::NoticeViewModel;

use super::status_level_to_color;

/// One line above the grid: the notice, or a loading indicator
pub struct NoticeView<'a> {
    notice: Option<&'a NoticeViewModel>,
    loading: bool,
}

impl<'a> NoticeView<'a> {
    pub fn new(notice: Option<&'a NoticeViewModel>, loading: bool) -> Self {
        Self { notice, loading }
    }
}

impl<'a> Widget for NoticeView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = if self.loading {
            Line::from(Span::styled("Loading...", Style::default().fg(Color::Cyan)))
        } else if let Some(notice) = self.notice {
            Line::from(Span::styled(
                notice.message.as_str(),
                Style::default().fg(status_level_to_color(notice.level)),
            ))
        } else {
            Line::default()
        };

        Paragraph::new(line).render(area, buf);
    }
}
