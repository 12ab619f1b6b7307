use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Tabs, Widget},
};
use reelmark_runtime::View;

use crate::presentation::view_models::TabsViewModel;

pub struct TabsView<'a> {
    model: &'a TabsViewModel,
}

impl<'a> TabsView<'a> {
    pub fn new(model: &'a TabsViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for TabsView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let titles = vec![
            " Search [F1] ".to_string(),
            format!(" Favorites ({}) [F2] ", self.model.favorites_count),
        ];
        let selected = match self.model.active {
            View::Search => 0,
            View::Favorites => 1,
        };

        Tabs::new(titles)
            .select(selected)
            .style(Style::default().fg(Color::DarkGray))
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .render(area, buf);
    }
}
