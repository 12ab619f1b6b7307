use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::presentation::formatters::star_glyphs;
use crate::presentation::view_models::MovieDetailViewModel;

pub struct MovieModalView<'a> {
    model: &'a MovieDetailViewModel,
}

impl<'a> MovieModalView<'a> {
    pub fn new(model: &'a MovieDetailViewModel) -> Self {
        Self { model }
    }
}

fn field<'a>(label: &'a str, value: Option<&'a str>) -> Option<Line<'a>> {
    value.map(|value| {
        Line::from(vec![
            Span::styled(format!("{:<10}", label), Style::default().fg(Color::DarkGray)),
            Span::raw(value),
        ])
    })
}

impl<'a> Widget for MovieModalView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let m = self.model;
        let title = match &m.year {
            Some(year) => format!(" {} ({}) ", m.title, year),
            None => format!(" {} ", m.title),
        };

        let mut lines: Vec<Line> = [
            field("Runtime", m.runtime.as_deref()),
            field("Genre", m.genre.as_deref()),
            field("Director", m.director.as_deref()),
            field("Cast", m.cast.as_deref()),
            field("IMDb", m.external_rating.as_deref()),
            field("Poster", Some(m.poster_url.as_str())),
        ]
        .into_iter()
        .flatten()
        .collect();

        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled(
                if m.is_favorite { "♥ Favorite  " } else { "♡ Not a favorite  " },
                Style::default().fg(Color::Red),
            ),
            Span::styled(star_glyphs(&m.stars.filled), Style::default().fg(Color::Yellow)),
        ]));

        if let Some(plot) = &m.plot {
            lines.push(Line::default());
            lines.push(Line::from(plot.as_str()));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(title, Style::default().add_modifier(Modifier::BOLD)))
            .title_bottom(" [f] favorite  [1-5] rate  [Esc] close ");

        Clear.render(area, buf);
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
