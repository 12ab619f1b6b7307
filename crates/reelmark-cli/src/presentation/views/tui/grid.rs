use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use crate::presentation::formatters::{join_present, star_glyphs};
use crate::presentation::view_models::{MovieCardViewModel, MovieGridViewModel};

/// Cards of the visible grid as a selectable list
pub struct MovieListView<'a> {
    model: &'a MovieGridViewModel,
}

impl<'a> MovieListView<'a> {
    pub fn new(model: &'a MovieGridViewModel) -> Self {
        Self { model }
    }

    pub fn build_list(&self) -> List<'a> {
        let items: Vec<ListItem> = self.model.cards.iter().map(card_item).collect();

        List::new(items)
            .block(Block::default().borders(Borders::ALL))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ")
    }
}

fn card_item(card: &MovieCardViewModel) -> ListItem<'_> {
    let heart = if card.is_favorite {
        Span::styled("♥ ", Style::default().fg(Color::Red))
    } else {
        Span::raw("  ")
    };

    let mut headline = vec![
        heart,
        Span::styled(card.title.as_str(), Style::default().add_modifier(Modifier::BOLD)),
    ];
    if let Some(year) = &card.year {
        headline.push(Span::raw(format!(" ({})", year)));
    }
    headline.push(Span::raw("  "));
    headline.push(Span::styled(
        star_glyphs(&card.stars.filled),
        Style::default().fg(Color::Yellow),
    ));

    let details = if card.degraded {
        "details unavailable".to_string()
    } else {
        join_present(
            &[
                card.genre.as_deref(),
                card.director.as_deref(),
                card.runtime.as_deref(),
                card.external_rating.as_deref(),
            ],
            " · ",
        )
    };

    ListItem::new(vec![
        Line::from(headline),
        Line::from(Span::styled(
            format!("  {}", details),
            Style::default().fg(Color::DarkGray),
        )),
    ])
}
