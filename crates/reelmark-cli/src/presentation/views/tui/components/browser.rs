//! Browser Component (Page-level)
//!
//! Owns search-box focus and one list selection per view. Everything else is
//! read from the screen ViewModel.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    widgets::ListState,
};
use reelmark_runtime::View;
use reelmark_types::MovieId;

use crate::presentation::view_models::{MovieCardViewModel, TuiScreenViewModel};
use crate::presentation::views::tui::{
    MovieListView, MovieModalView, NoticeView, SearchBoxView, StatusBarView, TabsView,
};

/// Actions the browser emits to its parent
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseAction {
    Quit,
    EditQuery(String),
    Submit,
    SwitchView,
    ShowSearch,
    ShowFavorites,
    ToggleFavorite(MovieId),
    Rate(MovieId, u8),
    OpenDetail(MovieId),
    CloseDetail,
    DismissNotice,
}

pub struct BrowserComponent {
    search_focused: bool,
    search_list: ListState,
    favorites_list: ListState,
}

impl BrowserComponent {
    pub fn new() -> Self {
        Self {
            search_focused: true,
            search_list: ListState::default(),
            favorites_list: ListState::default(),
        }
    }

    pub fn is_search_focused(&self) -> bool {
        self.search_focused
    }

    /// Handle keyboard input
    ///
    /// Returns an action when the parent must change application state.
    pub fn handle_input(
        &mut self,
        key: KeyEvent,
        screen: &TuiScreenViewModel,
    ) -> Option<BrowseAction> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(BrowseAction::Quit);
        }

        if let Some(modal) = &screen.modal {
            let id = MovieId::from(modal.id.as_str());
            return match key.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => Some(BrowseAction::CloseDetail),
                KeyCode::Char('f') => Some(BrowseAction::ToggleFavorite(id)),
                KeyCode::Char(c) => star_key(c).map(|stars| BrowseAction::Rate(id, stars)),
                _ => None,
            };
        }

        let active = screen.tabs.active;
        match key.code {
            KeyCode::Tab => {
                self.search_focused = active.toggled() == View::Search;
                return Some(BrowseAction::SwitchView);
            }
            KeyCode::F(1) => {
                self.search_focused = true;
                return Some(BrowseAction::ShowSearch);
            }
            KeyCode::F(2) => {
                self.search_focused = false;
                return Some(BrowseAction::ShowFavorites);
            }
            _ => {}
        }

        if self.search_focused && active == View::Search {
            return self.handle_search_input(key, screen);
        }

        let len = screen.grid.cards.len();
        match key.code {
            KeyCode::Char('/') | KeyCode::Char('s') => {
                self.search_focused = true;
                (active == View::Favorites).then_some(BrowseAction::ShowSearch)
            }
            KeyCode::Char('j') | KeyCode::Down => {
                self.next(active, len);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.previous(active);
                None
            }
            KeyCode::Char('f') => self
                .selected_card(screen)
                .map(|card| BrowseAction::ToggleFavorite(MovieId::from(card.id.as_str()))),
            KeyCode::Enter | KeyCode::Char('o') => self
                .selected_card(screen)
                .map(|card| BrowseAction::OpenDetail(MovieId::from(card.id.as_str()))),
            KeyCode::Esc => Some(BrowseAction::DismissNotice),
            KeyCode::Char('q') => Some(BrowseAction::Quit),
            KeyCode::Char(c) => {
                let stars = star_key(c)?;
                self.selected_card(screen)
                    .map(|card| BrowseAction::Rate(MovieId::from(card.id.as_str()), stars))
            }
            _ => None,
        }
    }

    fn handle_search_input(
        &mut self,
        key: KeyEvent,
        screen: &TuiScreenViewModel,
    ) -> Option<BrowseAction> {
        let term = &screen.search_box.term;
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(BrowseAction::EditQuery(format!("{}{}", term, c)))
            }
            KeyCode::Backspace => {
                let mut chars = term.chars();
                chars.next_back()?;
                Some(BrowseAction::EditQuery(chars.as_str().to_string()))
            }
            KeyCode::Enter => Some(BrowseAction::Submit),
            KeyCode::Down => {
                self.search_focused = false;
                None
            }
            KeyCode::Esc => {
                self.search_focused = false;
                Some(BrowseAction::DismissNotice)
            }
            _ => None,
        }
    }

    /// Render the browser page
    ///
    /// Layout: [Tabs | Search box | Notice | Grid | Status bar], modal on top.
    pub fn render(&mut self, f: &mut Frame, area: Rect, screen: &TuiScreenViewModel) {
        let chunks = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(4),
            Constraint::Length(3),
        ])
        .split(area);

        f.render_widget(TabsView::new(&screen.tabs), chunks[0]);

        let focused = self.search_focused && screen.tabs.active == View::Search;
        f.render_widget(SearchBoxView::new(&screen.search_box, focused), chunks[1]);
        f.render_widget(NoticeView::new(screen.notice.as_ref(), screen.loading), chunks[2]);

        // Index Safety: clamp selection to data bounds
        let len = screen.grid.cards.len();
        let state = self.list_state(screen.tabs.active);
        match state.selected() {
            _ if len == 0 => state.select(None),
            Some(i) if i >= len => state.select(Some(len - 1)),
            None => state.select(Some(0)),
            _ => {}
        }
        let list = MovieListView::new(&screen.grid).build_list();
        f.render_stateful_widget(list, chunks[3], state);

        f.render_widget(StatusBarView::new(&screen.status_bar), chunks[4]);

        if let Some(modal) = &screen.modal {
            f.render_widget(MovieModalView::new(modal), centered(area, 80, 80));
        } else if focused {
            let x = chunks[1].x + 1 + screen.search_box.term.chars().count() as u16;
            let x = x.min(chunks[1].right().saturating_sub(2));
            f.set_cursor_position((x, chunks[1].y + 1));
        }
    }

    fn list_state(&mut self, view: View) -> &mut ListState {
        match view {
            View::Search => &mut self.search_list,
            View::Favorites => &mut self.favorites_list,
        }
    }

    fn selected_card<'s>(&self, screen: &'s TuiScreenViewModel) -> Option<&'s MovieCardViewModel> {
        let state = match screen.tabs.active {
            View::Search => &self.search_list,
            View::Favorites => &self.favorites_list,
        };
        let cards = &screen.grid.cards;
        let index = state.selected().unwrap_or(0).min(cards.len().checked_sub(1)?);
        cards.get(index)
    }

    fn next(&mut self, view: View, len: usize) {
        if len == 0 {
            return;
        }
        let state = self.list_state(view);
        let next = match state.selected() {
            Some(i) => (i + 1).min(len - 1),
            None => 0,
        };
        state.select(Some(next));
    }

    fn previous(&mut self, view: View) {
        let state = self.list_state(view);
        let prev = state.selected().map(|i| i.saturating_sub(1)).unwrap_or(0);
        state.select(Some(prev));
    }
}

impl Default for BrowserComponent {
    fn default() -> Self {
        Self::new()
    }
}

fn star_key(c: char) -> Option<u8> {
    match c {
        '1'..='5' => c.to_digit(10).map(|d| d as u8),
        _ => None,
    }
}

fn centered(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let width = area.width * percent_x / 100;
    let height = area.height * percent_y / 100;
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
