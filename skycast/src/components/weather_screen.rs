//! The one screen: result area, search field, help line
//!
//! - Props<'a>: read-only view of state
//! - handle_event: Esc / Ctrl+C quit, every other key goes to the search field
//! - render: pure function of props, except the memoized background choice

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Style, Stylize},
    widgets::{Block, BorderType, Borders},
};
use skycast_core::EventKind;

use super::{
    Component, HelpBar, HelpBarProps, SearchInput, SearchInputProps, WeatherBody,
    WeatherBodyProps,
};
use crate::action::Action;
use crate::images::BackgroundCache;
use crate::state::AppState;

pub struct WeatherScreenProps<'a> {
    pub state: &'a AppState,
}

#[derive(Default)]
pub struct WeatherScreen {
    search: SearchInput,
    backgrounds: BackgroundCache,
}

impl WeatherScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn backgrounds(&self) -> &BackgroundCache {
        &self.backgrounds
    }

    fn search_props(state: &AppState) -> SearchInputProps<'_, Action> {
        SearchInputProps {
            value: &state.query,
            is_focused: true,
            on_change: Action::SearchQueryChange,
            on_submit: Action::LocationSubmit,
        }
    }
}

impl Component<Action> for WeatherScreen {
    type Props<'a> = WeatherScreenProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if let EventKind::Key(key) = event {
            let ctrl_c = key.modifiers.contains(KeyModifiers::CONTROL)
                && key.code == KeyCode::Char('c');
            if key.code == KeyCode::Esc || ctrl_c {
                return vec![Action::Quit];
            }
        }

        self.search
            .handle_event(event, Self::search_props(props.state))
            .into_iter()
            .collect::<Vec<_>>()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let state = props.state;
        let image = self.backgrounds.get(&state.weather);

        let title = if state.loading {
            " skycast · loading "
        } else {
            " skycast "
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(image.color))
            .title(title.bold());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [body_area, search_area, help_area] = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(SearchInput::HEIGHT),
            Constraint::Length(1),
        ])
        .areas(inner);

        let mut body = WeatherBody;
        body.render(frame, body_area, WeatherBodyProps { state, image });

        self.search
            .render(frame, search_area, Self::search_props(state));

        Component::<Action>::render(&mut HelpBar, frame, help_area, HelpBarProps);
    }
}
