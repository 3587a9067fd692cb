use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span, Text},
    widgets::Paragraph,
};

use super::Component;
use crate::action::Action;
use crate::app::ERROR_MESSAGE;
use crate::format::format_temperature;
use crate::images::WeatherImage;
use crate::state::AppState;

pub const SPINNERS: [&str; 4] = ["◐", "◓", "◑", "◒"];
pub const ERROR_ICON: &str = "⚠";

pub struct WeatherBody;

pub struct WeatherBodyProps<'a> {
    pub state: &'a AppState,
    /// Background chosen for `state.weather`
    pub image: &'static WeatherImage,
}

impl Component<Action> for WeatherBody {
    type Props<'a> = WeatherBodyProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let blocks = blocks_for_state(props.state, props.image);
        let constraints = blocks.iter().map(|block| Constraint::Length(block.height()));
        let areas = Layout::vertical(constraints).flex(Flex::Center).split(area);

        for (block, area) in blocks.into_iter().zip(areas.iter().copied()) {
            block.render(frame, area);
        }
    }
}

/// Exactly one of these is shown; loading wins over error, error over result
enum WeatherView<'a> {
    Loading,
    Error,
    Ready(&'a AppState),
    Empty,
}

impl<'a> WeatherView<'a> {
    fn from_state(state: &'a AppState) -> Self {
        if state.loading {
            WeatherView::Loading
        } else if state.error {
            WeatherView::Error
        } else if state.has_result() {
            WeatherView::Ready(state)
        } else {
            WeatherView::Empty
        }
    }
}

enum BodyBlock {
    Line(Line<'static>),
    Art(Text<'static>, u16),
}

impl BodyBlock {
    fn height(&self) -> u16 {
        match self {
            BodyBlock::Line(_) => 1,
            BodyBlock::Art(_, height) => *height,
        }
    }

    fn render(self, frame: &mut Frame, area: Rect) {
        match self {
            BodyBlock::Line(line) => frame.render_widget(Paragraph::new(line), area),
            BodyBlock::Art(art, _) => {
                frame.render_widget(Paragraph::new(art).alignment(Alignment::Center), area)
            }
        }
    }
}

fn blocks_for_state(state: &AppState, image: &'static WeatherImage) -> Vec<BodyBlock> {
    match WeatherView::from_state(state) {
        WeatherView::Loading => {
            let spinner = SPINNERS[(state.tick_count as usize / 2) % SPINNERS.len()];
            let dots = ".".repeat((state.tick_count as usize / 3) % 4);
            vec![BodyBlock::Line(
                Line::from(vec![
                    Span::styled(spinner, Style::default().fg(Color::Cyan)),
                    Span::styled(
                        format!(" Loading weather{:<3}", dots),
                        Style::default().fg(Color::Gray),
                    ),
                ])
                .centered(),
            )]
        }
        WeatherView::Error => vec![
            BodyBlock::Line(Line::from(ERROR_ICON).fg(Color::Red).centered()),
            blank_line(),
            BodyBlock::Line(
                Line::from(Span::styled(
                    ERROR_MESSAGE,
                    Style::default().fg(Color::Rgb(200, 100, 100)),
                ))
                .centered(),
            ),
        ],
        WeatherView::Ready(state) => vec![
            BodyBlock::Art(image.to_text(), image.height()),
            blank_line(),
            BodyBlock::Line(
                Line::from(Span::styled(
                    state.location.clone(),
                    Style::default().fg(Color::White).bold(),
                ))
                .centered(),
            ),
            BodyBlock::Line(
                Line::from(Span::styled(
                    state.weather.clone(),
                    Style::default().fg(Color::Gray),
                ))
                .centered(),
            ),
            BodyBlock::Line(
                Line::from(Span::styled(
                    format_temperature(state.temperature),
                    Style::default().fg(image.color).bold(),
                ))
                .centered(),
            ),
        ],
        WeatherView::Empty => vec![BodyBlock::Line(
            Line::from(Span::styled(
                "Type a city and press enter",
                Style::default().fg(Color::DarkGray),
            ))
            .centered(),
        )],
    }
}

fn blank_line() -> BodyBlock {
    BodyBlock::Line(Line::from(""))
}
