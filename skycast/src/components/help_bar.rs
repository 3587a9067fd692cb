use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::Component;

pub struct HelpBar;

pub struct HelpBarProps;

impl<A> Component<A> for HelpBar {
    type Props<'a> = HelpBarProps;

    fn render(&mut self, frame: &mut Frame, area: Rect, _props: Self::Props<'_>) {
        let help = Line::from(vec![
            Span::styled("enter", Style::default().fg(Color::Cyan).bold()),
            Span::styled(" search  ", Style::default().fg(Color::DarkGray)),
            Span::styled("ctrl+u", Style::default().fg(Color::Cyan).bold()),
            Span::styled(" clear  ", Style::default().fg(Color::DarkGray)),
            Span::styled("esc", Style::default().fg(Color::Cyan).bold()),
            Span::styled(" quit", Style::default().fg(Color::DarkGray)),
        ])
        .centered();
        frame.render_widget(Paragraph::new(help), area);
    }
}
