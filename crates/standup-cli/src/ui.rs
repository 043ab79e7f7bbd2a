//! Rendering of the dashboard.

use chrono::Duration;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, Paragraph};
use standup_core::Clock;

use crate::banner;
use crate::dashboard::Dashboard;
use crate::keymap::BINDINGS;

/// Below this much remaining time the countdown turns yellow.
const WARNING_THRESHOLD_SECS: i64 = 30;

/// Draws the whole dashboard into `frame`.
pub fn draw<C: Clock>(frame: &mut Frame, dashboard: &mut Dashboard<C>) {
    let banner_rows = u16::try_from(dashboard.banner().len()).unwrap_or(u16::MAX);
    let [header, timer, speakers, team, status, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(banner_rows.saturating_add(2)),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_header(frame, header, dashboard);
    render_countdown(frame, timer, dashboard);
    render_speakers(frame, speakers, dashboard);
    render_banner(frame, team, dashboard);

    if let Some(message) = dashboard.status() {
        let line = Paragraph::new(Span::styled(
            message.to_string(),
            Style::default().fg(Color::Yellow),
        ));
        frame.render_widget(line, status);
    }

    render_footer(frame, footer);
}

fn render_header<C: Clock>(frame: &mut Frame, area: Rect, dashboard: &Dashboard<C>) {
    let rotation = dashboard.rotation();
    let now = rotation.clock().time_of_day().format("%H:%M:%S");
    let text = format!(
        "{}  {now}  (ends {})",
        dashboard.title(),
        rotation.deadline()
    );
    let header = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Black).bg(Color::Cyan));
    frame.render_widget(header, area);
}

fn render_countdown<C: Clock>(frame: &mut Frame, area: Rect, dashboard: &Dashboard<C>) {
    let countdown = dashboard.rotation().countdown();
    let style = Style::default()
        .fg(countdown_color(countdown.is_running(), countdown.remaining()))
        .add_modifier(Modifier::BOLD);
    let timer = Paragraph::new(countdown.to_string())
        .alignment(Alignment::Center)
        .style(style)
        .block(Block::bordered());
    frame.render_widget(timer, area);
}

fn countdown_color(running: bool, remaining: Duration) -> Color {
    if !running {
        Color::White
    } else if remaining < Duration::zero() {
        Color::Red
    } else if remaining.num_seconds() < WARNING_THRESHOLD_SECS {
        Color::Yellow
    } else {
        Color::Green
    }
}

fn render_speakers<C: Clock>(frame: &mut Frame, area: Rect, dashboard: &mut Dashboard<C>) {
    let rotation = dashboard.rotation();
    // The list stays empty until the first speaker is called.
    let items: Vec<ListItem<'static>> = if rotation.is_started() {
        rotation
            .roster()
            .speakers()
            .iter()
            .map(|speaker| ListItem::new(speaker.to_string()))
            .collect()
    } else {
        Vec::new()
    };

    let list = List::new(items)
        .block(Block::bordered().title(" Speakers "))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol(">> ");
    frame.render_stateful_widget(list, area, dashboard.list_state_mut());
}

fn render_banner<C: Clock>(frame: &mut Frame, area: Rect, dashboard: &Dashboard<C>) {
    let art = dashboard.banner();
    // Art wider than the box would be clipped into noise; show the name instead.
    let inner_width = usize::from(area.width.saturating_sub(2));
    let lines: Vec<Line<'_>> = if banner::width(art) <= inner_width {
        art.iter().map(|line| Line::raw(line.as_str())).collect()
    } else {
        vec![Line::raw(dashboard.team_name())]
    };
    let banner = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(Block::bordered());
    frame.render_widget(banner, area);
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let mut spans = Vec::with_capacity(BINDINGS.len() * 2);
    for binding in BINDINGS {
        spans.push(Span::styled(
            format!(" {} ", binding.key),
            Style::default().fg(Color::Black).bg(Color::Yellow),
        ));
        spans.push(Span::raw(format!(" {}  ", binding.description)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
