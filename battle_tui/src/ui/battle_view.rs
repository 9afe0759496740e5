//! Battle replay view

use super::{health_bar, health_color};
use crate::app::App;
use battle_core::{BattleEvent, Side};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Health bars
            Constraint::Min(0),    // Battle log
        ])
        .split(area);

    let bars = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[0]);

    let hp = app.hp_at_cursor();
    draw_combatant_bar(f, app, Side::A, hp[0], bars[0]);
    draw_combatant_bar(f, app, Side::B, hp[1], bars[1]);
    draw_battle_log(f, app, chunks[1]);
}

fn draw_combatant_bar(f: &mut Frame, app: &App, side: Side, current: i64, area: Rect) {
    let summary = app.result.combatant(side);
    let max = app.max_hp(side);
    let color = health_color(current, max);
    let bar_width = area.width.saturating_sub(4) as usize;

    let status = app.result.statuses[side.index()]
        .map(|s| s.to_string())
        .unwrap_or_else(|| "healthy".to_string());

    let lines = vec![
        Line::from(vec![
            Span::styled(
                summary.name.clone(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  [{}]", summary.types.join("/")),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(vec![
            Span::styled("HP: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{}/{}", current.max(0), max),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled("Status: ", Style::default().fg(Color::Gray)),
            Span::styled(status, Style::default().fg(Color::Magenta)),
        ]),
        Line::from(Span::styled(
            health_bar(current, max, bar_width),
            Style::default().fg(color),
        )),
    ];

    let title = match side {
        Side::A => " Side A ",
        Side::B => " Side B ",
    };
    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title));

    f.render_widget(paragraph, area);
}

fn event_style(event: &BattleEvent) -> Style {
    match event {
        BattleEvent::StatusAssigned { .. } => Style::default().fg(Color::Magenta),
        BattleEvent::Paralyzed { .. } => Style::default().fg(Color::Yellow),
        BattleEvent::BurnDamage { .. } => Style::default().fg(Color::Red),
        BattleEvent::PoisonDamage { .. } => Style::default().fg(Color::Green),
        BattleEvent::Attack { side: Side::A, .. } => Style::default().fg(Color::White),
        BattleEvent::Attack { side: Side::B, .. } => Style::default().fg(Color::Gray),
        BattleEvent::Winner { .. } => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    }
}

fn draw_battle_log(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .visible_events()
        .iter()
        .skip(app.log_scroll)
        .take(area.height.saturating_sub(2) as usize)
        .map(|event| ListItem::new(Line::from(Span::styled(event.to_string(), event_style(event)))))
        .collect();

    let title = format!(
        " Battle Log ({}/{}) seed {} ",
        app.revealed,
        app.result.events.len(),
        app.seed
    );
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));

    f.render_widget(list, area);
}
