//! Combatant summary view

use super::stat_line;
use crate::app::App;
use battle_core::{CombatantSummary, Side};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    for (side, chunk) in [Side::A, Side::B].into_iter().zip(chunks.iter()) {
        draw_summary(f, app, app.result.combatant(side), *chunk);
    }
}

fn section(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("── {} ──", title),
        Style::default().fg(Color::Cyan),
    ))
}

fn list_line(items: &[String]) -> Line<'static> {
    let text = if items.is_empty() {
        "-".to_string()
    } else {
        items.join(", ")
    };
    Line::from(Span::styled(text, Style::default().fg(Color::White)))
}

fn draw_summary(f: &mut Frame, app: &App, summary: &CombatantSummary, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled(
            summary.name.clone(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        section("Types"),
        list_line(&summary.types),
        Line::from(""),
        section("Stats"),
    ];

    for (name, value) in &summary.stats {
        lines.push(stat_line(name, *value));
    }

    lines.push(Line::from(""));
    lines.push(section("Abilities"));
    lines.push(list_line(&summary.abilities));
    lines.push(Line::from(""));
    lines.push(section("Moves"));
    lines.push(list_line(&summary.moves));
    lines.push(Line::from(""));
    lines.push(section("Evolution"));
    lines.push(Line::from(Span::styled(
        summary.evolution_chain.join(" → "),
        Style::default().fg(Color::White),
    )));

    let scroll = app.stats_scroll.min(u16::MAX as usize) as u16;
    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Combatant "))
        .scroll((scroll, 0));

    f.render_widget(paragraph, area);
}
