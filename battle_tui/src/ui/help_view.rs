//! Help view

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let key = |k: &str, desc: &str| {
        Line::from(vec![
            Span::styled(
                format!("  {:14}", k),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::styled(desc.to_string(), Style::default().fg(Color::White)),
        ])
    };

    let rules = app.engine.constants();
    let lines = vec![
        Line::from(Span::styled(
            "Battle Replay",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        key("Space / →", "Reveal next event"),
        key("←", "Hide last event"),
        key("e", "Reveal the whole battle"),
        key("r", "Rerun with the next seed"),
        key("↑ / ↓", "Scroll"),
        key("Tab / 1-3", "Switch tabs"),
        key("q / Ctrl-C", "Quit"),
        Line::from(""),
        Line::from(Span::styled(
            "Rules",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!(
            "  Paralysis: {:.0}% chance to lose the turn",
            rules.paralysis_skip_chance * 100.0
        )),
        Line::from(format!(
            "  Burn: attacker loses hp/{} before attacking",
            rules.burn_chip_divisor
        )),
        Line::from(format!(
            "  Poison: defender loses hp*stacks/{} every turn it defends",
            rules.poison_divisor
        )),
        Line::from(format!(
            "  Damage: attack - defense/{}, at least {}",
            rules.defense_divisor, rules.minimum_damage
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Help "))
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}
