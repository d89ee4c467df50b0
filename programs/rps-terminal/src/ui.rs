//! Ratatui rendering of the menu and game screens

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use rps_logic::{MatchPhase, MatchView, Player, CATALOG_SIZE};

use crate::app::{App, Screen};
use crate::keymap::KeyBindings;

const TITLE: &str = "Piedra, Papel o Tijera";

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(3)].as_ref())
        .split(f.area());

    match (app.screen(), app.view()) {
        (Screen::Game, Some(view)) => draw_game(f, chunks[0], app.bindings(), &view),
        _ => draw_menu(f, chunks[0], app.bindings()),
    }

    let help = match app.screen() {
        Screen::Menu => "Enter jugar | q salir".to_string(),
        Screen::Game => match &app.last_error {
            Some(e) => format!("error: {e} | Esc menú | q salir"),
            None => "Esc menú | q salir".to_string(),
        },
    };
    let footer = Paragraph::new(Line::from(help)).block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, chunks[1]);
}

fn draw_menu(f: &mut Frame, area: Rect, keys: &KeyBindings) {
    let hints = |player: Player| {
        (0..CATALOG_SIZE)
            .map(|index| keys.hint(player, index))
            .collect::<Vec<_>>()
            .join(" ")
    };
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(TITLE, Style::default().add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from(Span::styled("[ Jugar ]", Style::default().fg(Color::Cyan))),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "{}: {}    {}: {}",
                Player::One,
                hints(Player::One),
                Player::Two,
                hints(Player::Two)
            ),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let menu = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(menu, area);
}

fn draw_game(f: &mut Frame, area: Rect, keys: &KeyBindings, view: &MatchView) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(5)].as_ref())
        .split(area);
    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)].as_ref())
        .split(rows[0]);

    for (player, panel) in Player::ALL.into_iter().zip(panels.iter()) {
        draw_player(f, *panel, keys, view, player);
    }

    let mut lines: Vec<Line> = Vec::new();
    if let Some(label) = &view.outcome_label {
        lines.push(Line::from(Span::styled(
            label.clone(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )));
    }
    if !view.status.is_empty() {
        lines.push(Line::from(view.status.clone()));
    }
    if view.match_over {
        lines.push(Line::from(Span::styled(
            "r volver a jugar",
            Style::default().fg(Color::Cyan),
        )));
    }
    let title = Line::from(vec![
        Span::styled(TITLE, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(format!("  Ronda {}", view.round)),
    ]);
    let messages = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(title).borders(Borders::ALL));
    f.render_widget(messages, rows[1]);
}

fn draw_player(f: &mut Frame, area: Rect, keys: &KeyBindings, view: &MatchView, player: Player) {
    let locked = !view.phase.accepts_selections();
    let mut lines = vec![
        Line::from(format!("Victorias: {}", view.score.get(player))),
        Line::from(""),
    ];
    for (index, name) in view.moves.iter().enumerate() {
        let style = if locked {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(
            format!("{} ({})", name, keys.hint(player, index)),
            style,
        )));
    }
    lines.push(Line::from(""));

    // Keep choices hidden on the shared screen until both are in
    let chosen = match (view.selection(player), view.phase) {
        (Some(selection), MatchPhase::RoundResolved) => Span::styled(
            selection.name.clone(),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        (Some(_), _) => Span::styled("listo", Style::default().fg(Color::Green)),
        (None, _) => Span::raw("…"),
    };
    lines.push(Line::from(chosen));

    let title = Line::from(Span::styled(
        player.to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    ));
    let panel = Paragraph::new(lines).block(Block::default().title(title).borders(Borders::ALL));
    f.render_widget(panel, area);
}
