//! Terminal rendering of a [`SceneSnapshot`].

use crate::game::geometry::Rect as FieldRect;
use crate::game::session::SceneSnapshot;
use crate::gesture::input::InputStats;
use crate::gesture::signal::GestureSignal;
use crate::ui::common::{
    create_game_layout, render_game_over_overlay, render_info_panel_frame, render_status_bar,
};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Non-simulation facts shown next to the field.
#[derive(Debug, Clone, Default)]
pub struct Hud {
    pub input_label: String,
    pub input: InputStats,
    pub seed: u64,
    pub smoothing_window: usize,
}

/// What a terminal cell shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Pipe,
    Agent,
}

/// Sample the scene at the center of each cell of a `cols` × `rows` grid.
pub fn rasterize(snapshot: &SceneSnapshot, cols: usize, rows: usize) -> Vec<Vec<Cell>> {
    if cols == 0 || rows == 0 {
        return Vec::new();
    }
    let cell_w = snapshot.field.w / cols as f64;
    let cell_h = snapshot.field.h / rows as f64;
    let agent_row = ((snapshot.agent.y + snapshot.agent.h / 2.0) / cell_h).floor();
    let agent_col = ((snapshot.agent.x + snapshot.agent.w / 2.0) / cell_w).floor();

    (0..rows)
        .map(|row| {
            (0..cols)
                .map(|col| {
                    let cell = FieldRect::new(col as f64 * cell_w, row as f64 * cell_h, cell_w, cell_h);
                    // The agent always gets at least its center cell
                    let is_center = row as f64 == agent_row && col as f64 == agent_col;
                    if is_center || contains_center(&snapshot.agent, &cell) {
                        Cell::Agent
                    } else if snapshot.obstacles.iter().any(|o| contains_center(o, &cell)) {
                        Cell::Pipe
                    } else {
                        Cell::Empty
                    }
                })
                .collect()
        })
        .collect()
}

fn contains_center(rect: &FieldRect, cell: &FieldRect) -> bool {
    let cx = cell.x + cell.w / 2.0;
    let cy = cell.y + cell.h / 2.0;
    cx >= rect.x && cx < rect.right() && cy >= rect.y && cy < rect.bottom()
}

/// Render the whole game screen.
pub fn render_game(frame: &mut Frame, area: Rect, snapshot: &SceneSnapshot, hud: &Hud) {
    let layout = create_game_layout(frame, area, " Handflap ", Color::Cyan, 10, 24);

    render_play_area(frame, layout.content, snapshot);
    render_status(frame, layout.status_bar, snapshot);
    render_info_panel(frame, layout.info_panel, snapshot, hud);

    if snapshot.terminal {
        render_game_over_overlay(
            frame,
            layout.content,
            &format!("Survived {} ticks", snapshot.tick),
            "[R] Restart  [Q] Quit",
        );
    }
}

fn render_play_area(frame: &mut Frame, area: Rect, snapshot: &SceneSnapshot) {
    let grid = rasterize(snapshot, area.width as usize, area.height as usize);
    let agent_glyph = if snapshot.velocity < -1.0 {
        "▲"
    } else if snapshot.velocity > 4.0 {
        "▼"
    } else {
        "►"
    };

    let lines: Vec<Line> = grid
        .iter()
        .map(|row| {
            Line::from(
                row.iter()
                    .map(|cell| match cell {
                        Cell::Agent => Span::styled(
                            agent_glyph,
                            Style::default()
                                .fg(Color::Yellow)
                                .add_modifier(Modifier::BOLD),
                        ),
                        Cell::Pipe => Span::styled("█", Style::default().fg(Color::Green)),
                        Cell::Empty => Span::raw(" "),
                    })
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_status(frame: &mut Frame, area: Rect, snapshot: &SceneSnapshot) {
    let (text, color) = if snapshot.terminal {
        ("Game over".to_string(), Color::Red)
    } else {
        (format!("Tick {}", snapshot.tick), Color::Green)
    };
    render_status_bar(
        frame,
        area,
        &text,
        color,
        &[("[↑/Space]", "Thumb up"), ("[↓]", "Thumb down"), ("[Q]", "Quit")],
    );
}

fn signal_color(signal: GestureSignal) -> Color {
    match signal {
        GestureSignal::Up => Color::Green,
        GestureSignal::Down => Color::Yellow,
        GestureSignal::None => Color::DarkGray,
    }
}

fn render_info_panel(frame: &mut Frame, area: Rect, snapshot: &SceneSnapshot, hud: &Hud) {
    let inner = render_info_panel_frame(frame, area);
    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::White);
    let lines = vec![
        Line::from(Span::styled(
            format!(" {} ", hud.input_label),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Gesture: ", label),
            Span::styled(
                snapshot.signal.label(),
                Style::default()
                    .fg(signal_color(snapshot.signal))
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Raw:     ", label),
            Span::styled(hud.input.raw.label(), Style::default().fg(signal_color(hud.input.raw))),
        ]),
        Line::from(vec![
            Span::styled(" Hands:   ", label),
            Span::styled(format!("{}", hud.input.hands), value),
        ]),
        Line::from(vec![
            Span::styled(" Missed:  ", label),
            Span::styled(format!("{}", hud.input.missing_frames), value),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Tick:    ", label),
            Span::styled(format!("{}", snapshot.tick), value),
        ]),
        Line::from(vec![
            Span::styled(" Speed:   ", label),
            Span::styled(format!("{:+.1}", snapshot.velocity), value),
        ]),
        Line::from(vec![
            Span::styled(" Pipes:   ", label),
            Span::styled(format!("{}", snapshot.obstacles.len() / 2), value),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Smooth:  ", label),
            Span::styled(format!("{}", hud.smoothing_window), value),
        ]),
        Line::from(vec![
            Span::styled(" Seed:    ", label),
            Span::styled(format!("{}", hud.seed), value),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
