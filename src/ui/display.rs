//! Board rendering - ratatui frame composition
//!
//! Pure display over [`Board`] and [`BoardInput`]; no function here
//! mutates game data.

use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::core::types::{DistrictId, EventSeverity, Shift};
use crate::game::actions::ActionId;
use crate::ui::state::{Board, BoardInput, Tab};

pub fn draw_board(frame: &mut Frame, board: &Board, input: &BoardInput) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5), Constraint::Length(1)])
        .split(frame.size());

    draw_header(frame, chunks[0], board, input);
    draw_body(frame, chunks[1], board, input);
    draw_keybar(frame, chunks[2]);

    // Modal overlays render last, on top of everything
    if board.show_notifications {
        draw_notifications(frame, board);
    }
    if board.show_help {
        draw_help(frame, board.config().officer_pool);
    }
    if board.show_restart_confirm {
        draw_restart_confirm(frame);
    }
}

fn draw_header(frame: &mut Frame, area: Rect, board: &Board, input: &BoardInput) {
    let config = board.config();
    let budget_style = if input.metrics.low_budget(config.low_budget_threshold) {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Green)
    };
    let unread = board.feed.unread();
    let bell = if unread > 0 {
        Span::styled(
            format!("Events ({})", unread),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::raw("Events (0)")
    };

    let line = Line::from(vec![
        Span::styled(
            format!("Round {}/{}", input.current_round, config.total_rounds),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("  |  "),
        Span::styled(format!("Budget ${}", input.metrics.budget), budget_style),
        Span::raw("  |  "),
        Span::raw(format!(
            "Police {}/{}",
            input.allocation.allocated(),
            input.allocation.pool()
        )),
        Span::raw("  |  "),
        bell,
    ]);

    let block = Block::default().borders(Borders::ALL).title("Precinct");
    frame.render_widget(block, area);
    frame.render_widget(
        Paragraph::new(line),
        area.inner(&Margin {
            vertical: 1,
            horizontal: 1,
        }),
    );
}

fn draw_body(frame: &mut Frame, area: Rect, board: &Board, input: &BoardInput) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(22), Constraint::Min(10)])
        .split(area);

    draw_sidebar(frame, chunks[0], board, input);
    match board.active_tab {
        Tab::Summary => draw_summary(frame, chunks[1], input),
        Tab::Map => draw_map(frame, chunks[1], board, input),
        Tab::Actions => draw_actions(frame, chunks[1], board, input),
        Tab::Performance => draw_performance(frame, chunks[1], input),
        Tab::Log => draw_log(frame, chunks[1], input),
    }
}

fn draw_sidebar(frame: &mut Frame, area: Rect, board: &Board, input: &BoardInput) {
    let lines: Vec<Line> = Tab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| {
            let label = format!("{} {}", i + 1, tab.label(input.overview_mode()));
            if *tab == board.active_tab {
                Line::from(Span::styled(
                    label,
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::raw(label))
            }
        })
        .collect();

    let block = Block::default().borders(Borders::ALL).title("Views");
    frame.render_widget(block, area);
    frame.render_widget(
        Paragraph::new(lines),
        area.inner(&Margin {
            vertical: 1,
            horizontal: 1,
        }),
    );
}

fn draw_summary(frame: &mut Frame, area: Rect, input: &BoardInput) {
    let block = Block::default().borders(Borders::ALL).title(if input.overview_mode() {
        "Game Overview"
    } else {
        "Round Summary"
    });
    frame.render_widget(block, area);
    let inner = area.inner(&Margin {
        vertical: 1,
        horizontal: 1,
    });

    if input.overview_mode() {
        frame.render_widget(overview_paragraph(), inner);
        return;
    }

    let Some(summary) = input.round_summary else {
        frame.render_widget(
            Paragraph::new("No round summary yet - end the round to see results."),
            inner,
        );
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(
            format!("Round {} results", summary.round),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::raw(format!("Budget change: {:+}", summary.budget_change))),
        Line::from(Span::raw("")),
    ];
    if summary.changes.is_empty() {
        lines.push(Line::from(Span::raw("A quiet round across the city.")));
    }
    for change in &summary.changes {
        lines.push(Line::from(Span::raw(format!("- {}", change))));
    }
    if !summary.special_events.is_empty() {
        lines.push(Line::from(Span::raw("")));
        lines.push(Line::from(Span::styled(
            "Special events",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for event in &summary.special_events {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{}: ", event.title),
                    Style::default().fg(severity_color(event.severity)),
                ),
                Span::raw(event.message.clone()),
            ]));
        }
    }
    if input.show_round_summary {
        lines.push(Line::from(Span::raw("")));
        lines.push(Line::from(Span::styled(
            "Press Enter to continue",
            Style::default().fg(Color::Yellow),
        )));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn overview_paragraph() -> Paragraph<'static> {
    let mut lines = vec![
        Line::from(Span::raw(
            "You are the new police commissioner. Allocate your officers,",
        )),
        Line::from(Span::raw(
            "choose one intervention per district per round, and balance",
        )),
        Line::from(Span::raw("crime against community trust over ten rounds.")),
        Line::from(Span::raw("")),
        Line::from(Span::styled(
            "Districts",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];
    for district in DistrictId::ALL {
        lines.push(Line::from(Span::raw(format!(
            "- {}: {}",
            district.display_name(),
            district.profile()
        ))));
    }
    lines.push(Line::from(Span::raw("")));
    lines.push(Line::from(Span::raw(
        "Open the Districts view to staff your shifts, then end the round.",
    )));
    Paragraph::new(lines).wrap(Wrap { trim: false })
}

fn draw_map(frame: &mut Frame, area: Rect, board: &Board, input: &BoardInput) {
    let title = format!("Districts (unallocated: {})", input.allocation.unallocated());
    let block = Block::default().borders(Borders::ALL).title(title);
    frame.render_widget(block, area);
    let inner = area.inner(&Margin {
        vertical: 1,
        horizontal: 1,
    });

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    for (row_idx, row) in rows.iter().enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(*row);
        for (col_idx, cell) in cells.iter().enumerate() {
            let district_idx = row_idx * 2 + col_idx;
            draw_district_cell(frame, *cell, board, input, district_idx);
        }
    }
}

fn draw_district_cell(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    input: &BoardInput,
    district_idx: usize,
) {
    let district = DistrictId::ALL[district_idx];
    let figures = input.metrics.district(district);
    let selected = board.cursor.district == district_idx;

    let border_style = if selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(district.display_name());
    frame.render_widget(block, area);
    let inner = area.inner(&Margin {
        vertical: 1,
        horizontal: 1,
    });

    let shift_span = |shift: Shift| {
        let count = input.allocation.shift(district, shift);
        let text = format!("{}: {:>2}", shift.label(), count);
        if selected && board.cursor.shift == shift {
            Span::styled(
                text,
                Style::default().fg(Color::Black).bg(Color::Cyan),
            )
        } else {
            Span::raw(text)
        }
    };

    let lines = vec![
        Line::from(Span::raw(format!("Crime: {:>5.1}%", figures.crime_rate))),
        Line::from(Span::raw(format!("Trust: {:>5.1}%", figures.trust))),
        Line::from(Span::raw(format!("Arrests: {}", figures.arrests))),
        Line::from(vec![
            shift_span(Shift::Day),
            Span::raw("   "),
            shift_span(Shift::Night),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn draw_actions(frame: &mut Frame, area: Rect, board: &Board, input: &BoardInput) {
    let block = Block::default().borders(Borders::ALL).title("Actions (one per district)");
    frame.render_widget(block, area);
    let inner = area.inner(&Margin {
        vertical: 1,
        horizontal: 1,
    });

    let mut lines: Vec<Line> = Vec::new();
    for (idx, district) in DistrictId::ALL.iter().enumerate() {
        let selection = input.district_actions.selected(*district);
        let label = match selection {
            Some(action) => format!("{} (${})", action.label(), action.cost()),
            None => "-".to_string(),
        };
        let text = format!("{:<12} {}", district.display_name(), label);
        if board.cursor.district == idx {
            lines.push(Line::from(Span::styled(
                text,
                Style::default().fg(Color::Black).bg(Color::Cyan),
            )));
        } else {
            lines.push(Line::from(Span::raw(text)));
        }
    }
    lines.push(Line::from(Span::raw("")));
    lines.push(Line::from(Span::raw(format!(
        "Pending cost: ${}",
        input.district_actions.pending_cost()
    ))));
    lines.push(Line::from(Span::raw("")));
    lines.push(Line::from(Span::styled(
        "Catalog",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    for action in ActionId::ALL {
        lines.push(Line::from(Span::raw(format!(
            "- {} (${})",
            action.label(),
            action.cost()
        ))));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn draw_performance(frame: &mut Frame, area: Rect, input: &BoardInput) {
    let block = Block::default().borders(Borders::ALL).title("Data Analytics");
    frame.render_widget(block, area);
    let inner = area.inner(&Margin {
        vertical: 1,
        horizontal: 1,
    });

    let mut lines = vec![Line::from(Span::styled(
        format!(
            "{:<12} {:>8} {:>8} {:>8} {:>8}",
            "District", "Crime", "Trust", "Arrests", "Staffed"
        ),
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    for district in DistrictId::ALL {
        let figures = input.metrics.district(district);
        lines.push(Line::from(Span::raw(format!(
            "{:<12} {:>7.1}% {:>7.1}% {:>8} {:>8}",
            district.display_name(),
            figures.crime_rate,
            figures.trust,
            figures.arrests,
            input.allocation.district_total(district),
        ))));
    }
    lines.push(Line::from(Span::raw("")));
    lines.push(Line::from(Span::raw(format!(
        "Citywide: crime {:.1}%, trust {:.1}%",
        input.metrics.average_crime_rate(),
        input.metrics.average_trust(),
    ))));
    lines.push(Line::from(Span::raw(format!(
        "Interventions implemented: {}",
        input.implemented_actions.len()
    ))));

    frame.render_widget(Paragraph::new(lines), inner);
}

fn draw_log(frame: &mut Frame, area: Rect, input: &BoardInput) {
    let block = Block::default().borders(Borders::ALL).title("Round History");
    frame.render_widget(block, area);
    let inner = area.inner(&Margin {
        vertical: 1,
        horizontal: 1,
    });

    if input.game_log.is_empty() {
        frame.render_widget(Paragraph::new("Nothing has happened yet."), inner);
        return;
    }

    let lines: Vec<Line> = input
        .game_log
        .entries()
        .iter()
        .rev()
        .map(|entry| {
            let place = entry
                .district
                .map(|d| d.display_name())
                .unwrap_or("Citywide");
            Line::from(vec![
                Span::styled(
                    format!("[R{:>2}] ", entry.round),
                    Style::default().fg(Color::Yellow),
                ),
                Span::raw(format!("{}: {}", place, entry.outcome)),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn draw_keybar(frame: &mut Frame, area: Rect) {
    let line = Line::from(Span::styled(
        " 1-5 views | arrows move | +/- staff | e end round | b events | h help | r restart | q quit",
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(Paragraph::new(line), area);
}

// === Overlays ===

fn draw_notifications(frame: &mut Frame, board: &Board) {
    let area = centered_rect(50, 60, frame.size());
    frame.render_widget(Clear, area);
    let block = Block::default().borders(Borders::ALL).title("Events & Alerts");
    frame.render_widget(block, area);
    let inner = area.inner(&Margin {
        vertical: 1,
        horizontal: 1,
    });

    if board.feed.is_empty() {
        frame.render_widget(Paragraph::new("No events to display"), inner);
        return;
    }

    let mut lines: Vec<Line> = Vec::new();
    for event in board.feed.events() {
        lines.push(Line::from(vec![
            Span::styled(
                event.title.clone(),
                Style::default()
                    .fg(severity_color(event.severity))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("  (round {})", event.round)),
        ]));
        lines.push(Line::from(Span::raw(format!("  {}", event.message))));
    }
    lines.push(Line::from(Span::raw("")));
    lines.push(Line::from(Span::styled(
        "x clear all | Esc close",
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn draw_help(frame: &mut Frame, officer_pool: u32) {
    let area = centered_rect(70, 70, frame.size());
    frame.render_widget(Clear, area);
    let block = Block::default().borders(Borders::ALL).title("Simulation Help");
    frame.render_widget(block, area);
    let inner = area.inner(&Margin {
        vertical: 1,
        horizontal: 1,
    });

    let mut lines = vec![
        Line::from(Span::styled(
            "Key metrics",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::raw(
            "- Community trust: how much residents cooperate and report crime.",
        )),
        Line::from(Span::raw(
            "- Crime rate: criminal activity per district; lower is better.",
        )),
        Line::from(Span::raw(
            "- Arrests: disparities across districts can indicate bias.",
        )),
        Line::from(Span::raw("")),
        Line::from(Span::styled(
            "Mechanics",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::raw(format!(
            "- You have {} officers across 4 districts and 2 shifts.",
            officer_pool
        ))),
        Line::from(Span::raw(
            "  Each district should keep at least 1 officer per shift.",
        )),
        Line::from(Span::raw(
            "- Each round you may implement one action per district.",
        )),
        Line::from(Span::raw(
            "- After each round a summary shows how your decisions landed.",
        )),
        Line::from(Span::raw("")),
        Line::from(Span::styled(
            "District profiles",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];
    for district in DistrictId::ALL {
        lines.push(Line::from(Span::raw(format!(
            "- {}: {}",
            district.display_name(),
            district.profile()
        ))));
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn draw_restart_confirm(frame: &mut Frame) {
    let area = centered_rect(50, 20, frame.size());
    frame.render_widget(Clear, area);
    let block = Block::default().borders(Borders::ALL).title("Restart?");
    frame.render_widget(block, area);
    let inner = area.inner(&Margin {
        vertical: 1,
        horizontal: 1,
    });

    let lines = vec![
        Line::from(Span::raw(
            "This resets the simulation to round 1; all progress is lost.",
        )),
        Line::from(Span::raw("")),
        Line::from(vec![
            Span::styled("y", Style::default().fg(Color::Yellow)),
            Span::raw(" confirm   "),
            Span::styled("n", Style::default().fg(Color::Yellow)),
            Span::raw(" cancel"),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

fn severity_color(severity: EventSeverity) -> Color {
    match severity {
        EventSeverity::Positive => Color::Green,
        EventSeverity::Info => Color::Blue,
        EventSeverity::Negative => Color::Red,
    }
}

/// Center a `percent_x` by `percent_y` rectangle inside `r`
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}
