//! TUI layout and widget rendering.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph};

use super::runtime::{App, Field};
use super::style;
use crate::report::format::group_thousands;
use crate::report::{ComparisonChart, Metrics};

/// Renders the full TUI frame.
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),  // header
            Constraint::Length(10), // form + metrics
            Constraint::Min(8),     // chart
            Constraint::Length(1),  // status
            Constraint::Length(1),  // footer
        ])
        .split(frame.area());

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_header(frame, chunks[0]);
    render_form(frame, app, body[0]);
    render_metrics(frame, app, body[1]);
    render_chart(frame, app, chunks[2]);
    render_status(frame, app, chunks[3]);
    render_footer(frame, chunks[4]);
}

/// Header bar.
fn render_header(frame: &mut Frame, area: Rect) {
    let header = Line::from(vec![Span::styled(
        " 🔆 Calculadora Energética ",
        Style::default()
            .fg(style::HEADER_FG)
            .bg(style::HEADER_BG)
            .add_modifier(Modifier::BOLD),
    )]);
    frame.render_widget(Paragraph::new(header), area);
}

/// Input form with the focused field highlighted.
fn render_form(frame: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = Field::ALL
        .iter()
        .map(|&field| {
            let focused = field == app.field();
            let marker = if focused { "▶ " } else { "  " };
            let field_style = if focused {
                Style::default()
                    .fg(style::SELECTED_FG)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Line::from(vec![
                Span::styled(format!("{marker}{:<20}", field.label()), field_style),
                Span::styled(app.field_value(field), field_style),
            ])
        })
        .collect();

    let block = Block::default().title(" Datos ").borders(Borders::ALL);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// The six result metrics, or the estimator error.
fn render_metrics(frame: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = match &app.result {
        Ok(estimate) => Metrics::from_estimate(estimate)
            .iter()
            .map(|m| {
                Line::from(vec![
                    Span::raw(format!("  {:<18}", m.label)),
                    Span::styled(
                        m.value.clone(),
                        Style::default()
                            .fg(style::METRIC_FG)
                            .add_modifier(Modifier::BOLD),
                    ),
                ])
            })
            .collect(),
        Err(e) => vec![Line::from(Span::styled(
            format!("  {e}"),
            Style::default().fg(style::ERROR_FG),
        ))],
    };

    let block = Block::default().title(" Resultados ").borders(Borders::ALL);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Consumption vs savings bar chart.
fn render_chart(frame: &mut Frame, app: &App, area: Rect) {
    let Ok(estimate) = &app.result else {
        let block = Block::default().borders(Borders::ALL);
        frame.render_widget(block, area);
        return;
    };
    let chart = ComparisonChart::from_estimate(estimate);

    let colors = [style::CONSUMPTION_COLOR, style::SAVINGS_COLOR];
    let bars: Vec<Bar> = chart
        .bars
        .iter()
        .zip(colors)
        .map(|(b, color)| {
            Bar::default()
                .label(Line::from(b.label))
                .value(style::bar_height(b.value))
                .text_value(group_thousands(b.value))
                .style(Style::default().fg(color))
        })
        .collect();

    let widget = BarChart::default()
        .block(
            Block::default()
                .title(format!(" {} ({}) ", chart.title, chart.y_label))
                .borders(Borders::ALL),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(12)
        .bar_gap(6)
        .max(style::bar_height(chart.max_value()).max(1));

    frame.render_widget(widget, area);
}

/// Status line with the last save result.
fn render_status(frame: &mut Frame, app: &App, area: Rect) {
    let text = app.status.as_deref().unwrap_or("");
    let color = if text.starts_with("error") {
        style::ERROR_FG
    } else {
        style::METRIC_FG
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!(" {text}"),
            Style::default().fg(color),
        ))),
        area,
    );
}

/// Footer with keybinding hints.
fn render_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(Line::from(Span::styled(
        " q:Salir  ↑/↓:Campo  ←/→:Ajustar  RePág/AvPág:x10  0-9/⌫:Valor  Espacio:Marcar  s:Guardar CSV  r:Reiniciar",
        Style::default().fg(style::FOOTER_FG),
    )));
    frame.render_widget(footer, area);
}
