use std::io;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType, LegendPosition,
};
use ratatui::{Frame, Terminal};

use crate::league::League;

const PLAYER_COLOURS: [Color; 4] = [Color::Cyan, Color::Blue, Color::Red, Color::Magenta];
const DAY_LABEL: &str = "%d/%m";

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub player: String,
    /// (days since the first played date, cumulative points)
    pub points: Vec<(f64, f64)>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartData {
    pub series: Vec<Series>,
    pub first_day: Option<NaiveDate>,
    pub last_day: Option<NaiveDate>,
    pub totals: Vec<(String, u64)>,
}

impl ChartData {
    pub fn from_league(league: &League) -> Self {
        let history = league.score_history();
        let first_day = history
            .iter()
            .filter_map(|h| h.points.first().map(|(d, _)| *d))
            .min();
        let last_day = history
            .iter()
            .filter_map(|h| h.points.last().map(|(d, _)| *d))
            .max();

        let series = history
            .into_iter()
            .map(|h| Series {
                player: h.player,
                points: h
                    .points
                    .iter()
                    .map(|(day, total)| {
                        let offset = first_day
                            .map(|first| (*day - first).num_days())
                            .unwrap_or_default();
                        (offset as f64, f64::from(*total))
                    })
                    .collect(),
            })
            .collect();

        let totals = league
            .predictions()
            .players()
            .iter()
            .map(|p| (p.name.clone(), u64::from(p.total)))
            .collect();

        Self {
            series,
            first_day,
            last_day,
            totals,
        }
    }

    fn day_span(&self) -> f64 {
        match (self.first_day, self.last_day) {
            (Some(first), Some(last)) => ((last - first).num_days() as f64).max(1.0),
            _ => 1.0,
        }
    }

    fn max_total(&self) -> u64 {
        self.totals.iter().map(|(_, t)| *t).max().unwrap_or(0)
    }
}

pub fn render(frame: &mut Frame, area: Rect, data: &ChartData) {
    let panels = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    render_history(frame, panels[0], data);
    render_totals(frame, panels[1], data);
}

fn render_history(frame: &mut Frame, area: Rect, data: &ChartData) {
    let datasets: Vec<Dataset> = data
        .series
        .iter()
        .enumerate()
        .map(|(idx, s)| {
            Dataset::default()
                .name(s.player.clone())
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(PLAYER_COLOURS[idx % PLAYER_COLOURS.len()]))
                .data(&s.points)
        })
        .collect();

    let top = (data.max_total() + 1) as f64;
    let day = |d: Option<NaiveDate>| {
        d.map(|d| d.format(DAY_LABEL).to_string())
            .unwrap_or_default()
    };

    let chart = Chart::new(datasets)
        .block(Block::default().title("Score History").borders(Borders::ALL))
        .x_axis(
            Axis::default()
                .title("Date")
                .bounds([0.0, data.day_span()])
                .labels(vec![Span::raw(day(data.first_day)), Span::raw(day(data.last_day))]),
        )
        .y_axis(
            Axis::default()
                .title("Score")
                .bounds([0.0, top])
                .labels(vec![Span::raw("0"), Span::raw(format!("{top:.0}"))]),
        )
        .legend_position(Some(LegendPosition::BottomRight))
        .hidden_legend_constraints((Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)));
    frame.render_widget(chart, area);
}

fn render_totals(frame: &mut Frame, area: Rect, data: &ChartData) {
    let bars: Vec<Bar> = data
        .totals
        .iter()
        .enumerate()
        .map(|(idx, (player, total))| {
            Bar::default()
                .value(*total)
                .text_value(total.to_string())
                .label(Line::from(player.clone()))
                .style(Style::default().fg(PLAYER_COLOURS[idx % PLAYER_COLOURS.len()]))
        })
        .collect();

    let widest = data
        .totals
        .iter()
        .map(|(p, _)| p.chars().count())
        .max()
        .unwrap_or(1)
        .clamp(3, 12) as u16;

    let chart = BarChart::default()
        .block(Block::default().title("Scores").borders(Borders::ALL))
        .data(BarGroup::default().bars(&bars))
        .bar_width(widest)
        .bar_gap(2)
        .max(data.max_total() + 10);
    frame.render_widget(chart, area);
}

pub fn show(league: &League) -> Result<()> {
    let data = ChartData::from_league(league);

    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("enter alternate screen")?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    let res = draw_until_key(&mut terminal, &data);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    res
}

fn draw_until_key<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    data: &ChartData,
) -> Result<()> {
    loop {
        terminal.draw(|f| render(f, f.size(), data))?;
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}
