use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::warn;

use crate::charts;
use crate::config::Config;
use crate::error::PredictorError;
use crate::export;
use crate::league::League;
use crate::leaderboard::{Leaderboard, LeaderboardStore};
use crate::report;

const INTRO: &str = "Welcome to the World Cup Predictor.\nType 'start' to get going!";
const PROMPT: &str = "What next? ";
const HELP: &str = "\
Commands:
  start                 load fixtures and score every prediction
  print                 dump teams, groups, results and predictions
  scores                show the leaderboard
  groups                show group tables
  teams                 list teams
  predictions           pick a player and show their predictions
  chart                 score history and totals (any key to close)
  export [path]         write everything to an .xlsx workbook
  help                  this list
  quit                  save the leaderboard and leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Print,
    Scores,
    Groups,
    Teams,
    Predictions,
    Chart,
    Export(Option<PathBuf>),
    Help,
    Quit,
    Empty,
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let mut parts = line.split_whitespace();
        let Some(word) = parts.next() else {
            return Command::Empty;
        };
        match word.to_ascii_lowercase().as_str() {
            "start" => Command::Start,
            "print" => Command::Print,
            "scores" => Command::Scores,
            "groups" => Command::Groups,
            "teams" => Command::Teams,
            "predictions" | "predictions-for-player" => Command::Predictions,
            "chart" => Command::Chart,
            "export" => Command::Export(parts.next().map(PathBuf::from)),
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => Command::Unknown(word.to_string()),
        }
    }
}

/// Numbered menu with a trailing Cancel entry. Re-prompts until the answer is
/// a listed number; Cancel or end of input aborts the pick.
pub fn pick_one<R: BufRead, W: Write>(
    prompt: &str,
    options: &[String],
    input: &mut R,
    output: &mut W,
) -> crate::error::Result<usize> {
    if options.is_empty() {
        return Err(PredictorError::data_missing("nothing to choose from"));
    }
    let cancel = options.len() + 1;
    loop {
        writeln!(output, "{prompt}")?;
        for (idx, option) in options.iter().enumerate() {
            writeln!(output, "\t{}. {}", idx + 1, option)?;
        }
        writeln!(output, "\t{cancel}. Cancel")?;
        write!(output, "Choice? ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(PredictorError::SelectionCancelled);
        }
        match line.trim().parse::<usize>() {
            Ok(n) if n == cancel => return Err(PredictorError::SelectionCancelled),
            Ok(n) if (1..cancel).contains(&n) => return Ok(n - 1),
            _ => writeln!(output, "Please enter a number between 1 and {cancel}.")?,
        }
    }
}

enum Flow {
    Continue,
    Quit,
}

pub struct Shell<S, R, W> {
    config: Config,
    store: S,
    input: R,
    output: W,
    league: Option<League>,
    leaderboard: Leaderboard,
}

impl<S: LeaderboardStore, R: BufRead, W: Write> Shell<S, R, W> {
    pub fn new(config: Config, store: S, input: R, output: W) -> Self {
        let mut leaderboard = Leaderboard::new(&config.leaderboard_name, config.leaderboard_size)
            .with_prefix(config.score_prefix.clone());
        leaderboard.restore(&store);
        Self {
            config,
            store,
            input,
            output,
            league: None,
            leaderboard,
        }
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "{INTRO}")?;
        loop {
            write!(self.output, "{PROMPT}")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }
            match self.execute(Command::parse(&line)) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(err) => writeln!(self.output, "{err:#}")?,
            }
        }
        self.save_leaderboard()
    }

    fn save_leaderboard(&mut self) -> Result<()> {
        if let Err(err) = self.leaderboard.persist(&self.store) {
            warn!("leaderboard not saved: {err}");
            writeln!(self.output, "Could not save leaderboard: {err}")?;
        }
        Ok(())
    }

    fn league(&self) -> Result<&League> {
        self.league
            .as_ref()
            .ok_or_else(|| PredictorError::data_missing("no fixtures loaded, type 'start' first"))
            .map_err(Into::into)
    }

    fn execute(&mut self, command: Command) -> Result<Flow> {
        match command {
            Command::Start => {
                writeln!(self.output, "\nLoading fixtures...")?;
                let path = &self.config.fixtures_path;
                let league = League::load_csv(path)
                    .with_context(|| format!("failed to load {}", path.display()))?;
                self.leaderboard.clear();
                league.fill_leaderboard(&mut self.leaderboard);
                writeln!(
                    self.output,
                    "Loaded {} fixtures, {} teams, {} players.",
                    league.fixtures().len(),
                    league.teams().len(),
                    league.predictions().players().len()
                )?;
                self.league = Some(league);
            }
            Command::Print => {
                let text = report::full(self.league()?);
                write!(self.output, "{text}")?;
            }
            Command::Scores => {
                writeln!(self.output, "{}", self.leaderboard.render())?;
            }
            Command::Groups => {
                let text = report::groups(self.league()?);
                writeln!(self.output, "{text}")?;
            }
            Command::Teams => {
                let text = report::teams(self.league()?);
                writeln!(self.output, "{text}")?;
            }
            Command::Predictions => {
                let league = self
                    .league
                    .as_ref()
                    .ok_or_else(|| PredictorError::data_missing("no players loaded"))?;
                let names = league.predictions().names();
                let idx = pick_one("Select a player:", &names, &mut self.input, &mut self.output)?;
                let text = report::predictions_for(league, &names[idx])?;
                writeln!(self.output, "{text}")?;
            }
            Command::Chart => charts::show(self.league()?)?,
            Command::Export(path) => {
                let path = path.unwrap_or_else(|| self.config.export_path.clone());
                let out = export::export_workbook(&path, self.league()?, &self.leaderboard)?;
                writeln!(
                    self.output,
                    "Exported {} standings, {} results, {} predictions, {} scores to {}",
                    out.standings,
                    out.results,
                    out.predictions,
                    out.scores,
                    path.display()
                )?;
            }
            Command::Help => writeln!(self.output, "{HELP}")?,
            Command::Quit => return Ok(Flow::Quit),
            Command::Empty => {}
            Command::Unknown(word) => {
                writeln!(self.output, "Unknown command '{word}'. Type 'help'.")?;
            }
        }
        Ok(Flow::Continue)
    }
}
