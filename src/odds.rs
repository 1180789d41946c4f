//! Parsing of odds files: tables of SMARTS decorators paired with the odds of
//! choosing each one.
//!
//! Each non-comment line holds a decorator, optionally followed by its odds:
//!
//! ```text
//! % decorator   odds
//! #6            10
//! #7            7
//! ''            1
//! ```
//!
//! `%` starts a comment, and `''` or `""` stands for the empty decorator. Odds
//! must be finite and non-negative. If any line lacks odds, or the odds do not
//! have a positive finite sum, the table has no odds and every decorator is
//! taken to be equally likely.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{DataDir, Error, Result};

const COMMENT: char = '%';

/// Sink for the human-readable output produced by a verbose parse.
pub trait Diagnostics {
    fn report(&mut self, msg: &str);
}

/// Sends every message to [log::info].
#[derive(Clone, Copy, Debug, Default)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn report(&mut self, msg: &str) {
        log::info!("{msg}");
    }
}

/// Drops every message.
#[derive(Clone, Copy, Debug, Default)]
pub struct Quiet;

impl Diagnostics for Quiet {
    fn report(&mut self, _msg: &str) {}
}

impl Diagnostics for Vec<String> {
    fn report(&mut self, msg: &str) {
        self.push(msg.to_owned());
    }
}

/// The contents of an odds file. When `odds` is present it has one entry per
/// decorator.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OddsFile {
    pub decorators: Vec<String>,
    pub odds: Option<Vec<f64>>,
}

impl OddsFile {
    pub fn len(&self) -> usize {
        self.decorators.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// pairs of each decorator with its odds, if there are any
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<f64>)> + '_ {
        self.decorators.iter().enumerate().map(|(i, d)| {
            let odds = self.odds.as_ref().and_then(|odds| odds.get(i).copied());
            (d.as_str(), odds)
        })
    }

    /// Normalised selection weights for the decorators. Without odds, every
    /// decorator gets the same weight.
    pub fn probabilities(&self) -> Vec<f64> {
        match &self.odds {
            Some(odds) => {
                let total: f64 = odds.iter().sum();
                odds.iter().map(|o| o / total).collect()
            }
            None => {
                let n = self.len() as f64;
                vec![1.0 / n; self.len()]
            }
        }
    }
}

/// parse the odds in `text`. `name` is only used in messages and errors
pub fn parse_odds(
    text: &str,
    name: &str,
    diagnostics: &mut dyn Diagnostics,
) -> Result<OddsFile> {
    report_start(name, diagnostics);
    parse_lines(text.lines().map(|l| Ok(l.to_owned())), name, diagnostics)
}

/// like [parse_odds], but reading lines from `reader`
pub fn parse_odds_reader<R: BufRead>(
    reader: R,
    name: &str,
    diagnostics: &mut dyn Diagnostics,
) -> Result<OddsFile> {
    report_start(name, diagnostics);
    let lines = reader.lines().map(|l| l.map_err(|e| Error::io(name, e)));
    parse_lines(lines, name, diagnostics)
}

fn parse_lines(
    lines: impl Iterator<Item = Result<String>>,
    name: &str,
    diagnostics: &mut dyn Diagnostics,
) -> Result<OddsFile> {
    let mut decorators = Vec::new();
    let mut odds = Vec::new();
    let mut missing_odds = false;
    for (i, line) in lines.enumerate() {
        let line = line?;
        let lineno = i + 1;
        let content = match line.find(COMMENT) {
            Some(idx) => &line[..idx],
            None => &line,
        };
        let entry: Vec<_> = content.split_whitespace().collect();
        let (decorator, value) = match entry.as_slice() {
            [] => continue,
            [d] => (*d, None),
            [d, o] => (*d, Some(*o)),
            _ => {
                return Err(Error::MalformedLine {
                    file: name.to_owned(),
                    line: lineno,
                    text: line.trim_end().to_owned(),
                })
            }
        };
        decorators.push(unquote(decorator).to_owned());
        match value {
            Some(tok) => {
                let v = tok
                    .parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite() && *v >= 0.0)
                    .ok_or_else(|| Error::InvalidOdds {
                        file: name.to_owned(),
                        line: lineno,
                        token: tok.to_owned(),
                    })?;
                odds.push(v);
            }
            None => {
                debug!("line {lineno} of '{name}' has no odds");
                missing_odds = true;
            }
        }
    }

    // odds are finite and non-negative here, so a zero sum means all zero
    let total: f64 = odds.iter().sum();
    let odds = if missing_odds || total <= 0.0 || !total.is_finite() {
        None
    } else {
        Some(odds)
    };
    let ret = OddsFile { decorators, odds };
    report_table(&ret, diagnostics);
    Ok(ret)
}

fn report_start(name: &str, diagnostics: &mut dyn Diagnostics) {
    diagnostics.report(&format!("Attempting to parse file '{name}'"));
}

fn unquote(decorator: &str) -> &str {
    if decorator == "''" || decorator == "\"\"" {
        ""
    } else {
        decorator
    }
}

fn report_table(odds: &OddsFile, diagnostics: &mut dyn Diagnostics) {
    if odds.odds.is_none() {
        diagnostics.report("No odds provided, all will be assumed equal");
        return;
    }
    diagnostics.report(&format!("{:<30} {:>10}", "Decorators", "Odds"));
    for (decorator, o) in odds.iter() {
        let shown = if decorator.is_empty() { "''" } else { decorator };
        diagnostics.report(&format!("{shown:<30} {:>10.4}", o.unwrap_or(0.0)));
    }
}

impl DataDir {
    /// Resolve `path` with [DataDir::resolve] and parse it. `verbose` sends the
    /// diagnostics to the log and does not change the result.
    pub fn parse_odds_file(
        &self,
        path: impl AsRef<Path>,
        verbose: bool,
    ) -> Result<OddsFile> {
        if verbose {
            self.parse_odds_file_with(path, &mut LogDiagnostics)
        } else {
            self.parse_odds_file_with(path, &mut Quiet)
        }
    }

    pub fn parse_odds_file_with(
        &self,
        path: impl AsRef<Path>,
        diagnostics: &mut dyn Diagnostics,
    ) -> Result<OddsFile> {
        let path = path.as_ref();
        let name = path.display().to_string();
        report_start(&name, diagnostics);
        let resolved = self.resolve(path)?;
        debug!("parsing odds from {}", resolved.display());
        let f = File::open(&resolved).map_err(|e| Error::io(&resolved, e))?;
        let lines = BufReader::new(f)
            .lines()
            .map(|l| l.map_err(|e| Error::io(&resolved, e)));
        parse_lines(lines, &name, diagnostics)
    }
}
