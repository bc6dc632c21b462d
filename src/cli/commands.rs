//! CLI argument and session command definitions

use crate::domain::{DraftField, Point};
use crate::error::{GratitudeError, Result};
use clap::{ArgAction, Parser};
use regex::Regex;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::OnceLock;

#[derive(Parser, Debug)]
#[command(name = "gratitude")]
#[command(about = "Interactive gratitude journal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Starting language (english, spanish); overrides the config file
    #[arg(short, long)]
    pub language: Option<String>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// One line of input to a running session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// Open the add-entry form
    New,
    /// Overwrite a text field of the draft
    SetField(DraftField, String),
    /// Attach a photo; no path means nothing was selected
    Image(Option<PathBuf>),
    /// Block until the photo being loaded is in the draft
    Wait,
    /// One pointer gesture through the given points
    Draw(Vec<Point>),
    Save,
    Cancel,
    List,
    ToggleLanguage,
    Help,
    Quit,
}

fn point_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^(-?\d+),(-?\d+)$").unwrap())
}

fn parse_point(token: &str) -> Option<Point> {
    let captures = point_regex().captures(token)?;
    let x = captures[1].parse().ok()?;
    let y = captures[2].parse().ok()?;
    Some(Point::new(x, y))
}

impl FromStr for SessionCommand {
    type Err = GratitudeError;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let (keyword, rest) = match line.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (line, ""),
        };

        match keyword.to_lowercase().as_str() {
            "new" | "add" => Ok(SessionCommand::New),
            "title" | "description" | "desc" => {
                let field = DraftField::from_str(keyword).map_err(GratitudeError::InvalidCommand)?;
                Ok(SessionCommand::SetField(field, rest.to_string()))
            }
            "image" | "photo" => Ok(SessionCommand::Image(
                (!rest.is_empty()).then(|| PathBuf::from(rest)),
            )),
            "wait" => Ok(SessionCommand::Wait),
            "draw" => {
                let points: Option<Vec<Point>> = rest.split_whitespace().map(parse_point).collect();
                match points {
                    Some(points) if !points.is_empty() => Ok(SessionCommand::Draw(points)),
                    _ => Err(GratitudeError::InvalidCommand(line.to_string())),
                }
            }
            "save" => Ok(SessionCommand::Save),
            "cancel" => Ok(SessionCommand::Cancel),
            "list" => Ok(SessionCommand::List),
            "lang" | "language" => Ok(SessionCommand::ToggleLanguage),
            "help" | "?" => Ok(SessionCommand::Help),
            "quit" | "exit" => Ok(SessionCommand::Quit),
            _ => Err(GratitudeError::InvalidCommand(line.to_string())),
        }
    }
}
