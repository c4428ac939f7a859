use anyhow::{Context, Result};
use clap::Args;
use recursion_core::{Board, Finder, Position, Quad, RecordingSink, TraceRecord, TracingSink};
use serde::Serialize;
use std::io::{self, Read, Write};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct FindArgs {
    /// Words to look for
    #[arg(required = true)]
    pub words: Vec<String>,

    /// Board as 25 whitespace-separated letters, row by row
    #[arg(long, conflicts_with = "board_file")]
    pub board: Option<String>,

    /// Read the board from a file instead (stdin when neither is given)
    #[arg(long)]
    pub board_file: Option<PathBuf>,

    /// Show the tiles used for each word found
    #[arg(long)]
    pub path: bool,

    /// Print every search step as a table
    #[arg(long)]
    pub trace: bool,

    /// Print one JSON object per word
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// First square, e.g. 0 or "[1, 0, [0, 0, 1, 1], 0]"
    pub first: String,

    /// Second square
    pub second: String,

    /// Print the result as compact JSON
    #[arg(long)]
    pub json: bool,
}

/// Result of looking up one word
#[derive(Debug, Serialize)]
struct FindReport<'a> {
    word: &'a str,
    found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<Vec<Position>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    trace: Vec<TraceRecord>,
}

pub fn run_find(args: FindArgs) -> Result<()> {
    let text = read_board_text(&args)?;
    let board = Board::parse(&text).context("invalid board")?;
    tracing::info!(words = args.words.len(), "board loaded");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_find(&args, &board, &mut out)
}

fn read_board_text(args: &FindArgs) -> Result<String> {
    if let Some(text) = &args.board {
        return Ok(text.clone());
    }
    if let Some(path) = &args.board_file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("failed to read board from {}", path.display()));
    }
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .context("failed to read board from stdin")?;
    Ok(text)
}

fn write_find(args: &FindArgs, board: &Board, out: &mut impl Write) -> Result<()> {
    let mut recorder = Finder::with_sink(RecordingSink::new());
    let mut logger = Finder::with_sink(TracingSink);

    for word in &args.words {
        let (path, trace) = if args.trace {
            recorder.sink_mut().clear();
            let path = recorder.find_path(board, word);
            (path, recorder.sink().records().to_vec())
        } else {
            (logger.find_path(board, word), Vec::new())
        };

        let report = FindReport {
            word,
            found: path.is_some(),
            path: if args.path || args.json { path } else { None },
            trace,
        };

        if args.json {
            writeln!(out, "{}", serde_json::to_string(&report)?)?;
        } else {
            write_report(&report, out)?;
        }
    }
    Ok(())
}

fn write_report(report: &FindReport<'_>, out: &mut impl Write) -> io::Result<()> {
    if !report.trace.is_empty() {
        writeln!(out, "{}", TraceRecord::header())?;
        for record in &report.trace {
            writeln!(out, "{}", record)?;
        }
    }

    let verdict = if report.found { "found" } else { "not found" };
    writeln!(out, "{}: {}", report.word, verdict)?;

    if let Some(path) = &report.path {
        let steps: Vec<String> = path.iter().map(|pos| pos.to_string()).collect();
        writeln!(out, "  {}", steps.join(" -> "))?;
    }
    Ok(())
}

pub fn run_add(args: AddArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_add(&args, &mut out)
}

fn write_add(args: &AddArgs, out: &mut impl Write) -> Result<()> {
    let first = Quad::parse(&args.first).context("invalid first square")?;
    let second = Quad::parse(&args.second).context("invalid second square")?;
    tracing::debug!(first = %first, second = %second, "adding squares");

    let sum = first.add(&second);
    if args.json {
        writeln!(out, "{}", serde_json::to_string(&sum)?)?;
    } else {
        writeln!(out, "{}", sum)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOARD: &str = "N C A N E O U I O P Z Q Z O N F A D P L E D E A Z";

    fn find_args(words: &[&str]) -> FindArgs {
        FindArgs {
            words: words.iter().map(|w| w.to_string()).collect(),
            board: Some(BOARD.to_string()),
            board_file: None,
            path: false,
            trace: false,
            json: false,
        }
    }

    fn run(args: &FindArgs) -> String {
        let board = Board::parse(&read_board_text(args).unwrap()).unwrap();
        let mut out = Vec::new();
        write_find(args, &board, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_find_plain() {
        let output = run(&find_args(&["NOON", "CANON"]));
        assert_eq!(output, "NOON: found\nCANON: not found\n");
    }

    #[test]
    fn test_find_with_path() {
        let mut args = find_args(&["NOPE"]);
        args.path = true;
        let output = run(&args);
        assert_eq!(output, "NOPE: found\n  (0, 3) -> (1, 3) -> (1, 4) -> (0, 4)\n");
    }

    #[test]
    fn test_find_with_trace() {
        let mut args = find_args(&["NOON"]);
        args.trace = true;
        let output = run(&args);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], TraceRecord::header());
        assert!(lines[1].starts_with("OK    0,0  N  NOON"));
        assert!(lines.iter().any(|l| l.starts_with("WIN   2,4")));
        assert_eq!(*lines.last().unwrap(), "NOON: found");
    }

    #[test]
    fn test_find_json() {
        let mut args = find_args(&["NOON", "QUINE"]);
        args.json = true;
        let output = run(&args);
        let lines: Vec<serde_json::Value> = output
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines[0]["word"], "NOON");
        assert_eq!(lines[0]["found"], true);
        assert_eq!(lines[0]["path"][3]["col"], 4);
        assert_eq!(lines[1]["found"], false);
        assert!(lines[1].get("path").is_none());
    }

    #[test]
    fn test_find_json_trace() {
        let mut args = find_args(&["NON"]);
        args.json = true;
        args.trace = true;
        let output = run(&args);
        let report: serde_json::Value = serde_json::from_str(output.trim()).unwrap();
        assert_eq!(report["found"], false);

        let trace = report["trace"].as_array().unwrap();
        assert_eq!(trace[0]["outcome"], "OK");
        assert_eq!(trace[0]["visited"], serde_json::json!([]));

        let seen = trace.iter().find(|r| r["outcome"] == "SEEN").unwrap();
        assert_eq!(seen["position"], serde_json::json!({"row": 0, "col": 0}));
        assert_eq!(seen["letter"], "N");
        assert_eq!(seen["remaining"], "N");
        assert_eq!(
            seen["visited"],
            serde_json::json!([{"row": 0, "col": 0}, {"row": 1, "col": 0}])
        );

        let tags = ["OK", "NO", "SEEN", "WIN"];
        assert!(trace
            .iter()
            .all(|r| tags.contains(&r["outcome"].as_str().unwrap())));
    }

    #[test]
    fn test_board_from_file() {
        let path = std::env::temp_dir().join(format!("recurse-board-{}.txt", std::process::id()));
        std::fs::write(&path, "N C A N E\nO U I O P\nZ Q Z O N\nF A D P L\nE D E A Z\n").unwrap();
        let mut args = find_args(&["FADED"]);
        args.board = None;
        args.board_file = Some(path.clone());
        let output = run(&args);
        std::fs::remove_file(&path).unwrap();
        assert_eq!(output, "FADED: found\n");
    }

    #[test]
    fn test_missing_board_file() {
        let mut args = find_args(&["NOON"]);
        args.board = None;
        args.board_file = Some(PathBuf::from("/nonexistent/board.txt"));
        let err = read_board_text(&args).unwrap_err();
        assert!(err.to_string().contains("failed to read board"));
    }

    #[test]
    fn test_add_output() {
        let args = AddArgs {
            first: "[0, [1, 1, 1, 0], [0, 0, 0, 0], 1]".to_string(),
            second: "[1, [1, 0, 1, [0, 0, 1, 1]], [1, 0, 1, 0], 1]".to_string(),
            json: false,
        };
        let mut out = Vec::new();
        write_add(&args, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "[1, [1, 1, 1, [0, 0, 1, 1]], [1, 0, 1, 0], 1]\n"
        );
    }

    #[test]
    fn test_add_json_output() {
        let args = AddArgs {
            first: "0".to_string(),
            second: "[1, 0, 1, 0]".to_string(),
            json: true,
        };
        let mut out = Vec::new();
        write_add(&args, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "[1,0,1,0]\n");
    }

    #[test]
    fn test_add_rejects_bad_square() {
        let args = AddArgs {
            first: "[0, 1]".to_string(),
            second: "1".to_string(),
            json: false,
        };
        let mut out = Vec::new();
        let err = write_add(&args, &mut out).unwrap_err();
        assert!(format!("{:#}", err).contains("invalid first square"));
    }
}
