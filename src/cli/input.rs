//! Parsing of interactive key commands.

use std::io::{self, BufRead};
use std::str::FromStr;
use std::thread;

use tokio::sync::mpsc;

/// Lines read by [`spawn_line_reader`], in input order.
pub type InputLines = mpsc::UnboundedReceiver<io::Result<String>>;

/// A user intent typed into the interactive session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserIntent {
    StartPause,
    Reset,
    ToggleMode,
    ToggleBreaks,
    ToggleTheme,
    Status,
    Help,
    Quit,
}

impl FromStr for UserIntent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let intent = match s.trim().to_ascii_lowercase().as_str() {
            "s" | "start" | "pause" => UserIntent::StartPause,
            "r" | "reset" => UserIntent::Reset,
            "t" | "toggle" | "switch" => UserIntent::ToggleMode,
            "b" | "breaks" => UserIntent::ToggleBreaks,
            "d" | "theme" => UserIntent::ToggleTheme,
            "" | "status" => UserIntent::Status,
            "?" | "h" | "help" => UserIntent::Help,
            "q" | "quit" | "exit" => UserIntent::Quit,
            other => return Err(format!("unknown command: {:?} (type ? for help)", other)),
        };
        Ok(intent)
    }
}

/// Key reference shown by the help command.
pub const HELP_TEXT: &str = "\
  s  start / pause
  r  reset the current interval
  t  switch between focus and break
  b  turn alternating breaks on or off
  d  switch light / dark theme
  ?  show this help
  q  quit";

/// Reads `reader` line by line on a dedicated thread.
///
/// The channel closes at end of input or after the first read error. The
/// thread is detached, so a read still blocked on the terminal does not hold
/// up process exit.
///
/// # Errors
///
/// Returns an error if the thread cannot be spawned.
pub fn spawn_line_reader<R>(reader: R) -> io::Result<InputLines>
where
    R: BufRead + Send + 'static,
{
    let (tx, rx) = mpsc::unbounded_channel();

    thread::Builder::new()
        .name("input-reader".to_string())
        .spawn(move || {
            for line in reader.lines() {
                let failed = line.is_err();
                if tx.send(line).is_err() || failed {
                    break;
                }
            }
            tracing::debug!("Input reader finished");
        })?;

    Ok(rx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_short_keys() {
        assert_eq!("s".parse(), Ok(UserIntent::StartPause));
        assert_eq!("r".parse(), Ok(UserIntent::Reset));
        assert_eq!("t".parse(), Ok(UserIntent::ToggleMode));
        assert_eq!("b".parse(), Ok(UserIntent::ToggleBreaks));
        assert_eq!("d".parse(), Ok(UserIntent::ToggleTheme));
        assert_eq!("?".parse(), Ok(UserIntent::Help));
        assert_eq!("q".parse(), Ok(UserIntent::Quit));
    }

    #[test]
    fn test_parse_words_case_insensitive() {
        assert_eq!("  Start ".parse(), Ok(UserIntent::StartPause));
        assert_eq!("PAUSE".parse(), Ok(UserIntent::StartPause));
        assert_eq!("Switch".parse(), Ok(UserIntent::ToggleMode));
        assert_eq!("exit".parse(), Ok(UserIntent::Quit));
    }

    #[test]
    fn test_empty_line_is_status() {
        assert_eq!("".parse(), Ok(UserIntent::Status));
        assert_eq!("   ".parse(), Ok(UserIntent::Status));
    }

    #[test]
    fn test_unknown_command() {
        let err = "launch".parse::<UserIntent>().unwrap_err();
        assert!(err.contains("launch"));
    }

    #[tokio::test]
    async fn test_line_reader_forwards_lines_then_closes() {
        let mut lines = spawn_line_reader(io::Cursor::new("s\n\nq\n")).unwrap();

        assert_eq!(lines.recv().await.unwrap().unwrap(), "s");
        assert_eq!(lines.recv().await.unwrap().unwrap(), "");
        assert_eq!(lines.recv().await.unwrap().unwrap(), "q");
        assert!(lines.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_line_reader_stops_after_read_error() {
        let invalid = io::Cursor::new(vec![b'r', b'\n', 0xff, 0xfe, b'\n', b'q', b'\n']);
        let mut lines = spawn_line_reader(invalid).unwrap();

        assert_eq!(lines.recv().await.unwrap().unwrap(), "r");
        assert!(lines.recv().await.unwrap().is_err());
        assert!(lines.recv().await.is_none());
    }
}
