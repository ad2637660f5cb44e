//! Clipboard hand-off.
//!
//! On Linux the selection is owned by the process that set it and vanishes
//! when that process exits, so the text is passed to a detached copy of this
//! binary that keeps serving it until another application takes the
//! clipboard over. Other platforms keep the contents after exit.

use crate::error::AppError;
use std::io::BufRead;

/// Set in the environment of the helper process.
const HELPER_ENV: &str = "MATCH_SCOREBOARD_CLIPBOARD_HELPER";
/// First line the helper writes once it owns the clipboard.
const READY: &str = "ready";

fn clipboard_error(e: impl std::fmt::Display) -> AppError {
    AppError::ClipboardError(e.to_string())
}

pub fn is_helper() -> bool {
    cfg!(target_os = "linux") && std::env::var_os(HELPER_ENV).is_some()
}

#[cfg(not(target_os = "linux"))]
pub fn copy(text: &str) -> Result<(), AppError> {
    let mut clipboard = arboard::Clipboard::new().map_err(clipboard_error)?;
    clipboard.set_text(text).map_err(clipboard_error)
}

/// Returns once the helper reports that it owns the clipboard.
#[cfg(target_os = "linux")]
pub fn copy(text: &str) -> Result<(), AppError> {
    use std::io::{BufReader, Write};
    use std::process::{Command, Stdio};

    let exe = std::env::current_exe().map_err(clipboard_error)?;
    let mut helper = Command::new(exe)
        .env(HELPER_ENV, "1")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .current_dir("/")
        .spawn()
        .map_err(clipboard_error)?;

    let mut stdin = helper
        .stdin
        .take()
        .ok_or_else(|| clipboard_error("clipboard helper has no stdin"))?;
    stdin.write_all(text.as_bytes()).map_err(clipboard_error)?;
    drop(stdin);

    let stdout = helper
        .stdout
        .take()
        .ok_or_else(|| clipboard_error("clipboard helper has no stdout"))?;
    await_handoff(BufReader::new(stdout))
}

/// Entry point of the helper process: read the text from stdin, take the
/// clipboard, report on stdout, then keep serving until replaced.
#[cfg(target_os = "linux")]
pub fn serve() {
    use arboard::SetExtLinux;
    use std::io::{Read, Write};

    let mut text = String::new();
    let owned = std::io::stdin()
        .read_to_string(&mut text)
        .map_err(|e| e.to_string())
        .and_then(|_| arboard::Clipboard::new().map_err(|e| e.to_string()))
        .and_then(|mut clipboard| {
            clipboard.set_text(text.as_str()).map_err(|e| e.to_string())?;
            Ok(clipboard)
        });

    let mut stdout = std::io::stdout();
    match owned {
        Ok(mut clipboard) => {
            let _ = writeln!(stdout, "{}", READY);
            let _ = stdout.flush();
            // Blocks until another application owns the clipboard.
            let _ = clipboard.set().wait().text(text);
        }
        Err(reason) => {
            let _ = writeln!(stdout, "{}", reason);
            let _ = stdout.flush();
        }
    }
}

#[cfg(not(target_os = "linux"))]
pub fn serve() {}

#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn await_handoff(mut reader: impl BufRead) -> Result<(), AppError> {
    let mut line = String::new();
    reader.read_line(&mut line).map_err(clipboard_error)?;
    match line.trim_end() {
        READY => Ok(()),
        "" => Err(clipboard_error("clipboard helper exited before taking the clipboard")),
        reason => Err(AppError::ClipboardError(reason.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_ready_line_completes_handoff() {
        assert!(await_handoff(Cursor::new("ready\n")).is_ok());
    }

    #[test]
    fn test_helper_exit_without_ready_is_error() {
        let err = await_handoff(Cursor::new("")).unwrap_err();
        assert!(matches!(err, AppError::ClipboardError(_)));
    }

    #[test]
    fn test_helper_failure_reason_is_reported() {
        let err = await_handoff(Cursor::new("no display server\n")).unwrap_err();
        assert_eq!(err.to_string(), "Clipboard error: no display server");
    }

    #[test]
    fn test_plain_run_is_not_the_helper() {
        assert!(std::env::var_os(HELPER_ENV).is_none());
        assert!(!is_helper());
    }
}
