//! # cw-platform
//!
//! Local clipboard access by shelling out to the platform's clipboard
//! commands. `CLIPBOARD_COPY_COMMAND` / `CLIPBOARD_PASTE_COMMAND`
//! override the built-in table, which covers Termux, Linux (xclip),
//! macOS and Windows.

use std::env;
use std::io::Write;
use std::process::{Command, Stdio};

use anyhow::{bail, Context, Result};
use log::debug;

/// Names a command that prints the local clipboard to stdout.
pub const COPY_COMMAND_ENV: &str = "CLIPBOARD_COPY_COMMAND";
/// Names a command that sets the local clipboard from stdin.
pub const PASTE_COMMAND_ENV: &str = "CLIPBOARD_PASTE_COMMAND";

/// Text of the local clipboard. A non-empty `explicit` value
/// short-circuits the command lookup.
pub fn fetch_clipboard(explicit: Option<String>) -> Result<String> {
    if let Some(text) = explicit {
        if !text.is_empty() {
            return Ok(text);
        }
    }
    let command = read_command()?;
    command_output(&command)
}

/// Writes `text` into the local clipboard.
pub fn set_clipboard(text: &str) -> Result<()> {
    let command = write_command()?;
    command_with_stdin(&command, text)
}

fn read_command() -> Result<String> {
    if let Ok(command) = env::var(COPY_COMMAND_ENV) {
        if !command.is_empty() {
            return Ok(command);
        }
    }
    if on_termux() {
        return Ok("termux-clipboard-get".to_string());
    }
    if cfg!(target_os = "linux") {
        Ok("xclip -o -selection clipboard".to_string())
    } else if cfg!(target_os = "macos") {
        Ok("pbpaste".to_string())
    } else if cfg!(windows) {
        Ok("powershell.exe -Command Get-Clipboard".to_string())
    } else {
        bail!(
            "unsupported platform: set {} to a command which prints your clipboard",
            COPY_COMMAND_ENV
        );
    }
}

fn write_command() -> Result<String> {
    if let Ok(command) = env::var(PASTE_COMMAND_ENV) {
        if !command.is_empty() {
            return Ok(command);
        }
    }
    if on_termux() {
        return Ok("termux-clipboard-set".to_string());
    }
    if cfg!(target_os = "linux") {
        Ok("xclip -i -selection clipboard".to_string())
    } else if cfg!(target_os = "macos") {
        Ok("pbcopy".to_string())
    } else if cfg!(windows) {
        Ok("powershell.exe -Command Set-Clipboard".to_string())
    } else {
        bail!(
            "unsupported platform: set {} to a command which sets your clipboard",
            PASTE_COMMAND_ENV
        );
    }
}

fn on_termux() -> bool {
    env::var_os("TERMUX_VERSION").is_some()
}

fn shell(command: &str) -> Command {
    if cfg!(windows) {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", command]);
        cmd
    } else {
        let mut cmd = Command::new("sh");
        cmd.args(["-c", command]);
        cmd
    }
}

fn command_output(command: &str) -> Result<String> {
    debug!("running clipboard read command: {}", command);
    let output = shell(command)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .with_context(|| format!("failed to run: {}", command))?;
    if !output.status.success() {
        bail!(
            "{} exited with {}: {}",
            command,
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }
    String::from_utf8(output.stdout)
        .with_context(|| format!("{} printed non-UTF-8 output", command))
}

fn command_with_stdin(command: &str, stdin: &str) -> Result<()> {
    debug!("running clipboard write command: {}", command);
    let mut child = shell(command)
        .stdin(Stdio::piped())
        .spawn()
        .with_context(|| format!("failed to run: {}", command))?;
    child
        .stdin
        .take()
        .context("child stdin unavailable")?
        .write_all(stdin.as_bytes())
        .with_context(|| format!("failed writing to {}", command))?;
    let status = child
        .wait()
        .with_context(|| format!("failed waiting for {}", command))?;
    if !status.success() {
        bail!("{} exited with {}", command, status);
    }
    Ok(())
}
