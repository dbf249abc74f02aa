use std::path::{Path, PathBuf};

use super::ThemeRequest;

/// One line typed into the terminal client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatCommand {
    Send(String),
    Attach(Vec<PathBuf>),
    /// 1-based position in the attachment list.
    Remove(usize),
    Files,
    Theme(ThemeRequest),
    Prompts,
    /// 1-based quick prompt, optionally filled with the user's text.
    Prompt { number: usize, text: Option<String> },
    /// Writes the latest assistant reply to a file.
    Copy(PathBuf),
    Export(PathBuf),
    Help,
    Quit,
    Invalid(String),
}

pub fn parse_command(line: &str) -> ChatCommand {
    let trimmed = line.trim();
    let Some(rest) = trimmed.strip_prefix('/') else {
        return ChatCommand::Send(line.to_string());
    };

    let mut parts = rest.split_whitespace();
    let name = parts.next().unwrap_or_default();
    let args: Vec<&str> = parts.collect();

    match (name, args.as_slice()) {
        ("attach", []) => ChatCommand::Invalid("usage: /attach <path>...".to_string()),
        ("attach", paths) => ChatCommand::Attach(paths.iter().map(PathBuf::from).collect()),
        ("remove", [index]) => match index.parse::<usize>() {
            Ok(n) if n > 0 => ChatCommand::Remove(n),
            _ => ChatCommand::Invalid(format!("not a file number: {}", index)),
        },
        ("remove", _) => ChatCommand::Invalid("usage: /remove <n>".to_string()),
        ("files", []) => ChatCommand::Files,
        ("themes", []) => ChatCommand::Theme(ThemeRequest::Open),
        ("theme", []) => ChatCommand::Theme(ThemeRequest::Cycle),
        ("theme", ["ok"]) => ChatCommand::Theme(ThemeRequest::Confirm),
        ("theme", ["cancel"]) => ChatCommand::Theme(ThemeRequest::Dismiss),
        ("theme", [theme]) => ChatCommand::Theme(ThemeRequest::Pick((*theme).to_string())),
        ("prompts", []) => ChatCommand::Prompts,
        ("prompt", [number, words @ ..]) => match number.parse::<usize>() {
            Ok(n) if n > 0 => ChatCommand::Prompt {
                number: n,
                text: (!words.is_empty()).then(|| words.join(" ")),
            },
            _ => ChatCommand::Invalid(format!("not a prompt number: {}", number)),
        },
        ("prompt", []) => ChatCommand::Invalid("usage: /prompt <n> [texto]".to_string()),
        ("copy", [path]) => ChatCommand::Copy(PathBuf::from(path)),
        ("copy", _) => ChatCommand::Invalid("usage: /copy <path>".to_string()),
        ("export", [path]) => ChatCommand::Export(PathBuf::from(path)),
        ("export", _) => ChatCommand::Invalid("usage: /export <path>".to_string()),
        ("help", _) => ChatCommand::Help,
        ("quit" | "exit", _) => ChatCommand::Quit,
        (other, _) => ChatCommand::Invalid(format!("unknown command: /{}", other)),
    }
}

/// MIME type guessed from the extension, matching what the file picker accepts.
pub fn mime_for_path(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension.as_deref() {
        Some("pdf") => "application/pdf",
        Some("txt") => "text/plain",
        Some("md" | "markdown") => "text/markdown",
        _ => "application/octet-stream",
    }
}

pub const HELP: &str = "\
Commands:
  /attach <path>...   queue PDF or text files for the next message (max 5)
  /remove <n>         drop queued file number n
  /files              list queued files
  /theme [name]       cycle the theme, or pick dark-blue | dark-black | light
  /themes             open the theme picker (/theme ok saves, /theme cancel keeps)
  /prompts            list the quick prompts
  /prompt <n> [text]  show quick prompt n, or send it filled with text
  /copy <path>        save the latest reply to a file
  /export <path>      save the conversation as an HTML page
  /quit               leave
Anything else is sent as a message.";
