use std::path::{Path, PathBuf};

use studybot::presentation::cli::{ChatCommand, ThemeRequest, mime_for_path, parse_command};

#[test]
fn given_plain_text_when_parsing_then_sends_line_unchanged() {
    assert_eq!(
        parse_command("Explique a fotossíntese"),
        ChatCommand::Send("Explique a fotossíntese".to_string())
    );
}

#[test]
fn given_attach_with_paths_when_parsing_then_collects_them() {
    assert_eq!(
        parse_command("/attach aula.pdf notas.txt"),
        ChatCommand::Attach(vec![PathBuf::from("aula.pdf"), PathBuf::from("notas.txt")])
    );
}

#[test]
fn given_attach_without_paths_when_parsing_then_returns_usage() {
    assert!(matches!(parse_command("/attach"), ChatCommand::Invalid(_)));
}

#[test]
fn given_remove_index_when_parsing_then_requires_positive_number() {
    assert_eq!(parse_command("/remove 2"), ChatCommand::Remove(2));
    assert!(matches!(parse_command("/remove 0"), ChatCommand::Invalid(_)));
    assert!(matches!(parse_command("/remove x"), ChatCommand::Invalid(_)));
}

#[test]
fn given_theme_commands_when_parsing_then_maps_to_requests() {
    assert_eq!(parse_command("/theme"), ChatCommand::Theme(ThemeRequest::Cycle));
    assert_eq!(parse_command("/themes"), ChatCommand::Theme(ThemeRequest::Open));
    assert_eq!(parse_command("/theme ok"), ChatCommand::Theme(ThemeRequest::Confirm));
    assert_eq!(parse_command("/theme cancel"), ChatCommand::Theme(ThemeRequest::Dismiss));
    assert_eq!(
        parse_command("/theme light"),
        ChatCommand::Theme(ThemeRequest::Pick("light".to_string()))
    );
}

#[test]
fn given_prompt_commands_when_parsing_then_text_is_optional() {
    assert_eq!(parse_command("/prompts"), ChatCommand::Prompts);
    assert_eq!(
        parse_command("/prompt 2"),
        ChatCommand::Prompt {
            number: 2,
            text: None
        }
    );
    assert_eq!(
        parse_command("/prompt 1 a   Revolução Francesa"),
        ChatCommand::Prompt {
            number: 1,
            text: Some("a Revolução Francesa".to_string())
        }
    );
    assert!(matches!(parse_command("/prompt 0"), ChatCommand::Invalid(_)));
    assert!(matches!(parse_command("/prompt"), ChatCommand::Invalid(_)));
}

#[test]
fn given_copy_command_when_parsing_then_requires_path() {
    assert_eq!(
        parse_command("/copy resposta.md"),
        ChatCommand::Copy(PathBuf::from("resposta.md"))
    );
    assert!(matches!(parse_command("/copy"), ChatCommand::Invalid(_)));
}

#[test]
fn given_simple_commands_when_parsing_then_maps_to_variants() {
    assert_eq!(parse_command("/files"), ChatCommand::Files);
    assert_eq!(parse_command("/help"), ChatCommand::Help);
    assert_eq!(parse_command("/quit"), ChatCommand::Quit);
    assert_eq!(parse_command(" /exit "), ChatCommand::Quit);
    assert_eq!(
        parse_command("/export chat.html"),
        ChatCommand::Export(PathBuf::from("chat.html"))
    );
}

#[test]
fn given_unknown_command_when_parsing_then_reports_it() {
    assert_eq!(
        parse_command("/dance"),
        ChatCommand::Invalid("unknown command: /dance".to_string())
    );
}

#[test]
fn given_file_extensions_when_guessing_mime_then_matches_accepted_types() {
    assert_eq!(mime_for_path(Path::new("a.PDF")), "application/pdf");
    assert_eq!(mime_for_path(Path::new("a.txt")), "text/plain");
    assert_eq!(mime_for_path(Path::new("a.md")), "text/markdown");
    assert_eq!(mime_for_path(Path::new("a.png")), "application/octet-stream");
    assert_eq!(mime_for_path(Path::new("sem_extensao")), "application/octet-stream");
}
