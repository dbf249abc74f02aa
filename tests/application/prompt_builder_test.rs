use studybot::application::services::{
    FILE_CONTENT_MARKER, SYSTEM_PROMPT, build_prompt, contains_file_content, format_file_block,
    select_generation_config,
};
use studybot::domain::{GenerationConfig, PromptRole, PromptTurn};

#[test]
fn given_no_history_when_building_then_system_turn_precedes_message() {
    let prompt = build_prompt("Oi", &[]);

    assert_eq!(prompt.turns.len(), 2);
    assert_eq!(prompt.turns[0], PromptTurn::new(PromptRole::User, SYSTEM_PROMPT));
    assert_eq!(prompt.last_turn().unwrap().text, "Oi");
}

#[test]
fn given_history_when_building_then_turns_keep_their_order() {
    let history = vec![
        PromptTurn::new(PromptRole::User, "a"),
        PromptTurn::new(PromptRole::Model, "b"),
        PromptTurn::new(PromptRole::User, "c"),
    ];

    let prompt = build_prompt("d", &history);

    let texts: Vec<&str> = prompt.turns.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec![SYSTEM_PROMPT, "a", "b", "c", "d"]);
    assert_eq!(prompt.turns[2].role, PromptRole::Model);
}

#[test]
fn given_plain_message_when_selecting_config_then_conversational() {
    assert_eq!(select_generation_config("Explique mitose"), GenerationConfig::CONVERSATIONAL);
}

#[test]
fn given_file_block_when_selecting_config_then_document() {
    let message = format!("Resuma{}", format_file_block("aula.pdf", "texto"));

    assert!(contains_file_content(&message));
    assert_eq!(build_prompt(&message, &[]).generation, GenerationConfig::DOCUMENT);
}

#[test]
fn given_filename_and_text_when_formatting_block_then_uses_marker_header() {
    let block = format_file_block("notas.txt", "linha 1");

    assert_eq!(block, format!("\n\n{} notas.txt:\nlinha 1", FILE_CONTENT_MARKER));
}

#[test]
fn given_marker_only_in_history_when_selecting_config_then_conversational() {
    let history = vec![PromptTurn::new(
        PromptRole::User,
        format_file_block("aula.pdf", "texto"),
    )];

    let prompt = build_prompt("E agora?", &history);

    assert_eq!(prompt.generation, GenerationConfig::CONVERSATIONAL);
}
