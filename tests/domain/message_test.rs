use studybot::domain::{Message, MessageRole};

#[test]
fn given_two_messages_when_created_then_ids_differ() {
    let first = Message::user("Oi");
    let second = Message::user("Oi");

    assert_ne!(first.id, second.id);
}

#[test]
fn given_assistant_message_when_created_then_role_is_assistant() {
    let message = Message::assistant("Olá");

    assert_eq!(message.role, MessageRole::Assistant);
    assert_eq!(message.content, "Olá");
}

#[test]
fn given_message_when_serialized_then_role_is_lowercase() {
    let message = Message::user("Oi");

    let json = serde_json::to_value(&message).unwrap();

    assert_eq!(json["role"], "user");
    assert_eq!(json["content"], "Oi");
    assert!(json["timestamp"].is_string());
}

#[test]
fn given_role_names_when_parsing_then_matches_variants() {
    assert_eq!("user".parse::<MessageRole>().unwrap(), MessageRole::User);
    assert_eq!(
        "assistant".parse::<MessageRole>().unwrap(),
        MessageRole::Assistant
    );
    assert!("model".parse::<MessageRole>().is_err());
}
