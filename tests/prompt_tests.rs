use tribrief::ai::prompt::{SYSTEM_INSTRUCTION, build_messages};

#[test]
fn test_system_instruction_demands_bulleted_output() {
    assert!(SYSTEM_INSTRUCTION.contains("exactly 3"));
    assert!(SYSTEM_INSTRUCTION.contains('\u{2022}'));
}

#[test]
fn test_build_messages_roles_and_order() {
    let messages = build_messages("The article body.");

    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0]["role"], "system");
    assert_eq!(messages[0]["content"], SYSTEM_INSTRUCTION);
    assert_eq!(messages[1]["role"], "user");
}

#[test]
fn test_user_message_embeds_text_verbatim() {
    let text = "Line one.\nLine two with \u{2022} glyph.";
    let messages = build_messages(text);

    let user_content = messages[1]["content"].as_str().unwrap();
    assert!(user_content.contains(text));
    assert!(user_content.starts_with("Please summarize this text in exactly 3 bullet points:"));
}
