//! Prompt construction

use super::types::ChatMessage;

/// Instruction restricting answers to the supplied profile
pub const SYSTEM_PROMPT: &str = "You are a portfolio assistant. Answer only using the provided profile text. \
If the answer is not in the profile text, say you don't have that information. \
If the question is unrelated to the profile, politely steer the conversation back to the profile.";

/// Build the system and user messages for a question about `profile`
pub fn build_messages(profile: &str, question: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(SYSTEM_PROMPT),
        ChatMessage::user(format!("Profile:\n{}\n\nQuestion: {}", profile, question)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::qa::ChatRole;

    #[test]
    fn test_build_messages() {
        let messages = build_messages("Rust engineer.", "What do you do?");

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, ChatRole::System);
        assert!(messages[0].content.starts_with("You are a portfolio assistant."));
        assert!(messages[0].content.contains("you don't have that information"));
        assert_eq!(messages[1].role, ChatRole::User);
        assert_eq!(
            messages[1].content,
            "Profile:\nRust engineer.\n\nQuestion: What do you do?"
        );
    }
}
