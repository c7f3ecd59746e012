//! Helpers for building the message list sent to the provider.

use llm::Message;

use crate::persona::Persona;

/// Build the system prompt for `persona`.
///
/// `responses` is the stored self-assessment text. Only personas that read
/// responses use it, and an empty record counts as absent.
pub fn system_prompt(persona: Persona, responses: Option<&str>) -> String {
    let config = persona.config();
    let mut prompt = config.system_prompt.to_string();
    if !config.uses_responses {
        return prompt;
    }
    if let Some(text) = responses.filter(|t| !t.is_empty()) {
        prompt.push_str("\n\nIMPORTANT: The student has submitted their self-assessment. Here are their answers:\n\n");
        prompt.push_str(text);
        prompt.push_str(
            "\n\nWhen responding to the user, reference their specific answers and behavior from these responses.\n\
             Acknowledge their efforts, struggles, and engagement patterns. Be encouraging about their self-awareness\n\
             and use their specific examples to provide personalized, emotional, and sparkly feedback.",
        );
    }
    prompt
}

/// Assemble `[system, example user, example assistant, user]`.
pub fn compose(persona: Persona, responses: Option<&str>, user_message: &str) -> Vec<Message> {
    let config = persona.config();
    vec![
        Message::system(system_prompt(persona, responses)),
        Message::user(config.example_user),
        Message::assistant(config.example_assistant),
        Message::user(user_message),
    ]
}
