//! Free-text location extraction from a conversation.

use crate::types::conversation::ConversationEntry;

/// Question keywords that signal a location exchange.
const LOCATION_CUES: &[&str] = &["location", "located", "where", "city", "area"];

/// Scan a conversation for the user's stated location.
///
/// Takes the latest entry whose question mentions a location cue and whose
/// answer is non-blank, and returns the trimmed answer. Returns None when
/// the conversation never touched location.
pub fn extract_user_location(entries: &[ConversationEntry]) -> Option<String> {
    entries.iter().rev().find_map(|entry| {
        let question = entry.question.to_lowercase();
        if !LOCATION_CUES.iter().any(|cue| question.contains(cue)) {
            return None;
        }
        let answer = entry.answer.trim();
        if answer.is_empty() {
            None
        } else {
            Some(answer.to_string())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::conversation::Role;

    fn entry(question: &str, answer: &str) -> ConversationEntry {
        ConversationEntry::new(Role::User, question, answer)
    }

    #[test]
    fn finds_the_location_answer() {
        let entries = vec![
            entry("What type of business?", "A bakery"),
            entry("Where is your business located?", "Lahore, Pakistan"),
        ];
        assert_eq!(
            extract_user_location(&entries).as_deref(),
            Some("Lahore, Pakistan")
        );
    }

    #[test]
    fn returns_none_without_a_location_exchange() {
        let entries = vec![
            entry("What type of business?", "A bakery"),
            entry("Who are your customers?", "Families"),
        ];
        assert_eq!(extract_user_location(&entries), None);
    }

    #[test]
    fn latest_location_answer_wins() {
        let entries = vec![
            entry("Which city are you in?", "Karachi"),
            entry("What products do you sell?", "Bread"),
            entry("Where is your business located?", "Lahore"),
        ];
        assert_eq!(extract_user_location(&entries).as_deref(), Some("Lahore"));
    }

    #[test]
    fn blank_answers_are_skipped() {
        let entries = vec![
            entry("Which city are you in?", "Karachi"),
            entry("Where is your business located?", "   "),
        ];
        assert_eq!(extract_user_location(&entries).as_deref(), Some("Karachi"));
    }

    #[test]
    fn answers_are_trimmed() {
        let entries = vec![entry("Which area do you serve?", "  Gulberg, Lahore  ")];
        assert_eq!(
            extract_user_location(&entries).as_deref(),
            Some("Gulberg, Lahore")
        );
    }
}
