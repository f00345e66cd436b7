//! Keyword classification of free-text messages.
//!
//! Substring rules are evaluated in declaration order and the first hit wins,
//! so earlier rules mask later ones ("my work background" is Projects, not
//! Experience). No normalization beyond lower-casing.

/// Topic bucket a free-text message falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Projects,
    Experience,
    Skills,
    About,
    Contact,
    Resume,
    Unmatched,
}

/// Ordered rule table. A message matches a rule when it contains any of the
/// rule's substrings.
const TOPIC_RULES: &[(Topic, &[&str])] = &[
    (Topic::Projects, &["work", "project"]),
    (Topic::Experience, &["experience", "background"]),
    (Topic::Skills, &["skill", "tool"]),
    (Topic::About, &["about", "personal"]),
    (Topic::Contact, &["contact", "hire", "available"]),
    (Topic::Resume, &["resume", "download"]),
];

/// Substrings that turn on the project-carousel flag, independent of the
/// topic the message classifies into.
const PORTFOLIO_TRIGGERS: &[&str] = &["work", "project", "portfolio"];

/// Returns the first matching topic for the message, or `Unmatched`.
pub fn classify(message: &str) -> Topic {
    let lower = message.to_lowercase();
    for (topic, needles) in TOPIC_RULES {
        if needles.iter().any(|needle| lower.contains(needle)) {
            return *topic;
        }
    }
    Topic::Unmatched
}

/// Whether the reply to this message should carry the carousel flag.
pub fn wants_portfolio(message: &str) -> bool {
    let lower = message.to_lowercase();
    PORTFOLIO_TRIGGERS
        .iter()
        .any(|needle| lower.contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_rule_matches_its_keywords() {
        assert_eq!(classify("show me your projects"), Topic::Projects);
        assert_eq!(classify("what is your experience"), Topic::Experience);
        assert_eq!(classify("which tools do you use"), Topic::Skills);
        assert_eq!(classify("tell me about yourself"), Topic::About);
        assert_eq!(classify("are you available for hire"), Topic::Contact);
        assert_eq!(classify("can I download something"), Topic::Resume);
    }

    #[test]
    fn test_first_rule_masks_later_ones() {
        // "work" sits in the first rule; "background" never gets a look.
        assert_eq!(classify("tell me about your work background"), Topic::Projects);
        // "about" precedes "contact".
        assert_eq!(classify("how about contacting you"), Topic::About);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert_eq!(classify("SHOW ME YOUR RESUME"), Topic::Resume);
        assert_eq!(classify("Tell Me About Your PROJECTS"), Topic::Projects);
    }

    #[test]
    fn test_no_keyword_is_unmatched() {
        assert_eq!(classify("asdkjasd"), Topic::Unmatched);
        assert_eq!(classify(""), Topic::Unmatched);
    }

    #[test]
    fn test_substring_matches_inside_words() {
        // "homework" contains "work"; matching is plain substring search.
        assert_eq!(classify("I love homework"), Topic::Projects);
    }

    #[test]
    fn test_portfolio_flag_is_independent_of_topic() {
        // "portfolio" hits no topic rule but still flags the carousel.
        assert_eq!(classify("portfolio"), Topic::Unmatched);
        assert!(wants_portfolio("portfolio"));
        assert!(wants_portfolio("Tell me about your WORK"));
        assert!(!wants_portfolio("tell me about yourself"));
    }

    #[test]
    fn test_classification_is_stable() {
        let input = "skills and projects";
        assert_eq!(classify(input), classify(input));
    }
}
