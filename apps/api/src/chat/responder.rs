//! Shared classify-then-render path. The HTTP route and the in-process
//! session backend both call through here, so the rule table and templates
//! cannot drift between surfaces.

use tracing::debug;

use crate::knowledge::Knowledge;

use super::classifier::{self, Topic};
use super::templates;

/// Reply to one free-text message: the rendered text plus the carousel flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    pub message: String,
    pub portfolio: bool,
}

/// Classifies the message, renders the topic, and computes the carousel flag
/// from the raw text (the flag is independent of the topic).
pub fn respond(message: &str, knowledge: &Knowledge) -> ChatReply {
    let topic = classifier::classify(message);
    if topic == Topic::Unmatched {
        debug!("no topic rule matched, serving the welcome response");
    }
    ChatReply {
        message: render_topic(topic, knowledge),
        portfolio: classifier::wants_portfolio(message),
    }
}

/// Renders one topic against the knowledge base. In sample mode every topic
/// short-circuits to its canned sample.
pub fn render_topic(topic: Topic, knowledge: &Knowledge) -> String {
    if !knowledge.has_real_data() {
        return templates::sample_response(topic).to_string();
    }
    match topic {
        Topic::Projects => templates::projects_response(&knowledge.profile),
        Topic::Experience => templates::experience_response(&knowledge.profile),
        Topic::Skills => templates::skills_response(&knowledge.profile),
        Topic::About => templates::about_response(&knowledge.profile),
        Topic::Contact => templates::contact_response(&knowledge.profile),
        Topic::Resume => templates::resume_response(&knowledge.contact),
        Topic::Unmatched => templates::welcome_response(&knowledge.profile),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::profile::{Profile, Project};
    use crate::knowledge::AssistantData;

    fn make_knowledge(name: &str) -> Knowledge {
        let mut profile = Profile::default();
        profile.personal.name = name.to_string();
        profile.personal.elevator_pitch = "I'm a designer who codes.".to_string();
        profile.projects.featured = vec![Project {
            name: "Atlas".to_string(),
            overview: "A mapping platform.".to_string(),
            ..Project::default()
        }];
        Knowledge::from_parts(profile, AssistantData::default())
    }

    #[test]
    fn test_project_question_renders_projects_with_carousel() {
        let knowledge = make_knowledge("Ada Lovelace");
        let reply = respond("Tell me about your projects", &knowledge);
        assert!(reply.message.starts_with("Here are some of my featured projects:"));
        assert!(reply.message.contains("**Atlas**"));
        assert!(reply.portfolio);
    }

    #[test]
    fn test_gibberish_renders_welcome_without_carousel() {
        let knowledge = make_knowledge("Ada Lovelace");
        let reply = respond("asdkjasd", &knowledge);
        assert!(reply.message.starts_with("Thanks for your message!"));
        assert!(!reply.portfolio);
    }

    #[test]
    fn test_sample_mode_serves_canned_content_for_every_topic() {
        let knowledge = make_knowledge("[Your Full Name]");
        let reply = respond("show me your projects", &knowledge);
        assert_eq!(reply.message, templates::PROJECT_SAMPLE);
        assert!(reply.portfolio);

        // Topics without their own sample degrade to the about sample.
        let reply = respond("how do I contact you", &knowledge);
        assert_eq!(reply.message, templates::ABOUT_SAMPLE);
        assert!(!reply.portfolio);
    }

    #[test]
    fn test_carousel_flag_without_topic_match() {
        let knowledge = make_knowledge("Ada Lovelace");
        let reply = respond("show me the portfolio", &knowledge);
        // "portfolio" matches no topic rule but still flags the carousel.
        assert!(reply.message.starts_with("Thanks for your message!"));
        assert!(reply.portfolio);
    }

    #[test]
    fn test_resume_topic_renders_download_link() {
        let knowledge = make_knowledge("Ada Lovelace");
        let reply = respond("send me your resume please", &knowledge);
        assert!(reply.message.contains("[Resume PDF](/assets/my-resume.pdf)"));
        assert!(!reply.portfolio);
    }

    #[test]
    fn test_repeat_input_renders_identically() {
        let knowledge = make_knowledge("Ada Lovelace");
        let first = respond("what tools do you use", &knowledge);
        let second = respond("what tools do you use", &knowledge);
        assert_eq!(first.message, second.message);
        assert_eq!(first.portfolio, second.portfolio);
    }
}
