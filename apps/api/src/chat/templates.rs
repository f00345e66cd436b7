//! Response templates over profile data.
//!
//! Formatting mirrors the browser widget byte for byte: bounded slices (first
//! 3 projects, first 2 metrics, and so on), hard character truncation with a
//! trailing ellipsis and no word-boundary awareness, and placeholder fields
//! silently skipped. Every function returns a non-empty string; when the
//! backing subsection is empty or still template boilerplate, the topic's
//! canned sample is returned instead.

use crate::knowledge::contact::ContactInfo;
use crate::knowledge::profile::{is_placeholder, Profile};

use super::classifier::Topic;

pub fn projects_response(profile: &Profile) -> String {
    let featured = &profile.projects.featured;
    if featured.is_empty() {
        return PROJECT_SAMPLE.to_string();
    }

    let mut response = String::from("Here are some of my featured projects:\n\n");
    for project in featured.iter().take(3) {
        if project.name.is_empty() || is_placeholder(&project.name) {
            continue;
        }
        response.push_str(&format!("**{}**\n", project.name));
        let summary = if !project.overview.is_empty() {
            project.overview.as_str()
        } else if !project.challenge.is_empty() {
            project.challenge.as_str()
        } else {
            "Innovative project showcasing my skills"
        };
        response.push_str(summary);
        response.push('\n');
        for metric in project.results.metrics.iter().take(2) {
            if !is_placeholder(metric) {
                response.push_str(&format!("• {metric}\n"));
            }
        }
        response.push('\n');
    }
    response.push_str("Would you like to learn more about any specific project?");
    response
}

pub fn experience_response(profile: &Profile) -> String {
    let current = &profile.experience.current_role;
    if current.title.is_empty() || is_placeholder(&current.title) {
        return EXPERIENCE_SAMPLE.to_string();
    }

    let field = if profile.personal.title.is_empty() {
        "my field"
    } else {
        profile.personal.title.as_str()
    };
    let mut response = format!("I'm a {} with expertise in {}.\n\n", current.title, field);

    response.push_str("**Current Role:**\n");
    response.push_str(&format!("• {} at {}\n", current.title, current.company));
    response.push_str(&format!("• {}\n", current.duration));
    if !current.description.is_empty() && !is_placeholder(&current.description) {
        response.push_str(&format!(
            "• {}...\n",
            truncate_chars(&current.description, 200)
        ));
    }

    if !current.key_achievements.is_empty() {
        response.push_str("\n**Key Achievements:**\n");
        for achievement in current.key_achievements.iter().take(3) {
            if !is_placeholder(achievement) {
                response.push_str(&format!("• {achievement}\n"));
            }
        }
    }

    response
}

pub fn skills_response(profile: &Profile) -> String {
    const HEADING: &str = "Here are my core skills and expertise:\n\n";
    let mut response = String::from(HEADING);

    let technical = &profile.skills.technical;
    if !technical.programming_languages.is_empty() {
        response.push_str("**Technical Skills:**\n");
        for lang in technical.programming_languages.iter().take(3) {
            if !is_placeholder(&lang.name) {
                response.push_str(&format!(
                    "• {} ({}) - {}\n",
                    lang.name, lang.proficiency, lang.years_experience
                ));
            }
        }
    }

    if !profile.skills.domain_expertise.is_empty() {
        response.push_str("\n**Domain Expertise:**\n");
        for area in profile.skills.domain_expertise.iter().take(3) {
            if !is_placeholder(&area.area) {
                response.push_str(&format!(
                    "• {}: {}...\n",
                    area.area,
                    truncate_chars(&area.description, 100)
                ));
            }
        }
    }

    // Nothing made it past the guards; serve the sample instead of bare headings.
    if response == HEADING {
        return SKILLS_SAMPLE.to_string();
    }
    response
}

pub fn about_response(profile: &Profile) -> String {
    let personal = &profile.personal;
    if personal.elevator_pitch.is_empty() || is_placeholder(&personal.elevator_pitch) {
        return ABOUT_SAMPLE.to_string();
    }

    let mut response = format!("{}\n\n", personal.elevator_pitch);

    if !personal.values.is_empty() {
        response.push_str("**My Values:**\n");
        for value in &personal.values {
            if !is_placeholder(value) {
                response.push_str(&format!("• {value}\n"));
            }
        }
    }

    if !personal.passions.is_empty() {
        response.push_str("\n**What I'm Passionate About:**\n");
        for passion in &personal.passions {
            if !is_placeholder(passion) {
                response.push_str(&format!("• {passion}\n"));
            }
        }
    }

    response
}

/// Contact lines come from the profile's personal fields; any field still
/// holding a placeholder is left off the card.
pub fn contact_response(profile: &Profile) -> String {
    let personal = &profile.personal;
    let mut response =
        String::from("I'm always open to new opportunities and interesting conversations!\n\n");

    if !personal.email.is_empty() && !is_placeholder(&personal.email) {
        response.push_str(&format!("📧 Email: {}\n", personal.email));
    }
    if !personal.linkedin.is_empty() && !is_placeholder(&personal.linkedin) {
        response.push_str(&format!("💼 LinkedIn: {}\n", personal.linkedin));
    }
    if !personal.portfolio.is_empty() && !is_placeholder(&personal.portfolio) {
        response.push_str(&format!("🌐 Portfolio: {}\n", personal.portfolio));
    }

    response.push_str(
        "\nFeel free to reach out to discuss potential collaborations, projects, or just to chat!",
    );
    response
}

pub fn resume_response(contact: &ContactInfo) -> String {
    format!(
        "I'd be happy to share my resume with you!\n\n\
         **Download Link:** [Resume PDF]({})\n\n\
         My resume includes:\n\
         • Detailed project descriptions and outcomes\n\
         • Complete work history and achievements  \n\
         • Technical skills and certifications\n\
         • Education and professional development\n\n\
         The resume provides a comprehensive overview of my experience and expertise.",
        contact.resume_path()
    )
}

/// Fallback for anything the classifier could not place. Uses the owner's
/// first name when the profile has one.
pub fn welcome_response(profile: &Profile) -> String {
    let name = &profile.personal.name;
    let display_name = if !name.is_empty() && !is_placeholder(name) {
        name.split_whitespace().next().unwrap_or("my")
    } else {
        "my"
    };

    format!(
        "Thanks for your message! I'm here to help you learn more about {display_name} work and experience. You can ask me about:\n\n\
         • **Projects** - Featured work and case studies\n\
         • **Experience** - Background and career journey  \n\
         • **Skills** - Technical abilities and expertise\n\
         • **About** - Personal interests and philosophy\n\
         • **Contact** - How to get in touch\n\n\
         What would you like to explore?"
    )
}

/// Canned sample for a topic when the profile is still template data. Topics
/// without a sample of their own degrade to the about sample.
pub fn sample_response(topic: Topic) -> &'static str {
    match topic {
        Topic::Projects => PROJECT_SAMPLE,
        Topic::Experience => EXPERIENCE_SAMPLE,
        Topic::Skills => SKILLS_SAMPLE,
        Topic::About | Topic::Contact | Topic::Resume | Topic::Unmatched => ABOUT_SAMPLE,
    }
}

/// Hard cut at `limit` characters. Callers append the ellipsis.
fn truncate_chars(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}

pub const PROJECT_SAMPLE: &str = r#"Here are some sample projects to demonstrate the chat functionality:

**E-commerce Platform Redesign**
• Increased conversion rate by 35%
• Improved user satisfaction scores by 40%
• Led design for 50K+ daily active users

**Mobile App Development**
• Built from concept to launch in 4 months
• Achieved 4.8/5 star rating in app stores
• Featured in "New and Noteworthy" section

**Design System Implementation**
• Created comprehensive component library
• Reduced design-to-dev handoff time by 60%
• Adopted across 15+ product teams

Would you like to learn more about any specific project?"#;

pub const EXPERIENCE_SAMPLE: &str = r#"Here's an overview of my professional background:

**Current Role:**
• Senior Product Designer at TechCorp (2021-Present)
• Leading design for core product features
• Managing design system and component library

**Previous Experience:**
• Product Designer at StartupCo (2019-2021)
• UX Designer at AgencyCorp (2017-2019)
• Frontend Developer background

**Key Strengths:**
• User-centered design approach
• Strong collaboration with engineering teams
• Experience with design systems at scale"#;

pub const SKILLS_SAMPLE: &str = r#"Here are my core skills and expertise:

**Design Tools:**
• Figma (expert level)
• Adobe Creative Suite
• Sketch, Miro, Notion

**Development:**
• React, TypeScript, JavaScript
• CSS/SCSS, Tailwind CSS
• HTML5, responsive design

**Research & Testing:**
• User interviews and usability testing
• A/B testing and analytics
• Prototyping and wireframing

**Methodologies:**
• Design Thinking
• Agile/Scrum workflows
• Accessibility (WCAG compliance)"#;

pub const ABOUT_SAMPLE: &str = r#"I'm passionate about creating digital experiences that truly serve users' needs. My journey started in computer science, but I discovered my love for the intersection of technology and human psychology.

**My Philosophy:**
"Great design is invisible - it solves problems so elegantly that users don't have to think about it."

**Personal Interests:**
• Accessibility and inclusive design
• Mentoring aspiring designers
• Contributing to open-source projects
• Hiking and outdoor activities

I believe in designing with empathy, testing with real users, and building with accessibility in mind from day one."#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::profile::{Language, Project};

    fn make_filled_profile() -> Profile {
        let mut profile = Profile::default();
        profile.personal.name = "Ada Lovelace".to_string();
        profile.personal.title = "Product Designer".to_string();
        profile.personal.email = "ada@example.com".to_string();
        profile.personal.linkedin = "linkedin.com/in/ada".to_string();
        profile.personal.elevator_pitch = "I'm a designer who codes.".to_string();
        profile.personal.values = vec!["Clarity".to_string(), "[Core value 2]".to_string()];
        profile.personal.passions = vec!["Accessibility".to_string()];

        profile.experience.current_role.title = "Senior Designer".to_string();
        profile.experience.current_role.company = "Acme".to_string();
        profile.experience.current_role.duration = "2021 - Present".to_string();
        profile.experience.current_role.description = "Leading the design system.".to_string();
        profile.experience.current_role.key_achievements = vec![
            "Shipped the new onboarding".to_string(),
            "[Achievement 2]".to_string(),
        ];

        profile.projects.featured = vec![Project {
            name: "Atlas".to_string(),
            overview: "A mapping platform.".to_string(),
            ..Project::default()
        }];
        profile.projects.featured[0].results.metrics = vec![
            "40% faster onboarding".to_string(),
            "[Metric 2]".to_string(),
            "95% satisfaction".to_string(),
        ];

        profile.skills.technical.programming_languages = vec![Language {
            name: "TypeScript".to_string(),
            proficiency: "Expert".to_string(),
            years_experience: "6 years".to_string(),
            context: "Frontend work".to_string(),
        }];

        profile
    }

    #[test]
    fn test_projects_lists_name_overview_and_metrics() {
        let response = projects_response(&make_filled_profile());
        assert!(response.starts_with("Here are some of my featured projects:\n\n"));
        assert!(response.contains("**Atlas**\nA mapping platform.\n"));
        assert!(response.contains("• 40% faster onboarding\n"));
        assert!(response.ends_with("Would you like to learn more about any specific project?"));
    }

    #[test]
    fn test_projects_takes_two_metrics_and_skips_placeholders() {
        let response = projects_response(&make_filled_profile());
        // Slot two holds a placeholder, so only the first metric survives the
        // two-metric window.
        assert!(!response.contains("[Metric 2]"));
        assert!(!response.contains("95% satisfaction"));
    }

    #[test]
    fn test_projects_empty_list_serves_sample() {
        let mut profile = make_filled_profile();
        profile.projects.featured.clear();
        assert_eq!(projects_response(&profile), PROJECT_SAMPLE);
    }

    #[test]
    fn test_projects_summary_falls_back_to_challenge() {
        let mut profile = make_filled_profile();
        profile.projects.featured[0].overview = String::new();
        profile.projects.featured[0].challenge = "Nobody could find anything.".to_string();
        let response = projects_response(&profile);
        assert!(response.contains("**Atlas**\nNobody could find anything.\n"));
    }

    #[test]
    fn test_experience_renders_role_block() {
        let response = experience_response(&make_filled_profile());
        assert!(response.starts_with("I'm a Senior Designer with expertise in Product Designer.\n\n"));
        assert!(response.contains("**Current Role:**\n• Senior Designer at Acme\n• 2021 - Present\n"));
        assert!(response.contains("• Leading the design system....\n"));
        assert!(response.contains("\n**Key Achievements:**\n• Shipped the new onboarding\n"));
        assert!(!response.contains("[Achievement 2]"));
    }

    #[test]
    fn test_experience_placeholder_title_serves_sample() {
        let mut profile = make_filled_profile();
        profile.experience.current_role.title = "[Your Current Job Title]".to_string();
        assert_eq!(experience_response(&profile), EXPERIENCE_SAMPLE);
    }

    #[test]
    fn test_experience_truncates_long_description() {
        let mut profile = make_filled_profile();
        profile.experience.current_role.description = "x".repeat(250);
        let response = experience_response(&profile);
        let expected = format!("• {}...\n", "x".repeat(200));
        assert!(response.contains(&expected));
        assert!(!response.contains(&"x".repeat(201)));
    }

    #[test]
    fn test_skills_renders_language_line() {
        let response = skills_response(&make_filled_profile());
        assert!(response.contains("**Technical Skills:**\n• TypeScript (Expert) - 6 years\n"));
    }

    #[test]
    fn test_skills_with_no_content_serves_sample() {
        let mut profile = make_filled_profile();
        profile.skills.technical.programming_languages.clear();
        profile.skills.domain_expertise.clear();
        assert_eq!(skills_response(&profile), SKILLS_SAMPLE);
    }

    #[test]
    fn test_about_skips_placeholder_values() {
        let response = about_response(&make_filled_profile());
        assert!(response.starts_with("I'm a designer who codes.\n\n"));
        assert!(response.contains("**My Values:**\n• Clarity\n"));
        assert!(!response.contains("[Core value 2]"));
        assert!(response.contains("**What I'm Passionate About:**\n• Accessibility\n"));
    }

    #[test]
    fn test_about_placeholder_pitch_serves_sample() {
        let mut profile = make_filled_profile();
        profile.personal.elevator_pitch = "[Write a compelling summary]".to_string();
        assert_eq!(about_response(&profile), ABOUT_SAMPLE);
    }

    #[test]
    fn test_contact_lists_only_filled_fields() {
        let response = contact_response(&make_filled_profile());
        assert!(response.contains("📧 Email: ada@example.com\n"));
        assert!(response.contains("💼 LinkedIn: linkedin.com/in/ada\n"));
        // Portfolio field was left empty.
        assert!(!response.contains("🌐"));
        assert!(response.ends_with(
            "Feel free to reach out to discuss potential collaborations, projects, or just to chat!"
        ));
    }

    #[test]
    fn test_resume_links_configured_path() {
        let contact = ContactInfo {
            resume: "/files/cv.pdf".to_string(),
            ..ContactInfo::default()
        };
        let response = resume_response(&contact);
        assert!(response.contains("**Download Link:** [Resume PDF](/files/cv.pdf)"));
    }

    #[test]
    fn test_resume_defaults_path_when_unset() {
        let response = resume_response(&ContactInfo::default());
        assert!(response.contains("[Resume PDF](/assets/my-resume.pdf)"));
    }

    #[test]
    fn test_welcome_uses_first_name() {
        let response = welcome_response(&make_filled_profile());
        assert!(response.contains("learn more about Ada work and experience"));
    }

    #[test]
    fn test_welcome_falls_back_to_my() {
        let response = welcome_response(&Profile::default());
        assert!(response.contains("learn more about my work and experience"));
        assert!(response.ends_with("What would you like to explore?"));
    }

    #[test]
    fn test_samples_cover_every_topic() {
        assert_eq!(sample_response(Topic::Projects), PROJECT_SAMPLE);
        assert_eq!(sample_response(Topic::Experience), EXPERIENCE_SAMPLE);
        assert_eq!(sample_response(Topic::Skills), SKILLS_SAMPLE);
        assert_eq!(sample_response(Topic::About), ABOUT_SAMPLE);
        // No dedicated samples; these degrade to the about sample.
        assert_eq!(sample_response(Topic::Contact), ABOUT_SAMPLE);
        assert_eq!(sample_response(Topic::Resume), ABOUT_SAMPLE);
        assert_eq!(sample_response(Topic::Unmatched), ABOUT_SAMPLE);
    }

    #[test]
    fn test_truncate_counts_characters_not_bytes() {
        let text = "héllo wörld";
        assert_eq!(truncate_chars(text, 5), "héllo");
    }
}
