//! Profile: the static knowledge object the chat answers from.
//!
//! Loaded once at startup from `portfolio.json` and never mutated. Any
//! free-text field may still hold a bracketed placeholder from the template
//! the data file was authored from; `is_placeholder` is the runtime signal
//! to skip that field or fall back to sample content.

use serde::{Deserialize, Serialize};

/// A literal `[` marks unfilled template content anywhere in the data.
pub const PLACEHOLDER_MARKER: char = '[';

/// True if the field still carries template text and must not be shown.
pub fn is_placeholder(text: &str) -> bool {
    text.contains(PLACEHOLDER_MARKER)
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub personal: Personal,
    pub experience: Experience,
    pub projects: Projects,
    pub skills: Skills,
    pub education: Education,
    pub career_story: CareerStory,
    pub working_style: WorkingStyle,
    pub personal_interests: PersonalInterests,
}

impl Profile {
    /// Sample-mode predicate: the whole profile is treated as demo data
    /// until the owner has replaced the template name.
    pub fn has_real_data(&self) -> bool {
        !is_placeholder(&self.personal.name) && !self.personal.name.contains("Your")
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Personal {
    pub name: String,
    pub title: String,
    pub location: String,
    pub email: String,
    pub linkedin: String,
    pub github: String,
    pub portfolio: String,
    pub elevator_pitch: String,
    pub values: Vec<String>,
    pub passions: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    pub current_role: Role,
    pub previous_roles: Vec<Role>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Role {
    pub title: String,
    pub company: String,
    pub duration: String,
    pub location: String,
    pub description: String,
    pub key_achievements: Vec<String>,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Projects {
    pub featured: Vec<Project>,
    pub side_projects: Vec<SideProject>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub name: String,
    #[serde(rename = "type")]
    pub project_type: String,
    pub company: String,
    pub duration: String,
    pub team_size: String,
    pub overview: String,
    pub challenge: String,
    pub solution: String,
    pub your_role: String,
    pub technologies: Vec<String>,
    pub results: ProjectResults,
    pub links: ProjectLinks,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectResults {
    pub metrics: Vec<String>,
    pub impact: String,
    pub learnings: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectLinks {
    pub live_site: Option<String>,
    pub case_study: Option<String>,
    pub github: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SideProject {
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub motivation: String,
    pub outcome: String,
    pub link: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Skills {
    pub technical: TechnicalSkills,
    pub domain_expertise: Vec<ExpertiseArea>,
    pub soft_skills: Vec<SoftSkill>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TechnicalSkills {
    pub programming_languages: Vec<Language>,
    pub frameworks_tools: Vec<ToolCategory>,
    pub design_tools: Vec<DesignTool>,
    pub methodologies: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Language {
    pub name: String,
    pub proficiency: String,
    pub years_experience: String,
    pub context: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolCategory {
    pub category: String,
    pub items: Vec<ToolItem>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolItem {
    pub name: String,
    pub proficiency: String,
    pub context: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignTool {
    pub name: String,
    pub proficiency: String,
    pub years_experience: String,
    pub specialization: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpertiseArea {
    pub area: String,
    pub description: String,
    pub techniques: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SoftSkill {
    pub skill: String,
    pub evidence: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub formal: Vec<Degree>,
    pub certifications: Vec<Certification>,
    pub continuous_learning: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Degree {
    pub degree: String,
    pub school: String,
    pub graduation_year: String,
    pub location: String,
    pub relevant_coursework: Vec<String>,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub date: String,
    pub status: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CareerStory {
    pub origin: String,
    pub key_transitions: Vec<Transition>,
    pub current_focus: String,
    pub future_goals: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Transition {
    pub from: String,
    pub to: String,
    pub reason: String,
    pub outcome: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkingStyle {
    pub collaboration_approach: String,
    pub problem_solving_process: String,
    pub communication_style: String,
    pub ideal_work_environment: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInterests {
    pub professional_interests: Vec<String>,
    pub hobbies: Vec<String>,
    pub fun_facts: Vec<String>,
}
