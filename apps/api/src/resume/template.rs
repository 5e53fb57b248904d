//! Local resume template — deterministic Markdown built from the form fields.
//!
//! Used whenever no generation endpoint is configured. Empty strings count as
//! missing, so a blank form still renders a complete placeholder resume.

use serde::{Deserialize, Serialize};

/// Template styles offered by the builder form.
pub const TEMPLATE_CHOICES: [&str; 3] = ["modern", "minimal", "classic"];
pub const DEFAULT_TEMPLATE: &str = "modern";

/// Resume builder form fields, camelCase on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeGenInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_role: Option<String>,
    /// Free-text bullet points.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projects: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certifications: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|v| !v.is_empty())
}

fn or_default<'a>(field: &'a Option<String>, fallback: &'a str) -> &'a str {
    present(field).unwrap_or(fallback)
}

fn optional_section(heading: &str, field: &Option<String>) -> String {
    present(field)
        .map(|body| format!("## {heading}\n{body}\n\n"))
        .unwrap_or_default()
}

/// Renders the placeholder-filled Markdown resume for `input`.
pub fn render_resume(input: &ResumeGenInput) -> String {
    let contact_parts: Vec<&str> = [
        &input.contact_email,
        &input.phone,
        &input.location,
        &input.website,
        &input.linkedin,
        &input.github,
    ]
    .into_iter()
    .filter_map(present)
    .collect();
    let contact = if contact_parts.is_empty() {
        "email@example.com | City, Country".to_string()
    } else {
        contact_parts.join(" | ")
    };

    format!(
        "# {name}\n{title}\n\n## Contact\n{contact}\n\n## Summary\n{summary}\n\n## Skills\n{skills}\n\n## Experience\n{experience}\n\n{education}{projects}{certifications}---\nTemplate: {template}",
        name = or_default(&input.full_name, "Your Name"),
        title = or_default(&input.title, "Software Engineer"),
        summary = or_default(
            &input.summary,
            "Passionate professional with a focus on impact."
        ),
        skills = or_default(&input.skills, "Java, React, SQL"),
        experience = or_default(&input.experience, "- Describe your accomplishments here."),
        education = optional_section("Education", &input.education),
        projects = optional_section("Projects", &input.projects),
        certifications = optional_section("Certifications", &input.certifications),
        template = or_default(&input.template, DEFAULT_TEMPLATE),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some(v: &str) -> Option<String> {
        Some(v.to_string())
    }

    #[test]
    fn test_blank_form_renders_placeholders() {
        let expected = "# Your Name\nSoftware Engineer\n\n## Contact\nemail@example.com | City, Country\n\n## Summary\nPassionate professional with a focus on impact.\n\n## Skills\nJava, React, SQL\n\n## Experience\n- Describe your accomplishments here.\n\n---\nTemplate: modern";
        assert_eq!(render_resume(&ResumeGenInput::default()), expected);
    }

    #[test]
    fn test_empty_strings_count_as_missing() {
        let input = ResumeGenInput {
            full_name: some(""),
            contact_email: some(""),
            education: some(""),
            template: some(""),
            ..Default::default()
        };
        assert_eq!(render_resume(&input), render_resume(&ResumeGenInput::default()));
    }

    #[test]
    fn test_contact_joins_present_fields_in_order() {
        let input = ResumeGenInput {
            contact_email: some("jane@acme.com"),
            location: some("Pune"),
            github: some("https://github.com/jane"),
            ..Default::default()
        };
        let out = render_resume(&input);
        assert!(out.contains("## Contact\njane@acme.com | Pune | https://github.com/jane\n\n"));
    }

    #[test]
    fn test_optional_sections_render_when_present() {
        let input = ResumeGenInput {
            full_name: some("Jane Doe"),
            education: some("B.Tech, IIT Delhi"),
            certifications: some("- AWS SAA"),
            template: some("classic"),
            ..Default::default()
        };
        let out = render_resume(&input);
        assert!(out.starts_with("# Jane Doe\n"));
        assert!(out.contains(
            "## Experience\n- Describe your accomplishments here.\n\n## Education\nB.Tech, IIT Delhi\n\n## Certifications\n- AWS SAA\n\n---\nTemplate: classic"
        ));
        assert!(!out.contains("## Projects"));
    }

    #[test]
    fn test_target_role_does_not_appear_in_template() {
        let input = ResumeGenInput {
            target_role: some("Staff Engineer"),
            ..Default::default()
        };
        assert!(!render_resume(&input).contains("Staff Engineer"));
    }

    #[test]
    fn test_input_uses_camel_case_on_the_wire() {
        let input: ResumeGenInput =
            serde_json::from_str(r#"{"fullName":"Jane","contactEmail":"j@x.io","targetRole":"SRE"}"#)
                .unwrap();
        assert_eq!(input.full_name.as_deref(), Some("Jane"));
        assert_eq!(input.contact_email.as_deref(), Some("j@x.io"));

        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["targetRole"], "SRE");
        assert!(json.get("phone").is_none());
    }
}
