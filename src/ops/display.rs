//! Text rendering for operation results.
//!
//! Pure formatting helpers shared by every operation; all state comes in as
//! arguments so these stay trivially testable.

use crate::catalog::record::TemplateRecord;
use crate::git::{CloneReport, DirectoryStatus};
use std::path::Path;

/// One numbered entry in a listing.
pub fn list_entry(index: usize, record: &TemplateRecord) -> String {
    let mut lines = vec![
        format!("{}. **{}**", index, record.title),
        format!("   ID: {}", record.id),
        format!("   Description: {}", record.description),
        format!("   Domain: {}", record.domain),
        format!("   Features: {}", record.features.join(", ")),
    ];
    if let Some(git) = &record.git {
        lines.push(format!("   Git: {}", git.url));
    }
    lines.join("\n")
}

/// One numbered entry in search results, with its relevance score.
pub fn search_entry(index: usize, score: u32, record: &TemplateRecord) -> String {
    let mut lines = vec![
        format!("{}. **{}** (relevance: {})", index, record.title, score),
        format!("   ID: {}", record.id),
        format!("   Description: {}", record.description),
        format!("   Domain: {}", record.domain),
        format!("   Features: {}", record.features.join(", ")),
    ];
    if let Some(git) = &record.git {
        lines.push(format!("   Git: {}", git.url));
    }
    lines.join("\n")
}

/// Full detail view for one record.
pub fn record_details(record: &TemplateRecord) -> String {
    let mut lines = vec![
        format!("**{}**", record.title),
        format!("ID: {}", record.id),
        format!("Description: {}", record.description),
        format!("Domain: {}", record.domain),
        format!("Creator: {}", record.creator_id),
        format!("Created: {}", record.created_at.to_rfc3339()),
        format!(
            "Published: {}",
            if record.is_published { "Yes" } else { "No" }
        ),
    ];

    if !record.features.is_empty() {
        lines.push(format!("Features: {}", record.features.join(", ")));
    }
    if let Some(git) = &record.git {
        lines.push(format!("Git Repository: {}", git.url));
        if let Some(branch) = &git.branch {
            lines.push(format!("Branch: {}", branch));
        }
    }
    if let Some(deployment) = &record.deployment {
        lines.push(format!("Live Demo: {}", deployment.url));
    }

    if !record.tools.is_empty() {
        let names: Vec<&str> = record.tools.iter().map(|t| t.name.as_str()).collect();
        lines.push(format!("Tools: {}", names.join(", ")));
    }
    if !record.requirements.is_empty() {
        lines.push("Requirements:".to_string());
        for req in &record.requirements {
            lines.push(format!("  - {}: {}", req.kind, req.description));
        }
    }
    if !record.pills.is_empty() {
        lines.push("Quick Actions:".to_string());
        for pill in &record.pills {
            lines.push(format!("  - {}: {}", pill.label, pill.prompt));
        }
    }

    lines.join("\n")
}

/// Success report for a completed clone.
pub fn clone_success(
    record: &TemplateRecord,
    report: &CloneReport,
    project_name: Option<&str>,
) -> String {
    let name = project_name.unwrap_or(&record.title);
    let mut lines = vec![
        format!("Successfully cloned template '{}'!", record.title),
        String::new(),
        "**Template Details:**".to_string(),
        format!("- Name: {}", name),
        format!("- Description: {}", record.description),
        format!("- Domain: {}", record.domain),
        String::new(),
        "**Clone Details:**".to_string(),
        format!("- Local Path: {}", report.path.display()),
        format!("- Git Repository: {}", report.url),
        format!("- Branch: {}", report.branch),
        format!("- Latest Commit: {}", report.short_commit_id()),
        format!("- Commit Message: {}", report.commit_message),
        format!("- Commit Author: {}", report.commit_author),
        String::new(),
        "**Next Steps:**".to_string(),
        format!("1. Navigate to the project directory: cd {}", report.path.display()),
        "2. Review the README.md file for setup instructions".to_string(),
        "3. Install any required dependencies".to_string(),
        "4. Start developing your project based on this template!".to_string(),
    ];

    if !record.requirements.is_empty() {
        lines.push(String::new());
        lines.push("**Template Requirements:**".to_string());
        for req in &record.requirements {
            lines.push(format!("- {}: {}", req.kind, req.description));
        }
    }
    if !record.pills.is_empty() {
        lines.push(String::new());
        lines.push("**Quick Actions Available:**".to_string());
        for pill in &record.pills {
            lines.push(format!("- {}: {}", pill.label, pill.prompt));
        }
    }

    lines.join("\n")
}

/// Failure report for a clone, listing the likely causes.
pub fn clone_failure(message: &str) -> String {
    format!(
        "Failed to clone template: {}\n\nPlease check that:\n\
         - The git repository is accessible\n\
         - You have proper permissions\n\
         - The target directory path is valid",
        message
    )
}

/// Directory inspection report.
pub fn directory_report(path: &Path, status: &DirectoryStatus) -> String {
    let yes_no = |b: bool| if b { "Yes" } else { "No" };

    let mut lines = vec![
        format!("**Directory Status: {}**", path.display()),
        String::new(),
        format!("Exists: {}", yes_no(status.exists)),
    ];

    if status.exists {
        lines.push(format!("Is Directory: {}", yes_no(status.is_directory)));
        lines.push(format!("Is Empty: {}", yes_no(status.is_empty)));
        lines.push(format!("File Count: {}", status.file_count));
        lines.push(format!("Size: {} bytes", status.size_bytes));
        lines.push(format!("Is Git Repository: {}", yes_no(status.is_git_repo)));
        if !status.is_empty {
            lines.push(String::new());
            lines.push(
                "Warning: directory is not empty. Cloning to this location may fail.".to_string(),
            );
        }
    } else {
        lines.push(String::new());
        lines.push("Directory does not exist. Safe to clone here.".to_string());
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::record::{sample_record, GitRef, Pill, Requirement};
    use std::path::PathBuf;

    fn record_with_git() -> TemplateRecord {
        let mut record = sample_record("t1", "Demo Template", "Web Development");
        record.git = Some(GitRef {
            url: "https://example.com/demo.git".to_string(),
            branch: Some("main".to_string()),
            remote: None,
        });
        record.requirements = vec![Requirement {
            kind: "Node.js".to_string(),
            description: "Version 18 or higher".to_string(),
        }];
        record.pills = vec![Pill {
            label: "Quick Start".to_string(),
            prompt: "Get going".to_string(),
            icon: None,
        }];
        record
    }

    fn report() -> CloneReport {
        CloneReport {
            path: PathBuf::from("/tmp/demo"),
            url: "https://example.com/demo.git".to_string(),
            branch: "main".to_string(),
            commit_id: "0123456789abcdef0123456789abcdef01234567".to_string(),
            commit_message: "Initial commit".to_string(),
            commit_author: "Author".to_string(),
            commit_time: Default::default(),
        }
    }

    #[test]
    fn list_entry_contains_core_fields() {
        let text = list_entry(1, &record_with_git());
        assert!(text.contains("1. **Demo Template**"));
        assert!(text.contains("ID: t1"));
        assert!(text.contains("Git: https://example.com/demo.git"));
    }

    #[test]
    fn search_entry_shows_relevance() {
        let text = search_entry(2, 15, &record_with_git());
        assert!(text.contains("2. **Demo Template** (relevance: 15)"));
    }

    #[test]
    fn details_include_requirements_and_pills() {
        let text = record_details(&record_with_git());
        assert!(text.contains("Git Repository: https://example.com/demo.git"));
        assert!(text.contains("Branch: main"));
        assert!(text.contains("- Node.js: Version 18 or higher"));
        assert!(text.contains("- Quick Start: Get going"));
    }

    #[test]
    fn details_omit_empty_sections() {
        let record = sample_record("bare", "Bare", "Other");
        let text = record_details(&record);
        assert!(!text.contains("Requirements:"));
        assert!(!text.contains("Quick Actions:"));
        assert!(!text.contains("Git Repository:"));
    }

    #[test]
    fn clone_success_prefers_project_name() {
        let text = clone_success(&record_with_git(), &report(), Some("my-app"));
        assert!(text.contains("- Name: my-app"));
        assert!(text.contains("- Latest Commit: 01234567"));
        assert!(text.contains("**Template Requirements:**"));
        assert!(text.contains("**Quick Actions Available:**"));
    }

    #[test]
    fn clone_success_defaults_to_title() {
        let text = clone_success(&record_with_git(), &report(), None);
        assert!(text.contains("- Name: Demo Template"));
    }

    #[test]
    fn clone_failure_lists_likely_causes() {
        let text = clone_failure("connection refused");
        assert!(text.contains("connection refused"));
        assert!(text.contains("accessible"));
        assert!(text.contains("permissions"));
        assert!(text.contains("path is valid"));
    }

    #[test]
    fn directory_report_for_missing_path() {
        let status = crate::git::DirectoryStatus {
            exists: false,
            is_directory: false,
            is_empty: false,
            is_git_repo: false,
            file_count: 0,
            size_bytes: 0,
        };
        let text = directory_report(Path::new("/tmp/new"), &status);
        assert!(text.contains("Exists: No"));
        assert!(text.contains("Safe to clone here"));
    }

    #[test]
    fn directory_report_warns_on_nonempty() {
        let status = crate::git::DirectoryStatus {
            exists: true,
            is_directory: true,
            is_empty: false,
            is_git_repo: true,
            file_count: 3,
            size_bytes: 42,
        };
        let text = directory_report(Path::new("/tmp/busy"), &status);
        assert!(text.contains("File Count: 3"));
        assert!(text.contains("Size: 42 bytes"));
        assert!(text.contains("Is Git Repository: Yes"));
        assert!(text.contains("may fail"));
    }
}
