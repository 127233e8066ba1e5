//! Input validation for staffing problems.
//!
//! Checks structural integrity of contributors and projects before a
//! run. Detects:
//! - Duplicate names
//! - Projects without roles
//! - Negative skill or role levels
//! - Non-positive project durations
//!
//! Validation is advisory. The engine accepts any input: role-less
//! projects complete trivially and duplicate names are tracked by
//! position.

use crate::models::{Contributor, Project};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two contributors or two projects share a name.
    DuplicateName,
    /// A project has no roles.
    EmptyProject,
    /// A skill or role level is below zero.
    NegativeLevel,
    /// A project lasts zero days or less.
    InvalidDuration,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input data for a staffing problem.
///
/// Checks:
/// 1. No duplicate contributor names
/// 2. No duplicate project names
/// 3. No negative contributor skill levels
/// 4. All projects have at least one role
/// 5. No negative role levels
/// 6. All project durations are positive
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_instance(contributors: &[Contributor], projects: &[Project]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut contributor_names = HashSet::new();
    for c in contributors {
        if !contributor_names.insert(c.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate contributor name: {}", c.name),
            ));
        }
        for skill in &c.skills {
            if skill.level < 0 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::NegativeLevel,
                    format!(
                        "Contributor '{}' has negative level {} in '{}'",
                        c.name, skill.level, skill.name
                    ),
                ));
            }
        }
    }

    let mut project_names = HashSet::new();
    for p in projects {
        if !project_names.insert(p.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate project name: {}", p.name),
            ));
        }

        if !p.has_roles() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyProject,
                format!("Project '{}' has no roles", p.name),
            ));
        }

        if p.days <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidDuration,
                format!("Project '{}' has non-positive duration {}", p.name, p.days),
            ));
        }

        for role in &p.roles {
            if role.level < 0 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::NegativeLevel,
                    format!(
                        "Project '{}' requires negative level {} in '{}'",
                        p.name, role.level, role.skill
                    ),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_contributors() -> Vec<Contributor> {
        vec![
            Contributor::new("Anna").with_skill("c++", 2),
            Contributor::new("Bob").with_skill("html", 5).with_skill("css", 5),
            Contributor::new("Maria").with_skill("python", 3),
        ]
    }

    fn sample_projects() -> Vec<Project> {
        vec![
            Project::new("Logging")
                .with_days(5)
                .with_score(10)
                .with_best_before(5)
                .with_role("c++", 3),
            Project::new("WebServer")
                .with_days(7)
                .with_score(10)
                .with_best_before(7)
                .with_role("html", 3)
                .with_role("c++", 2),
        ]
    }

    fn kinds(result: ValidationResult) -> Vec<ValidationErrorKind> {
        result.unwrap_err().into_iter().map(|e| e.kind).collect()
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_instance(&sample_contributors(), &sample_projects()).is_ok());
    }

    #[test]
    fn test_duplicate_contributor_name() {
        let mut contributors = sample_contributors();
        contributors.push(Contributor::new("Anna"));
        assert_eq!(
            kinds(validate_instance(&contributors, &sample_projects())),
            vec![ValidationErrorKind::DuplicateName]
        );
    }

    #[test]
    fn test_duplicate_project_name() {
        let mut projects = sample_projects();
        projects.push(Project::new("Logging").with_days(1).with_role("c++", 1));
        let errs = validate_instance(&sample_contributors(), &projects).unwrap_err();
        assert_eq!(errs.len(), 1);
        assert!(errs[0].message.contains("Logging"));
    }

    #[test]
    fn test_empty_project() {
        let projects = vec![Project::new("Idle").with_days(1)];
        assert_eq!(
            kinds(validate_instance(&[], &projects)),
            vec![ValidationErrorKind::EmptyProject]
        );
    }

    #[test]
    fn test_negative_levels() {
        let contributors = vec![Contributor::new("Z").with_skill("go", -1)];
        let projects = vec![Project::new("P").with_days(1).with_role("go", -2)];
        assert_eq!(
            kinds(validate_instance(&contributors, &projects)),
            vec![
                ValidationErrorKind::NegativeLevel,
                ValidationErrorKind::NegativeLevel
            ]
        );
    }

    #[test]
    fn test_invalid_duration() {
        let projects = vec![Project::new("P").with_role("go", 1)];
        assert_eq!(
            kinds(validate_instance(&[], &projects)),
            vec![ValidationErrorKind::InvalidDuration]
        );
    }

    #[test]
    fn test_multiple_errors_collected() {
        let contributors = vec![Contributor::new("A"), Contributor::new("A")];
        let projects = vec![Project::new("P"), Project::new("P")];
        let errs = validate_instance(&contributors, &projects).unwrap_err();
        // dup contributor, 2x (empty + duration), dup project
        assert_eq!(errs.len(), 6);
        assert_eq!(errs[0].to_string(), "Duplicate contributor name: A");
    }
}
