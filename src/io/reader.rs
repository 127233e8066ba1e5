//! Instance reader.

use std::path::Path;
use std::str::{FromStr, SplitWhitespace};

use tracing::debug;

use crate::models::{Contributor, Project, Role, Skill};
use crate::scheduler::StaffingRequest;

/// Errors raised while reading an instance.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("unexpected end of input while reading {expected}")]
    UnexpectedEof { expected: &'static str },

    #[error("line {line}: missing field `{field}`")]
    MissingField { line: usize, field: &'static str },

    #[error("line {line}: invalid integer for `{field}`: {value:?}")]
    InvalidInteger {
        line: usize,
        field: &'static str,
        value: String,
    },

    #[error("failed to read instance: {0}")]
    Io(#[from] std::io::Error),
}

/// Cursor over non-blank input lines, tracking 1-based line numbers.
struct Records<'a> {
    lines: std::iter::Enumerate<std::str::Lines<'a>>,
}

/// Fields of one record.
struct Record<'a> {
    line: usize,
    fields: SplitWhitespace<'a>,
}

impl<'a> Records<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            lines: input.lines().enumerate(),
        }
    }

    fn next(&mut self, expected: &'static str) -> Result<Record<'a>, ParseError> {
        for (idx, line) in self.lines.by_ref() {
            if !line.trim().is_empty() {
                return Ok(Record {
                    line: idx + 1,
                    fields: line.split_whitespace(),
                });
            }
        }
        Err(ParseError::UnexpectedEof { expected })
    }
}

impl<'a> Record<'a> {
    fn text(&mut self, field: &'static str) -> Result<&'a str, ParseError> {
        self.fields.next().ok_or(ParseError::MissingField {
            line: self.line,
            field,
        })
    }

    fn int<T: FromStr>(&mut self, field: &'static str) -> Result<T, ParseError> {
        let value = self.text(field)?;
        value.parse().map_err(|_| ParseError::InvalidInteger {
            line: self.line,
            field,
            value: value.to_string(),
        })
    }
}

fn parse_skill(records: &mut Records<'_>) -> Result<Skill, ParseError> {
    let mut record = records.next("skill")?;
    let name = record.text("skill")?;
    let level = record.int("level")?;
    Ok(Skill::new(name, level))
}

/// Parses an instance from text.
///
/// Contributors and projects keep their input order. Trailing content
/// after the last project is ignored.
pub fn parse_instance(input: &str) -> Result<StaffingRequest, ParseError> {
    let mut records = Records::new(input);

    let mut header = records.next("header")?;
    let contributor_count: usize = header.int("contributor count")?;
    let project_count: usize = header.int("project count")?;

    let mut contributors = Vec::with_capacity(contributor_count);
    for _ in 0..contributor_count {
        let mut record = records.next("contributor")?;
        let mut contributor = Contributor::new(record.text("contributor name")?);
        let skill_count: usize = record.int("skill count")?;
        for _ in 0..skill_count {
            contributor.skills.push(parse_skill(&mut records)?);
        }
        contributors.push(contributor);
    }

    let mut projects = Vec::with_capacity(project_count);
    for _ in 0..project_count {
        let mut record = records.next("project")?;
        let mut project = Project::new(record.text("project name")?)
            .with_days(record.int("days")?)
            .with_score(record.int("score")?)
            .with_best_before(record.int("best before")?);
        let role_count: usize = record.int("role count")?;
        for _ in 0..role_count {
            let skill = parse_skill(&mut records)?;
            project.roles.push(Role::new(skill.name, skill.level));
        }
        projects.push(project);
    }

    debug!(
        contributors = contributors.len(),
        projects = projects.len(),
        "instance parsed"
    );
    Ok(StaffingRequest::new(contributors, projects))
}

/// Reads and parses an instance file.
pub fn read_instance(path: impl AsRef<Path>) -> Result<StaffingRequest, ParseError> {
    let input = std::fs::read_to_string(path)?;
    parse_instance(&input)
}
