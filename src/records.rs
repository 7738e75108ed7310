//! Lab 1: plain descriptive records with validated fields.

use std::fmt;

use serde_json::Value;

use crate::error::{LabError, Result};
use crate::validate::{self, kind_of};

// =============================================================================
// Milestone 1: Table
// =============================================================================

/// How hard a table gets hit: a free-form label ("hard") or a numeric level.
#[derive(Debug, Clone, PartialEq)]
pub enum Severity {
    Label(String),
    Level(i64),
}

impl Severity {
    fn inflicts_damage(&self) -> bool {
        match self {
            Severity::Label(label) => !label.trim().is_empty(),
            Severity::Level(level) => *level > 0,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Label(label) => write!(f, "{label}"),
            Severity::Level(level) => write!(f, "level {level}"),
        }
    }
}

impl TryFrom<&Value> for Severity {
    type Error = LabError;

    fn try_from(value: &Value) -> Result<Self> {
        match value {
            Value::String(label) => Ok(Severity::Label(label.clone())),
            Value::Number(n) if n.is_i64() => Ok(Severity::Level(n.as_i64().unwrap_or_default())),
            Value::Number(n) if n.is_u64() => {
                Err(LabError::invalid_value("severity", n, "integer is too large"))
            }
            other => Err(LabError::invalid_type("severity", "string or integer", kind_of(other))),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    material: String,
    weight: f64,
    location: Option<String>,
    damage: Vec<Severity>,
}

impl Table {
    /// `weight` is in kilograms and must be positive.
    pub fn new(material: impl Into<String>, weight: f64) -> Result<Self> {
        Ok(Self {
            material: material.into(),
            weight: validate::positive("weight", weight)?,
            location: None,
            damage: Vec::new(),
        })
    }

    pub fn material(&self) -> &str {
        &self.material
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn damage_taken(&self) -> &[Severity] {
        &self.damage
    }

    pub fn move_to(&mut self, destination: impl Into<String>) {
        let destination = destination.into();
        tracing::debug!(material = %self.material, %destination, "table moved");
        self.location = Some(destination);
    }

    /// Returns whether any damage was actually done.
    pub fn damage(&mut self, severity: Severity) -> bool {
        if !severity.inflicts_damage() {
            return false;
        }
        tracing::debug!(material = %self.material, %severity, "table damaged");
        self.damage.push(severity);
        true
    }

    pub fn inspect(&self) -> String {
        format!("Table made of {}, weighing {} kg", self.material, self.weight)
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inspect())?;
        if let Some(location) = &self.location {
            write!(f, ", in {location}")?;
        }
        Ok(())
    }
}

impl TryFrom<&Value> for Table {
    type Error = LabError;

    fn try_from(value: &Value) -> Result<Self> {
        let material = validate::string_field(value, "material")?;
        let weight = validate::number_field(value, "weight")?;
        Table::new(material, weight)
    }
}

// =============================================================================
// Milestone 2: Social media platform
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct SocialMediaPlatform {
    name: String,
    users: u64,
    posts: Vec<String>,
}

impl SocialMediaPlatform {
    pub fn new(name: impl Into<String>, users: i64) -> Result<Self> {
        Ok(Self {
            name: name.into(),
            users: validate::non_negative("users", users)?,
            posts: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Publishes `content` and returns how many posts the platform now holds.
    pub fn post(&mut self, content: impl Into<String>) -> usize {
        self.posts.push(content.into());
        tracing::debug!(platform = %self.name, posts = self.posts.len(), "content posted");
        self.posts.len()
    }

    pub fn posts(&self) -> &[String] {
        &self.posts
    }

    pub fn get_users_count(&self) -> u64 {
        self.users
    }
}

impl fmt::Display for SocialMediaPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} users)", self.name, self.users)
    }
}

impl TryFrom<&Value> for SocialMediaPlatform {
    type Error = LabError;

    fn try_from(value: &Value) -> Result<Self> {
        let name = validate::string_field(value, "name")?;
        let users = validate::whole_number_field(value, "users")?;
        SocialMediaPlatform::new(name, users)
    }
}

// =============================================================================
// Milestone 3: Abstract concept
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct AbstractConcept {
    name: String,
    description: String,
    explored: bool,
}

impl AbstractConcept {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            explored: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn define(&self) -> String {
        format!("{}: {}", self.name, self.description)
    }

    pub fn explore(&mut self) {
        tracing::debug!(concept = %self.name, "concept explored");
        self.explored = true;
    }

    pub fn is_explored(&self) -> bool {
        self.explored
    }

    pub fn discuss(&self, topic: &str) -> String {
        format!(
            "{} in the context of {topic}: {}",
            self.name, self.description
        )
    }
}

impl fmt::Display for AbstractConcept {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.define())
    }
}

impl TryFrom<&Value> for AbstractConcept {
    type Error = LabError;

    fn try_from(value: &Value) -> Result<Self> {
        Ok(AbstractConcept::new(
            validate::string_field(value, "name")?,
            validate::string_field(value, "description")?,
        ))
    }
}
