//! # Lead Intake
//!
//! The records built from the two public intake surfaces: the multi-step
//! project estimator and the contact form. Both validate field-by-field
//! with structured errors so the form layer can attach a message to the
//! offending control, and both serialize cleanly for hand-off to whatever
//! receives leads downstream.
//!
//! Validation and quoting are deliberately separate: a request whose
//! square footage is present but unparsable still validates (the field
//! was filled in), it just quotes to nothing - the same silent sentinel
//! the calculator uses everywhere.
//!
//! ## Example
//!
//! ```rust
//! use quote_core::leads::EstimateRequest;
//! use quote_core::pricing::{Complexity, Timeline};
//!
//! let mut request = EstimateRequest::new();
//! request.service_type = "stamped-concrete".to_string();
//! request.square_footage = "1000".to_string();
//! request.complexity = Complexity::Standard;
//! request.timeline = Timeline::Standard;
//! request.address = "12 Ridge Rd".to_string();
//! request.name = "Dana Smith".to_string();
//! request.email = "dana@example.com".to_string();
//! request.phone = "555-123-4567".to_string();
//!
//! request.validate().unwrap();
//! let quote = request.quote().unwrap();
//! assert_eq!(quote.range_label(), "$16,200 - $19,800");
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{QuoteError, QuoteResult};
use crate::pricing::{estimate, Complexity, Estimate, EstimateInput, RateSchedule, Timeline};

/// Residential or commercial work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    /// Home projects
    #[default]
    Residential,
    /// Business projects
    Commercial,
}

impl ProjectType {
    /// All project types for UI selection
    pub const ALL: [ProjectType; 2] = [ProjectType::Residential, ProjectType::Commercial];

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            ProjectType::Residential => "Residential",
            ProjectType::Commercial => "Commercial",
        }
    }
}

impl std::fmt::Display for ProjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Full payload of the multi-step project estimator.
///
/// Square footage stays a string here - it is whatever the visitor typed,
/// and whether it quotes is the calculator's call, not intake's.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateRequest {
    /// Stable identifier for this lead
    pub id: Uuid,

    /// When the request was submitted
    pub submitted_at: DateTime<Utc>,

    pub project_type: ProjectType,

    /// Service slug from the picker (e.g., "patios-pool-decks")
    pub service_type: String,

    /// Square footage exactly as entered
    pub square_footage: String,

    pub complexity: Complexity,

    pub timeline: Timeline,

    /// Project address
    pub address: String,

    /// Contact full name
    pub name: String,

    pub email: String,

    pub phone: String,

    /// Optional free-text project description
    #[serde(default)]
    pub description: Option<String>,

    /// Uploaded photo paths
    #[serde(default)]
    pub photos: Vec<String>,
}

impl EstimateRequest {
    /// Start an empty request with a fresh id and submission timestamp.
    pub fn new() -> Self {
        EstimateRequest {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            project_type: ProjectType::default(),
            service_type: String::new(),
            square_footage: String::new(),
            complexity: Complexity::default(),
            timeline: Timeline::default(),
            address: String::new(),
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            description: None,
            photos: Vec::new(),
        }
    }

    /// Validate field rules.
    ///
    /// Returns the first violation so the form can focus the field.
    pub fn validate(&self) -> QuoteResult<()> {
        require_filled("service_type", &self.service_type)?;
        require_filled("square_footage", &self.square_footage)?;
        require_filled("address", &self.address)?;
        require_min_len("name", &self.name, 2, "Name must be at least 2 characters")?;
        validate_email("email", &self.email)?;
        require_min_len("phone", &self.phone, 10, "Phone number must be at least 10 characters")?;
        Ok(())
    }

    /// Serialize for hand-off. The submit path currently just records this
    /// payload; there is no backend to post it to yet.
    pub fn to_json(&self) -> QuoteResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| QuoteError::SerializationError {
            reason: e.to_string(),
        })
    }

    /// Quote this request against the full intake schedule.
    ///
    /// `None` when the entered square footage doesn't parse to a positive
    /// number - no estimate is shown, nothing fails.
    pub fn quote(&self) -> Option<Estimate> {
        let input = EstimateInput {
            service: Some(self.service_type.clone()),
            square_footage: crate::pricing::parse_square_footage(&self.square_footage)?.value(),
            complexity: self.complexity,
            timeline: Some(self.timeline),
        };
        estimate(&input, RateSchedule::FullIntake)
    }
}

impl Default for EstimateRequest {
    fn default() -> Self {
        Self::new()
    }
}

/// Contact-form payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactMessage {
    /// Stable identifier for this message
    pub id: Uuid,

    /// When the message was submitted
    pub submitted_at: DateTime<Utc>,

    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,

    /// Kind of work wanted ("new-construction", "repair", ...)
    pub service_type: String,

    /// What the work is for ("driveway", "patio", "foundation", ...)
    pub project_type: String,

    /// Free-form urgency selection ("asap", "1-2-weeks", "flexible", ...)
    pub timeline: String,

    /// Budget bracket ("under-5k", "5k-15k", ...)
    pub budget: String,

    pub message: String,

    /// Newsletter opt-in
    pub newsletter: bool,
}

impl ContactMessage {
    /// Start an empty message with a fresh id and submission timestamp.
    pub fn new() -> Self {
        ContactMessage {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            service_type: String::new(),
            project_type: String::new(),
            timeline: String::new(),
            budget: String::new(),
            message: String::new(),
            newsletter: false,
        }
    }

    /// Validate field rules. Returns the first violation.
    pub fn validate(&self) -> QuoteResult<()> {
        require_min_len("first_name", &self.first_name, 2, "First name must be at least 2 characters")?;
        require_min_len("last_name", &self.last_name, 2, "Last name must be at least 2 characters")?;
        validate_email("email", &self.email)?;
        require_min_len("phone", &self.phone, 10, "Phone number must be at least 10 characters")?;
        require_filled("service_type", &self.service_type)?;
        require_filled("project_type", &self.project_type)?;
        require_filled("timeline", &self.timeline)?;
        require_filled("budget", &self.budget)?;
        require_min_len("message", &self.message, 10, "Please provide more details about your project")?;
        Ok(())
    }

    /// Serialize for hand-off. The submit path currently just records this
    /// payload; there is no backend to post it to yet.
    pub fn to_json(&self) -> QuoteResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| QuoteError::SerializationError {
            reason: e.to_string(),
        })
    }
}

impl Default for ContactMessage {
    fn default() -> Self {
        Self::new()
    }
}

fn require_filled(field: &str, value: &str) -> QuoteResult<()> {
    if value.trim().is_empty() {
        return Err(QuoteError::missing_field(field));
    }
    Ok(())
}

fn require_min_len(field: &str, value: &str, min: usize, reason: &str) -> QuoteResult<()> {
    if value.trim().chars().count() < min {
        return Err(QuoteError::invalid_input(field, value, reason));
    }
    Ok(())
}

fn validate_email(field: &str, value: &str) -> QuoteResult<()> {
    let well_formed = value.split_once('@').is_some_and(|(local, domain)| {
        !local.is_empty()
            && domain.contains('.')
            && !domain.starts_with('.')
            && !domain.ends_with('.')
    });
    if !well_formed {
        return Err(QuoteError::invalid_input(field, value, "Not a valid email address"));
    }
    Ok(())
}
