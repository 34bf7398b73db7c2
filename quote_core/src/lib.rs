//! # quote_core - Concrete Project Quoting Engine
//!
//! `quote_core` is the domain core behind the SolidGround site: instant
//! project estimates, the published service catalog, lead intake
//! validation, and the job-site helpers (curing countdowns, pour-day
//! weather ratings). All inputs and outputs are JSON-serializable so any
//! front end can drive it.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Silent no-quote**: A bad square footage yields no estimate, never
//!   an error - the one failure mode the calculator has
//!
//! ## Quick Start
//!
//! ```rust
//! use quote_core::pricing::{estimate, Complexity, EstimateInput, RateSchedule, Timeline};
//!
//! let input = EstimateInput {
//!     service: Some("stamped-concrete".to_string()),
//!     square_footage: 1000.0,
//!     complexity: Complexity::Standard,
//!     timeline: Some(Timeline::Standard),
//! };
//!
//! let quote = estimate(&input, RateSchedule::FullIntake).unwrap();
//! assert_eq!(quote.range_label(), "$16,200 - $19,800");
//! ```
//!
//! ## Modules
//!
//! - [`pricing`] - The estimate calculator and rate schedules
//! - [`services`] - Published service catalog
//! - [`leads`] - Intake records and field validation
//! - [`curing`] - Pour curing countdowns
//! - [`weather`] - Pour-day conditions rating
//! - [`units`] - Type-safe quantity wrappers
//! - [`errors`] - Structured error types

pub mod curing;
pub mod errors;
pub mod leads;
pub mod pricing;
pub mod services;
pub mod units;
pub mod weather;

// Re-export commonly used types at crate root for convenience
pub use errors::{QuoteError, QuoteResult};
pub use pricing::{estimate, Complexity, Estimate, EstimateInput, RateSchedule, ServiceType, Timeline};
pub use units::{Dollars, RatePerSqFt, SqFt};
