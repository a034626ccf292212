//! Career-fit self-assessment engine for Product Data Analysis.
//!
//! The [`assessment`] module holds the questionnaire catalog and the pure scoring
//! pipeline; the remaining modules carry configuration, telemetry, and the error
//! type shared with the HTTP service.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;
