//! # Framework Errors
//!
//! Common error types used throughout the framework: actor plumbing failures and
//! pipeline sequencing failures.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

/// Errors raised by the [`Pipeline`](crate::pipeline::Pipeline) driver.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PipelineError {
    /// A step was reached while the status did not carry its required predecessor label.
    #[error("Step '{step}' expected status '{expected}' but found '{found}'")]
    OutOfSequence {
        step: String,
        expected: String,
        found: String,
    },

    /// The driver was asked to start past the last step.
    #[error("No step at position {0}")]
    NoSuchStep(usize),
}
