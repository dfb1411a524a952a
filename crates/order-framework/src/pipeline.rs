//! # Step Pipeline
//!
//! A fixed, linear chain of handlers driven by an explicit loop. Every step declares the
//! status value it requires; the driver checks that requirement before handing the shared
//! status to the step, and aborts the whole chain on the first mismatch.
//!
//! Steps never hold a reference to their successor. Order lives in the [`Pipeline`]
//! alone, so any step can be exercised on its own and the driver can start midway.
//!
//! ```rust
//! use order_framework::pipeline::{Pipeline, Step};
//!
//! struct Bump { from: u8 }
//!
//! impl Step<u8> for Bump {
//!     fn name(&self) -> &str { "bump" }
//!     fn requires(&self) -> &u8 { &self.from }
//!     fn process(&self, status: &mut u8) -> String {
//!         *status += 1;
//!         format!("now {status}")
//!     }
//! }
//!
//! let pipeline = Pipeline::new().then(Bump { from: 0 }).then(Bump { from: 1 });
//! let mut status = 0;
//! let mut notices = Vec::new();
//! pipeline.run(&mut status, |_, notice| notices.push(notice.to_string())).unwrap();
//! assert_eq!(status, 2);
//! assert_eq!(notices, ["now 1", "now 2"]);
//! ```

use crate::error::PipelineError;
use std::fmt::Display;
use tracing::{debug, info, warn};

/// One handler in a [`Pipeline`].
pub trait Step<S>: Send + Sync {
    /// Short name used in logs and errors.
    fn name(&self) -> &str;

    /// The exact status this step must find before it runs.
    fn requires(&self) -> &S;

    /// Advances `status` to this step's completion value and returns the notice to show.
    fn process(&self, status: &mut S) -> String;
}

/// Names of the steps that ran, in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PipelineReport {
    pub completed: Vec<String>,
}

/// An ordered sequence of [`Step`]s sharing one status value.
pub struct Pipeline<S> {
    steps: Vec<Box<dyn Step<S>>>,
}

impl<S> Default for Pipeline<S> {
    fn default() -> Self {
        Self { steps: Vec::new() }
    }
}

impl<S: PartialEq + Display> Pipeline<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a step. The link is fixed once the pipeline is built.
    pub fn then(mut self, step: impl Step<S> + 'static) -> Self {
        self.steps.push(Box::new(step));
        self
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Step names in execution order.
    pub fn step_names(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.name()).collect()
    }

    /// Runs every step from the first.
    pub fn run(
        &self,
        status: &mut S,
        on_notice: impl FnMut(&str, &str),
    ) -> Result<PipelineReport, PipelineError> {
        self.run_from(0, status, on_notice)
    }

    /// Runs the steps from position `start` to the end.
    ///
    /// `on_notice` receives `(step name, notice)` after each completed step. On a
    /// precondition mismatch the status is left exactly as found and no later step runs.
    pub fn run_from(
        &self,
        start: usize,
        status: &mut S,
        mut on_notice: impl FnMut(&str, &str),
    ) -> Result<PipelineReport, PipelineError> {
        if start >= self.steps.len() {
            return Err(PipelineError::NoSuchStep(start));
        }

        let mut report = PipelineReport::default();
        for step in &self.steps[start..] {
            if *status != *step.requires() {
                warn!(
                    step = step.name(),
                    expected = %step.requires(),
                    found = %status,
                    "Step out of sequence, aborting"
                );
                return Err(PipelineError::OutOfSequence {
                    step: step.name().to_string(),
                    expected: step.requires().to_string(),
                    found: status.to_string(),
                });
            }

            debug!(step = step.name(), %status, "Step starting");
            let notice = step.process(status);
            info!(step = step.name(), %status, "Step completed");
            on_notice(step.name(), &notice);
            report.completed.push(step.name().to_string());
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Stamp {
        name: &'static str,
        from: String,
        to: &'static str,
    }

    fn stamp(name: &'static str, from: &str, to: &'static str) -> Stamp {
        Stamp {
            name,
            from: from.to_string(),
            to,
        }
    }

    impl Step<String> for Stamp {
        fn name(&self) -> &str {
            self.name
        }

        fn requires(&self) -> &String {
            &self.from
        }

        fn process(&self, status: &mut String) -> String {
            *status = self.to.to_string();
            format!("{} done", self.name)
        }
    }

    fn three_steps() -> Pipeline<String> {
        Pipeline::new()
            .then(stamp("a", "start", "after a"))
            .then(stamp("b", "after a", "after b"))
            .then(stamp("c", "after b", "after c"))
    }

    #[test]
    fn test_runs_all_steps_in_order() {
        let pipeline = three_steps();
        let mut status = "start".to_string();
        let mut seen = Vec::new();

        let report = pipeline
            .run(&mut status, |step, notice| seen.push(format!("{step}:{notice}")))
            .unwrap();

        assert_eq!(status, "after c");
        assert_eq!(report.completed, ["a", "b", "c"]);
        assert_eq!(seen, ["a:a done", "b:b done", "c:c done"]);
    }

    #[test]
    fn test_mismatch_aborts_without_touching_status() {
        let pipeline = three_steps();
        let mut status = "bogus".to_string();
        let mut calls = 0;

        let err = pipeline.run(&mut status, |_, _| calls += 1).unwrap_err();

        assert_eq!(status, "bogus");
        assert_eq!(calls, 0);
        assert_eq!(
            err,
            PipelineError::OutOfSequence {
                step: "a".into(),
                expected: "start".into(),
                found: "bogus".into(),
            }
        );
    }

    #[test]
    fn test_run_from_middle() {
        let pipeline = three_steps();
        let mut status = "after a".to_string();

        let report = pipeline.run_from(1, &mut status, |_, _| {}).unwrap();

        assert_eq!(report.completed, ["b", "c"]);
        assert_eq!(status, "after c");
    }

    #[test]
    fn test_run_from_middle_with_wrong_status_stops_there() {
        let pipeline = three_steps();
        let mut status = "start".to_string();

        let err = pipeline.run_from(2, &mut status, |_, _| {}).unwrap_err();

        assert!(matches!(err, PipelineError::OutOfSequence { ref step, .. } if step == "c"));
        assert_eq!(status, "start");
    }

    #[test]
    fn test_start_past_end() {
        let pipeline = three_steps();
        let mut status = "start".to_string();
        assert_eq!(
            pipeline.run_from(3, &mut status, |_, _| {}),
            Err(PipelineError::NoSuchStep(3))
        );
        assert_eq!(pipeline.step_names(), ["a", "b", "c"]);
    }
}
