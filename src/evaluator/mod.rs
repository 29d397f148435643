//! Batch evaluation loop.
//!
//! Walks the input rows in order, asks the model about each idea, and
//! collects one output record per row. A row never aborts the batch: any
//! failure is recorded as a sentinel record and the loop moves on.

use crate::llm::GenerativeModel;
use crate::models::{BatchSummary, EvaluationRecord, FailureKind, IdeaRecord};
use crate::parser::parse_evaluation;
use crate::prompt::build_prompt;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, warn};

/// Outcome of a batch run: the records in input order plus counters.
#[derive(Debug)]
pub struct BatchResult {
    /// One record per input row, in input order.
    pub records: Vec<EvaluationRecord>,
    /// Success and sentinel counters.
    pub summary: BatchSummary,
}

/// Drives the evaluation of a batch of ideas against a model.
pub struct Evaluator<M> {
    model: M,
    show_progress: bool,
}

impl<M: GenerativeModel> Evaluator<M> {
    /// Creates an evaluator with a progress bar enabled.
    pub fn new(model: M) -> Self {
        Self {
            model,
            show_progress: true,
        }
    }

    /// Enables or disables the progress bar.
    pub fn show_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Evaluates every idea in order. Infallible: rows that cannot be
    /// evaluated come back as sentinel records.
    pub async fn run(&self, ideas: &[IdeaRecord]) -> BatchResult {
        let progress = if self.show_progress {
            let pb = ProgressBar::new(ideas.len() as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template(
                        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})",
                    )
                    .unwrap()
                    .progress_chars("#>-"),
            );
            Some(pb)
        } else {
            None
        };

        let mut records = Vec::with_capacity(ideas.len());
        let mut summary = BatchSummary::default();

        for idea in ideas {
            debug!("Evaluating idea: {}", idea.idea);

            let (record, failure) = self.evaluate_idea(idea).await;
            match failure {
                None => summary.record_success(),
                Some(kind) => summary.record_failure(kind),
            }
            records.push(record);

            if let Some(ref pb) = progress {
                pb.inc(1);
            }
        }

        if let Some(pb) = progress {
            pb.finish_with_message("Evaluation complete");
        }

        BatchResult { records, summary }
    }

    /// Evaluates a single idea: prompt, model call, parse, merge.
    ///
    /// Returns the output record and, for sentinel rows, which failure
    /// produced it.
    async fn evaluate_idea(&self, idea: &IdeaRecord) -> (EvaluationRecord, Option<FailureKind>) {
        let prompt = build_prompt(&idea.idea, &idea.description);

        let reply = match self.model.generate(&prompt).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!("Model call failed for '{}': {:#}", idea.idea, e);
                return (
                    EvaluationRecord::failure(idea, FailureKind::Unexpected),
                    Some(FailureKind::Unexpected),
                );
            }
        };

        match parse_evaluation(&reply) {
            Ok(fields) => (EvaluationRecord::evaluated(idea, fields), None),
            Err(e) => {
                let kind = FailureKind::from(&e);
                warn!("Could not parse reply for '{}': {}", idea.idea, e);
                (EvaluationRecord::failure(idea, kind), Some(kind))
            }
        }
    }
}
