//! Submission workflow controller
//!
//! Owns one form's field state and drives it through
//! `Idle -> Submitting -> {Submitted | Idle}`. The request runs on a spawned
//! task so the UI loop keeps drawing; its outcome comes back over a channel
//! and is applied by [`SubmissionController::poll`]. The `Submitting` status
//! doubles as the guard against overlapping requests.

use super::error::FormError;
use super::form_state::{Form, FormStatus, SubmissionForm};
use super::schema::{FormSchema, PostSuccess};
use crate::remote::{RemoteClientTrait, SubmitError};
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Messages from background tasks back to the controller
#[derive(Debug)]
enum SubmissionEvent {
    Completed {
        generation: u64,
        outcome: Result<(), SubmitError>,
    },
    RevertElapsed {
        generation: u64,
    },
}

/// One instance of the submission workflow
pub struct SubmissionController {
    schema: FormSchema,
    form: SubmissionForm,
    client: Arc<dyn RemoteClientTrait>,
    events_tx: mpsc::UnboundedSender<SubmissionEvent>,
    events_rx: mpsc::UnboundedReceiver<SubmissionEvent>,
    /// Bumped on every dispatch so late events from an older attempt are ignored
    generation: u64,
    revert_timer: Option<JoinHandle<()>>,
    notice: Option<String>,
}

impl SubmissionController {
    pub fn new(schema: FormSchema, client: Arc<dyn RemoteClientTrait>) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            form: SubmissionForm::new(&schema),
            schema,
            client,
            events_tx,
            events_rx,
            generation: 0,
            revert_timer: None,
            notice: None,
        }
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    pub fn form(&self) -> &SubmissionForm {
        &self.form
    }

    pub fn status(&self) -> FormStatus {
        self.form.status
    }

    /// Inputs accept edits unless a request is in flight
    pub fn is_input_enabled(&self) -> bool {
        self.form.status != FormStatus::Submitting
    }

    pub fn is_submit_enabled(&self) -> bool {
        self.form.status == FormStatus::Idle
    }

    /// Set a field by name. Allowed in every status; an in-flight request
    /// already holds its own copy of the values.
    #[allow(dead_code)]
    pub fn update_field(&mut self, name: &str, value: impl Into<String>) -> Result<(), FormError> {
        let field = self
            .form
            .field_mut(name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))?;
        field.set_text(value);
        Ok(())
    }

    /// Type a character into the active field
    pub fn input_char(&mut self, c: char) {
        if !self.is_input_enabled() {
            return;
        }
        if let Some(field) = self.form.get_active_field_mut() {
            field.push_char(c);
        }
    }

    /// Delete the last character of the active field
    pub fn backspace(&mut self) {
        if !self.is_input_enabled() {
            return;
        }
        if let Some(field) = self.form.get_active_field_mut() {
            field.pop_char();
        }
    }

    pub fn next_field(&mut self) {
        self.form.next_field();
    }

    pub fn prev_field(&mut self) {
        self.form.prev_field();
    }

    pub fn focus_first(&mut self) {
        self.form.set_active_field(0);
    }

    /// Request body: the ordered field values plus the discriminator
    fn request_body(&self) -> Value {
        let mut body = self.form.values();
        if let Some((key, value)) = self.schema.discriminator {
            body.insert(key.to_string(), Value::String(value.to_string()));
        }
        Value::Object(body)
    }

    /// Start a submission.
    ///
    /// Returns `Ok(true)` when a request was dispatched and `Ok(false)` when
    /// the form is not idle. Validation failures send nothing.
    pub fn submit(&mut self) -> Result<bool, FormError> {
        if self.form.status != FormStatus::Idle {
            tracing::debug!(
                "Ignoring submit for '{}' while {:?}",
                self.schema.title,
                self.form.status
            );
            return Ok(false);
        }

        self.form.validate()?;

        let body = self.request_body();
        self.form.status = FormStatus::Submitting;
        self.generation += 1;

        let generation = self.generation;
        let endpoint = self.schema.endpoint.clone();
        let client = Arc::clone(&self.client);
        let tx = self.events_tx.clone();

        let title = self.schema.title;
        tracing::info!("Submitting '{title}' to {endpoint}");

        tokio::spawn(async move {
            let outcome = client.submit(&endpoint, &body).await;
            let sent = tx.send(SubmissionEvent::Completed {
                generation,
                outcome,
            });
            // Receiver is gone if the controller was torn down
            if let Err(mpsc::error::SendError(SubmissionEvent::Completed {
                outcome: Err(e),
                ..
            })) = sent
            {
                tracing::warn!("Submission of '{title}' failed after its form closed: {e}");
            }
        });

        Ok(true)
    }

    /// Apply every finished background event without blocking.
    /// Returns true if the state changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Ok(event) = self.events_rx.try_recv() {
            changed |= self.apply(event);
        }
        changed
    }

    /// Wait for the next background event and apply it
    #[allow(dead_code)]
    pub async fn settle(&mut self) -> bool {
        match self.events_rx.recv().await {
            Some(event) => self.apply(event),
            None => false,
        }
    }

    fn apply(&mut self, event: SubmissionEvent) -> bool {
        match event {
            SubmissionEvent::Completed {
                generation,
                outcome,
            } => {
                if generation != self.generation || self.form.status != FormStatus::Submitting {
                    return false;
                }
                match outcome {
                    Ok(()) => self.on_success(),
                    Err(e) => {
                        tracing::warn!("Submission of '{}' failed: {e}", self.schema.title);
                        self.notice = Some(self.schema.failure_notice.to_string());
                        self.form.status = FormStatus::Idle;
                    }
                }
                true
            }
            SubmissionEvent::RevertElapsed { generation } => {
                if generation != self.generation || self.form.status != FormStatus::Submitted {
                    return false;
                }
                self.revert_timer = None;
                self.form.status = FormStatus::Idle;
                true
            }
        }
    }

    fn on_success(&mut self) {
        tracing::info!("Submission of '{}' accepted", self.schema.title);
        self.form.status = FormStatus::Submitted;
        self.form.clear();

        if let PostSuccess::RevertAfter(delay) = self.schema.post_success {
            let generation = self.generation;
            let tx = self.events_tx.clone();
            self.revert_timer = Some(tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                let _ = tx.send(SubmissionEvent::RevertElapsed { generation });
            }));
        }
    }

    /// Blocking notice raised by the last failed attempt, if any
    pub fn take_notice(&mut self) -> Option<String> {
        self.notice.take()
    }

    #[allow(dead_code)]
    pub fn has_pending_revert(&self) -> bool {
        self.revert_timer.is_some()
    }

    #[cfg(test)]
    fn revert_abort_handle(&self) -> Option<tokio::task::AbortHandle> {
        self.revert_timer.as_ref().map(JoinHandle::abort_handle)
    }
}

impl Drop for SubmissionController {
    fn drop(&mut self) {
        // Cancel-on-teardown; an in-flight request is left to finish unobserved
        if let Some(timer) = self.revert_timer.take() {
            timer.abort();
        }
    }
}
