//! Onboarding answer store.
//!
//! A single worker task owns the record repository and applies commands one at
//! a time, so the read-modify-write cycle behind every write never interleaves
//! with another one. Callers talk to it through the cloneable
//! [`OnboardingAnswerStore`] handle.
//!
//! The store is fail-soft: storage, decode and precondition failures are
//! logged, published on the [`OnboardingEventPort`] and turned into a safe
//! default. Nothing is returned as an error.

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, error, info_span, Instrument};

use savr_core::onboarding::{AnswerValue, OnboardingRecord};
use savr_core::ports::{
    ClockPort, DiagnosticKind, OnboardingDiagnostic, OnboardingEventPort, OnboardingRecordPort,
    RecordStoreError, StoreOperation,
};
use savr_core::JourneyType;

/// Commands processed by the store worker
#[derive(Debug)]
enum StoreCommand {
    Read {
        respond_to: oneshot::Sender<Option<OnboardingRecord>>,
    },
    SaveAnswer {
        question_id: String,
        value: AnswerValue,
        respond_to: oneshot::Sender<()>,
    },
    SetJourneyType {
        journey: JourneyType,
        respond_to: oneshot::Sender<()>,
    },
    MarkCompleted {
        respond_to: oneshot::Sender<()>,
    },
    Clear {
        respond_to: oneshot::Sender<()>,
    },
}

/// Handle to the onboarding store worker.
#[derive(Clone)]
pub struct OnboardingAnswerStore {
    commands: mpsc::Sender<StoreCommand>,
    reporter: Reporter,
}

impl OnboardingAnswerStore {
    /// Spawn the store worker on the current tokio runtime.
    ///
    /// `queue_capacity` bounds the number of pending commands; callers wait
    /// for room when it is full.
    pub fn spawn(
        records: Arc<dyn OnboardingRecordPort>,
        clock: Arc<dyn ClockPort>,
        events: Arc<dyn OnboardingEventPort>,
        queue_capacity: usize,
    ) -> Self {
        let (commands, receiver) = mpsc::channel(queue_capacity.max(1));
        let reporter = Reporter { clock, events };
        let worker = StoreWorker {
            records,
            reporter: reporter.clone(),
        };
        tokio::spawn(worker.run(receiver).instrument(info_span!("onboarding_store")));

        Self { commands, reporter }
    }

    /// Current record, or `None` if nothing was written or it cannot be decoded.
    pub async fn read(&self) -> Option<OnboardingRecord> {
        self.request(StoreOperation::Read, |respond_to| StoreCommand::Read {
            respond_to,
        })
        .await
        .flatten()
    }

    /// Merge one answer into the record, creating the record if needed.
    pub async fn save_answer(&self, question_id: impl Into<String>, value: AnswerValue) {
        let question_id = question_id.into();
        self.request(StoreOperation::SaveAnswer, |respond_to| {
            StoreCommand::SaveAnswer {
                question_id,
                value,
                respond_to,
            }
        })
        .await;
    }

    /// Record the chosen journey, keeping existing answers.
    pub async fn set_journey_type(&self, journey: JourneyType) {
        self.request(StoreOperation::SetJourneyType, |respond_to| {
            StoreCommand::SetJourneyType {
                journey,
                respond_to,
            }
        })
        .await;
    }

    /// Mark an existing record completed. Without a record this only reports
    /// a `MissingRecord` diagnostic.
    pub async fn mark_completed(&self) {
        self.request(StoreOperation::MarkCompleted, |respond_to| {
            StoreCommand::MarkCompleted { respond_to }
        })
        .await;
    }

    /// Delete the record unconditionally.
    pub async fn clear(&self) {
        self.request(StoreOperation::Clear, |respond_to| StoreCommand::Clear {
            respond_to,
        })
        .await;
    }

    pub async fn is_completed(&self) -> bool {
        self.read().await.map(|r| r.completed).unwrap_or(false)
    }

    async fn request<T>(
        &self,
        operation: StoreOperation,
        command: impl FnOnce(oneshot::Sender<T>) -> StoreCommand,
    ) -> Option<T> {
        let (respond_to, response) = oneshot::channel();
        if self.commands.send(command(respond_to)).await.is_err() {
            self.reporter
                .report(operation, DiagnosticKind::Unavailable, "store worker stopped");
            return None;
        }
        match response.await {
            Ok(value) => Some(value),
            Err(_) => {
                self.reporter.report(
                    operation,
                    DiagnosticKind::Unavailable,
                    "store worker dropped the request",
                );
                None
            }
        }
    }
}

#[derive(Clone)]
struct Reporter {
    clock: Arc<dyn ClockPort>,
    events: Arc<dyn OnboardingEventPort>,
}

impl Reporter {
    fn report(&self, operation: StoreOperation, kind: DiagnosticKind, message: impl Into<String>) {
        let message = message.into();
        error!(?operation, ?kind, "onboarding store: {message}");
        self.events.emit(OnboardingDiagnostic {
            operation,
            kind,
            message,
            at: self.clock.now(),
        });
    }

    fn report_store_error(&self, operation: StoreOperation, err: &RecordStoreError) {
        let kind = match err {
            RecordStoreError::Storage(_) => DiagnosticKind::Storage,
            RecordStoreError::Decode(_) => DiagnosticKind::Decode,
            RecordStoreError::Encode(_) => DiagnosticKind::Encode,
        };
        self.report(operation, kind, err.to_string());
    }
}

struct StoreWorker {
    records: Arc<dyn OnboardingRecordPort>,
    reporter: Reporter,
}

impl StoreWorker {
    async fn run(self, mut receiver: mpsc::Receiver<StoreCommand>) {
        while let Some(command) = receiver.recv().await {
            self.handle(command).await;
        }
        debug!("onboarding store worker stopped");
    }

    async fn handle(&self, command: StoreCommand) {
        // A dropped receiver only means the caller stopped waiting.
        match command {
            StoreCommand::Read { respond_to } => {
                let record = self.load(StoreOperation::Read).await;
                let _ = respond_to.send(record);
            }
            StoreCommand::SaveAnswer {
                question_id,
                value,
                respond_to,
            } => {
                self.save_answer(question_id, value).await;
                let _ = respond_to.send(());
            }
            StoreCommand::SetJourneyType {
                journey,
                respond_to,
            } => {
                self.set_journey_type(journey).await;
                let _ = respond_to.send(());
            }
            StoreCommand::MarkCompleted { respond_to } => {
                self.mark_completed().await;
                let _ = respond_to.send(());
            }
            StoreCommand::Clear { respond_to } => {
                self.clear().await;
                let _ = respond_to.send(());
            }
        }
    }

    async fn load(&self, operation: StoreOperation) -> Option<OnboardingRecord> {
        match self.records.load().await {
            Ok(record) => record,
            Err(err) => {
                self.reporter.report_store_error(operation, &err);
                None
            }
        }
    }

    async fn persist(&self, operation: StoreOperation, record: &OnboardingRecord) {
        if let Err(err) = self.records.save(record).await {
            self.reporter.report_store_error(operation, &err);
        }
    }

    async fn save_answer(&self, question_id: String, value: AnswerValue) {
        let mut record = self
            .load(StoreOperation::SaveAnswer)
            .await
            .unwrap_or_default();
        debug!(%question_id, "saving onboarding answer");
        record.record_answer(question_id, value);
        self.persist(StoreOperation::SaveAnswer, &record).await;
    }

    async fn set_journey_type(&self, journey: JourneyType) {
        let mut record = self
            .load(StoreOperation::SetJourneyType)
            .await
            .unwrap_or_default();
        debug!(%journey, "setting onboarding journey");
        record.choose_journey(journey);
        self.persist(StoreOperation::SetJourneyType, &record).await;
    }

    async fn mark_completed(&self) {
        let Some(mut record) = self.load(StoreOperation::MarkCompleted).await else {
            self.reporter.report(
                StoreOperation::MarkCompleted,
                DiagnosticKind::MissingRecord,
                "no onboarding data to complete",
            );
            return;
        };
        record.complete(self.reporter.clock.now());
        self.persist(StoreOperation::MarkCompleted, &record).await;
    }

    async fn clear(&self) {
        if let Err(err) = self.records.remove().await {
            self.reporter
                .report_store_error(StoreOperation::Clear, &err);
        }
    }
}
