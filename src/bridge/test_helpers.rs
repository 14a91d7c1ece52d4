//! Scripted dispatcher for bridge unit tests.

use std::sync::Mutex;

use crate::dispatcher::{Completion, Dispatcher, ProgressObserver};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{0}")]
pub(crate) struct TestError(pub &'static str);

/// How the scripted dispatcher finishes a request.
#[derive(Debug, Clone)]
pub(crate) enum Outcome {
    Succeed(&'static str),
    Fail(TestError),
    /// Drop the completion handle without calling it.
    Abandon,
    /// Keep the completion handle forever without calling it.
    Never,
}

/// One recorded `send` invocation.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Call {
    pub target: String,
    pub queue: Option<&'static str>,
    pub had_observer: bool,
}

/// Dispatcher that replays a fixed script synchronously inside `send`.
pub(crate) struct ScriptedDispatcher {
    progress: Vec<u32>,
    outcome: Outcome,
    calls: Mutex<Vec<Call>>,
    parked: Mutex<Vec<Completion<&'static str, TestError>>>,
}

impl ScriptedDispatcher {
    pub(crate) fn new(progress: Vec<u32>, outcome: Outcome) -> Self {
        Self {
            progress,
            outcome,
            calls: Mutex::new(Vec::new()),
            parked: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn succeeding(response: &'static str) -> Self {
        Self::new(Vec::new(), Outcome::Succeed(response))
    }

    pub(crate) fn failing(message: &'static str) -> Self {
        Self::new(Vec::new(), Outcome::Fail(TestError(message)))
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl Dispatcher for ScriptedDispatcher {
    type Target = String;
    type Queue = &'static str;
    type Response = &'static str;
    type Progress = u32;
    type Error = TestError;

    fn send(
        &self,
        target: String,
        queue: Option<&'static str>,
        progress: Option<ProgressObserver<u32>>,
        completion: Completion<&'static str, TestError>,
    ) {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(Call {
                target,
                queue,
                had_observer: progress.is_some(),
            });

        if let Some(observer) = &progress {
            for event in &self.progress {
                observer.notify(*event);
            }
        }

        match &self.outcome {
            Outcome::Succeed(response) => completion.succeed(*response),
            Outcome::Fail(error) => completion.fail(error.clone()),
            Outcome::Abandon => drop(completion),
            Outcome::Never => self
                .parked
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .push(completion),
        }
    }
}
