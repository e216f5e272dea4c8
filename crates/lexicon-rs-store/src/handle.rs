//! Load completion handles.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use lexicon_rs_core::{LexiconError, LexiconResult};
use tokio::sync::oneshot;

/// Resolves once a language's resources are usable, or once loading failed.
///
/// A handle is returned by every call that may load resources. It resolves
/// exactly once and never before the call that produced it has returned.
/// Dropping it does not cancel the load; the store is still updated when the
/// loader answers.
///
/// # Panics
///
/// Handles are created by spawning onto the current Tokio runtime, so the
/// calls that produce them panic outside of one.
#[derive(Debug)]
#[must_use = "a load handle does nothing unless awaited; the load itself runs regardless"]
pub struct LoadHandle {
    language: String,
    rx: oneshot::Receiver<LexiconResult<()>>,
}

impl LoadHandle {
    pub(crate) fn channel(language: &str) -> (oneshot::Sender<LexiconResult<()>>, Self) {
        let (tx, rx) = oneshot::channel();
        let handle = Self {
            language: language.to_string(),
            rx,
        };
        (tx, handle)
    }

    /// Returns a handle that resolves successfully on a later scheduler turn
    /// without loading anything.
    pub fn ready(language: &str) -> Self {
        let (tx, handle) = Self::channel(language);
        tokio::spawn(async move {
            tx.send(Ok(())).ok();
        });
        handle
    }

    /// Returns a handle that resolves to `err` on a later scheduler turn.
    pub fn failed(language: &str, err: LexiconError) -> Self {
        let (tx, handle) = Self::channel(language);
        tokio::spawn(async move {
            tx.send(Err(err)).ok();
        });
        handle
    }

    /// The language this handle reports on.
    pub fn language(&self) -> &str {
        &self.language
    }
}

impl Future for LoadHandle {
    type Output = LexiconResult<()>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        Pin::new(&mut this.rx).poll(cx).map(|received| {
            received.unwrap_or_else(|_| {
                Err(LexiconError::ConfigurationError(format!(
                    "load of '{}' ended without a result",
                    this.language
                )))
            })
        })
    }
}
