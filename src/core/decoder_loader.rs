use crate::adapters::calamine_decoder::CalamineSource;
use crate::domain::ports::{DecoderSource, SpreadsheetDecoder};
use crate::utils::error::ImportError;
use futures::future::{BoxFuture, FutureExt, Shared};
use std::sync::{Arc, LazyLock, Mutex, MutexGuard};

type LoadFuture = Shared<BoxFuture<'static, Result<Arc<dyn SpreadsheetDecoder>, String>>>;

static SHARED_LOADER: LazyLock<DecoderLoader> =
    LazyLock::new(|| DecoderLoader::new(Arc::new(CalamineSource)));

enum LoaderState {
    Uninitialized,
    Loading { attempt: u64, future: LoadFuture },
    Ready(Arc<dyn SpreadsheetDecoder>),
}

struct Inner {
    state: LoaderState,
    attempts: u64,
}

/// Obtains the spreadsheet decoder at most once.
///
/// Callers arriving while a load is running wait on that same load. A failed
/// load leaves the loader uninitialised so the next call starts a new one.
pub struct DecoderLoader {
    source: Arc<dyn DecoderSource>,
    inner: Mutex<Inner>,
}

impl DecoderLoader {
    pub fn new(source: Arc<dyn DecoderSource>) -> Self {
        Self {
            source,
            inner: Mutex::new(Inner {
                state: LoaderState::Uninitialized,
                attempts: 0,
            }),
        }
    }

    /// A loader whose decoder is already present; `get` never suspends.
    pub fn with_decoder(source: Arc<dyn DecoderSource>, decoder: Arc<dyn SpreadsheetDecoder>) -> Self {
        Self {
            source,
            inner: Mutex::new(Inner {
                state: LoaderState::Ready(decoder),
                attempts: 0,
            }),
        }
    }

    /// Process-wide loader backed by calamine.
    pub fn shared() -> &'static DecoderLoader {
        &SHARED_LOADER
    }

    pub fn ready(&self) -> Option<Arc<dyn SpreadsheetDecoder>> {
        match &self.lock().state {
            LoaderState::Ready(decoder) => Some(decoder.clone()),
            _ => None,
        }
    }

    pub async fn get(&self) -> Result<Arc<dyn SpreadsheetDecoder>, ImportError> {
        let (attempt, future) = {
            let mut guard = self.lock();
            let inner = &mut *guard;
            match &inner.state {
                LoaderState::Ready(decoder) => return Ok(decoder.clone()),
                LoaderState::Loading { attempt, future } => (*attempt, future.clone()),
                LoaderState::Uninitialized => {
                    inner.attempts += 1;
                    let attempt = inner.attempts;
                    tracing::debug!("Loading spreadsheet decoder (attempt {})", attempt);

                    let source = self.source.clone();
                    let future = async move { source.load().await }.boxed().shared();
                    inner.state = LoaderState::Loading {
                        attempt,
                        future: future.clone(),
                    };
                    (attempt, future)
                }
            }
        };

        let outcome = future.await;

        let mut inner = self.lock();
        let still_current = matches!(
            inner.state,
            LoaderState::Loading { attempt: current, .. } if current == attempt
        );
        if still_current {
            inner.state = match &outcome {
                Ok(decoder) => LoaderState::Ready(decoder.clone()),
                Err(reason) => {
                    tracing::warn!("Spreadsheet decoder failed to load: {}", reason);
                    LoaderState::Uninitialized
                }
            };
        }

        outcome.map_err(ImportError::DecoderUnavailable)
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
