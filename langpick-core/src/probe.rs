//! Model availability probes
//!
//! A probe answers one question: can this model identifier be loaded in the
//! current environment? Probing never errors. Failures of any kind are
//! reported as a [`ProbeOutcome`] and collapse to "not available".

use serde::Deserialize;
use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Environment variable holding model search directories
pub const MODEL_PATH_ENV: &str = "LANGPICK_MODEL_PATH";

/// Default bound on a single probe
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(3);

/// Metadata file expected inside every installed model directory
pub const META_FILE: &str = "meta.json";

/// Result of probing a single model
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The model can be loaded
    Available,
    /// The model is not installed
    NotFound,
    /// The model exists but could not be confirmed (corrupt, unreadable, timed out)
    Failed(String),
}

impl ProbeOutcome {
    pub fn is_available(&self) -> bool {
        matches!(self, ProbeOutcome::Available)
    }
}

/// Capability to check whether a model identifier is usable
pub trait ModelProbe: Send + Sync {
    /// Probe a model and report what happened
    fn probe(&self, model_id: &str) -> ProbeOutcome;

    /// Probe a model and log the outcome
    ///
    /// A missing model is logged as a warning, any other failure as an error.
    fn is_available(&self, model_id: &str) -> bool {
        match self.probe(model_id) {
            ProbeOutcome::Available => {
                log::info!("Model '{model_id}' is available");
                true
            }
            ProbeOutcome::NotFound => {
                log::warn!("Model '{model_id}' is not available");
                false
            }
            ProbeOutcome::Failed(reason) => {
                log::error!("Error validating model '{model_id}': {reason}");
                false
            }
        }
    }
}

impl<F> ModelProbe for F
where
    F: Fn(&str) -> ProbeOutcome + Send + Sync,
{
    fn probe(&self, model_id: &str) -> ProbeOutcome {
        self(model_id)
    }
}

/// Probe backed by a fixed set of model identifiers
#[derive(Debug, Clone, Default)]
pub struct StaticProbe {
    available: BTreeSet<String>,
}

impl StaticProbe {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            available: ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Probe for which nothing is available
    pub fn none() -> Self {
        Self::default()
    }
}

impl ModelProbe for StaticProbe {
    fn probe(&self, model_id: &str) -> ProbeOutcome {
        if self.available.contains(model_id) {
            ProbeOutcome::Available
        } else {
            ProbeOutcome::NotFound
        }
    }
}

/// Subset of an installed model's `meta.json`
#[derive(Debug, Deserialize)]
struct ModelMeta {
    lang: String,
    name: String,
}

/// Probe that looks for installed model packages under search directories
///
/// A model `en_core_web_lg` is present when some root contains
/// `en_core_web_lg/meta.json` whose `lang` and `name` spell the same id.
#[derive(Debug, Clone, Default)]
pub struct DirectoryProbe {
    roots: Vec<PathBuf>,
}

impl DirectoryProbe {
    pub fn new<I, P>(roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            roots: roots.into_iter().map(Into::into).collect(),
        }
    }

    /// Build from the `LANGPICK_MODEL_PATH` environment variable
    pub fn from_env() -> Self {
        let roots = std::env::var_os(MODEL_PATH_ENV)
            .map(|paths| std::env::split_paths(&paths).collect())
            .unwrap_or_default();
        Self { roots }
    }

    fn check_model_dir(dir: &Path, model_id: &str) -> ProbeOutcome {
        let meta_path = dir.join(META_FILE);
        let content = match fs::read_to_string(&meta_path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return ProbeOutcome::Failed(format!("missing {}", meta_path.display()));
            }
            Err(e) => {
                return ProbeOutcome::Failed(format!("cannot read {}: {e}", meta_path.display()));
            }
        };

        let meta: ModelMeta = match serde_json::from_str(&content) {
            Ok(meta) => meta,
            Err(e) => {
                return ProbeOutcome::Failed(format!("malformed {}: {e}", meta_path.display()));
            }
        };

        let described = format!("{}_{}", meta.lang, meta.name);
        if described != model_id {
            return ProbeOutcome::Failed(format!(
                "{} describes '{described}'",
                meta_path.display()
            ));
        }

        ProbeOutcome::Available
    }
}

impl ModelProbe for DirectoryProbe {
    fn probe(&self, model_id: &str) -> ProbeOutcome {
        if model_id.is_empty()
            || model_id.contains(['/', '\\'])
            || model_id == "."
            || model_id == ".."
        {
            return ProbeOutcome::Failed(format!("invalid model identifier '{model_id}'"));
        }

        for root in &self.roots {
            let dir = root.join(model_id);
            match fs::metadata(&dir) {
                Ok(meta) if meta.is_dir() => return Self::check_model_dir(&dir, model_id),
                Ok(_) => {
                    return ProbeOutcome::Failed(format!("{} is not a directory", dir.display()))
                }
                Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
                Err(e) => {
                    return ProbeOutcome::Failed(format!("cannot access {}: {e}", dir.display()))
                }
            }
        }

        ProbeOutcome::NotFound
    }
}

/// Runs another probe on a helper thread and gives up after a timeout
///
/// An overrun is reported as [`ProbeOutcome::Failed`]. The helper thread is
/// left to finish on its own.
#[derive(Debug)]
pub struct TimeoutProbe<P> {
    inner: Arc<P>,
    timeout: Duration,
}

impl<P: ModelProbe + 'static> TimeoutProbe<P> {
    pub fn new(inner: P, timeout: Duration) -> Self {
        Self {
            inner: Arc::new(inner),
            timeout,
        }
    }

    pub fn with_default_timeout(inner: P) -> Self {
        Self::new(inner, DEFAULT_PROBE_TIMEOUT)
    }
}

impl<P: ModelProbe + 'static> ModelProbe for TimeoutProbe<P> {
    fn probe(&self, model_id: &str) -> ProbeOutcome {
        let (tx, rx) = mpsc::channel();
        let inner = Arc::clone(&self.inner);
        let id = model_id.to_string();

        let spawned = thread::Builder::new()
            .name("langpick-probe".to_string())
            .spawn(move || {
                // Receiver may already be gone after a timeout
                let _ = tx.send(inner.probe(&id));
            });
        if let Err(e) = spawned {
            return ProbeOutcome::Failed(format!("failed to spawn probe thread: {e}"));
        }

        match rx.recv_timeout(self.timeout) {
            Ok(outcome) => outcome,
            Err(RecvTimeoutError::Timeout) => ProbeOutcome::Failed(format!(
                "probe timed out after {} ms",
                self.timeout.as_millis()
            )),
            Err(RecvTimeoutError::Disconnected) => {
                ProbeOutcome::Failed("probe exited without a result".to_string())
            }
        }
    }
}
