//! File-level entry point: read both versions, compute the delta, optionally persist it.

use crate::{
    compute_delta,
    error::{Error, Result, Signal},
    types::{Config, Decoding, Delta},
};

use futures::{StreamExt, stream::FuturesUnordered};
use std::path::{Path, PathBuf};
use tokio::{fs, io::AsyncWriteExt};

/// Result of a successful `build`.
#[derive(Clone, Debug)]
pub struct Built {
    pub delta: Delta,
    /// `delta` in wire form.
    pub json: String,
    /// Set when the delta was persisted to `Config::output`.
    pub written: Option<PathBuf>,
}

/// Compute the delta between the files at `old` and `new`.
///
/// Missing inputs are reported before anything is read. The computation
/// itself runs as one blocking unit on tokio's blocking pool. When
/// `cfg.output` is set the JSON is written there, parent directories
/// included; a failed write still hands back the serialized delta inside
/// [`Error::Write`]. Nothing is retried.
pub async fn build(old: impl AsRef<Path>, new: impl AsRef<Path>, cfg: &Config) -> Result<Built> {
    let (old, new) = (old.as_ref(), new.as_ref());
    if !exists(old).await {
        return Err(Error::OldMissing(old.to_path_buf()));
    }
    if !exists(new).await {
        return Err(Error::NewMissing(new.to_path_buf()));
    }
    cfg.validate()?;

    let old_text = read_text(old, cfg.decoding).await?;
    let new_text = read_text(new, cfg.decoding).await?;
    let task_cfg = cfg.clone();
    let delta =
        tokio::task::spawn_blocking(move || compute_delta(&old_text, &new_text, &task_cfg))
            .await??;
    let json = delta.to_json()?;

    let written = match &cfg.output {
        Some(path) => {
            if let Err(source) = persist(path, &json).await {
                tracing::warn!(?path, %source, "failed to write delta");
                return Err(Error::Write {
                    path: path.clone(),
                    payload: json,
                    source,
                });
            }
            tracing::info!(?path, bytes = json.len(), "delta written");
            Some(path.clone())
        }
        None => None,
    };

    Ok(Built {
        delta,
        json,
        written,
    })
}

/// One input pair for [`build_many`].
#[derive(Clone, Debug)]
pub struct Job {
    pub old: PathBuf,
    pub new: PathBuf,
    pub config: Config,
}

/// Run independent builds with at most `limit` in flight.
///
/// Results come back in job order.
pub async fn build_many(jobs: Vec<Job>, limit: usize) -> Vec<Result<Built>> {
    let limit = limit.max(1);
    let mut results: Vec<Option<Result<Built>>> = (0..jobs.len()).map(|_| None).collect();
    let mut queued = jobs.into_iter().enumerate();
    let mut in_flight = FuturesUnordered::new();

    loop {
        while in_flight.len() < limit {
            match queued.next() {
                Some((i, job)) => in_flight.push(async move {
                    let res = build(&job.old, &job.new, &job.config).await;
                    (i, res)
                }),
                None => break,
            }
        }
        match in_flight.next().await {
            Some((i, res)) => results[i] = Some(res),
            None => break,
        }
    }

    results.into_iter().flatten().collect()
}

/// Flat `{status, signal, message}` view of a build.
///
/// On success `message` is the serialized delta, otherwise the error text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub status: bool,
    pub signal: Signal,
    pub message: String,
}

impl From<Result<Built>> for Outcome {
    fn from(res: Result<Built>) -> Self {
        match res {
            Ok(built) => Outcome {
                status: true,
                signal: Signal::Success,
                message: built.json,
            },
            Err(e) => Outcome {
                status: false,
                signal: e.signal(),
                message: e.to_string(),
            },
        }
    }
}

async fn exists(path: &Path) -> bool {
    !path.as_os_str().is_empty() && fs::try_exists(path).await.unwrap_or(false)
}

async fn read_text(path: &Path, decoding: Decoding) -> Result<String> {
    let bytes = fs::read(path).await?;
    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(source) => match decoding {
            Decoding::Utf8 => Err(Error::Decode {
                path: path.to_path_buf(),
                source,
            }),
            Decoding::Utf8Lossy => Ok(String::from_utf8_lossy(source.as_bytes()).into_owned()),
        },
    }
}

async fn persist(path: &Path, json: &str) -> std::io::Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).await?;
    }
    let mut file = fs::File::create(path).await?;
    file.write_all(json.as_bytes()).await?;
    file.flush().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_from_error() {
        let outcome = Outcome::from(Err(Error::NewMissing("v2.js".into())));
        assert!(!outcome.status);
        assert_eq!(outcome.signal, Signal::NewMissing);
        assert!(outcome.message.contains("v2.js"));
    }

    #[test]
    fn outcome_from_success() {
        let built = Built {
            delta: Delta::unmodified(12),
            json: r#"{"modify":false,"chunkSize":12,"data":[]}"#.into(),
            written: None,
        };
        let outcome = Outcome::from(Ok(built));
        assert!(outcome.status);
        assert_eq!(outcome.signal.code(), 10);
        assert_eq!(outcome.message, r#"{"modify":false,"chunkSize":12,"data":[]}"#);
    }

    #[tokio::test]
    async fn empty_path_is_missing() {
        let err = build("", "", &Config::default()).await.unwrap_err();
        assert_eq!(err.signal(), Signal::OldMissing);
    }
}
