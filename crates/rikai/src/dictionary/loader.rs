//! Dictionary Loading Module
//!
//! Reads the six flat data files from the data directory into a [`DictionarySnapshot`].
//! Each file is retried with a growing timeout and an exponential backoff.
//! The first successful load is cached; later calls share the same snapshot.

use std::fmt;
use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::{debug, error, info, warn};

use super::snapshot::{DataFile, DictionarySnapshot};
use crate::config::LoaderConfig;
use crate::errors::LoaderError;

/// Loader for the dictionary data files
pub struct DictionaryLoader {
  /// Data directory and retry settings
  config: LoaderConfig,

  /// Loaded snapshot (initialized by the first successful load)
  /// A failed load is not cached, so the next call tries again
  snapshot: OnceCell<Arc<DictionarySnapshot>>,
}

impl DictionaryLoader {
  /// Constructor for DictionaryLoader
  pub fn new(config: LoaderConfig) -> Self {
    Self {
      config,
      snapshot: OnceCell::new(),
    }
  }

  /// Load dictionary data
  /// - Reads every data file on the first call
  /// - Returns a clone of the shared `Arc<DictionarySnapshot>` afterwards
  /// - Concurrent callers wait on the same in-flight load
  pub async fn load(&self) -> Result<Arc<DictionarySnapshot>, LoaderError> {
    self.snapshot.get_or_try_init(|| async { self.load_inner().await.map(Arc::new) }).await.cloned()
  }

  /// Returns the snapshot if a load has already completed
  pub fn get(&self) -> Option<Arc<DictionarySnapshot>> {
    self.snapshot.get().cloned()
  }

  /// Whether a load has completed
  pub fn is_loaded(&self) -> bool {
    self.snapshot.initialized()
  }

  /// Reads all files in two batches of three to limit contention
  async fn load_inner(&self) -> Result<DictionarySnapshot, LoaderError> {
    info!(data_dir = %self.config.data_dir.display(), "Start loading dictionary data");

    let (word_dict, word_index, name_dict) = tokio::try_join!(
      self.read_file(DataFile::WordDict),
      self.read_file(DataFile::WordIndex),
      self.read_file(DataFile::NameDict),
    )?;

    let (name_index, kanji_data, radical_text) = tokio::try_join!(
      self.read_file(DataFile::NameIndex),
      self.read_file(DataFile::KanjiData),
      self.read_file(DataFile::Radicals),
    )?;

    let snapshot = DictionarySnapshot {
      word_dict,
      word_index,
      name_dict,
      name_index,
      kanji_data,
      radicals: DictionarySnapshot::radical_rows(&radical_text),
    };

    info!(snapshot = ?snapshot, "Dictionary data loaded");
    Ok(snapshot)
  }

  /// Reads one file, retrying up to `max_attempts` times
  async fn read_file(&self, file: DataFile) -> Result<String, LoaderError> {
    let path = self.config.data_dir.join(file.file_name());
    let max_attempts = self.config.max_attempts.max(1);
    let mut attempt = 0;

    loop {
      attempt += 1;
      let timeout = self.config.timeout_for_attempt(attempt);
      debug!(%file, attempt, timeout_ms = timeout.as_millis() as u64, "Loading data file");

      let failure = match tokio::time::timeout(timeout, tokio::fs::read_to_string(&path)).await {
        Ok(Ok(text)) => {
          debug!(%file, attempt, bytes = text.len(), "Loaded data file");
          return Ok(text);
        }
        Ok(Err(e)) => LoaderError::Io {
          file,
          path: path.clone(),
          attempts: attempt,
          source: Arc::new(e),
        },
        Err(_) => LoaderError::Timeout {
          file,
          path: path.clone(),
          attempts: attempt,
        },
      };

      if attempt >= max_attempts {
        error!(%file, attempts = attempt, error = %failure, "Failed to load data file");
        return Err(failure);
      }

      let wait = self.config.backoff_after_attempt(attempt);
      warn!(
        %file,
        attempt,
        wait_ms = wait.as_millis() as u64,
        error = %failure,
        "Failed to load data file. Trying again"
      );
      tokio::time::sleep(wait).await;
    }
  }
}

/// Manual `Debug` implementation for `DictionaryLoader`
///
/// Shows only whether a snapshot is loaded, never the blobs themselves.
impl fmt::Debug for DictionaryLoader {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("DictionaryLoader")
      .field("config", &self.config)
      .field("loaded", &self.is_loaded())
      .finish()
  }
}
