//! Paste storage backed by a flat data directory.
//!
//! Each paste is one file named `{id}-{language}-{expiration}` whose body is
//! the escaped content. There is no index: lookups list the directory and
//! decode the matching file name.

/// Record file-name codec.
pub mod record;

#[cfg(test)]
mod tests;

use crate::error::AppError;
use crate::models::{language::Language, paste::Paste};
use crate::naming::{generate_unique_id, is_valid_id};
use rand::Rng;
use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use self::record::{id_prefix, RecordCodec, RecordName};

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

fn record_open_options(exclusive: bool) -> OpenOptions {
    let mut options = OpenOptions::new();
    options.write(true);
    if exclusive {
        options.create_new(true);
    } else {
        options.create(true).truncate(true);
    }
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    options
}

fn write_body(file: &mut File, body: &[u8]) -> std::io::Result<()> {
    file.write_all(body)?;
    file.sync_all()
}

/// File-backed paste store rooted at a data directory.
pub struct PasteStore {
    dir: PathBuf,
    id_length: usize,
    codec: RecordCodec,
    // Serializes id allocation in `create` within this process.
    create_lock: Mutex<()>,
}

impl PasteStore {
    /// Open a store, creating the data directory if it does not exist.
    ///
    /// # Arguments
    /// - `dir`: Data directory holding record files.
    /// - `id_length`: Length of identifiers handled by this store.
    ///
    /// # Errors
    /// Returns [`AppError::Storage`] when the directory cannot be created.
    pub fn open(dir: impl AsRef<Path>, id_length: usize) -> Result<Self, AppError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        tracing::debug!("Paste store opened at {}", dir.display());
        Ok(Self {
            dir,
            id_length,
            codec: RecordCodec::new(id_length)?,
            create_lock: Mutex::new(()),
        })
    }

    /// Data directory backing this store.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Identifier length handled by this store.
    pub fn id_length(&self) -> usize {
        self.id_length
    }

    fn record_path(&self, paste: &Paste) -> PathBuf {
        self.dir.join(RecordName::for_paste(paste).encode())
    }

    fn validate_for_write(&self, paste: &Paste) -> Result<(), AppError> {
        if !is_valid_id(&paste.id, self.id_length) {
            return Err(AppError::BadRequest(format!(
                "Paste id '{}' is not {} alphanumeric characters",
                paste.id, self.id_length
            )));
        }
        if paste.expiration < 0 {
            return Err(AppError::BadRequest(format!(
                "Paste expiration {} is negative",
                paste.expiration
            )));
        }
        Ok(())
    }

    /// Write `paste` under its record name, replacing any file of that name.
    ///
    /// The body is written to a hidden temporary file and renamed into place,
    /// so readers never observe a partial body. A paste saved again under the
    /// same id but a different language or expiration leaves the earlier
    /// record in place next to the new one.
    ///
    /// # Errors
    /// Returns [`AppError::BadRequest`] for an id or expiration that cannot be
    /// encoded, and [`AppError::Storage`] when the filesystem rejects the write.
    pub fn save(&self, paste: &Paste) -> Result<(), AppError> {
        self.validate_for_write(paste)?;
        let target = self.record_path(paste);
        let temp = self.dir.join(format!(
            ".{}.{}.{}.tmp",
            RecordName::for_paste(paste).encode(),
            std::process::id(),
            TEMP_COUNTER.fetch_add(1, Ordering::Relaxed)
        ));

        let result = record_open_options(true)
            .open(&temp)
            .and_then(|mut file| write_body(&mut file, paste.content.as_bytes()))
            .and_then(|()| fs::rename(&temp, &target));
        if let Err(err) = result {
            let _ = fs::remove_file(&temp);
            return Err(err.into());
        }

        tracing::debug!("Saved paste record {}", target.display());
        Ok(())
    }

    /// Store a new paste under a freshly allocated, unused identifier.
    ///
    /// Candidates already present on disk are skipped, and the record is
    /// written with exclusive create, so an existing paste is never
    /// overwritten.
    ///
    /// # Arguments
    /// - `rng`: Random source for identifier generation.
    /// - `language`: Resolved language tag.
    /// - `expiration`: Absolute expiration timestamp.
    /// - `raw`: Submitted text; escaped before storage.
    ///
    /// # Returns
    /// The stored [`Paste`].
    ///
    /// # Errors
    /// Returns [`AppError::IdSpaceExhausted`] when no unused id is found, and
    /// [`AppError::Storage`] for filesystem failures (including an
    /// `AlreadyExists` conflict with another writer).
    pub fn create<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        language: Language,
        expiration: i64,
        raw: &str,
    ) -> Result<Paste, AppError> {
        let _guard = self
            .create_lock
            .lock()
            .map_err(|_| AppError::Internal("paste create lock poisoned".to_string()))?;

        let id = generate_unique_id(rng, self.id_length, |candidate| {
            self.contains_id(candidate)
        })?;
        let paste = Paste::from_submission(id, language, expiration, raw);
        self.validate_for_write(&paste)?;

        let path = self.record_path(&paste);
        let mut file = record_open_options(true).open(&path).map_err(|err| {
            if err.kind() == ErrorKind::AlreadyExists {
                tracing::warn!("Paste record {} appeared concurrently", path.display());
            }
            err
        })?;
        if let Err(err) = write_body(&mut file, paste.content.as_bytes()) {
            drop(file);
            let _ = fs::remove_file(&path);
            return Err(err.into());
        }

        tracing::debug!("Created paste record {}", path.display());
        Ok(paste)
    }

    /// Whether any record file exists for `id`.
    ///
    /// # Errors
    /// Returns [`AppError::Storage`] when the directory cannot be listed.
    pub fn contains_id(&self, id: &str) -> Result<bool, AppError> {
        Ok(!self.matching_file_names(id)?.is_empty())
    }

    /// Load the paste stored under `id`.
    ///
    /// When several records share the id, the one whose file name sorts first
    /// is returned.
    ///
    /// # Errors
    /// - [`AppError::NotFound`] when `id` is not a valid identifier or no
    ///   record exists for it.
    /// - [`AppError::MalformedRecord`] when the matching file name does not
    ///   decode or the body is not UTF-8.
    /// - [`AppError::Storage`] for other I/O failures.
    pub fn load(&self, id: &str) -> Result<Paste, AppError> {
        if !is_valid_id(id, self.id_length) {
            return Err(AppError::NotFound);
        }

        let mut names = self.matching_file_names(id)?;
        names.sort();
        let Some(file_name) = names.first() else {
            return Err(AppError::NotFound);
        };
        if names.len() > 1 {
            tracing::warn!(
                "Paste id '{}' has {} records; using {}",
                id,
                names.len(),
                file_name
            );
        }

        let record = self.codec.decode(file_name)?;
        let body = match fs::read(self.dir.join(file_name)) {
            Ok(body) => body,
            Err(err) if err.kind() == ErrorKind::NotFound => return Err(AppError::NotFound),
            Err(err) => return Err(err.into()),
        };
        let content = String::from_utf8(body).map_err(|err| {
            AppError::MalformedRecord(format!("record '{}' is not UTF-8: {}", file_name, err))
        })?;

        let language = Language::from_tag(&record.language).unwrap_or_else(|| {
            tracing::debug!(
                "Record '{}' has unsupported language '{}'; using text",
                file_name,
                record.language
            );
            Language::Text
        });

        Ok(Paste {
            id: record.id,
            language,
            expiration: record.expiration,
            content,
        })
    }

    fn matching_file_names(&self, id: &str) -> Result<Vec<String>, AppError> {
        let prefix = id_prefix(id);
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            let Ok(name) = entry.file_name().into_string() else {
                continue;
            };
            if name.starts_with(&prefix) && entry.file_type()?.is_file() {
                names.push(name);
            }
        }
        Ok(names)
    }
}
