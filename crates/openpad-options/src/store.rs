//! Dirty-checked options persistence
//!
//! `OptionsStore` is the only component that touches the backing medium.
//! It remembers the bytes it last observed on the medium and, on commit,
//! writes only the fields whose encoding differs, followed by a single flush.

use crate::{
    Configuration, ERASED_BYTE, Field, OptionsBackend, RECORD_LEN, Record, StorageResult,
    decode_record,
};
use tracing::{debug, warn};

/// What a [`OptionsStore::commit`] call did to the medium.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CommitOutcome {
    pub fields_written: usize,
    pub flushed: bool,
}

impl CommitOutcome {
    pub fn is_noop(&self) -> bool {
        self.fields_written == 0 && !self.flushed
    }
}

#[derive(Debug)]
pub struct OptionsStore<B: OptionsBackend> {
    backend: B,
    defaults: Configuration,
    observed: Option<Record>,
    flush_pending: bool,
}

impl<B: OptionsBackend> OptionsStore<B> {
    pub fn new(backend: B) -> Self {
        Self::with_defaults(backend, Configuration::default())
    }

    /// Uses `defaults` in place of the compiled-in defaults for fields that
    /// are missing or invalid on the medium.
    pub fn with_defaults(backend: B, defaults: Configuration) -> Self {
        Self {
            backend,
            defaults,
            observed: None,
            flush_pending: false,
        }
    }

    pub fn defaults(&self) -> &Configuration {
        &self.defaults
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Reads and validates the stored configuration.
    ///
    /// Never fails: a read error is treated as erased media, and every field
    /// holding an out-of-range value is replaced by its default.
    pub fn load(&mut self) -> Configuration {
        let record = self.read_record();
        self.observed = Some(record);

        let (config, defaulted) = decode_record(&record, &self.defaults);
        for field in &defaulted {
            warn!(
                field = ?field,
                raw = field.read(&record),
                "Stored option out of range, using default"
            );
        }
        debug!(?config, defaulted = defaulted.len(), "Loaded options");
        config
    }

    /// Writes the fields of `config` that differ from the medium, then
    /// flushes once if anything was written.
    ///
    /// # Errors
    ///
    /// Returns the first backend error. Fields written before the error are
    /// remembered, and the pending flush is retried on the next commit.
    pub fn commit(&mut self, config: &Configuration) -> StorageResult<CommitOutcome> {
        let mut observed = match self.observed {
            Some(record) => record,
            None => self.read_record(),
        };
        self.observed = Some(observed);

        let mut outcome = CommitOutcome::default();
        for field in Field::ALL {
            let raw = field.encode(config);
            if field.read(&observed) == raw {
                continue;
            }
            self.backend.write(field.offset(), &[raw])?;
            field.store(&mut observed, raw);
            self.observed = Some(observed);
            self.flush_pending = true;
            outcome.fields_written = outcome.fields_written.saturating_add(1);
        }

        if self.flush_pending {
            self.backend.flush()?;
            self.flush_pending = false;
            outcome.flushed = true;
            debug!(fields = outcome.fields_written, "Committed options");
        }
        Ok(outcome)
    }

    /// The configuration currently on the medium as last observed, if any.
    pub fn stored(&self) -> Option<Configuration> {
        self.observed
            .as_ref()
            .map(|record| decode_record(record, &self.defaults).0)
    }

    fn read_record(&mut self) -> Record {
        let mut record = [ERASED_BYTE; RECORD_LEN];
        if let Err(e) = self.backend.read(0, &mut record) {
            warn!(error = %e, "Options read failed, treating medium as erased");
            return [ERASED_BYTE; RECORD_LEN];
        }
        record
    }
}
