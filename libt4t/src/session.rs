// libt4t-rs/libt4t/src/session.rs

use derive_more::Display;
use log::{debug, info, warn};

use crate::config::TagConfig;
use crate::constants::NDEF_RECORD_ID;
use crate::ndef::NdefTextRecord;
use crate::protocol::{
    CapabilityContainer, CommandKind, classify, compose_data, compose_error, compose_nlen,
    compose_ok,
};
use crate::store::{ContentSource, NotificationSink};
use crate::utils::hex::Hex;
use crate::{Error, Result};

/// Mutable protocol state of one emulation session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionState {
    /// Set by a Capability Container read, cleared once the NDEF data has
    /// been delivered. While set, the CC read bytes are served as NDEF data.
    pub read_capability_container_pending: bool,
}

/// Where the reader is in the Mapping Version 2.0 command flow.
///
/// Informational only: commands are answered by their bytes, never rejected
/// for arriving out of sequence.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Display)]
pub enum SessionPhase {
    /// Activated, nothing selected yet
    #[default]
    Idle,
    /// NDEF Tag Application selected
    AppSelected,
    /// Capability Container file selected
    CcSelected,
    /// Capability Container delivered
    CcRead,
    /// NDEF file selected
    NdefSelected,
    /// NLEN delivered
    NlenRead,
    /// NDEF data delivered; terminal until deactivation
    DataRead,
}

impl SessionPhase {
    fn after(self, kind: CommandKind) -> Self {
        match kind {
            CommandKind::SelectApplication => Self::AppSelected,
            CommandKind::SelectCapabilityContainer => Self::CcSelected,
            CommandKind::ReadCapabilityContainer => Self::CcRead,
            CommandKind::SelectNdefFile => Self::NdefSelected,
            CommandKind::ReadBinaryNlen => Self::NlenRead,
            CommandKind::ReadBinaryData { .. } => Self::DataRead,
            CommandKind::Unknown => self,
        }
    }
}

/// Last text seen from the content source and the record built from it.
#[derive(Debug, Default, Clone)]
pub struct CachedContent {
    text: Option<String>,
    record: Option<NdefTextRecord>,
}

impl CachedContent {
    /// True when a record for exactly `text` is cached.
    pub fn is_current(&self, text: &str) -> bool {
        self.text.as_deref() == Some(text) && self.record.is_some()
    }

    /// Cache `record` as the encoding of `text`.
    pub fn replace(&mut self, text: String, record: NdefTextRecord) {
        self.text = Some(text);
        self.record = Some(record);
    }

    /// Cached record, if any.
    pub fn record(&self) -> Option<&NdefTextRecord> {
        self.record.as_ref()
    }

    /// Forget the cached text and record.
    pub fn clear(&mut self) {
        self.text = None;
        self.record = None;
    }
}

/// One emulation session, from tag activation to deactivation.
///
/// Owns the session state and the content cache; the content source and the
/// notification sink are borrowed per frame.
#[derive(Debug, Clone)]
pub struct Session {
    config: TagConfig,
    capability_container: CapabilityContainer,
    state: SessionState,
    phase: SessionPhase,
    cache: CachedContent,
}

impl Session {
    /// Validate `config` and start an idle session.
    pub fn new(config: TagConfig) -> Result<Self> {
        config.validate()?;
        let capability_container = CapabilityContainer::from_config(&config);
        Ok(Self {
            config,
            capability_container,
            state: SessionState::default(),
            phase: SessionPhase::default(),
            cache: CachedContent::default(),
        })
    }

    /// Configuration the session was built with.
    pub fn config(&self) -> &TagConfig {
        &self.config
    }

    /// Current guard state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Last phase reached in the read flow.
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Record served by the last NDEF-bearing response.
    pub fn cached_record(&self) -> Option<&NdefTextRecord> {
        self.cache.record()
    }

    /// Discard the session state, as on tag deactivation.
    pub fn reset(&mut self) {
        self.state = SessionState::default();
        self.phase = SessionPhase::Idle;
        self.cache.clear();
    }

    /// Answer one command APDU. Always returns a well-formed response ending
    /// in a status word.
    pub fn process<C, N>(&mut self, frame: &[u8], content: &C, notifier: &mut N) -> Vec<u8>
    where
        C: ContentSource + ?Sized,
        N: NotificationSink + ?Sized,
    {
        let kind = classify(frame, &mut self.state.read_capability_container_pending);
        info!("{} <- {}", kind, Hex(frame));

        let Session {
            config,
            capability_container,
            state,
            cache,
            ..
        } = self;

        let response = match kind {
            CommandKind::SelectApplication
            | CommandKind::SelectCapabilityContainer
            | CommandKind::SelectNdefFile => compose_ok(),
            CommandKind::ReadCapabilityContainer => {
                match refresh(cache, config, content, notifier) {
                    Some(_) => capability_container.response(),
                    None => compose_error(),
                }
            }
            CommandKind::ReadBinaryNlen => {
                match refresh(cache, config, content, notifier) {
                    Some(record) => compose_nlen(record),
                    None => compose_error(),
                }
            }
            CommandKind::ReadBinaryData { offset, length } => {
                match refresh(cache, config, content, notifier) {
                    Some(record) => compose_data(
                        record,
                        offset,
                        length,
                        &mut state.read_capability_container_pending,
                        || notifier.notify_success(),
                    ),
                    None => compose_error(),
                }
            }
            CommandKind::Unknown => {
                warn!("unrecognized command: {}", Hex(frame));
                compose_error()
            }
        };

        let next = self.phase.after(kind);
        if next != self.phase {
            debug!("session phase {} -> {}", self.phase, next);
            self.phase = next;
        }

        info!("{} -> {}", kind, Hex(&response));
        response
    }
}

/// Bring the cache in line with the content source. None means no record
/// can be served; the reason has already been sent to `notifier`.
///
/// Only records whose file image fits `config.max_ndef_size` are cached.
fn refresh<'a, C, N>(
    cache: &'a mut CachedContent,
    config: &TagConfig,
    content: &C,
    notifier: &mut N,
) -> Option<&'a NdefTextRecord>
where
    C: ContentSource + ?Sized,
    N: NotificationSink + ?Sized,
{
    let Some(text) = content.current_text() else {
        warn!("no card content configured");
        cache.clear();
        notifier.notify_error(&Error::ContentUnavailable.to_string());
        return None;
    };

    if !cache.is_current(&text) {
        let encoded = NdefTextRecord::encode(&config.language, &text, NDEF_RECORD_ID)
            .and_then(|record| fit_file(record, config.max_ndef_size));
        match encoded {
            Ok(record) => {
                debug!(
                    "content changed, rebuilt record (nlen={})",
                    record.nlen_value()
                );
                cache.replace(text, record);
            }
            Err(e) => {
                warn!("cannot encode card content: {}", e);
                cache.clear();
                notifier.notify_error(&e.to_string());
                return None;
            }
        }
    }

    cache.record()
}

fn fit_file(record: NdefTextRecord, max_ndef_size: u16) -> Result<NdefTextRecord> {
    let size = record.file_image().len();
    if size > max_ndef_size as usize {
        return Err(Error::RecordTooLarge {
            max: max_ndef_size as usize,
            actual: size,
        });
    }
    Ok(record)
}
