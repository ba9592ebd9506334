//! The freeze transaction body and its wire mapping

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::{FileId, FreezeError, FreezeType, Timestamp};

/// Body of a freeze maintenance transaction.
///
/// Carries the freeze kind, an optional reference to the staged upgrade
/// file with the expected hash of its contents, and an optional scheduled
/// start time. Encoding and decoding obey the round-trip law
/// `from_wire_body(to_wire_body(x)) == x` for every valid body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreezeTransaction {
    freeze_type: FreezeType,
    update_file: Option<FileId>,
    file_hash: Bytes,
    start_time: Option<Timestamp>,
}

impl FreezeTransaction {
    /// Empty body with an unknown freeze kind.
    pub fn new() -> Self {
        Self::default()
    }

    /// The freeze kind.
    pub fn freeze_type(&self) -> FreezeType {
        self.freeze_type
    }

    /// Assign the freeze kind.
    pub fn set_freeze_type(&mut self, freeze_type: FreezeType) -> &mut Self {
        self.freeze_type = freeze_type;
        self
    }

    /// The staged upgrade file, if any.
    pub fn update_file(&self) -> Option<FileId> {
        self.update_file
    }

    /// Assign the staged upgrade file.
    pub fn set_update_file(&mut self, file_id: FileId) -> &mut Self {
        self.update_file = Some(file_id);
        self
    }

    /// Expected hash of the upgrade file's contents.
    pub fn file_hash(&self) -> Bytes {
        self.file_hash.clone()
    }

    /// Assign the expected hash of the upgrade file's contents.
    pub fn set_file_hash(&mut self, file_hash: impl Into<Bytes>) -> &mut Self {
        self.file_hash = file_hash.into();
        self
    }

    /// Scheduled start time, if any.
    pub fn start_time(&self) -> Option<Timestamp> {
        self.start_time
    }

    /// Assign the scheduled start time.
    pub fn set_start_time(&mut self, start_time: Timestamp) -> &mut Self {
        self.start_time = Some(start_time);
        self
    }

    /// Encode this body to its fixed-field wire form.
    pub fn to_wire_body(&self) -> Result<Bytes, FreezeError> {
        let mut buffer = Vec::new();
        ciborium::into_writer(self, &mut buffer)
            .map_err(|error| FreezeError::Encode(error.to_string()))?;
        Ok(Bytes::from(buffer))
    }

    /// Decode a body from its wire form.
    pub fn from_wire_body(body: &[u8]) -> Result<Self, FreezeError> {
        ciborium::from_reader::<Self, _>(body)
            .map_err(|error| FreezeError::Decode(error.to_string()))
    }
}
