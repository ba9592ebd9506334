//! Freeze kinds and their stable wire codes

use serde::{Deserialize, Serialize};

/// The kind of maintenance freeze being scheduled.
///
/// Wire codes are stable; codes this build does not know decode to
/// [`FreezeType::UnknownFreezeType`] so newer peers stay readable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub enum FreezeType {
    /// Placeholder for an unset or unrecognized freeze kind.
    #[default]
    UnknownFreezeType,

    /// Freeze the network at the scheduled time, no upgrade performed.
    FreezeOnly,

    /// Stage an upgrade without freezing; the network keeps running.
    PrepareUpgrade,

    /// Freeze at the scheduled time and perform the staged upgrade.
    FreezeUpgrade,

    /// Abort a pending freeze or upgrade.
    FreezeAbort,

    /// Upgrade auxiliary telemetry services without freezing.
    TelemetryUpgrade,
}

impl FreezeType {
    /// The stable wire code for this kind.
    pub const fn code(self) -> u32 {
        match self {
            Self::UnknownFreezeType => 0,
            Self::FreezeOnly => 1,
            Self::PrepareUpgrade => 2,
            Self::FreezeUpgrade => 3,
            Self::FreezeAbort => 4,
            Self::TelemetryUpgrade => 5,
        }
    }
}

impl From<u32> for FreezeType {
    fn from(code: u32) -> Self {
        match code {
            1 => Self::FreezeOnly,
            2 => Self::PrepareUpgrade,
            3 => Self::FreezeUpgrade,
            4 => Self::FreezeAbort,
            5 => Self::TelemetryUpgrade,
            _ => Self::UnknownFreezeType,
        }
    }
}

impl From<FreezeType> for u32 {
    fn from(freeze_type: FreezeType) -> Self {
        freeze_type.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for freeze_type in [
            FreezeType::UnknownFreezeType,
            FreezeType::FreezeOnly,
            FreezeType::PrepareUpgrade,
            FreezeType::FreezeUpgrade,
            FreezeType::FreezeAbort,
            FreezeType::TelemetryUpgrade,
        ] {
            assert_eq!(FreezeType::from(freeze_type.code()), freeze_type);
        }
    }

    #[test]
    fn unknown_codes_decode_to_unknown() {
        assert_eq!(FreezeType::from(6), FreezeType::UnknownFreezeType);
        assert_eq!(FreezeType::from(u32::MAX), FreezeType::UnknownFreezeType);
    }
}
