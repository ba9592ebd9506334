//! Target-file reference for staged upgrades

use std::fmt;

use serde::{Deserialize, Serialize};

/// Reference to a file stored on the ledger, `shard.realm.num`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileId {
    /// The shard the file lives in.
    pub shard: u64,
    /// The realm within the shard.
    pub realm: u64,
    /// The file number within the realm.
    pub num: u64,
}

impl FileId {
    /// File reference in shard 0, realm 0.
    pub const fn new(num: u64) -> Self {
        Self {
            shard: 0,
            realm: 0,
            num,
        }
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.shard, self.realm, self.num)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_dotted_form() {
        assert_eq!(FileId::new(150).to_string(), "0.0.150");
    }
}
