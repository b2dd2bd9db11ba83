// Key point:
// Serializable
// Comparable
// Explicit defaults
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CodecConfig {
    /// Upper bound on the decoded name length in bytes. `None` accepts
    /// anything the wire format can carry.
    pub max_name_bytes: Option<usize>,
    /// `decode` fails when bytes follow the descriptor.
    pub reject_trailing_bytes: bool,
}

impl CodecConfig {
    pub fn v0() -> Self {
        Self {
            max_name_bytes: None,
            reject_trailing_bytes: true,
        }
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self::v0()
    }
}
