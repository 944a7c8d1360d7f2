//! UUID-backed log id generator

use mcp_envelope::LogIdGenerator;
use uuid::Uuid;

/// Random (v4) UUIDs rendered in hyphenated form
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidLogIdGenerator;

impl LogIdGenerator for UuidLogIdGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
