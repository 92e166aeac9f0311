//! Typed records built from the engine's whitespace-aligned listing table.

pub mod parse;
pub mod status;
pub mod temporal;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use parse::{parse_line, parse_listing, parse_ports, split_fragments, RowLayout};
pub use status::is_running;
pub use temporal::{elapsed, normalize_at};

/// One container from the listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerRecord {
    pub container_id: String,
    pub image_id: String,
    pub command: String,
    pub created_text: String,
    pub created_at: DateTime<Utc>,
    pub status_text: String,
    /// Approximate instant of the last status change; the default sort key.
    pub status_at: DateTime<Utc>,
    pub running: bool,
    pub ports: Vec<String>,
    pub name: String,
    /// Escape sequence assigned from the palette by listing position.
    pub color: String,
}
