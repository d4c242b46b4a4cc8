//! The `/call` command built from extracted fields.

use std::fmt;

use crate::models::ExtractedFields;

/// A star call, rendered as
/// `/call world: <world> region: <region> size: <size> relative-time: <minutes>`.
///
/// Missing fields are rendered as `ERR` (region, size) or `0` (time).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallCommand {
    world: String,
    fields: ExtractedFields,
}

impl CallCommand {
    /// Build a call for the given world. The world is supplied by the caller;
    /// it is never read from the dialog.
    pub fn new(world: impl fmt::Display, fields: ExtractedFields) -> Self {
        Self {
            world: world.to_string(),
            fields,
        }
    }
}

impl fmt::Display for CallCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "/call world: {} region: {} size: {} relative-time: {}",
            self.world,
            self.fields.location_or_sentinel(),
            self.fields.size_or_sentinel(),
            self.fields.time_or_sentinel()
        )
    }
}
