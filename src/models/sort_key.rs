use std::fmt;
use std::str::FromStr;

use crate::errors::sort::SortError;

/// A field a container listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    Command,
    Created,
    Id,
    Image,
    Names,
    RunningFor,
    Size,
    Status,
    Pod,
}

impl SortKey {
    /// Every accepted key, in the order they are offered to users.
    pub const ALL: [SortKey; 9] = [
        SortKey::Command,
        SortKey::Created,
        SortKey::Id,
        SortKey::Image,
        SortKey::Names,
        SortKey::RunningFor,
        SortKey::Size,
        SortKey::Status,
        SortKey::Pod,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Command => "command",
            SortKey::Created => "created",
            SortKey::Id => "id",
            SortKey::Image => "image",
            SortKey::Names => "names",
            SortKey::RunningFor => "runningfor",
            SortKey::Size => "size",
            SortKey::Status => "status",
            SortKey::Pod => "pod",
        }
    }

    /// "command, created, ..., status, or pod"
    pub fn choices() -> String {
        let names: Vec<&str> = Self::ALL.iter().map(SortKey::as_str).collect();
        match names.split_last() {
            Some((last, rest)) if !rest.is_empty() => format!("{}, or {}", rest.join(", "), last),
            Some((last, _)) => last.to_string(),
            None => String::new(),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = SortError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|key| key.as_str() == value)
            .ok_or_else(|| SortError::InvalidSortKey {
                key: value.to_string(),
            })
    }
}
