use serde::Deserialize;
use thiserror::Error;

const DEFAULT_ITEMS: usize = 2;
const DEFAULT_ITEMS_WITH_REST: usize = 1;
// `{}=x`, x stands for a variable
const MIN_MAX_LENGTH: usize = 4;

/// Rule configuration as supplied by the host, camelCase keys. Absent
/// keys mean the documented defaults. Assumed validated before any
/// pattern is analyzed.
#[derive(Copy, Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Options {
    items: Option<usize>,
    items_with_rest: Option<usize>,
    max_length: Option<usize>,
}

impl Options {
    /// Item cap for patterns without a rest element.
    pub fn items(&self) -> usize {
        self.items.unwrap_or(DEFAULT_ITEMS)
    }

    /// Item cap for patterns containing a rest element.
    pub fn items_with_rest(&self) -> usize {
        self.items_with_rest.unwrap_or(DEFAULT_ITEMS_WITH_REST)
    }

    /// Maximum total text length before a pattern must be split.
    /// Unbounded unless configured.
    pub fn max_length(&self) -> usize {
        self.max_length.unwrap_or(usize::MAX)
    }

    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.items() < 1 {
            return Err(OptionsError::Items { value: self.items() });
        }
        if self.items_with_rest() < 1 {
            return Err(OptionsError::ItemsWithRest {
                value: self.items_with_rest(),
            });
        }
        if self.max_length() < MIN_MAX_LENGTH {
            return Err(OptionsError::MaxLength {
                value: self.max_length(),
            });
        }
        Ok(())
    }
}

#[derive(Copy, Clone, Debug, Error, PartialEq, Eq)]
pub enum OptionsError {
    #[error("`items` must be at least 1, got {value}")]
    Items { value: usize },
    #[error("`itemsWithRest` must be at least 1, got {value}")]
    ItemsWithRest { value: usize },
    #[error("`maxLength` must be at least 4, got {value}")]
    MaxLength { value: usize },
}
