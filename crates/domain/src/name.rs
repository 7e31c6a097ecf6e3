use derive_more::{AsRef, Display};
use log::warn;

/// Display name of a workout template.
#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    pub const MAX_LEN: usize = 64;

    pub fn new(name: &str) -> Result<Self, NameError> {
        let trimmed_name = name.trim();

        if trimmed_name.is_empty() {
            return Err(NameError::Empty);
        }

        let len = trimmed_name.chars().count();

        if len > Self::MAX_LEN {
            return Err(NameError::TooLong(len));
        }

        Ok(Name(trimmed_name.to_string()))
    }

    /// Like [`Name::new`], but names exceeding [`Name::MAX_LEN`] are cut off instead of rejected.
    pub fn truncated(name: &str) -> Result<Self, NameError> {
        match Self::new(name) {
            Err(NameError::TooLong(len)) => {
                warn!("truncating name of {len} characters: {}", name.trim());
                Self::new(&name.trim().chars().take(Self::MAX_LEN).collect::<String>())
            }
            result => result,
        }
    }

    /// Name of a template derived from this one, e.g. "Customized Leg Day".
    ///
    /// The result is truncated to [`Name::MAX_LEN`] characters.
    pub fn derived(&self, prefix: &str) -> Result<Self, NameError> {
        Self::truncated(&format!("{prefix} {}", self.0))
    }
}

impl TryFrom<&str> for Name {
    type Error = NameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Name::new(value)
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum NameError {
    #[error("Name must not be empty")]
    Empty,
    #[error("Name must be 64 characters or fewer ({0} > 64)")]
    TooLong(usize),
}
