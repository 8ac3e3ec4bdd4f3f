#![forbid(unsafe_code)]

const MAX_OWNER_ID_LEN: usize = 128;
const MAX_VIEW_KEY_LEN: usize = 512;

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OwnerId(String);

impl OwnerId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn try_new(value: impl Into<String>) -> Result<Self, IdError> {
        let value = validate(value.into(), MAX_OWNER_ID_LEN)?;
        Ok(Self(value))
    }
}

impl std::fmt::Display for OwnerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifies one table instance: `model,view_mode,view_id`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewKey(String);

impl ViewKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn try_new(value: impl Into<String>) -> Result<Self, IdError> {
        let value = validate(value.into(), MAX_VIEW_KEY_LEN)?;
        Ok(Self(value))
    }

    /// Composes the key the list view derives for itself. An unsaved view has no id and
    /// renders as `false`.
    pub fn for_view(model: &str, view_mode: &str, view_id: Option<&str>) -> Result<Self, IdError> {
        let view_id = view_id.filter(|id| !id.trim().is_empty());
        Self::try_new(format!(
            "{model},{view_mode},{}",
            view_id.unwrap_or("false")
        ))
    }
}

impl std::fmt::Display for ViewKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IdError {
    Empty,
    TooLong,
    ContainsControl,
}

impl IdError {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Empty => "must not be empty",
            Self::TooLong => "is too long",
            Self::ContainsControl => "contains control characters",
        }
    }
}

/// Ids are kept byte for byte; keys differing only in whitespace stay distinct rows.
fn validate(value: String, max_len: usize) -> Result<String, IdError> {
    if value.trim().is_empty() {
        return Err(IdError::Empty);
    }
    if value.len() > max_len {
        return Err(IdError::TooLong);
    }
    if value.chars().any(|c| c.is_control()) {
        return Err(IdError::ContainsControl);
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_id_validation() {
        assert_eq!(OwnerId::try_new("").unwrap_err(), IdError::Empty);
        assert_eq!(OwnerId::try_new("   ").unwrap_err(), IdError::Empty);
        assert_eq!(
            OwnerId::try_new("bad\u{0007}id").unwrap_err(),
            IdError::ContainsControl
        );
        assert_eq!(
            OwnerId::try_new("x".repeat(129)).unwrap_err(),
            IdError::TooLong
        );
        assert_eq!(OwnerId::try_new(" alice ").unwrap().as_str(), " alice ");
        assert_ne!(OwnerId::try_new(" alice ").unwrap(), OwnerId::try_new("alice").unwrap());
    }

    #[test]
    fn view_key_validation() {
        assert_eq!(ViewKey::try_new("").unwrap_err(), IdError::Empty);
        assert_eq!(
            ViewKey::try_new("sale.order,\nlist").unwrap_err(),
            IdError::ContainsControl
        );
        assert!(ViewKey::try_new("sale.order,list,42").is_ok());
        assert_eq!(
            ViewKey::try_new(" sale.order,list,42").unwrap().as_str(),
            " sale.order,list,42"
        );
    }

    #[test]
    fn view_key_for_view_composes_model_mode_and_id() {
        let key = ViewKey::for_view("sale.order", "list", Some("42")).unwrap();
        assert_eq!(key.as_str(), "sale.order,list,42");

        let unsaved = ViewKey::for_view("res.partner", "list", None).unwrap();
        assert_eq!(unsaved.as_str(), "res.partner,list,false");

        let blank_id = ViewKey::for_view("res.partner", "list", Some("  ")).unwrap();
        assert_eq!(blank_id, unsaved);
    }
}
