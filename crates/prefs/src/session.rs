#![forbid(unsafe_code)]

use cw_core::ids::{IdError, OwnerId};

/// The authenticated caller. Every call is scoped to `owner`; there is no way to target
/// another user's rows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    owner: Option<OwnerId>,
}

impl Session {
    pub fn for_owner(owner: OwnerId) -> Self {
        Self { owner: Some(owner) }
    }

    pub fn anonymous() -> Self {
        Self { owner: None }
    }

    /// `None` or a blank id yields an anonymous session.
    pub fn from_user(user: Option<&str>) -> Result<Self, IdError> {
        match user.filter(|user| !user.trim().is_empty()) {
            Some(user) => Ok(Self::for_owner(OwnerId::try_new(user)?)),
            None => Ok(Self::anonymous()),
        }
    }

    pub fn owner(&self) -> Option<&OwnerId> {
        self.owner.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_user_builds_owned_or_anonymous_sessions() {
        let session = Session::from_user(Some("alice")).unwrap();
        assert_eq!(session.owner().map(OwnerId::as_str), Some("alice"));

        assert_eq!(Session::from_user(None).unwrap(), Session::anonymous());
        assert_eq!(Session::from_user(Some("")).unwrap(), Session::anonymous());
        assert_eq!(Session::from_user(Some("  ")).unwrap(), Session::anonymous());
        assert_eq!(
            Session::from_user(Some("bad\u{0000}user")).unwrap_err(),
            IdError::ContainsControl
        );
    }
}
