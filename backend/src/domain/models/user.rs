use std::fmt;
use std::str::FromStr;

/// Role assigned by the upstream auth service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    Parent,
    CampOwner,
    Admin,
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "parent" => Ok(UserRole::Parent),
            "camp_owner" | "owner" => Ok(UserRole::CampOwner),
            "admin" => Ok(UserRole::Admin),
            other => Err(format!("Unknown user role: {}", other)),
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            UserRole::Parent => "parent",
            UserRole::CampOwner => "camp_owner",
            UserRole::Admin => "admin",
        };
        f.write_str(name)
    }
}

/// A verified caller. Verification happens upstream; this is only the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserIdentity {
    pub id: String,
    pub role: UserRole,
}

impl UserIdentity {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// Whether this user may create new listings
    pub fn can_create_camps(&self) -> bool {
        matches!(self.role, UserRole::CampOwner | UserRole::Admin)
    }

    /// Whether this user may change a listing owned by `owner_id`
    pub fn can_manage(&self, owner_id: &str) -> bool {
        match self.role {
            UserRole::Admin => true,
            UserRole::CampOwner => self.id == owner_id,
            UserRole::Parent => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str, role: UserRole) -> UserIdentity {
        UserIdentity {
            id: id.to_string(),
            role,
        }
    }

    #[test]
    fn test_role_parsing() {
        assert_eq!("admin".parse::<UserRole>().unwrap(), UserRole::Admin);
        assert_eq!("Camp_Owner".parse::<UserRole>().unwrap(), UserRole::CampOwner);
        assert_eq!("parent".parse::<UserRole>().unwrap(), UserRole::Parent);
        assert!("superuser".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_management_rights() {
        let owner = user("user::owner", UserRole::CampOwner);
        let other_owner = user("user::other", UserRole::CampOwner);
        let admin = user("user::admin", UserRole::Admin);
        let parent = user("user::parent", UserRole::Parent);

        assert!(owner.can_manage("user::owner"));
        assert!(!other_owner.can_manage("user::owner"));
        assert!(admin.can_manage("user::owner"));
        assert!(!parent.can_manage("user::parent"));

        assert!(owner.can_create_camps());
        assert!(!parent.can_create_camps());
    }
}
