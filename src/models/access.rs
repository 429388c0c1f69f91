//! Fixed access policy: which login holds which role, and what each role may do

use serde::{Deserialize, Serialize};

/// Permission required by an endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    Read,
    Write,
}

impl Permission {
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::Read => "read",
            Permission::Write => "write",
        }
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Named bundle of permissions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }

    /// Permissions granted by this role
    pub fn permissions(self) -> &'static [Permission] {
        ROLE_PERMISSIONS
            .iter()
            .find(|(role, _)| *role == self)
            .map(|(_, permissions)| *permissions)
            .unwrap_or(&[])
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub const ADMIN_LOGIN: &str = "Admin";
pub const USER_LOGIN: &str = "User";

/// Role assignment per login
pub const LOGIN_ROLES: &[(&str, &[Role])] = &[
    (ADMIN_LOGIN, &[Role::Admin]),
    (USER_LOGIN, &[Role::User]),
];

/// Permission set per role
pub const ROLE_PERMISSIONS: &[(Role, &[Permission])] = &[
    (Role::Admin, &[Permission::Read, Permission::Write]),
    (Role::User, &[Permission::Read]),
];

/// Roles assigned to a login; unknown logins hold none
pub fn roles_for(login: &str) -> &'static [Role] {
    LOGIN_ROLES
        .iter()
        .find(|(name, _)| *name == login)
        .map(|(_, roles)| *roles)
        .unwrap_or(&[])
}

/// Whether any role of `login` grants `permission`
pub fn is_granted(login: &str, permission: Permission) -> bool {
    roles_for(login)
        .iter()
        .any(|role| role.permissions().contains(&permission))
}
