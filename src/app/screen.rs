// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

/// Account role chosen on the sign-in screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    #[default]
    Student,
    Teacher,
    Admin,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Student, Role::Teacher, Role::Admin];

    /// i18n key of the role name.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Role::Student => "role-student",
            Role::Teacher => "role-teacher",
            Role::Admin => "role-admin",
        }
    }
}

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Dashboard(Role),
}

impl Screen {
    /// Short name used in diagnostics.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Screen::Login => "login",
            Screen::Dashboard(Role::Student) => "student-dashboard",
            Screen::Dashboard(Role::Teacher) => "teacher-dashboard",
            Screen::Dashboard(Role::Admin) => "admin-dashboard",
        }
    }
}
