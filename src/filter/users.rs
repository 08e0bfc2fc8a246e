//! User category predicates.

use std::fmt;
use std::str::FromStr;

use crate::error::DashError;
use crate::model::user::{
    UserRecord, BADGE_ADMINISTRATOR, BADGE_CORPORATE, BADGE_OFFICIAL, BADGE_SUPER_ADMIN,
    STATUS_GRADUATE,
};

/// Dashboard user category.
///
/// Each category has its own predicate; they do not partition the user
/// population. A user can match several categories (an administrator who is
/// also a corporate partner, a lecturer without badges who also passes the
/// student test) or none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UserCategory {
    #[default]
    All,
    Student,
    Lecturer,
    Administrator,
    Corporate,
}

impl UserCategory {
    /// Every category, in tab order.
    pub const ALL: [UserCategory; 5] = [
        UserCategory::All,
        UserCategory::Student,
        UserCategory::Lecturer,
        UserCategory::Administrator,
        UserCategory::Corporate,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Student => "Student",
            Self::Lecturer => "Lecturer",
            Self::Administrator => "Administrator",
            Self::Corporate => "Corporate",
        }
    }

    /// Whether `user` belongs to this category.
    pub fn matches(self, user: &UserRecord) -> bool {
        match self {
            Self::All => true,
            Self::Administrator => {
                user.has_badge(BADGE_ADMINISTRATOR) || user.has_badge(BADGE_SUPER_ADMIN)
            }
            Self::Student => {
                user.status != STATUS_GRADUATE
                    && !user.has_badge(BADGE_OFFICIAL)
                    && !user.has_badge(BADGE_ADMINISTRATOR)
            }
            Self::Lecturer => user.role.to_lowercase().contains("lecturer"),
            Self::Corporate => user.has_badge(BADGE_CORPORATE),
        }
    }
}

impl fmt::Display for UserCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for UserCategory {
    type Err = DashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(wanted))
            .or_else(|| {
                // Plural forms as shown on the tabs.
                Self::ALL
                    .into_iter()
                    .find(|c| format!("{}s", c.name()).eq_ignore_ascii_case(wanted))
            })
            .ok_or_else(|| DashError::UnknownCategory(s.to_string()))
    }
}

/// Positions in `users` of the records matching `category`, in input order.
pub fn select_user_indices(users: &[UserRecord], category: UserCategory) -> Vec<usize> {
    users
        .iter()
        .enumerate()
        .filter(|(_, user)| category.matches(user))
        .map(|(i, _)| i)
        .collect()
}

/// The subsequence of `users` matching `category`.
pub fn select_users(users: &[UserRecord], category: UserCategory) -> Vec<&UserRecord> {
    users.iter().filter(|user| category.matches(user)).collect()
}

/// Number of users matching each category, in [`UserCategory::ALL`] order.
pub fn category_counts(users: &[UserRecord]) -> Vec<(UserCategory, usize)> {
    UserCategory::ALL
        .into_iter()
        .map(|c| (c, users.iter().filter(|u| c.matches(u)).count()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: &str, status: &str, badges: &[&str]) -> UserRecord {
        UserRecord {
            id: 0,
            name: "x".into(),
            role: role.into(),
            status: status.into(),
            badges: badges.iter().map(|b| b.to_string()).collect(),
            bio: String::new(),
            emails: Vec::new(),
        }
    }

    #[test]
    fn test_administrator_predicate() {
        assert!(UserCategory::Administrator.matches(&user("", "", &["Administrator"])));
        assert!(UserCategory::Administrator.matches(&user("", "", &["Super Admin"])));
        assert!(!UserCategory::Administrator.matches(&user("", "", &["Admin"])));
    }

    #[test]
    fn test_student_predicate() {
        assert!(UserCategory::Student.matches(&user("BSc", "Active", &["Student"])));
        assert!(!UserCategory::Student.matches(&user("BSc", "Graduate", &["Student"])));
        assert!(!UserCategory::Student.matches(&user("", "Active", &["Official"])));
        assert!(!UserCategory::Student.matches(&user("", "Active", &["Administrator"])));
        // "Super Admin" alone does not exclude.
        assert!(UserCategory::Student.matches(&user("", "Active", &["Super Admin"])));
    }

    #[test]
    fn test_lecturer_case_insensitive() {
        assert!(UserCategory::Lecturer.matches(&user("Senior LECTURER", "", &[])));
        assert!(UserCategory::Lecturer.matches(&user("assistant lecturer", "", &[])));
        assert!(!UserCategory::Lecturer.matches(&user("Professor", "", &[])));
    }

    #[test]
    fn test_lecturer_also_matches_student() {
        let lecturer = user("Lecturer", "Active", &[]);
        assert!(UserCategory::Lecturer.matches(&lecturer));
        assert!(UserCategory::Student.matches(&lecturer));
    }

    #[test]
    fn test_corporate_predicate() {
        assert!(UserCategory::Corporate.matches(&user("", "", &["Corporate"])));
        assert!(!UserCategory::Corporate.matches(&user("", "", &["corporate"])));
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            "lecturers".parse::<UserCategory>().unwrap(),
            UserCategory::Lecturer
        );
        assert_eq!("ALL".parse::<UserCategory>().unwrap(), UserCategory::All);
        assert!("staff".parse::<UserCategory>().is_err());
    }

    #[test]
    fn test_category_counts() {
        let users = vec![
            user("Lecturer", "Active", &[]),
            user("", "Active", &["Administrator", "Corporate"]),
        ];
        let counts = category_counts(&users);
        assert_eq!(counts[0], (UserCategory::All, 2));
        assert_eq!(counts[1], (UserCategory::Student, 1));
        assert_eq!(counts[2], (UserCategory::Lecturer, 1));
        assert_eq!(counts[3], (UserCategory::Administrator, 1));
        assert_eq!(counts[4], (UserCategory::Corporate, 1));
    }
}
