//! Profile merging rules
//!
//! The account endpoint returns a basic profile; the detail endpoint may
//! return a richer one. Detail fields win, falling back per-field to the
//! basic profile when the detail copy is empty.

use super::types::User;

/// Merge the basic profile with an optional detail lookup.
pub fn merge_profile(basic: User, detail: Option<User>) -> User {
    let Some(detail) = detail else {
        return basic;
    };
    User {
        id: basic.id,
        email: non_empty_or(detail.email, basic.email),
        full_name: non_empty_or(detail.full_name, basic.full_name),
        role: non_empty_or(detail.role, basic.role),
        phone: detail.phone.or(basic.phone),
        age: detail.age.or(basic.age),
    }
}

/// Named product compromise, not a general merge rule: a server age that is
/// absent or exactly zero is replaced by the locally cached per-user value.
/// Zero therefore cannot be a user-entered age.
pub fn apply_cached_age_fallback(age: Option<u32>, cached: Option<u32>) -> Option<u32> {
    match age {
        Some(age) if age != 0 => Some(age),
        other => cached.or(other),
    }
}

fn non_empty_or(preferred: String, fallback: String) -> String {
    if preferred.is_empty() { fallback } else { preferred }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn basic() -> User {
        User {
            id: Uuid::nil(),
            email: "basic@example.com".to_string(),
            full_name: "Basic Name".to_string(),
            role: "customer".to_string(),
            phone: Some("111".to_string()),
            age: Some(30),
        }
    }

    #[test]
    fn no_detail_keeps_basic() {
        assert_eq!(merge_profile(basic(), None), basic());
    }

    #[test]
    fn detail_fields_take_precedence() {
        let detail = User {
            id: Uuid::nil(),
            email: "detail@example.com".to_string(),
            full_name: "Detail Name".to_string(),
            role: "organizer".to_string(),
            phone: Some("222".to_string()),
            age: Some(41),
        };
        let merged = merge_profile(basic(), Some(detail.clone()));
        assert_eq!(merged.email, "detail@example.com");
        assert_eq!(merged.full_name, "Detail Name");
        assert_eq!(merged.role, "organizer");
        assert_eq!(merged.phone, Some("222".to_string()));
        assert_eq!(merged.age, Some(41));
    }

    #[test]
    fn empty_detail_fields_fall_back_to_basic() {
        let detail = User {
            id: Uuid::nil(),
            email: String::new(),
            full_name: String::new(),
            role: String::new(),
            phone: None,
            age: None,
        };
        let merged = merge_profile(basic(), Some(detail));
        assert_eq!(merged.email, "basic@example.com");
        assert_eq!(merged.full_name, "Basic Name");
        assert_eq!(merged.role, "customer");
        assert_eq!(merged.phone, Some("111".to_string()));
        assert_eq!(merged.age, Some(30));
    }

    #[test]
    fn nonzero_server_age_wins_over_cache() {
        assert_eq!(apply_cached_age_fallback(Some(27), Some(52)), Some(27));
    }

    #[test]
    fn missing_server_age_uses_cache() {
        assert_eq!(apply_cached_age_fallback(None, Some(52)), Some(52));
        assert_eq!(apply_cached_age_fallback(None, None), None);
    }

    #[test]
    fn zero_server_age_uses_cache() {
        assert_eq!(apply_cached_age_fallback(Some(0), Some(52)), Some(52));
        // No cache: the zero passes through unchanged.
        assert_eq!(apply_cached_age_fallback(Some(0), None), Some(0));
    }
}
