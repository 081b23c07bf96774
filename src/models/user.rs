use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// # User Record
///
/// A single entry in the user directory. Field declaration order fixes the
/// JSON key order: `id`, `name`, `email`.
///
/// ## Example JSON
/// ```json
/// { "id": 1, "name": "John Doe", "email": "john@example.com" }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
}

impl User {
    fn new(id: u32, name: &str, email: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            email: email.to_string(),
        }
    }
}

/// The full directory, in listing order. The records are compiled-in
/// constants; ids are literals, not allocated, and nothing mutates them at
/// runtime. Each call builds a fresh `Vec`, so concurrent requests never
/// share state.
pub fn directory() -> Vec<User> {
    vec![
        User::new(1, "John Doe", "john@example.com"),
        User::new(2, "Jane Smith", "jane@example.com"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_has_two_users_in_listing_order() {
        let users = directory();

        assert_eq!(users.len(), 2);
        assert_eq!(users[0], User::new(1, "John Doe", "john@example.com"));
        assert_eq!(users[1], User::new(2, "Jane Smith", "jane@example.com"));
    }

    #[test]
    fn test_user_serializes_with_exact_keys_and_order() {
        let user = User::new(1, "John Doe", "john@example.com");

        let json = serde_json::to_string(&user).expect("should serialize");

        assert_eq!(
            json,
            r#"{"id":1,"name":"John Doe","email":"john@example.com"}"#
        );
    }

    #[test]
    fn test_directory_is_stable_across_calls() {
        assert_eq!(directory(), directory());
    }
}
