use serde::{Deserialize, Serialize};

/// Themes inserted by the bootstrap step, as `(id, first, second)`.
pub const SEED_THEMES: [(i64, &str, &str); 2] = [(1, "black", "red"), (2, "blue", "green")];

/// A two-color UI theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub id: i64,
    pub first: String,
    pub second: String,
}

/// A registered user.
///
/// The password is stored and returned in plaintext. This mirrors the
/// existing clients and is a known security defect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password: String,
    /// Selected theme. Not checked against the Theme table.
    pub tid: Option<i64>,
}

/// Favorite picks of a user. Shares its id with the owning [`User`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorites {
    pub id: i64,
    pub character: Option<String>,
    pub film: Option<String>,
    pub starship: Option<String>,
    pub vehicle: Option<String>,
    pub species: Option<String>,
    pub planet: Option<String>,
}

impl Favorites {
    /// Create the companion record for a freshly created user.
    pub fn empty(id: i64) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_projection() {
        let theme = Theme {
            id: 1,
            first: "black".to_string(),
            second: "red".to_string(),
        };

        let json = serde_json::to_value(&theme).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 1, "first": "black", "second": "red"})
        );
    }

    #[test]
    fn test_user_projection_includes_null_tid() {
        let user = User {
            id: 7,
            username: "luke".to_string(),
            password: "tatooine".to_string(),
            tid: None,
        };

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 7, "username": "luke", "password": "tatooine", "tid": null})
        );
    }

    #[test]
    fn test_empty_favorites_has_all_null_fields() {
        let favorites = Favorites::empty(3);
        let json = serde_json::to_value(&favorites).unwrap();

        assert_eq!(json["id"], 3);
        for key in ["character", "film", "starship", "vehicle", "species", "planet"] {
            assert!(json[key].is_null(), "{key} should be null");
        }
        assert_eq!(json.as_object().unwrap().len(), 7);
    }

    #[test]
    fn test_seed_themes() {
        assert_eq!(SEED_THEMES[0], (1, "black", "red"));
        assert_eq!(SEED_THEMES[1], (2, "blue", "green"));
    }
}
