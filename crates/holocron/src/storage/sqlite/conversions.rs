//! SQLite row conversion functions.
//!
//! Rows are read by column name, so the column order of a query does not
//! matter as long as every name is selected.

use holocron_core::profile::{Favorites, Theme, User};
use rusqlite::Row;

/// Convert a SQLite row to a Theme.
///
/// Expected columns: id, first, second
pub fn row_to_theme(row: &Row) -> rusqlite::Result<Theme> {
    Ok(Theme {
        id: row.get("id")?,
        first: row.get("first")?,
        second: row.get("second")?,
    })
}

/// Convert a SQLite row to a User.
///
/// Expected columns: id, username, password, tid
pub fn row_to_user(row: &Row) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get("id")?,
        username: row.get("username")?,
        password: row.get("password")?,
        tid: row.get("tid")?,
    })
}

/// Convert a SQLite row to Favorites.
///
/// Expected columns: id, character, film, starship, vehicle, species, planet
pub fn row_to_favorites(row: &Row) -> rusqlite::Result<Favorites> {
    Ok(Favorites {
        id: row.get("id")?,
        character: row.get("character")?,
        film: row.get("film")?,
        starship: row.get("starship")?,
        vehicle: row.get("vehicle")?,
        species: row.get("species")?,
        planet: row.get("planet")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn test_row_to_theme() {
        let conn = Connection::open_in_memory().unwrap();
        let theme = conn
            .query_row("SELECT 'red' AS second, 'black' AS first, 1 AS id", [], row_to_theme)
            .unwrap();

        assert_eq!(
            theme,
            Theme {
                id: 1,
                first: "black".to_string(),
                second: "red".to_string(),
            }
        );
    }

    #[test]
    fn test_row_to_user_with_null_tid() {
        let conn = Connection::open_in_memory().unwrap();
        let user = conn
            .query_row(
                "SELECT 5 AS id, 'rey' AS username, 'jakku' AS password, NULL AS tid",
                [],
                row_to_user,
            )
            .unwrap();

        assert_eq!(user.id, 5);
        assert_eq!(user.username, "rey");
        assert_eq!(user.tid, None);
    }

    #[test]
    fn test_row_to_favorites() {
        let conn = Connection::open_in_memory().unwrap();
        let favorites = conn
            .query_row(
                "SELECT 2 AS id, 'Ahsoka' AS character, NULL AS film, NULL AS starship, \
                 'Speeder' AS vehicle, NULL AS species, 'Shili' AS planet",
                [],
                row_to_favorites,
            )
            .unwrap();

        assert_eq!(favorites.character.as_deref(), Some("Ahsoka"));
        assert_eq!(favorites.film, None);
        assert_eq!(favorites.vehicle.as_deref(), Some("Speeder"));
        assert_eq!(favorites.planet.as_deref(), Some("Shili"));
    }

    #[test]
    fn test_missing_column_is_an_error() {
        let conn = Connection::open_in_memory().unwrap();
        let result = conn.query_row("SELECT 1 AS id, 'x' AS first", [], row_to_theme);

        assert!(matches!(result, Err(rusqlite::Error::InvalidColumnName(_))));
    }
}
