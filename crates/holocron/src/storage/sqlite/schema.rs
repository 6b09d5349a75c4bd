//! SQLite schema definitions and SQL query constants.
//!
//! Pure data, no I/O. Table and column names match the database file the
//! existing web client was built against.

/// Run on every new connection. Bundled SQLite enforces foreign keys by
/// default, and `User.tid` may point at a theme that does not exist.
pub const CONNECTION_PRAGMAS: &str = "PRAGMA foreign_keys = OFF;";

/// SQL statement to drop all tables, used when resetting on boot.
pub const DROP_TABLES: &str = r#"
DROP TABLE IF EXISTS User;
DROP TABLE IF EXISTS Theme;
DROP TABLE IF EXISTS Favorites;
"#;

/// SQL statement to create all tables.
///
/// The `tid` foreign key is declarative only; see [`CONNECTION_PRAGMAS`].
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS User (
    id INTEGER PRIMARY KEY,
    username TEXT UNIQUE,
    password TEXT,
    tid INTEGER,
    FOREIGN KEY (tid) REFERENCES Theme(id)
);

CREATE TABLE IF NOT EXISTS Theme (
    id INTEGER PRIMARY KEY,
    first TEXT,
    second TEXT
);

CREATE TABLE IF NOT EXISTS Favorites (
    id INTEGER PRIMARY KEY,
    character TEXT,
    film TEXT,
    starship TEXT,
    vehicle TEXT,
    species TEXT,
    planet TEXT
);
"#;

/// Counts unique indexes covering `User.username`. A database file created
/// before the constraint existed has none.
pub const COUNT_UNIQUE_USERNAME_INDEXES: &str = r#"
SELECT COUNT(*)
FROM pragma_index_list('User') AS list, pragma_index_info(list.name) AS info
WHERE list."unique" = 1 AND info.name = 'username'
"#;

pub const SEED_THEME: &str = r#"
INSERT OR IGNORE INTO Theme (id, first, second)
VALUES (?1, ?2, ?3)
"#;

// Theme queries
pub const SELECT_THEME_BY_ID: &str = r#"
SELECT id, first, second
FROM Theme
WHERE id = ?1
"#;

// User queries
pub const INSERT_USER: &str = r#"
INSERT INTO User (username, password, tid)
VALUES (?1, ?2, NULL)
"#;

pub const SELECT_USER_BY_USERNAME: &str = r#"
SELECT id, username, password, tid
FROM User
WHERE username = ?1
"#;

pub const SELECT_USER_IDS: &str = r#"
SELECT id
FROM User
ORDER BY id ASC
"#;

pub const UPDATE_USER_THEME: &str = r#"
UPDATE User
SET tid = ?2
WHERE id = ?1
"#;

pub const UPDATE_USER_PASSWORD: &str = r#"
UPDATE User
SET password = ?2
WHERE id = ?1
"#;

pub const DELETE_USER: &str = r#"
DELETE FROM User
WHERE id = ?1
"#;

// Favorites queries

/// Replaces any record left behind by a deleted user that had the same id.
pub const INSERT_EMPTY_FAVORITES: &str = r#"
INSERT OR REPLACE INTO Favorites (id, character, film, starship, vehicle, species, planet)
VALUES (?1, NULL, NULL, NULL, NULL, NULL, NULL)
"#;

pub const SELECT_FAVORITES_BY_ID: &str = r#"
SELECT id, character, film, starship, vehicle, species, planet
FROM Favorites
WHERE id = ?1
"#;

pub const UPDATE_FAVORITES: &str = r#"
UPDATE Favorites
SET character = ?2, film = ?3, starship = ?4, vehicle = ?5, species = ?6, planet = ?7
WHERE id = ?1
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_tables_is_valid_sql() {
        assert!(CREATE_TABLES.contains("CREATE TABLE IF NOT EXISTS User"));
        assert!(CREATE_TABLES.contains("CREATE TABLE IF NOT EXISTS Theme"));
        assert!(CREATE_TABLES.contains("CREATE TABLE IF NOT EXISTS Favorites"));
        assert!(CREATE_TABLES.contains("username TEXT UNIQUE"));
    }

    #[test]
    fn test_drop_tables_covers_every_table() {
        for table in ["User", "Theme", "Favorites"] {
            assert!(DROP_TABLES.contains(&format!("DROP TABLE IF EXISTS {table};")));
        }
    }

    #[test]
    fn test_queries_contain_expected_keywords() {
        assert!(CONNECTION_PRAGMAS.contains("foreign_keys = OFF"));
        assert!(COUNT_UNIQUE_USERNAME_INDEXES.contains("pragma_index_list('User')"));
        assert!(SEED_THEME.contains("OR IGNORE"));
        assert!(SELECT_THEME_BY_ID.contains("FROM Theme"));

        assert!(INSERT_USER.contains("NULL"));
        assert!(SELECT_USER_BY_USERNAME.contains("username = ?1"));
        assert!(SELECT_USER_IDS.contains("ORDER BY id"));
        assert!(UPDATE_USER_THEME.contains("tid = ?2"));
        assert!(UPDATE_USER_PASSWORD.contains("password = ?2"));
        assert!(DELETE_USER.contains("DELETE"));

        assert!(INSERT_EMPTY_FAVORITES.contains("OR REPLACE"));
        assert!(SELECT_FAVORITES_BY_ID.contains("FROM Favorites"));
        assert!(UPDATE_FAVORITES.contains("UPDATE"));
    }
}
