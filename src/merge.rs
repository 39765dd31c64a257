//! Field-by-field application of an update onto a stored record.
//!
//! | entity | always taken from the update | taken only when the update sets it |
//! |--------|------------------------------|------------------------------------|
//! | film   | `name`, `duration`           | `description`, `release_date`      |
//! | user   | `name`, `email`, `login`     | `birthday`                         |
//!
//! The identifier always stays the stored one.

use crate::model::{Film, User};

pub fn merge_film(stored: Film, update: Film) -> Film {
    Film {
        id: stored.id,
        name: update.name,
        duration: update.duration,
        description: update.description.or(stored.description),
        release_date: update.release_date.or(stored.release_date),
    }
}

pub fn merge_user(stored: User, update: User) -> User {
    User {
        id: stored.id,
        name: update.name,
        email: update.email,
        login: update.login,
        birthday: update.birthday.or(stored.birthday),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn film_keeps_optional_fields_when_unset() {
        let stored = Film {
            id: 1,
            name: Some("Old".to_owned()),
            description: Some("A".to_owned()),
            release_date: date(2000, 5, 5),
            duration: 100,
        };
        let update = Film {
            id: 1,
            name: Some("X".to_owned()),
            description: None,
            release_date: None,
            duration: 5,
        };
        let merged = merge_film(stored, update);
        assert_eq!(merged.name.as_deref(), Some("X"));
        assert_eq!(merged.duration, 5);
        assert_eq!(merged.description.as_deref(), Some("A"));
        assert_eq!(merged.release_date, date(2000, 5, 5));
    }

    #[test]
    fn film_takes_optional_fields_when_set() {
        let stored = Film {
            id: 1,
            name: Some("Test".to_owned()),
            description: Some("Test".to_owned()),
            release_date: date(2020, 1, 1),
            duration: 120,
        };
        let update = Film {
            id: 1,
            description: Some("updated".to_owned()),
            release_date: date(2021, 2, 2),
            ..stored.clone()
        };
        let merged = merge_film(stored, update.clone());
        assert_eq!(merged, update);
    }

    #[test]
    fn user_merge() {
        let stored = User {
            id: 4,
            email: Some("old@mail".to_owned()),
            login: Some("old".to_owned()),
            name: Some("Old".to_owned()),
            birthday: date(1990, 1, 1),
        };
        let update = User {
            id: 4,
            email: Some("new@mail".to_owned()),
            login: Some("new".to_owned()),
            name: Some("new".to_owned()),
            birthday: None,
        };
        let merged = merge_user(stored.clone(), update);
        assert_eq!(merged.email.as_deref(), Some("new@mail"));
        assert_eq!(merged.login.as_deref(), Some("new"));
        assert_eq!(merged.name.as_deref(), Some("new"));
        assert_eq!(merged.birthday, date(1990, 1, 1));

        let update = User {
            birthday: date(1991, 3, 3),
            ..stored.clone()
        };
        assert_eq!(merge_user(stored, update).birthday, date(1991, 3, 3));
    }
}
