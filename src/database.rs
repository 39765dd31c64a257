use crate::error::CatalogError;
use crate::merge::{merge_film, merge_user};
use crate::model::*;
use crate::store::Store;
use crate::validation::{validate_film, validate_user};
use chrono::NaiveDate;
use log::{info, warn};
use parking_lot::Mutex;

pub trait FilmDb {
    type Error;
    fn films(&self) -> Vec<Film>;
    fn add_film(&self, film: Film) -> Result<Film, Self::Error>;
    fn update_film(&self, film: Film) -> Result<Film, Self::Error>;
}

pub trait UserDb {
    type Error;
    fn users(&self) -> Vec<User>;
    fn add_user(&self, user: User) -> Result<User, Self::Error>;
    fn update_user(&self, user: User) -> Result<User, Self::Error>;
}

fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Films and users of one running service.
///
/// Each table has its own lock, held across the whole lookup, validation and
/// write of a request.
pub struct Catalog {
    films: Mutex<Store<Film>>,
    users: Mutex<Store<User>>,
    today: fn() -> NaiveDate,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::with_clock(local_today)
    }
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog whose user birthdays are checked against `today()`.
    pub fn with_clock(today: fn() -> NaiveDate) -> Self {
        Catalog {
            films: Mutex::new(Store::new()),
            users: Mutex::new(Store::new()),
            today,
        }
    }
}

impl FilmDb for Catalog {
    type Error = CatalogError;

    fn films(&self) -> Vec<Film> {
        self.films.lock().list()
    }

    fn add_film(&self, mut film: Film) -> Result<Film, CatalogError> {
        validate_film(&film)?;
        let mut films = self.films.lock();
        film.set_id(films.next_id());
        let film = films.insert(film)?;
        info!("Created film with id {}", film.id);
        Ok(film)
    }

    fn update_film(&self, film: Film) -> Result<Film, CatalogError> {
        let mut films = self.films.lock();
        let stored = films.get(film.id).map_err(|err| {
            warn!("No film with id {}", film.id);
            err
        })?;
        validate_film(&film)?;
        let film = films.replace(stored.id, merge_film(stored, film))?;
        info!("Updated film with id {}", film.id);
        Ok(film)
    }
}

impl UserDb for Catalog {
    type Error = CatalogError;

    fn users(&self) -> Vec<User> {
        self.users.lock().list()
    }

    fn add_user(&self, mut user: User) -> Result<User, CatalogError> {
        validate_user(&mut user, (self.today)())?;
        let mut users = self.users.lock();
        user.set_id(users.next_id());
        let user = users.insert(user)?;
        info!("Created user with id {}", user.id);
        Ok(user)
    }

    fn update_user(&self, mut user: User) -> Result<User, CatalogError> {
        let mut users = self.users.lock();
        let stored = users.get(user.id).map_err(|err| {
            warn!("No user with id {}", user.id);
            err
        })?;
        validate_user(&mut user, (self.today)())?;
        let user = users.replace(stored.id, merge_user(stored, user))?;
        info!("Updated user with id {}", user.id);
        Ok(user)
    }
}
