use crate::error::ValidationError;
use crate::model::{Film, User};
use chrono::NaiveDate;
use log::warn;

pub const MAX_DESCRIPTION_LEN: usize = 200;

/// The day of the first public film screening.
pub fn earliest_release_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1895, 12, 28).unwrap_or(NaiveDate::MIN)
}

fn is_blank(s: Option<&str>) -> bool {
    s.map_or(true, |s| s.trim().is_empty())
}

pub fn validate_film(film: &Film) -> Result<(), ValidationError> {
    if is_blank(film.name.as_deref()) {
        warn!("Invalid film name: {:?}", film.name);
        return Err(ValidationError::EmptyName);
    }
    if let Some(description) = &film.description {
        if description.chars().count() > MAX_DESCRIPTION_LEN {
            warn!("Invalid film description: {:?}", description);
            return Err(ValidationError::DescriptionTooLong);
        }
    }
    if film.duration <= 0 {
        warn!("Invalid film duration: {}", film.duration);
        return Err(ValidationError::NonPositiveDuration);
    }
    if let Some(release_date) = film.release_date {
        if release_date < earliest_release_date() {
            warn!("Invalid film release date: {}", release_date);
            return Err(ValidationError::ReleaseDateTooEarly);
        }
    }
    Ok(())
}

/// Checks `user` against the calendar day `today` and, on success, fills in a
/// missing display name from the login.
pub fn validate_user(user: &mut User, today: NaiveDate) -> Result<(), ValidationError> {
    let email_ok = user
        .email
        .as_deref()
        .map_or(false, |email| !email.trim().is_empty() && email.contains('@'));
    if !email_ok {
        warn!("Invalid user email: {:?}", user.email);
        return Err(ValidationError::InvalidEmail);
    }
    let login = match user.login.as_deref() {
        Some(login) if !login.is_empty() && !login.chars().any(char::is_whitespace) => login,
        _ => {
            warn!("Invalid user login: {:?}", user.login);
            return Err(ValidationError::InvalidLogin);
        }
    };
    if let Some(birthday) = user.birthday {
        if birthday > today {
            warn!("Invalid user birthday: {}", birthday);
            return Err(ValidationError::BirthdayInFuture);
        }
    }
    if is_blank(user.name.as_deref()) {
        user.name = Some(login.to_owned());
    }
    Ok(())
}
