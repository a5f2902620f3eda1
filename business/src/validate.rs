//! Form validation for the management dialogs.
//!
//! Returns the first failing rule as a user-facing message, the way the
//! dialogs display it in their error banner. Pure functions; the UI only
//! relays the result.

/// Input of the add/edit user dialog. `country` is free-form and not
/// validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserForm {
    pub username: String,
    pub email: String,
    pub country: String,
    pub birthday: String,
    pub gender_code: String,
}

/// Input of the add/edit game dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameForm {
    pub title: String,
    pub game_url: String,
    pub developer: String,
    pub thumbnail_url: String,
    pub release_date: String,
}

/// Input of the add/edit category dialog. `description` is free-form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryForm {
    pub name: String,
    pub icon_url: String,
    pub description: String,
}

fn valid_username(username: &str) -> bool {
    let len = username.chars().count();
    (6..=20).contains(&len)
        && username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '_')
}

/// Loose structural check: `local@domain.tld` with non-empty parts and an
/// alphabetic TLD of at least two characters.
fn valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
}

/// URL rule of the game/category dialogs: an ftp/http/https scheme with
/// a non-empty remainder containing no spaces or quotes.
fn valid_url(url: &str) -> bool {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .or_else(|| url.strip_prefix("ftp://"));
    match rest {
        Some(rest) => !rest.is_empty() && !rest.contains(' ') && !rest.contains('"'),
        None => false,
    }
}

/// Validate the add/edit user form. `Ok(())` or the first error message.
pub fn validate_user_form(form: &UserForm) -> Result<(), String> {
    if form.username.is_empty() {
        return Err("Please enter Username".to_owned());
    }
    if form.email.is_empty() {
        return Err("Please enter Email Address".to_owned());
    }
    if form.birthday.is_empty() {
        return Err("Please select your birthday".to_owned());
    }
    if !valid_username(&form.username) {
        return Err(
            "Usernames must contain only letters, numbers, periods and underscores and have 6 - 20 characters."
                .to_owned(),
        );
    }
    if !valid_email(&form.email) {
        return Err("Please enter a valid email address.".to_owned());
    }
    Ok(())
}

/// Validate the add/edit game form. The release date is taken as-is.
pub fn validate_game_form(form: &GameForm) -> Result<(), String> {
    if form.title.is_empty() {
        return Err("Please enter Title".to_owned());
    }
    if form.developer.is_empty() {
        return Err("Please enter Developer".to_owned());
    }
    if !valid_url(&form.thumbnail_url) {
        return Err("Please enter a valid url for Thumbnail".to_owned());
    }
    if !valid_url(&form.game_url) {
        return Err("Please enter a valid url for Game".to_owned());
    }
    Ok(())
}

/// Validate the add/edit category form.
pub fn validate_category_form(form: &CategoryForm) -> Result<(), String> {
    if form.name.is_empty() {
        return Err("Please enter Category Title".to_owned());
    }
    if form.icon_url.is_empty() {
        return Err("Please enter Category Icon".to_owned());
    }
    if !valid_url(&form.icon_url) {
        return Err("Please enter a valid url for Icon".to_owned());
    }
    Ok(())
}

/// Validate the reset-password dialog: non-empty, matching confirmation,
/// minimum length 8.
pub fn validate_password_reset(password: &str, confirm: &str) -> Result<(), String> {
    if password.is_empty() {
        return Err("Please enter a password".to_owned());
    }
    if password.chars().count() < 8 {
        return Err("Passwords must have at least 8 characters.".to_owned());
    }
    if password != confirm {
        return Err("Passwords do not match.".to_owned());
    }
    Ok(())
}
