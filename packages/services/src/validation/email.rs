use std::sync::LazyLock;

// Local part may not end in '.' or '\''; domain needs at least one dot and a
// letters-only TLD of two or more characters.
static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@(?:[A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern is a valid regex")
});

/// Whether `email` has the shape of an email address.
///
/// The regex crate has no lookaround, so the leading-dot and double-dot
/// checks are done by hand.
pub fn is_email_shaped(email: &str) -> bool {
    !email.is_empty()
        && !email.starts_with('.')
        && !email.contains("..")
        && EMAIL_REGEX.is_match(email)
}
