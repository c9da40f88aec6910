//! Outbound contact links and phone number helpers.
//!
//! Students reach a tutor through a messaging deep link with a prefilled
//! greeting. Opening the link is left to the host environment.

use crate::models::TutorRecord;

/// Messaging service used when no other base URL is configured
pub const DEFAULT_MESSAGING_BASE_URL: &str = "https://wa.me";

/// Keep only ASCII digits.
pub fn digits_only(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// Greeting prefilled into the outbound message.
pub fn greeting(subject: &str) -> String {
    format!("Hello! I'm interested in {subject} tutoring. I found your profile on TutorLink.")
}

/// Build `<base>/<digits>?text=<greeting>` for a contact handle and subject.
///
/// The handle is not validated: every non-digit is dropped and whatever
/// digits remain are embedded verbatim.
pub fn contact_link(messaging_base_url: &str, contact_handle: &str, subject: &str) -> String {
    format!(
        "{}/{}?text={}",
        messaging_base_url.trim_end_matches('/'),
        digits_only(contact_handle),
        urlencoding::encode(&greeting(subject))
    )
}

/// Contact link for a tutor listing.
pub fn tutor_contact_link(messaging_base_url: &str, tutor: &TutorRecord) -> String {
    contact_link(messaging_base_url, &tutor.contact_handle, &tutor.subject)
}

/// Format a phone number for display.
///
/// - 10 digits: `(123) 456-7890`
/// - 11 digits with a leading 1: `+1 (234) 567-8901`
/// - more than 11 digits: `+` followed by the digits
///
/// Anything else is returned unchanged.
pub fn format_phone_number(phone_number: &str) -> String {
    let digits = digits_only(phone_number);
    match digits.len() {
        10 => format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..]),
        11 if digits.starts_with('1') => {
            format!("+1 ({}) {}-{}", &digits[1..4], &digits[4..7], &digits[7..])
        }
        len if len > 11 => format!("+{digits}"),
        _ => phone_number.to_string(),
    }
}
