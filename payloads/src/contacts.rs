//! Turning address-book entries into invitable contacts.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

const COUNTRY_CODE: &str = "+91";

/// A single invitable phone number with the name it was stored under.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub contact_name: String,
    pub contact_phone_number: String,
}

/// Address-book entry as handed over by the device contacts API.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawContact {
    first_name: Option<String>,
    last_name: Option<String>,
    name: Option<String>,
    #[serde(default)]
    phone_numbers: Vec<RawPhoneNumber>,
}

#[derive(Debug, Deserialize)]
struct RawPhoneNumber {
    number: Option<String>,
}

impl RawContact {
    fn display_name(&self) -> String {
        let full = format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or_default(),
            self.last_name.as_deref().unwrap_or_default()
        );
        let full = full.trim();
        if !full.is_empty() {
            return full.to_string();
        }
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => "Unknown".to_string(),
        }
    }
}

/// Canonicalize a phone number to `+91XXXXXXXXXX`.
///
/// Only Indian numbers are understood: a leading `+91`, `91` or trunk `0`
/// is replaced by `+91`, and anything else without a country code is
/// assumed to be a local number. Returns `None` when no digits remain.
///
/// This is stricter than replacing every leading `91` in two places:
///
/// * A bare `91` prefix is only treated as the country code on a
///   twelve-digit number, so a ten-digit local number that starts with
///   `91` keeps its digits.
/// * Numbers carrying some other `+` country code are returned as
///   dialed, minus punctuation, instead of being forced under `+91`.
pub fn normalize_phone_number(raw: &str) -> Option<String> {
    let raw = raw.trim();
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }

    let local = if raw.starts_with('+') {
        match digits.strip_prefix("91") {
            Some(local) => local,
            None => return Some(format!("+{digits}")),
        }
    } else if digits.len() == 12
        && let Some(local) = digits.strip_prefix("91")
    {
        local
    } else if let Some(local) = digits.strip_prefix('0') {
        local
    } else {
        digits.as_str()
    };

    if local.is_empty() {
        return None;
    }
    Some(format!("{COUNTRY_CODE}{local}"))
}

/// Drop repeated (name, number) pairs, keeping the first occurrence.
pub fn dedupe_contacts(
    contacts: impl IntoIterator<Item = Contact>,
) -> Vec<Contact> {
    contacts.into_iter().collect::<IndexSet<_>>().into_iter().collect()
}

/// Flatten raw address-book entries into one [`Contact`] per normalized
/// phone number.
///
/// Numbers that are missing or contain no digits are skipped. If an entry
/// cannot be read at all, the contacts gathered up to that point are
/// returned.
pub fn simplify_contacts(raw: &[serde_json::Value]) -> Vec<Contact> {
    let mut seen = IndexSet::new();

    for (index, value) in raw.iter().enumerate() {
        let contact = match RawContact::deserialize(value) {
            Ok(contact) => contact,
            Err(e) => {
                tracing::warn!(
                    "stopping at malformed contact {index}: {e}; \
                     keeping {} contacts",
                    seen.len()
                );
                break;
            }
        };

        let name = contact.display_name();
        let numbers = contact
            .phone_numbers
            .iter()
            .filter_map(|p| p.number.as_deref());
        for number in numbers {
            if let Some(number) = normalize_phone_number(number) {
                seen.insert(Contact {
                    contact_name: name.clone(),
                    contact_phone_number: number,
                });
            }
        }
    }

    seen.into_iter().collect()
}
