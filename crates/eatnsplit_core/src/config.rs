//! Fixed app settings. There is no runtime configuration: everything is chosen at build time.

/// Placeholder avatar service; the add-friend form starts with this value.
pub const DEFAULT_AVATAR_URL: &str = "https://i.pravatar.cc/48";

/// Shown after every amount in balance messages.
pub const CURRENCY_SYMBOL: &str = "€";

pub const APP_TITLE: &str = "Eat n Split App";

/// Personalised avatar for a new friend: `<url>?=<name>`.
pub fn personalised_avatar(avatar_url: &str, name: &str) -> String {
    format!("{}?={}", avatar_url, name)
}
