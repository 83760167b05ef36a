//! User-facing notices and their translations.

use crate::flow::{FIXED_LIGHTNING_ADDRESS, FIXED_RECIPIENT_HANDLE};

/// Notices the donation flow shows to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notice {
    /// Progress message while the donation is in flight.
    DonationProgress,
    /// Generic failure notice, whatever the cause.
    DonationError,
    DonationSuccess,
    /// Prompt asking the user to type an amount.
    EnterAmount,
    /// Usage help; `%s` is replaced by an optional error line.
    DonateHelp,
    /// Tells the user where donations go.
    RecipientNotice,
}

/// Localized string lookup.
pub trait Translations: Send + Sync {
    fn text(&self, notice: Notice) -> String;
}

/// English notices.
#[derive(Debug, Clone, Copy, Default)]
pub struct English;

impl Translations for English {
    fn text(&self, notice: Notice) -> String {
        match notice {
            Notice::DonationProgress => "🧮 Preparing your donation...".to_string(),
            Notice::DonationError => "🚫 Oh no. Donation failed.".to_string(),
            Notice::DonationSuccess => "🙏 Thank you for your donation.".to_string(),
            Notice::EnterAmount => "⌨️ Enter an amount.".to_string(),
            Notice::DonateHelp => {
                "📖 Oops, that didn't work. %s\n\n*Usage:* `/donate <amount>`\n*Example:* `/donate 1000`"
                    .to_string()
            }
            Notice::RecipientNotice => format!(
                "Thanks! Donations initiated here will be forwarded to {} ({}).",
                FIXED_RECIPIENT_HANDLE, FIXED_LIGHTNING_ADDRESS
            ),
        }
    }
}

/// Render the `/donate` usage help with an optional error line.
///
/// The flow itself only shows the generic failure notice; this is for the
/// host dispatcher's `/help donate` reply and for command-line front ends.
pub fn help_donate_usage(translations: &dyn Translations, error: Option<&str>) -> String {
    translations
        .text(Notice::DonateHelp)
        .replacen("%s", error.unwrap_or(""), 1)
}

/// Escape Telegram Markdown control characters.
pub fn markdown_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '_' | '*' | '`' | '[') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
