//! Credit-card number formatting
//!
//! The field keeps the raw digits and displays them grouped in blocks of four.
//! The leading digit gives a card issuer hint used for the trailing icon; it
//! is never a validation of the number.

use serde::{Deserialize, Serialize};

/// Digits kept from user input
pub const MAX_DIGITS: usize = 16;

/// Display length of a full number with group spacing
pub const MAX_GROUPED_LEN: usize = 19;

const GROUP: usize = 4;

/// Card network guessed from the leading digit
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardIssuer {
    Visa,
    Mastercard,
    Amex,
    Discover,
    #[default]
    Unknown,
}

impl CardIssuer {
    /// Issuers with a dedicated icon
    pub const KNOWN: [CardIssuer; 4] = [
        CardIssuer::Visa,
        CardIssuer::Mastercard,
        CardIssuer::Amex,
        CardIssuer::Discover,
    ];

    /// Guess the issuer of a raw digit string
    pub fn detect(raw: &str) -> Self {
        match raw.chars().next() {
            Some('4') => CardIssuer::Visa,
            Some('5') => CardIssuer::Mastercard,
            Some('3') => CardIssuer::Amex,
            Some('6') => CardIssuer::Discover,
            _ => CardIssuer::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CardIssuer::Visa => "visa",
            CardIssuer::Mastercard => "mastercard",
            CardIssuer::Amex => "amex",
            CardIssuer::Discover => "discover",
            CardIssuer::Unknown => "unknown",
        }
    }

    /// Registry name of the issuer's icon
    pub fn icon_name(&self) -> Option<&'static str> {
        match self {
            CardIssuer::Visa => Some("card-visa"),
            CardIssuer::Mastercard => Some("card-mastercard"),
            CardIssuer::Amex => Some("card-amex"),
            CardIssuer::Discover => Some("card-discover"),
            CardIssuer::Unknown => None,
        }
    }
}

/// Output of [`format_card`]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FormattedCard {
    /// What the control shows
    pub display: String,
    /// Digits only
    pub raw: String,
    pub issuer: CardIssuer,
}

/// Keep only ASCII digits
pub fn strip_non_digits(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Split digits into blocks of four separated by a single space
pub fn group_digits(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + raw.len() / GROUP);
    for (i, c) in raw.chars().enumerate() {
        if i > 0 && i % GROUP == 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

/// Strip, group and classify a card number
pub fn format_card(input: &str) -> FormattedCard {
    let raw = strip_non_digits(input);
    FormattedCard {
        display: group_digits(&raw),
        issuer: CardIssuer::detect(&raw),
        raw,
    }
}

/// Per-field credit-card behavior
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardOptions {
    /// Issuers that get their own icon
    pub accepted: Vec<CardIssuer>,
    pub show_card_icon: bool,
    pub format_spaces: bool,
}

impl Default for CardOptions {
    fn default() -> Self {
        Self {
            accepted: CardIssuer::KNOWN.to_vec(),
            show_card_icon: true,
            format_spaces: true,
        }
    }
}

impl CardOptions {
    /// Maximum display length of the control
    pub fn max_length(&self) -> usize {
        if self.format_spaces {
            MAX_GROUPED_LEN
        } else {
            MAX_DIGITS
        }
    }

    pub fn is_accepted(&self, issuer: CardIssuer) -> bool {
        self.accepted.contains(&issuer)
    }

    /// Icon for the trailing slot
    pub fn icon_for(&self, issuer: CardIssuer) -> &'static str {
        match issuer.icon_name() {
            Some(name) if self.show_card_icon && self.is_accepted(issuer) => name,
            _ => "credit-card",
        }
    }
}

/// Reports an issuer only when it differs from the last one reported
#[derive(Clone, Copy, Debug, Default)]
pub struct IssuerTracker {
    last: Option<CardIssuer>,
}

impl IssuerTracker {
    /// Returns the issuer if it is a change
    pub fn observe(&mut self, issuer: CardIssuer) -> Option<CardIssuer> {
        let first_unknown = self.last.is_none() && issuer == CardIssuer::Unknown;
        if self.last == Some(issuer) || first_unknown {
            return None;
        }
        self.last = Some(issuer);
        Some(issuer)
    }

    /// Record an issuer without reporting it
    pub fn reset_to(&mut self, issuer: CardIssuer) {
        self.last = Some(issuer);
    }

    pub fn last(&self) -> Option<CardIssuer> {
        self.last
    }
}

/// Raw digits of a card field plus their derived issuer
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CardNumber {
    raw: String,
    issuer: CardIssuer,
}

impl CardNumber {
    /// Parse user input, keeping at most [`MAX_DIGITS`] digits
    pub fn parse(input: &str) -> Self {
        let raw: String = input
            .chars()
            .filter(|c| c.is_ascii_digit())
            .take(MAX_DIGITS)
            .collect();
        let issuer = CardIssuer::detect(&raw);
        Self { raw, issuer }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn issuer(&self) -> CardIssuer {
        self.issuer
    }

    /// Displayed form: grouped, or the bare digits without spacing
    pub fn display(&self, format_spaces: bool) -> String {
        if format_spaces {
            group_digits(&self.raw)
        } else {
            self.raw.clone()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_groups_and_detects() {
        let card = format_card("4111111111111111");
        assert_eq!(card.display, "4111 1111 1111 1111");
        assert_eq!(card.raw, "4111111111111111");
        assert_eq!(card.issuer, CardIssuer::Visa);
    }

    #[test]
    fn test_format_strips_non_digits() {
        let card = format_card("5500-0000 00a");
        assert_eq!(card.raw, "5500000000");
        assert_eq!(card.display, "5500 0000 00");
        assert_eq!(card.issuer, CardIssuer::Mastercard);
    }

    #[test]
    fn test_display_strips_back_to_raw() {
        let numbers = ["4", "41111", "55000000", "340000000000009", "6011111111111117"];
        for raw in numbers {
            let display = format_card(raw).display;
            assert_eq!(strip_non_digits(&display), raw);
            assert_eq!(format_card(&display).raw, raw);

            // Spaces anywhere in the typed text group the same way
            for step in 1..=raw.len() {
                let spaced: String = raw
                    .chars()
                    .enumerate()
                    .flat_map(|(i, c)| {
                        let gap = (i > 0 && i % step == 0).then_some(' ');
                        gap.into_iter().chain(std::iter::once(c))
                    })
                    .collect();
                let card = format_card(&spaced);
                assert_eq!(card.raw, raw, "typed {spaced:?}");
                assert_eq!(card.display, display, "typed {spaced:?}");
            }
        }

        let card = format_card("41 11 1111");
        assert_eq!(card.raw, "41111111");
        assert_eq!(card.display, "4111 1111");
    }

    #[test]
    fn test_format_empty_and_short() {
        assert_eq!(format_card(""), FormattedCard::default());
        assert_eq!(format_card("1234").display, "1234");
        assert_eq!(format_card("12345").display, "1234 5");
        assert_eq!(format_card("9").issuer, CardIssuer::Unknown);
    }

    #[test]
    fn test_issuer_by_leading_digit() {
        assert_eq!(CardIssuer::detect("34"), CardIssuer::Amex);
        assert_eq!(CardIssuer::detect("6011"), CardIssuer::Discover);
        assert_eq!(CardIssuer::detect("1"), CardIssuer::Unknown);
        assert_eq!(CardIssuer::detect(""), CardIssuer::Unknown);
    }

    #[test]
    fn test_card_number_truncates() {
        let number = CardNumber::parse("4111 1111 1111 1111 9999");
        assert_eq!(number.raw().len(), MAX_DIGITS);
        assert_eq!(number.display(true).len(), MAX_GROUPED_LEN);
        assert_eq!(number.display(false), "4111111111111111");
    }

    #[test]
    fn test_options() {
        let options = CardOptions::default();
        assert_eq!(options.max_length(), 19);
        assert_eq!(options.icon_for(CardIssuer::Visa), "card-visa");
        assert_eq!(options.icon_for(CardIssuer::Unknown), "credit-card");

        let options = CardOptions {
            accepted: vec![CardIssuer::Visa],
            format_spaces: false,
            ..Default::default()
        };
        assert_eq!(options.max_length(), 16);
        assert_eq!(options.icon_for(CardIssuer::Amex), "credit-card");

        let hidden = CardOptions {
            show_card_icon: false,
            ..Default::default()
        };
        assert_eq!(hidden.icon_for(CardIssuer::Visa), "credit-card");
    }

    #[test]
    fn test_tracker_reports_changes_only() {
        let mut tracker = IssuerTracker::default();
        assert_eq!(tracker.observe(CardIssuer::Unknown), None);
        assert_eq!(tracker.observe(CardIssuer::Visa), Some(CardIssuer::Visa));
        assert_eq!(tracker.observe(CardIssuer::Visa), None);
        assert_eq!(tracker.observe(CardIssuer::Visa), None);
        assert_eq!(tracker.observe(CardIssuer::Unknown), Some(CardIssuer::Unknown));
        assert_eq!(tracker.observe(CardIssuer::Amex), Some(CardIssuer::Amex));
        assert_eq!(tracker.last(), Some(CardIssuer::Amex));
    }
}
