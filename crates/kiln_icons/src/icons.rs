//! Icon bodies
//!
//! Each icon is a `&'static str` holding the SVG inner elements drawn on a
//! 24x24 stroke grid. Use [`crate::to_svg`] to wrap one in a complete SVG tag.

/// attachment
pub const ATTACHMENT: &str = r#"<path d="M15 7.5 7.19 15.44a1.5 1.5 0 0 0 2.12 2.12l9.31-9.44a3 3 0 0 0-4.24-4.24l-9.31 9.44a4.5 4.5 0 0 0 6.36 6.36L19.12 12"/>"#;

/// card amex
pub const CARD_AMEX: &str = r#"<rect width="20" height="14" x="2" y="5" rx="2"/><path d="m6 15 2-6 2 6"/><path d="M6.7 13h2.6"/><path d="M12 15V9l2 3 2-3v6"/>"#;

/// card discover
pub const CARD_DISCOVER: &str = r#"<rect width="20" height="14" x="2" y="5" rx="2"/><circle cx="15" cy="12" r="2.5"/><path d="M6 10h3"/><path d="M6 14h3"/>"#;

/// card mastercard
pub const CARD_MASTERCARD: &str = r#"<rect width="20" height="14" x="2" y="5" rx="2"/><circle cx="10" cy="12" r="3"/><circle cx="14" cy="12" r="3"/>"#;

/// card visa
pub const CARD_VISA: &str = r#"<rect width="20" height="14" x="2" y="5" rx="2"/><path d="m6 9 2 6 2-6"/><path d="M12 9v6"/><path d="M18 9h-2.5a1.5 1.5 0 0 0 0 3h1a1.5 1.5 0 0 1 0 3H14"/>"#;

/// check
pub const CHECK: &str = r#"<path d="M20 6 9 17l-5-5"/>"#;

/// chevron down
pub const CHEVRON_DOWN: &str = r#"<path d="m6 9 6 6 6-6"/>"#;

/// chevron left
pub const CHEVRON_LEFT: &str = r#"<path d="m15 18-6-6 6-6"/>"#;

/// chevron right
pub const CHEVRON_RIGHT: &str = r#"<path d="m9 18 6-6-6-6"/>"#;

/// chevron up
pub const CHEVRON_UP: &str = r#"<path d="m18 15-6-6-6 6"/>"#;

/// credit card
pub const CREDIT_CARD: &str = r#"<rect width="20" height="14" x="2" y="5" rx="2"/><line x1="2" x2="22" y1="10" y2="10"/>"#;

/// delete
pub const DELETE: &str = r#"<path d="M3 6h18"/><path d="M19 6v14c0 1-1 2-2 2H7c-1 0-2-1-2-2V6"/><path d="M8 6V4c0-1 1-2 2-2h4c1 0 2 1 2 2v2"/>"#;

/// download
pub const DOWNLOAD: &str = r#"<path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"/><polyline points="7,10 12,15 17,10"/><line x1="12" x2="12" y1="15" y2="3"/>"#;

/// edit
pub const EDIT: &str = r#"<path d="M11 4H4a2 2 0 0 0-2 2v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2v-7"/><path d="M18.5 2.5a2.121 2.121 0 0 1 3 3L12 15l-4 1 1-4 9.5-9.5z"/>"#;

/// error
pub const ERROR: &str = r#"<circle cx="12" cy="12" r="10"/><path d="m15 9-6 6"/><path d="m9 9 6 6"/>"#;

/// eye
pub const EYE: &str = r#"<path d="M2 12s3-7 10-7 10 7 10 7-3 7-10 7-10-7-10-7Z"/><circle cx="12" cy="12" r="3"/>"#;

/// eye off
pub const EYE_OFF: &str = r#"<path d="M10.73 5.08A10.43 10.43 0 0 1 12 5c7 0 10 7 10 7a13.16 13.16 0 0 1-1.67 2.68"/><path d="M6.61 6.61A13.53 13.53 0 0 0 2 12s3 7 10 7a9.74 9.74 0 0 0 5.39-1.61"/><path d="M9.88 9.88a3 3 0 1 0 4.24 4.24"/><line x1="2" x2="22" y1="2" y2="22"/>"#;

/// heart
pub const HEART: &str = r#"<path d="M20.84 4.61a5.5 5.5 0 0 0-7.78 0L12 5.67l-1.06-1.06a5.5 5.5 0 0 0-7.78 7.78l1.06 1.06L12 21.23l7.78-7.78 1.06-1.06a5.5 5.5 0 0 0 0-7.78z"/>"#;

/// info
pub const INFO: &str = r#"<circle cx="12" cy="12" r="10"/><path d="M12 16v-4"/><path d="M12 8h.01"/>"#;

/// loading
pub const LOADING: &str = r#"<path d="M21 12a9 9 0 1 1-6.219-8.56"/>"#;

/// plus
pub const PLUS: &str = r#"<path d="M5 12h14"/><path d="M12 5v14"/>"#;

/// refresh
pub const REFRESH: &str = r#"<path d="M3 12a9 9 0 0 1 9-9 9.75 9.75 0 0 1 6.74 2.74L21 8"/><path d="M21 3v5h-5"/><path d="M21 12a9 9 0 0 1-9 9 9.75 9.75 0 0 1-6.74-2.74L3 16"/><path d="M8 16H3v5"/>"#;

/// search
pub const SEARCH: &str = r#"<circle cx="11" cy="11" r="8"/><path d="m21 21-4.35-4.35"/>"#;

/// settings
pub const SETTINGS: &str = r#"<circle cx="12" cy="12" r="3"/><path d="M12 1v6m0 6v6"/><path d="m21 12-6-6-6 6-6-6"/>"#;

/// upload
pub const UPLOAD: &str = r#"<path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"/><polyline points="17,8 12,3 7,8"/><line x1="12" x2="12" y1="3" y2="15"/>"#;

/// warning
pub const WARNING: &str = r#"<path d="m21.73 18-8-14a2 2 0 0 0-3.48 0l-8 14A2 2 0 0 0 4 21h16a2 2 0 0 0 1.73-3Z"/><path d="M12 9v4"/><path d="M12 17h.01"/>"#;

/// x
pub const X: &str = r#"<path d="M18 6 6 18"/><path d="m6 6 12 12"/>"#;
