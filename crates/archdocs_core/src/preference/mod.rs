//! Persisted UI preferences.
//!
//! # Responsibility
//! - Model the theme choice and the theme actually applied.
//! - Persist preferences behind the `PreferenceStore` seam.
//!
//! # Invariants
//! - The theme lives under the single key [`theme::THEME_STORAGE_KEY`].
//! - Absent or unreadable stored values fall back to `Theme::System`.

pub mod store;
pub mod theme;
