//! Provide the check vocabulary shared by the pairsuite registrar and any suite runner.
//!
//! This crate is intentionally small and dependency-free. It contains the pieces both sides of a suite handoff
//! must agree on:
//! - the tagged comparison value a deferred check produces ([`Check`]),
//! - the source location string a test passes as its label prefix ([`Location`]),
//! - the label format itself ([`label`]).
//!
//! ## Notes
//!
//! - This is a “semantic core” crate: **no IO**, no global state, and no registrar-specific types.

pub mod check;
pub mod location;

pub use check::{Check, CheckKind};
pub use location::Location;

/// Separator placed between a location and the registration id in every label.
pub const LABEL_ID_SEPARATOR: &str = " id ";

/// Build the label for the `id`-th registration made at `location`.
///
/// ## Parameters
/// - `location`: free-form location text (usually a rendered [`Location`]).
/// - `id`: the registrar counter value *after* the registration was counted (first registration is `1`).
///
/// ## Returns
/// - (`String`): `location + " id " + id`.
///
/// ## Examples
/// ```rust
/// assert_eq!(pairsuite_core::label("L", 1), "L id 1");
/// ```
pub fn label(location: &str, id: u32) -> String {
    let id = id.to_string();
    let mut out = String::with_capacity(location.len() + LABEL_ID_SEPARATOR.len() + id.len());
    out.push_str(location);
    out.push_str(LABEL_ID_SEPARATOR);
    out.push_str(&id);
    out
}
