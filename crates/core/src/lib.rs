//! Domain logic for the QR generation service.
//!
//! Pure, synchronous building blocks: color resolution, vCard assembly,
//! landing-page HTML rendering, and QR PNG rasterization. No HTTP and no
//! filesystem access here; the `qrforge-api` crate wires these into
//! handlers and persists generated pages.

pub mod color;
pub mod error;
pub mod page;
pub mod qr;
pub mod vcard;

pub use error::CoreError;
