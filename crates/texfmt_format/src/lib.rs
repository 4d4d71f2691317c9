//! Pixel and vertex element format registry.
//!
//! Every [`Format`] is classified by its compression, channel grouping, channel type and size.
//! On top of that classification the crate provides:
//! - lookups from a classification or a canonical name to a format
//! - mappings between related formats, e.g. linear <-> sRGB, typed <-> typeless and depth/stencil aspect views
//! - the format used to store a vertex element
//! - the format a view onto a resource should use for a given aspect and usage
//!
//! All queries are pure lookups into static tables, so they can be called from any thread.

extern crate static_assertions as sa;

mod format;
mod result;
mod derivation;
mod element;
mod resolve;
mod view;
mod validate;

pub use format::*;
pub use result::*;
pub use element::*;
pub use resolve::*;
pub use view::*;
pub use validate::*;

#[cfg(feature = "validation")]
pub(crate) const LOG_CAT: texfmt_logging::LogCategory = texfmt_logging::LogCategory::new("Format");
