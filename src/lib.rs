//! Pixel and vertex element format registry.
//!
//! Re-exports the format queries from `texfmt_format`, and the logger they report through as [`logging`].
//! Install a logger with [`logging::set_logger`] to see warnings about unrecognized names and misused queries.
//!
//! ```
//! use texfmt::*;
//!
//! let texture = Format::from_name("R24G8_TYPELESS");
//! assert_eq!(texture.resolve(AspectFilter::Depth, FormatUsage::DepthStencil), Format::D24UNormS8UInt);
//! assert_eq!(texture.resolve(AspectFilter::Depth, FormatUsage::ShaderResource), Format::R24UNormX8Typeless);
//! ```

pub use texfmt_base::{EnumCountT, EnumFromIndexT, EnumFromNameT};
pub use texfmt_format::*;
pub use texfmt_logging as logging;
