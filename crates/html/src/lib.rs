//! Quire HTML - converts HTML fragments into a [`quire_document::Document`].
//!
//! Markup is parsed with `scraper` and walked depth first. Every node whose
//! tag has a registered handler is handed to it together with the current
//! insertion [`Context`]; the context the handler returns is where the
//! node's children go. Tags without a handler are transparent.
//!
//! ```ignore
//! use quire_document::Document;
//! use quire_html::HtmlExt;
//!
//! let mut document = Document::new();
//! let section = document.add_section();
//! document.add_html(section, "<p>Hello <strong>World</strong></p>")?;
//! ```

pub mod config;
pub mod context;
pub mod converter;
mod engine;
pub mod error;
pub mod ext;
pub mod handlers;
pub mod list;
pub mod markup;
pub mod registry;
pub mod style;
pub mod tag;

pub use config::ConversionConfig;
pub use context::Context;
pub use converter::{
    Conversion, Converter, HtmlConverter, InsertAction, Target, convert_html, default_converter,
};
pub use error::{ConvertError, Result};
pub use ext::HtmlExt;
pub use markup::{Markup, MarkupNode};
pub use registry::{Handler, HandlerRegistry, handler};
pub use tag::{TEXT_TAG, TagKey};
