//! HTML converter entry points.
//!
//! Conversion is two-staged: [`HtmlConverter::convert`] parses the markup
//! up front, and the returned [`Conversion`] inserts it into a document
//! target when asked to, as often as needed.

use once_cell::sync::Lazy;
use quire_document::{Document, ParagraphId, SectionId};

use crate::config::ConversionConfig;
use crate::context::Context;
use crate::engine::Walker;
use crate::error::Result;
use crate::markup::Markup;
use crate::registry::HandlerRegistry;

static DEFAULT_CONVERTER: Lazy<HtmlConverter> = Lazy::new(HtmlConverter::new);

/// Container converted markup is inserted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Section(SectionId),
    Paragraph(ParagraphId),
}

impl Target {
    /// Checks the target exists in `document` and returns it as the
    /// fallback context.
    fn resolve(self, document: &Document) -> Result<Context> {
        match self {
            Target::Section(id) => {
                document.section(id)?;
                Ok(Context::Section(id))
            }
            Target::Paragraph(id) => {
                document.paragraph(id)?;
                Ok(Context::Paragraph(id))
            }
        }
    }
}

impl From<SectionId> for Target {
    fn from(id: SectionId) -> Self {
        Target::Section(id)
    }
}

impl From<ParagraphId> for Target {
    fn from(id: ParagraphId) -> Self {
        Target::Paragraph(id)
    }
}

/// Deferred insertion produced by a [`Converter`].
pub type InsertAction<'c> = Box<dyn Fn(&mut Document, Target) -> Result<()> + 'c>;

/// Turns source text into an insertion into a document.
pub trait Converter {
    /// Validates and parses `contents`; the returned action performs the
    /// insertion.
    fn prepare<'c>(&'c self, contents: &str) -> Result<InsertAction<'c>>;
}

/// HTML to document converter
pub struct HtmlConverter {
    registry: HandlerRegistry,
    config: ConversionConfig,
}

impl HtmlConverter {
    /// Create a new converter with the default handlers and configuration
    pub fn new() -> Self {
        Self::with_config(ConversionConfig::default())
    }

    /// Create a new converter with custom configuration
    pub fn with_config(config: ConversionConfig) -> Self {
        Self {
            registry: HandlerRegistry::with_defaults(&config),
            config,
        }
    }

    /// Create a converter around an existing registry.
    pub fn with_registry(registry: HandlerRegistry, config: ConversionConfig) -> Self {
        Self { registry, config }
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    pub fn registry(&self) -> &HandlerRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut HandlerRegistry {
        &mut self.registry
    }

    /// Parse `markup`. Fails right away for empty markup.
    pub fn convert(&self, markup: &str) -> Result<Conversion<'_>> {
        let markup = Markup::parse(markup)?;
        Ok(Conversion {
            converter: self,
            markup,
        })
    }
}

impl Default for HtmlConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl Converter for HtmlConverter {
    fn prepare<'c>(&'c self, contents: &str) -> Result<InsertAction<'c>> {
        let conversion = self.convert(contents)?;
        Ok(Box::new(move |document: &mut Document, target: Target| {
            conversion.insert_into(document, target)
        }))
    }
}

/// Parsed markup bound to the converter that will insert it.
pub struct Conversion<'c> {
    converter: &'c HtmlConverter,
    markup: Markup,
}

impl Conversion<'_> {
    pub fn markup(&self) -> &Markup {
        &self.markup
    }

    /// Walks the markup and attaches the result to `target`.
    ///
    /// On error, whatever was inserted before the failure stays in the
    /// document.
    pub fn insert_into(&self, document: &mut Document, target: impl Into<Target>) -> Result<()> {
        let target = target.into().resolve(document)?;
        let span = tracing::debug_span!("insert_html", target = %target.kind());
        let _enter = span.enter();

        let walker = Walker::new(
            &self.converter.registry,
            target,
            self.converter.config.max_depth,
        );
        let handled = walker.run(document, self.markup.root())?;
        tracing::debug!(handled, "Inserted converted markup");
        Ok(())
    }
}

/// Convenience function to convert HTML into `target` with the default
/// converter
pub fn convert_html(
    markup: &str,
    document: &mut Document,
    target: impl Into<Target>,
) -> Result<()> {
    DEFAULT_CONVERTER.convert(markup)?.insert_into(document, target)
}

/// The shared converter with default handlers and configuration.
pub fn default_converter() -> &'static HtmlConverter {
    &DEFAULT_CONVERTER
}
