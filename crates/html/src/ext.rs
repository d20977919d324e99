//! Extension methods for inserting markup into a [`Document`].

use quire_document::Document;

use crate::converter::{Converter, Target, default_converter};
use crate::error::Result;

pub trait HtmlExt {
    /// Converts `html` with the default converter and inserts it into
    /// `target`.
    ///
    /// Empty markup is skipped for section targets. For paragraph targets
    /// it is an error.
    fn add_html(&mut self, target: impl Into<Target>, html: &str) -> Result<()>;

    /// Inserts `contents` into `target` using any converter.
    fn add_converted(
        &mut self,
        target: impl Into<Target>,
        contents: &str,
        converter: &dyn Converter,
    ) -> Result<()>;
}

impl HtmlExt for Document {
    fn add_html(&mut self, target: impl Into<Target>, html: &str) -> Result<()> {
        let target = target.into();
        if html.is_empty() && matches!(target, Target::Section(_)) {
            tracing::debug!("Skipping empty markup for section");
            return Ok(());
        }
        self.add_converted(target, html, default_converter())
    }

    fn add_converted(
        &mut self,
        target: impl Into<Target>,
        contents: &str,
        converter: &dyn Converter,
    ) -> Result<()> {
        let insert = converter.prepare(contents)?;
        insert(self, target.into())
    }
}
