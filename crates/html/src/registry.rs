//! Tag-keyed table of node handlers.

use std::collections::HashMap;
use std::sync::Arc;

use quire_document::Document;

use crate::config::ConversionConfig;
use crate::context::Context;
use crate::error::{ConvertError, Result};
use crate::handlers;
use crate::markup::MarkupNode;
use crate::tag::TagKey;

/// A node handler: attaches whatever `node` stands for to `context` and
/// returns the context its children should use.
pub type Handler =
    Arc<dyn Fn(MarkupNode<'_>, Context, &mut Document) -> Result<Context> + Send + Sync>;

/// Wraps a function or closure as a [`Handler`].
pub fn handler<F>(f: F) -> Handler
where
    F: Fn(MarkupNode<'_>, Context, &mut Document) -> Result<Context> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Registry of node handlers.
///
/// Tags without a handler are transparent during conversion: their children
/// are converted in the enclosing context.
#[derive(Clone)]
pub struct HandlerRegistry {
    handlers: HashMap<TagKey, Handler>,
}

impl HandlerRegistry {
    /// A registry with no handlers at all.
    pub fn empty() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// A registry seeded with the default handler set.
    pub fn new() -> Self {
        Self::with_defaults(&ConversionConfig::default())
    }

    pub fn with_defaults(config: &ConversionConfig) -> Self {
        let mut registry = Self::empty();
        handlers::install_defaults(&mut registry, config);
        registry
    }

    /// Register a handler for a tag that has none yet.
    pub fn register<F>(&mut self, tag: &str, f: F) -> Result<()>
    where
        F: Fn(MarkupNode<'_>, Context, &mut Document) -> Result<Context> + Send + Sync + 'static,
    {
        let key: TagKey = tag.parse()?;
        if self.handlers.contains_key(&key) {
            return Err(ConvertError::DuplicateHandler {
                tag: key.to_string(),
            });
        }

        tracing::debug!(tag = %key, "Registered node handler");
        self.handlers.insert(key, handler(f));
        Ok(())
    }

    /// Install a handler, returning the one it displaced.
    pub fn replace<F>(&mut self, tag: &str, f: F) -> Result<Option<Handler>>
    where
        F: Fn(MarkupNode<'_>, Context, &mut Document) -> Result<Context> + Send + Sync + 'static,
    {
        let key: TagKey = tag.parse()?;
        let previous = self.handlers.insert(key.clone(), handler(f));
        if previous.is_some() {
            tracing::debug!(tag = %key, "Replaced node handler");
        } else {
            tracing::debug!(tag = %key, "Registered node handler");
        }
        Ok(previous)
    }

    /// Remove a handler, making the tag transparent.
    pub fn remove(&mut self, tag: &str) -> Result<Option<Handler>> {
        let key: TagKey = tag.parse()?;
        Ok(self.handlers.remove(&key))
    }

    pub fn contains(&self, tag: &str) -> bool {
        tag.parse::<TagKey>()
            .is_ok_and(|key| self.handlers.contains_key(&key))
    }

    pub fn get(&self, key: &TagKey) -> Option<&Handler> {
        self.handlers.get(key)
    }

    /// Registered keys, sorted.
    pub fn tags(&self) -> Vec<&TagKey> {
        let mut tags: Vec<_> = self.handlers.keys().collect();
        tags.sort();
        tags
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Insert without validation; `key` is known to be well formed.
    pub(crate) fn install(&mut self, key: TagKey, handler: Handler) {
        self.handlers.insert(key, handler);
    }
}

impl Default for HandlerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
