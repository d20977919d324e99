use std::fs;
use std::io::{self, Read};

use eyre::{Result, WrapErr};
use quire_document::Document;
use quire_html::{ConversionConfig, HandlerRegistry, HtmlConverter, HtmlExt, Target};

use crate::cli::InsertInto;
use crate::config::{Config, OutputFormat};

pub fn handle_convert(
    input: &str,
    into: InsertInto,
    format: Option<OutputFormat>,
    max_depth: Option<usize>,
    config: &Config,
) -> Result<()> {
    let html = read_input(input)?;

    let mut conversion = config.conversion.clone();
    if let Some(max_depth) = max_depth {
        conversion = conversion.with_max_depth(max_depth);
    }
    let format = format.unwrap_or(config.output.format);

    let document = convert(&html, into, conversion)?;
    println!("{}", render(&document, format)?);
    Ok(())
}

pub fn handle_tags(config: &Config) -> Result<()> {
    let registry = HandlerRegistry::with_defaults(&config.conversion);
    for tag in registry.tags() {
        println!("{tag}");
    }
    Ok(())
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut html = String::new();
        io::stdin()
            .read_to_string(&mut html)
            .wrap_err("Failed to read standard input")?;
        return Ok(html);
    }
    fs::read_to_string(input).wrap_err_with(|| format!("Failed to read {input}"))
}

/// Converts `html` into a new document holding a single section.
fn convert(html: &str, into: InsertInto, config: ConversionConfig) -> Result<Document> {
    let converter = HtmlConverter::with_config(config);
    let mut document = Document::new();
    let section = document.add_section();
    let target = match into {
        InsertInto::Section => Target::Section(section),
        InsertInto::Paragraph => Target::Paragraph(document.add_paragraph(section)?),
    };

    document
        .add_converted(target, html, &converter)
        .wrap_err("Failed to convert HTML")?;
    tracing::info!(
        paragraphs = document.paragraphs(section)?.len(),
        "Converted HTML"
    );
    Ok(document)
}

fn render(document: &Document, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Outline => Ok(document.to_string().trim_end().to_string()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&document.view())?),
    }
}
