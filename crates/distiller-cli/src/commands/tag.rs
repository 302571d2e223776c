//! Tag command implementation.

use crate::cli::TagArgs;
use crate::error::{CliError, Result};
use crate::output::{EntityRow, Formatter};
use crate::source::{load_pages, DocumentSource};
use distiller_domain::Page;
use distiller_nlp::EntityTagger;

/// Tag pages and list their entities in page order.
pub fn tag_pages(pages: &[Page], tagger: &EntityTagger) -> Vec<EntityRow> {
    pages
        .iter()
        .flat_map(|page| {
            tagger
                .tag(page.text())
                .results()
                .into_iter()
                .map(|(text, label)| EntityRow {
                    page_number: page.page_number(),
                    label,
                    text,
                })
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Execute the tag command.
pub fn execute_tag(args: TagArgs, tagger: &EntityTagger, formatter: &Formatter) -> Result<()> {
    let source = DocumentSource::open(&args.input)?;
    let mut pages = load_pages(&source)?;

    if let Some(page_number) = args.page {
        pages.retain(|p| p.page_number() == page_number);
        if pages.is_empty() {
            return Err(CliError::InvalidInput(format!(
                "Page {} not found in {}",
                page_number,
                args.input.display()
            )));
        }
    }

    println!("{}", formatter.format_entities(&tag_pages(&pages, tagger))?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use distiller_domain::Label;

    #[test]
    fn test_tag_pages() {
        let tagger = EntityTagger::with_defaults().unwrap();
        let pages = vec![
            Page::new(0, "Nothing here."),
            Page::new(1, "2019-001 Cause: x. Corrective action: y."),
        ];
        let rows = tag_pages(&pages, &tagger);
        let labels: Vec<Label> = rows.iter().map(|r| r.label).collect();
        assert_eq!(labels, vec![Label::AuditNumber, Label::Cause, Label::CorrectiveAction]);
        assert!(rows.iter().all(|r| r.page_number == 1));
    }
}
