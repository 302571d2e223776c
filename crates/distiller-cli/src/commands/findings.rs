//! Findings command implementation.

use crate::cli::FindingsArgs;
use crate::error::Result;
use crate::output::Formatter;
use crate::source::{load_pages, DocumentSource};
use distiller_domain::Page;
use distiller_extractor::findings;
use distiller_nlp::EntityTagger;

/// Every header sentence of every page, as `(page, sentence)` pairs.
pub fn collect_findings(pages: &[Page], tagger: &EntityTagger) -> Vec<(u32, String)> {
    pages
        .iter()
        .flat_map(|page| {
            let tagged = tagger.tag(page.text());
            findings(&tagged)
                .into_iter()
                .map(|sentence| (page.page_number(), sentence))
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Execute the findings command.
pub fn execute_findings(args: FindingsArgs, tagger: &EntityTagger, formatter: &Formatter) -> Result<()> {
    let source = DocumentSource::open(&args.input)?;
    let pages = load_pages(&source)?;
    println!("{}", formatter.format_findings(&collect_findings(&pages, tagger))?);
    Ok(())
}
