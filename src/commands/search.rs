//! Search command - print one or more pages of results

use crate::{
    ImgseekError, Result,
    api::ImageSearch,
    output::{self, PageReport},
    search::{FetchCompletion, Resolution, SearchController},
    ui::output::OutputWriter,
};
use tracing::debug;

/// Options for a one-shot search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions<'a> {
    pub query: &'a str,
    /// Maximum number of pages to print, following "next"
    pub pages: u32,
    pub per_page: u32,
    pub json: bool,
    pub quiet: bool,
}

/// Execute the search command
///
/// Submits the query through a `SearchController` and keeps stepping to the
/// next page until `pages` pages have been printed or there is no next page.
/// JSON mode prints one object per page.
///
/// # Errors
///
/// Returns `InvalidInput` for blank search text and `FetchFailed` if a page
/// cannot be fetched. Pages printed before the failure stay printed.
pub fn execute(
    service: &dyn ImageSearch,
    options: &SearchOptions<'_>,
    output: &dyn OutputWriter,
) -> Result<()> {
    let mut controller = SearchController::with_per_page(options.per_page);

    let mut next = controller.submit_query(options.query);
    if next.is_none() {
        return Err(ImgseekError::InvalidInput(
            "Search text cannot be empty".into(),
        ));
    }

    let mut printed = 0;
    while let Some(request) = next.take() {
        let completion = FetchCompletion::execute(request, service);
        match controller.complete(completion) {
            Resolution::Loaded { .. } => {
                print_page(&controller, options, output)?;
                printed += 1;
            }
            Resolution::Failed => {
                let message = controller.error_message().unwrap_or_default().to_string();
                output.error(&message);
                return Err(ImgseekError::FetchFailed(message));
            }
            Resolution::Stale => {
                debug!("stale completion in one-shot search");
            }
        }

        if printed < options.pages {
            next = controller.go_to_next_page();
        }
    }

    Ok(())
}

fn print_page(
    controller: &SearchController,
    options: &SearchOptions<'_>,
    output: &dyn OutputWriter,
) -> Result<()> {
    let pages = controller.page_state();
    let items = controller.results();

    if options.json {
        let report = PageReport {
            query: controller.query(),
            page: pages.current_page(),
            total_pages: pages.total_pages(),
            total: controller.total_results(),
            items,
        };
        output.write(&output::page_json(&report)?);
        return Ok(());
    }

    output.info(&output::page_header(
        controller.query(),
        pages,
        controller.total_results(),
    ));
    if items.is_empty() {
        output.info("No images found");
    }
    let offset = (pages.current_page().saturating_sub(1) as usize) * options.per_page as usize;
    for (i, item) in items.iter().enumerate() {
        output.write(&output::item_line(offset + i, item, options.quiet));
    }
    Ok(())
}
