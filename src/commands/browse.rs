//! Browse command - interactive image browser

use crate::{
    ImgseekError, Result,
    api::UnsplashClient,
    config::{ACCESS_KEY_ENV, ImgseekConfig},
    ui::ImageBrowser,
};
use std::sync::Arc;
use tracing::info;

/// Open the browser, optionally running `query` straight away
///
/// # Errors
///
/// Returns an error if no access key is configured, the HTTP client cannot
/// be built, or the terminal cannot be driven.
pub fn execute(config: &ImgseekConfig, query: Option<&str>) -> Result<()> {
    if !config.has_access_key() {
        return Err(ImgseekError::InvalidInput(format!(
            "No access key configured. Run 'imgseek config set api.access_key=<key>' or set {ACCESS_KEY_ENV}"
        )));
    }

    let client = UnsplashClient::new(&config.api)?;
    info!(base_url = client.base_url(), "starting browser");

    ImageBrowser::new(Arc::new(client), query).run()?;
    Ok(())
}
