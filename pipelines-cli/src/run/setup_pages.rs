//! `setup-pages`: write the Jekyll skeleton into the publish repository.

use content_pipeline::{setup_site, ContentConfig, GitHubContents, SetupOutcome};

use crate::config::Error;

/// Creates or updates the site files; per-file failures are reported in the outcomes.
pub async fn run_setup_pages() -> Result<Vec<SetupOutcome>, Error> {
    dotenv::dotenv().ok();
    let config = ContentConfig::from_env()?;
    let store = GitHubContents::new(config.site.clone());
    Ok(setup_site(&store, &config.site).await)
}
