use common::Metadata;
use crate::api_client;

/// Get the district and neighborhood lists for the selection controls
pub async fn get_metadata() -> Result<Metadata, String> {
    log::trace!("Fetching metadata");
    let result = api_client::get::<Metadata>("/metadata").await;
    match &result {
        Ok(metadata) => {
            if let Some(error) = &metadata.error {
                log::warn!("Metadata endpoint reported an error: {}", error);
            }
            log::info!(
                "Fetched {} districts and {} neighborhoods",
                metadata.districts().len(),
                metadata.neighborhoods().len()
            );
        }
        Err(e) => log::error!("Failed to fetch metadata: {}", e),
    }
    result
}
