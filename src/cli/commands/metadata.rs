use anyhow::Result;
use tracing::trace;

use crate::client::PredictionClient;

pub async fn show_metadata(client: &PredictionClient) -> Result<()> {
    trace!("Entering show_metadata");
    let metadata = client.metadata().await?;

    println!("Districts ({}):", metadata.districts().len());
    for district in metadata.districts() {
        println!("  {}", district);
    }
    println!("Neighborhoods ({}):", metadata.neighborhoods().len());
    for neighborhood in metadata.neighborhoods() {
        println!("  {}", neighborhood);
    }
    Ok(())
}
