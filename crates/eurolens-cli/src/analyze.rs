//! `analyze` subcommand: normalize, classify, record.

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;

use eurolens_client::{AnalysisClient, StaticLocation};
use eurolens_core::AppConfig;
use eurolens_image::{encode_jpeg_base64, load_from_path, resize_to_fit};
use eurolens_store::HistoryStore;

use crate::output::print_result;

fn build_client(config: &AppConfig) -> anyhow::Result<AnalysisClient> {
    let location = Arc::new(StaticLocation::new(
        config.location_city.clone(),
        config.location_country.clone(),
    ));
    AnalysisClient::new(config, location).context("failed to construct analysis client")
}

pub async fn run_image(
    config: &AppConfig,
    store: &HistoryStore,
    path: &Path,
    prompt: Option<&str>,
) -> anyhow::Result<()> {
    let image = load_from_path(path)?;
    let resized = resize_to_fit(&image, config.image_max_dimension);
    let payload = encode_jpeg_base64(&resized, config.image_jpeg_quality)?;
    tracing::debug!(
        original_width = image.width(),
        original_height = image.height(),
        width = resized.width(),
        height = resized.height(),
        "image normalized"
    );

    let client = build_client(config)?;
    let result = client.analyze_image(&payload, prompt).await?;

    print_result(&result);
    store.add(result).context("failed to record analysis in history")?;
    Ok(())
}

pub async fn run_text(
    config: &AppConfig,
    store: &HistoryStore,
    text: &str,
    prompt: Option<&str>,
) -> anyhow::Result<()> {
    let client = build_client(config)?;
    let result = client.analyze_text(text, prompt).await?;

    print_result(&result);
    store.add(result).context("failed to record analysis in history")?;
    Ok(())
}
