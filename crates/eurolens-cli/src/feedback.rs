//! `feedback` subcommand: build a record, enforce at-most-once, submit.

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Args;

use eurolens_client::{FeedbackClient, FeedbackRecord};
use eurolens_core::AppConfig;
use eurolens_image::{encode_jpeg_base64, load_from_path, resize_to_fit};

use crate::state::CliState;

#[derive(Debug, Args)]
pub struct FeedbackArgs {
    /// Server-assigned id from a prior analysis.
    pub analysis_id: i64,
    /// Rate the result as wrong overall (default is positive).
    #[arg(long)]
    pub negative: bool,
    #[arg(long)]
    pub wrong_product: bool,
    #[arg(long)]
    pub wrong_brand: bool,
    #[arg(long)]
    pub wrong_country: bool,
    #[arg(long)]
    pub wrong_classification: bool,
    #[arg(long)]
    pub wrong_alternatives: bool,
    /// Free-text comment.
    #[arg(long)]
    pub text: Option<String>,
    /// Attach this image to the feedback; requires --consent.
    #[arg(long)]
    pub image: Option<PathBuf>,
    /// Consent to share the image with the service.
    #[arg(long)]
    pub consent: bool,
}

pub async fn run(
    config: &AppConfig,
    state: &mut CliState,
    args: FeedbackArgs,
) -> anyhow::Result<()> {
    // The submission contract is not idempotent; the dedup lives here.
    if state.submitted_feedback.contains(&args.analysis_id) {
        bail!(
            "feedback for analysis {} was already submitted",
            args.analysis_id
        );
    }

    let mut record = FeedbackRecord::new(args.analysis_id, !args.negative);
    record.wrong_product = args.wrong_product;
    record.wrong_brand = args.wrong_brand;
    record.wrong_country = args.wrong_country;
    record.wrong_classification = args.wrong_classification;
    record.wrong_alternatives = args.wrong_alternatives;
    record.feedback_text = args.text.unwrap_or_default();

    if let Some(path) = &args.image {
        let image = load_from_path(path)?;
        let resized = resize_to_fit(&image, config.image_max_dimension);
        let payload = encode_jpeg_base64(&resized, config.image_jpeg_quality)?;
        record = record.with_image(payload, args.consent);
        if !args.consent {
            println!("note: image not attached; pass --consent to share it");
        }
    }

    let client = FeedbackClient::new(config).context("failed to construct feedback client")?;
    client.submit(&record).await?;

    state.submitted_feedback.insert(args.analysis_id);
    println!("feedback submitted for analysis {}", args.analysis_id);
    Ok(())
}
