//! Lists Gemini models usable for content generation with the configured key

use anyhow::{Context, Result};
use smart_content_api::utils::logging::init_logging;
use smart_content_api::{GeminiProvider, Settings};

const GENERATE_METHOD: &str = "generateContent";

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::new().context("Failed to load settings")?;
    init_logging(&settings.logging);

    println!("🛰️  Asking Google for the models available to your key...");

    let provider = GeminiProvider::from_config(&settings.gemini)
        .context("GEMINI_API_KEY not found in the environment or .env file")?;

    let models = provider
        .list_models()
        .await
        .context("Failed to list Gemini models")?;

    println!("\n✅ Models supporting {}:\n", GENERATE_METHOD);
    for model in models.iter().filter(|m| m.supports(GENERATE_METHOD)) {
        println!("  - {}", model.name);
    }

    Ok(())
}
