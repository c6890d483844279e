//! Gemini connectivity check
//!
//! Sends one cheap prompt with the configured key and reports the outcome

use anyhow::{Context, Result};
use smart_content_api::utils::logging::init_logging;
use smart_content_api::{GeminiProvider, ModelClient, SamplingParams, Settings};

const PING_PROMPT: &str = "Can you hear me? Respond with a single word.";

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::new().context("Failed to load settings")?;
    init_logging(&settings.logging);

    println!("🚀 Attempting to connect to Google's Gemini API...");

    let provider = GeminiProvider::from_config(&settings.gemini)
        .context("GEMINI_API_KEY not found in the environment or .env file")?;

    match provider
        .complete(PING_PROMPT, SamplingParams::with_temperature(0.7))
        .await
    {
        Ok(reply) => {
            println!("\n✅ Success! Your Gemini API key is working.");
            println!("🤖 {} replied: {}", provider.model(), reply.trim());
            Ok(())
        }
        Err(e) => {
            println!("\n❌ Failure! The Gemini API call did not succeed.");
            Err(e).context("Gemini connectivity check failed")
        }
    }
}
