//! Walks through the two ways evaluation scripts build their
//! configuration: from the environment (optionally seeded by a `.env`
//! file) and from explicit values.
//!
//! ```bash
//! AZURE_DEPLOYMENT_NAME=gpt-4o-eval cargo run --example usage
//! ```

use azeval_config::EvalConfig;

fn main() {
    // Mirror the scripts: pick up a .env file when one is present.
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    println!("Configuration from environment variables");
    println!("----------------------------------------");
    let config = EvalConfig::from_env();
    println!("{config}");
    if config.is_complete() {
        println!("configuration is complete");
    } else if let Err(err) = config.validate() {
        // The message names every missing field, so the fix is one
        // export per name.
        println!("configuration is incomplete: {err}");
    }
    println!();

    println!("Configuration from explicit values");
    println!("----------------------------------");
    let config = EvalConfig::builder()
        .azure_deployment("my-custom-deployment")
        .api_key("sk-test-key-1234567890")
        .azure_endpoint("https://my-custom-endpoint.openai.azure.com")
        .api_version("2024-02-01")
        .azure_ai_project("https://my-account.services.ai.azure.com/api/projects/my-project")
        .build();
    println!("{config}");
    println!();

    // The model config object is what evaluator clients take verbatim.
    let model_config = config.model_config();
    println!("model_config for the evaluation SDK:");
    println!("{}", serde_json::to_string_pretty(&model_config).expect("model config serializes"));
}
