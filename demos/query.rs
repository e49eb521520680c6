use openai_cost_wrapper::prelude::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    // Reads OPENAI_API_KEY (and optionally OPENAI_BASE_URL) from the environment.
    let executor = QueryExecutor::from_api_key(None)?;

    let prompt = std::env::args().nth(1).unwrap_or_else(|| "Why is the sky blue?".to_string());
    let result = executor
        .query(&prompt, "gpt-5-mini", &[web_search()], ResponseFormat::Text)
        .await;

    println!("{}", result.text_response);
    println!("cost: ${:.6}", result.cost);
    if result.raw_response.is_none() {
        eprintln!("query failed, see log output");
    }
    Ok(())
}
