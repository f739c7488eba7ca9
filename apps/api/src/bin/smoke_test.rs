//! One-shot smoke test: POSTs a fixed resume/chat request against a locally
//! running instance and prints whatever comes back. Diagnostic only, not a
//! regression suite.
//!
//! Target comes from `CHAT_API_URL` (default `http://localhost:8000`).

use anyhow::Result;
use serde_json::json;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let base =
        std::env::var("CHAT_API_URL").unwrap_or_else(|_| "http://localhost:8000".to_string());
    let url = format!("{base}/resume/chat");

    let payload = json!({
        "resume_data": {
            "name": "Priya Raman",
            "skills": "Python",
            "about": "A passionate developer",
            "education": [
                {
                    "degree": "Computer Science",
                    "institution": "State University",
                    "year": "2022-present"
                }
            ]
        },
        "user_prompt": "Add FastAPI to skills"
    });

    println!("Testing chat endpoint with data:");
    println!("{}", serde_json::to_string_pretty(&payload)?);
    println!("\n{}\n", "=".repeat(50));

    let client = reqwest::Client::new();
    let response = match client.post(&url).json(&payload).send().await {
        Ok(r) => r,
        Err(e) if e.is_connect() => {
            eprintln!("Connection error: is the server running on {base}?");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Unexpected error: {e}");
            std::process::exit(1);
        }
    };

    println!("Status Code: {}", response.status());
    println!("Response Headers: {:#?}", response.headers());

    if response.status().is_success() {
        let body: serde_json::Value = response.json().await?;
        println!("Success! Response:");
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        println!("Error Response:");
        println!("{}", response.text().await?);
    }

    Ok(())
}
