// src/bin/write_openapi_snapshot.rs
use anyhow::Result;
use std::{env, path::PathBuf};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let output_path = PathBuf::from(
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| "docs/openapi.json".to_string()),
    );
    npc_newsroom::presentation::http::openapi::write_openapi_snapshot(&output_path)?;
    println!("OpenAPI snapshot written to {}", output_path.display());
    Ok(())
}
