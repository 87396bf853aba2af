// src/bin/write_openapi_snapshot.rs
use anyhow::Result;
use std::env;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    folio_core::presentation::http::openapi::write_openapi_snapshot()?;
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| "spec/openapi.json".to_string());
    println!("OpenAPI snapshot written to {output_path}");
    Ok(())
}
