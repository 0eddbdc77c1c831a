//! Raw tool call command

use anyhow::{Context, Result};
use cite_verify_core::tools::{ToolCall, ToolRegistry};
use tracing::info;

/// Execute one tool call and print the `ToolResult` as JSON
pub async fn call_command(registry: &ToolRegistry, tool: String, params: &str) -> Result<()> {
    let parameters: serde_json::Value = serde_json::from_str(params)
        .with_context(|| format!("Tool parameters are not valid JSON: {}", params))?;

    let call = ToolCall::new(tool, parameters);
    info!("Calling tool {} ({})", call.name, call.id);

    let executor = registry.create_executor_with_all();
    let result = executor.execute(call).await?;

    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
