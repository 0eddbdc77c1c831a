//! Tools listing command

use anyhow::Result;
use cite_verify_core::tools::ToolRegistry;
use tracing::info;

/// Show the tools registered with this host
pub async fn tools_command(registry: &ToolRegistry, json: bool) -> Result<()> {
    info!("Listing available tools");

    if json {
        let definitions = registry.create_executor_with_all().get_tool_definitions();
        println!("{}", serde_json::to_string_pretty(&definitions)?);
        return Ok(());
    }

    println!("Available tools\n");

    for name in registry.list_tools() {
        if let Some((tool_name, description)) = registry.get_tool_info(name) {
            println!("  {}", tool_name);
            // Show first line of description only for brevity
            let first_line = description.lines().next().unwrap_or(description);
            println!("    {}\n", first_line);
        }
    }

    Ok(())
}
