//! Tool registry: the host-side hook tools register themselves with

use crate::config::RegistryConfig;
use crate::tools::{Tool, ToolExecutor};
use std::collections::BTreeMap;

/// Factory trait for creating tools
pub trait ToolFactory: Send + Sync {
    /// Create a new instance of the tool
    fn create(&self) -> Box<dyn Tool>;

    /// Get the name of the tool this factory creates
    fn tool_name(&self) -> &str;

    /// Get the description of the tool this factory creates
    fn tool_description(&self) -> &str;
}

/// Anything that accepts tool registrations.
///
/// Registering the same tool name twice keeps a single entry.
pub trait ToolHost {
    fn register(&mut self, factory: Box<dyn ToolFactory>);
}

/// Registry for managing tool creation and registration
pub struct ToolRegistry {
    factories: BTreeMap<String, Box<dyn ToolFactory>>,
}

impl ToolRegistry {
    /// Create an empty tool registry
    pub fn new() -> Self {
        Self {
            factories: BTreeMap::new(),
        }
    }

    /// Create a registry with the built-in tools pointed at `config`
    pub fn with_config(config: RegistryConfig) -> Self {
        let mut registry = Self::new();
        register_tools(&mut registry, config);
        registry
    }

    /// Register a tool factory
    pub fn register_factory(&mut self, factory: Box<dyn ToolFactory>) {
        self.factories
            .insert(factory.tool_name().to_string(), factory);
    }

    /// Create a tool by name
    pub fn create_tool(&self, name: &str) -> Option<Box<dyn Tool>> {
        self.factories.get(name).map(|factory| factory.create())
    }

    /// List all available tool names
    pub fn list_tools(&self) -> Vec<&str> {
        self.factories.keys().map(|s| s.as_str()).collect()
    }

    /// Get tool information
    pub fn get_tool_info(&self, name: &str) -> Option<(&str, &str)> {
        self.factories
            .get(name)
            .map(|factory| (factory.tool_name(), factory.tool_description()))
    }

    /// Create a tool executor with the specified tools
    pub fn create_executor(&self, tool_names: &[String]) -> ToolExecutor {
        let mut executor = ToolExecutor::new();

        for name in tool_names {
            if let Some(tool) = self.create_tool(name) {
                executor.register_tool(tool);
            }
        }

        executor
    }

    /// Create a tool executor with all available tools
    pub fn create_executor_with_all(&self) -> ToolExecutor {
        let mut executor = ToolExecutor::new();

        for factory in self.factories.values() {
            executor.register_tool(factory.create());
        }

        executor
    }
}

impl ToolHost for ToolRegistry {
    fn register(&mut self, factory: Box<dyn ToolFactory>) {
        self.register_factory(factory);
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::with_config(RegistryConfig::default())
    }
}

/// Register the built-in tools with a host
pub fn register_tools(host: &mut dyn ToolHost, config: RegistryConfig) {
    host.register(Box::new(
        crate::tools::builtin::VerifyCitationToolFactory::new(config),
    ));
}
