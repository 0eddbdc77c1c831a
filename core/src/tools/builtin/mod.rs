//! Built-in tools

pub mod verify_citation;

pub use verify_citation::{
    verify_citation, verify_citation_with_config, VerifyCitationTool, VerifyCitationToolFactory,
    VERIFY_CITATION,
};
