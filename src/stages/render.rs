use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::info;

use crate::io::{HumanReport, MachineReport};
use crate::models::InterviewSession;

/// Configuration for the render stage
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Whether to generate the machine-readable report
    pub generate_machine: bool,
    /// Whether to generate the human-readable report
    pub generate_human: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            generate_machine: true,
            generate_human: true,
        }
    }
}

/// Result of the render stage
#[derive(Debug)]
pub struct RenderResult {
    /// Path to the machine report (if generated)
    pub machine_path: Option<PathBuf>,
    /// Path to the human report (if generated)
    pub human_path: Option<PathBuf>,
}

/// Execute the render stage
///
/// Produces two output views of a compiled session:
/// 1. Machine report: JSON with metadata, segments, and response triples
/// 2. Human report: the statement plus every response, hand-out formatted
pub fn execute_render(
    session: &InterviewSession,
    machine_output: Option<&Path>,
    human_output: Option<&Path>,
    config: &RenderConfig,
) -> Result<RenderResult> {
    let mut result = RenderResult {
        machine_path: None,
        human_path: None,
    };

    if config.generate_machine {
        if let Some(path) = machine_output {
            info!("Writing machine report to {:?}", path);
            let report = MachineReport::from_session(session);
            report.write_json(path)?;
            result.machine_path = Some(path.to_path_buf());
        }
    }

    if config.generate_human {
        if let Some(path) = human_output {
            info!("Writing human report to {:?}", path);
            HumanReport::new(session).write_file(path)?;
            result.human_path = Some(path.to_path_buf());
        }
    }

    Ok(result)
}
