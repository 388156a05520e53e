//! Status lines printed to stdout during a run

use std::path::Path;

use html_tool_core::tool::{OutputArtifact, ToolRequest};

pub fn building(description: &str) -> String {
    format!("🤖 Building HTML tool: {}\n", description)
}

pub fn calling(profile: &str) -> String {
    format!("⏳ Calling {} agent...", profile)
}

pub fn raw_output(output: &str) -> String {
    format!(
        "\n--- Full Agent Output ---\n{}\n--- End Output ---\n",
        output
    )
}

pub fn generated(artifact: &OutputArtifact) -> String {
    format!(
        "✅ Generated: {}\n   Size: {} bytes",
        artifact.path.display(),
        artifact.size
    )
}

pub fn opening() -> String {
    "\n🌐 Opening in browser...".to_string()
}

/// Closing block. `path` is the output path as the user will refer to it.
pub fn next_steps(request: &ToolRequest, path: &Path) -> String {
    let mut lines = vec![
        "\n📋 Next steps:".to_string(),
        format!("   • Open: {}", path.display()),
        format!("   • Test: open {}", path.display()),
    ];
    if !request.preview {
        lines.push(format!(
            "   • Preview: html-tool \"{}\" --preview",
            request.description
        ));
    }
    lines.push("   • Deploy: Commit to GitHub repo with Pages enabled".to_string());
    lines.push(String::new());
    lines.join("\n")
}
