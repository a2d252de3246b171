use anyhow::{Context, Result};
use clap::Parser;

use wordjump::cli::{CliArgs, Report};
use wordjump::editor::{Document, EditorView, LayoutMetrics};
use wordjump::{JumpConfig, JumpController, ScriptedKeys};

fn main() -> Result<()> {
    wordjump::tracing::init();

    let run = CliArgs::parse()
        .into_config()
        .map_err(anyhow::Error::msg)?;

    let mut config = JumpConfig::load();
    if let Some(mode) = run.scan_mode {
        config.scan_mode = mode;
    }

    let document = Document::from_file(&run.path)
        .with_context(|| format!("Failed to open {}", run.path.display()))?;
    let view = EditorView::new(document, run.viewport, LayoutMetrics::default());

    let mut controller = JumpController::new(view, config);
    let index = controller.activate().clone();

    let mut keys = ScriptedKeys::new(run.keys);
    let resolution = controller.run(&mut keys);
    if keys.remaining() > 0 {
        let unused: Vec<String> = keys.pending().map(ToString::to_string).collect();
        tracing::warn!(
            unused = %unused.join(" "),
            "jump mode ended before the key script did"
        );
    }

    let view = controller.dispose();
    let report = Report::new(&index, resolution, &view);

    if run.json {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{}", json);
    } else {
        print!("{}", report.to_text());
    }

    Ok(())
}
