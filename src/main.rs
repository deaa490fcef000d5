use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use ai_framegen::cli::Cli;
use ai_framegen::synthetic::GradientSource;
use ai_framegen::{
    install, teardown, CollectingSink, FileModelLoader, FramegenConfig, ModelHeader, PipeContext,
};

const SOURCE_FPS: f32 = 30.0;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => FramegenConfig::from_json_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => FramegenConfig::default(),
    };
    if let Some(model) = &cli.model {
        config = FramegenConfig {
            model_root: config.model_root.take(),
            ..FramegenConfig::with_model_path(model)
        };
    }

    if cli.write_model {
        let path = config.resolved_model_path();
        ModelHeader::new(cli.blend, cli.scene_cut)
            .write_to(&path)
            .with_context(|| format!("writing model {}", path.display()))?;
        info!(
            "wrote model {} (blend {}, scene cut {})",
            path.display(),
            cli.blend,
            cli.scene_cut
        );
    }

    let sink = CollectingSink::new();
    let mut ctx = PipeContext::with_sink(sink.clone());

    // A missing model only disables generation; rendering continues.
    let installed = match install(&mut ctx, &config, &FileModelLoader::new()) {
        Ok(()) => true,
        Err(e) => {
            warn!("running without frame generation: {}", e);
            false
        }
    };

    let mut previous = None;
    let mut rendered = 0u64;
    let source = GradientSource::new(cli.width, cli.height, SOURCE_FPS);
    for frame in source.take(cli.frames as usize) {
        ctx.invoke_generate(previous.as_ref(), Some(&frame));
        previous = Some(frame);
        rendered += 1;
    }

    teardown(&mut ctx);

    let generated = sink.drain();
    let multiplier = if rendered == 0 {
        0.0
    } else {
        (rendered + generated.len() as u64) as f32 / rendered as f32
    };
    info!(
        "rendered {} frames, generated {} (installed: {}), effective rate x{:.2}",
        rendered,
        generated.len(),
        installed,
        multiplier
    );
    Ok(())
}
