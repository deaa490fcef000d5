// cli.rs - Command-line interface for the demo host
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "ai-framegen")]
#[command(about = "Interpolated frame generation demo host", long_about = None)]
pub struct Cli {
    /// Model resource to load (overrides the config file)
    #[arg(long)]
    pub model: Option<PathBuf>,

    /// JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Number of frames to render
    #[arg(long, default_value_t = 8)]
    pub frames: u64,

    #[arg(long, default_value_t = 64)]
    pub width: u32,

    #[arg(long, default_value_t = 36)]
    pub height: u32,

    /// Write a model file to the model path before running
    #[arg(long = "write-model", default_value = "false")]
    pub write_model: bool,

    /// Blend weight used with --write-model
    #[arg(long, default_value_t = 0.5)]
    pub blend: f32,

    /// Scene-cut threshold used with --write-model
    #[arg(long = "scene-cut", default_value_t = 0.25)]
    pub scene_cut: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["ai-framegen"]);
        assert_eq!(cli.frames, 8);
        assert_eq!((cli.width, cli.height), (64, 36));
        assert!(!cli.write_model);
        assert!(cli.model.is_none());
    }

    #[test]
    fn test_write_model_flags() {
        let cli = Cli::parse_from([
            "ai-framegen",
            "--model",
            "m.dat",
            "--write-model",
            "--blend",
            "0.3",
            "--scene-cut",
            "0.6",
        ]);
        assert_eq!(cli.model, Some(PathBuf::from("m.dat")));
        assert!(cli.write_model);
        assert_eq!(cli.blend, 0.3);
        assert_eq!(cli.scene_cut, 0.6);
    }
}
