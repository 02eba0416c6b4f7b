//! Command line of `rain_preview` and the preview itself.

use std::path::PathBuf;

use coinrain_ui::RenderCommand;

use crate::error::{PreviewError, PreviewResult};
use crate::settings::PreviewSettings;

/// Usage text.
pub const USAGE: &str = "rain_preview [settings.toml] [--seed N] [--json] [--frames N] [--strict]";

/// Parsed command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewArgs {
    /// Settings file. Defaults apply when absent.
    pub settings: Option<PathBuf>,
    /// Overrides the seed from the settings file.
    pub seed: Option<u64>,
    /// Print descriptors as JSON instead of inline styles.
    pub json: bool,
    /// Number of sampled frames to print after the batch (one per second).
    pub frames: u32,
    /// Refuse malformed generator bounds instead of normalizing them.
    pub strict: bool,
}

impl PreviewArgs {
    /// Parses arguments (without the program name).
    ///
    /// # Errors
    ///
    /// Returns [`PreviewError::Usage`] on unknown flags or bad numbers.
    pub fn parse<I, S>(args: I) -> PreviewResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut parsed = Self::default();
        let mut args = args.into_iter().map(Into::into);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--json" => parsed.json = true,
                "--strict" => parsed.strict = true,
                "--seed" => parsed.seed = Some(number(&arg, args.next())?),
                "--frames" => parsed.frames = number(&arg, args.next())?,
                flag if flag.starts_with("--") => {
                    return Err(PreviewError::Usage(format!("unknown flag {flag}; {USAGE}")));
                }
                _ if parsed.settings.is_none() => parsed.settings = Some(PathBuf::from(&arg)),
                _ => return Err(PreviewError::Usage(format!("unexpected argument {arg}; {USAGE}"))),
            }
        }
        Ok(parsed)
    }
}

fn number<T: std::str::FromStr>(flag: &str, value: Option<String>) -> PreviewResult<T> {
    value
        .as_deref()
        .and_then(|v| v.parse().ok())
        .ok_or_else(|| PreviewError::Usage(format!("{flag} needs a non-negative number; {USAGE}")))
}

/// Runs a preview and returns the lines to print.
///
/// # Errors
///
/// Fails if the settings file cannot be loaded, if `--strict` finds a
/// malformed bound, or if JSON encoding fails.
pub fn run(args: &PreviewArgs) -> PreviewResult<Vec<String>> {
    let mut settings = match &args.settings {
        Some(path) => PreviewSettings::from_toml_file(path)?,
        None => PreviewSettings::default(),
    };
    if let Some(seed) = args.seed {
        settings.seed = Some(seed);
    }
    if args.strict {
        settings.generator.validate()?;
    }

    let seed = settings.seed();
    tracing::info!("coin rain preview: seed={} count={}", seed.value(), settings.generator.count);

    let mut rng = seed.rng();
    let mut layer = settings.build_layer();
    let mut lines = Vec::new();

    if args.json {
        let batch = layer.batch(&mut rng);
        lines.push(serde_json::to_string_pretty(&*batch)?);
    } else {
        lines.push(format!("layer: {}", layer.container_style()));
        lines.extend(layer.inline_styles(&mut rng));
    }

    for second in 0..args.frames {
        #[allow(clippy::cast_precision_loss)]
        let frame = layer.frame(second as f32, &mut rng);
        lines.push(format!("frame t={second}s z={}", frame.z_index));
        for RenderCommand::Sprite(sprite) in &frame.commands {
            lines.push(format!(
                "  #{:<3} left={:>6.2}% top={:>8.2}px size={:>5.2}px opacity={:.2}",
                sprite.id, sprite.left_percent, sprite.top_px, sprite.size_px, sprite.opacity
            ));
        }
    }

    Ok(lines)
}
