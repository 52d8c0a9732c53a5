//! Label commands - render container labels as PNG files

use std::path::Path;

use anyhow::{Context, bail};

use limbah::api::ApiClient;
use limbah::config::GlobalConfig;
use limbah::label::{LabelData, LabelSize, write_png};
use limbah::output::{LabelResult, OutputMode};

use crate::cli::app::LabelAction;

/// Dispatch a label subcommand
pub fn label(
    base_url: &str,
    config: &GlobalConfig,
    action: LabelAction,
    mode: OutputMode,
) -> anyhow::Result<()> {
    match action {
        LabelAction::Generate {
            request,
            input,
            wadah,
            size,
            output,
        } => generate(base_url, config, request, input, wadah, size, output, mode),
        LabelAction::Sizes => {
            if mode == OutputMode::Json {
                let sizes: Vec<String> = LabelSize::ALL.iter().map(ToString::to_string).collect();
                println!("{}", serde_json::to_string_pretty(&sizes).unwrap_or_default());
            } else {
                for size in LabelSize::ALL {
                    let marker = if size == LabelSize::default() { " (default)" } else { "" };
                    println!("{size}{marker}");
                }
            }
            Ok(())
        },
    }
}

/// Read label data from a JSON file holding one object or an array
fn labels_from_file(path: &str) -> anyhow::Result<Vec<LabelData>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read label input '{path}'"))?;

    if let Ok(labels) = serde_json::from_str::<Vec<LabelData>>(&content) {
        return Ok(labels);
    }
    let single: LabelData = serde_json::from_str(&content)
        .with_context(|| format!("'{path}' is not valid label data"))?;
    Ok(vec![single])
}

#[allow(clippy::too_many_arguments)]
fn generate(
    base_url: &str,
    config: &GlobalConfig,
    request: Option<String>,
    input: Option<String>,
    wadah: Option<u32>,
    size: Option<String>,
    output: Option<String>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    // clap marks --request and --input as conflicting
    let labels = match (&request, &input) {
        (None, Some(path)) => labels_from_file(path)?,
        (Some(number), None) => ApiClient::new(base_url).labels_by_request(number)?,
        _ => bail!("either --request or --input is required"),
    };

    let labels: Vec<LabelData> = match wadah {
        Some(index) => labels.into_iter().filter(|l| l.container_index == index).collect(),
        None => labels,
    };
    if labels.is_empty() {
        bail!("no label data matched");
    }

    let size: LabelSize =
        size.as_deref().unwrap_or(&config.label.default_size).parse()?;
    let dir = output
        .or_else(|| config.label.output_dir.clone())
        .unwrap_or_else(|| ".".to_string());

    let mut files = Vec::with_capacity(labels.len());
    for data in &labels {
        let path = write_png(data, size, Path::new(&dir))?;
        files.push(path.display().to_string());
    }

    LabelResult {
        files,
        width: size.width(),
        height: size.height(),
    }
    .render(mode);
    Ok(())
}
