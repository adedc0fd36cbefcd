use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{error, info};

use docsum::ai::model_from_config;
use docsum::core::config::AppConfig;
use docsum::core::models::{SummaryRequest, TargetLanguage, UploadedFile};
use docsum::pipeline::Pipeline;

#[derive(Debug, Parser)]
#[command(name = "docsum", version, about = "Summarize documents and export the result as PDF")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Summarize pasted text or a .txt/.docx file
    Summarize {
        /// Text to summarize; ignored when --file is given
        #[arg(long, default_value = "")]
        text: String,

        /// Document to summarize
        #[arg(long)]
        file: Option<PathBuf>,

        /// Comma-separated keywords to highlight
        #[arg(long, default_value = "")]
        keywords: String,

        /// Target language label
        #[arg(long, default_value = "English")]
        language: String,

        /// Print the highlighted HTML instead of the JSON payload
        #[arg(long)]
        html: bool,

        /// Also write the summary as a PDF to this path
        #[arg(long)]
        export: Option<PathBuf>,
    },
    /// Render arbitrary summary text as a PDF
    Export {
        #[arg(long, default_value = "")]
        text: String,

        #[arg(long)]
        out: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    docsum::setup_logging();
    let cli = Cli::parse();

    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        anyhow::anyhow!(e)
    })?;
    let model = model_from_config(&config).context("Failed to initialize summarization model")?;
    info!(model = model.name(), "Summarization model ready");
    let pipeline = Pipeline::new(model, &config);

    match cli.command {
        Command::Summarize {
            text,
            file,
            keywords,
            language,
            html,
            export,
        } => {
            let file = match file {
                Some(path) => Some(read_upload(&path).await?),
                None => None,
            };
            let request = SummaryRequest {
                text,
                file,
                keywords,
                target_language: TargetLanguage::new(language),
            };

            let payload = pipeline.process(request).await?;
            if html {
                println!("{}", payload.highlighted_summary_html);
            } else {
                println!("{}", serde_json::to_string_pretty(&payload)?);
            }

            if let Some(out) = export {
                write_export(&pipeline, &payload.summary_text, &out).await?;
            }
        }
        Command::Export { text, out } => {
            write_export(&pipeline, &text, &out).await?;
        }
    }

    Ok(())
}

async fn read_upload(path: &Path) -> Result<UploadedFile> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(UploadedFile::new(filename, bytes))
}

async fn write_export(pipeline: &Pipeline, text: &str, out: &Path) -> Result<()> {
    let artifact = pipeline.export(text)?;
    tokio::fs::write(out, &artifact.bytes)
        .await
        .with_context(|| format!("Failed to write {}", out.display()))?;
    info!(
        path = %out.display(),
        content_type = %artifact.content_type,
        disposition = %artifact.content_disposition(),
        "Summary exported"
    );
    Ok(())
}
