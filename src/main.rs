use anyhow::{bail, Context, Result};
use clap::Parser;
use hum_transcriber::service::{AccompanimentRequest, AccompanimentResponse, NotesResponse};
use hum_transcriber::{AnalysisService, SegmenterConfig};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "hum-transcriber")]
#[command(about = "Extract notes from hummed audio and derive accompaniment", long_about = None)]
struct Args {
    /// Audio file to analyze (wav, mp3, flac, ogg, ...)
    #[arg(short = 'i', long)]
    input: Option<PathBuf>,

    /// Notes JSON file to derive accompaniment from (skips audio analysis)
    #[arg(short = 'n', long, conflicts_with = "input")]
    notes: Option<PathBuf>,

    /// Also generate accompaniment for the extracted notes
    #[arg(short = 'a', long)]
    accompany: bool,

    /// Write JSON output to a file instead of stdout
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Minimum pitch confidence for a frame to count as voiced (default: 0.8)
    #[arg(long, default_value = "0.8")]
    confidence: f32,

    /// Lowest admissible MIDI pitch (default: 36)
    #[arg(long, default_value = "36")]
    min_pitch: i32,

    /// Highest admissible MIDI pitch (default: 90)
    #[arg(long, default_value = "90")]
    max_pitch: i32,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = SegmenterConfig::new()
        .with_confidence_threshold(args.confidence)
        .with_pitch_range(args.min_pitch, args.max_pitch);
    let service = AnalysisService::with_config(config);

    let json = match (&args.input, &args.notes) {
        (Some(input), None) => {
            log::info!("Analyzing audio file: {:?}", input);
            let notes = service
                .analyze_file(input)
                .with_context(|| format!("Failed to analyze {input:?}"))?;
            log::info!("Extracted {} notes", notes.len());

            if args.accompany {
                let records = notes.iter().map(|&n| n.into()).collect();
                let accompaniment_notes = service.accompaniment_for(records)?;
                log::info!("Generated {} accompaniment notes", accompaniment_notes.len());
                serde_json::to_string_pretty(&serde_json::json!({
                    "notes": notes,
                    "accompanimentNotes": accompaniment_notes,
                }))?
            } else {
                serde_json::to_string_pretty(&NotesResponse { notes })?
            }
        }
        (None, Some(notes_path)) => {
            log::info!("Deriving accompaniment from: {:?}", notes_path);
            let body = std::fs::read_to_string(notes_path)
                .with_context(|| format!("Failed to read {notes_path:?}"))?;
            let request: AccompanimentRequest =
                serde_json::from_str(&body).context("Invalid notes JSON")?;

            let accompaniment_notes = service.accompaniment_for(request.notes)?;
            log::info!("Generated {} accompaniment notes", accompaniment_notes.len());
            serde_json::to_string_pretty(&AccompanimentResponse {
                accompaniment_notes,
            })?
        }
        _ => bail!("Provide either --input <audio> or --notes <json>"),
    };

    match &args.output {
        Some(path) => {
            std::fs::write(path, &json)
                .with_context(|| format!("Failed to write output to {path:?}"))?;
            log::info!("Wrote output to {:?}", path);
        }
        None => println!("{json}"),
    }

    Ok(())
}
