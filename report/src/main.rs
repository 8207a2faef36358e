mod client;
mod config;
mod output;

use crate::client::BackendClient;
use crate::config::{init_logger, load_environment, BACKEND_URL};
use crate::output::{render_summary, Narrative, ReportOutput};
use analytics::utils::extract_channel_id;
use analytics::DashboardReport;
use anyhow::Result;
use chrono::{Local, Utc};
use clap::Parser;
use log::{error, info, warn};

#[derive(Parser, Debug, PartialEq)]
#[command(name = "report")]
#[command(version)]
#[command(about = "Builds the channel dashboard report from the analysis backend")]
struct Args {
    /// Channel URL (/channel/, /c/, /@handle) or a bare UC... channel id
    channel: String,

    /// Print the full report as JSON instead of the text summary
    #[arg(long)]
    json: bool,

    /// Ask the backend for a one-sentence commentary per chart
    #[arg(long)]
    narrative: bool,
}

async fn fetch_narratives(client: &BackendClient, report: &DashboardReport) -> Vec<Narrative> {
    let mut narratives = Vec::new();
    for request in report.narrative_requests() {
        match client.chart_analysis(&request).await {
            Ok(analysis) => narratives.push(Narrative {
                chart_type: request.chart_type,
                analysis,
            }),
            Err(e) => warn!("No commentary for {:?}: {e}", request.chart_type),
        }
    }
    narratives
}

async fn run(args: Args) -> Result<()> {
    let channel_id = extract_channel_id(&args.channel)?;
    let client = BackendClient::from_config()?;
    info!("Analysing {channel_id} via {}", &*BACKEND_URL);

    let (channel, videos, comments) = tokio::join!(
        client.channel_info(&channel_id),
        client.channel_videos(&channel_id),
        client.channel_comments(&channel_id),
    );
    let channel = channel?;
    let videos = videos?;
    let comments = match comments {
        Ok(comments) => Some(comments),
        Err(e) => {
            warn!("Channel comments unavailable, skipping core fans: {e}");
            None
        }
    };

    let report = DashboardReport::build(
        channel,
        &videos,
        comments.as_deref(),
        Utc::now(),
        *Local::now().offset(),
    );

    let narratives = if args.narrative {
        fetch_narratives(&client, &report).await
    } else {
        Vec::new()
    };

    if args.json {
        let output = ReportOutput {
            report: &report,
            narratives: &narratives,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{}", render_summary(&report, &narratives));
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    load_environment();
    init_logger();

    let args = Args::parse();

    if let Err(e) = run(args).await {
        error!("Report failed: {e:#}");
        std::process::exit(1);
    }
}
