use clap::Parser;
use futures_util::stream::{self, StreamExt};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

#[derive(Parser)]
#[command(name = "demo-probe")]
#[command(about = "Fire requests at a demo-service endpoint and summarize the results", long_about = None)]
struct Cli {
    /// Base URL of the service
    #[arg(short, long, default_value = "http://localhost:8000")]
    url: String,

    /// Endpoint path to hit
    #[arg(short, long, default_value = "/random_status")]
    path: String,

    /// Total number of requests
    #[arg(short = 'n', long, default_value_t = 100)]
    count: usize,

    /// Requests kept in flight at once
    #[arg(short, long, default_value_t = 10)]
    concurrency: usize,
}

enum Outcome {
    Completed { status: u16, latency: Duration },
    Failed(reqwest::Error),
}

#[derive(Debug, Default)]
struct Summary {
    statuses: BTreeMap<u16, usize>,
    failures: usize,
    latencies: Vec<Duration>,
}

impl Summary {
    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Completed { status, latency } => {
                *self.statuses.entry(status).or_default() += 1;
                self.latencies.push(latency);
            }
            Outcome::Failed(e) => {
                eprintln!("request failed: {}", e);
                self.failures += 1;
            }
        }
    }

    fn total(&self) -> usize {
        self.statuses.values().sum::<usize>() + self.failures
    }

    /// (min, mean, max) of completed requests.
    fn latency_stats(&self) -> Option<(Duration, Duration, Duration)> {
        let min = *self.latencies.iter().min()?;
        let max = *self.latencies.iter().max()?;
        let sum: Duration = self.latencies.iter().sum();
        Some((min, sum / self.latencies.len() as u32, max))
    }

    fn print(&self) {
        let total = self.total();
        println!("requests: {}", total);
        for (status, count) in &self.statuses {
            println!(
                "  {}: {:>6} ({:.1}%)",
                status,
                count,
                100.0 * *count as f64 / total as f64
            );
        }
        if self.failures > 0 {
            println!("  failed: {:>6}", self.failures);
        }
        if let Some((min, mean, max)) = self.latency_stats() {
            println!("latency: min {:?}, mean {:?}, max {:?}", min, mean, max);
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::builder().no_proxy().build()?;
    let target = format!("{}{}", cli.url.trim_end_matches('/'), cli.path);

    println!(
        "GET {} x{} (concurrency {})",
        target, cli.count, cli.concurrency
    );

    let summary = stream::iter(0..cli.count)
        .map(|_| {
            let client = client.clone();
            let target = target.clone();
            async move {
                let start = Instant::now();
                match client.get(&target).send().await {
                    Ok(res) => {
                        let status = res.status().as_u16();
                        match res.bytes().await {
                            Ok(_) => Outcome::Completed {
                                status,
                                latency: start.elapsed(),
                            },
                            Err(e) => Outcome::Failed(e),
                        }
                    }
                    Err(e) => Outcome::Failed(e),
                }
            }
        })
        .buffer_unordered(cli.concurrency.max(1))
        .fold(Summary::default(), |mut summary, outcome| async move {
            summary.record(outcome);
            summary
        })
        .await;

    summary.print();
    Ok(())
}
