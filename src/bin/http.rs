use std::env;
use std::net::SocketAddr;
use std::process;

use gantt_tool::{PipelineConfig, http_api, pipeline};

fn print_usage() {
    eprintln!("Usage: http <schedule.csv> [addr]   (default addr 127.0.0.1:3000)");
}

#[tokio::main]
async fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        print_usage();
        process::exit(2);
    }

    let config = PipelineConfig::new(&args[1]);
    let addr: SocketAddr = args
        .get(2)
        .map(String::as_str)
        .unwrap_or("127.0.0.1:3000")
        .parse()
        .unwrap_or_else(|err| {
            eprintln!("Invalid address: {err}");
            process::exit(2);
        });

    let schedule = match pipeline::run(&config) {
        Ok(schedule) => schedule,
        Err(err) => {
            eprintln!("Error: {err}");
            process::exit(1);
        }
    };

    println!(
        "Serving schedule '{}' ({} task(s)) on http://{addr}",
        config.source_path.display(),
        schedule.height()
    );

    let dashboard = http_api::Dashboard::new(config, schedule);
    if let Err(err) = http_api::serve(addr, dashboard).await {
        eprintln!("Server error: {err}");
        process::exit(1);
    }
}
