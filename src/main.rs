use clap::Parser;
use custom_vision_mcp::services::config::CliArgs;

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();
    if let Err(err) = custom_vision_mcp::mcp::server::run_stdio(args).await {
        eprintln!("custom-vision-mcp: {}", err);
        std::process::exit(1);
    }
}
