use std::sync::Arc;

use clap::Parser;
use log::info;

use prompt_relay::{CompletionService, Credentials};

#[derive(Parser, Debug)]
#[command(name = "prompt-relay", about = "Chat completion relay")]
struct Args
{   /// Address to bind
    #[arg(long, env = "RELAY_HOST", default_value = "0.0.0.0")]
    host: String
  , /// Port to bind
    #[arg(long, env = "RELAY_PORT", default_value_t = 7071)]
    port: u16
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>>
{   env_logger::Builder::from_env(
      env_logger::Env::default().default_filter_or("info")
    ).init();

    let args = Args::parse();
    let credentials = Credentials::from_env();
    info!("Credential groups: {:?}", credentials.presence());

    let service = Arc::new(CompletionService::new(credentials));
    let listener = tokio::net::TcpListener::bind(
      (args.host.as_str(), args.port)
    ).await?;

    prompt_relay::server::serve(listener, service).await?;
    Ok(())
}
