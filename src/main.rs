use clap::Parser;
use tracing::error;

use contactlist::config::{Cli, Command, ServeArgs};
use contactlist::db::{schema, Database};
use contactlist::http::HttpServer;
use contactlist::logging::init_logging;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Serve(args) => {
            init_logging();
            if let Err(e) = serve(args).await {
                error!("{}", e);
                std::process::exit(1);
            }
        }
        Command::Shell(args) => {
            // The REPL blocks on stdin and on ureq; keep it off the async workers.
            let url = args.url;
            if tokio::task::spawn_blocking(move || contactlist::cli::run(&url))
                .await
                .is_err()
            {
                std::process::exit(1);
            }
        }
    }
}

async fn serve(args: ServeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let conn = schema::open(&args.database)?;
    let server = HttpServer::with_config(args.http, Database::new(conn));
    server.start().await?;
    Ok(())
}
