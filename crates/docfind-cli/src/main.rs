//! docfind binary entry point.

use clap::Parser;
use docfind_cli::{CliArgs, DocfindCli};

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();

    let app = match DocfindCli::from_args("docfind", &args) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("docfind: {e}");
            std::process::exit(2);
        }
    };

    if let Err(e) = app.run(args).await {
        eprintln!("docfind: {e}");
        std::process::exit(1);
    }
}
