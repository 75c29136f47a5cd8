// CLI modules
mod cli;

use clap::{Parser, Subcommand};
use cli::{args::Args, op::Op, Acl, Check, Init, Show, Version};

command_enum! {
    (Acl, Acl),
    (Check, Check),
    (Init, Init),
    (Show, Show),
    (Version, Version),
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let ctx = cli::op::OpContext::new(args.config_path, args.seed);

    // logging follows the configured level once a wiki directory exists
    let guard = wiki_cli::logging::init_logging(ctx.log_level());

    let code = match args.command.execute(&ctx).await {
        Ok(output) => {
            println!("{}", output);
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    // flush buffered log lines before exiting
    drop(guard);
    std::process::exit(code);
}
