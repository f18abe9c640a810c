use clap::Parser;

use shine::cli::Args;
use shine::commands::Context;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let ctx = Context {
        ini: args.ini,
        database_url: args.database_url,
    };
    let output = args.command.run(&ctx, args.format)?;
    println!("{}", output);
    Ok(())
}
