use clap::Parser;

use schema_ddl::cli::Args;
use schema_ddl::commands::ExecutionContext;
use schema_ddl::config::ConfigFile;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.log_filter())).init();

    let config = ConfigFile::load_from(&args.config)?;
    let dialect = ConfigFile::resolve_dialect(config.as_ref(), args.dialect);
    let ctx = ExecutionContext::new(dialect, config.and_then(|c| c.database));

    let output = args.command.run(&ctx, args.format)?;
    println!("{}", output);
    Ok(())
}
