//! `pipelines` binary: parse the command, run the pipeline and print a summary.

use clap::Parser;
use pipelines_cli::{init_tracing, run_content, run_setup_pages, run_spec, Cli, Command, Error};

async fn dispatch(cli: &Cli) -> Result<bool, Error> {
    let options = cli.run_options();
    match &cli.command {
        Command::Blog => {
            let state = run_content(&options).await?;
            println!("Title: {}", state.blog_title.as_deref().unwrap_or_default());
            println!("Post:  {}", state.post_path.as_deref().unwrap_or_default());
            println!("URL:   {}", state.publish_url.as_deref().unwrap_or_default());
            Ok(true)
        }
        Command::Spec { .. } => {
            let requirement = cli.command.requirement().unwrap_or_default();
            println!("Requirement: {}", requirement);
            println!("---");
            let state = run_spec(&requirement, &options).await?;
            if let Some(title) = &state.title {
                println!("Title:  {}", title);
            }
            if let Some(path) = &state.report_path {
                println!("Report: {}", path.display());
            }
            Ok(true)
        }
        Command::SetupPages => {
            let outcomes = run_setup_pages().await?;
            for outcome in &outcomes {
                println!("{}", outcome);
            }
            Ok(!outcomes.iter().any(|o| o.is_failure()))
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match dispatch(&cli).await {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}
