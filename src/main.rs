use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ai_developer_setup::{
    AssistantSpec, OpenAI,
    cli::Cli,
    env_file::{self, ASSISTANT_ID_VAR},
    register_and_report,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // stdout is reserved for the report lines
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    // like the process environment, a dotenv file may supply OPENAI_API_KEY
    env_file::load(cli.env_file.as_deref());

    let config = cli
        .resolve_config(|key| std::env::var(key).ok())
        .context("failed to resolve configuration")?;
    let spec = AssistantSpec::developer(&config);

    if cli.print_schema {
        println!("{}", serde_json::to_string_pretty(&spec.tool_set_json())?);
        return Ok(());
    }

    let registrar = OpenAI::from_config(&config).context("failed to set up OpenAI client")?;
    let mut stdout = std::io::stdout().lock();
    let created = register_and_report(&registrar, &spec, &mut stdout)
        .await
        .context("failed to create assistant")?;

    if let Some(path) = &cli.env_file {
        env_file::write_var(path, ASSISTANT_ID_VAR, &created.id)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }
    Ok(())
}
