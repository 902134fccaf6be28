use crate::cli::commands::{Cli, Commands, PromptName};
use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use toneflow::Config;
use toneflow::llm::BedrockClient;
use toneflow::workflow::{ToneWorkflow, WorkflowRun, message_inputs, route};
use tracing::info;

fn load_config(path: Option<&Path>) -> Result<Config> {
    let mut config = match path {
        Some(path) => Config::load_from(path)?,
        None => Config::load_or_init()?,
    };
    config.apply_env_overrides();
    config.validate()?;
    Ok(config)
}

fn build_workflow(config: &Config) -> Result<(Arc<BedrockClient>, ToneWorkflow)> {
    let client = Arc::new(BedrockClient::from_config(&config.endpoint, &config.model));
    let workflow = ToneWorkflow::from_config(config, client.clone())?;
    Ok((client, workflow))
}

/// Text printed for a finished run: the response, or a notice when no tone matched.
fn render_run(run: &WorkflowRun, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(run)?);
    }

    Ok(match &run.response {
        Some(response) => response.clone(),
        None => format!(
            "(no response: classifier answered {:?}, which matches no tone)",
            run.classification
        ),
    })
}

/// Pretty JSON of the body `prompt` would send for `message`.
fn render_request(config: &Config, prompt: PromptName, message: &str) -> Result<String> {
    let (client, workflow) = build_workflow(config)?;
    let node = workflow
        .node(prompt.node_name())
        .with_context(|| format!("no node named {}", prompt.node_name()))?;

    let request = node.build_request(&message_inputs(message))?;
    let body = client.wire_body(&request);

    Ok(serde_json::to_string_pretty(&body)?)
}

fn render_route(text: &str) -> String {
    route(text).map_or_else(|| "none".to_string(), |tone| tone.to_string())
}

async fn run_workflow(config: &Config, message: &str, json: bool) -> Result<()> {
    let (_, workflow) = build_workflow(config)?;

    info!(model = %config.model.ml_model, "workflow.start");
    let run = workflow.run(message).await?;

    println!("{}", render_run(&run, json)?);
    Ok(())
}

pub async fn dispatch(cli: Cli) -> Result<()> {
    let config_path = cli.config.as_deref();

    match cli.command {
        // Routing is pure and needs no config.
        Commands::Route { text } => {
            println!("{}", render_route(&text));
            Ok(())
        }
        Commands::Run { message, json } => {
            let config = load_config(config_path)?;
            run_workflow(&config, &message, json).await
        }
        Commands::Request { prompt, message } => {
            let config = load_config(config_path)?;
            println!("{}", render_request(&config, prompt, &message)?);
            Ok(())
        }
    }
}
