use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context};
use clap::Parser;
use storefront_signup::config::Config;
use storefront_signup::form::{DomEvent, RegistrationController, SubmitOutcome};
use storefront_signup::logging::init_tracing;
use storefront_signup::page::registration_page;

/// Register a storefront customer through the registration form.
#[derive(Debug, Parser)]
#[command(name = "storefront-signup", version, about)]
struct Cli {
    #[arg(long)]
    first_name: String,

    #[arg(long)]
    last_name: String,

    #[arg(long)]
    email: String,

    #[arg(long)]
    password: String,

    /// Confirmation value; defaults to the password
    #[arg(long)]
    confirm_password: Option<String>,

    /// Accept the terms and conditions
    #[arg(long)]
    accept_terms: bool,

    /// Host name of the page the form is served from
    #[arg(long, default_value = "localhost")]
    host: String,

    /// Config file (defaults to the user config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Report network failures instead of synthesizing a demo result
    #[arg(long)]
    no_demo_fallback: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(1)
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<bool> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load configuration")?;
    if cli.no_demo_fallback {
        config.fallback.enabled = false;
    }

    let mut controller = RegistrationController::new(registration_page(), &config, &cli.host)
        .context("failed to create storefront client")?;
    let Some(form) = controller.bindings().map(|b| b.form) else {
        bail!("registration form '{}' not found", config.form.form_id);
    };

    let confirm = cli.confirm_password.as_deref().unwrap_or(&cli.password);
    for (id, value) in [
        ("firstName", cli.first_name.as_str()),
        ("lastName", cli.last_name.as_str()),
        ("email", cli.email.as_str()),
        ("password", cli.password.as_str()),
        ("confirmPassword", confirm),
    ] {
        let Some(node) = controller.document().get_element_by_id(id) else {
            continue;
        };
        controller.type_into(node, value).await;
        controller.dispatch(DomEvent::blur(node)).await;
    }
    if let Some(terms) = controller.document().get_element_by_id("termsAccepted") {
        controller.document_mut().set_checked(terms, cli.accept_terms);
    }

    let outcome = controller.dispatch(DomEvent::submit(form)).await;
    Ok(report(&controller, outcome.submit))
}

fn report(controller: &RegistrationController, outcome: Option<SubmitOutcome>) -> bool {
    let document = controller.document();
    match outcome {
        Some(SubmitOutcome::Completed(result)) if result.success => {
            println!("{}", result.message.unwrap_or_default());
            if let Some(user) = result.user {
                println!("customer id: {}", user.id);
            }
            true
        }
        Some(SubmitOutcome::Invalid) => {
            println!("The form has errors:");
            for id in [
                "firstNameError",
                "lastNameError",
                "emailError",
                "passwordError",
                "confirmPasswordError",
                "termsAcceptedError",
            ] {
                if let Some(slot) = document.get_element_by_id(id) {
                    let text = document.text(slot);
                    if !text.is_empty() {
                        println!("  {}: {}", id.trim_end_matches("Error"), text);
                    }
                }
            }
            false
        }
        Some(SubmitOutcome::Completed(_)) | Some(SubmitOutcome::NetworkError(_)) => {
            let message = document
                .get_element_by_id("errorText")
                .map(|node| document.text(node))
                .unwrap_or("Registration failed");
            println!("{}", message);
            false
        }
        Some(SubmitOutcome::Ignored) | None => {
            println!("Submission was not processed");
            false
        }
    }
}
