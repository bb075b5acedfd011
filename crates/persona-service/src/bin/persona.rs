//! Evaluate one profile from the command line.
//!
//! ```text
//! persona <handle> [avatar-url] [bio...]
//! ```
//!
//! Settings come from `PERSONA__*` environment variables.

use std::process::ExitCode;
use std::sync::Arc;

use persona_service::{init_tracing, ProfileService, ServiceConfig, UrlAvatarClassifier};

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(e) = init_tracing("info") {
        eprintln!("{e}");
    }

    let mut args = std::env::args().skip(1);
    let Some(handle) = args.next() else {
        eprintln!("usage: persona <handle> [avatar-url] [bio...]");
        return ExitCode::from(2);
    };
    let avatar_url = args.next();
    let bio = args.collect::<Vec<_>>().join(" ");

    let config = match ServiceConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    let mut avatars = UrlAvatarClassifier::new();
    if let Some(url) = avatar_url {
        avatars = avatars.with_avatar(&handle, url);
    }

    let service = match ProfileService::from_config(&config, Arc::new(avatars)) {
        Ok(service) => service,
        Err(e) => {
            tracing::error!(error = %e, "failed to start");
            return ExitCode::FAILURE;
        }
    };

    match service.evaluate("cli", &handle, &bio).await {
        Ok(evaluation) => {
            let result = &evaluation.stored.result;
            let b = &result.big_five;

            println!("@{}", result.handle);
            println!(
                "E {}  O {}  A {}  C {}  N {}",
                b.extraversion, b.openness, b.agreeableness, b.conscientiousness, b.neuroticism
            );
            println!(
                "Agent {}  Human {}  Dominance {} ({})",
                result.agent_score,
                result.human_score,
                result.dominance_score,
                result.dominance_type.label()
            );
            let tags: Vec<&str> = result.tags.iter().map(|t| t.as_str()).collect();
            println!("Tags: {}", tags.join(", "));
            println!();
            println!("{}", result.short_narrative);
            if let Some(report) = &result.extended_report {
                println!();
                print!("{report}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "evaluation failed");
            ExitCode::FAILURE
        }
    }
}
