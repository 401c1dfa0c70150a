use std::path::PathBuf;

use clap::{Parser, Subcommand};
use mood_dialoguer_wizard::{DialoguerError, DialoguerHost};
use mood_survey::{Session, StoryForm, SurveyConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "moviepal")]
#[command(about = "Find movies that match your mood", long_about = None)]
struct Args {
    /// YAML config file; defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Disable the colored prompt theme.
    #[arg(long)]
    plain: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum Command {
    /// Rate how you feel right now (PANAS survey).
    Mood,
    /// Describe the story, keywords, actors or directors you like.
    Story,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mood_survey=info,moviepal=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let config = SurveyConfig::load_or_default(args.config.as_deref())?;
    let submitter = config.submitter();
    let host = if args.plain {
        DialoguerHost::plain()
    } else {
        DialoguerHost::new()
    };

    let result = match args.command.unwrap_or(Command::Mood) {
        Command::Mood => {
            let mut session = Session::from_config(&config)?;
            host.run_mood(&mut session, &submitter)
                .await
                .map(|completion| {
                    println!();
                    println!("{}", completion.scores.summary());
                    completion.navigation
                })
        }
        Command::Story => {
            let mut form = StoryForm::new().with_route(config.recommendations_route.clone());
            host.run_story(&mut form, &submitter).await
        }
    };

    match result {
        Ok(navigation) => {
            println!("-> {navigation}");
            Ok(())
        }
        Err(DialoguerError::Cancelled) => {
            eprintln!("Cancelled.");
            std::process::exit(130);
        }
        Err(err) => Err(err.into()),
    }
}
