use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, LogicalSize, WindowBuilder};
use hanzi_core::model::ChapterId;
use services::{Clock, DeckService, QuizService};
use storage::Storage;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use ui::{App, UiApp, build_app_context};

#[derive(Parser)]
#[command(name = "hanzi-quiz", version, about = "Chinese character flashcard quiz")]
struct Cli {
    #[command(flatten)]
    deck: DeckArgs,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Args)]
struct DeckArgs {
    /// Card store JSON file
    #[arg(
        long,
        global = true,
        env = "HANZI_QUIZ_CARDS",
        default_value = "characters.json"
    )]
    cards: PathBuf,

    /// Chapters to quiz, repeatable or comma-separated (default: all)
    #[arg(
        long = "chapter",
        global = true,
        env = "HANZI_QUIZ_CHAPTERS",
        value_delimiter = ','
    )]
    chapters: Vec<String>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Open the quiz window (default)
    Ui,
    /// Validate the card store and print what would be quizzed
    Check,
}

impl DeckArgs {
    /// Parsed chapter numbers; entries that are not numbers are skipped.
    fn chapter_ids(&self) -> Vec<ChapterId> {
        self.chapters
            .iter()
            .map(|raw| raw.trim())
            .filter(|raw| !raw.is_empty())
            .filter_map(|raw| match raw.parse::<ChapterId>() {
                Ok(id) => Some(id),
                Err(err) => {
                    tracing::warn!(%err, "ignoring chapter selection");
                    None
                }
            })
            .collect()
    }
}

struct DesktopApp {
    quiz: Arc<QuizService>,
    clock: Clock,
}

impl UiApp for DesktopApp {
    fn quiz(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz)
    }

    fn clock(&self) -> Clock {
        self.clock
    }
}

async fn prepare_quiz(
    deck: &DeckArgs,
) -> Result<(DeckService, QuizService), Box<dyn std::error::Error>> {
    let storage = Storage::json_file(&deck.cards);
    let deck_service = DeckService::new(Arc::clone(&storage.chapters));
    let quiz = deck_service
        .quiz_for(&deck.chapter_ids())
        .await
        .map_err(|err| format!("{}: {err}", deck.cards.display()))?;
    Ok((deck_service, quiz))
}

async fn check(
    deck_service: &DeckService,
    quiz: &QuizService,
) -> Result<(), Box<dyn std::error::Error>> {
    for count in deck_service.chapter_counts().await? {
        println!("chapter {:>3}: {} cards", count.chapter.value(), count.cards);
    }
    let selected = quiz
        .chapters()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    println!("selected chapters: {selected}");
    println!("deck size: {}", quiz.pool().len());
    Ok(())
}

fn launch(quiz: QuizService) {
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        quiz: Arc::new(quiz),
        clock: Clock::default_clock(),
    });
    let context = build_app_context(&app);

    // Some tao setups default to an always-on-top window; keep it a normal window.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Hanzi Quiz")
            .with_inner_size(LogicalSize::new(420.0, 560.0))
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Ui);

    // The desktop launcher drives its own runtime, so loading happens on a
    // short-lived one that is gone before the window opens.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let (deck_service, quiz) = runtime.block_on(prepare_quiz(&cli.deck))?;

    match command {
        Command::Check => runtime.block_on(check(&deck_service, &quiz)),
        Command::Ui => {
            drop(runtime);
            launch(quiz);
            Ok(())
        }
    }
}

/// `RUST_LOG` directives on top of an `info` default level.
fn env_filter(rust_log: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(rust_log.unwrap_or_default())
}

fn main() {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(rust_log.as_deref()))
        .init();

    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
