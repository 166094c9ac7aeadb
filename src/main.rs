use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use console::style;
use copyforge_core::config::constants::models;
use copyforge_core::config::{CopyforgeConfig, api_keys};
use copyforge_core::ui::Spinner;
use copyforge_core::{
    ApiKeySources, BrandProfile, ContentGenerator, ContentRequest, Framework, GeneratedResponse,
    OutputLanguage, Pillar, Session, TextGenerator, Tone, prompt,
};
use dialoguer::{Input, Select};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(
    name = "copyforge",
    version,
    about = "Marketing-copy generator powered by Gemini\n\nQuick start:\n  export GEMINI_API_KEY=\"your_key\"\n  copyforge"
)]
struct Cli {
    /// Gemini model ID, e.g. gemini-2.5-flash
    #[arg(long, global = true)]
    model: Option<String>,

    /// API key env var to read (checks this, then GOOGLE_API_KEY)
    #[arg(long, global = true)]
    api_key_env: Option<String>,

    /// Path to copyforge.toml; defaults to ./copyforge.toml, then
    /// ~/.copyforge/copyforge.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Interactive form session (default)
    Session,

    /// One-shot generation from flags; prints the copy to stdout
    Generate(GenerateArgs),
}

#[derive(clap::Args, Debug)]
struct GenerateArgs {
    #[arg(long)]
    topic: String,

    #[arg(long, default_value = "")]
    description: String,

    /// Persuasion framework: aida, pas, bab, fab, four-cs, pastor, quest,
    /// storytelling
    #[arg(long)]
    framework: Option<Framework>,

    /// Content pillar: educational, promotional, entertainment,
    /// inspirational, community, testimonial
    #[arg(long)]
    pillar: Option<Pillar>,

    /// Output language: english, vietnamese, spanish (unrecognized tags
    /// fall back to english)
    #[arg(long)]
    language: Option<OutputLanguage>,

    /// Tone of voice: professional, friendly, witty, inspirational,
    /// authoritative, casual
    #[arg(long)]
    tone: Option<Tone>,

    #[arg(long)]
    audience: Option<String>,

    /// Brand profile JSON file applied to the request
    #[arg(long)]
    brand: Option<PathBuf>,

    /// Print the assembled prompt instead of calling the API
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    api_keys::load_dotenv()?;

    let cli = Cli::parse();
    let mut config = CopyforgeConfig::load(cli.config.as_deref())?;
    if let Some(model) = cli.model {
        config.agent.model = model;
    }
    if let Some(env_var) = cli.api_key_env {
        config.agent.api_key_env = env_var;
    }
    if !models::is_supported(&config.agent.model) {
        tracing::warn!(
            model = %config.agent.model,
            "model is not in the known-supported list, sending it anyway"
        );
    }

    match cli.command.unwrap_or(Commands::Session) {
        Commands::Session => run_session(config).await,
        Commands::Generate(args) => run_generate(config, args).await,
    }
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Resolve the API key up front so a missing key fails before any network
/// call, with a message naming the variable to set.
fn resolve_api_key(config: &CopyforgeConfig) -> Result<String> {
    let sources = ApiKeySources {
        env_var: config.agent.api_key_env.clone(),
        config_value: config.agent.api_key.clone(),
    };
    api_keys::get_api_key(&sources)
}

async fn run_generate(config: CopyforgeConfig, args: GenerateArgs) -> Result<()> {
    let brand = match &args.brand {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read brand file {}", path.display()))?;
            let profile: BrandProfile = serde_json::from_str(&raw)
                .with_context(|| format!("failed to parse brand file {}", path.display()))?;
            Some(profile)
        }
        None => None,
    };

    // Brand defaults fill tone and audience unless flags override them.
    let mut tone = args.tone.unwrap_or(config.defaults.tone);
    let mut audience = args.audience.clone();
    if let Some(profile) = &brand {
        if args.tone.is_none() {
            tone = profile.default_tone;
        }
        if audience.is_none() && !profile.default_audience.is_empty() {
            audience = Some(profile.default_audience.clone());
        }
    }

    let request = ContentRequest {
        topic: args.topic,
        description: args.description,
        framework: args.framework.unwrap_or(config.defaults.framework),
        pillar: args.pillar.unwrap_or(config.defaults.pillar),
        language: args.language.unwrap_or(config.defaults.language),
        tone,
        target_audience: audience,
        brand,
    };

    if args.dry_run {
        let built = prompt::build(&request);
        println!("{}", style("== System instruction ==").cyan());
        println!("{}\n", built.system_instruction);
        println!("{}", built.prompt);
        return Ok(());
    }

    let api_key = resolve_api_key(&config)?;
    let generator = ContentGenerator::new(api_key, config.agent.model.clone());

    let spinner = Spinner::new("Generating content...");
    match generator.generate(&request).await {
        Ok(response) => {
            spinner.finish_and_clear();
            println!("{}", response.content);
            Ok(())
        }
        Err(err) => {
            spinner.finish_with_error("Generation failed");
            tracing::error!(error = %err, "one-shot generation failed");
            anyhow::bail!("Failed to generate content. Please try again.")
        }
    }
}

async fn run_session(config: CopyforgeConfig) -> Result<()> {
    let mut session = Session::new(config.defaults.clone());
    let mut generator: Option<ContentGenerator> = None;

    println!(
        "{} {}",
        style("copyforge").bold().green(),
        style(format!("(model: {})", config.agent.model)).dim()
    );

    loop {
        print_status(&session);
        let actions = [
            "Generate content",
            "Brand profiles",
            "Copy last result",
            "Clear form",
            "Quit",
        ];
        let choice = Select::new()
            .with_prompt("Action")
            .items(&actions)
            .default(0)
            .interact()?;

        match choice {
            0 => generate_interactive(&mut session, &mut generator, &config).await?,
            1 => brands_menu(&mut session)?,
            2 => copy_result(&mut session),
            3 => {
                session.clear();
                println!("Form cleared.");
            }
            _ => break,
        }
    }
    Ok(())
}

fn print_status(session: &Session) {
    if let Some(brand) = session.brands().selected() {
        println!("{} {}", style("Brand:").dim(), brand.name);
    }
    if let Some(output) = session.output() {
        println!(
            "{} generated at {}",
            style("Last result:").dim(),
            output.timestamp.format("%H:%M:%S")
        );
    }
    if let Some(error) = session.last_error() {
        println!("{} {}", style("!").red(), error);
    }
}

async fn generate_interactive(
    session: &mut Session,
    generator: &mut Option<ContentGenerator>,
    config: &CopyforgeConfig,
) -> Result<()> {
    fill_form(session)?;

    // Fail fast on a missing key before entering the submitting phase.
    if generator.is_none() {
        match resolve_api_key(config) {
            Ok(api_key) => {
                *generator = Some(ContentGenerator::new(api_key, config.agent.model.clone()));
            }
            Err(err) => {
                println!("{} {err:#}", style("✗").red());
                return Ok(());
            }
        }
    }
    let Some(generator) = generator.as_ref() else {
        return Ok(());
    };

    let request_id = match session.begin_submit() {
        Ok(id) => id,
        Err(err) => {
            println!("{err}");
            return Ok(());
        }
    };
    let request = session.request().clone();

    let spinner = Spinner::new("Generating content...");
    let result = generator.generate(&request).await;
    let succeeded = result.is_ok();
    session.complete(request_id, result);

    if succeeded {
        spinner.finish_and_clear();
        if let Some(output) = session.output() {
            render_output(output);
        }
    } else {
        spinner.finish_with_error("Generation failed");
        if let Some(error) = session.last_error() {
            println!("{} {}", style("✗").red(), error);
        }
    }
    Ok(())
}

fn render_output(output: &GeneratedResponse) {
    println!();
    println!(
        "{}",
        style(format!(
            "== Generated copy ({}) ==",
            output.framework.label(OutputLanguage::English)
        ))
        .cyan()
    );
    println!("{}", output.content);
    println!();
}

fn fill_form(session: &mut Session) -> Result<()> {
    let locale = session.request().language;

    let topic: String = Input::new()
        .with_prompt("Topic")
        .with_initial_text(session.request().topic.clone())
        .allow_empty(true)
        .interact_text()?;
    session.set_topic(topic);

    let description: String = Input::new()
        .with_prompt("Details")
        .with_initial_text(session.request().description.clone())
        .allow_empty(true)
        .interact_text()?;
    session.set_description(description);

    let framework = select_from(
        "Framework",
        &Framework::ALL,
        |f| f.label(locale),
        session.request().framework,
    )?;
    session.set_framework(framework);

    let pillar = select_from(
        "Content pillar",
        &Pillar::ALL,
        |p| p.label(locale),
        session.request().pillar,
    )?;
    session.set_pillar(pillar);

    let tone = select_from(
        "Tone of voice",
        &Tone::ALL,
        |t| t.label(locale),
        session.request().tone,
    )?;
    session.set_tone(tone);

    let language = select_from(
        "Output language",
        &OutputLanguage::ALL,
        |l| l.label(locale),
        session.request().language,
    )?;
    session.set_language(language);

    let audience: String = Input::new()
        .with_prompt("Target audience (leave empty for brand default)")
        .with_initial_text(
            session
                .request()
                .target_audience
                .clone()
                .unwrap_or_default(),
        )
        .allow_empty(true)
        .interact_text()?;
    session.set_audience(if audience.trim().is_empty() {
        None
    } else {
        Some(audience)
    });

    Ok(())
}

fn select_from<T: Copy + PartialEq>(
    prompt: &str,
    options: &[T],
    label: impl Fn(T) -> &'static str,
    current: T,
) -> Result<T> {
    let labels: Vec<&str> = options.iter().map(|&option| label(option)).collect();
    let default = options
        .iter()
        .position(|&option| option == current)
        .unwrap_or(0);
    let index = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(default)
        .interact()?;
    Ok(options[index])
}

fn brands_menu(session: &mut Session) -> Result<()> {
    loop {
        let actions = [
            "List brands",
            "Add brand",
            "Select brand",
            "Delete brand",
            "Back",
        ];
        let choice = Select::new()
            .with_prompt("Brand profiles")
            .items(&actions)
            .default(0)
            .interact()?;

        match choice {
            0 => list_brands(session),
            1 => add_brand(session)?,
            2 => {
                if let Some(id) = pick_brand(session, "Select brand")? {
                    session.select_brand(&id);
                    println!("Brand selected.");
                }
            }
            3 => {
                if let Some(id) = pick_brand(session, "Delete brand")? {
                    session.remove_brand(&id);
                    println!("Brand deleted.");
                }
            }
            _ => return Ok(()),
        }
    }
}

fn list_brands(session: &Session) {
    if session.brands().is_empty() {
        println!("No brand profiles yet.");
        return;
    }
    for brand in session.brands().iter() {
        let marker = if session
            .brands()
            .selected()
            .is_some_and(|selected| selected.id == brand.id)
        {
            style("*").green().to_string()
        } else {
            " ".to_string()
        };
        println!(
            "{marker} {} ({}) - {}",
            style(&brand.name).bold(),
            brand.id,
            brand.industry
        );
    }
}

fn add_brand(session: &mut Session) -> Result<()> {
    let name: String = Input::new().with_prompt("Brand name").interact_text()?;
    let suggested_id = name.to_lowercase().replace(' ', "-");
    let id: String = Input::new()
        .with_prompt("Brand id")
        .with_initial_text(suggested_id)
        .interact_text()?;
    let industry: String = Input::new()
        .with_prompt("Industry")
        .allow_empty(true)
        .interact_text()?;
    let description: String = Input::new()
        .with_prompt("Brand description")
        .allow_empty(true)
        .interact_text()?;
    let default_tone = select_from(
        "Default tone",
        &Tone::ALL,
        |t| t.label(OutputLanguage::English),
        Tone::default(),
    )?;
    let default_audience: String = Input::new()
        .with_prompt("Default audience")
        .allow_empty(true)
        .interact_text()?;

    session.add_brand(BrandProfile {
        id,
        name,
        industry,
        description,
        default_tone,
        default_audience,
    });
    println!("Brand added and selected.");
    Ok(())
}

fn pick_brand(session: &Session, prompt: &str) -> Result<Option<String>> {
    if session.brands().is_empty() {
        println!("No brand profiles yet.");
        return Ok(None);
    }
    let entries: Vec<String> = session
        .brands()
        .iter()
        .map(|brand| format!("{} ({})", brand.name, brand.id))
        .collect();
    let ids: Vec<String> = session
        .brands()
        .iter()
        .map(|brand| brand.id.clone())
        .collect();
    let index = Select::new()
        .with_prompt(prompt)
        .items(&entries)
        .default(0)
        .interact()?;
    Ok(Some(ids[index].clone()))
}

fn copy_result(session: &mut Session) {
    match session.copy(Instant::now()) {
        Ok(content) => {
            // Print the exact content for shell-level piping; the indicator
            // reverts on its own after the fixed delay.
            println!("{content}");
            println!("{}", style("✓ Copied").green());
        }
        Err(err) => println!("{err}"),
    }
}
