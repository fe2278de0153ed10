use clap::Parser;
use course_catalog::app::render::{
    load_error_message, render_catalog, render_schedule, LOADING_MESSAGE,
};
use course_catalog::config::toml_config::TomlConfig;
use course_catalog::core::ConfigProvider;
use course_catalog::utils::error::ErrorSeverity;
use course_catalog::utils::{logger, validation::Validate};
use course_catalog::{source_for, CatalogError, CatalogSession, CliConfig, LoadState};

fn exit_code(e: &CatalogError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low => 4,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn fail(e: CatalogError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(exit_code(&e));
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut config = CliConfig::parse();

    if let Some(path) = config.config.clone() {
        match TomlConfig::from_file(&path).and_then(|file| {
            file.validate()?;
            Ok(file)
        }) {
            Ok(file) => config.merge_file(&file).unwrap_or_else(|e| fail(e)),
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        }
    }

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting course-catalog");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        fail(e);
    }

    let source = source_for(config.source(), config.request_timeout()).unwrap_or_else(|e| fail(e));

    let mut session = CatalogSession::new(config.page_size());
    {
        let query = session.query_mut();
        query.set_search_term(config.search.clone());
        if let Some(key) = config.sort {
            query.set_sort(key, config.sort_direction());
        }
        query.set_page(config.page);
    }

    eprintln!("{}", LOADING_MESSAGE);
    session.load(source.as_ref()).await;

    if let LoadState::Failed(message) = session.state() {
        eprintln!("{}", load_error_message(message));
        std::process::exit(2);
    }

    for action in &config.actions {
        tracing::info!("Applying {}", action);
        if let Err(e) = session.apply(action) {
            tracing::warn!("Skipping {}: {}", action, e);
            eprintln!("⚠️  {}", e.user_friendly_message());
        }
    }

    if let Some(page) = session.visible_page() {
        println!("{}", render_catalog(&page, config.format).unwrap_or_else(|e| fail(e)));
    }

    println!(
        "{}",
        render_schedule(session.enrollment().courses(), config.format).unwrap_or_else(|e| fail(e))
    );

    Ok(())
}
