use std::fs::File;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use access_advisor::catalog::normalize::{normalize_module_id, normalize_touchpoint_id};
use access_advisor::catalog::Catalog;
use access_advisor::config::AppConfig;
use access_advisor::error::AppError;
use access_advisor::recommendation::{
    module_ids_to_codes, ActionPlan, DiscoverySelection, RecommendationEngine,
    RecommendationResult, WhySuggested,
};
use access_advisor::server::{router, AppState};
use access_advisor::telemetry;
use axum_prometheus::PrometheusMetricLayer;
use clap::{Args, Parser, Subcommand};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "Access Advisor",
    about = "Serve or run the accessibility self-assessment recommendation engine",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print recommendations for a discovery selection
    Recommend(RecommendArgs),
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Args, Debug)]
struct RecommendArgs {
    /// Selected touchpoint id (repeatable)
    #[arg(long = "touchpoint")]
    touchpoints: Vec<String>,
    /// Selected sub-touchpoint id (repeatable)
    #[arg(long = "sub-touchpoint")]
    sub_touchpoints: Vec<String>,
    /// Industry id, e.g. retail or hospitality; unknown values use the generic starter set
    #[arg(long, default_value = "other")]
    industry: String,
    /// Service type id, carried through to the session record
    #[arg(long, default_value = "in-person")]
    service_type: String,
    /// Confirmed module id (repeatable); defaults to the recommended set
    #[arg(long = "confirm")]
    confirmed: Vec<String>,
    /// Write the confirmed selection as an action-plan CSV to this path
    #[arg(long)]
    plan_csv: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => run_server(args).await,
        Command::Recommend(args) => run_recommend(args),
    }
}

async fn run_server(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let engine = RecommendationEngine::new(Catalog::standard(), config.engine.clone());

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        engine: Arc::new(engine),
    };

    let app = router(state).layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "access advisor ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let RecommendArgs {
        touchpoints,
        sub_touchpoints,
        industry,
        service_type,
        confirmed,
        plan_csv,
    } = args;

    let config = AppConfig::load()?;
    let engine = RecommendationEngine::new(Catalog::standard(), config.engine);

    let selection = DiscoverySelection {
        selected_touchpoint_ids: touchpoints
            .iter()
            .map(|id| normalize_touchpoint_id(id).to_string())
            .collect(),
        selected_sub_touchpoint_ids: sub_touchpoints
            .iter()
            .map(|id| normalize_touchpoint_id(id).to_string())
            .collect(),
        industry_id: industry,
        service_type_id: service_type,
    };

    let result = engine.recommend(&selection);
    let depth = engine.depth(&selection.selected_touchpoint_ids);

    render_recommendation(&engine, &result);
    println!("\nRecommended depth: {}", depth.recommended_depth.label());
    println!("{}", depth.reasoning);

    let confirmed_ids: Vec<String> = if confirmed.is_empty() {
        result
            .recommended_ids()
            .into_iter()
            .map(str::to_string)
            .collect()
    } else {
        confirmed
            .iter()
            .map(|id| normalize_module_id(id).to_string())
            .collect()
    };

    if let Some(path) = plan_csv {
        let plan = ActionPlan::from_module_ids(engine.catalog(), &confirmed_ids);
        plan.write_csv(File::create(&path)?)?;
        println!(
            "\nAction plan written to {} ({} modules, {} min, {} total cost)",
            path.display(),
            plan.rows.len(),
            plan.total_minutes,
            plan.total_cost
        );
    } else {
        let codes = module_ids_to_codes(engine.catalog(), &confirmed_ids);
        println!("\nConfirmed module codes: {}", codes.join(", "));
    }

    Ok(())
}

fn render_recommendation(engine: &RecommendationEngine, result: &RecommendationResult) {
    println!("Recommended modules");
    for module in &result.recommended_modules {
        print_module_line(engine, module.module_id.as_str(), &module.why_suggested);
    }

    if result.also_relevant.is_empty() {
        println!("\nAlso relevant: none");
    } else {
        println!("\nAlso relevant (optional)");
        for module in &result.also_relevant {
            print_module_line(engine, module.module_id.as_str(), &module.why_suggested);
        }
    }

    for warning in &result.warnings {
        println!("\nNote: {}", warning.message);
    }
}

fn print_module_line(engine: &RecommendationEngine, module_id: &str, why: &WhySuggested) {
    let code = module_ids_to_codes(engine.catalog(), &[module_id.to_string()])
        .into_iter()
        .next()
        .unwrap_or_else(|| module_id.to_string());
    let module = engine.catalog().module(module_id);
    let (name, minutes) = match module {
        Some(module) => (module.name, module.estimated_minutes),
        None => ("(unknown module)", 0),
    };
    println!("- [{code}] {name} ({minutes} min): {}", why.summary());
}
