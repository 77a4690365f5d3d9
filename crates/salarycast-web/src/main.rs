use anyhow::Context;
use clap::Parser;
use salarycast_core::{Age, CustomerRecord, Flag, FormSnapshot, ProductCount, Tenure};
use salarycast_pipeline::{ArtifactPaths, Artifacts, SalaryPredictor};
use salarycast_web::cli::{Cli, Commands, PredictArgs};
use salarycast_web::metrics::init_metrics;
use salarycast_web::{run_server, AppState, ServerConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(args) => {
            init_logging(args.verbose);

            let config = ServerConfig::load(&args.config, &args)?;
            let predictor = load_predictor(&config.artifact_paths())?;

            let mut state = AppState::new(predictor);
            if config.metrics_enabled {
                state = state.with_metrics(init_metrics()?);
            }

            println!();
            println!("  SalaryCast");
            println!();
            println!("  Model:      {}", state.predictor.model_name());
            println!("  Artifacts:  {}", config.artifacts_dir.display());
            println!();
            println!("  Open http://{}:{} in your browser", config.address, config.port);
            println!();

            run_server(state, &config).await?;
        }

        Commands::Predict(args) => {
            init_logging(args.verbose);

            let predictor = load_predictor(&ArtifactPaths::in_dir(&args.artifacts))?;
            let snapshot = snapshot_from_args(&predictor, &args)?;
            let prediction = predictor.assemble_and_predict(&snapshot)?;

            println!("{}", prediction.display());
        }
    }

    Ok(())
}

/// Load every artifact; any failure aborts startup
fn load_predictor(paths: &ArtifactPaths) -> anyhow::Result<SalaryPredictor> {
    let artifacts = Artifacts::load(paths).context("Failed to load artifacts")?;
    let predictor =
        SalaryPredictor::from_artifacts(artifacts).context("Artifacts do not fit together")?;
    Ok(predictor)
}

fn snapshot_from_args(
    predictor: &SalaryPredictor,
    args: &PredictArgs,
) -> anyhow::Result<FormSnapshot> {
    let geography = match &args.geography {
        Some(geography) => geography.clone(),
        None => predictor
            .geography_categories()
            .first()
            .cloned()
            .context("Geography encoder has no categories")?,
    };
    let gender = match &args.gender {
        Some(gender) => gender.clone(),
        None => predictor
            .gender_categories()
            .first()
            .cloned()
            .context("Gender encoder has no categories")?,
    };

    let record = CustomerRecord {
        credit_score: args.credit_score,
        age: Age::new(args.age)?,
        tenure: Tenure::new(args.tenure)?,
        balance: args.balance,
        num_of_products: ProductCount::new(args.num_of_products)?,
        has_cr_card: Flag::new(args.has_cr_card)?,
        is_active_member: Flag::new(args.is_active_member)?,
        exited: Flag::new(args.churn)?,
    };

    Ok(FormSnapshot::new(geography, gender, record))
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        "salarycast=debug,salarycast_web=debug,salarycast_pipeline=debug,tower_http=debug"
    } else {
        "salarycast=info,salarycast_web=info,salarycast_pipeline=info,tower_http=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
