use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "salarycast")]
#[command(author, version, about = "Customer salary prediction form and API")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the prediction server with the web form
    Serve(ServeArgs),

    /// Predict a single salary from flags and print it
    Predict(PredictArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct ServeArgs {
    /// Configuration file path
    #[arg(short, long, default_value = "salarycast.yaml")]
    pub config: String,

    /// Listen address (overrides config)
    #[arg(short, long)]
    pub address: Option<String>,

    /// Listen port (overrides config)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Artifacts directory (overrides config)
    #[arg(long)]
    pub artifacts: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Args, Debug, Clone)]
pub struct PredictArgs {
    /// Artifacts directory
    #[arg(long, default_value = "artifacts")]
    pub artifacts: PathBuf,

    /// Geography (defaults to the first encoder category)
    #[arg(long)]
    pub geography: Option<String>,

    /// Gender (defaults to the first encoder category)
    #[arg(long)]
    pub gender: Option<String>,

    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub credit_score: i32,

    #[arg(long, default_value_t = 18, value_parser = clap::value_parser!(i64).range(18..=100))]
    pub age: i64,

    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(i64).range(0..=10))]
    pub tenure: i64,

    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub balance: f64,

    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(i64).range(1..=4))]
    pub num_of_products: i64,

    /// Has credit card (0 or 1)
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(i64).range(0..=1))]
    pub has_cr_card: i64,

    /// Is active member (0 or 1)
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(i64).range(0..=1))]
    pub is_active_member: i64,

    /// Churn flag (0 or 1)
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(i64).range(0..=1))]
    pub churn: i64,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_overrides_parse() {
        let cli = Cli::try_parse_from([
            "salarycast",
            "serve",
            "--port",
            "9000",
            "--artifacts",
            "/srv/artifacts",
        ])
        .unwrap();

        match cli.command {
            Commands::Serve(args) => {
                assert_eq!(args.port, Some(9000));
                assert_eq!(args.address, None);
                assert_eq!(args.config, "salarycast.yaml");
                assert_eq!(args.artifacts, Some(PathBuf::from("/srv/artifacts")));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_predict_rejects_out_of_range_age() {
        assert!(Cli::try_parse_from(["salarycast", "predict", "--age", "101"]).is_err());
        assert!(Cli::try_parse_from(["salarycast", "predict", "--num-of-products", "0"]).is_err());
        assert!(Cli::try_parse_from(["salarycast", "predict", "--age", "100"]).is_ok());
    }
}
