use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use common::FormInput;

pub mod commands;

use crate::client::PredictionClient;
use commands::{show_metadata, show_prediction};

#[derive(Parser)]
#[command(name = "kira")]
#[command(about = "Command-line client for the Istanbul rent price estimator")]
#[command(version)]
pub struct Cli {
    /// Base URL of the prediction service
    #[arg(long, global = true, env = "KIRA_API_BASE", default_value = "http://127.0.0.1:8001")]
    pub api_base: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the districts and neighborhoods the model knows about
    Metadata,
    /// Estimate the monthly rent of a property
    ///
    /// Numeric values are parsed leniently: "120m2" is sent as 120 and
    /// anything without leading digits is sent as null.
    Predict(PredictArgs),
}

#[derive(Args, Debug)]
pub struct PredictArgs {
    /// Number of rooms
    #[arg(long)]
    pub room: String,
    /// Number of living rooms
    #[arg(long)]
    pub living_room: String,
    /// Floor area in square meters
    #[arg(long)]
    pub area: String,
    /// Floor the flat is on
    #[arg(long)]
    pub floor: String,
    /// Building age in years
    #[arg(long)]
    pub age: String,
    /// District, as listed by `kira metadata`
    #[arg(long)]
    pub district: String,
    /// Neighborhood, as listed by `kira metadata`
    #[arg(long)]
    pub neighborhood: String,
}

impl From<PredictArgs> for FormInput {
    fn from(args: PredictArgs) -> Self {
        FormInput {
            room: args.room,
            living_room: args.living_room,
            area: args.area,
            floor: args.floor,
            age: args.age,
            district: args.district,
            neighborhood: args.neighborhood,
        }
    }
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let client = PredictionClient::new(&self.api_base);
        match self.command {
            Commands::Metadata => {
                show_metadata(&client).await?;
            }
            Commands::Predict(args) => {
                show_prediction(&client, args.into()).await?;
            }
        }
        Ok(())
    }
}
