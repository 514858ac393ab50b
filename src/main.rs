#![allow(clippy::doc_markdown)]
#![doc = include_str!("../README.md")]

mod cli;
mod io;
mod prelude;
mod pricing;
mod quantity;
mod series;
mod tables;
mod tariff;

use std::fs::File;

use clap::{Parser, crate_version};

use crate::{
    cli::{Args, Command, PriceArgs},
    prelude::*,
    quantity::cost::Cost,
    tables::{build_breakdown_table, build_schedule_table},
};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().init();
    info!(version = crate_version!(), "starting…");

    match Args::parse().command {
        Command::Price(args) => price(&args)?,
        Command::Bands(args) => {
            println!("{}", build_schedule_table(&args.schedule.load()?));
        }
    }

    info!("done!");
    Ok(())
}

fn price(args: &PriceArgs) -> Result {
    let schedule = args.schedule.load()?;
    let records = {
        let file = File::open(&args.input)
            .with_context(|| format!("failed to open `{}`", args.input.display()))?;
        io::read_consumption(file)?
    };
    info!(n_records = records.len(), "loaded the consumption series");

    let costs = pricing::price_series(&schedule.rate_table(), &records)?;
    let total: Cost = costs.iter().map(|point| point.value).sum();
    info!(%total, "priced");

    let breakdowns = pricing::summarize(&schedule, &records, &costs)?;
    println!("{}", build_breakdown_table(&breakdowns));

    if let Some(output) = &args.output {
        let file = File::create(output)
            .with_context(|| format!("failed to create `{}`", output.display()))?;
        io::write_costed(file, &records, &costs)?;
        info!(path = %output.display(), "wrote the costed series");
    }
    Ok(())
}
