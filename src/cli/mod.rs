use crate::{
    backend::MockPlanner, notify::TracingSink, Interest, SubmitOutcome, TripField, TripSession,
};
use anyhow::Context;
use clap::{Arg, ArgAction, Command};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

/// CLI entry point for the trip-session demo
pub async fn run() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let matches = Command::new("trip-session")
        .version("0.1.0")
        .about("Plan a mock trip: budget breakdown plus a simulated itinerary")
        .arg(
            Arg::new("from")
                .help("Departure city")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("to")
                .help("Destination city")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::new("start-date")
                .short('s')
                .long("start-date")
                .value_name("DATE")
                .help("Trip start date (ISO-8601)")
                .required(true),
        )
        .arg(
            Arg::new("end-date")
                .short('e')
                .long("end-date")
                .value_name("DATE")
                .help("Trip end date (ISO-8601)"),
        )
        .arg(
            Arg::new("budget")
                .short('b')
                .long("budget")
                .value_name("AMOUNT")
                .help("Total budget in USD")
                .default_value("0"),
        )
        .arg(
            Arg::new("travelers")
                .short('n')
                .long("travelers")
                .value_name("COUNT")
                .help("Number of travelers (1-20)")
                .default_value("1"),
        )
        .arg(
            Arg::new("interest")
                .short('i')
                .long("interest")
                .value_name("NAME")
                .help("Interest to select; repeatable (e.g. food, nature)")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("delay-ms")
                .long("delay-ms")
                .value_name("MS")
                .help("Simulated planning delay in milliseconds")
                .default_value("2000"),
        )
        .arg(
            Arg::new("fail")
                .long("fail")
                .help("Force the mock planner to fail")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the final session snapshot as JSON")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let budget: f64 = matches
        .get_one::<String>("budget")
        .unwrap()
        .parse()
        .context("--budget must be a number")?;
    let travelers: u32 = matches
        .get_one::<String>("travelers")
        .unwrap()
        .parse()
        .context("--travelers must be an integer")?;
    let delay_ms: u64 = matches
        .get_one::<String>("delay-ms")
        .unwrap()
        .parse()
        .context("--delay-ms must be an integer")?;

    let mut planner = MockPlanner::new().with_delay(Duration::from_millis(delay_ms));
    if matches.get_flag("fail") {
        planner = planner.failing("simulated planning failure");
    }

    let mut session = TripSession::new(Arc::new(planner), Arc::new(TracingSink::new()));
    session.set_field(TripField::Origin(
        matches.get_one::<String>("from").unwrap().clone(),
    ));
    session.set_field(TripField::Destination(
        matches.get_one::<String>("to").unwrap().clone(),
    ));
    session.set_field(TripField::StartDate(
        matches.get_one::<String>("start-date").unwrap().clone(),
    ));
    if let Some(end_date) = matches.get_one::<String>("end-date") {
        session.set_field(TripField::EndDate(end_date.clone()));
    }
    session.set_field(TripField::Budget(budget));
    session.set_field(TripField::Travelers(travelers));

    if let Some(names) = matches.get_many::<String>("interest") {
        for name in names {
            let interest: Interest = name.parse()?;
            session.toggle_interest(interest);
        }
    }

    let breakdown = session.budget_breakdown();
    if !breakdown.is_zero() {
        println!("\nBudget Breakdown:");
        println!("  Accommodation  ${}", breakdown.accommodation);
        println!("  Food & Dining  ${}", breakdown.food);
        println!("  Transport      ${}", breakdown.transport);
        println!("  Activities     ${}", breakdown.activities);
    }

    info!("Submitting trip for planning");
    match session.submit().await? {
        SubmitOutcome::Ready => {
            let snapshot = session.snapshot();
            let itinerary = snapshot
                .itinerary
                .as_ref()
                .context("ready session is missing its itinerary")?;
            println!(
                "\nItinerary: {} -> {}",
                itinerary.origin, itinerary.destination
            );
            for item in &itinerary.items {
                let rating = item
                    .rating
                    .map(|r| format!("  {r}★"))
                    .unwrap_or_default();
                println!(
                    "  {}  {:<28} {:<30} ${}{}",
                    item.time, item.title, item.location, item.cost, rating
                );
            }
            println!("  Total: ${}", itinerary.total_cost());

            if matches.get_flag("json") {
                println!("{}", serde_json::to_string_pretty(&snapshot)?);
            }
        }
        SubmitOutcome::Failed => {
            let snapshot = session.snapshot();
            error!(
                "Planning failed: {}",
                snapshot.last_error.as_deref().unwrap_or("unknown reason")
            );
            if matches.get_flag("json") {
                println!("{}", serde_json::to_string_pretty(&snapshot)?);
            }
            anyhow::bail!("planning did not produce an itinerary");
        }
        SubmitOutcome::AlreadyPlanning => unreachable!("fresh session cannot be mid-planning"),
    }

    Ok(())
}
