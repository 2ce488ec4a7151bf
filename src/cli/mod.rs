//! Command-line interface
//!
//! Implements the rank, context, and summarize commands: the interactive
//! form, display, and generation collaborators around the ranking
//! engine.

use anyhow::{Context, Result};
use clap::Args;

use crate::data::{Dataset, Gender, Major, PayerStatus, Race};
use crate::rag::{self, GeminiGenerator, GeneratorConfig, ADVISOR_SYSTEM_PROMPT};
use crate::ranking::{self, Query, RankedRecord};

/// Student preference flags shared by every command.
///
/// Enumerated fields parse through `ValueEnum`; the two "or any" fields
/// (state, MSI category) accept free strings checked against the loaded
/// dataset.
#[derive(Debug, Args)]
pub struct QueryArgs {
    /// Desired state code, or "any" for no state preference
    #[arg(long, default_value = "any")]
    pub desired_state: String,

    /// Home state code; determines which cost-of-attendance column applies
    #[arg(long)]
    pub home_state: String,

    /// Dependent or independent student
    #[arg(long, value_enum, default_value = "dependent")]
    pub payer_status: PayerStatus,

    /// Maximum acceptable tuition/payment
    #[arg(long)]
    pub max_tuition: f64,

    /// Maximum acceptable debt
    #[arg(long)]
    pub max_debt: f64,

    /// Minority-serving-institution category, or "any"
    #[arg(long, default_value = "any")]
    pub msi: String,

    /// Gender
    #[arg(long, value_enum)]
    pub gender: Gender,

    /// International student
    #[arg(long)]
    pub international_student: bool,

    /// Race/ethnicity category
    #[arg(long, value_enum)]
    pub race: Race,

    /// Student parent
    #[arg(long)]
    pub student_parent: bool,

    /// Desired field of study
    #[arg(long, value_enum)]
    pub major: Major,

    /// Age
    #[arg(long, default_value = "18")]
    pub age: u32,

    /// Estimated annual income
    #[arg(long, default_value = "0")]
    pub estimated_income: f64,

    /// Number of ranked colleges to display (1-10)
    #[arg(long, default_value = "5")]
    pub top_k: usize,
}

impl QueryArgs {
    /// Build a [`Query`], validating the financial inputs against the
    /// dataset-derived floors so an impossible constraint fails fast
    /// with the floor in the message.
    pub fn into_query(self, dataset: &Dataset) -> Result<Query> {
        let desired_state = self.desired_state.parse()?;
        let msi_preference = self.msi.parse()?;

        let query = Query::new(desired_state, &self.home_state, self.payer_status)
            .with_max_tuition(self.max_tuition)
            .with_max_debt(self.max_debt)
            .with_msi_preference(msi_preference)
            .with_gender(self.gender)
            .with_international_student(self.international_student)
            .with_race(self.race)
            .with_student_parent(self.student_parent)
            .with_major(self.major)
            .with_age(self.age)
            .with_estimated_income(self.estimated_income)
            .with_top_k(self.top_k);

        if let Some(min_cost) = dataset.min_cost(query.residency()) {
            if query.max_tuition < min_cost {
                anyhow::bail!(
                    "Maximum tuition {} is below the dataset minimum {}; no college can match",
                    query.max_tuition,
                    min_cost
                );
            }
        }
        if let Some(min_debt) = dataset.min_debt(query.payer_status) {
            if query.max_debt < min_debt {
                anyhow::bail!(
                    "Maximum debt {} is below the dataset minimum {}; no college can match",
                    query.max_debt,
                    min_debt
                );
            }
        }

        Ok(query)
    }
}

const MEDALS: [&str; 3] = ["\u{1F947}", "\u{1F948}", "\u{1F949}"];

/// Format one podium line. Positions 1-3 get medal markers, the rest
/// get ordinal numbers; `position` is 0-based.
pub fn podium_line(position: usize, ranked: &RankedRecord) -> String {
    if position < MEDALS.len() {
        format!(
            "{} {} — Score: {:.2}",
            MEDALS[position], ranked.record.name, ranked.score
        )
    } else {
        format!(
            "{}. {} — Score: {:.2}",
            position + 1,
            ranked.record.name,
            ranked.score
        )
    }
}

fn print_podium(ranked: &[RankedRecord]) {
    if ranked.is_empty() {
        println!("No colleges match your criteria!");
        return;
    }

    println!("\u{1F3C6} Top Colleges");
    for (i, r) in ranked.iter().enumerate() {
        println!("{}", podium_line(i, r));
    }
}

/// Select one ranked record by 1-based position
fn select_record(ranked: &[RankedRecord], pick: usize) -> Result<&RankedRecord> {
    if pick == 0 || pick > ranked.len() {
        anyhow::bail!(
            "Pick {} is out of range: {} ranked college(s) available",
            pick,
            ranked.len()
        );
    }
    Ok(&ranked[pick - 1])
}

fn load_and_rank(data: &str, args: QueryArgs) -> Result<(Query, Vec<RankedRecord>)> {
    let dataset = Dataset::from_csv(data)?;
    let query = args.into_query(&dataset)?;
    let ranked = ranking::rank(dataset.records(), &query);
    tracing::info!("Ranked {} college(s)", ranked.len());
    Ok((query, ranked))
}

/// Execute the rank command
pub async fn rank(data: String, args: QueryArgs) -> Result<()> {
    let (_, ranked) = load_and_rank(&data, args)?;
    print_podium(&ranked);
    Ok(())
}

/// Execute the context command: print the RAG context that would be
/// sent to the generation service for one ranked college.
pub async fn context(data: String, args: QueryArgs, pick: usize) -> Result<()> {
    let (query, ranked) = load_and_rank(&data, args)?;
    if ranked.is_empty() {
        println!("No colleges match your criteria!");
        return Ok(());
    }

    let selected = select_record(&ranked, pick)?;
    print!(
        "{}",
        rag::build_context(&query, std::slice::from_ref(selected))
    );
    Ok(())
}

/// Execute the summarize command: rank, then request an advisory summary
/// for the picked college. A generation failure is a warning, not an
/// error; the ranking output has already been shown.
pub async fn summarize(
    data: String,
    args: QueryArgs,
    pick: usize,
    model: String,
    api_base: Option<String>,
) -> Result<()> {
    let (query, ranked) = load_and_rank(&data, args)?;
    print_podium(&ranked);
    if ranked.is_empty() {
        return Ok(());
    }

    let selected = select_record(&ranked, pick)?;
    let rag_context = rag::build_context(&query, std::slice::from_ref(selected));

    let mut config = GeneratorConfig::new(&model);
    if let Some(base) = api_base {
        config = config.with_api_base(&base);
    }
    let generator = GeminiGenerator::new(config).context("Failed to initialize generator")?;

    match generator.generate(ADVISOR_SYSTEM_PROMPT, &rag_context).await {
        Ok(summary) => {
            println!("\nAI Summary for {}:\n", selected.record.name);
            println!("{}", summary);
        }
        Err(e) => {
            tracing::warn!("Summary generation failed: {:#}", e);
            println!(
                "\nWarning: could not generate a summary for {}: {:#}",
                selected.record.name, e
            );
        }
    }

    Ok(())
}
