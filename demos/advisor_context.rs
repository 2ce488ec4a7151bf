//! Advisor context example
//!
//! Shows the CLI workflow for generating an AI advisory summary and the
//! context block the generation service receives.

use anyhow::Result;

fn main() -> Result<()> {
    println!("Advisor context example");
    println!("The summarize command ranks colleges, then sends the selected");
    println!("college plus the student profile to the generation service.");
    println!();
    println!("Usage:");
    println!("  # Rank colleges");
    println!("  collegefit rank --data ./data/Joint_Data.csv \\");
    println!("      --home-state CA --desired-state CA \\");
    println!("      --max-tuition 25000 --max-debt 15000 \\");
    println!("      --gender women --race latino --major stem --top-k 5");
    println!();
    println!("  # Inspect the RAG context for the top result (no network)");
    println!("  collegefit context --data ./data/Joint_Data.csv ... --pick 1");
    println!();
    println!("  # Generate a summary (requires GEMINI_KEY)");
    println!("  GEMINI_KEY=... collegefit summarize --data ./data/Joint_Data.csv ... --pick 1");

    Ok(())
}
