use crate::domain::models::{JsonOut, Outcome};

pub fn print_outcome(json: bool, outcome: &Outcome) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut {
                ok: true,
                data: outcome
            })?
        );
    } else if let Some(text) = outcome.message() {
        println!("{}", text);
    }
    Ok(())
}
