//! Model and personality listings for the `models` and `personalities` commands.

use std::error::Error;

use crate::commands::{format_catalog, model_detail, personality_detail};
use crate::core::catalog::{ModelRef, Personality};
use crate::core::config::data::Config;

pub fn list_models(config: &Config) -> Result<(), Box<dyn Error>> {
    let default = config.resolve_model(None)?;
    println!("🤖 Available Models");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("{}", format_catalog::<ModelRef>(Some(default), model_detail));
    print_footer(config.default_model.is_some(), "-m <model>", "default-model");
    Ok(())
}

pub fn list_personalities(config: &Config) -> Result<(), Box<dyn Error>> {
    let default = config.resolve_personality(None)?;
    println!("🎭 Available Personalities");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!(
        "{}",
        format_catalog::<Personality>(Some(default), personality_detail)
    );
    print_footer(
        config.default_personality.is_some(),
        "-P <personality>",
        "default-personality",
    );
    Ok(())
}

fn print_footer(from_config: bool, flag: &str, key: &str) {
    println!();
    if from_config {
        println!("* marks the default (from config)");
    } else {
        println!("* marks the built-in default");
    }
    println!("💡 Pick one for a session with: personabot {flag}");
    println!("   Change the default with: personabot set {key} <name>");
}
