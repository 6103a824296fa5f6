//! `mdextract init` subcommand — write a configuration file with defaults

use mdextract::Config;

/// Initialize a new configuration file
pub(crate) fn init_config(output_path: &str, format: &str) -> Result<(), Box<dyn std::error::Error>> {
    use colored::Colorize;
    use std::path::Path;

    // Check if file already exists
    if Path::new(output_path).exists() {
        eprintln!(
            "{} Configuration file '{}' already exists.",
            "Error:".red().bold(),
            output_path
        );
        eprintln!("Remove it first or choose a different output path with --output");
        std::process::exit(1);
    }

    let config = Config::default();
    let content = match format {
        "json" => serde_json::to_string_pretty(&config)? + "\n",
        "yaml" | "yml" => format!("# mdextract configuration\n{}", serde_yaml_ng::to_string(&config)?),
        "toml" => format!("# mdextract configuration\n{}", toml::to_string_pretty(&config)?),
        _ => {
            eprintln!(
                "{} Unknown format '{}'. Use json, yaml, or toml.",
                "Error:".red().bold(),
                format
            );
            std::process::exit(1);
        }
    };

    std::fs::write(output_path, content)?;
    println!(
        "{} Created configuration file: {}",
        "✓".green().bold(),
        output_path.cyan()
    );
    Ok(())
}
