//! `stm32f1 describe` — recipe metadata and requirements.

use anyhow::Result;

use stm32f1_recipe::requirements::all_requirements;
use stm32f1_recipe::RequirementKind;
use stm32f1_recipe::RecipeMetadata;

pub fn run() -> Result<()> {
    let meta = RecipeMetadata::libhal_stm32f1();

    println!("=== Recipe: {} ===", meta.reference());
    println!("License:     {}", meta.license);
    println!("Homepage:    {}", meta.homepage);
    println!("Description: {}", meta.description);
    println!("Topics:      {}", meta.topics.join(", "));
    println!("Settings:    {}", meta.settings.join(", "));
    println!("Host:        {}", meta.required_host_version);
    println!();

    println!("--- Options ---");
    for option in &meta.options {
        let allowed = match &option.allowed {
            None => "any".to_string(),
            Some(values) => values.join(", "),
        };
        println!("  {} = {} ({})", option.name, option.default, allowed);
    }
    println!();

    println!("--- Requirements ---");
    for req in all_requirements()? {
        let kind = match req.kind {
            RequirementKind::Host => "host",
            RequirementKind::Tool => "tool",
            RequirementKind::Test => "test",
        };
        let headers = if req.transitive_headers {
            " [transitive headers]"
        } else {
            ""
        };
        println!("  {:<5} {}{}", kind, req.reference, headers);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    #[test]
    fn describe_runs_without_error() {
        super::run().unwrap();
    }
}
