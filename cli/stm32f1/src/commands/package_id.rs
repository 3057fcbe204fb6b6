//! `stm32f1 package-id` — binary identity of a build configuration.

use anyhow::Result;

use stm32f1_recipe::{normalize_package_identity, BuildProfile, PackageId, RecipeMetadata};

pub fn run(profile: &BuildProfile) -> Result<()> {
    let metadata = RecipeMetadata::libhal_stm32f1();
    let identity_options = normalize_package_identity(profile.options.clone());
    let id = PackageId::compute(&metadata, &profile.settings, &profile.options)?;

    println!("Package:   {}", metadata.reference());
    println!("Options:");
    if identity_options.is_empty() {
        println!("  (none)");
    }
    for (name, value) in identity_options.iter() {
        println!("  {name}={value}");
    }
    println!("Package id: {id}");
    Ok(())
}
