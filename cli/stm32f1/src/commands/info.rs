//! `stm32f1 info` — package info for a build configuration.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use stm32f1_recipe::{package_info, BuildProfile, PackageInfo, RecipeMetadata};

/// Compute the package info for `profile`.
///
/// `package_folder` overrides the profile's folder; the current directory is
/// used when neither is set.
pub fn compute(profile: &BuildProfile, package_folder: Option<&Path>) -> Result<PackageInfo> {
    let folder: PathBuf = match package_folder.or(profile.package_folder.as_deref()) {
        Some(folder) => folder.to_path_buf(),
        None => std::env::current_dir().context("reading current directory")?,
    };
    tracing::debug!(package_folder = %folder.display(), "computing package info");
    let env = profile.target_environment();
    let info = package_info(&RecipeMetadata::libhal_stm32f1(), &env, &folder)
        .with_context(|| format!("resolving package info for {}", folder.display()))?;
    Ok(info)
}

/// Render package info in the requested format.
pub fn render(info: &PackageInfo, format: &str) -> Result<String> {
    let text = match format {
        "human" => render_human(info),
        "json" => info.to_json()?,
        "toml" => info.to_toml()?,
        "cargo" => info.cargo_directives().join("\n"),
        other => bail!("unknown format: '{other}' (expected human, json, toml or cargo)"),
    };
    Ok(text)
}

fn render_human(info: &PackageInfo) -> String {
    let mut out = String::new();
    out.push_str(&format!("=== Package: {} ===\n", info.name));
    out.push_str(&format!("CMake target: {}\n", info.cmake_target_name));
    out.push_str(&format!("Libraries:    {}\n", info.libs.join(", ")));
    if info.has_linker_configuration() {
        out.push_str("\n--- Executable link flags ---\n");
        for flag in &info.exelinkflags {
            out.push_str(&format!("  {flag}\n"));
        }
        out.push_str("\n--- Build environment ---\n");
        for (key, value) in &info.build_env {
            out.push_str(&format!("  {key}={value}\n"));
        }
    } else {
        out.push_str("\nNo linker configuration (not a bare-metal stm32f1 build).\n");
    }
    out
}

pub fn run(profile: &BuildProfile, package_folder: Option<&Path>, format: &str) -> Result<()> {
    let info = compute(profile, package_folder)?;
    println!("{}", render(&info, format)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_metal(platform: &str) -> BuildProfile {
        let mut profile = BuildProfile::default();
        profile.settings.os = Some("baremetal".into());
        profile.options.set("platform", platform);
        profile
    }

    #[test]
    fn package_folder_argument_wins() {
        let mut profile = bare_metal("stm32f103c8");
        profile.package_folder = Some(PathBuf::from("/from-profile"));
        let info = compute(&profile, Some(Path::new("/pkg"))).unwrap();
        assert_eq!(info.exelinkflags[0], "-L/pkg/linker_scripts");

        let info = compute(&profile, None).unwrap();
        assert_eq!(info.exelinkflags[0], "-L/from-profile/linker_scripts");
    }

    #[test]
    fn render_all_formats() {
        let info = compute(&bare_metal("stm32f103c8"), Some(Path::new("/pkg"))).unwrap();
        assert!(render(&info, "human").unwrap().contains("-Tlibhal-stm32f1/stm32f10xx8.ld"));
        assert!(render(&info, "json").unwrap().contains("\"LIBHAL_PLATFORM\""));
        assert!(render(&info, "toml").unwrap().contains("libhal::stm32f1"));
        assert!(render(&info, "cargo")
            .unwrap()
            .contains("cargo:rustc-link-arg=-L/pkg/linker_scripts"));
        assert!(render(&info, "yaml").is_err());
    }

    #[test]
    fn human_output_without_linker_configuration() {
        let info = compute(&bare_metal("lpc4078"), Some(Path::new("/pkg"))).unwrap();
        assert!(render(&info, "human")
            .unwrap()
            .contains("No linker configuration"));
    }
}
