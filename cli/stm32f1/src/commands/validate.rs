//! `stm32f1 validate` — check settings before a build.

use anyhow::{Context, Result};

use stm32f1_recipe::{validate, BuildProfile};

pub fn run(profile: &BuildProfile) -> Result<()> {
    validate(&profile.settings).context("invalid settings for libhal-stm32f1")?;

    let env = profile.target_environment();
    match env.owned_platform() {
        Some(platform) => println!("ok: bare-metal build for {platform}"),
        None => println!("ok: settings are valid (no stm32f1 linker configuration)"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_profile() {
        let profile = BuildProfile::parse(
            "[settings]\nos = \"baremetal\"\n\n[settings.compiler]\nname = \"gcc\"\ncppstd = \"20\"\n",
        )
        .unwrap();
        assert!(run(&profile).is_ok());
    }

    #[test]
    fn old_cppstd_fails() {
        let profile =
            BuildProfile::parse("[settings.compiler]\nname = \"gcc\"\ncppstd = \"17\"\n").unwrap();
        let err = run(&profile).unwrap_err();
        assert!(format!("{err:#}").contains("at least 20"));
    }
}
