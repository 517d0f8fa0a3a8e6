//! Sources command - report which evidence sources exist on this machine

use anyhow::Result;
use console::style;

pub fn run() -> Result<()> {
    println!("Linguaprint evidence sources ({})\n", std::env::consts::OS);

    println!(
        "{} OS locale: {}",
        mark(crate::sources::os::primary_locale().is_some()),
        crate::sources::os::primary_locale().unwrap_or_else(|| "not set".into())
    );

    let layouts = crate::sources::os::keyboard_layouts();
    println!(
        "{} Keyboard layouts: {}",
        mark(!layouts.is_empty()),
        if layouts.is_empty() {
            "none detected".into()
        } else {
            layouts.join(", ")
        }
    );

    #[cfg(target_os = "linux")]
    {
        check_dir("Firefox profiles", crate::sources::firefox::profiles_root());
        check_dir("Chrome profiles", crate::sources::chrome::profiles_root());
    }
    #[cfg(target_os = "windows")]
    println!("{} Internet Explorer: registry (always probed)", mark(true));

    let steam = crate::sources::steam::config_paths()
        .into_iter()
        .find(|p| p.is_file());
    match steam {
        Some(path) => println!("{} Steam config: {}", mark(true), path.display()),
        None => println!("{} Steam config: not found", mark(false)),
    }

    check_dir("Music folder", crate::sources::music::default_dir());

    Ok(())
}

fn check_dir(label: &str, path: Option<std::path::PathBuf>) {
    match path.as_deref().filter(|p| p.is_dir()) {
        Some(path) => println!("{} {}: {}", mark(true), label, path.display()),
        None => println!("{} {}: not found", mark(false), label),
    }
}

fn mark(present: bool) -> String {
    if present {
        style("[OK]").green().to_string()
    } else {
        style("[--]").dim().to_string()
    }
}
