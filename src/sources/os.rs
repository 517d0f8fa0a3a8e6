//! Operating-system locale and keyboard evidence

#[cfg(unix)]
use std::process::Command;

/// Primary locale code from the environment, checked in precedence order:
/// `LC_ALL`, `LC_MESSAGES`, `LANG`, `LANGUAGE`.
#[cfg(unix)]
pub fn primary_locale() -> Option<String> {
    for var in ["LC_ALL", "LC_MESSAGES", "LANG", "LANGUAGE"] {
        if let Ok(value) = std::env::var(var) {
            if !value.is_empty() {
                return Some(value);
            }
        }
    }
    None
}

/// Locales installed on the system, from `locale -a`. Empty when the
/// command is unavailable or fails.
#[cfg(unix)]
pub fn installed_locales() -> Vec<String> {
    run_command("locale", &["-a"])
        .map(|out| out.lines().map(str::to_string).collect())
        .unwrap_or_default()
}

/// Active keyboard layout labels from `setxkbmap -query` (the `layout:`
/// line, comma-separated). Empty when X is not running or the tool is
/// missing.
#[cfg(unix)]
pub fn keyboard_layouts() -> Vec<String> {
    let Some(out) = run_command("setxkbmap", &["-query"]) else {
        return Vec::new();
    };
    for line in out.lines() {
        if let Some(value) = line.strip_prefix("layout:") {
            return value
                .split(',')
                .map(|layout| layout.trim().to_string())
                .filter(|layout| !layout.is_empty())
                .collect();
        }
    }
    Vec::new()
}

#[cfg(unix)]
fn run_command(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        tracing::debug!(program, "command exited non-zero, ignoring");
        return None;
    }
    let text = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!text.is_empty()).then_some(text)
}

/// Default UI language as a BCP-47 locale name (e.g. `en-US`).
#[cfg(target_os = "windows")]
pub fn primary_locale() -> Option<String> {
    use windows_sys::Win32::Globalization::{GetUserDefaultUILanguage, LCIDToLocaleName};

    // LOCALE_NAME_MAX_LENGTH
    let mut buf = [0u16; 85];
    let len = unsafe {
        let lang_id = GetUserDefaultUILanguage();
        LCIDToLocaleName(lang_id as u32, buf.as_mut_ptr(), buf.len() as i32, 0)
    };
    if len <= 1 {
        return None;
    }
    Some(String::from_utf16_lossy(&buf[..(len - 1) as usize]))
}

/// The UI language is the only installed-locale signal Windows exposes
/// cheaply; richer enumeration would need the locale EnumSystemLocalesEx
/// callback dance.
#[cfg(target_os = "windows")]
pub fn installed_locales() -> Vec<String> {
    primary_locale().into_iter().collect()
}

/// Installed keyboard layout names from the registry
/// (`HKLM\SYSTEM\CurrentControlSet\Control\Keyboard Layouts`, one subkey
/// per layout with a `Layout Text` value).
#[cfg(target_os = "windows")]
pub fn keyboard_layouts() -> Vec<String> {
    use super::registry::{Key, HKEY_LOCAL_MACHINE};

    let Some(key) = Key::open(
        HKEY_LOCAL_MACHINE,
        r"SYSTEM\CurrentControlSet\Control\Keyboard Layouts",
    ) else {
        return Vec::new();
    };
    key.subkeys()
        .into_iter()
        .filter_map(|layout_id| {
            key.open_subkey(&layout_id)
                .and_then(|sub| sub.string_value("Layout Text"))
        })
        .collect()
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_run_command_missing_program_is_none() {
        assert!(run_command("linguaprint-no-such-binary", &[]).is_none());
    }

    #[test]
    fn test_run_command_captures_stdout() {
        let out = run_command("echo", &["hello"]).expect("echo runs");
        assert_eq!(out, "hello");
    }
}
