//! Minimal Win32 registry wrapper
//!
//! Just enough safe surface for the keyboard-layout and Internet Explorer
//! readers: open a key read-only, enumerate subkey names, enumerate or
//! read REG_SZ values. Handles close on drop.

use std::ptr;
use windows_sys::Win32::Foundation::{ERROR_NO_MORE_ITEMS, ERROR_SUCCESS};
use windows_sys::Win32::System::Registry::{
    RegCloseKey, RegEnumKeyExW, RegEnumValueW, RegOpenKeyExW, RegQueryValueExW, HKEY, KEY_READ,
    REG_SZ,
};

pub use windows_sys::Win32::System::Registry::{HKEY_CURRENT_USER, HKEY_LOCAL_MACHINE};

const MAX_NAME: usize = 256;
const MAX_DATA: usize = 4096;

/// An open registry key, closed on drop.
pub struct Key {
    handle: HKEY,
}

impl Key {
    /// Open `path` under `root` with read access. `None` when the key does
    /// not exist or access is denied (an absent key is an absent source).
    pub fn open(root: HKEY, path: &str) -> Option<Key> {
        let wide = to_wide(path);
        let mut handle: HKEY = ptr::null_mut();
        let status = unsafe { RegOpenKeyExW(root, wide.as_ptr(), 0, KEY_READ, &mut handle) };
        (status == ERROR_SUCCESS).then_some(Key { handle })
    }

    /// Open a child key of this key.
    pub fn open_subkey(&self, name: &str) -> Option<Key> {
        Self::open(self.handle, name)
    }

    /// Names of all direct subkeys.
    pub fn subkeys(&self) -> Vec<String> {
        let mut names = Vec::new();
        let mut index = 0u32;
        loop {
            let mut name = [0u16; MAX_NAME];
            let mut len = name.len() as u32;
            let status = unsafe {
                RegEnumKeyExW(
                    self.handle,
                    index,
                    name.as_mut_ptr(),
                    &mut len,
                    ptr::null(),
                    ptr::null_mut(),
                    ptr::null_mut(),
                    ptr::null_mut(),
                )
            };
            if status == ERROR_NO_MORE_ITEMS {
                break;
            }
            if status != ERROR_SUCCESS {
                break;
            }
            names.push(String::from_utf16_lossy(&name[..len as usize]));
            index += 1;
        }
        names
    }

    /// A named REG_SZ value of this key.
    pub fn string_value(&self, name: &str) -> Option<String> {
        let wide = to_wide(name);
        let mut kind = 0u32;
        let mut data = [0u8; MAX_DATA];
        let mut size = data.len() as u32;
        let status = unsafe {
            RegQueryValueExW(
                self.handle,
                wide.as_ptr(),
                ptr::null(),
                &mut kind,
                data.as_mut_ptr(),
                &mut size,
            )
        };
        if status != ERROR_SUCCESS || kind != REG_SZ {
            return None;
        }
        Some(utf16_data_to_string(&data[..size as usize]))
    }

    /// All REG_SZ values of this key as (name, value) pairs.
    pub fn string_values(&self) -> Vec<(String, String)> {
        let mut values = Vec::new();
        let mut index = 0u32;
        loop {
            let mut name = [0u16; MAX_NAME];
            let mut name_len = name.len() as u32;
            let mut kind = 0u32;
            let mut data = [0u8; MAX_DATA];
            let mut size = data.len() as u32;
            let status = unsafe {
                RegEnumValueW(
                    self.handle,
                    index,
                    name.as_mut_ptr(),
                    &mut name_len,
                    ptr::null(),
                    &mut kind,
                    data.as_mut_ptr(),
                    &mut size,
                )
            };
            if status == ERROR_NO_MORE_ITEMS {
                break;
            }
            if status != ERROR_SUCCESS {
                break;
            }
            if kind == REG_SZ {
                values.push((
                    String::from_utf16_lossy(&name[..name_len as usize]),
                    utf16_data_to_string(&data[..size as usize]),
                ));
            }
            index += 1;
        }
        values
    }
}

impl Drop for Key {
    fn drop(&mut self) {
        unsafe {
            RegCloseKey(self.handle);
        }
    }
}

fn to_wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}

/// Decode REG_SZ bytes (UTF-16LE, possibly NUL-terminated) to a String.
fn utf16_data_to_string(data: &[u8]) -> String {
    let wide: Vec<u16> = data
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .take_while(|&c| c != 0)
        .collect();
    String::from_utf16_lossy(&wide)
}
