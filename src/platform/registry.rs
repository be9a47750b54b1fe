//! Registry-backed settings store
//!
//! Values live as `REG_DWORD`s under `HKEY_CURRENT_USER\<namespace>`. Every
//! read and write opens its own key handle and closes it through `KeyGuard`
//! on every exit path.

use super::windows::to_wide;
use crate::config::StoreConfig;
use crate::store::{SettingsStore, StoreError};
use windows::Win32::Foundation::{ERROR_FILE_NOT_FOUND, ERROR_MORE_DATA, ERROR_SUCCESS};
use windows::Win32::System::Registry::{
    HKEY, HKEY_CURRENT_USER, KEY_READ, KEY_WRITE, REG_DWORD, REG_NONE, REG_OPTION_NON_VOLATILE,
    RegCloseKey, RegCreateKeyExW, RegOpenKeyExW, RegQueryValueExW, RegSetValueExW,
};
use windows::core::PCWSTR;

/// Closes a registry key handle when dropped
struct KeyGuard(HKEY);

impl Drop for KeyGuard {
    fn drop(&mut self) {
        unsafe {
            let _ = RegCloseKey(self.0);
        }
    }
}

/// Settings store over a per-user registry key
#[derive(Debug, Clone)]
pub struct RegistryStore {
    namespace: String,
    namespace_wide: Vec<u16>,
}

impl RegistryStore {
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            namespace: config.namespace.clone(),
            namespace_wide: to_wide(&config.namespace),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Opens the namespace for reading. `Ok(None)` if it doesn't exist yet.
    fn open_for_read(&self) -> Result<Option<KeyGuard>, StoreError> {
        let mut key = HKEY::default();
        let status = unsafe {
            RegOpenKeyExW(
                HKEY_CURRENT_USER,
                PCWSTR(self.namespace_wide.as_ptr()),
                0,
                KEY_READ,
                &mut key,
            )
        };

        if status == ERROR_FILE_NOT_FOUND {
            return Ok(None);
        }
        if status != ERROR_SUCCESS {
            return Err(StoreError::Open {
                namespace: self.namespace.clone(),
                code: status.0,
            });
        }
        Ok(Some(KeyGuard(key)))
    }

    /// Opens the namespace for writing, creating it if needed
    fn open_or_create_for_write(&self) -> Result<KeyGuard, StoreError> {
        let mut key = HKEY::default();
        let status = unsafe {
            RegCreateKeyExW(
                HKEY_CURRENT_USER,
                PCWSTR(self.namespace_wide.as_ptr()),
                0,
                PCWSTR::null(),
                REG_OPTION_NON_VOLATILE,
                KEY_WRITE,
                None,
                &mut key,
                None,
            )
        };

        if status != ERROR_SUCCESS {
            return Err(StoreError::Open {
                namespace: self.namespace.clone(),
                code: status.0,
            });
        }
        Ok(KeyGuard(key))
    }
}

impl SettingsStore for RegistryStore {
    /// Only `REG_DWORD` values are accepted; any other type, even 4 bytes
    /// long, is reported as `StoreError::TypeMismatch`.
    fn read_u32(&self, name: &str) -> Result<Option<u32>, StoreError> {
        let Some(key) = self.open_for_read()? else {
            return Ok(None);
        };

        let name_wide = to_wide(name);
        let mut value: u32 = 0;
        let mut size = std::mem::size_of::<u32>() as u32;
        let mut kind = REG_NONE;

        let status = unsafe {
            RegQueryValueExW(
                key.0,
                PCWSTR(name_wide.as_ptr()),
                None,
                Some(&mut kind as *mut _),
                Some(&mut value as *mut u32 as *mut u8),
                Some(&mut size as *mut u32),
            )
        };

        if status == ERROR_FILE_NOT_FOUND {
            return Ok(None);
        }
        if status == ERROR_MORE_DATA || (status == ERROR_SUCCESS && kind != REG_DWORD) {
            return Err(StoreError::TypeMismatch {
                name: name.to_string(),
            });
        }
        if status != ERROR_SUCCESS {
            return Err(StoreError::Read {
                name: name.to_string(),
                code: status.0,
            });
        }
        Ok(Some(value))
    }

    fn write_u32(&self, name: &str, value: u32) -> Result<(), StoreError> {
        let key = self.open_or_create_for_write()?;
        let name_wide = to_wide(name);
        let bytes = value.to_le_bytes();

        let status = unsafe {
            RegSetValueExW(
                key.0,
                PCWSTR(name_wide.as_ptr()),
                0,
                REG_DWORD,
                Some(bytes.as_slice()),
            )
        };

        if status != ERROR_SUCCESS {
            return Err(StoreError::Write {
                name: name.to_string(),
                code: status.0,
            });
        }
        Ok(())
    }
}
