use anyhow;

use gloo_console::error as console_error;
use gloo_storage::{LocalStorage, Storage, errors::StorageError};

use serde::{Deserialize, Serialize};

fn storage_key(prefix: &str, key: &str) -> String {
    format!("{prefix}_{key}")
}

pub fn set_local_storage<T>(prefix: &str, key: &str, value: T) -> ()
where
    T: Serialize,
{
    let key = storage_key(prefix, key);

    LocalStorage::set(key.clone(), value)
        .unwrap_or_else(|err| console_error!(format!("Failed to set local storage {key}: {err}")))
}

// a key that was never written is not an error, it just means there is no stored value
pub fn get_local_storage<T>(prefix: &str, key: &str) -> anyhow::Result<Option<T>>
where
    T: for<'a> Deserialize<'a>,
{
    let key = storage_key(prefix, key);

    match LocalStorage::get(key.clone()) {
        Ok(value) => Ok(Some(value)),
        Err(StorageError::KeyNotFound(_)) => Ok(None),
        Err(err) => {
            console_error!(format!("Failed to fetch local storage {key}: {err}"));
            Err(anyhow::Error::msg("Local storage failure, see console log"))
        }
    }
}
