// src/config/defaults.rs
use crate::config::app::{Api, Keys};
use crate::consts::{DEFAULT_API_BASE_URL, DEFAULT_PRIVATE_KEY_PATH};

pub fn default_api() -> Api {
    Api {
        base_url: DEFAULT_API_BASE_URL.into(),
    }
}

pub fn default_keys() -> Keys {
    Keys {
        public_key_pem: None,
        private_key_path: DEFAULT_PRIVATE_KEY_PATH.into(),
    }
}
