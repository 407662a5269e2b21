// File: src/config.rs
// Purpose: Configuration parsing from order-form.toml

use crate::context::OrderContext;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OrderFormConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub form: FormConfig,

    #[serde(default)]
    pub cart: CartConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

/// Form rendering and navigation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormConfig {
    /// Label of the submit button (default: "ORDER")
    #[serde(default = "default_submit_label")]
    pub submit_label: String,

    /// Where to go after an accepted order (default: "/")
    #[serde(default = "default_home_route")]
    pub home_route: String,

    /// Prefix of the per-field change endpoint (default: "/field")
    #[serde(default = "default_field_endpoint")]
    pub field_endpoint: String,

    /// Order submission endpoint (default: "/order")
    #[serde(default = "default_submit_endpoint")]
    pub submit_endpoint: String,
}

/// Cart served as the order context when nothing upstream provides one
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CartConfig {
    #[serde(default)]
    pub ingredients: BTreeMap<String, u32>,

    #[serde(default)]
    pub price: f64,
}

impl CartConfig {
    pub fn to_context(&self) -> OrderContext {
        OrderContext::new(self.ingredients.clone(), self.price)
    }
}

// Default values
fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_submit_label() -> String {
    "ORDER".to_string()
}

fn default_home_route() -> String {
    "/".to_string()
}

fn default_field_endpoint() -> String {
    "/field".to_string()
}

fn default_submit_endpoint() -> String {
    "/order".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            submit_label: default_submit_label(),
            home_route: default_home_route(),
            field_endpoint: default_field_endpoint(),
            submit_endpoint: default_submit_endpoint(),
        }
    }
}

impl OrderFormConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Missing file means defaults
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: OrderFormConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from default path (./order-form.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("order-form.toml")
    }
}
