use std::env;

use anyhow::{anyhow, Context};

use crate::adapters::IdAssignment;

#[derive(Debug, Clone)]
pub struct Config {
    /// Port to listen on (all interfaces)
    pub port: u16,
    /// How the quote store assigns ids to new quotes
    pub id_assignment: IdAssignment,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_vars(env::var("PORT").ok(), env::var("QUOTE_ID_ASSIGNMENT").ok())
    }

    fn from_vars(port: Option<String>, id_assignment: Option<String>) -> anyhow::Result<Self> {
        let port = match port {
            Some(p) => p
                .parse::<u16>()
                .with_context(|| format!("PORT must be a valid port number, got '{}'", p))?,
            None => 8080,
        };

        let id_assignment = match id_assignment {
            Some(s) => s
                .parse::<IdAssignment>()
                .map_err(|e: String| anyhow!(e))
                .context("QUOTE_ID_ASSIGNMENT must be 'sequential' or 'live-count'")?,
            None => IdAssignment::default(),
        };

        Ok(Self {
            port,
            id_assignment,
        })
    }
}
