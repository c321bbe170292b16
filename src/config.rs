use anyhow::{Context, Result};
use std::env;

use crate::weather::{RandomSource, WeatherSampler};

const RNG_SEED_ENV: &str = "WEATHER_RNG_SEED";

#[derive(Debug, Clone, Default)]
pub struct BotConfig {
    pub rng_seed: Option<u64>,
}

impl BotConfig {
    pub fn from_env() -> Result<Self> {
        let rng_seed = match env::var(RNG_SEED_ENV) {
            Ok(raw) => Some(parse_seed(&raw)?),
            Err(_) => None,
        };

        Ok(Self { rng_seed })
    }

    pub fn sampler(&self) -> WeatherSampler {
        match self.rng_seed {
            Some(seed) => {
                log::info!("🎲 Using seeded weather sampler ({})", seed);
                WeatherSampler::new(RandomSource::seeded(seed))
            }
            None => WeatherSampler::new(RandomSource::from_entropy()),
        }
    }
}

fn parse_seed(raw: &str) -> Result<u64> {
    raw.trim()
        .parse()
        .with_context(|| format!("{} must be an unsigned integer, got {:?}", RNG_SEED_ENV, raw))
}
