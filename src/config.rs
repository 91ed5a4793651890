use crate::taps::{
    FixedRate, FixedRateWithWalk, InvalidInput, Milliliters, Model, VariableFlowRate,
    DEFAULT_FLOW_RATE,
};
use failure::Error;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs::File;
use std::path::Path;

/// Values are kept as they came in the scenario file, so that a fractional number or a
/// string is reported as invalid input instead of failing the whole parse
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "type", content = "data")]
pub enum ModelConfig {
    FixedRate { taps: Value },
    FixedRateWithWalk { taps: Value, walk_time: Value },
    VariableFlowRate { flow_rates: Vec<Value> },
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ScenarioConfig {
    pub queue: Vec<Value>, // Bottle sizes in ml, front of the queue first
    pub models: Vec<ModelConfig>,
}

fn integer(field: &str, value: &Value) -> Result<i64, InvalidInput> {
    value
        .as_i64()
        .ok_or_else(|| InvalidInput::new(format!("{} {} is not an integer", field, value)))
}

fn integers(field: &str, values: &[Value]) -> Result<Vec<i64>, InvalidInput> {
    values.iter().map(|value| integer(field, value)).collect()
}

impl ModelConfig {
    pub fn label(&self) -> &'static str {
        match self {
            ModelConfig::FixedRate { .. } => "without walking time",
            ModelConfig::FixedRateWithWalk { .. } => "with walking time",
            ModelConfig::VariableFlowRate { .. } => "with different flow rates",
        }
    }

    pub fn to_model(&self) -> Result<Model, InvalidInput> {
        let model: Model = match self {
            ModelConfig::FixedRate { taps } => FixedRate {
                taps: integer("number of taps", taps)?,
            }
            .into(),
            ModelConfig::FixedRateWithWalk { taps, walk_time } => FixedRateWithWalk {
                taps: integer("number of taps", taps)?,
                walk_time: integer("walk time", walk_time)?,
            }
            .into(),
            ModelConfig::VariableFlowRate { flow_rates } => VariableFlowRate {
                flow_rates: integers("flow rate", flow_rates)?,
            }
            .into(),
        };

        Ok(model)
    }
}

impl ScenarioConfig {
    pub fn queue(&self) -> Result<Vec<Milliliters>, InvalidInput> {
        integers("bottle size", &self.queue)
    }
}

/// Three people with one tap, everybody walks to it for 2 seconds
impl Default for ScenarioConfig {
    fn default() -> ScenarioConfig {
        ScenarioConfig {
            queue: vec![400.into(), 750.into(), 1000.into()],
            models: vec![
                ModelConfig::FixedRate { taps: 1.into() },
                ModelConfig::FixedRateWithWalk {
                    taps: 1.into(),
                    walk_time: 2.into(),
                },
                ModelConfig::VariableFlowRate {
                    flow_rates: vec![DEFAULT_FLOW_RATE.into()],
                },
            ],
        }
    }
}

pub fn get_config<P: AsRef<Path>>(path: P) -> Result<ScenarioConfig, Error> {
    let file = File::open(path)?;

    let config = serde_json::from_reader(file)?;

    Ok(config)
}
