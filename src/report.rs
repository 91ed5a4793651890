use crate::config::ScenarioConfig;
use crate::taps::{FillTimeModel, InvalidInput, Seconds};
use colored::Colorize;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Total {
    Seconds(Seconds),
    Error(String),
}

impl From<Result<Seconds, InvalidInput>> for Total {
    fn from(result: Result<Seconds, InvalidInput>) -> Total {
        match result {
            Ok(seconds) => Total::Seconds(seconds),
            Err(error) => Total::Error(error.to_string()),
        }
    }
}

#[derive(Debug, Serialize, PartialEq)]
pub struct Outcome {
    pub label: String,
    #[serde(flatten)]
    pub total: Total,
}

impl Outcome {
    pub fn line(&self) -> String {
        match &self.total {
            Total::Seconds(seconds) => {
                format!("Total time to fill bottles {}: {} seconds", self.label, seconds)
            }
            Total::Error(error) => format!("Error: {}", error),
        }
    }

    pub fn print(&self) {
        match self.total {
            Total::Seconds(_) => println!("{}", self.line().bold()),
            Total::Error(_) => println!("{}", self.line().red()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Report {
    pub queue: Vec<Value>,
    pub outcomes: Vec<Outcome>,
}

/// Every model of the scenario is run on its own copy of the queue, a model failing
/// does not stop the ones after it
pub fn run_scenario(config: &ScenarioConfig) -> Report {
    let queue = config.queue();

    let outcomes = config
        .models
        .iter()
        .map(|model_config| {
            let result = match (&queue, model_config.to_model()) {
                (Err(error), _) => Err(error.clone()),
                (Ok(_), Err(error)) => Err(error),
                (Ok(queue), Ok(model)) => model.total_time(queue),
            };

            if let Err(error) = &result {
                info!("{:?} failed: {}", model_config, error);
            }

            Outcome {
                label: model_config.label().to_string(),
                total: result.into(),
            }
        })
        .collect();

    Report {
        queue: config.queue.clone(),
        outcomes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ModelConfig;

    #[test]
    fn demonstration_prints_three_totals() {
        let report = run_scenario(&ScenarioConfig::default());

        let lines: Vec<String> = report.outcomes.iter().map(Outcome::line).collect();

        assert_eq!(
            lines,
            vec![
                "Total time to fill bottles without walking time: 21.5 seconds",
                "Total time to fill bottles with walking time: 27.5 seconds",
                "Total time to fill bottles with different flow rates: 21.5 seconds",
            ]
        );
    }

    #[test]
    fn integral_seconds_have_no_decimal_point() {
        let report = run_scenario(&ScenarioConfig {
            queue: vec![150.into(), 250.into()],
            models: vec![ModelConfig::FixedRate { taps: 1.into() }],
        });

        assert_eq!(
            report.outcomes[0].line(),
            "Total time to fill bottles without walking time: 4 seconds"
        );
    }

    #[test]
    fn failing_model_does_not_stop_the_others() {
        let report = run_scenario(&ScenarioConfig {
            queue: vec![400.into(), 750.into(), 1000.into()],
            models: vec![
                ModelConfig::FixedRateWithWalk {
                    taps: 1.into(),
                    walk_time: (-2).into(),
                },
                ModelConfig::FixedRate { taps: 1.into() },
            ],
        });

        assert_eq!(
            report.outcomes[0].line(),
            "Error: walk time -2 must be a non-negative integer"
        );
        assert_eq!(report.outcomes[1].total, Total::Seconds(21.5));
    }

    #[test]
    fn invalid_queue_fails_every_model() {
        let report = run_scenario(&ScenarioConfig {
            queue: vec![400.into(), (-1).into()],
            models: vec![
                ModelConfig::FixedRate { taps: 1.into() },
                ModelConfig::VariableFlowRate {
                    flow_rates: vec![100.into()],
                },
            ],
        });

        let totals: Vec<&Total> = report.outcomes.iter().map(|outcome| &outcome.total).collect();
        let error = Total::Error("bottle size -1 is not a non-negative integer".to_string());

        assert_eq!(totals, vec![&error, &error]);
    }

    #[test]
    fn string_bottle_size_is_reported_for_every_model() {
        let config: ScenarioConfig = serde_json::from_str(
            r#"{
                "queue": ["400", 750],
                "models": [
                    { "type": "FixedRate", "data": { "taps": 1 } },
                    { "type": "VariableFlowRate", "data": { "flow_rates": [100] } }
                ]
            }"#,
        )
        .unwrap();

        let lines: Vec<String> = run_scenario(&config).outcomes.iter().map(Outcome::line).collect();

        assert_eq!(
            lines,
            vec![
                r#"Error: bottle size "400" is not an integer"#,
                r#"Error: bottle size "400" is not an integer"#,
            ]
        );
    }

    #[test]
    fn busy_fountain_scenario() {
        let config = crate::config::get_config(format!(
            "{}/scenarios/busy_fountain.json",
            env!("CARGO_MANIFEST_DIR")
        ))
        .unwrap();

        let totals: Vec<Total> = run_scenario(&config)
            .outcomes
            .into_iter()
            .map(|outcome| outcome.total)
            .collect();

        assert_eq!(
            totals,
            vec![
                Total::Seconds(24.5),
                Total::Seconds(30.5),
                Total::Seconds(22.5)
            ]
        );
    }

    #[test]
    fn report_serializes_to_json() {
        let report = run_scenario(&ScenarioConfig {
            queue: vec![200.into()],
            models: vec![
                ModelConfig::FixedRate { taps: 2.into() },
                ModelConfig::FixedRate { taps: 0.into() },
            ],
        });

        assert_eq!(
            serde_json::to_string(&report).unwrap(),
            concat!(
                r#"{"queue":[200],"outcomes":["#,
                r#"{"label":"without walking time","seconds":2.0},"#,
                r#"{"label":"without walking time","#,
                r#""error":"number of taps 0 is not a positive integer"}]}"#
            )
        );
    }
}
