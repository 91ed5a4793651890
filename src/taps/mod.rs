pub mod fixed_rate;
pub mod flow_rate;

pub use fixed_rate::{fill_time, fill_time_with_walk};
pub use flow_rate::fill_time_with_flow_rates;

/// Elapsed time in seconds
pub type Seconds = f64;

/// Bottle capacity in milliliters
pub type Milliliters = i64;

/// Flow rate of the taps which do not have their own (ml per second)
pub const DEFAULT_FLOW_RATE: i64 = 100;

#[derive(Debug, Clone, PartialEq, Fail)]
#[fail(display = "{}", reason)]
pub struct InvalidInput {
    pub reason: String,
}

impl InvalidInput {
    pub fn new<S: Into<String>>(reason: S) -> InvalidInput {
        InvalidInput {
            reason: reason.into(),
        }
    }
}

fn validate_queue(queue: &[Milliliters]) -> Result<(), InvalidInput> {
    if let Some(size) = queue.iter().find(|size| **size < 0) {
        return Err(InvalidInput::new(format!(
            "bottle size {} is not a non-negative integer",
            size
        )));
    }

    trace!("queue of {} bottles is valid", queue.len());

    Ok(())
}

fn validate_taps(taps: i64) -> Result<(), InvalidInput> {
    if taps <= 0 {
        return Err(InvalidInput::new(format!(
            "number of taps {} is not a positive integer",
            taps
        )));
    }

    Ok(())
}

/// Anything which is able to tell how long it takes for the whole queue to fill up
pub trait FillTimeModel {
    fn total_time(&self, queue: &[Milliliters]) -> Result<Seconds, InvalidInput>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct FixedRate {
    pub taps: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FixedRateWithWalk {
    pub taps: i64,
    pub walk_time: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariableFlowRate {
    pub flow_rates: Vec<i64>,
}

impl FillTimeModel for FixedRate {
    fn total_time(&self, queue: &[Milliliters]) -> Result<Seconds, InvalidInput> {
        fill_time(queue, self.taps)
    }
}

impl FillTimeModel for FixedRateWithWalk {
    fn total_time(&self, queue: &[Milliliters]) -> Result<Seconds, InvalidInput> {
        fill_time_with_walk(queue, self.taps, self.walk_time)
    }
}

impl FillTimeModel for VariableFlowRate {
    fn total_time(&self, queue: &[Milliliters]) -> Result<Seconds, InvalidInput> {
        fill_time_with_flow_rates(queue, &self.flow_rates)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Model {
    FixedRate(FixedRate),
    FixedRateWithWalk(FixedRateWithWalk),
    VariableFlowRate(VariableFlowRate),
}

impl Into<Model> for FixedRate {
    fn into(self) -> Model {
        Model::FixedRate(self)
    }
}

impl Into<Model> for FixedRateWithWalk {
    fn into(self) -> Model {
        Model::FixedRateWithWalk(self)
    }
}

impl Into<Model> for VariableFlowRate {
    fn into(self) -> Model {
        Model::VariableFlowRate(self)
    }
}

impl FillTimeModel for Model {
    fn total_time(&self, queue: &[Milliliters]) -> Result<Seconds, InvalidInput> {
        match self {
            Model::FixedRate(model) => model.total_time(queue),
            Model::FixedRateWithWalk(model) => model.total_time(queue),
            Model::VariableFlowRate(model) => model.total_time(queue),
        }
    }
}
