use crate::taps::{validate_queue, InvalidInput, Milliliters, Seconds};
use std::collections::vec_deque::VecDeque;

fn validate_flow_rates(flow_rates: &[i64]) -> Result<(), InvalidInput> {
    if flow_rates.is_empty() {
        return Err(InvalidInput::new("there has to be at least one tap"));
    }

    if let Some((tap, rate)) = flow_rates.iter().enumerate().find(|(_, rate)| **rate <= 0) {
        return Err(InvalidInput::new(format!(
            "flow rate {} of tap {} is not a positive integer",
            rate, tap
        )));
    }

    Ok(())
}

/// Picks the tap with the lowest `rate * waiting`, the first one on a tie.
/// `flow_rates` has to be non-empty.
fn select_tap(flow_rates: &[i64], waiting: usize) -> usize {
    flow_rates
        .iter()
        .enumerate()
        .min_by_key(|(_, rate)| **rate as i128 * waiting as i128)
        .map(|(tap, _)| tap)
        .unwrap_or(0)
}

/// People come in pairs: the first of them always goes to the first tap, the second
/// one to the tap picked by `select_tap`.
pub fn fill_time_with_flow_rates(
    queue: &[Milliliters],
    flow_rates: &[i64],
) -> Result<Seconds, InvalidInput> {
    validate_queue(queue)?;
    validate_flow_rates(flow_rates)?;

    let mut queue: VecDeque<Milliliters> = queue.iter().cloned().collect();
    let mut total_time: Seconds = 0.0;

    while let Some(size) = queue.pop_front() {
        total_time += size as Seconds / flow_rates[0] as Seconds;

        debug!("bottle of {} ml filled at tap 0, at {}s", size, total_time);

        if queue.is_empty() {
            continue;
        }

        let tap = select_tap(flow_rates, queue.len());

        if let Some(size) = queue.pop_front() {
            total_time += size as Seconds / flow_rates[tap] as Seconds;

            debug!("bottle of {} ml filled at tap {}, at {}s", size, tap, total_time);
        }
    }

    Ok(total_time)
}
