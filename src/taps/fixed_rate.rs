use crate::taps::{
    validate_queue, validate_taps, InvalidInput, Milliliters, Seconds, DEFAULT_FLOW_RATE,
};
use std::cmp::min;
use std::collections::vec_deque::VecDeque;

/// Every person walks up to a free tap alone, and while there are still free taps the
/// people right behind them fill up together. Such a batch takes as long as its biggest
/// bottle. A tap once taken is never released.
fn drain_queue(queue: &[Milliliters], taps: i64, walk_time: i64) -> Seconds {
    let mut queue: VecDeque<Milliliters> = queue.iter().cloned().collect();
    let mut free_taps = taps;
    let mut total_time: Seconds = 0.0;

    while let Some(size) = queue.pop_front() {
        total_time += walk_time as Seconds;
        total_time += size as Seconds / DEFAULT_FLOW_RATE as Seconds;
        free_taps -= 1;

        debug!(
            "bottle of {} ml filled alone, {} taps left, at {}s",
            size, free_taps, total_time
        );

        if !queue.is_empty() && free_taps > 0 {
            let fillings = min(queue.len(), free_taps as usize);
            let slowest = queue.drain(..fillings).max().unwrap_or(0);

            total_time += slowest as Seconds / DEFAULT_FLOW_RATE as Seconds;

            debug!(
                "{} bottles filled together, slowest {} ml, at {}s",
                fillings, slowest, total_time
            );
        }
    }

    total_time
}

pub fn fill_time(queue: &[Milliliters], taps: i64) -> Result<Seconds, InvalidInput> {
    validate_queue(queue)?;
    validate_taps(taps)?;

    Ok(drain_queue(queue, taps, 0))
}

/// Same as `fill_time`, only everyone coming to the tap alone has to walk there first
pub fn fill_time_with_walk(
    queue: &[Milliliters],
    taps: i64,
    walk_time: i64,
) -> Result<Seconds, InvalidInput> {
    validate_queue(queue)?;
    validate_taps(taps)?;

    if walk_time < 0 {
        return Err(InvalidInput::new(format!(
            "walk time {} must be a non-negative integer",
            walk_time
        )));
    }

    Ok(drain_queue(queue, taps, walk_time))
}
