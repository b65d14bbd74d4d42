use crate::slot::{Axis, SlotSpec};

/// Resolved boundaries for one slot along an axis, plus the padding that
/// slot contributes to cells it bounds (slot override folded over the grid
/// default, before any per-placement override).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Band {
    pub start: i32,
    pub end: i32,
    pub pad_start: i32,
    pub pad_end: i32,
}

impl Band {
    pub fn length(&self) -> i32 {
        self.end - self.start
    }
}

/// Resolve slot lengths for one axis.
///
/// Fixed slots take their length first; flex slots split what remains by
/// weight. When fixed demands exceed `total`, fixed slots scale down
/// proportionally and flex slots collapse to zero. Real-valued shares are
/// floored to whole pixels and the leftover units handed out one at a time
/// in slot order, so the result sums exactly to the distributed space.
///
/// Specs are validated when configured; this function assumes weights are
/// finite and positive and fixed lengths non-negative.
pub fn resolve_lengths(total: i32, specs: &[SlotSpec]) -> Vec<i32> {
    if specs.is_empty() {
        return Vec::new();
    }

    let budget = f64::from(total.max(0));
    let fixed_sum: f64 = specs
        .iter()
        .filter_map(|spec| spec.fixed_length())
        .map(f64::from)
        .sum();
    let weight_sum: f64 = specs.iter().map(|spec| spec.weight()).sum();

    if fixed_sum > budget {
        // Space-starved: scale fixed slots to fit, flex slots get nothing.
        let scale = budget / fixed_sum;
        let shares: Vec<f64> = specs
            .iter()
            .map(|spec| match spec.fixed_length() {
                Some(length) => f64::from(length) * scale,
                None => 0.0,
            })
            .collect();
        let eligible: Vec<bool> = specs
            .iter()
            .map(|spec| spec.fixed_length().is_some())
            .collect();
        return settle(&shares, total.max(0), &eligible);
    }

    let remaining = budget - fixed_sum;
    let shares: Vec<f64> = specs
        .iter()
        .map(|spec| match spec.fixed_length() {
            Some(length) => f64::from(length),
            None if weight_sum > 0.0 => remaining * spec.weight() / weight_sum,
            None => 0.0,
        })
        .collect();

    if weight_sum > 0.0 {
        let eligible: Vec<bool> = specs
            .iter()
            .map(|spec| spec.fixed_length().is_none())
            .collect();
        settle(&shares, total.max(0), &eligible)
    } else {
        // No flex slots: leftover space stays an unassigned trailing gap.
        shares.iter().map(|share| *share as i32).collect()
    }
}

/// Floor every share, then hand the leftover whole pixels to the eligible
/// slots one unit at a time in index order.
fn settle(shares: &[f64], target: i32, eligible: &[bool]) -> Vec<i32> {
    let mut lengths: Vec<i32> = shares.iter().map(|share| share.floor() as i32).collect();
    let assigned: i32 = lengths.iter().sum();
    let mut leftover = (target - assigned).max(0);

    while leftover > 0 {
        let mut changed = false;
        for (idx, length) in lengths.iter_mut().enumerate() {
            if !eligible[idx] {
                continue;
            }
            *length += 1;
            leftover -= 1;
            changed = true;
            if leftover == 0 {
                break;
            }
        }
        if !changed {
            break;
        }
    }

    lengths
}

/// Lay one axis out: carve the offsets and inter-slot gaps from `total`,
/// resolve slot lengths over what is left, and walk the boundaries
/// start-to-end. When the offsets and gaps already overrun `total`, the
/// usable space clamps to zero and the gaps collapse with it, so every band
/// sits empty at `offset_start` instead of the pass failing.
pub(crate) fn build_axis(
    axis: &Axis,
    total: i32,
    offset_start: i32,
    offset_end: i32,
    gap: i32,
    default_pad: (i32, i32),
) -> Vec<Band> {
    let count = axis.len();
    let gap_total = gap.saturating_mul(count.saturating_sub(1) as i32);

    let mut usable = total - offset_start - offset_end - gap_total;
    let mut gap = gap;
    if usable < 0 {
        usable = 0;
        gap = 0;
    }

    let specs: Vec<SlotSpec> = axis.slots().iter().map(|slot| slot.spec).collect();
    let lengths = resolve_lengths(usable, &specs);

    let mut bands = Vec::with_capacity(count);
    let mut cursor = offset_start;
    for (slot, length) in axis.slots().iter().zip(lengths) {
        let band = Band {
            start: cursor,
            end: cursor + length,
            pad_start: slot.padding.start.unwrap_or(default_pad.0),
            pad_end: slot.padding.end.unwrap_or(default_pad.1),
        };
        cursor = band.end + gap;
        bands.push(band);
    }
    bands
}
