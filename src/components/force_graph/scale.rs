//! Node size scaling.
//!
//! Nodes with a scaling value get a radius interpolated between two bounds,
//! relative to the smallest and largest values in the current dataset. Nodes
//! without a value stay at the base radius.

pub const MIN_RADIUS: f64 = 5.0;
pub const MAX_RADIUS: f64 = 12.0;

/// Inclusive value range observed across a dataset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueRange {
	pub min: f64,
	pub max: f64,
}

impl ValueRange {
	/// Range of the values present in `values`; `None` when no node carries
	/// a scaling value.
	pub fn of(values: impl IntoIterator<Item = Option<f64>>) -> Option<Self> {
		let mut range: Option<ValueRange> = None;
		for value in values.into_iter().flatten() {
			range = Some(match range {
				None => ValueRange {
					min: value,
					max: value,
				},
				Some(r) => ValueRange {
					min: r.min.min(value),
					max: r.max.max(value),
				},
			});
		}
		range
	}
}

/// Radius for one node given the dataset's value range.
pub fn radius_for(value: Option<f64>, range: Option<ValueRange>) -> f64 {
	match (value, range) {
		(Some(v), Some(r)) if r.max > r.min => {
			let t = ((v - r.min) / (r.max - r.min)).clamp(0.0, 1.0);
			MIN_RADIUS + t * (MAX_RADIUS - MIN_RADIUS)
		}
		// A lone value, or all values equal: sit in the middle of the band.
		(Some(_), Some(_)) => (MIN_RADIUS + MAX_RADIUS) / 2.0,
		_ => MIN_RADIUS,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn no_values_means_no_range_and_base_radius() {
		assert_eq!(ValueRange::of([None, None]), None);
		assert_eq!(radius_for(None, None), MIN_RADIUS);
		assert_eq!(radius_for(Some(3.0), None), MIN_RADIUS);
	}

	#[test]
	fn range_spans_observed_values() {
		let range = ValueRange::of([Some(2.0), None, Some(8.0), Some(5.0)]).unwrap();
		assert_eq!(range.min, 2.0);
		assert_eq!(range.max, 8.0);
	}

	#[test]
	fn radius_interpolates_between_bounds() {
		let range = ValueRange::of([Some(0.0), Some(10.0)]);
		assert_eq!(radius_for(Some(0.0), range), MIN_RADIUS);
		assert_eq!(radius_for(Some(10.0), range), MAX_RADIUS);
		assert_eq!(
			radius_for(Some(5.0), range),
			(MIN_RADIUS + MAX_RADIUS) / 2.0
		);
	}

	#[test]
	fn degenerate_range_uses_midpoint() {
		let range = ValueRange::of([Some(4.0), Some(4.0)]);
		assert_eq!(radius_for(Some(4.0), range), (MIN_RADIUS + MAX_RADIUS) / 2.0);
	}

	#[test]
	fn out_of_range_values_are_clamped() {
		let range = ValueRange::of([Some(0.0), Some(10.0)]);
		assert_eq!(radius_for(Some(-5.0), range), MIN_RADIUS);
		assert_eq!(radius_for(Some(50.0), range), MAX_RADIUS);
	}
}
