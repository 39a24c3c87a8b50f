//! Wall clock sampling for the clock hands on the desk.

use chrono::Timelike;

/// A local time of day, sampled once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl ClockTime {
    /// Creates a clock time. Values are wrapped into their usual ranges.
    pub fn new(hour: u32, minute: u32, second: u32) -> Self {
        Self {
            hour: hour % 24,
            minute: minute % 60,
            second: second % 60,
        }
    }

    /// Samples the local time of the machine.
    pub fn now() -> Self {
        Self::from_timelike(&chrono::Local::now())
    }

    /// Reads the hour, minute and second of any chrono time value.
    pub fn from_timelike<T: Timelike>(time: &T) -> Self {
        Self::new(time.hour(), time.minute(), time.second())
    }

    /// Angle of the hour hand in degrees. Negative values turn clockwise when seen from +Z.
    pub fn hour_angle(&self) -> f32 {
        -(((self.hour % 12) as f32) + self.minute as f32 / 60.0) * 30.0
    }

    /// Angle of the minute hand in degrees.
    pub fn minute_angle(&self) -> f32 {
        -(self.minute as f32) * 6.0
    }

    /// Angle of the second hand in degrees.
    pub fn second_angle(&self) -> f32 {
        -(self.second as f32) * 6.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midnight_angles_are_zero() {
        let time = ClockTime::new(0, 0, 0);
        assert_eq!(time.hour_angle(), 0.0);
        assert_eq!(time.minute_angle(), 0.0);
        assert_eq!(time.second_angle(), 0.0);
    }

    #[test]
    fn test_hour_hand_advances_with_minutes() {
        let time = ClockTime::new(15, 30, 0);
        assert_eq!(time.hour_angle(), -105.0);
        assert_eq!(time.minute_angle(), -180.0);
    }

    #[test]
    fn test_afternoon_wraps_to_twelve_hours() {
        assert_eq!(
            ClockTime::new(13, 0, 0).hour_angle(),
            ClockTime::new(1, 0, 0).hour_angle()
        );
    }

    #[test]
    fn test_second_hand() {
        assert_eq!(ClockTime::new(9, 0, 45).second_angle(), -270.0);
    }

    #[test]
    fn test_from_naive_time() {
        let naive = chrono::NaiveTime::from_hms_opt(22, 17, 5).unwrap();
        assert_eq!(ClockTime::from_timelike(&naive), ClockTime::new(22, 17, 5));
    }
}
