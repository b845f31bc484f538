//! Source of the current calendar year used by the year upper bound

use chrono::{Datelike, Local};

/// Port supplying the current calendar year
pub trait YearSource {
    /// Current calendar year
    fn current_year(&self) -> i32;
}

/// Reads the year from the local wall-clock date
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl YearSource for SystemClock {
    fn current_year(&self) -> i32 {
        Local::now().year()
    }
}

/// Always reports the same year
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedYear(pub i32);

impl YearSource for FixedYear {
    fn current_year(&self) -> i32 {
        self.0
    }
}

impl<T: YearSource + ?Sized> YearSource for &T {
    fn current_year(&self) -> i32 {
        (**self).current_year()
    }
}
