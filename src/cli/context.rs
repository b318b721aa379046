use chrono::{Local, NaiveDate};

use crate::config::Config;

pub struct CliContext {
    pub config: Config,
}

impl CliContext {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn window_days(&self) -> i64 {
        self.config.birthday_window_days
    }

    pub fn today() -> NaiveDate {
        Local::now().date_naive()
    }
}
