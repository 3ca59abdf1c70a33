use thiserror::Error;

use pupcal_core::CoreError;
use pupcal_i18n::I18nError;
use pupcal_ics::IcsError;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    I18n(#[from] I18nError),

    #[error("calendar output: {0}")]
    Ics(#[from] IcsError),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
