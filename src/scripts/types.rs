//! Общие типы fixture-скриптов.

use std::fmt;

/// Потоки вывода скрипта.
pub(crate) struct IoStreams<'a> {
    /// Поток stdout скрипта.
    pub(crate) stdout: &'a mut dyn std::io::Write,
    /// Поток stderr скрипта.
    pub(crate) stderr: &'a mut dyn std::io::Write,
}

/// Ошибки fixture-скриптов.
#[derive(Debug)]
pub(crate) enum ScriptError {
    /// Ошибка записи в поток вывода.
    Io(std::io::Error),
    /// Не удалось определить текущий рабочий каталог.
    CurrentDir(std::io::Error),
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::Io(e) => write!(f, "I/O error: {e}"),
            ScriptError::CurrentDir(e) => write!(f, "cannot read current directory: {e}"),
        }
    }
}

impl std::error::Error for ScriptError {}

/// Удобный alias для результатов функций скриптов.
pub(crate) type ScriptResult<T> = Result<T, ScriptError>;
