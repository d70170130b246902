//! Отчет скрипта `simple`: приветствие, версия и рабочий каталог.

use super::types::{IoStreams, ScriptError, ScriptResult};

/// Полная версия crate, зашитая при сборке.
const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Печатает три строки отчета: приветствие, `major.minor` версии
/// и текущий рабочий каталог.
pub(crate) fn write_report(io: &mut IoStreams<'_>) -> ScriptResult<()> {
    writeln!(io.stdout, "Hello from Rust script").map_err(ScriptError::Io)?;
    writeln!(io.stdout, "Fixture version: {}", major_minor(PKG_VERSION))
        .map_err(ScriptError::Io)?;

    let dir = std::env::current_dir().map_err(ScriptError::CurrentDir)?;
    writeln!(io.stdout, "Current directory: {}", dir.display()).map_err(ScriptError::Io)?;
    Ok(())
}

/// Возвращает первые две компоненты версии `X.Y.Z` как `X.Y`.
///
/// Если компонент меньше двух, строка возвращается целиком.
pub(crate) fn major_minor(version: &str) -> &str {
    match version.match_indices('.').nth(1) {
        Some((idx, _)) => &version[..idx],
        None => version,
    }
}
