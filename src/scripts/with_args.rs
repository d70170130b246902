//! Отчет скрипта `with-args`: эхо позиционных аргументов.

use super::types::{IoStreams, ScriptError, ScriptResult};

/// Сколько аргументов печатается построчно; остальные только считаются.
const PRINTED_ARGS: usize = 2;

/// Печатает отчет об аргументах вызова.
///
/// Формат: заголовок, имя скрипта, затем `Arg 1`/`Arg 2` (только если
/// соответствующий аргумент передан) и итоговый счетчик `Total args`,
/// который учитывает все аргументы, включая непечатаемые.
pub(crate) fn write_report(
    script_name: &str,
    args: &[String],
    io: &mut IoStreams<'_>,
) -> ScriptResult<()> {
    writeln!(io.stdout, "Script arguments test").map_err(ScriptError::Io)?;
    writeln!(io.stdout, "Script name: {script_name}").map_err(ScriptError::Io)?;

    for (idx, arg) in args.iter().take(PRINTED_ARGS).enumerate() {
        writeln!(io.stdout, "Arg {}: {arg}", idx + 1).map_err(ScriptError::Io)?;
    }

    writeln!(io.stdout, "Total args: {}", args.len()).map_err(ScriptError::Io)?;
    Ok(())
}
