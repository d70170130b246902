//! Отчеты fixture-скриптов: `simple` и `with-args`.
//!
//! Логика пишет в переданные потоки, поэтому тесты подставляют `Vec<u8>`
//! вместо реальных stdout/stderr. Бинарники из `src/bin/` — тонкие обертки
//! над `run_simple` и `run_with_args`.

mod simple;
mod types;
mod with_args;

#[cfg(test)]
mod tests;

use types::IoStreams;

/// Печатает отчет скрипта `simple` в заданные потоки.
///
/// Возвращает код возврата процесса: 0 при успехе, 1 при ошибке вывода.
pub fn run_simple<W1: std::io::Write, W2: std::io::Write>(mut output: W1, mut error: W2) -> i32 {
    let mut io = IoStreams {
        stdout: &mut output,
        stderr: &mut error,
    };

    match simple::write_report(&mut io) {
        Ok(()) => 0,
        Err(e) => {
            let _ = writeln!(io.stderr, "{e}");
            1
        }
    }
}

/// Печатает отчет скрипта `with-args` в заданные потоки.
///
/// `script_name` — нулевой элемент argv процесса, `args` — позиционные
/// аргументы без него. Возвращает код возврата процесса.
pub fn run_with_args<W1: std::io::Write, W2: std::io::Write>(
    script_name: &str,
    args: &[String],
    mut output: W1,
    mut error: W2,
) -> i32 {
    let mut io = IoStreams {
        stdout: &mut output,
        stderr: &mut error,
    };

    match with_args::write_report(script_name, args, &mut io) {
        Ok(()) => 0,
        Err(e) => {
            let _ = writeln!(io.stderr, "{e}");
            1
        }
    }
}
