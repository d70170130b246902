//! Бинарник `simple`.

use clap::Parser;

/// Fixture-скрипт: приветствие, версия и текущий каталог.
///
/// Флаги help/version отключены: внешний раннер может передавать любые
/// аргументы, и все они принимаются и игнорируются, как в оригинале.
#[derive(Parser)]
#[command(name = "simple", disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    _rest: Vec<String>,
}

fn main() {
    let _cli = Cli::parse();
    let code = script_fixtures::scripts::run_simple(std::io::stdout(), std::io::stderr());
    std::process::exit(code);
}
