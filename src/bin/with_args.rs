//! Бинарник `with-args`.
//!
//! Аргументы снимаются с argv напрямую, без clap: отчет обязан печатать
//! их дословно, а clap съедает первый литеральный `--` как разделитель.

fn main() {
    let mut argv = std::env::args();
    let script_name = argv.next().unwrap_or_else(|| "with-args".to_string());
    let args: Vec<String> = argv.collect();

    let code = script_fixtures::scripts::run_with_args(
        &script_name,
        &args,
        std::io::stdout(),
        std::io::stderr(),
    );
    std::process::exit(code);
}
