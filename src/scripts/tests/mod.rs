//! Тесты модуля `scripts`.
//!
//! Здесь лежат unit-тесты отчетов; собранные бинарники проверяются
//! интеграционными тестами в `tests/cli.rs`.

mod simple;
