//! Детерминированные fixture-скрипты для внешнего тестового раннера.
//!
//! Контракт каждого скрипта — строки на stdout и код возврата процесса,
//! ничего больше: ни чтения файлов, ни побочных эффектов.

pub mod scripts;
