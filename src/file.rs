pub mod io;

pub use io::{load_file, save_file, save_file_as};
