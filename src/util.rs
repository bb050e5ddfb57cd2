pub use search::*;

use {
    memmap::Mmap,
    std::{
        fs::File,
        io::{Error as IoError, ErrorKind, Result as IoResult},
        str::{from_utf8, Utf8Error},
    },
};

mod search;

/// Opens a memory-mapped UTF-8 file at a specified path, and passes a `&str` over the file to a
/// provided callback function
///
/// # Errors
///
/// This function returns a `Result::Err`-wrapped `std::io::Error` if `File::open` fails, if
/// `Mmap::map` fails, or if the file is not valid UTF-8. `f` is only executed *iff* an error is
/// not encountered.
///
/// # Safety
///
/// This function uses `Mmap::map`, which is an unsafe function: there is no guarantee that an
/// external process won't modify the file while it is referred to as an immutable string slice,
/// which would be UB.
pub unsafe fn open_utf8_file<T, F: FnOnce(&str) -> T>(file_path: &str, f: F) -> IoResult<T> {
    let file: File = File::open(file_path)?;

    // SAFETY: This operation is unsafe
    let mmap: Mmap = Mmap::map(&file)?;
    let bytes: &[u8] = &mmap;
    let utf8_str: &str = from_utf8(bytes).map_err(|utf8_error: Utf8Error| -> IoError {
        IoError::new(ErrorKind::InvalidData, utf8_error)
    })?;

    Ok(f(utf8_str))
}
