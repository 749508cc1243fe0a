use libloading::Library;
use libloading::os::windows;
use std::path::Path;

/// Open `path`, found in `dir`, letting the loader resolve CoolProp's own
/// dependencies from `dir` before the default directories.
///
/// # Safety
/// Loading runs the library's initialisers.
pub unsafe fn open_in_dir(dir: &Path, path: &Path) -> Result<Library, libloading::Error> {
    tracing::trace!(dir = %dir.display(), "opening with DLL load-dir search");
    unsafe {
        windows::Library::load_with_flags(
            path,
            windows::LOAD_LIBRARY_SEARCH_DLL_LOAD_DIR | windows::LOAD_LIBRARY_SEARCH_DEFAULT_DIRS,
        )
    }
    .map(Into::into)
}

/// # Safety
/// Loading runs the library's initialisers.
pub unsafe fn open_default(file: &str) -> Result<Library, libloading::Error> {
    unsafe { windows::Library::new(file) }.map(Into::into)
}
