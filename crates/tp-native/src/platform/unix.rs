use libloading::Library;
use libloading::os::unix;
use std::path::Path;

/// Open `path`, found in `dir`.
///
/// The ELF and Mach-O loaders have no runtime call to add a search directory,
/// so `dir` is informational here; CoolProp's own dependencies resolve through
/// the usual rpath and `LD_LIBRARY_PATH`/`DYLD_LIBRARY_PATH` rules.
///
/// # Safety
/// Loading runs the library's initialisers.
pub unsafe fn open_in_dir(dir: &Path, path: &Path) -> Result<Library, libloading::Error> {
    tracing::trace!(dir = %dir.display(), "opening with RTLD_NOW | RTLD_GLOBAL");
    unsafe { unix::Library::open(Some(path), unix::RTLD_NOW | unix::RTLD_GLOBAL) }.map(Into::into)
}

/// # Safety
/// Loading runs the library's initialisers.
pub unsafe fn open_default(file: &str) -> Result<Library, libloading::Error> {
    unsafe { unix::Library::open(Some(file), unix::RTLD_NOW | unix::RTLD_GLOBAL) }.map(Into::into)
}
