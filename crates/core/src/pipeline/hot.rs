use crate::error::{LoaderError, Result};
use std::path::Path;
use weave_api::{CompileOptions, Compiled, HotInstrumentor, HotOptions, HotRequest};

/// Stable module id: the resource relative to `working_dir`, as a JSON string.
///
/// A relative `working_dir` is taken from the current directory.
pub fn module_id(filename: &Path, working_dir: &Path) -> Result<String> {
    let base = if working_dir.is_relative() {
        std::env::current_dir()?.join(working_dir)
    } else {
        working_dir.to_path_buf()
    };
    let relative =
        pathdiff::diff_paths(filename, &base).unwrap_or_else(|| filename.to_path_buf());
    Ok(serde_json::to_string(&relative.to_string_lossy())?)
}

/// Replace the compiled code with its instrumented form. The map is kept as is.
pub(crate) fn instrument(
    instrumentor: &dyn HotInstrumentor,
    working_dir: &Path,
    compiled: &Compiled,
    source: &str,
    compile_options: &CompileOptions,
    hot_options: &HotOptions,
) -> Result<String> {
    let id = module_id(Path::new(&compile_options.filename), working_dir)?;
    tracing::debug!("instrumenting {} for hot reload", id);
    instrumentor
        .make_hot(HotRequest {
            id: &id,
            code: &compiled.js.code,
            options: hot_options,
            compiled,
            source,
            compile_options,
        })
        .map_err(|err| LoaderError::compile(&err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_id_is_relative_and_quoted() {
        let id = module_id(Path::new("/work/app/src/App.txt"), Path::new("/work/app")).unwrap();
        assert_eq!(id, r#""src/App.txt""#);
    }

    #[test]
    fn test_module_id_relative_working_dir_uses_current_dir() {
        let filename = std::env::current_dir().unwrap().join("src").join("App.txt");
        let id = module_id(&filename, Path::new(".")).unwrap();
        assert_eq!(id, r#""src/App.txt""#);
    }

    #[test]
    fn test_module_id_outside_working_dir() {
        let id = module_id(Path::new("/work/lib/Button.txt"), Path::new("/work/app")).unwrap();
        assert_eq!(id, r#""../lib/Button.txt""#);
    }
}
